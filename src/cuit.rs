//! CUIT parsing and validation.
//!
//! A CUIT is written `DD-DDDDDDDD-D`: a two digit type prefix, the eight digit
//! document number and a trailing check digit. Only prefixes starting with `2`
//! (physical persons) or `3` (juridical entities) are accepted.
//!
//! ```
//! use cuit::{validate_cuit, Cuit};
//!
//! assert!(validate_cuit("20-12345674-3"));
//! assert!(validate_cuit(" 20123456743 "));
//! assert!(!validate_cuit("20-12345674-5"));
//!
//! let cuit: Cuit = "20123456743".parse().unwrap();
//! assert_eq!(cuit.to_string(), "20-12345674-3");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::check_digit::expected_check_digit;

/// Separated form: prefix, document, check digit. ASCII digits only.
const CUIT_PATTERN: &str = r"^[23][0-9]-[0-9]{8}-[0-9]$";

fn cuit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CUIT_PATTERN).expect("CUIT pattern is a valid regex"))
}

/// Why a candidate string is not a valid CUIT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuitError {
    /// Does not start with `2` or `3` (includes empty input).
    BadPrefix,
    /// Not shaped like `DD-DDDDDDDD-D` or 11 bare digits.
    PatternMismatch,
    /// Well formed, but the trailing digit does not match the checksum.
    CheckDigitMismatch { expected: u8, found: u8 },
}

impl fmt::Display for CuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuitError::BadPrefix => write!(f, "must start with 2 or 3"),
            CuitError::PatternMismatch => {
                write!(f, "expected format XX-XXXXXXXX-X or 11 digits")
            }
            CuitError::CheckDigitMismatch { expected, found } => write!(
                f,
                "check digit mismatch: expected {}, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for CuitError {}

impl CuitError {
    /// Short machine-friendly code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            CuitError::BadPrefix => "bad_prefix",
            CuitError::PatternMismatch => "pattern_mismatch",
            CuitError::CheckDigitMismatch { .. } => "check_digit_mismatch",
        }
    }
}

/// Class of taxpayer, derived from the first prefix digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CuitKind {
    Physical,
    Juridical,
}

impl fmt::Display for CuitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Juridical => write!(f, "juridical"),
        }
    }
}

/// A CUIT whose structure and check digit have been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cuit {
    digits: [u8; 11],
}

impl Cuit {
    /// Parse and verify a candidate identifier.
    ///
    /// Surrounding whitespace is ignored, and 11 bare digits are treated the
    /// same as the separated form.
    pub fn parse(input: &str) -> Result<Self, CuitError> {
        let cuit = normalize(input);

        if !cuit.starts_with('2') && !cuit.starts_with('3') {
            return Err(CuitError::BadPrefix);
        }
        if !cuit_regex().is_match(&cuit) {
            return Err(CuitError::PatternMismatch);
        }

        let mut digits = [0u8; 11];
        for (slot, b) in digits
            .iter_mut()
            .zip(cuit.bytes().filter(|b| *b != b'-'))
        {
            *slot = b - b'0';
        }

        let mut base = [0u8; 10];
        base.copy_from_slice(&digits[..10]);
        let expected = expected_check_digit(&base);
        let found = digits[10];
        if expected != found {
            return Err(CuitError::CheckDigitMismatch { expected, found });
        }

        Ok(Self { digits })
    }

    /// All eleven digits, in order.
    pub fn digits(&self) -> [u8; 11] {
        self.digits
    }

    /// Two digit type prefix, e.g. `20` or `30`.
    pub fn prefix(&self) -> u8 {
        self.digits[0] * 10 + self.digits[1]
    }

    /// The eight digit document number.
    pub fn document(&self) -> u32 {
        self.digits[2..10]
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(*d))
    }

    pub fn check_digit(&self) -> u8 {
        self.digits[10]
    }

    pub fn kind(&self) -> CuitKind {
        if self.digits[0] == 3 {
            CuitKind::Juridical
        } else {
            CuitKind::Physical
        }
    }
}

impl fmt::Display for Cuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.digits;
        write!(f, "{}{}-", d[0], d[1])?;
        for digit in &d[2..10] {
            write!(f, "{}", digit)?;
        }
        write!(f, "-{}", d[10])
    }
}

impl FromStr for Cuit {
    type Err = CuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cuit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cuit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Cuit::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Trim the input and insert separators into a bare 11 digit string.
///
/// Anything else is returned trimmed but otherwise untouched.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.len() == 11 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &trimmed[..2], &trimmed[2..10], &trimmed[10..])
    } else {
        trimmed.to_string()
    }
}

/// Whether `input` is a structurally and arithmetically valid CUIT.
///
/// Never panics; every malformed input is simply `false`.
pub fn validate_cuit(input: &str) -> bool {
    Cuit::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_inserts_separators() {
        assert_eq!(normalize("20123456743"), "20-12345674-3");
        assert_eq!(normalize("  20123456743\t"), "20-12345674-3");
    }

    #[test]
    fn test_normalize_leaves_other_shapes_alone() {
        assert_eq!(normalize(" 20-12345674-3 "), "20-12345674-3");
        assert_eq!(normalize("2012345674"), "2012345674");
        assert_eq!(normalize("201234567435"), "201234567435");
        assert_eq!(normalize("2a123456743"), "2a123456743");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_parse_reports_bad_prefix_first() {
        assert_eq!(Cuit::parse(""), Err(CuitError::BadPrefix));
        assert_eq!(Cuit::parse("10123456743"), Err(CuitError::BadPrefix));
        assert_eq!(Cuit::parse("10-12345674-3"), Err(CuitError::BadPrefix));
        assert_eq!(Cuit::parse("-20-12345674-3"), Err(CuitError::BadPrefix));
    }

    #[test]
    fn test_parse_reports_pattern_mismatch() {
        for input in [
            "20-1234567-3",
            "20-12345674",
            "2012345674",
            "201234567435",
            "2a123456743",
            "2a-12345674-3",
            "20-12345674-3\n5",
            "20_12345674_3",
            "20-12345674-3x",
        ] {
            assert_eq!(
                Cuit::parse(input),
                Err(CuitError::PatternMismatch),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits after an ASCII prefix
        assert_eq!(
            Cuit::parse("2٠-١٢٣٤٥٦٧٤-٣"),
            Err(CuitError::PatternMismatch)
        );
    }

    #[test]
    fn test_parse_reports_check_digit_mismatch() {
        assert_eq!(
            Cuit::parse("20-12345674-5"),
            Err(CuitError::CheckDigitMismatch {
                expected: 3,
                found: 5
            })
        );
        assert_eq!(
            Cuit::parse("30-12345674-7"),
            Err(CuitError::CheckDigitMismatch {
                expected: 9,
                found: 7
            })
        );
    }

    #[test]
    fn test_accessors() {
        let cuit = Cuit::parse("30-12345674-9").unwrap();
        assert_eq!(cuit.prefix(), 30);
        assert_eq!(cuit.document(), 12345674);
        assert_eq!(cuit.check_digit(), 9);
        assert_eq!(cuit.kind(), CuitKind::Juridical);
        assert_eq!(cuit.digits(), [3, 0, 1, 2, 3, 4, 5, 6, 7, 4, 9]);

        let cuit = Cuit::parse("20123456743").unwrap();
        assert_eq!(cuit.kind(), CuitKind::Physical);
    }

    #[test]
    fn test_display_is_canonical_and_reparses() {
        let cuit: Cuit = " 34500045339 ".parse().unwrap();
        assert_eq!(cuit.to_string(), "34-50004533-9");
        assert_eq!(Cuit::parse(&cuit.to_string()), Ok(cuit));
    }

    #[test]
    fn test_leading_zeros_in_document_are_kept() {
        // 2*5 + 7*2 = 24, 24 % 11 = 2 -> 9
        let cuit = Cuit::parse("20-00000007-9").unwrap();
        assert_eq!(cuit.document(), 7);
        assert_eq!(cuit.to_string(), "20-00000007-9");
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let cuit = Cuit::parse("20123456743").unwrap();
        let json = serde_json::to_string(&cuit).unwrap();
        assert_eq!(json, "\"20-12345674-3\"");

        let back: Cuit = serde_json::from_str("\"20123456743\"").unwrap();
        assert_eq!(back, cuit);
        assert!(serde_json::from_str::<Cuit>("\"20-12345674-5\"").is_err());
    }

    #[test]
    fn test_error_codes_and_messages() {
        assert_eq!(CuitError::BadPrefix.code(), "bad_prefix");
        assert_eq!(CuitError::PatternMismatch.code(), "pattern_mismatch");
        let mismatch = CuitError::CheckDigitMismatch {
            expected: 3,
            found: 5,
        };
        assert_eq!(mismatch.code(), "check_digit_mismatch");
        assert_eq!(
            mismatch.to_string(),
            "check digit mismatch: expected 3, found 5"
        );
    }
}
