//! Weighted modulo-11 check digit used by CUIT identifiers.
//!
//! The first ten digits of a CUIT are multiplied positionally by
//! [`COEFFICIENTS`] and summed. The remainder of that sum modulo 11 decides
//! the trailing digit: remainders 0 and 1 are used as-is, anything else is
//! subtracted from 11.

use anyhow::{anyhow, bail, Result};

/// Positional multipliers applied to the ten computation digits.
pub const COEFFICIENTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Sum of each base digit times its coefficient.
pub fn weighted_sum(base: &[u8; 10]) -> u32 {
    base.iter()
        .zip(COEFFICIENTS.iter())
        .map(|(digit, coef)| u32::from(*digit) * coef)
        .sum()
}

/// Check digit expected for the given ten computation digits.
pub fn expected_check_digit(base: &[u8; 10]) -> u8 {
    let remainder = weighted_sum(base) % 11;
    let digit = if remainder < 2 {
        remainder
    } else {
        11 - remainder
    };
    digit as u8
}

/// Compute the check digit for a ten digit base.
///
/// Accepts the bare form (`2012345674`) or the separated form (`20-12345674`),
/// with surrounding whitespace. The base must start with `2` or `3`.
pub fn check_digit_for(base: &str) -> Result<u8> {
    let digits = parse_base(base)?;
    Ok(expected_check_digit(&digits))
}

/// Parse a ten digit computation base into its digits.
pub fn parse_base(base: &str) -> Result<[u8; 10]> {
    let trimmed = base.trim();
    let bare: String = match trimmed.split_once('-') {
        Some((prefix, document)) if prefix.len() == 2 && document.len() == 8 => {
            format!("{}{}", prefix, document)
        }
        Some(_) => bail!(
            "Invalid base '{}': expected XX-XXXXXXXX or 10 digits",
            trimmed
        ),
        None => trimmed.to_string(),
    };

    if bare.len() != 10 || !bare.bytes().all(|b| b.is_ascii_digit()) {
        bail!(
            "Invalid base '{}': expected exactly 10 digits, got '{}'",
            trimmed,
            bare
        );
    }
    if !bare.starts_with('2') && !bare.starts_with('3') {
        return Err(anyhow!(
            "Invalid base '{}': CUIT must start with 2 or 3",
            trimmed
        ));
    }

    let mut digits = [0u8; 10];
    for (slot, b) in digits.iter_mut().zip(bare.bytes()) {
        *slot = b - b'0';
    }
    Ok(digits)
}
