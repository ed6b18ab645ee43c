//! Line-oriented batch checking.
//!
//! Reads one candidate per line and records a verdict for each. Blank lines
//! are always skipped; comment lines are skipped when enabled in
//! [`BatchOptions`].

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::BatchConfig;
use crate::cuit::{Cuit, CuitError};

/// Knobs for [`check_reader`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub skip_comments: bool,
    pub comment_prefix: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            skip_comments: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl From<&BatchConfig> for BatchOptions {
    fn from(config: &BatchConfig) -> Self {
        Self {
            skip_comments: config.skip_comments,
            comment_prefix: config.comment_prefix.clone(),
        }
    }
}

/// Verdict for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// 1-based line number, or argument position for `cuit check`
    pub line: usize,
    /// Candidate exactly as read, minus the line terminator
    pub input: String,
    pub result: Result<Cuit, CuitError>,
}

impl Verdict {
    pub fn new(line: usize, input: impl Into<String>) -> Self {
        let input = input.into();
        let result = Cuit::parse(&input);
        Self {
            line,
            input,
            result,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn reason(&self) -> Option<CuitError> {
        self.result.err()
    }
}

/// Totals for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
}

/// All verdicts of a batch run plus totals.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub verdicts: Vec<Verdict>,
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Build a report from already-computed verdicts.
    pub fn from_verdicts(verdicts: Vec<Verdict>) -> Self {
        let mut report = Self::default();
        for verdict in verdicts {
            report.push(verdict);
        }
        report
    }

    fn push(&mut self, verdict: Verdict) {
        self.summary.total += 1;
        if verdict.is_valid() {
            self.summary.valid += 1;
        } else {
            self.summary.invalid += 1;
        }
        self.verdicts.push(verdict);
    }

    pub fn all_valid(&self) -> bool {
        self.summary.invalid == 0
    }

    pub fn invalid(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.is_valid())
    }
}

/// Check every candidate line from `reader`.
///
/// Lines that are not valid UTF-8 are decoded lossily and then checked like
/// any other line, so a stray Latin-1 byte yields an invalid verdict instead
/// of aborting the run.
pub fn check_reader<R: BufRead>(reader: R, options: &BatchOptions) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.with_context(|| format!("Failed to read line {}", idx + 1))?;
        let line = String::from_utf8_lossy(&raw);
        let candidate = line.trim_end_matches('\r');

        if candidate.trim().is_empty() {
            report.summary.skipped += 1;
            continue;
        }
        if options.skip_comments
            && !options.comment_prefix.is_empty()
            && candidate.trim_start().starts_with(&options.comment_prefix)
        {
            report.summary.skipped += 1;
            continue;
        }

        report.push(Verdict::new(idx + 1, candidate));
    }

    Ok(report)
}

/// Check a file, or stdin when `path` is `None` or `-`.
pub fn check_path(path: Option<&Path>, options: &BatchOptions) -> Result<BatchReport> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file =
                File::open(p).with_context(|| format!("Failed to open {}", p.display()))?;
            check_reader(BufReader::new(file), options)
        }
        _ => check_reader(io::stdin().lock(), options),
    }
}
