//! `cuit batch`: validate one identifier per line from a file or stdin.

use anyhow::Result;
use std::path::Path;

use cuit::batch::{self, BatchOptions};
use cuit::config::OutputFormat;
use cuit::formatters;

use super::Context;

/// Command line overrides for a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchFlags {
    pub explain: bool,
    pub format: Option<OutputFormat>,
    pub only_invalid: bool,
    pub no_skip_comments: bool,
}

/// Returns whether every checked line was valid.
pub fn cmd_batch(ctx: &Context, file: Option<&Path>, flags: BatchFlags) -> Result<bool> {
    let format = ctx.format(flags.format);
    let out = ctx.output(format);
    let explain = flags.explain || ctx.config.output.explain;
    let only_invalid = flags.only_invalid || ctx.config.batch.only_invalid || ctx.quiet;

    let mut options = BatchOptions::from(&ctx.config.batch);
    if flags.no_skip_comments {
        options.skip_comments = false;
    }

    match file {
        Some(path) if path != Path::new("-") => {
            out.step(&format!("Checking {}", path.display()))
        }
        _ => out.step("Checking identifiers from stdin"),
    }

    let report = batch::check_path(file, &options)?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            formatters::format_report_json(&report, only_invalid)?
        ),
        OutputFormat::Text => println!(
            "{}",
            formatters::format_report(&report, only_invalid, explain)
        ),
    }

    if report.summary.total == 0 {
        out.warn("No identifiers found in input");
    } else if report.all_valid() {
        out.success(&format!("All {} identifiers are valid", report.summary.total));
    } else {
        out.error(&format!(
            "{} of {} identifiers are invalid",
            report.summary.invalid, report.summary.total
        ));
        for verdict in report.invalid() {
            out.detail(&format!("line {}", verdict.line));
        }
    }

    Ok(report.all_valid())
}
