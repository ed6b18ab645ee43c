//! `cuit check`: validate identifiers given as arguments.

use anyhow::Result;

use cuit::batch::{BatchReport, Verdict};
use cuit::config::OutputFormat;
use cuit::formatters;

use super::Context;

/// Returns whether every identifier was valid.
pub fn cmd_check(
    ctx: &Context,
    cuits: &[String],
    explain: bool,
    format: Option<OutputFormat>,
) -> Result<bool> {
    let format = ctx.format(format);
    let explain = explain || ctx.config.output.explain;

    let verdicts: Vec<Verdict> = cuits
        .iter()
        .enumerate()
        .map(|(idx, input)| Verdict::new(idx + 1, input.as_str()))
        .collect();
    let report = BatchReport::from_verdicts(verdicts);

    match format {
        OutputFormat::Json => println!(
            "{}",
            formatters::format_report_json(&report, ctx.quiet)?
        ),
        OutputFormat::Text => {
            for verdict in &report.verdicts {
                if ctx.quiet && verdict.is_valid() {
                    continue;
                }
                println!("{}", formatters::format_verdict(verdict, explain));
            }
        }
    }

    Ok(report.all_valid())
}
