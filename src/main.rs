//! CLI entry point and command handlers for cuit.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use cuit::config::OutputFormat;

#[derive(Parser)]
#[command(name = "cuit")]
#[command(version)]
#[command(about = "Validate Argentine tax identifiers (CUIT)", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    cuit check 20-12345674-3        Validate one identifier\n    cuit check --explain 20123456745 Show why an identifier is rejected\n    cuit batch producers.txt         Validate one identifier per line\n    cuit digit 20-12345674           Compute the check digit"
)]
struct Cli {
    /// Only print errors (also CUIT_QUIET=1)
    #[arg(long, short, global = true)]
    quiet: bool,
    /// Use this config file instead of .cuit/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more identifiers given as arguments
    ///
    /// Exits with status 1 when any identifier is invalid.
    Check {
        /// Identifiers, separated (20-12345674-3) or bare (20123456743)
        #[arg(required = true, value_name = "CUIT")]
        cuits: Vec<String>,
        /// Print the reason next to each rejected identifier
        #[arg(long)]
        explain: bool,
        /// Output format (text, json)
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// Validate one identifier per line from a file or stdin
    ///
    /// Blank lines and comment lines are skipped. Exits with status 1 when
    /// any line is invalid.
    Batch {
        /// Input file; omit or use '-' for stdin
        file: Option<PathBuf>,
        /// Print the reason next to each rejected identifier
        #[arg(long)]
        explain: bool,
        /// Output format (text, json)
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        /// Only list invalid lines
        #[arg(long)]
        only_invalid: bool,
        /// Treat comment lines as candidates too
        #[arg(long)]
        no_skip_comments: bool,
    },
    /// Compute the check digit for a 10 digit base (e.g. 20-12345674)
    Digit {
        /// Prefix and document number, separated or bare
        base: String,
    },
    /// Print the canonical XX-XXXXXXXX-X form of a valid identifier
    Format {
        /// Identifier to format
        cuit: String,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let load_context = || cmd::Context::load(cli.config.as_deref(), cli.quiet);

    match cli.command {
        Commands::Check {
            ref cuits,
            explain,
            format,
        } => {
            let ctx = load_context()?;
            exit_on_invalid(cmd::check::cmd_check(&ctx, cuits, explain, format)?)
        }
        Commands::Batch {
            ref file,
            explain,
            format,
            only_invalid,
            no_skip_comments,
        } => {
            let ctx = load_context()?;
            let flags = cmd::batch::BatchFlags {
                explain,
                format,
                only_invalid,
                no_skip_comments,
            };
            exit_on_invalid(cmd::batch::cmd_batch(&ctx, file.as_deref(), flags)?)
        }
        Commands::Digit { ref base } => {
            let ctx = load_context()?;
            cmd::digit::cmd_digit(&ctx, base)
        }
        Commands::Format { ref cuit } => cmd::digit::cmd_format(cuit),
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Exit with status 1 when a check found invalid identifiers.
fn exit_on_invalid(all_valid: bool) -> Result<()> {
    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("cuit {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "cuit", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_format() {
        let cli = Cli::try_parse_from(["cuit", "check", "--format", "json", "20123456743"]).unwrap();
        match cli.command {
            Commands::Check { cuits, format, .. } => {
                assert_eq!(cuits, vec!["20123456743".to_string()]);
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_check_requires_an_identifier() {
        assert!(Cli::try_parse_from(["cuit", "check"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cuit", "check", "--format", "xml", "1"]).is_err());
    }
}
