#![forbid(unsafe_code)]
//! Mechanic Notes Command Line Interface

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use mechanic_notes::{execute_generate, GenerateOptions, NoteOutcome};

#[derive(Parser, Debug, Default)]
#[command(name = "generate-mechanic")]
#[command(about = "Write today's random game-mechanic idea note")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Parse arguments, falling back to defaults when they cannot be used.
///
/// The generator has no behavioural parameters, so stray arguments never
/// stop a run. The parse error is handed back for reporting.
fn parse_cli<I, T>(args: I) -> (Cli, Option<clap::Error>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => (cli, None),
        Err(e) => (Cli::default(), Some(e)),
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}

fn main() {
    let (cli, parse_error) = parse_cli(std::env::args_os());

    if let Some(e) = &parse_error {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
    }

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {}", style("!").yellow(), e);
    }

    if let Some(e) = parse_error {
        tracing::warn!("Ignoring arguments ({}), using defaults", e.kind());
    }

    let report = execute_generate(GenerateOptions::default());

    match &report.outcome {
        NoteOutcome::Created => {
            println!("{} Created {}", style("✓").green(), report.path.display());
        }
        NoteOutcome::Skipped => {
            println!(
                "{} Skipped {} (already exists)",
                style("→").cyan(),
                report.path.display()
            );
        }
        NoteOutcome::Failed(reason) => {
            eprintln!("{} Could not write note: {}", style("✗").red(), reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let (cli, err) = parse_cli(["generate-mechanic"]);
        assert!(!cli.verbose);
        assert!(err.is_none());
    }

    #[test]
    fn test_verbose_flag() {
        let (cli, err) = parse_cli(["generate-mechanic", "--verbose"]);
        assert!(cli.verbose);
        assert!(err.is_none());
    }

    #[test]
    fn test_stray_argument_falls_back_to_defaults() {
        let (cli, err) = parse_cli(["generate-mechanic", "extra-arg"]);
        assert!(!cli.verbose);
        assert_eq!(err.unwrap().kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_unknown_flag_falls_back_to_defaults() {
        let (cli, err) = parse_cli(["generate-mechanic", "-v", "--count", "3"]);
        assert!(!cli.verbose);
        assert!(err.is_some());
    }

    #[test]
    fn test_help_is_reported_as_help() {
        let (_, err) = parse_cli(["generate-mechanic", "--help"]);
        assert_eq!(err.unwrap().kind(), ErrorKind::DisplayHelp);
    }
}
