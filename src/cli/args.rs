//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::integrity::OutputFormat;

/// civic-audit - Integrity checks for civic-transparency data.
#[derive(Debug, Parser)]
#[command(name = "civic-audit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .civic-audit/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run integrity checks (default if no command specified)
    Check(CheckArgs),

    /// List the available integrity checks
    Checks,

    /// Show entity counts reported by the API
    Stats,

    /// Print the JSON Schema of the bundle file format
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Read the bundle from a JSON file instead of the API
    #[arg(short, long, value_name = "FILE")]
    pub bundle: Option<PathBuf>,

    /// Output format (defaults to output.format from config, then human)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Evaluate dates against this instant instead of the current time (RFC 3339)
    #[arg(long, value_name = "RFC3339", value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,

    /// Include unpublished politicians when fetching from the API
    #[arg(long)]
    pub include_drafts: bool,

    /// Treat hints as failures
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_instant(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_all_flags() {
        let cli = Cli::try_parse_from([
            "civic-audit",
            "check",
            "--bundle",
            "data.json",
            "--format",
            "json",
            "--now",
            "2024-06-15T12:00:00Z",
            "--include-drafts",
            "--strict",
        ])
        .unwrap();

        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.bundle, Some(PathBuf::from("data.json")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(
            args.now,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
        );
        assert!(args.include_drafts);
        assert!(args.strict);
    }

    #[test]
    fn now_accepts_offsets() {
        let parsed = parse_instant("2024-06-15T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn rejects_bad_now() {
        let result = Cli::try_parse_from(["civic-audit", "check", "--now", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["civic-audit", "checks", "--quiet", "--no-color"]).unwrap();

        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Checks)));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["civic-audit"]).unwrap();
        assert!(cli.command.is_none());
    }
}
