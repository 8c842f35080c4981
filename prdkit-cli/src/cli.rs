//! Command-line arguments.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// prdkit - turn business notes into a PRD and score it
#[derive(Parser, Debug)]
#[command(name = "prdkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Model for both stages (overrides PRDKIT_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// OpenAI-compatible API base URL (overrides PRDKIT_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Give up on a model call after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a PRD from notes, optionally scoring it
    Generate(GenerateArgs),
    /// Score an existing PRD JSON file
    Evaluate(EvaluateArgs),
    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Read notes from a file
    #[arg(long, value_name = "PATH", conflicts_with = "notes")]
    pub notes_file: Option<PathBuf>,

    /// Notes given inline
    #[arg(long)]
    pub notes: Option<String>,

    /// Also evaluate the generated PRD
    #[arg(long)]
    pub evaluate: bool,

    /// Skip the input safety checks
    #[arg(long)]
    pub skip_safety: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// PRD JSON file, as written by `generate --out-dir`
    #[arg(long, value_name = "PATH")]
    pub prd_file: PathBuf,

    /// Original notes, shown to the reviewer to spot omissions
    #[arg(long, value_name = "PATH")]
    pub notes_file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write prd.md/prd.json (and evaluation.md/evaluation.json) into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Format for stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "prdkit", "generate", "--notes", "login page", "--evaluate", "--format", "json", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.notes.as_deref(), Some("login page"));
        assert!(args.evaluate);
        assert_eq!(args.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_notes_sources_conflict() {
        let result =
            Cli::try_parse_from(["prdkit", "generate", "--notes", "a", "--notes-file", "b.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::parse_from([
            "prdkit", "evaluate", "--prd-file", "prd.json", "--model", "gpt-4o", "--timeout-secs", "30",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.timeout_secs, Some(30));
    }
}
