//! Command-line argument definitions.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// AI-assisted, line-by-line contract risk analysis.
#[derive(Debug, Parser)]
#[command(name = "clauselens", version, about)]
pub struct Cli {
    /// Output format override
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a contract text file line by line
    Analyze(AnalyzeArgs),

    /// Parse an already-generated analysis transcript (offline, no network)
    Extract(ExtractArgs),

    /// Rewrite a clause into professional, enforceable language
    Rewrite(RewriteArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to the contract text file
    pub file: PathBuf,

    /// Contract type for the analysis context
    #[arg(long, default_value = "general commercial contract")]
    pub contract_type: String,

    /// Governing jurisdiction
    #[arg(long, default_value = "United States")]
    pub jurisdiction: String,

    /// Contractor type
    #[arg(long, default_value = "independent contractor")]
    pub contractor_type: String,

    /// Project type
    #[arg(long, default_value = "general services")]
    pub project_type: String,

    /// Which side of the table the user sits on
    #[arg(long, default_value = "contractor")]
    pub user_role: String,

    /// API key (falls back to the config file)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to a saved model transcript (markdown)
    pub file: PathBuf,
}

/// Arguments for the rewrite command.
#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Clause text, or a file path when --from-file is set
    pub clause: String,

    /// Treat the clause argument as a file path
    #[arg(long)]
    pub from_file: bool,

    /// API key (falls back to the config file)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Output format flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Minimal output
    Quiet,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Quiet => OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_command() {
        let cli = Cli::try_parse_from(["clauselens", "extract", "report.md"]).unwrap();
        match cli.command {
            Command::Extract(args) => assert_eq!(args.file.to_str(), Some("report.md")),
            _ => panic!("Expected extract command"),
        }
    }

    #[test]
    fn test_parse_analyze_with_context_flags() {
        let cli = Cli::try_parse_from([
            "clauselens",
            "analyze",
            "contract.txt",
            "--jurisdiction",
            "Ontario, Canada",
            "--user-role",
            "client",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(matches!(cli.format, Some(FormatArg::Json)));
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.jurisdiction, "Ontario, Canada");
                assert_eq!(args.user_role, "client");
                assert_eq!(args.contract_type, "general commercial contract");
            }
            _ => panic!("Expected analyze command"),
        }
    }
}
