use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use resplint_analyzer::RuleSeverity;

/// CLI arguments for the resplint binary.
#[derive(Parser, Debug)]
#[command(
    name = "resplint",
    version,
    about = "Find response declarations no return path of the handler can produce"
)]
pub struct CliArgs {
    /// Host-model files or directories to analyze. Directories are searched
    /// recursively for `*.json` files.
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to resplint.json. Defaults to `resplint.json` in the current
    /// directory when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with a failure status when any warning is reported.
    #[arg(long = "deny-warnings")]
    pub deny_warnings: bool,

    /// Also analyze methods marked as generated code.
    #[arg(
        long = "analyze-generated-code",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub analyze_generated_code: Option<bool>,

    /// Override the severity of the redundant-declaration rule.
    #[arg(long, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Include glob applied to discovered files (repeatable).
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Exclude glob applied to discovered files (repeatable).
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Number of worker threads (defaults to the number of CPUs).
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Enable color and formatting in the output.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub pretty: Option<bool>,

    /// Print the files that would be analyzed and exit.
    #[arg(long = "list-files")]
    pub list_files: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    Off,
    Suggestion,
    Warning,
    Error,
}

impl From<SeverityArg> for RuleSeverity {
    fn from(value: SeverityArg) -> Self {
        match value {
            SeverityArg::Off => RuleSeverity::Off,
            SeverityArg::Suggestion => RuleSeverity::Suggestion,
            SeverityArg::Warning => RuleSeverity::Warning,
            SeverityArg::Error => RuleSeverity::Error,
        }
    }
}
