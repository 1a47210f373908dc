//! # sentmd-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and re-exports the config file
//! structures from `sentmd-settings`.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Shell enum for completions
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations
//! * Merging CLI values with config files (the binary does that)
//!
//! Every flag that can also come from `sentmd.toml` is an `Option`, so the
//! binary can tell "not given" apart from "given the default value".

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use sentmd_settings::{
    ExportConfig, ReportConfig, ResourcesConfig, ScanConfig, TomlConfig,
};
pub use sentmd_types::{ExportFormat, ReportFormat};

/// `sentmd` scores a line-delimited corpus with a weighted word lexicon and
/// reports the overall sentiment.
#[derive(Parser, Debug)]
#[command(name = "sentmd", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable progress spinners.
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Config file to use instead of `./sentmd.toml` or the user config dir.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Score a corpus and print the aggregate report.
    Analyze(CliAnalyzeArgs),

    /// Score a corpus and write one row per analyzed record.
    Export(CliExportArgs),

    /// Score each argument and print the clamped scores.
    Score(ScoreArgs),

    /// Show how a text is tokenized and scored.
    Explain(ExplainArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Lexicon and stop-word file flags shared by corpus commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// Lexicon TSV (word, weight). Default: `vader_lexicon.txt`.
    #[arg(long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Stop-word list, one per line. Default: `SmartStoplist.txt`.
    #[arg(long, value_name = "PATH")]
    pub stopwords: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliAnalyzeArgs {
    /// Corpus file (one message per line), or `-` for stdin.
    #[arg(value_name = "CORPUS", default_value = "-")]
    pub corpus: PathBuf,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Source label for every record. Default: the corpus file stem.
    #[arg(long)]
    pub label: Option<String>,

    /// Longest message text shown in the report, in characters.
    #[arg(long, value_name = "N")]
    pub display_cap: Option<usize>,

    /// Log a progress checkpoint every N analyzed records (0 disables).
    #[arg(long, value_name = "N")]
    pub progress_every: Option<usize>,

    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliExportArgs {
    /// Corpus file (one message per line), or `-` for stdin.
    #[arg(value_name = "CORPUS", default_value = "-")]
    pub corpus: PathBuf,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Source label for every record. Default: the corpus file stem.
    #[arg(long)]
    pub label: Option<String>,

    /// Output format [default: tsv].
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Texts to score.
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Print JSON instead of `score<TAB>text` lines.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Text to trace.
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Print the trace as JSON instead of a Markdown table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}
