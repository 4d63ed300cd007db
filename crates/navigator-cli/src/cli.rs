//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Navigator CLI - Extract character profiles from EPUB files.
#[derive(Debug, Parser)]
#[command(name = "navigator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// Named pipeline presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Every chapter, more than one mention, five traits
    Default,
    /// Capped chapters and characters, noise words filtered
    Strict,
    /// Eight traits per character
    Lenient,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze an EPUB and print character profiles
    Analyze(AnalyzeArgs),

    /// Print the effective pipeline configuration as TOML
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Path to the EPUB file
    pub file: PathBuf,

    /// Start from a preset instead of the configured pipeline
    #[arg(short, long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Use only the first N chapters (0 = all)
    #[arg(long)]
    pub chapter_limit: Option<usize>,

    /// Characters need more mentions than this
    #[arg(short = 't', long)]
    pub mention_threshold: Option<usize>,

    /// Traits shown per character
    #[arg(long)]
    pub max_traits: Option<usize>,

    /// Characters shown (0 = all)
    #[arg(long)]
    pub max_characters: Option<usize>,

    /// Adjective to ignore (repeatable)
    #[arg(long = "noise-word", value_name = "WORD")]
    pub noise_words: Vec<String>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Print a preset instead of the configured pipeline
    #[arg(short, long, value_enum)]
    pub preset: Option<PresetArg>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<PresetArg> for navigator_extractor::PipelineConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => navigator_extractor::PipelineConfig::default(),
            PresetArg::Strict => navigator_extractor::PipelineConfig::strict(),
            PresetArg::Lenient => navigator_extractor::PipelineConfig::lenient(),
        }
    }
}
