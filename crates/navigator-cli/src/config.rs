//! Configuration management for the CLI.

use crate::cli::{AnalyzeArgs, PresetArg};
use crate::error::{CliError, Result};
use navigator_extractor::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".navigator").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used when
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.pipeline.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Pipeline settings for one run: preset or file, then flag overrides.
    pub fn effective_pipeline(
        &self,
        preset: Option<PresetArg>,
        overrides: &PipelineOverrides,
    ) -> Result<PipelineConfig> {
        let mut pipeline = match preset {
            Some(preset) => preset.into(),
            None => self.pipeline.clone(),
        };
        overrides.apply(&mut pipeline);
        pipeline.validate().map_err(CliError::InvalidInput)?;
        Ok(pipeline)
    }
}

/// Pipeline values given on the command line
#[derive(Debug, Clone, Default)]
pub struct PipelineOverrides {
    /// Chapter cap
    pub chapter_limit: Option<usize>,
    /// Mention threshold
    pub mention_threshold: Option<usize>,
    /// Traits per character
    pub max_traits: Option<usize>,
    /// Characters returned
    pub max_characters: Option<usize>,
    /// Extra noise words
    pub noise_words: Vec<String>,
}

impl PipelineOverrides {
    /// Copy set values into `pipeline`
    pub fn apply(&self, pipeline: &mut PipelineConfig) {
        if let Some(n) = self.chapter_limit {
            pipeline.chapter_limit = n;
        }
        if let Some(n) = self.mention_threshold {
            pipeline.mention_threshold = n;
        }
        if let Some(n) = self.max_traits {
            pipeline.max_traits_per_character = n;
        }
        if let Some(n) = self.max_characters {
            pipeline.max_characters_returned = n;
        }
        pipeline
            .noise_words
            .extend(self.noise_words.iter().map(|w| w.to_lowercase()));
    }
}

impl From<&AnalyzeArgs> for PipelineOverrides {
    fn from(args: &AnalyzeArgs) -> Self {
        Self {
            chapter_limit: args.chapter_limit,
            mention_threshold: args.mention_threshold,
            max_traits: args.max_traits,
            max_characters: args.max_characters,
            noise_words: args.noise_words.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
