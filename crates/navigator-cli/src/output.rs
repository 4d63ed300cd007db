//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use navigator_extractor::{PipelineStats, Profile};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format character profiles.
    pub fn format_profiles(&self, profiles: &[Profile]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_profiles_json(profiles),
            OutputFormat::Table => Ok(self.format_profiles_table(profiles)),
        }
    }

    /// Same shape as the HTTP response body.
    fn format_profiles_json(&self, profiles: &[Profile]) -> Result<String> {
        let body = serde_json::json!({ "characters": profiles });
        Ok(serde_json::to_string_pretty(&body)?)
    }

    fn format_profiles_table(&self, profiles: &[Profile]) -> String {
        if profiles.is_empty() {
            return self.colorize("No characters found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Character", "Traits"]);

        for (rank, profile) in profiles.iter().enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                profile.name.clone(),
                profile.traits.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// One-line summary of a run.
    pub fn summary(&self, profiles: usize, stats: &PipelineStats) -> String {
        self.info(&format!(
            "{} character(s) from {} chapter(s), {} chars of text, {} ms",
            profiles, stats.chapter_count, stats.corpus_length, stats.processing_time_ms
        ))
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
