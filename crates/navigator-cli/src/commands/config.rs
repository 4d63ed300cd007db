//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::{Config, PipelineOverrides};
use crate::error::{CliError, Result};

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config) -> Result<()> {
    print!("{}", render_pipeline(args, config)?);
    Ok(())
}

/// Effective pipeline settings as TOML.
pub fn render_pipeline(args: ConfigArgs, config: &Config) -> Result<String> {
    let pipeline = config.effective_pipeline(args.preset, &PipelineOverrides::default())?;
    pipeline.to_toml().map_err(CliError::Config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PresetArg;
    use navigator_extractor::PipelineConfig;

    #[test]
    fn test_render_default() {
        let rendered = render_pipeline(ConfigArgs { preset: None }, &Config::default()).unwrap();
        assert!(rendered.contains("mention_threshold = 1"));
        assert!(rendered.contains("[relationship_vocabulary]"));
    }

    #[test]
    fn test_render_preset_round_trips() {
        let rendered = render_pipeline(
            ConfigArgs {
                preset: Some(PresetArg::Strict),
            },
            &Config::default(),
        )
        .unwrap();
        let parsed = PipelineConfig::from_toml(&rendered).unwrap();
        assert_eq!(parsed, PipelineConfig::strict());
    }
}
