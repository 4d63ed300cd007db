//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::{Config, OutputFormat, PipelineOverrides};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use navigator_extractor::{AnalysisReport, Pipeline, PipelineConfig};
use navigator_nlp::RuleEngine;
use std::fs;
use std::path::Path;
use tracing::info;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let pipeline_config = config.effective_pipeline(args.preset, &PipelineOverrides::from(&args))?;
    let report = analyze_file(&args.file, pipeline_config)?;

    println!("{}", formatter.format_profiles(&report.characters)?);
    if formatter.format() == OutputFormat::Table {
        println!("{}", formatter.summary(report.characters.len(), &report.stats));
    }

    Ok(())
}

/// Run the rule-engine pipeline over an EPUB on disk.
pub fn analyze_file(path: &Path, config: PipelineConfig) -> Result<AnalysisReport> {
    let bytes = fs::read(path).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
    })?;
    info!("Analyzing {}", path.display());

    let pipeline = Pipeline::new(RuleEngine::new(), config)?;
    Ok(pipeline.analyze(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_extractor::PipelineError;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_epub(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("book.epub");
        let file = fs::File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer.start_file("META-INF/container.xml", options).unwrap();
        writer
            .write_all(br#"<container><rootfiles><rootfile full-path="content.opf"/></rootfiles></container>"#)
            .unwrap();
        writer.start_file("chapter1.xhtml", options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_epub(
            dir.path(),
            "<p>Alice laughed. Alice was clever and kind. Alice felt brave.</p>",
        );
        let config = PipelineConfig {
            minimum_corpus_length: 10,
            ..PipelineConfig::default()
        };

        let report = analyze_file(&path, config).unwrap();
        assert_eq!(report.characters.len(), 1);
        assert_eq!(report.characters[0].name, "Alice");
    }

    #[test]
    fn test_short_book_reports_pipeline_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_epub(dir.path(), "<p>Nothing here.</p>");

        let result = analyze_file(&path, PipelineConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Pipeline(PipelineError::ContentTooShort { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = analyze_file(&dir.path().join("absent.epub"), PipelineConfig::default());
        match result {
            Err(CliError::InvalidInput(msg)) => assert!(msg.starts_with("Cannot read")),
            other => panic!("expected InvalidInput, got {:?}", other.map(|_| ())),
        }
    }
}
