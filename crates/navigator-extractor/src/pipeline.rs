//! Pipeline orchestration

use crate::archive::{ensure_viable, ArchiveTextExtractor, ZipArchiveReader};
use crate::collector::CandidateCollector;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::miner::TraitMiner;
use crate::ranker::ProfileRanker;
use crate::types::{AnalysisReport, PipelineStats};
use navigator_domain::traits::{ArchiveReader, NlpEngine};
use navigator_domain::{CandidateSource, RelationshipVocabulary, TextCorpus};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runs archive extraction, candidate collection, trait mining and ranking
///
/// The engine is shared behind an `Arc`, so one pipeline can serve
/// concurrent requests. A run holds no state beyond its own locals.
pub struct Pipeline<E>
where
    E: NlpEngine,
{
    engine: Arc<E>,
    config: PipelineConfig,
    vocabulary: RelationshipVocabulary,
}

impl<E> Pipeline<E>
where
    E: NlpEngine,
    E::Error: Display,
{
    /// Create a pipeline that owns its engine
    pub fn new(engine: E, config: PipelineConfig) -> Result<Self, PipelineError> {
        Self::with_shared_engine(Arc::new(engine), config)
    }

    /// Create a pipeline around an engine that is shared elsewhere
    pub fn with_shared_engine(
        engine: Arc<E>,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let vocabulary = config.vocabulary();
        Ok(Self {
            engine,
            config,
            vocabulary,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Shared engine handle
    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Analyze an EPUB held in memory
    pub fn analyze(&self, archive: Vec<u8>) -> Result<AnalysisReport, PipelineError> {
        if archive.is_empty() {
            return Err(PipelineError::MissingInput);
        }
        let limit = self.config.max_archive_bytes;
        if limit > 0 && archive.len() > limit {
            return Err(PipelineError::ArchiveTooLarge {
                size: archive.len(),
                limit,
            });
        }

        info!("Starting EPUB analysis, {} bytes", archive.len());
        let mut reader = ZipArchiveReader::from_bytes(archive)?
            .with_unpacked_limit(self.config.max_corpus_bytes);
        self.analyze_archive(&mut reader)
    }

    /// Analyze any archive that exposes entries by name
    pub fn analyze_archive<A>(&self, archive: &mut A) -> Result<AnalysisReport, PipelineError>
    where
        A: ArchiveReader,
        A::Error: Into<PipelineError>,
    {
        let start = Instant::now();
        let extracted = ArchiveTextExtractor::from_config(&self.config).extract(archive)?;

        let stats = PipelineStats {
            manifest_path: Some(extracted.manifest_path),
            ..PipelineStats::default()
        };
        self.run(&extracted.corpus, stats, start)
    }

    /// Analyze plain narrative text, skipping the archive stage
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport, PipelineError> {
        let start = Instant::now();
        let corpus = TextCorpus::new(text.to_string(), 0);
        ensure_viable(&corpus, self.config.minimum_corpus_length)?;
        self.run(&corpus, PipelineStats::default(), start)
    }

    fn run(
        &self,
        corpus: &TextCorpus,
        mut stats: PipelineStats,
        start: Instant,
    ) -> Result<AnalysisReport, PipelineError> {
        let engine = self.engine.as_ref();
        stats.chapter_count = corpus.chapter_count();
        stats.corpus_length = corpus.char_len();

        info!("Running NLP on {} chars with {}", stats.corpus_length, engine.name());
        let mut candidates =
            CandidateCollector::new(&self.vocabulary, self.config.reject_multiline_entities)
                .collect(corpus, engine)?;
        stats.entity_candidates = candidates.count_from(CandidateSource::Entity);
        stats.alias_candidates = candidates.count_from(CandidateSource::Alias);
        info!(
            "Found {} potential characters ({} named, {} relationship aliases)",
            candidates.len(),
            stats.entity_candidates,
            stats.alias_candidates
        );

        let summary = TraitMiner::from_config(&self.config).mine(corpus, engine, &mut candidates)?;
        stats.sentence_count = summary.sentences;
        stats.traits_mined = summary.traits_added;

        let characters = ProfileRanker::from_config(&self.config).rank(candidates);
        stats.processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Returning {} characters in {}ms",
            characters.len(),
            stats.processing_time_ms
        );
        debug!("Pipeline stats: {:?}", stats);

        Ok(AnalysisReport { characters, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_nlp::MockEngine;

    fn small_config() -> PipelineConfig {
        PipelineConfig {
            minimum_corpus_length: 10,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig {
            max_traits_per_character: 0,
            ..PipelineConfig::default()
        };
        let result = Pipeline::new(MockEngine::new(), config);
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_empty_archive_is_missing_input() {
        let pipeline = Pipeline::new(MockEngine::new(), small_config()).unwrap();
        assert!(matches!(
            pipeline.analyze(Vec::new()),
            Err(PipelineError::MissingInput)
        ));
    }

    #[test]
    fn test_size_limit_checked_before_parsing() {
        let config = PipelineConfig {
            max_archive_bytes: 8,
            ..small_config()
        };
        let engine = MockEngine::new();
        let pipeline = Pipeline::new(engine.clone(), config).unwrap();

        let result = pipeline.analyze(vec![0u8; 9]);
        assert!(matches!(
            result,
            Err(PipelineError::ArchiveTooLarge { size: 9, limit: 8 })
        ));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_analyze_text_alias_profile() {
        let engine = MockEngine::new().with_adjectives(["kind", "patient"]);
        let pipeline = Pipeline::new(engine, small_config()).unwrap();

        let report = pipeline
            .analyze_text("She called her mother every day. Her mother was kind and patient.")
            .unwrap();

        assert_eq!(report.characters.len(), 1);
        assert_eq!(report.characters[0].name, "The Mother");
        assert_eq!(report.characters[0].traits, vec!["kind", "patient"]);
        assert_eq!(report.stats.alias_candidates, 1);
        assert_eq!(report.stats.sentence_count, 2);
    }

    #[test]
    fn test_analyze_text_too_short() {
        let engine = MockEngine::new();
        let pipeline = Pipeline::new(engine.clone(), PipelineConfig::default()).unwrap();

        let result = pipeline.analyze_text("Too short.");
        assert!(matches!(result, Err(PipelineError::ContentTooShort { .. })));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_shared_engine() {
        let engine = Arc::new(MockEngine::new());
        let pipeline = Pipeline::with_shared_engine(engine.clone(), small_config()).unwrap();
        assert!(Arc::ptr_eq(pipeline.engine(), &engine));
    }
}
