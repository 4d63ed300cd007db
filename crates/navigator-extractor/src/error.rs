//! Error types for the pipeline

use thiserror::Error;

/// Errors that end a pipeline run
///
/// Every variant is terminal for the input that caused it; there is no
/// partial result and no internal retry.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No archive was supplied
    #[error("No file found in request")]
    MissingInput,

    /// Archive is not a zip or lacks a usable container descriptor
    #[error("Invalid EPUB: {0}")]
    InvalidArchive(String),

    /// Archive exceeds the configured size cap
    #[error("Archive too large: {size} bytes (max: {limit})")]
    ArchiveTooLarge {
        /// Archive size in bytes
        size: usize,
        /// Configured cap in bytes
        limit: usize,
    },

    /// Extracted text is below the viability threshold
    #[error("Book seems empty or protected by DRM: {length} chars of text (need {minimum})")]
    ContentTooShort {
        /// Corpus length in characters
        length: usize,
        /// Configured minimum
        minimum: usize,
    },

    /// The NLP engine failed on the corpus
    #[error("NLP engine error: {0}")]
    EngineFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::MissingInput => "missing_input",
            PipelineError::InvalidArchive(_) => "invalid_archive",
            PipelineError::ArchiveTooLarge { .. } => "archive_too_large",
            PipelineError::ContentTooShort { .. } => "content_too_short",
            PipelineError::EngineFailure(_) => "engine_failure",
            PipelineError::Config(_) => "config",
        }
    }

    pub(crate) fn engine<E: std::fmt::Display>(error: E) -> Self {
        PipelineError::EngineFailure(error.to_string())
    }
}

impl From<zip::result::ZipError> for PipelineError {
    fn from(e: zip::result::ZipError) -> Self {
        PipelineError::InvalidArchive(e.to_string())
    }
}

impl From<quick_xml::Error> for PipelineError {
    fn from(e: quick_xml::Error) -> Self {
        PipelineError::InvalidArchive(format!("malformed container.xml: {}", e))
    }
}
