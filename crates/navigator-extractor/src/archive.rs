//! Archive access and narrative text extraction

use crate::config::PipelineConfig;
use crate::container::{locate_rootfile, CONTAINER_PATH};
use crate::error::PipelineError;
use navigator_domain::traits::ArchiveReader;
use navigator_domain::TextCorpus;
use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::LazyLock;
use tracing::{debug, info};
use zip::ZipArchive;

/// Any angle-bracket tag
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static tag regex"));

/// Entry-name suffixes that carry narrative content
pub const CHAPTER_EXTENSIONS: &[&str] = &[".xhtml", ".html"];

/// Upper bound on the buffer preallocated from an entry header
const CAPACITY_HINT_CAP: usize = 16 * 1024 * 1024;

/// Zip-backed archive held in memory
pub struct ZipArchiveReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    names: Vec<String>,
    unpacked_limit: usize,
    unpacked: usize,
}

impl ZipArchiveReader {
    /// Open an in-memory zip archive
    ///
    /// Entry names are captured in central-directory order; directories are
    /// skipped.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PipelineError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            PipelineError::InvalidArchive(format!("not a zip archive: {}", e))
        })?;

        let mut names = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive.by_index_raw(index)?;
            if !entry.is_dir() {
                names.push(entry.name().to_string());
            }
        }

        Ok(Self {
            archive,
            names,
            unpacked_limit: 0,
            unpacked: 0,
        })
    }

    /// Cap the total bytes decompressed across all reads (0 = unbounded)
    pub fn with_unpacked_limit(mut self, limit: usize) -> Self {
        self.unpacked_limit = limit;
        self
    }

    /// Bytes decompressed so far
    pub fn unpacked(&self) -> usize {
        self.unpacked
    }

    fn remaining(&self) -> Option<usize> {
        (self.unpacked_limit > 0).then(|| self.unpacked_limit.saturating_sub(self.unpacked))
    }
}

impl ArchiveReader for ZipArchiveReader {
    type Error = PipelineError;

    fn list_entries(&self) -> Vec<String> {
        self.names.clone()
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, Self::Error> {
        let remaining = self.remaining();
        let mut entry = self.archive.by_name(name)?;

        // Header sizes come from the uploader; never trust them past the budget.
        let declared = usize::try_from(entry.size()).unwrap_or(usize::MAX);
        let hint = declared
            .min(remaining.unwrap_or(usize::MAX))
            .min(CAPACITY_HINT_CAP);
        let mut bytes = Vec::with_capacity(hint);

        let read = match remaining {
            Some(left) => entry
                .by_ref()
                .take(left as u64 + 1)
                .read_to_end(&mut bytes),
            None => entry.read_to_end(&mut bytes),
        };
        read.map_err(|e| {
            PipelineError::InvalidArchive(format!("failed to read {}: {}", name, e))
        })?;

        if remaining.is_some_and(|left| bytes.len() > left) {
            return Err(PipelineError::ArchiveTooLarge {
                size: self.unpacked + bytes.len(),
                limit: self.unpacked_limit,
            });
        }
        self.unpacked += bytes.len();
        Ok(bytes)
    }

    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|entry| entry == name)
    }
}

/// Archive assembled in memory, entry by entry
///
/// Useful for tests and for callers that already hold unpacked content.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    entries: Vec<(String, Vec<u8>)>,
}

impl MemoryArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn with_entry(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.push((name.into(), bytes.into()));
        self
    }
}

impl ArchiveReader for MemoryArchive {
    type Error = PipelineError;

    fn list_entries(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, Self::Error> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| PipelineError::InvalidArchive(format!("missing entry {}", name)))
    }
}

/// Corpus together with what the container descriptor declared
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Concatenated chapter text
    pub corpus: TextCorpus,

    /// Manifest path from the container descriptor
    pub manifest_path: String,
}

/// Turns an archive into a single text corpus
#[derive(Debug, Clone)]
pub struct ArchiveTextExtractor {
    chapter_limit: usize,
    minimum_corpus_length: usize,
}

impl ArchiveTextExtractor {
    /// Create an extractor
    pub fn new(chapter_limit: usize, minimum_corpus_length: usize) -> Self {
        Self {
            chapter_limit,
            minimum_corpus_length,
        }
    }

    /// Create an extractor from pipeline settings
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.chapter_limit, config.minimum_corpus_length)
    }

    /// Validate the container descriptor and return the manifest path
    pub fn locate_manifest<A>(&self, archive: &mut A) -> Result<String, PipelineError>
    where
        A: ArchiveReader,
        A::Error: Into<PipelineError>,
    {
        if !archive.contains(CONTAINER_PATH) {
            return Err(PipelineError::InvalidArchive(
                "Missing container.xml".to_string(),
            ));
        }
        let descriptor = archive.read_entry(CONTAINER_PATH).map_err(Into::into)?;
        locate_rootfile(&descriptor)
    }

    /// Chapter entries in enumeration order, honoring the chapter limit
    pub fn chapter_entries(&self, names: &[String]) -> Vec<String> {
        let chapters = names
            .iter()
            .filter(|name| CHAPTER_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
            .cloned();

        if self.chapter_limit > 0 {
            chapters.take(self.chapter_limit).collect()
        } else {
            chapters.collect()
        }
    }

    /// Extract the narrative corpus
    ///
    /// Chapters are picked by file extension in archive order, not by the
    /// manifest's reading order.
    pub fn extract<A>(&self, archive: &mut A) -> Result<ExtractedText, PipelineError>
    where
        A: ArchiveReader,
        A::Error: Into<PipelineError>,
    {
        let manifest_path = self.locate_manifest(archive)?;
        info!("OPF found at: {}", manifest_path);

        let chapters = self.chapter_entries(&archive.list_entries());
        let mut text = String::new();
        for name in &chapters {
            let bytes = archive.read_entry(name).map_err(Into::into)?;
            let html = String::from_utf8_lossy(&bytes);
            text.push_str(&strip_markup(&html));
            text.push(' ');
            debug!("Extracted chapter {}", name);
        }

        let corpus = TextCorpus::new(text, chapters.len());
        info!(
            "Extracted text from {} chapters. Total length: {} chars.",
            corpus.chapter_count(),
            corpus.char_len()
        );

        ensure_viable(&corpus, self.minimum_corpus_length)?;
        Ok(ExtractedText {
            corpus,
            manifest_path,
        })
    }
}

/// Replace every tag with a single space
///
/// Entity references are left as-is and script or style bodies are kept.
pub fn strip_markup(html: &str) -> String {
    TAG_RE.replace_all(html, " ").into_owned()
}

/// Fail with `ContentTooShort` when the corpus is below `minimum` characters
pub fn ensure_viable(corpus: &TextCorpus, minimum: usize) -> Result<(), PipelineError> {
    if corpus.is_viable(minimum) {
        Ok(())
    } else {
        Err(PipelineError::ContentTooShort {
            length: corpus.char_len(),
            minimum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: &str = r#"<container><rootfiles><rootfile full-path="content.opf"/></rootfiles></container>"#;

    fn book(chapters: &[(&str, &str)]) -> MemoryArchive {
        chapters.iter().fold(
            MemoryArchive::new().with_entry(CONTAINER_PATH, CONTAINER),
            |archive, (name, body)| archive.with_entry(*name, *body),
        )
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p>Hi <b>there</b></p>"), " Hi  there  ");
        assert_eq!(strip_markup("a &amp; b"), "a &amp; b");
        assert_eq!(
            strip_markup("<style>p { color: red }</style>"),
            " p { color: red } "
        );
    }

    #[test]
    fn test_chapter_entries_filter_and_limit() {
        let names: Vec<String> = ["a.xhtml", "style.css", "b.html", "c.xhtml", "d.htm"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let all = ArchiveTextExtractor::new(0, 1).chapter_entries(&names);
        assert_eq!(all, vec!["a.xhtml", "b.html", "c.xhtml"]);

        let capped = ArchiveTextExtractor::new(2, 1).chapter_entries(&names);
        assert_eq!(capped, vec!["a.xhtml", "b.html"]);
    }

    #[test]
    fn test_extract_concatenates_in_archive_order() {
        let mut archive = book(&[("two.xhtml", "<p>Second</p>"), ("one.xhtml", "<p>First</p>")]);
        let extracted = ArchiveTextExtractor::new(0, 1).extract(&mut archive).unwrap();

        assert_eq!(extracted.manifest_path, "content.opf");
        assert_eq!(extracted.corpus.chapter_count(), 2);
        assert_eq!(extracted.corpus.as_str(), " Second   First  ");
    }

    #[test]
    fn test_missing_container() {
        let mut archive = MemoryArchive::new().with_entry("a.xhtml", "<p>text</p>");
        let result = ArchiveTextExtractor::new(0, 1).extract(&mut archive);
        assert!(matches!(result, Err(PipelineError::InvalidArchive(_))));
    }

    #[test]
    fn test_short_content_rejected() {
        let mut archive = book(&[("a.xhtml", "<p>tiny</p>")]);
        let result = ArchiveTextExtractor::new(0, 100).extract(&mut archive);
        assert!(matches!(
            result,
            Err(PipelineError::ContentTooShort { minimum: 100, .. })
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let result = ZipArchiveReader::from_bytes(b"This is not an EPUB".to_vec());
        assert!(matches!(result, Err(PipelineError::InvalidArchive(_))));
    }

    fn zipped(entries: &[(&str, &[u8])]) -> Vec<u8> {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (name, body) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_unpacked_limit_spans_entries() {
        let bytes = zipped(&[("a.xhtml", &[b'a'; 600]), ("b.xhtml", &[b'b'; 600])]);
        let mut reader = ZipArchiveReader::from_bytes(bytes)
            .unwrap()
            .with_unpacked_limit(1000);

        assert_eq!(reader.read_entry("a.xhtml").unwrap().len(), 600);
        assert_eq!(reader.unpacked(), 600);

        let result = reader.read_entry("b.xhtml");
        assert!(matches!(
            result,
            Err(PipelineError::ArchiveTooLarge { limit: 1000, .. })
        ));
    }

    #[test]
    fn test_unpacked_limit_exact_fit() {
        let bytes = zipped(&[("a.xhtml", &[b'a'; 1000])]);
        let mut reader = ZipArchiveReader::from_bytes(bytes)
            .unwrap()
            .with_unpacked_limit(1000);
        assert_eq!(reader.read_entry("a.xhtml").unwrap().len(), 1000);
    }

    #[test]
    fn test_unbounded_by_default() {
        let bytes = zipped(&[("a.xhtml", &[b'a'; 4096])]);
        let mut reader = ZipArchiveReader::from_bytes(bytes).unwrap();
        assert_eq!(reader.read_entry("a.xhtml").unwrap().len(), 4096);
    }
}
