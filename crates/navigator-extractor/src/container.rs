//! Container descriptor validation
//!
//! Every EPUB carries `META-INF/container.xml`, whose `rootfile` element
//! points at the package manifest. The pipeline parses it to prove the archive
//! is a well-formed book; the manifest path is reported but does not drive
//! chapter selection.

use crate::error::PipelineError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Archive path of the container descriptor
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

/// Parse a container descriptor and return the first rootfile's `full-path`
pub fn locate_rootfile(xml: &[u8]) -> Result<String, PipelineError> {
    let text = std::str::from_utf8(xml).map_err(|e| {
        PipelineError::InvalidArchive(format!("container.xml is not UTF-8: {}", e))
    })?;

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut rootfile: Option<String> = None;
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element)
                if element.local_name().as_ref() == b"rootfile" && rootfile.is_none() =>
            {
                for attribute in element.attributes() {
                    let attribute = attribute.map_err(|e| {
                        PipelineError::InvalidArchive(format!(
                            "malformed rootfile attribute: {}",
                            e
                        ))
                    })?;
                    if attribute.key.local_name().as_ref() == b"full-path" {
                        let value = attribute.unescape_value().map_err(|e| {
                            PipelineError::InvalidArchive(format!("malformed rootfile path: {}", e))
                        })?;
                        rootfile = Some(value.trim().to_string());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    rootfile
        .filter(|path| !path.is_empty())
        .ok_or_else(|| {
            PipelineError::InvalidArchive("container.xml declares no rootfile".to_string())
        })
}
