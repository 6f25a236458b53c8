//! Document readers - turn a file into an ordered list of text blocks.
//!
//! Format-specific extraction (docx, doc, ...) lives outside this crate; an
//! external extractor can hand its output over as a JSON block export.

mod json;
mod text;

pub use json::{BlockRecord, JsonBlockReader};
pub use text::PlainTextReader;

use crate::block::TextBlock;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Blocks of one document plus its full text for year detection.
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    /// Non-empty blocks in document order
    pub blocks: Vec<TextBlock>,
    /// Whole document text, not affected by the block cap
    pub full_text: String,
}

/// A source of text blocks for some set of file extensions.
pub trait BlockReader: Send + Sync {
    /// Lowercase extensions without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    fn name(&self) -> &str;

    /// Extract blocks from already loaded content, keeping at most `limit`.
    fn read_str(&self, content: &str, limit: Option<usize>) -> Result<ExtractedDocument>;

    /// Extract blocks from a UTF-8 file.
    fn read(&self, path: &Path, limit: Option<usize>) -> Result<ExtractedDocument> {
        let content = std::fs::read_to_string(path)?;
        self.read_str(&content, limit)
    }
}

/// Maps file extensions to readers.
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn BlockReader>>,
}

impl ReaderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
        }
    }

    /// Registry with the plain-text and JSON block readers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextReader));
        registry.register(Arc::new(JsonBlockReader));
        registry
    }

    /// Register a reader for all its extensions; later registrations win.
    pub fn register(&mut self, reader: Arc<dyn BlockReader>) {
        for ext in reader.supported_extensions() {
            self.readers.insert(ext.to_lowercase(), reader.clone());
        }
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn BlockReader>> {
        self.readers.get(&ext.to_lowercase()).cloned()
    }

    pub fn supports(&self, ext: &str) -> bool {
        self.readers.contains_key(&ext.to_lowercase())
    }

    /// Whether a reader exists for the file's extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.supports(ext))
    }

    /// Sorted list of registered extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.readers.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Read a file with the reader registered for its extension.
    pub fn read(&self, path: &Path, limit: Option<usize>) -> Result<ExtractedDocument> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{} has no extension", path.display())))?;

        let reader = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{}", ext)))?;

        tracing::debug!(reader = reader.name(), path = %path.display(), "reading blocks");
        reader.read(path, limit)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Apply the optional block cap.
pub(crate) fn cap_blocks(blocks: impl Iterator<Item = TextBlock>, limit: Option<usize>) -> Vec<TextBlock> {
    match limit {
        Some(limit) => blocks.take(limit).collect(),
        None => blocks.collect(),
    }
}
