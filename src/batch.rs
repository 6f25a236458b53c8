//! Batch processing - propose and optionally apply new names for a directory.

use crate::config::RenamerConfig;
use crate::error::{Error, Result};
use crate::keywords::KeywordSet;
use crate::oplog::OperationLog;
use crate::reader::ReaderRegistry;
use crate::title::{TitleCandidate, has_marker, synthesize};
use crate::unique::UniqueNames;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest file the renamer will open
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Outcome for one file of a batch
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResult {
    pub success: bool,
    /// Document had no usable title; not counted as a failure
    pub skipped: bool,
    pub original: String,
    pub new_name: Option<String>,
    pub error: Option<String>,
}

impl ProcessResult {
    fn renamed(original: String, new_name: String) -> Self {
        Self {
            success: true,
            skipped: false,
            original,
            new_name: Some(new_name),
            error: None,
        }
    }

    fn failed(original: String, error: &Error) -> Self {
        Self {
            success: false,
            skipped: error.is_skip(),
            original,
            new_name: None,
            error: Some(error.to_string()),
        }
    }
}

/// Sequential renamer over the files of one directory.
pub struct BatchRenamer {
    registry: ReaderRegistry,
    match_keywords: KeywordSet,
    ignore_keywords: KeywordSet,
    length_limit: usize,
    line_limit: Option<usize>,
    log: Option<OperationLog>,
    apply: bool,
}

impl BatchRenamer {
    /// Dry-run renamer with the default readers and no operation log.
    pub fn new(config: &RenamerConfig, match_keywords: KeywordSet, ignore_keywords: KeywordSet) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: ReaderRegistry::with_defaults(),
            match_keywords,
            ignore_keywords,
            length_limit: config.length_limit,
            line_limit: config.line_limit,
            log: None,
            apply: false,
        })
    }

    /// Operation log, written only when renames are applied.
    pub fn with_log(mut self, log: OperationLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Rename files in place instead of only planning.
    pub fn with_apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    /// Supported, not yet renamed regular files of `directory`, sorted by name.
    pub fn candidates(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let name = file_name(&path);
            if has_marker(&name) {
                tracing::debug!(file = %name, "already renamed, skipping");
                continue;
            }
            if !self.registry.supports_path(&path) {
                tracing::debug!(file = %name, "unsupported format, skipping");
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Derive a name for one document without touching the filesystem.
    pub fn propose(&self, path: &Path) -> Result<TitleCandidate> {
        validate_file(path)?;
        let document = self.registry.read(path, self.line_limit)?;
        if document.blocks.is_empty() {
            return Err(Error::EmptyInput);
        }
        synthesize(
            document.blocks,
            &document.full_text,
            &self.match_keywords,
            &self.ignore_keywords,
            self.length_limit,
        )
    }

    /// Process every candidate of `directory` in order.
    pub fn run(&self, directory: &Path) -> Result<Vec<ProcessResult>> {
        let files = self.candidates(directory)?;
        tracing::info!(count = files.len(), directory = %directory.display(), "processing files");

        let mut names = UniqueNames::new();
        Ok(files
            .iter()
            .map(|path| self.process_file(path, &mut names))
            .collect())
    }

    /// Name one file, reserving its target in `names`.
    pub fn process_file(&self, path: &Path, names: &mut UniqueNames) -> ProcessResult {
        let original = file_name(path);

        let candidate = match self.propose(path) {
            Ok(candidate) => candidate,
            Err(e) => {
                if e.is_skip() {
                    tracing::warn!(file = %original, "skipped: {}", e);
                } else {
                    tracing::error!(file = %original, "failed: {}", e);
                }
                self.log_error(path, &e);
                return ProcessResult::failed(original, &e);
            }
        };

        let directory = path.parent().unwrap_or(Path::new("."));
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        let target = names.reserve(directory, &candidate.name, extension.as_deref());
        let new_name = file_name(&target);

        if self.apply {
            if let Err(e) = fs::rename(path, &target) {
                let e = Error::Io(e);
                tracing::error!(file = %original, "rename failed: {}", e);
                self.log_error(path, &e);
                return ProcessResult::failed(original, &e);
            }
            if let Some(log) = &self.log {
                if let Err(e) = log.rename(path, &new_name) {
                    tracing::warn!("could not write operation log: {}", e);
                }
            }
        }

        tracing::info!(file = %original, new_name = %new_name, applied = self.apply, "renamed");
        ProcessResult::renamed(original, new_name)
    }

    fn log_error(&self, path: &Path, error: &Error) {
        if !self.apply {
            return;
        }
        if let Some(log) = &self.log {
            if let Err(e) = log.error(path, error) {
                tracing::warn!("could not write operation log: {}", e);
            }
        }
    }
}

/// Check that `path` is a readable, non-empty regular file of sane size.
pub fn validate_file(path: &Path) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidFile {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let metadata = fs::metadata(path).map_err(|_| invalid("file not found"))?;
    if !metadata.is_file() {
        return Err(invalid("not a file"));
    }
    if metadata.len() == 0 {
        return Err(invalid("file is empty"));
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(invalid("file too large (>100MB)"));
    }
    fs::File::open(path).map_err(|_| invalid("no read permission"))?;

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
