//! Unique target paths - never collide with existing files or earlier picks.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Return `candidate` if nothing exists there, otherwise the first free
/// `name (N).ext` with N counting up from 1.
///
/// Only checks for existence; the filesystem is never touched.
pub fn resolve_unique_path(candidate: impl AsRef<Path>) -> PathBuf {
    let candidate = candidate.as_ref();
    if !entry_exists(candidate) {
        return candidate.to_path_buf();
    }

    let directory = candidate.parent().unwrap_or(Path::new(""));
    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = candidate
        .extension()
        .map(|s| s.to_string_lossy().into_owned());

    first_free(directory, &stem, extension.as_deref(), entry_exists)
}

/// Build `<directory>/<stem>[.<ext>]` and make it unique.
///
/// Use this when the stem itself may contain dots, which would confuse
/// extension splitting on an already joined path.
pub fn resolve_unique_name(directory: &Path, stem: &str, extension: Option<&str>) -> PathBuf {
    first_free(directory, stem, extension, entry_exists)
}

/// Names accepted so far in one batch run.
///
/// A name is reserved as soon as it is handed out, so two documents of the
/// same run cannot receive the same target before anything is written.
#[derive(Debug, Default)]
pub struct UniqueNames {
    used: HashSet<PathBuf>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against the filesystem and the names already reserved, then
    /// reserve the result.
    pub fn reserve(&mut self, directory: &Path, stem: &str, extension: Option<&str>) -> PathBuf {
        let path = first_free(directory, stem, extension, |path| {
            entry_exists(path) || self.used.contains(path)
        });
        self.used.insert(path.clone());
        path
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.used.contains(path)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Any directory entry counts, dangling symlinks included.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn first_free(
    directory: &Path,
    stem: &str,
    extension: Option<&str>,
    is_taken: impl Fn(&Path) -> bool,
) -> PathBuf {
    let mut path = directory.join(file_name(stem, extension, None));
    let mut counter = 1;
    while is_taken(&path) {
        path = directory.join(file_name(stem, extension, Some(counter)));
        counter += 1;
    }
    path
}

fn file_name(stem: &str, extension: Option<&str>, counter: Option<u32>) -> String {
    let mut name = stem.to_string();
    if let Some(n) = counter {
        name.push_str(&format!(" ({})", n));
    }
    if let Some(ext) = extension.filter(|e| !e.is_empty()) {
        name.push('.');
        name.push_str(ext);
    }
    name
}
