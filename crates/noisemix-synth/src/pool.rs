//! Source file pool index.

use std::path::{Path, PathBuf};

use crate::error::{SynthError, SynthResult};

/// The candidate source files for one side of the mix (clean or noise).
///
/// Built once per run from a directory and a glob pattern; immutable
/// afterwards. Paths are sorted so pool indices are stable across runs for a
/// fixed directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePool {
    files: Vec<PathBuf>,
}

impl FilePool {
    /// Indexes `dir` with the glob `pattern`, dropping files whose name
    /// starts with any of `excluded_prefixes`.
    ///
    /// # Errors
    /// Returns [`SynthError::NoFilesFound`] when nothing survives the
    /// filter — synthesis cannot proceed from an empty pool.
    pub fn index(dir: &Path, pattern: &str, excluded_prefixes: &[String]) -> SynthResult<Self> {
        let full_pattern = dir.join(pattern);
        let mut files = glob::glob(&full_pattern.to_string_lossy())?
            .collect::<Result<Vec<PathBuf>, _>>()?;

        files.retain(|path| !is_excluded(path, excluded_prefixes));
        files.sort();

        if files.is_empty() {
            return Err(SynthError::NoFilesFound {
                dir: dir.to_path_buf(),
                pattern: pattern.to_string(),
            });
        }

        Ok(Self { files })
    }

    /// Builds a pool directly from paths. Empty pools are allowed here; the
    /// assembler re-checks defensively.
    pub fn from_paths(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Number of files in the pool.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the pool holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Path at `index` (panics when out of range, indices come from the
    /// assembler which wraps modulo the pool size).
    pub fn get(&self, index: usize) -> &Path {
        &self.files[index]
    }

    /// All paths, in sorted order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

fn is_excluded(path: &Path, excluded_prefixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    excluded_prefixes
        .iter()
        .any(|prefix| name.starts_with(prefix.as_str()))
}
