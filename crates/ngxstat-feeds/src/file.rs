//! File source, with optional glob expansion.
//!
//! A location containing `*`, `?`, or `[` is treated as a glob. Matches are
//! read in sorted path order and their lines concatenated. A glob that
//! matches nothing is an error; an existing empty file is not.

use crate::{read_lines_from, LineSource, SourceError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const GLOB_CHARS: &[char] = &['*', '?', '['];

#[derive(Debug, Clone)]
pub struct FileSource {
    location: String,
}

impl FileSource {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn is_glob(&self) -> bool {
        self.location.contains(GLOB_CHARS)
    }

    /// Concrete paths this source will read, in read order.
    pub fn paths(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.is_glob() {
            return Ok(vec![PathBuf::from(&self.location)]);
        }

        let mut paths: Vec<_> = glob::glob(&self.location)
            .map_err(|source| SourceError::Glob {
                pattern: self.location.clone(),
                source,
            })?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(err) => {
                    tracing::warn!(
                        pattern = %self.location,
                        path = %err.path().display(),
                        error = %err.error(),
                        "skipping unreadable glob entry"
                    );
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();

        if paths.is_empty() {
            return Err(SourceError::NoMatches {
                pattern: self.location.clone(),
            });
        }
        paths.sort();
        Ok(paths)
    }
}

fn read_file(path: &Path) -> Result<Vec<String>, SourceError> {
    let io_err = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    read_lines_from(BufReader::new(file)).map_err(io_err)
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.location.clone()
    }

    fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        let mut lines = Vec::new();
        for path in self.paths()? {
            let mut file_lines = read_file(&path)?;
            tracing::debug!(path = %path.display(), lines = file_lines.len(), "read log file");
            lines.append(&mut file_lines);
        }
        Ok(lines)
    }
}
