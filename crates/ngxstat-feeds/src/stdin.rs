//! Stdin source, selected with a location of `-`.

use crate::{read_lines_from, LineSource, SourceError};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        read_lines_from(std::io::stdin().lock()).map_err(SourceError::Stdin)
    }
}
