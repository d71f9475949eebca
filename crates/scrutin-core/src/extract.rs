use std::path::PathBuf;

use polars::prelude::DataFrame;
use scrutin_parser::{read_delimited_file, ParserError};
use tracing::debug;

/// Source of raw tables, addressed by file name.
pub trait Extractor {
    fn extract(&self, file_name: &str) -> Result<DataFrame, ParserError>;
}

/// Reads semicolon-delimited files from a base directory.
#[derive(Debug, Clone)]
pub struct DirectoryExtractor {
    base_dir: PathBuf,
}

impl DirectoryExtractor {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Extractor for DirectoryExtractor {
    fn extract(&self, file_name: &str) -> Result<DataFrame, ParserError> {
        let path = self.base_dir.join(file_name);
        let df = read_delimited_file(&path)?;
        debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "extracted raw table"
        );
        Ok(df)
    }
}
