// crates/scrutin-core/src/error.rs

use polars::error::PolarsError;
use thiserror::Error;

/// A single cell that could not be read as a number.
///
/// Permissive coercions turn this into a null and carry on; strict coercions
/// wrap it in [`FatalValidationError::StrictParse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoverableParseError {
    #[error("value is missing")]
    Missing,

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Structural or strict-parse failure that aborts cleaning of a table.
#[derive(Debug, Error)]
pub enum FatalValidationError {
    #[error("{cleaner}: required column '{column}' is missing")]
    MissingColumn {
        cleaner: &'static str,
        column: String,
    },

    #[error("{cleaner}: expected exactly {expected} columns, found {found}")]
    ColumnCount {
        cleaner: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{cleaner}: column '{column}' row {row}: {source}")]
    StrictParse {
        cleaner: &'static str,
        column: String,
        row: usize,
        #[source]
        source: RecoverableParseError,
    },

    #[error("{cleaner}: polars operation failed: {source}")]
    Polars {
        cleaner: &'static str,
        #[source]
        source: PolarsError,
    },
}

pub type CleanResult<T> = std::result::Result<T, FatalValidationError>;

pub(crate) trait PolarsResultExt<T> {
    fn in_cleaner(self, cleaner: &'static str) -> CleanResult<T>;
}

impl<T> PolarsResultExt<T> for Result<T, PolarsError> {
    fn in_cleaner(self, cleaner: &'static str) -> CleanResult<T> {
        self.map_err(|source| FatalValidationError::Polars { cleaner, source })
    }
}
