mod flat_file;
mod warehouse;

use polars::error::PolarsError;
use polars::prelude::DataFrame;
use thiserror::Error;

pub use flat_file::{write_delimited, FlatFileSink, BYTE_ORDER_MARK};
pub use warehouse::WarehouseSink;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("warehouse error: {0}")]
    Warehouse(#[from] duckdb::Error),

    #[error("'{0}' is not a valid warehouse table name")]
    InvalidTableName(String),

    #[error("cannot register a table without columns as '{0}'")]
    NoColumns(String),

    #[error("polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

/// Destination for cleaned tables.
pub trait TableSink {
    fn name(&self) -> &'static str;

    /// Writes `df` under `target` (a file name or a table name, depending on
    /// the sink) and returns where it went.
    fn load(&self, df: &DataFrame, target: &str) -> Result<String, LoadError>;
}
