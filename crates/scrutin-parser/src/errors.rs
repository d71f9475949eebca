use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("input did not contain a header row")]
    MissingHeader,

    #[error("CSV error on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line} has {found} fields but the header declares {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("failed to build table: {0}")]
    Polars(#[from] PolarsError),
}
