pub mod delimited;
pub mod errors;

pub use delimited::{
    read_delimited, read_delimited_file, DelimitedOptions, DEFAULT_DELIMITER,
    MISSING_VALUE_MARKERS,
};
pub use errors::ParserError;

#[cfg(test)]
mod tests;
