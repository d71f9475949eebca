use std::collections::HashSet;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use polars::prelude::*;

use crate::errors::ParserError;

pub const DEFAULT_DELIMITER: u8 = b';';

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Cell contents read as null, in addition to empty and whitespace-only cells.
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
];

#[derive(Debug, Clone, Copy)]
pub struct DelimitedOptions {
    pub delimiter: u8,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Reads a semicolon-delimited file into a table of nullable text columns.
pub fn read_delimited_file(path: &Path) -> Result<DataFrame, ParserError> {
    let bytes = fs::read(path).map_err(|source| ParserError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| ParserError::Encoding {
        path: path.display().to_string(),
        source,
    })?;
    read_delimited(&content, &DelimitedOptions::default())
}

/// Parses delimited text whose first line is the header.
///
/// Column names are kept exactly as written, apart from two fix-ups so the
/// table can be built at all: blank names become `Unnamed: <index>` and
/// repeated names get a `.1`, `.2`, ... suffix. Rows shorter than the header
/// are padded with nulls; longer rows are rejected.
pub fn read_delimited(content: &str, options: &DelimitedOptions) -> Result<DataFrame, ParserError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let header = reader
        .headers()
        .map_err(|source| ParserError::Csv { line: 1, source })?
        .clone();
    if header.is_empty() {
        return Err(ParserError::MissingHeader);
    }

    let names = column_names(&header);
    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

    for record in reader.records() {
        let record = record.map_err(|source| ParserError::Csv {
            line: source.position().map(|pos| pos.line()).unwrap_or_default(),
            source,
        })?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        if record.len() > names.len() {
            return Err(ParserError::TooManyFields {
                line,
                expected: names.len(),
                found: record.len(),
            });
        }

        for (idx, column) in columns.iter_mut().enumerate() {
            column.push(record.get(idx).and_then(clean_cell));
        }
    }

    let series: Vec<Column> = names
        .iter()
        .zip(columns.iter())
        .map(|(name, values)| {
            let values: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
            Series::new(name.as_str().into(), values).into()
        })
        .collect();

    Ok(DataFrame::new(series)?)
}

fn clean_cell(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || MISSING_VALUE_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(value.to_string())
    }
}

fn column_names(header: &StringRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(header.len());
    let mut names = Vec::with_capacity(header.len());

    for (idx, raw) in header.iter().enumerate() {
        let base = if raw.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            raw.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        names.push(candidate);
    }

    names
}
