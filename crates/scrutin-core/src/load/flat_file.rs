use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use csv::WriterBuilder;
use polars::prelude::*;
use tracing::info;

use super::{LoadError, TableSink};
use crate::columns::column_text;

/// UTF-8 byte-order mark, so spreadsheet tools pick the right encoding.
pub const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

const DELIMITER: u8 = b';';

/// Writes cleaned tables as semicolon-delimited files in one directory.
#[derive(Debug, Clone)]
pub struct FlatFileSink {
    output_dir: PathBuf,
}

impl FlatFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn write_table(&self, df: &DataFrame, file_name: &str) -> Result<PathBuf, LoadError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| LoadError::Io {
            path: self.output_dir.display().to_string(),
            source,
        })?;

        let path = self.output_dir.join(file_name);
        let file = File::create(&path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        write_delimited(df, BufWriter::new(file))?;

        info!(path = %path.display(), rows = df.height(), "saved flat file");
        Ok(path)
    }
}

impl TableSink for FlatFileSink {
    fn name(&self) -> &'static str {
        "flat_file"
    }

    fn load(&self, df: &DataFrame, target: &str) -> Result<String, LoadError> {
        self.write_table(df, target)
            .map(|path| path.display().to_string())
    }
}

/// Serializes `df` with a byte-order mark, a header row and `;` separators.
/// Nulls are written as empty fields.
pub fn write_delimited<W: Write>(df: &DataFrame, mut writer: W) -> Result<(), LoadError> {
    writer
        .write_all(BYTE_ORDER_MARK)
        .map_err(|source| LoadError::Io {
            path: "<writer>".to_string(),
            source,
        })?;

    let mut csv_writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(writer);

    csv_writer.write_record(df.get_column_names().iter().map(|name| name.as_str()))?;

    let cells = df
        .get_columns()
        .iter()
        .map(cell_text)
        .collect::<PolarsResult<Vec<_>>>()?;

    for idx in 0..df.height() {
        csv_writer.write_record(
            cells
                .iter()
                .map(|column| column[idx].as_deref().unwrap_or_default()),
        )?;
    }

    csv_writer.flush().map_err(|source| LoadError::Io {
        path: "<writer>".to_string(),
        source,
    })?;
    Ok(())
}

// Floats go through `Display` so whole counts print as `45`, not `45.0`.
fn cell_text(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    match column.dtype() {
        DataType::Float64 | DataType::Float32 => {
            let floats = column.cast(&DataType::Float64)?;
            Ok(floats
                .f64()?
                .into_iter()
                .map(|value| value.map(|v| v.to_string()))
                .collect())
        }
        _ => column_text(column),
    }
}
