use std::path::PathBuf;

use duckdb::types::Value;
use duckdb::{appender_params_from_iter, Connection};
use polars::prelude::*;
use tracing::info;

use super::{LoadError, TableSink};
use crate::columns::column_text;

/// Registers cleaned tables in an embedded DuckDB database file.
///
/// The sink holds only the database path. Each load opens its own
/// connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct WarehouseSink {
    path: PathBuf,
}

impl WarehouseSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates or replaces `table_name` with the contents of `df`.
    pub fn replace_table(&self, df: &DataFrame, table_name: &str) -> Result<usize, LoadError> {
        if !is_plain_identifier(table_name) {
            return Err(LoadError::InvalidTableName(table_name.to_string()));
        }
        if df.width() == 0 {
            return Err(LoadError::NoColumns(table_name.to_string()));
        }

        let columns = df
            .get_columns()
            .iter()
            .map(WarehouseColumn::from_column)
            .collect::<PolarsResult<Vec<_>>>()?;

        let conn = Connection::open(&self.path)?;
        conn.execute_batch(&create_table_sql(table_name, &columns))?;

        let mut appender = conn.appender(table_name)?;
        for idx in 0..df.height() {
            appender.append_row(appender_params_from_iter(
                columns.iter().map(|column| column.value(idx)),
            ))?;
        }
        appender.flush()?;
        drop(appender);

        info!(
            table = table_name,
            rows = df.height(),
            warehouse = %self.path.display(),
            "registered warehouse table"
        );
        Ok(df.height())
    }
}

impl TableSink for WarehouseSink {
    fn name(&self) -> &'static str {
        "warehouse"
    }

    fn load(&self, df: &DataFrame, target: &str) -> Result<String, LoadError> {
        self.replace_table(df, target)?;
        Ok(target.to_string())
    }
}

enum ColumnValues {
    Double(Vec<Option<f64>>),
    BigInt(Vec<Option<i64>>),
    Boolean(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
}

struct WarehouseColumn {
    name: String,
    values: ColumnValues,
}

impl WarehouseColumn {
    fn from_column(column: &Column) -> PolarsResult<Self> {
        let values = match column.dtype() {
            DataType::Float32 | DataType::Float64 => {
                let cast = column.cast(&DataType::Float64)?;
                ColumnValues::Double(cast.f64()?.into_iter().collect())
            }
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32 => {
                let cast = column.cast(&DataType::Int64)?;
                ColumnValues::BigInt(cast.i64()?.into_iter().collect())
            }
            DataType::Boolean => ColumnValues::Boolean(column.bool()?.into_iter().collect()),
            _ => ColumnValues::Text(column_text(column)?),
        };

        Ok(Self {
            name: column.name().to_string(),
            values,
        })
    }

    fn sql_type(&self) -> &'static str {
        match self.values {
            ColumnValues::Double(_) => "DOUBLE",
            ColumnValues::BigInt(_) => "BIGINT",
            ColumnValues::Boolean(_) => "BOOLEAN",
            ColumnValues::Text(_) => "VARCHAR",
        }
    }

    fn value(&self, idx: usize) -> Value {
        match &self.values {
            ColumnValues::Double(values) => values[idx].map_or(Value::Null, Value::Double),
            ColumnValues::BigInt(values) => values[idx].map_or(Value::Null, Value::BigInt),
            ColumnValues::Boolean(values) => values[idx].map_or(Value::Null, Value::Boolean),
            ColumnValues::Text(values) => values[idx]
                .as_ref()
                .map_or(Value::Null, |text| Value::Text(text.clone())),
        }
    }
}

fn create_table_sql(table_name: &str, columns: &[WarehouseColumn]) -> String {
    let definitions = columns
        .iter()
        .map(|column| format!("{} {}", quote_identifier(&column.name), column.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE OR REPLACE TABLE {} ({definitions});",
        quote_identifier(table_name)
    )
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
