use polars::prelude::*;

use crate::error::{CleanResult, FatalValidationError, PolarsResultExt};
use crate::numeric::{coerce_permissive, coerce_strict, DecimalSeparator};

/// How [`normalize_column_name`] treats `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenPolicy {
    Keep,
    Underscore,
}

/// Strip, lowercase and snake_case a raw column header.
pub fn normalize_column_name(name: &str, hyphens: HyphenPolicy) -> String {
    let normalized = name.trim().to_lowercase().replace(' ', "_");
    match hyphens {
        HyphenPolicy::Keep => normalized,
        HyphenPolicy::Underscore => normalized.replace('-', "_"),
    }
}

/// Returns a copy of `df` with every column renamed through
/// [`normalize_column_name`]. Fails if two headers collapse to the same name.
pub fn normalize_columns(df: &DataFrame, hyphens: HyphenPolicy) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|column| {
            let mut series = column.as_materialized_series().clone();
            series.rename(normalize_column_name(column.name().as_str(), hyphens).into());
            series.into()
        })
        .collect();

    DataFrame::new(columns)
}

pub(crate) fn require_column<'a>(
    df: &'a DataFrame,
    name: &str,
    cleaner: &'static str,
) -> CleanResult<&'a Column> {
    df.column(name)
        .map_err(|_| FatalValidationError::MissingColumn {
            cleaner,
            column: name.to_string(),
        })
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Reads any column as nullable text.
pub fn column_text(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let as_text = column.cast(&DataType::String)?;
    Ok(as_text
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

pub(crate) fn text_values(
    df: &DataFrame,
    name: &str,
    cleaner: &'static str,
) -> CleanResult<Vec<Option<String>>> {
    column_text(require_column(df, name, cleaner)?).in_cleaner(cleaner)
}

/// Replaces column `name` in place (same position) with text values.
pub(crate) fn replace_text(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
    cleaner: &'static str,
) -> CleanResult<()> {
    let values: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
    df.with_column(Series::new(name.into(), values))
        .in_cleaner(cleaner)?;
    Ok(())
}

/// Replaces column `name` in place with nullable floats.
pub(crate) fn replace_numeric(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<f64>>,
    cleaner: &'static str,
) -> CleanResult<()> {
    df.with_column(Series::new(name.into(), values))
        .in_cleaner(cleaner)?;
    Ok(())
}

/// Permissively coerces column `name` to `Float64`; non-numeric cells are
/// nulled and counted in a warning.
pub(crate) fn coerce_column(
    df: &mut DataFrame,
    name: &str,
    separator: DecimalSeparator,
    cleaner: &'static str,
) -> CleanResult<()> {
    let text = text_values(df, name, cleaner)?;
    let coerced = coerce_permissive(text.iter().map(|v| v.as_deref()), separator);
    if coerced.rejected > 0 {
        tracing::warn!(
            cleaner,
            column = name,
            rejected = coerced.rejected,
            "non-numeric values coerced to null"
        );
    }
    replace_numeric(df, name, coerced.values, cleaner)
}

/// Strictly coerces a column's text to floats; see [`coerce_strict`].
/// Errors name the column `name`.
pub(crate) fn coerce_column_strict(
    column: &Column,
    name: &str,
    separator: DecimalSeparator,
    cleaner: &'static str,
) -> CleanResult<Vec<Option<f64>>> {
    let text = column_text(column).in_cleaner(cleaner)?;
    coerce_strict(text.iter().map(|v| v.as_deref()), separator, cleaner, name)
}

pub(crate) fn float_values(
    df: &DataFrame,
    name: &str,
    cleaner: &'static str,
) -> CleanResult<Vec<Option<f64>>> {
    let column = require_column(df, name, cleaner)?
        .cast(&DataType::Float64)
        .in_cleaner(cleaner)?;
    Ok(column.f64().in_cleaner(cleaner)?.into_iter().collect())
}

/// Drops each named column that exists and holds nothing but nulls.
pub fn drop_all_null_columns(df: DataFrame, names: &[&str]) -> PolarsResult<DataFrame> {
    let mut output = df;
    for name in names {
        let all_null = match output.column(name) {
            Ok(column) => column.null_count() == column.len(),
            Err(_) => false,
        };
        if all_null {
            output = output.drop(name)?;
        }
    }
    Ok(output)
}

/// Keeps the first occurrence of every distinct row, preserving order.
pub fn distinct_rows(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.unique_stable(None, UniqueKeepStrategy::First, None)
}
