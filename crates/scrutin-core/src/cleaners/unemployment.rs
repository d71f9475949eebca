use polars::prelude::*;

use crate::columns::{coerce_column_strict, column_text};
use crate::department::normalize_department_codes;
use crate::error::{CleanResult, FatalValidationError, PolarsResultExt};
use crate::numeric::DecimalSeparator;
use crate::text::clean_label;

pub(crate) const NAME: &str = "unemployment";

pub const COLUMNS: [&str; 3] = ["code_departement", "departement", "taux_chomage"];

/// Cleans the unemployment-by-department table.
///
/// The source has no usable header: its three columns are positional
/// (code, name, rate) and its first data row repeats the real header, so
/// that row is discarded. The rate uses a decimal comma and, unlike the
/// other cleaners, any rate that is present but not a number fails the
/// whole table.
pub fn clean_unemployment(raw: &DataFrame) -> CleanResult<DataFrame> {
    if raw.width() != COLUMNS.len() {
        return Err(FatalValidationError::ColumnCount {
            cleaner: NAME,
            expected: COLUMNS.len(),
            found: raw.width(),
        });
    }

    let body = raw.slice(1, raw.height().saturating_sub(1));
    let columns = body.get_columns();

    let codes = normalize_department_codes(column_text(&columns[0]).in_cleaner(NAME)?);
    let names: Vec<Option<String>> = column_text(&columns[1])
        .in_cleaner(NAME)?
        .into_iter()
        .map(|value| value.map(|name| clean_label(&name)))
        .collect();
    let rates = coerce_column_strict(&columns[2], COLUMNS[2], DecimalSeparator::Comma, NAME)?;

    let codes: Vec<Option<&str>> = codes.iter().map(|v| v.as_deref()).collect();
    let names: Vec<Option<&str>> = names.iter().map(|v| v.as_deref()).collect();

    DataFrame::new(vec![
        Series::new(COLUMNS[0].into(), codes).into(),
        Series::new(COLUMNS[1].into(), names).into(),
        Series::new(COLUMNS[2].into(), rates).into(),
    ])
    .in_cleaner(NAME)
}
