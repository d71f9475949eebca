use polars::prelude::*;

use crate::columns::{coerce_column, normalize_columns, replace_text, text_values, HyphenPolicy};
use crate::department::normalize_department_codes;
use crate::error::{CleanResult, PolarsResultExt};
use crate::numeric::DecimalSeparator;
use crate::text::zero_pad;

pub(crate) const NAME: &str = "security";

const REGION_CODE_WIDTH: usize = 2;

/// Numeric columns and the decimal separator each one is written with.
const NUMERIC_COLUMNS: [(&str, DecimalSeparator); 4] = [
    ("nombre", DecimalSeparator::Point),
    ("taux_pour_mille", DecimalSeparator::Comma),
    ("insee_pop", DecimalSeparator::Point),
    ("insee_log", DecimalSeparator::Point),
];

/// Cleans the departmental crime statistics table.
///
/// Every row is kept: values that are not numbers become null instead of
/// removing the row. Hyphens in headers are left alone.
pub fn clean_security(raw: &DataFrame) -> CleanResult<DataFrame> {
    let mut df = normalize_columns(raw, HyphenPolicy::Keep).in_cleaner(NAME)?;

    let departments = normalize_department_codes(text_values(&df, "code_departement", NAME)?);
    replace_text(&mut df, "code_departement", departments, NAME)?;

    let regions = text_values(&df, "code_region", NAME)?
        .into_iter()
        .map(|value| value.map(|code| zero_pad(&code, REGION_CODE_WIDTH)))
        .collect();
    replace_text(&mut df, "code_region", regions, NAME)?;

    for (column, separator) in NUMERIC_COLUMNS {
        coerce_column(&mut df, column, separator, NAME)?;
    }

    Ok(df)
}
