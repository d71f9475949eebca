use polars::prelude::*;
use tracing::debug;

use crate::columns::{
    coerce_column, distinct_rows, drop_all_null_columns, float_values, has_column,
    normalize_columns, replace_text, text_values, HyphenPolicy,
};
use crate::error::{CleanResult, PolarsResultExt};
use crate::numeric::DecimalSeparator;
use crate::text::clean_label;

pub(crate) const NAME: &str = "election";

/// Sparse canton columns, dropped when they carry no value at all.
const SPARSE_COLUMNS: [&str; 2] = ["code_canton", "libelle_canton"];

const COUNT_COLUMNS: [&str; 6] = [
    "inscrits",
    "abstentions",
    "votants",
    "blancs",
    "nuls",
    "exprimes",
];

const LABEL_COLUMNS: [&str; 4] = [
    "libelle_commune",
    "libelle_circonscription",
    "libelle_canton",
    "libelle_departement",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RowRejections {
    missing_registered: usize,
    voters_exceed_registered: usize,
    expressed_mismatch: usize,
}

/// Cleans one round of election results.
///
/// Rows without `inscrits`, rows with more `votants` than `inscrits` and rows
/// where `exprimes != votants - blancs - nuls` are removed, then exact
/// duplicate rows. Malformed counts never fail the call; they become null
/// and the row is judged by the filters above.
pub fn clean_election(raw: &DataFrame) -> CleanResult<DataFrame> {
    let df = normalize_columns(raw, HyphenPolicy::Underscore).in_cleaner(NAME)?;
    let mut df = drop_all_null_columns(df, &SPARSE_COLUMNS).in_cleaner(NAME)?;

    for column in COUNT_COLUMNS {
        if has_column(&df, column) {
            coerce_column(&mut df, column, DecimalSeparator::Point, NAME)?;
        }
    }

    let inscrits = float_values(&df, "inscrits", NAME)?;
    let votants = float_values(&df, "votants", NAME)?;
    let blancs = float_values(&df, "blancs", NAME)?;
    let nuls = float_values(&df, "nuls", NAME)?;
    let exprimes = float_values(&df, "exprimes", NAME)?;

    let mut rejections = RowRejections::default();
    let mut keep = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let Some(registered) = inscrits[idx] else {
            rejections.missing_registered += 1;
            keep.push(false);
            continue;
        };

        if !matches!(votants[idx], Some(voters) if voters <= registered) {
            rejections.voters_exceed_registered += 1;
            keep.push(false);
            continue;
        }

        let consistent = match (exprimes[idx], votants[idx], blancs[idx], nuls[idx]) {
            (Some(expressed), Some(voters), Some(blank), Some(spoilt)) => {
                expressed == voters - blank - spoilt
            }
            _ => false,
        };
        if !consistent {
            rejections.expressed_mismatch += 1;
        }
        keep.push(consistent);
    }

    let filtered = df
        .filter(&BooleanChunked::from_slice("keep".into(), &keep))
        .in_cleaner(NAME)?;
    let mut cleaned = distinct_rows(&filtered).in_cleaner(NAME)?;

    debug!(
        cleaner = NAME,
        missing_registered = rejections.missing_registered,
        voters_exceed_registered = rejections.voters_exceed_registered,
        expressed_mismatch = rejections.expressed_mismatch,
        duplicates = filtered.height() - cleaned.height(),
        "dropped election rows"
    );

    for column in LABEL_COLUMNS {
        if has_column(&cleaned, column) {
            let labels = text_values(&cleaned, column, NAME)?
                .into_iter()
                .map(|value| value.map(|label| clean_label(&label)))
                .collect();
            replace_text(&mut cleaned, column, labels, NAME)?;
        }
    }

    Ok(cleaned)
}
