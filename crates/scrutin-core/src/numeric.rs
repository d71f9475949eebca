use std::borrow::Cow;

use crate::error::{CleanResult, FatalValidationError, RecoverableParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalSeparator {
    Point,
    /// French locale: `8,3` means 8.3.
    Comma,
}

/// Parses one cell as a number. Blank cells and NaN are reported as missing.
pub fn parse_number(
    value: Option<&str>,
    separator: DecimalSeparator,
) -> Result<f64, RecoverableParseError> {
    let raw = value.ok_or(RecoverableParseError::Missing)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecoverableParseError::Missing);
    }

    let candidate = match separator {
        DecimalSeparator::Point => Cow::Borrowed(trimmed),
        DecimalSeparator::Comma => Cow::Owned(trimmed.replace(',', ".")),
    };

    match candidate.parse::<f64>() {
        Ok(parsed) if parsed.is_nan() => Err(RecoverableParseError::Missing),
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(RecoverableParseError::NotANumber(raw.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub values: Vec<Option<f64>>,
    /// Cells holding text that was not a number; missing cells are not counted.
    pub rejected: usize,
}

/// Lossy coercion: anything that does not parse becomes null.
pub fn coerce_permissive<'a, I>(values: I, separator: DecimalSeparator) -> Coerced
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut rejected = 0;
    let values = values
        .into_iter()
        .map(|value| match parse_number(value, separator) {
            Ok(parsed) => Some(parsed),
            Err(RecoverableParseError::Missing) => None,
            Err(RecoverableParseError::NotANumber(_)) => {
                rejected += 1;
                None
            }
        })
        .collect();

    Coerced { values, rejected }
}

/// Strict coercion: missing cells stay null, but the first non-numeric text
/// fails the whole column.
pub fn coerce_strict<'a, I>(
    values: I,
    separator: DecimalSeparator,
    cleaner: &'static str,
    column: &str,
) -> CleanResult<Vec<Option<f64>>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| match parse_number(value, separator) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(RecoverableParseError::Missing) => Ok(None),
            Err(source) => Err(FatalValidationError::StrictParse {
                cleaner,
                column: column.to_string(),
                row,
                source,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_and_comma_decimals() {
        assert_eq!(parse_number(Some(" 45 "), DecimalSeparator::Point), Ok(45.0));
        assert_eq!(parse_number(Some("8,3"), DecimalSeparator::Comma), Ok(8.3));
        assert_eq!(
            parse_number(Some("8,3"), DecimalSeparator::Point),
            Err(RecoverableParseError::NotANumber("8,3".to_string()))
        );
        assert_eq!(
            parse_number(None, DecimalSeparator::Point),
            Err(RecoverableParseError::Missing)
        );
        assert_eq!(
            parse_number(Some("NaN"), DecimalSeparator::Point),
            Err(RecoverableParseError::Missing)
        );
    }

    #[test]
    fn permissive_counts_rejected_text_only() {
        let coerced = coerce_permissive(
            vec![Some("1"), None, Some("abc"), Some("2,5")],
            DecimalSeparator::Comma,
        );
        assert_eq!(coerced.values, vec![Some(1.0), None, None, Some(2.5)]);
        assert_eq!(coerced.rejected, 1);
    }

    #[test]
    fn strict_reports_row_and_column() {
        let err = coerce_strict(
            vec![Some("6,1"), Some("n.d.")],
            DecimalSeparator::Comma,
            "unemployment",
            "taux_chomage",
        )
        .expect_err("non-numeric text must be fatal");

        match err {
            FatalValidationError::StrictParse { column, row, .. } => {
                assert_eq!(column, "taux_chomage");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
