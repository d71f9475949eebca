use crate::text::zero_pad;

const CORSICAN_CODES: [&str; 2] = ["2A", "2B"];
const CODE_WIDTH: usize = 2;

/// Canonicalizes a French department code.
///
/// Surrounding whitespace is stripped, the code is uppercased and internal
/// spaces are removed. `2A`/`2B` are returned as-is, all-digit codes are
/// zero-padded to two characters, and anything else (overseas codes, empty
/// input, garbage) is returned cleaned but otherwise untouched.
pub fn normalize_department_code(code: &str) -> String {
    let cleaned = code.trim().to_uppercase().replace(' ', "");

    if CORSICAN_CODES.contains(&cleaned.as_str()) {
        return cleaned;
    }

    if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
        return zero_pad(&cleaned, CODE_WIDTH);
    }

    cleaned
}

pub(crate) fn normalize_department_codes(values: Vec<Option<String>>) -> Vec<Option<String>> {
    values
        .into_iter()
        .map(|value| value.map(|code| normalize_department_code(&code)))
        .collect()
}
