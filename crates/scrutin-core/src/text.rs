/// Title-cases `value` word by word.
///
/// A word is a run of cased letters: its first letter is uppercased and the
/// rest lowercased. Anything else (spaces, hyphens, apostrophes, digits)
/// ends the current word, so `"l'hay-les-roses"` becomes `"L'Hay-Les-Roses"`
/// and `"1er"` becomes `"1Er"`.
pub fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_cased = false;

    for ch in value.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && previous_cased {
            output.extend(ch.to_lowercase());
        } else if cased {
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
        previous_cased = cased;
    }

    output
}

/// Left-pads `value` with zeros up to `width` characters, keeping a leading
/// sign in front of the padding. Values already `width` long or longer are
/// returned unchanged.
pub fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let padding = "0".repeat(width - len);
    match value.strip_prefix(&['+', '-'][..]) {
        Some(rest) => format!("{}{padding}{rest}", &value[..1]),
        None => format!("{padding}{value}"),
    }
}

/// Strips surrounding whitespace, then title-cases.
pub fn clean_label(value: &str) -> String {
    title_case(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_handles_french_place_names() {
        assert_eq!(title_case("SAINT-DENIS"), "Saint-Denis");
        assert_eq!(title_case("l'hay-les-roses"), "L'Hay-Les-Roses");
        assert_eq!(title_case("corse-du-sud"), "Corse-Du-Sud");
        assert_eq!(title_case("ÉPINAL"), "Épinal");
        assert_eq!(title_case("paris 1er"), "Paris 1Er");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn zero_pad_only_pads_short_values() {
        assert_eq!(zero_pad("1", 2), "01");
        assert_eq!(zero_pad("84", 2), "84");
        assert_eq!(zero_pad("971", 2), "971");
        assert_eq!(zero_pad("", 2), "00");
        assert_eq!(zero_pad("-", 2), "-0");
        assert_eq!(zero_pad("-5", 3), "-05");
    }

    #[test]
    fn clean_label_trims_before_casing() {
        assert_eq!(clean_label("  ajaccio  "), "Ajaccio");
    }
}
