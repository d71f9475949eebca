use scrutin_core::normalize_department_code;

#[test]
fn corsican_codes_are_uppercased_and_kept() {
    assert_eq!(normalize_department_code("2a"), "2A");
    assert_eq!(normalize_department_code(" 2B "), "2B");
    assert_eq!(normalize_department_code("2 b"), "2B");
}

#[test]
fn short_numeric_codes_are_zero_padded() {
    assert_eq!(normalize_department_code("5"), "05");
    assert_eq!(normalize_department_code(" 1 "), "01");
    assert_eq!(normalize_department_code("75"), "75");
}

#[test]
fn long_and_non_numeric_codes_pass_through() {
    assert_eq!(normalize_department_code("971"), "971");
    assert_eq!(normalize_department_code("9 74"), "974");
    assert_eq!(normalize_department_code("ZZ"), "ZZ");
    assert_eq!(normalize_department_code("2c"), "2C");
    assert_eq!(normalize_department_code(""), "");
    assert_eq!(normalize_department_code("   "), "");
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "2a", " 2B ", "5", "05", "971", "", "  7 5 ", "abc", "-1", "2 A", "0", "1e3",
    ];
    for sample in samples {
        let once = normalize_department_code(sample);
        let twice = normalize_department_code(&once);
        assert_eq!(once, twice, "not idempotent for {sample:?}");
    }
}
