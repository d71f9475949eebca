use std::fs;
use std::path::PathBuf;

use polars::prelude::DataFrame;

use crate::errors::ParserError;
use crate::{read_delimited, read_delimited_file, DelimitedOptions};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

fn parse(content: &str) -> Result<DataFrame, ParserError> {
    read_delimited(content, &DelimitedOptions::default())
}

#[test]
fn reads_election_fixture_with_raw_headers() {
    let df = read_delimited_file(&fixture_path("resultats_tour1.csv")).expect("parse failed");

    assert_eq!(df.width(), 12);
    assert_eq!(df.height(), 8);
    assert_eq!(column_names(&df)[0], "Code Departement");
    assert_eq!(column_names(&df)[3], "Libelle Commune");

    let canton = df.column("Code Canton").expect("missing canton column");
    assert_eq!(canton.null_count(), df.height());
}

#[test]
fn keeps_cell_text_verbatim() {
    let df = read_delimited_file(&fixture_path("resultats_tour1.csv")).expect("parse failed");

    let communes = df.column("Libelle Commune").unwrap().str().unwrap();
    assert_eq!(communes.get(2), Some("  ajaccio  "));

    let codes = df.column("Code Commune").unwrap().str().unwrap();
    assert_eq!(codes.get(0), Some("001"));
}

#[test]
fn blank_and_marker_cells_are_null() {
    let df = parse("a;b;c\n1;;NA\n  ;x;nan\n").expect("parse failed");

    let a = df.column("a").unwrap().str().unwrap();
    let b = df.column("b").unwrap().str().unwrap();
    let c = df.column("c").unwrap().str().unwrap();

    assert_eq!(a.get(0), Some("1"));
    assert_eq!(a.get(1), None);
    assert_eq!(b.get(0), None);
    assert_eq!(b.get(1), Some("x"));
    assert_eq!(c.null_count(), 2);
}

#[test]
fn strips_leading_byte_order_mark() {
    let df = parse("\u{feff}code;nom\n75;Paris\n").expect("parse failed");
    assert_eq!(column_names(&df), vec!["code", "nom"]);
}

#[test]
fn renames_blank_and_repeated_headers() {
    let content = fs::read_to_string(fixture_path("chomage.csv")).expect("fixture");
    let df = parse(&content).expect("parse failed");

    assert_eq!(
        column_names(&df),
        vec![
            "Taux de chomage localise par departement",
            "Unnamed: 1",
            "Unnamed: 2",
        ]
    );
    assert_eq!(df.height(), 5);

    let repeated = parse("x;x;x\n1;2;3\n").expect("parse failed");
    assert_eq!(column_names(&repeated), vec!["x", "x.1", "x.2"]);
}

#[test]
fn pads_short_rows_and_rejects_long_rows() {
    let df = parse("a;b;c\n1;2\n").expect("short rows should parse");
    assert_eq!(df.column("c").unwrap().null_count(), 1);

    let err = parse("a;b\n1;2;3\n").expect_err("long rows should fail");
    assert!(matches!(
        err,
        ParserError::TooManyFields {
            expected: 2,
            found: 3,
            ..
        }
    ));
}

#[test]
fn empty_input_has_no_header() {
    let err = parse("").expect_err("empty input should fail");
    assert!(matches!(err, ParserError::MissingHeader));
}

#[test]
fn header_only_input_yields_empty_table() {
    let df = parse("a;b\n").expect("parse failed");
    assert_eq!(df.width(), 2);
    assert_eq!(df.height(), 0);
}

#[test]
fn missing_file_reports_path() {
    let err = read_delimited_file(&fixture_path("does_not_exist.csv"))
        .expect_err("missing file should fail");
    match err {
        ParserError::Io { path, .. } => assert!(path.ends_with("does_not_exist.csv")),
        other => panic!("unexpected error: {other}"),
    }
}
