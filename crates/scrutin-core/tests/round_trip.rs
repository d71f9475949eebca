use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use polars::prelude::DataFrame;
use scrutin_core::load::{FlatFileSink, BYTE_ORDER_MARK};
use scrutin_core::{clean_election, clean_security, clean_unemployment};
use scrutin_parser::read_delimited_file;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../scrutin-parser/tests/data")
        .join(name)
}

fn column_set(df: &DataFrame) -> BTreeSet<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

fn assert_round_trip(cleaned: &DataFrame, file_name: &str) {
    let dir = tempfile::tempdir().expect("tempdir");
    let sink = FlatFileSink::new(dir.path().join("out"));

    let path = sink.write_table(cleaned, file_name).expect("write failed");
    let reread = read_delimited_file(&path).expect("re-read failed");

    assert_eq!(reread.height(), cleaned.height());
    assert_eq!(column_set(&reread), column_set(cleaned));
}

#[test]
fn election_table_survives_export() {
    let raw = read_delimited_file(&fixture_path("resultats_tour1.csv")).unwrap();
    assert_round_trip(&clean_election(&raw).unwrap(), "clean_tour1.csv");
}

#[test]
fn unemployment_table_survives_export() {
    let raw = read_delimited_file(&fixture_path("chomage.csv")).unwrap();
    assert_round_trip(&clean_unemployment(&raw).unwrap(), "clean_chomage.csv");
}

#[test]
fn security_table_survives_export() {
    let raw = read_delimited_file(&fixture_path("securite.csv")).unwrap();
    assert_round_trip(&clean_security(&raw).unwrap(), "clean_securite.csv");
}

#[test]
fn export_writes_bom_semicolons_and_plain_numbers() {
    let raw = read_delimited_file(&fixture_path("chomage.csv")).unwrap();
    let cleaned = clean_unemployment(&raw).unwrap();

    let dir = tempfile::tempdir().expect("tempdir");
    let sink = FlatFileSink::new(dir.path());
    let path = sink.write_table(&cleaned, "clean_chomage.csv").unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(BYTE_ORDER_MARK));

    let text = String::from_utf8(bytes[BYTE_ORDER_MARK.len()..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "code_departement;departement;taux_chomage");
    assert_eq!(lines[1], "01;Ain;6.1");
    assert_eq!(lines[3], "75;Paris;8.3");
    assert_eq!(lines.len(), 5);
}

#[test]
fn export_writes_whole_counts_without_fraction() {
    let raw = read_delimited_file(&fixture_path("resultats_tour1.csv")).unwrap();
    let cleaned = clean_election(&raw).unwrap();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = FlatFileSink::new(dir.path())
        .write_table(&cleaned, "clean_tour1.csv")
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.ends_with(";100;50;50;2;3;45"), "row was {first_row}");
}
