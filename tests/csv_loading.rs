use penguin_stats::ingest::{load_csv_from_path, load_csv_from_reader};
use penguin_stats::StatsError;

#[test]
fn load_csv_from_path_happy_path() {
    let ds = load_csv_from_path("tests/fixtures/penguins.csv").unwrap();

    assert_eq!(
        ds.columns,
        vec![
            "species",
            "island",
            "bill_length_mm",
            "body_mass_g",
            "flipper_length_mm"
        ]
    );
    assert_eq!(ds.row_count(), 9);
    assert_eq!(
        ds.rows[0],
        vec!["Adelie", "Torgersen", "39.1", "3750", "181"]
    );
    // Missing values arrive as raw sentinels, untouched by loading.
    assert_eq!(ds.cell(3, 3), "NA");
    assert_eq!(ds.cell(8, 3), "");
}

#[test]
fn load_csv_from_path_errors_on_missing_file() {
    let err = load_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    match err {
        StatsError::Csv(e) => assert!(matches!(e.kind(), csv::ErrorKind::Io(_))),
        other => panic!("expected csv io error, got: {other}"),
    }
}

#[test]
fn load_csv_from_reader_preserves_column_order() {
    let input = "flipper_length_mm,species,island,body_mass_g\n181,Adelie,Torgersen,3750\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = load_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.index_of("flipper_length_mm"), Some(0));
    assert_eq!(ds.index_of("body_mass_g"), Some(3));
    assert_eq!(ds.cell(0, 1), "Adelie");
}

#[test]
fn load_csv_from_reader_errors_on_uneven_records() {
    let input = "species,island\nAdelie,Torgersen,extra_cell\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = load_csv_from_reader(&mut rdr).unwrap_err();
    assert!(matches!(err, StatsError::Csv(_)));
}

#[test]
fn load_csv_from_reader_empty_body_yields_zero_rows() {
    let input = "species,island,body_mass_g,flipper_length_mm\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = load_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.columns.len(), 4);
    assert_eq!(ds.row_count(), 0);
}
