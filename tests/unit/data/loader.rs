use super::*;
use crate::data::encoding::DEFAULT_ENCODINGS;

const HEADER: &str = "Title,Genre,Widest point of release,Box office gross (£ million)\n";

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn discover_matches_pattern_in_sorted_order() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "bfi_yearbook-2021.csv", HEADER.as_bytes());
    write(tmp.path(), "bfi_yearbook-2019.csv", HEADER.as_bytes());
    write(tmp.path(), "other.csv", HEADER.as_bytes());
    std::fs::create_dir(tmp.path().join("bfi_yearbook-dir.csv")).unwrap();

    let found = discover_inputs(tmp.path(), "bfi_yearbook-*.csv").unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["bfi_yearbook-2019.csv", "bfi_yearbook-2021.csv"]);
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = discover_inputs(tmp.path(), "[").unwrap_err();
    assert!(matches!(err, CinetrendError::Config(_)));
}

#[test]
fn read_table_falls_back_to_legacy_encoding() {
    let tmp = tempfile::tempdir().unwrap();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"Title,Genre,Widest point of release,Box office gross (\xA3 million)\n");
    bytes.extend_from_slice(b"Am\xE9lie,Comedy,2001,5.1\n");
    let path = write(tmp.path(), "legacy.csv", &bytes);

    let t = read_table(&path, &DEFAULT_ENCODINGS).unwrap();
    assert_eq!(t.columns()[3], "Box office gross (£ million)");
    assert_eq!(t.rows()[0][0].as_deref(), Some("Amélie"));
}

#[test]
fn read_table_pads_short_rows_and_rejects_long_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let short = write(tmp.path(), "short.csv", b"a,b,c\n1,2\n");
    let t = read_table(&short, &DEFAULT_ENCODINGS).unwrap();
    assert_eq!(t.rows()[0], vec![Some("1".into()), Some("2".into()), None]);

    let long = write(tmp.path(), "long.csv", b"a,b\n1,2,3\n");
    let err = read_table(&long, &DEFAULT_ENCODINGS).unwrap_err();
    assert!(matches!(err, CinetrendError::Csv(_)));
    assert!(err.to_string().contains("long.csv"));
}

#[test]
fn read_table_handles_quoted_commas() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "quoted.csv",
        b"Title,Genre\n\"Crouching Tiger, Hidden Dragon\",Action\n",
    );
    let t = read_table(&path, &DEFAULT_ENCODINGS).unwrap();
    assert_eq!(
        t.rows()[0][0].as_deref(),
        Some("Crouching Tiger, Hidden Dragon")
    );
}

#[test]
fn load_tables_concatenates_in_file_order() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "bfi_yearbook-a.csv",
        format!("{HEADER}X,Drama,2020,1.5\nY,Comedy,2020,2.0\n").as_bytes(),
    );
    write(
        tmp.path(),
        "bfi_yearbook-b.csv",
        format!("{HEADER}Z,Drama,2021,3.0\n").as_bytes(),
    );

    let (t, files) = load_tables(tmp.path(), "bfi_yearbook-*.csv", &DEFAULT_ENCODINGS).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(t.len(), 3);
    let titles: Vec<_> = t.rows().iter().map(|r| r[0].clone().unwrap()).collect();
    assert_eq!(titles, vec!["X", "Y", "Z"]);
}

#[test]
fn load_tables_fails_fast_without_inputs() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_tables(tmp.path(), "bfi_yearbook-*.csv", &DEFAULT_ENCODINGS).unwrap_err();
    assert!(matches!(err, CinetrendError::NoInputs { .. }));
}
