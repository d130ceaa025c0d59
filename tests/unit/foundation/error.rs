use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CinetrendError::invalid_value("x")
            .to_string()
            .contains("invalid value:")
    );
    assert!(CinetrendError::csv("x").to_string().contains("csv error:"));
    assert!(
        CinetrendError::resource("x")
            .to_string()
            .contains("resource error:")
    );
    assert!(
        CinetrendError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        CinetrendError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CinetrendError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn decode_error_names_file_and_encodings() {
    let err = CinetrendError::Decode {
        path: PathBuf::from("bfi_yearbook-2019.csv"),
        tried: vec!["utf-8".to_string(), "cp1252".to_string()],
    };
    let msg = err.to_string();
    assert!(msg.contains("bfi_yearbook-2019.csv"));
    assert!(msg.contains("utf-8, cp1252"));
}

#[test]
fn missing_column_names_the_column() {
    let msg = CinetrendError::MissingColumn("Genre".to_string()).to_string();
    assert_eq!(msg, "missing column: 'Genre'");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CinetrendError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
