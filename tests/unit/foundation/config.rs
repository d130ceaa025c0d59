use super::*;

#[test]
fn defaults_match_the_yearbook_report() {
    let cfg = ReportConfig::default();
    assert_eq!(cfg.input_pattern, "bfi_yearbook-*.csv");
    assert_eq!(
        cfg.encodings,
        vec![
            TextEncoding::Utf8,
            TextEncoding::Iso8859_1,
            TextEncoding::Latin1,
            TextEncoding::Cp1252
        ]
    );
    assert_eq!(cfg.top_n, 10);
    assert_eq!(cfg.chart.pixel_size(), (3000, 1800));
    assert_eq!(cfg.header.height_px, 100);
    assert_eq!(cfg.outputs.genre_trends, "genre_trends.png");
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{
        "input_pattern": "films-*.csv",
        "encodings": ["utf-8", "cp1252"],
        "chart": { "dpi": 100 },
        "header": { "title": "Trends" }
    }"#;
    let cfg = ReportConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.input_pattern, "films-*.csv");
    assert_eq!(cfg.encodings, vec![TextEncoding::Utf8, TextEncoding::Cp1252]);
    assert_eq!(cfg.chart.dpi, 100);
    assert_eq!(cfg.chart.width_in, 10.0);
    assert_eq!(cfg.chart.pixel_size(), (1000, 600));
    assert_eq!(cfg.header.title, "Trends");
    assert_eq!(cfg.header.subtitle_px, 40.0);
    assert_eq!(cfg.columns, ColumnMap::default());
}

#[test]
fn drop_policy_uses_snake_case_names() {
    let cfg = ReportConfig::from_reader(r#"{"drop_policy":"projected_columns"}"#.as_bytes())
        .unwrap();
    assert_eq!(cfg.drop_policy, DropPolicy::ProjectedColumns);
}

#[test]
fn unknown_encoding_is_a_config_error() {
    let err = ReportConfig::from_reader(r#"{"encodings":["ebcdic"]}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CinetrendError::Config(_)));
}

#[test]
fn validate_rejects_unusable_values() {
    let mut cfg = ReportConfig::default();
    cfg.encodings.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = ReportConfig::default();
    cfg.top_n = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReportConfig::default();
    cfg.chart.dpi = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReportConfig::default();
    cfg.chart.height_in = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReportConfig::default();
    cfg.input_pattern = "  ".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn output_path_joins_output_dir() {
    let cfg = ReportConfig {
        output_dir: PathBuf::from("out"),
        ..ReportConfig::default()
    };
    assert_eq!(
        cfg.output_path("films_per_year.png"),
        PathBuf::from("out").join("films_per_year.png")
    );
}
