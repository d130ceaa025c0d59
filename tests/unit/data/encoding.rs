use super::*;

// "Amélie" in cp1252 / latin-1.
const AMELIE_LEGACY: &[u8] = b"Am\xE9lie";

#[test]
fn utf8_strips_bom_and_rejects_legacy_bytes() {
    assert_eq!(
        TextEncoding::Utf8.decode(b"\xEF\xBB\xBFTitle").as_deref(),
        Some("Title")
    );
    assert_eq!(TextEncoding::Utf8.decode(AMELIE_LEGACY), None);
    assert_eq!(
        TextEncoding::Utf8.decode("Amélie".as_bytes()).as_deref(),
        Some("Amélie")
    );
}

#[test]
fn latin1_accepts_every_byte() {
    let all: Vec<u8> = (0u8..=255).collect();
    let text = TextEncoding::Latin1.decode(&all).unwrap();
    assert_eq!(text.chars().count(), 256);
    assert_eq!(
        TextEncoding::Iso8859_1.decode(AMELIE_LEGACY).as_deref(),
        Some("Amélie")
    );
}

#[test]
fn cp1252_maps_pound_and_rejects_undefined_positions() {
    assert_eq!(
        TextEncoding::Cp1252.decode(b"\xA31.5m \x80").as_deref(),
        Some("£1.5m €")
    );
    assert_eq!(TextEncoding::Cp1252.decode(b"bad \x81 byte"), None);
}

#[test]
fn fallback_uses_first_accepting_candidate() {
    let path = Path::new("legacy.csv");
    let (text, enc) = decode_with_fallback(path, AMELIE_LEGACY, &DEFAULT_ENCODINGS).unwrap();
    assert_eq!(text, "Amélie");
    assert_eq!(enc, TextEncoding::Iso8859_1);

    let (_, enc) = decode_with_fallback(
        path,
        AMELIE_LEGACY,
        &[TextEncoding::Utf8, TextEncoding::Cp1252],
    )
    .unwrap();
    assert_eq!(enc, TextEncoding::Cp1252);
}

#[test]
fn fallback_exhaustion_names_the_file() {
    let err = decode_with_fallback(
        Path::new("broken.csv"),
        b"\x81\xFF",
        &[TextEncoding::Utf8, TextEncoding::Cp1252],
    )
    .unwrap_err();
    match err {
        CinetrendError::Decode { path, tried } => {
            assert_eq!(path, Path::new("broken.csv"));
            assert_eq!(tried, vec!["utf-8", "cp1252"]);
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn empty_candidate_list_is_a_decode_error() {
    let err = decode_with_fallback(Path::new("x.csv"), b"a,b", &[]).unwrap_err();
    assert!(matches!(err, CinetrendError::Decode { .. }));
}

#[test]
fn names_round_trip_through_serde() {
    for enc in DEFAULT_ENCODINGS {
        let json = serde_json::to_string(&enc).unwrap();
        assert_eq!(json, format!("\"{}\"", enc.name()));
        let back: TextEncoding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enc);
    }
    let alias: TextEncoding = serde_json::from_str("\"windows-1252\"").unwrap();
    assert_eq!(alias, TextEncoding::Cp1252);
}
