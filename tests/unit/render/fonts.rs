use super::*;

#[test]
fn missing_font_file_is_a_resource_error() {
    let err = FontSet::load(Some(Path::new("does/not/exist.ttf"))).unwrap_err();
    assert!(matches!(err, CinetrendError::Resource(_)));
    assert!(err.to_string().contains("exist.ttf"));
}

#[test]
fn non_font_bytes_are_a_resource_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("arial.ttf");
    std::fs::write(&path, b"definitely not a font").unwrap();
    let err = FontSet::load(Some(&path)).unwrap_err();
    assert!(matches!(err, CinetrendError::Resource(_)));
}

#[test]
fn options_share_the_loaded_database() {
    // System fonts may be absent on minimal hosts; that path is covered above.
    let Ok(fonts) = FontSet::load(None) else {
        return;
    };
    assert!(fonts.face_count() > 0);
    assert_eq!(fonts.options().fontdb.len(), fonts.face_count());
}
