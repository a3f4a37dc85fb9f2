use super::*;

#[test]
fn parses_nested_content_blocks() {
    let doc = Document::from_json_str(
        r#"{
            "Name": "MainScene",
            "Content": {"Content": {
                "Animation": {"Duration": 40, "Speed": 1.0, "Timelines": []},
                "ObjectData": {"ctype": "GameLayerObjectData", "Name": "Scene", "Children": [
                    {"ctype": "SpriteObjectData", "Name": "a"},
                    {"ctype": "SpriteObjectData", "Name": "b"}
                ]}
            }}
        }"#,
    )
    .unwrap();

    assert_eq!(doc.root().unwrap().name, "Scene");
    assert_eq!(doc.node_count(), 3);
    assert_eq!(doc.animation().duration, 40.0);
    assert_eq!(doc.dir(), Path::new(""));
}

#[test]
fn missing_root_is_a_document_error() {
    let doc = Document::from_json_str(r#"{"Content": {"Content": {}}}"#).unwrap();
    assert!(doc.root().is_none());
    assert_eq!(doc.node_count(), 0);
    let err = doc.require_root().unwrap_err();
    assert!(matches!(err, UiError::Document(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Document::from_json_str("{").unwrap_err();
    assert!(matches!(err, UiError::Serde(_)));
}

#[test]
fn from_path_uses_parent_directory() {
    let tmp = std::env::temp_dir().join(format!(
        "studio_ui_document_test_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("ui.json");
    std::fs::write(
        &path,
        r#"{"Content": {"Content": {"ObjectData": {"ctype": "LayerObjectData"}}}}"#,
    )
    .unwrap();

    let doc = Document::from_path(&path).unwrap();
    assert_eq!(doc.dir(), tmp.as_path());
    assert_eq!(doc.source(), Some(path.as_path()));
    assert!(Document::from_path(tmp.join("missing.json")).is_err());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn from_str_parses_like_from_json_str() {
    let doc: Document = r#"{"Content": {"Content": {"ObjectData": {"ctype": "PanelObjectData", "Name": "p"}}}}"#
        .parse()
        .unwrap();
    assert_eq!(doc.root().unwrap().ctype, "PanelObjectData");
}
