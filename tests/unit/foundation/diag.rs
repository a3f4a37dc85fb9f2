use super::*;

#[test]
fn memory_sink_clones_share_buffer() {
    let sink = MemorySink::new();
    let handle = sink.clone();
    handle.emit(Diagnostic::new(Severity::Debug, "first"));
    handle.emit(Diagnostic::new(Severity::Error, "second").for_node("TextObjectData", "title"));

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "first");
    assert_eq!(entries[1].kind.as_deref(), Some("TextObjectData"));
    assert_eq!(entries[1].name.as_deref(), Some("title"));
}

#[test]
fn display_includes_node_identity() {
    let d = Diagnostic::new(Severity::Debug, "texture not found").for_node("ImageViewObjectData", "bg");
    assert_eq!(
        d.to_string(),
        "[debug] ImageViewObjectData 'bg': texture not found"
    );
    assert_eq!(
        Diagnostic::new(Severity::Error, "bad").to_string(),
        "[error] bad"
    );
}

#[test]
fn tracing_sink_accepts_both_severities() {
    let sink = TracingSink;
    sink.emit(Diagnostic::new(Severity::Debug, "d"));
    sink.emit(Diagnostic::new(Severity::Error, "e"));
}
