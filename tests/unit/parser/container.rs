use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::*;
use crate::{
    assets::{atlas::AtlasSet, fonts::FontLibrary, resolver::ResourceResolver},
    document::model::{ColorDef, FileData, WidthHeightDef, XyDef},
    foundation::{core::Rgba8, diag::MemorySink},
    parser::ParserRegistry,
};

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "studio_ui_container_{tag}_test_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn project_node(name: &str, path: &str) -> NodeDescription {
    let mut node = NodeDescription::new("ProjectNodeObjectData", name);
    node.file_data = Some(FileData {
        kind: "Normal".to_string(),
        path: path.to_string(),
        plist: String::new(),
    });
    node
}

fn with_ctx<R>(dir: &Path, f: impl FnOnce(&mut BuildContext<'_>) -> R) -> (R, MemorySink) {
    let registry = ParserRegistry::with_builtin();
    let fonts = FontLibrary::new();
    let sink = MemorySink::new();
    let resolver = ResourceResolver::new(dir, AtlasSet::new(), Arc::new(sink.clone()));
    let mut ctx = BuildContext::new(&registry, resolver, &fonts, Arc::new(sink.clone()));
    (f(&mut ctx), sink)
}

const CHILD_JSON: &str = r#"{
  "Content": { "Content": {
    "ObjectData": {
      "ctype": "SingleNodeObjectData",
      "Name": "child_root",
      "Children": [ { "ctype": "LayerObjectData", "Name": "inner" } ]
    }
  } }
}"#;

#[test]
fn panel_fill_color_follows_combo_index() {
    let mut node = NodeDescription::new("PanelObjectData", "panel");
    node.single_color = Some(ColorDef {
        a: 255,
        r: 10,
        g: 20,
        b: 30,
    });
    node.back_color_alpha = 102;
    node.clip_able = true;

    let ((), _) = with_ctx(Path::new(""), |ctx| {
        let WidgetContent::Panel(panel) = PanelParser.construct(ctx, &node).unwrap() else {
            panic!("expected panel");
        };
        assert_eq!(panel.background_color, None);
        assert!(panel.clip);
    });

    node.combo_box_index = 1;
    let ((), _) = with_ctx(Path::new(""), |ctx| {
        let WidgetContent::Panel(panel) = PanelParser.construct(ctx, &node).unwrap() else {
            panic!("expected panel");
        };
        assert_eq!(panel.background_color, Some(Rgba8::new(10, 20, 30, 102)));
        assert!(panel.background_image.is_none());
    });
}

#[test]
fn scroll_view_inner_size_defaults_to_bounds() {
    let mut node = NodeDescription::new("ScrollViewObjectData", "list");
    node.size = XyDef { x: 200.0, y: 100.0 };
    node.scroll_direction_type = "Horizontal".to_string();
    node.is_bounce_enabled = true;

    let ((), _) = with_ctx(Path::new(""), |ctx| {
        let WidgetContent::ScrollView(view) = ScrollViewParser.construct(ctx, &node).unwrap()
        else {
            panic!("expected scroll view");
        };
        assert_eq!(view.inner_size, Size::new(200.0, 100.0));
        assert_eq!(view.direction, ScrollDirection::Horizontal);
        assert!(view.bounce);
    });

    node.inner_node_size = WidthHeightDef {
        width: 200.0,
        height: 600.0,
    };
    let ((), _) = with_ctx(Path::new(""), |ctx| {
        let WidgetContent::ScrollView(view) = ScrollViewParser.construct(ctx, &node).unwrap()
        else {
            panic!("expected scroll view");
        };
        assert_eq!(view.inner_size, Size::new(200.0, 600.0));
    });
}

#[test]
fn project_node_without_file_is_skipped() {
    let node = NodeDescription::new("SingleNodeObjectData", "root")
        .with_child(NodeDescription::new("ProjectNodeObjectData", "broken"));

    let (root, sink) = with_ctx(Path::new(""), |ctx| ctx.dispatch(None, &node).unwrap().unwrap());
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].message.contains("widget skipped"));
    assert_eq!(entries[0].name.as_deref(), Some("broken"));
    assert_eq!(root.index(), 0);
}

#[test]
fn project_node_builds_nested_root_then_authored_children() {
    let dir = temp_dir("nested");
    std::fs::create_dir_all(dir.join("parts")).unwrap();
    std::fs::write(dir.join("parts/child.json"), CHILD_JSON).unwrap();

    let node = project_node("instance", "parts/child.json")
        .with_child(NodeDescription::new("SingleNodeObjectData", "extra"));

    let ((id, names), sink) = with_ctx(&dir, |ctx| {
        let id = ctx.dispatch(None, &node).unwrap().unwrap();
        let names: Vec<String> = ctx
            .tree()
            .descendants(id)
            .into_iter()
            .map(|w| ctx.tree()[w].name.clone())
            .collect();
        // The resolver directory is restored after the nested build.
        assert_eq!(ctx.dir(), dir.as_path());
        (id, names)
    });

    assert_eq!(names, ["instance", "child_root", "inner", "extra"]);
    assert_eq!(id.index(), 0);
    assert!(sink.is_empty(), "{:?}", sink.entries());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn project_node_cycle_is_reported_not_followed() {
    let dir = temp_dir("cycle");
    let json = r#"{
      "Content": { "Content": {
        "ObjectData": {
          "ctype": "SingleNodeObjectData",
          "Name": "root",
          "Children": [ {
            "ctype": "ProjectNodeObjectData",
            "Name": "again",
            "FileData": { "Type": "Normal", "Path": "self.json" }
          } ]
        }
      } }
    }"#;
    let path = dir.join("self.json");
    std::fs::write(&path, json).unwrap();

    let node = project_node("outer", "self.json");
    let (count, sink) = with_ctx(&dir, |ctx| {
        ctx.dispatch(None, &node).unwrap();
        ctx.tree().len()
    });

    // outer -> root -> again; the second entry into self.json is refused.
    assert_eq!(count, 3);
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].message.contains("cycle"));
    assert_eq!(entries[0].name.as_deref(), Some("again"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_nested_document_is_fatal() {
    let dir = temp_dir("missing");
    let node = project_node("instance", "nowhere.json");
    let (result, _) = with_ctx(&dir, |ctx| ctx.dispatch(None, &node));
    assert!(result.unwrap_err().is_fatal());
    let _ = std::fs::remove_dir_all(&dir);
}
