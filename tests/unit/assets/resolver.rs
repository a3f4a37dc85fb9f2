use super::*;
use crate::{assets::atlas::TextureAtlas, foundation::diag::MemorySink};

fn atlas_set() -> (AtlasSet, Arc<TextureRegion>, Arc<TextureRegion>) {
    let page = Arc::new(Texture::blank("ui.png", 64, 64));
    let mut atlas = TextureAtlas::new();
    let btn = atlas.add_region(TextureRegion::new(page.clone(), "buttons/ok", 0, 0, 20, 10));
    let frame = atlas.add_region(TextureRegion::new(page, "walk", 20, 0, 8, 8).with_index(2));
    (AtlasSet::new().with(atlas), btn, frame)
}

fn resolver(atlases: AtlasSet) -> (ResourceResolver, MemorySink) {
    let sink = MemorySink::new();
    (ResourceResolver::new("", atlases, Arc::new(sink.clone())), sink)
}

fn node() -> NodeDescription {
    NodeDescription::new("ImageViewObjectData", "img")
}

#[test]
fn lookup_key_transform() {
    assert_eq!(atlas_lookup_key("ok.png").as_deref(), Some("ok"));
    assert_eq!(atlas_lookup_key("ui/buttons/ok.png").as_deref(), Some("buttons/ok"));
    assert_eq!(atlas_lookup_key("ui/ok.png").as_deref(), Some("ok"));
    assert_eq!(atlas_lookup_key("noext"), None);
    assert_eq!(atlas_lookup_key(".png"), None);
    assert_eq!(atlas_lookup_key("ui/.png"), None);
}

#[test]
fn index_suffix_split() {
    assert_eq!(split_index_suffix("walk_2"), Some(("walk", 2)));
    assert_eq!(split_index_suffix("a_b_10"), Some(("a_b", 10)));
    assert_eq!(split_index_suffix("btn_ok"), None);
    assert_eq!(split_index_suffix("plain"), None);
}

#[test]
fn atlas_hit_returns_shared_region() {
    let (set, btn, _) = atlas_set();
    let (mut r, sink) = resolver(set);
    let got = r.resolve_region(&node(), "ui/buttons/ok.png").unwrap().unwrap();
    assert!(Arc::ptr_eq(&got, &btn));
    assert!(sink.is_empty());
}

#[test]
fn indexed_name_resolves_strictly() {
    let (set, _, frame) = atlas_set();
    let (mut r, sink) = resolver(set);
    let got = r.resolve_region(&node(), "anim/walk_2.png").unwrap().unwrap();
    assert!(Arc::ptr_eq(&got, &frame));

    // A different index does not fall back to another frame.
    assert!(r.resolve_region(&node(), "anim/walk_3.png").unwrap().is_none());
    assert_eq!(sink.len(), 1);
}

#[test]
fn atlas_miss_reports_and_returns_none() {
    let (set, _, _) = atlas_set();
    let (mut r, sink) = resolver(set);
    assert!(r.resolve_region(&node(), "ui/missing.png").unwrap().is_none());

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Debug);
    assert!(entries[0].message.contains("texture not found"));
    assert_eq!(entries[0].name.as_deref(), Some("img"));
}

#[test]
fn malformed_name_reports_and_continues_with_raw_name() {
    let page = Arc::new(Texture::blank("p", 4, 4));
    let mut atlas = TextureAtlas::new();
    let raw = atlas.add_region(TextureRegion::new(page, "raw", 0, 0, 4, 4));
    let (mut r, sink) = resolver(AtlasSet::new().with(atlas));

    let got = r.resolve_region(&node(), "raw").unwrap().unwrap();
    assert!(Arc::ptr_eq(&got, &raw));
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
}

#[test]
fn flip_copies_atlas_region() {
    let (set, btn, _) = atlas_set();
    let (mut r, _) = resolver(set);
    let mut n = node();
    n.flip_x = true;

    let flipped = r.resolve_region(&n, "ui/buttons/ok.png").unwrap().unwrap();
    assert!(flipped.is_flip_x());
    assert!(!Arc::ptr_eq(&flipped, &btn));
    // The shared atlas entry stays untouched.
    assert!(!btn.is_flip_x());
    let again = r.resolve_region(&node(), "ui/buttons/ok.png").unwrap().unwrap();
    assert!(!again.is_flip_x());
}

#[test]
fn nine_patch_wraps_region() {
    let (set, _, _) = atlas_set();
    let (mut r, _) = resolver(set);
    let mut n = node();
    n.scale9_enable = true;
    n.scale9_origin_x = 2.0;
    n.scale9_origin_y = 1.0;
    n.scale9_width = 10.0;
    n.scale9_height = 4.0;

    let d = r.resolve_drawable(&n, "ui/buttons/ok.png").unwrap().unwrap();
    let Drawable::NinePatch(p) = d else {
        panic!("expected nine-patch");
    };
    assert_eq!((p.left, p.right, p.top, p.bottom), (2.0, 8.0, 1.0, 5.0));
}

#[test]
fn empty_or_absent_file_resolves_to_none() {
    let (mut r, sink) = resolver(AtlasSet::new());
    assert!(r.resolve_file_drawable(&node(), None).unwrap().is_none());
    let empty = FileData::default();
    assert!(r.resolve_file_drawable(&node(), Some(&empty)).unwrap().is_none());
    assert!(sink.is_empty());
}

#[test]
fn loose_files_load_from_document_dir() {
    let tmp = std::env::temp_dir().join(format!(
        "studio_ui_resolver_test_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(tmp.join("img")).unwrap();
    image::RgbaImage::from_pixel(3, 2, image::Rgba([0, 0, 255, 255]))
        .save(tmp.join("img/a.png"))
        .unwrap();

    let sink = MemorySink::new();
    let mut r = ResourceResolver::new(&tmp, AtlasSet::new(), Arc::new(sink.clone()));
    let mut n = node();
    n.flip_y = true;
    let region = r.resolve_region(&n, "img/a.png").unwrap().unwrap();
    assert_eq!((region.width, region.height), (3, 2));
    assert!(region.is_flip_y());

    // Second resolution reuses the decoded texture.
    let again = r.resolve_region(&node(), "img/a.png").unwrap().unwrap();
    assert!(Arc::ptr_eq(region.texture(), again.texture()));
    assert!(!again.is_flip_y());

    let err = r.resolve_region(&node(), "img/missing.png").unwrap_err();
    assert!(err.is_fatal());

    std::fs::remove_dir_all(&tmp).ok();
}
