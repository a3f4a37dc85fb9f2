use super::*;

fn tex(w: u32, h: u32) -> Arc<Texture> {
    Arc::new(Texture::blank("page.png", w, h))
}

#[test]
fn blank_texture_has_transparent_pixels() {
    let t = Texture::blank("x", 3, 2);
    assert_eq!(t.rgba8_premul.len(), 3 * 2 * 4);
    assert!(t.rgba8_premul.iter().all(|&b| b == 0));
}

#[test]
fn whole_region_covers_texture() {
    let r = TextureRegion::whole(tex(8, 4));
    assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 8, 4));
    assert_eq!(r.name, "page.png");
    assert_eq!(r.index, -1);
    assert_eq!(r.uv(), (0.0, 0.0, 1.0, 1.0));
}

#[test]
fn flip_toggles_and_swaps_uv() {
    let mut r = TextureRegion::new(tex(10, 10), "a", 0, 0, 5, 10);
    r.flip(true, false);
    assert!(r.is_flip_x());
    assert!(!r.is_flip_y());
    assert_eq!(r.uv(), (0.5, 0.0, 0.0, 1.0));

    r.flip(true, true);
    assert!(!r.is_flip_x());
    assert!(r.is_flip_y());
    assert_eq!(r.uv(), (0.0, 1.0, 0.5, 0.0));
}

#[test]
fn nine_patch_insets_from_cap_rect() {
    let region = Arc::new(TextureRegion::new(tex(64, 64), "btn", 0, 0, 40, 30));
    let p = NinePatch::from_cap_insets(region, 5.0, 4.0, 20.0, 10.0, Rgba8::WHITE);
    assert_eq!((p.left, p.right, p.top, p.bottom), (5.0, 15.0, 4.0, 16.0));
    assert_eq!(p.min_size(), Size::new(20.0, 20.0));
}

#[test]
fn nine_patch_insets_clamp_to_zero() {
    let region = Arc::new(TextureRegion::new(tex(64, 64), "btn", 0, 0, 10, 10));
    let p = NinePatch::from_cap_insets(region, -2.0, 0.0, 50.0, 50.0, Rgba8::WHITE);
    assert_eq!((p.left, p.right, p.top, p.bottom), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn drawable_exposes_region() {
    let region = Arc::new(TextureRegion::new(tex(4, 4), "r", 0, 0, 4, 2));
    let d = Drawable::Region(region.clone());
    assert!(Arc::ptr_eq(d.region(), &region));
    assert!(!d.is_nine_patch());
    assert_eq!(d.min_size(), Size::new(4.0, 2.0));
}
