use super::*;
use crate::assets::texture::Texture;

#[test]
fn alignment_parsing() {
    let a = TextAlign::parse("HT_Center", "VT_Bottom");
    assert_eq!(a.horizontal, Some(HAlign::Center));
    assert_eq!(a.vertical, Some(VAlign::Bottom));

    let b = TextAlign::parse("HT_Right", "HT_Top");
    assert_eq!(b.horizontal, Some(HAlign::Right));
    assert_eq!(b.vertical, Some(VAlign::Top));

    let unset = TextAlign::parse("", "middle");
    assert_eq!(unset, TextAlign::default());
    assert_eq!(TextAlign::parse("VT_Top", "").horizontal, None);
}

#[test]
fn scroll_direction_parsing() {
    assert_eq!(ScrollDirection::parse("Horizontal"), ScrollDirection::Horizontal);
    assert_eq!(ScrollDirection::parse("Vertical_Horizontal"), ScrollDirection::Both);
    assert_eq!(ScrollDirection::parse("Vertical"), ScrollDirection::Vertical);
    assert_eq!(ScrollDirection::parse("???"), ScrollDirection::Vertical);
}

#[test]
fn drawable_and_text_accessors() {
    let region = Arc::new(TextureRegion::whole(Arc::new(Texture::blank("a.png", 2, 2))));
    let image = WidgetContent::Image(Image {
        drawable: Some(Drawable::Region(region.clone())),
    });
    assert_eq!(image.label(), "image");
    assert!(Arc::ptr_eq(image.drawable().unwrap().region(), &region));
    assert_eq!(image.text(), None);

    let bitmap = WidgetContent::BitmapLabel(BitmapLabel {
        text: "score".to_string(),
        font: Arc::new(BitmapFont::fallback()),
    });
    assert_eq!(bitmap.text(), Some("score"));
    assert!(bitmap.drawable().is_none());

    assert_eq!(WidgetContent::Node.label(), "node");
    assert_eq!(
        WidgetContent::Particle { effect: None }.label(),
        "particle"
    );
}
