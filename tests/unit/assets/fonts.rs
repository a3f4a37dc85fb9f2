use super::*;

const FNT: &str = r#"info face="Hud Font" size=24 bold=0 italic=0 charset="" unicode=1
common lineHeight=28 base=22 scaleW=256 scaleH=256 pages=1 packed=0
page id=0 file="hud.png"
chars count=2
char id=65   x=0     y=0     width=14    height=18    xoffset=0     yoffset=4     xadvance=15    page=0  chnl=15
char id=66   x=14    y=0     width=12    height=18    xoffset=1     yoffset=4     xadvance=13    page=0  chnl=15
kernings count=0
"#;

#[test]
fn parses_angelcode_text_format() {
    let font = BitmapFont::parse(FNT).unwrap();
    assert_eq!(font.face, "Hud Font");
    assert_eq!(font.size, 24);
    assert_eq!(font.line_height, 28);
    assert_eq!(font.base, 22);
    assert_eq!(font.pages, vec!["hud.png".to_string()]);
    assert_eq!(font.glyphs.len(), 2);

    let b = font.glyph('B').unwrap();
    assert_eq!((b.x, b.width, b.xoffset, b.xadvance), (14, 12, 1, 13));
    assert_eq!(font.measure("ABA?"), 15 + 13 + 15);
}

#[test]
fn bad_number_is_a_validation_error() {
    let err = BitmapFont::parse("char id=x\n").unwrap_err();
    assert!(matches!(err, UiError::Validation(_)));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn values_outside_their_field_are_rejected() {
    let err = BitmapFont::parse("char id=65 xadvance=99999999999\n").unwrap_err();
    assert!(matches!(err, UiError::Validation(_)));
    assert!(err.to_string().contains("xadvance"));

    let err = BitmapFont::parse("char id=5000000000\n").unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn page_ids_are_bounded_by_the_declared_count() {
    let err = BitmapFont::parse("page id=4000000000 file=\"x.png\"\n").unwrap_err();
    assert!(matches!(err, UiError::Validation(_)));

    let text = "common lineHeight=10 base=8 pages=2\npage id=1 file=\"b.png\"\npage id=2 file=\"c.png\"\n";
    let err = BitmapFont::parse(text).unwrap_err();
    assert!(err.to_string().contains("line 3"));

    let font = BitmapFont::parse("common pages=2\npage id=1 file=\"b.png\"\n").unwrap();
    assert_eq!(font.pages, vec![String::new(), "b.png".to_string()]);
}

#[test]
fn measure_sums_beyond_i32() {
    let max = i32::MAX;
    let font = BitmapFont::parse(&format!("char id=65 xadvance={max}\n")).unwrap();
    assert_eq!(font.measure("AAA"), 3 * i64::from(max));

    let font = BitmapFont::parse(&format!("char id=65 xadvance={}\n", i32::MIN)).unwrap();
    assert_eq!(font.measure("AA"), 2 * i64::from(i32::MIN));
}

#[test]
fn missing_font_file_is_fatal() {
    let err = BitmapFont::load("nope/missing.fnt").unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn attrs_handle_quotes_and_spacing() {
    let attrs = parse_attrs(r#"face="A B"  size=3 empty="" tail=9"#);
    assert_eq!(attrs["face"], "A B");
    assert_eq!(attrs["size"], "3");
    assert_eq!(attrs["empty"], "");
    assert_eq!(attrs["tail"], "9");
}

#[test]
fn library_lookups() {
    let lib = FontLibrary::new()
        .with_ttf("fonts/a.ttf", "/sys/a.ttf")
        .with_default_font("/sys/default.ttf");
    assert_eq!(lib.ttf("fonts/a.ttf"), Some(Path::new("/sys/a.ttf")));
    assert_eq!(lib.ttf("fonts/b.ttf"), None);
    assert_eq!(lib.default_font(), Some(Path::new("/sys/default.ttf")));
    assert!(!lib.has_preloaded_bitmap_fonts());

    let lib = lib.with_bitmap_font("fonts/hud.fnt", BitmapFont::fallback());
    assert!(lib.has_preloaded_bitmap_fonts());
    assert_eq!(lib.preloaded_bitmap_font("fonts/hud.fnt").unwrap().face, "default");
    assert!(lib.preloaded_bitmap_font("fonts/other.fnt").is_none());
}
