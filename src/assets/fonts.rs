//! Fonts referenced by text widgets.
//!
//! TrueType fonts are looked up by resource path in a caller-provided table; bitmap fonts are
//! AngelCode `.fnt` text files, either preloaded into the library or read next to the document.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    foundation::{
        core::Rgba8,
        error::{UiError, UiResult},
    },
};

/// One glyph of a bitmap font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Left edge on the page.
    pub x: u32,
    /// Top edge on the page.
    pub y: u32,
    /// Glyph width.
    pub width: u32,
    /// Glyph height.
    pub height: u32,
    /// Horizontal draw offset.
    pub xoffset: i32,
    /// Vertical draw offset.
    pub yoffset: i32,
    /// Pen advance.
    pub xadvance: i32,
    /// Page index.
    pub page: u32,
}

/// Bitmap font description (AngelCode text format).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BitmapFont {
    /// Face name from the `info` line.
    pub face: String,
    /// Nominal size from the `info` line.
    pub size: i32,
    /// Line height from the `common` line.
    pub line_height: u32,
    /// Baseline from the `common` line.
    pub base: u32,
    /// Page images, by page id.
    pub pages: Vec<String>,
    /// Glyphs by code point.
    pub glyphs: BTreeMap<u32, Glyph>,
}

/// Page count assumed when the `common` line does not declare one.
const MAX_PAGES: usize = 64;

impl BitmapFont {
    /// Parse the text of a `.fnt` file.
    ///
    /// Values outside their field's range and page ids beyond the declared page count are
    /// validation errors.
    pub fn parse(text: &str) -> UiResult<Self> {
        let mut font = BitmapFont::default();
        let mut page_limit = MAX_PAGES;
        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            let mut parts = line.trim().splitn(2, char::is_whitespace);
            let Some(tag) = parts.next() else {
                continue;
            };
            let attrs = parse_attrs(parts.next().unwrap_or(""));
            let get = |key: &str| attrs.get(key).map(String::as_str);
            let out_of_range = |key: &str, v: i64| {
                UiError::validation(format!("font line {line_no}: '{key}={v}' is out of range"))
            };
            let num = |key: &str| -> UiResult<i64> {
                match get(key) {
                    None => Ok(0),
                    Some(v) => v.parse::<i64>().map_err(|_| {
                        UiError::validation(format!(
                            "font line {line_no}: '{key}={v}' is not an integer"
                        ))
                    }),
                }
            };
            let signed = |key: &str| -> UiResult<i32> {
                let v = num(key)?;
                i32::try_from(v).map_err(|_| out_of_range(key, v))
            };
            let unsigned = |key: &str| -> UiResult<u32> {
                let v = num(key)?.max(0);
                u32::try_from(v).map_err(|_| out_of_range(key, v))
            };
            match tag {
                "info" => {
                    font.face = get("face").unwrap_or_default().to_string();
                    font.size = signed("size")?;
                }
                "common" => {
                    font.line_height = unsigned("lineHeight")?;
                    font.base = unsigned("base")?;
                    if get("pages").is_some() {
                        page_limit = (unsigned("pages")? as usize).min(MAX_PAGES);
                    }
                }
                "page" => {
                    let id = unsigned("id")? as usize;
                    if id >= page_limit {
                        return Err(UiError::validation(format!(
                            "font line {line_no}: page id {id} exceeds the page count {page_limit}"
                        )));
                    }
                    if font.pages.len() <= id {
                        font.pages.resize(id + 1, String::new());
                    }
                    font.pages[id] = get("file").unwrap_or_default().to_string();
                }
                "char" => {
                    let id = unsigned("id")?;
                    font.glyphs.insert(
                        id,
                        Glyph {
                            x: unsigned("x")?,
                            y: unsigned("y")?,
                            width: unsigned("width")?,
                            height: unsigned("height")?,
                            xoffset: signed("xoffset")?,
                            yoffset: signed("yoffset")?,
                            xadvance: signed("xadvance")?,
                            page: unsigned("page")?,
                        },
                    );
                }
                _ => {}
            }
        }
        Ok(font)
    }

    /// Read and parse a `.fnt` file.
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| UiError::resource(format!("read font '{}': {e}", path.display())))?;
        Self::parse(&text)
    }

    /// Built-in fallback used when a referenced font is unavailable.
    pub fn fallback() -> Self {
        Self {
            face: "default".to_string(),
            size: 15,
            line_height: 18,
            base: 14,
            ..Self::default()
        }
    }

    /// Glyph for a character, if the font has one.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&u32::from(ch))
    }

    /// Sum of glyph advances; characters without a glyph advance by nothing.
    pub fn measure(&self, text: &str) -> i64 {
        text.chars()
            .filter_map(|c| self.glyph(c))
            .fold(0_i64, |w, g| w.saturating_add(i64::from(g.xadvance)))
    }
}

fn parse_attrs(s: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    let mut rest = s.trim_start();
    while let Some(eq) = rest.find('=') {
        let key = rest[..eq].trim().to_string();
        let after = &rest[eq + 1..];
        let (value, tail) = if let Some(quoted) = after.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => (&quoted[..end], &quoted[end + 1..]),
                None => (quoted, ""),
            }
        } else {
            match after.find(char::is_whitespace) {
                Some(end) => (&after[..end], &after[end..]),
                None => (after, ""),
            }
        };
        out.insert(key, value.to_string());
        rest = tail.trim_start();
    }
    out
}

/// TrueType font selection for a text widget.
#[derive(Clone, Debug, PartialEq)]
pub struct TtfFont {
    /// Font file, `None` for the platform default.
    pub source: Option<PathBuf>,
    /// Point size.
    pub size: u32,
}

/// Font and color of a text widget.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font selection.
    pub font: TtfFont,
    /// Text color.
    pub color: Rgba8,
}

/// Fonts available to a build.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    ttfs: HashMap<String, PathBuf>,
    bitmap_fonts: Option<HashMap<String, Arc<BitmapFont>>>,
    default_font: Option<PathBuf>,
}

impl FontLibrary {
    /// Empty library: TrueType references fall back to the default font and bitmap fonts load
    /// from disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a TrueType resource path (as authored) to a font file.
    pub fn with_ttf(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.ttfs.insert(name.into(), path.into());
        self
    }

    /// Font used when a text widget's TrueType reference is unknown.
    pub fn with_default_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_font = Some(path.into());
        self
    }

    /// Preload a bitmap font under its authored path. Once any bitmap font is preloaded, bitmap
    /// fonts are no longer read from disk.
    pub fn with_bitmap_font(mut self, name: impl Into<String>, font: BitmapFont) -> Self {
        self.bitmap_fonts
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), Arc::new(font));
        self
    }

    /// Default TrueType font, if configured.
    pub fn default_font(&self) -> Option<&Path> {
        self.default_font.as_deref()
    }

    /// Font file for an authored TrueType reference; `None` when unknown.
    pub fn ttf(&self, name: &str) -> Option<&Path> {
        self.ttfs.get(name).map(PathBuf::as_path)
    }

    /// Whether bitmap fonts come from the preloaded table instead of disk.
    pub fn has_preloaded_bitmap_fonts(&self) -> bool {
        self.bitmap_fonts.is_some()
    }

    /// Preloaded bitmap font by authored path.
    pub fn preloaded_bitmap_font(&self, name: &str) -> Option<Arc<BitmapFont>> {
        self.bitmap_fonts.as_ref()?.get(name).cloned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
