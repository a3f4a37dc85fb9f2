//! Packed texture atlases in the libGDX text format.
//!
//! A `.atlas` file lists pages (one image each) followed by their regions:
//!
//! ```text
//! ui.png
//! size: 256, 256
//! filter: Linear, Linear
//! btn_ok
//!   xy: 2, 2
//!   size: 64, 32
//!   index: -1
//! ```
//!
//! Pages are separated by blank lines. Both the classic (`xy`/`size`/`orig`/`offset`) and the
//! compact (`bounds`/`offsets`) region keys are accepted; unknown keys are ignored.

use std::path::Path;
use std::sync::Arc;

use crate::{
    assets::{
        decode::load_texture,
        texture::{Texture, TextureRegion},
    },
    foundation::error::{UiError, UiResult},
};

/// Parsed atlas description, before any page image is loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtlasData {
    /// Pages in file order.
    pub pages: Vec<PageData>,
}

/// One atlas page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageData {
    /// Page image file, relative to the atlas file.
    pub image: String,
    /// Declared page size, when present.
    pub size: Option<(u32, u32)>,
    /// Regions packed on this page.
    pub regions: Vec<RegionData>,
}

/// One packed region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionData {
    /// Lookup name.
    pub name: String,
    /// Left edge on the page.
    pub x: u32,
    /// Top edge on the page.
    pub y: u32,
    /// Packed width.
    pub width: u32,
    /// Packed height.
    pub height: u32,
    /// Sequence index, `-1` when absent.
    pub index: i32,
    /// Packed rotated by 90 degrees.
    pub rotate: bool,
    /// Size before whitespace stripping.
    pub original_size: Option<(u32, u32)>,
    /// Offset of the packed pixels inside the original size.
    pub offset: Option<(i32, i32)>,
}

impl RegionData {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            index: -1,
            rotate: false,
            original_size: None,
            offset: None,
        }
    }
}

impl AtlasData {
    /// Parse the text of an `.atlas` file.
    pub fn parse(text: &str) -> UiResult<Self> {
        let mut out = AtlasData::default();
        let mut page: Option<PageData> = None;
        let mut region: Option<RegionData> = None;

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() {
                flush(&mut out, &mut page, &mut region);
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => {
                    let key = key.trim();
                    let values: Vec<&str> = value.split(',').map(str::trim).collect();
                    if let Some(r) = region.as_mut() {
                        apply_region_field(r, key, &values, line_no)?;
                    } else if let Some(p) = page.as_mut() {
                        if key == "size" {
                            let [w, h] = ints::<u32, 2>(&values, line_no)?;
                            p.size = Some((w, h));
                        }
                    } else {
                        return Err(UiError::validation(format!(
                            "atlas line {line_no}: field '{key}' before any page"
                        )));
                    }
                }
                None => {
                    if let Some(p) = page.as_mut() {
                        if let Some(done) = region.take() {
                            p.regions.push(done);
                        }
                        region = Some(RegionData::named(line));
                    } else {
                        page = Some(PageData {
                            image: line.to_string(),
                            ..PageData::default()
                        });
                    }
                }
            }
        }
        flush(&mut out, &mut page, &mut region);
        Ok(out)
    }
}

fn flush(out: &mut AtlasData, page: &mut Option<PageData>, region: &mut Option<RegionData>) {
    if let Some(mut p) = page.take() {
        if let Some(r) = region.take() {
            p.regions.push(r);
        }
        out.pages.push(p);
    }
}

fn apply_region_field(
    r: &mut RegionData,
    key: &str,
    values: &[&str],
    line_no: usize,
) -> UiResult<()> {
    match key {
        "xy" => {
            let [x, y] = ints::<u32, 2>(values, line_no)?;
            (r.x, r.y) = (x, y);
        }
        "size" => {
            let [w, h] = ints::<u32, 2>(values, line_no)?;
            (r.width, r.height) = (w, h);
        }
        "bounds" => {
            let [x, y, w, h] = ints::<u32, 4>(values, line_no)?;
            (r.x, r.y, r.width, r.height) = (x, y, w, h);
        }
        "orig" => {
            let [w, h] = ints::<u32, 2>(values, line_no)?;
            r.original_size = Some((w, h));
        }
        "offset" => {
            let [x, y] = ints::<i32, 2>(values, line_no)?;
            r.offset = Some((x, y));
        }
        "offsets" => {
            let [x, y, w, h] = ints::<i32, 4>(values, line_no)?;
            r.offset = Some((x, y));
            r.original_size = Some((w.max(0) as u32, h.max(0) as u32));
        }
        "index" => {
            let [index] = ints::<i32, 1>(values, line_no)?;
            r.index = index;
        }
        "rotate" => r.rotate = matches!(values.first(), Some(&"true") | Some(&"90")),
        _ => {}
    }
    Ok(())
}

fn ints<T: std::str::FromStr, const N: usize>(values: &[&str], line_no: usize) -> UiResult<[T; N]> {
    if values.len() < N {
        return Err(UiError::validation(format!(
            "atlas line {line_no}: expected {N} values, got {}",
            values.len()
        )));
    }
    let mut parsed = Vec::with_capacity(N);
    for v in &values[..N] {
        let n = v.parse::<T>().map_err(|_| {
            UiError::validation(format!("atlas line {line_no}: '{v}' is not an integer"))
        })?;
        parsed.push(n);
    }
    parsed
        .try_into()
        .map_err(|_| UiError::validation(format!("atlas line {line_no}: bad value count")))
}

/// A set of named regions over one or more page textures.
#[derive(Clone, Debug, Default)]
pub struct TextureAtlas {
    regions: Vec<Arc<TextureRegion>>,
}

impl TextureAtlas {
    /// Empty atlas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region; returns the shared handle stored in the atlas.
    pub fn add_region(&mut self, region: TextureRegion) -> Arc<TextureRegion> {
        let region = Arc::new(region);
        self.regions.push(region.clone());
        region
    }

    /// Build an atlas from parsed data; `load_page` supplies the texture of each page image.
    pub fn from_data(
        data: &AtlasData,
        mut load_page: impl FnMut(&PageData) -> UiResult<Arc<Texture>>,
    ) -> UiResult<Self> {
        let mut atlas = Self::new();
        for page in &data.pages {
            let texture = load_page(page)?;
            for r in &page.regions {
                let mut region =
                    TextureRegion::new(texture.clone(), r.name.clone(), r.x, r.y, r.width, r.height)
                        .with_index(r.index);
                region.rotate = r.rotate;
                atlas.regions.push(Arc::new(region));
            }
        }
        Ok(atlas)
    }

    /// Load an `.atlas` file and its page images (resolved next to the atlas file).
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| UiError::resource(format!("read atlas '{}': {e}", path.display())))?;
        let data = AtlasData::parse(&text)?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let atlas = Self::from_data(&data, |page| Ok(Arc::new(load_texture(&dir.join(&page.image))?)))?;
        tracing::debug!(
            atlas = %path.display(),
            pages = data.pages.len(),
            regions = atlas.regions.len(),
            "loaded texture atlas"
        );
        Ok(atlas)
    }

    /// First region with this name, regardless of index.
    pub fn find_region(&self, name: &str) -> Option<&Arc<TextureRegion>> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Region with this name and exact sequence index.
    pub fn find_region_indexed(&self, name: &str, index: i32) -> Option<&Arc<TextureRegion>> {
        self.regions
            .iter()
            .find(|r| r.name == name && r.index == index)
    }

    /// All regions in insertion order.
    pub fn regions(&self) -> &[Arc<TextureRegion>] {
        &self.regions
    }
}

/// Ordered collection of atlases consulted during resource resolution.
///
/// Lookups walk the atlases in registration order and return the first hit.
#[derive(Clone, Debug, Default)]
pub struct AtlasSet {
    atlases: Vec<Arc<TextureAtlas>>,
}

impl AtlasSet {
    /// No atlases; every image resolves from loose files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an atlas after the existing ones.
    pub fn push(&mut self, atlas: impl Into<Arc<TextureAtlas>>) {
        self.atlases.push(atlas.into());
    }

    /// Builder form of [`AtlasSet::push`].
    pub fn with(mut self, atlas: impl Into<Arc<TextureAtlas>>) -> Self {
        self.push(atlas);
        self
    }

    /// Whether no atlas is registered.
    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }

    /// Number of registered atlases.
    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    /// First region with this name across all atlases.
    pub fn find_region(&self, name: &str) -> Option<Arc<TextureRegion>> {
        self.atlases
            .iter()
            .find_map(|a| a.find_region(name).cloned())
    }

    /// First region with this name and exact index across all atlases.
    pub fn find_region_indexed(&self, name: &str, index: i32) -> Option<Arc<TextureRegion>> {
        self.atlases
            .iter()
            .find_map(|a| a.find_region_indexed(name, index).cloned())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/atlas.rs"]
mod tests;
