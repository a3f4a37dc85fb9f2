use std::sync::Arc;

use crate::foundation::core::{Rgba8, Size};

/// Decoded image, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Where the pixels came from (file path or atlas page name).
    pub source: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 rows, top to bottom.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Texture {
    /// Fully transparent texture of the given size.
    pub fn blank(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            rgba8_premul: Arc::new(vec![0; width as usize * height as usize * 4]),
        }
    }
}

/// Rectangle of a [`Texture`], optionally mirrored.
///
/// Regions loaded from an atlas are shared between every widget that references them; a flip
/// request on such a region works on a private copy (see the resolver).
#[derive(Clone, Debug)]
pub struct TextureRegion {
    texture: Arc<Texture>,
    /// Left edge in texture pixels.
    pub x: u32,
    /// Top edge in texture pixels.
    pub y: u32,
    /// Width in texture pixels.
    pub width: u32,
    /// Height in texture pixels.
    pub height: u32,
    /// Lookup name inside its atlas, or the file path for standalone images.
    pub name: String,
    /// Atlas sequence index; `-1` when the region has none.
    pub index: i32,
    /// Packed rotated by 90 degrees in the atlas page.
    pub rotate: bool,
    flip_x: bool,
    flip_y: bool,
}

impl TextureRegion {
    /// Region covering `width x height` pixels of `texture` at `(x, y)`.
    pub fn new(
        texture: Arc<Texture>,
        name: impl Into<String>,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            texture,
            x,
            y,
            width,
            height,
            name: name.into(),
            index: -1,
            rotate: false,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Region covering the whole texture.
    pub fn whole(texture: Arc<Texture>) -> Self {
        let (w, h) = (texture.width, texture.height);
        let name = texture.source.clone();
        Self::new(texture, name, 0, 0, w, h)
    }

    /// Set the atlas sequence index.
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Backing texture.
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    /// Toggle mirroring on each requested axis.
    pub fn flip(&mut self, x: bool, y: bool) {
        if x {
            self.flip_x = !self.flip_x;
        }
        if y {
            self.flip_y = !self.flip_y;
        }
    }

    /// Whether the region is mirrored horizontally.
    pub fn is_flip_x(&self) -> bool {
        self.flip_x
    }

    /// Whether the region is mirrored vertically.
    pub fn is_flip_y(&self) -> bool {
        self.flip_y
    }

    /// Normalized texture coordinates `(u, v, u2, v2)`; mirrored axes swap their ends.
    pub fn uv(&self) -> (f64, f64, f64, f64) {
        let tw = f64::from(self.texture.width.max(1));
        let th = f64::from(self.texture.height.max(1));
        let mut u = f64::from(self.x) / tw;
        let mut v = f64::from(self.y) / th;
        let mut u2 = f64::from(self.x + self.width) / tw;
        let mut v2 = f64::from(self.y + self.height) / th;
        if self.flip_x {
            std::mem::swap(&mut u, &mut u2);
        }
        if self.flip_y {
            std::mem::swap(&mut v, &mut v2);
        }
        (u, v, u2, v2)
    }

    /// Region size in pixels.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Region stretched by cap insets: corners keep their size, edges and center stretch.
#[derive(Clone, Debug)]
pub struct NinePatch {
    /// Source region.
    pub region: Arc<TextureRegion>,
    /// Left cap width.
    pub left: f64,
    /// Right cap width.
    pub right: f64,
    /// Top cap height.
    pub top: f64,
    /// Bottom cap height.
    pub bottom: f64,
    /// Tint.
    pub color: Rgba8,
}

impl NinePatch {
    /// Convert an editor cap-inset rectangle into per-side insets, clamped to zero.
    pub fn from_cap_insets(
        region: Arc<TextureRegion>,
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
        color: Rgba8,
    ) -> Self {
        let size = region.size();
        Self {
            left: origin_x.max(0.0),
            top: origin_y.max(0.0),
            right: (size.width - (origin_x + width)).max(0.0),
            bottom: (size.height - (origin_y + height)).max(0.0),
            region,
            color,
        }
    }

    /// Smallest size the patch can be drawn at without overlapping caps.
    pub fn min_size(&self) -> Size {
        Size::new(self.left + self.right, self.top + self.bottom)
    }
}

/// What an image-bearing widget draws.
#[derive(Clone, Debug)]
pub enum Drawable {
    /// Plain region.
    Region(Arc<TextureRegion>),
    /// Nine-patch over a region.
    NinePatch(NinePatch),
}

impl Drawable {
    /// Underlying region.
    pub fn region(&self) -> &Arc<TextureRegion> {
        match self {
            Self::Region(r) => r,
            Self::NinePatch(p) => &p.region,
        }
    }

    /// Whether this drawable stretches by cap insets.
    pub fn is_nine_patch(&self) -> bool {
        matches!(self, Self::NinePatch(_))
    }

    /// Natural size; nine-patches report their minimum size.
    pub fn min_size(&self) -> Size {
        match self {
            Self::Region(r) => r.size(),
            Self::NinePatch(p) => p.min_size(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/texture.rs"]
mod tests;
