pub use kurbo::{Affine, Point, Size, Vec2};

/// Straight-alpha RGBA8 color as authored in the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the neutral tint.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return this color with its alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels as normalized floats in `[0, 1]`.
    pub fn to_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Premultiply r,g,b by alpha (rounded).
    pub fn premultiplied(self) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(self.r, self.a),
            g: premul(self.g, self.a),
            b: premul(self.b, self.a),
            a: self.a,
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Clamp an authored integer channel into `0..=255`.
pub(crate) fn channel_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
