use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::texture::Texture,
    foundation::error::{UiError, UiResult},
};

/// Decode encoded image bytes into a premultiplied RGBA8 texture.
pub fn decode_image(source: &str, bytes: &[u8]) -> UiResult<Texture> {
    let dyn_img = image::load_from_memory(bytes)
        .with_context(|| format!("decode image '{source}'"))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(Texture {
        source: source.to_string(),
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Read and decode an image file. Missing or unreadable files are fatal resource errors.
pub fn load_texture(path: &Path) -> UiResult<Texture> {
    let bytes = std::fs::read(path)
        .map_err(|e| UiError::resource(format!("read image '{}': {e}", path.display())))?;
    decode_image(&path.to_string_lossy(), &bytes)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
