use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::document::doc::Document;
use crate::document::layer::Layer;
use crate::foundation::core::{Canvas, LayerId, PixelBounds};
use crate::foundation::error::{StripewalkError, StripewalkResult};
use crate::foundation::math::{premultiply, unpremultiply};

/// Decode an image into a one-layer document.
///
/// The canvas is grown by `pad` transparent pixels on every side so frames that move past the
/// sprite's edges still land on the canvas.
pub fn decode_sprite(
    bytes: &[u8],
    name: &str,
    pad: u32,
) -> StripewalkResult<(Document, LayerId)> {
    let rgba = image::load_from_memory(bytes)
        .context("decode sprite image from memory")?
        .to_rgba8();
    let (width, height) = rgba.dimensions();

    let canvas = Canvas::new(
        width.saturating_add(pad.saturating_mul(2)),
        height.saturating_add(pad.saturating_mul(2)),
    )?;
    let offset = i32::try_from(pad)
        .map_err(|_| StripewalkError::validation(format!("pad {pad} is too large")))?;

    let mut data = rgba.into_raw();
    for px in data.chunks_exact_mut(4) {
        let out = premultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }

    let extent = PixelBounds::from_origin_size(offset, offset, width, height);
    let mut doc = Document::new(canvas);
    let id = doc.add_layer(Layer::from_rgba8_premul(name, extent, data)?);
    Ok((doc, id))
}

/// Read and decode a sprite file; the layer is named after the file stem.
pub fn load_sprite(path: &Path, pad: u32) -> StripewalkResult<(Document, LayerId)> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "idle".to_string());
    decode_sprite(&bytes, &name, pad)
}

/// Encode one layer, cropped to the canvas, as a straight-alpha PNG.
pub fn encode_layer_png(doc: &Document, id: LayerId) -> StripewalkResult<Vec<u8>> {
    let canvas = doc.canvas();
    let layer = doc.layer(id)?;
    if layer.crops_on(canvas) {
        tracing::warn!(
            layer = layer.name(),
            bounds = ?layer.bounds(),
            ?canvas,
            "frame cropped by the canvas; add padding to keep it whole"
        );
    }
    let premul = layer.to_canvas_rgba8_premul(canvas);
    encode_png(premul, canvas.width, canvas.height)
}

/// Encode layers side by side, left to right, one canvas-sized cell each.
pub fn encode_sheet_png(doc: &Document, ids: &[LayerId]) -> StripewalkResult<Vec<u8>> {
    if ids.is_empty() {
        return Err(StripewalkError::validation("sprite sheet needs at least one layer"));
    }
    let canvas = doc.canvas();
    let cell_row = canvas.width as usize * 4;
    let sheet_w = canvas
        .width
        .checked_mul(ids.len() as u32)
        .ok_or_else(|| StripewalkError::validation("sprite sheet is too wide"))?;
    let mut sheet = vec![0u8; sheet_w as usize * canvas.height as usize * 4];

    for (cell, &id) in ids.iter().enumerate() {
        let premul = doc.layer(id)?.to_canvas_rgba8_premul(canvas);
        for (y, row) in premul.chunks_exact(cell_row).enumerate() {
            let start = (y * sheet_w as usize + cell * canvas.width as usize) * 4;
            sheet[start..start + cell_row].copy_from_slice(row);
        }
    }
    encode_png(sheet, sheet_w, canvas.height)
}

fn encode_png(mut premul: Vec<u8>, width: u32, height: u32) -> StripewalkResult<Vec<u8>> {
    for px in premul.chunks_exact_mut(4) {
        let out = unpremultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
    let img = image::RgbaImage::from_raw(width, height, premul)
        .ok_or_else(|| StripewalkError::validation("png buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
