use crate::effects::composite::{PremulRgba8, over};
use crate::foundation::core::{Canvas, PixelBounds};
use crate::foundation::error::{StripewalkError, StripewalkResult};
use crate::selection::region::Region;

/// A named buffer of premultiplied RGBA8 pixels placed on the canvas.
///
/// The buffer's extent is storage, not content: it may be larger than the visible pixels and may
/// hang off the canvas. [`Layer::bounds`] reports the box around the non-transparent pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    name: String,
    visible: bool,
    opacity: f32,
    extent: PixelBounds,
    data: Vec<u8>,
}

impl Layer {
    /// A fully transparent layer covering `extent`.
    pub fn transparent(name: impl Into<String>, extent: PixelBounds) -> Self {
        Self {
            name: name.into(),
            visible: true,
            opacity: 1.0,
            extent,
            data: vec![0u8; byte_len(extent)],
        }
    }

    /// Wrap an existing premultiplied buffer placed at `extent`.
    pub fn from_rgba8_premul(
        name: impl Into<String>,
        extent: PixelBounds,
        data: Vec<u8>,
    ) -> StripewalkResult<Self> {
        if data.len() != byte_len(extent) {
            return Err(StripewalkError::validation(format!(
                "layer buffer holds {} bytes, expected {} for {}x{}",
                data.len(),
                byte_len(extent),
                extent.width(),
                extent.height()
            )));
        }
        Ok(Self {
            name: name.into(),
            visible: true,
            opacity: 1.0,
            extent,
            data,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the layer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the layer takes part in flatten and merge.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the layer.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Layer opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Storage rectangle in canvas coordinates.
    pub fn extent(&self) -> PixelBounds {
        self.extent
    }

    /// Pixel at canvas position `(x, y)`; transparent outside the storage.
    pub fn pixel(&self, x: i32, y: i32) -> PremulRgba8 {
        match self.index(x, y) {
            Some(i) => [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ],
            None => [0, 0, 0, 0],
        }
    }

    /// Overwrite the pixel at `(x, y)`, growing the storage when needed.
    pub fn put_pixel(&mut self, x: i32, y: i32, px: PremulRgba8) {
        if self.index(x, y).is_none() {
            if px[3] == 0 {
                return;
            }
            self.ensure_covers(PixelBounds::new(x, y, x + 1, y + 1));
        }
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Bounding box of the non-transparent pixels, recomputed on every call.
    pub fn bounds(&self) -> Option<PixelBounds> {
        let w = self.extent.width() as usize;
        if w == 0 {
            return None;
        }
        let mut out: Option<PixelBounds> = None;
        for (row_idx, row) in self.data.chunks_exact(w * 4).enumerate() {
            let mut alpha = row.chunks_exact(4).map(|px| px[3]);
            let Some(first) = alpha.position(|a| a != 0) else {
                continue;
            };
            let last = row
                .chunks_exact(4)
                .rposition(|px| px[3] != 0)
                .unwrap_or(first);
            let y = self.extent.top + row_idx as i32;
            let row_bounds = PixelBounds::new(
                self.extent.left + first as i32,
                y,
                self.extent.left + last as i32 + 1,
                y + 1,
            );
            out = Some(out.map_or(row_bounds, |b| b.union(row_bounds)));
        }
        out
    }

    /// Move the whole layer by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.extent = self.extent.translate(dx, dy);
    }

    /// Grow the storage so that `bounds` fits, keeping existing pixels in place.
    pub fn ensure_covers(&mut self, bounds: PixelBounds) {
        if bounds.is_empty() {
            return;
        }
        let grown = self.extent.union(bounds);
        if grown == self.extent {
            return;
        }
        let mut data = vec![0u8; byte_len(grown)];
        let old_w = self.extent.width() as usize;
        let new_w = grown.width() as usize;
        if old_w > 0 {
            let dx = (self.extent.left - grown.left) as usize;
            for (row_idx, row) in self.data.chunks_exact(old_w * 4).enumerate() {
                let dy = (self.extent.top - grown.top) as usize + row_idx;
                let start = (dy * new_w + dx) * 4;
                data[start..start + row.len()].copy_from_slice(row);
            }
        }
        self.extent = grown;
        self.data = data;
    }

    /// Erase every pixel inside `region`.
    pub fn clear(&mut self, region: &Region) {
        for (x, y) in region.cells() {
            if let Some(i) = self.index(x, y) {
                self.data[i..i + 4].fill(0);
            }
        }
    }

    /// Remove and return the visible pixels inside `region`.
    pub fn lift(&mut self, region: &Region) -> Vec<(i32, i32, PremulRgba8)> {
        let mut lifted = Vec::new();
        for (x, y) in region.cells() {
            if let Some(i) = self.index(x, y) {
                let px = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                if px[3] != 0 {
                    lifted.push((x, y, px));
                    self.data[i..i + 4].fill(0);
                }
            }
        }
        lifted
    }

    /// Composite lifted pixels source-over at an offset.
    pub fn drop_pixels(&mut self, pixels: &[(i32, i32, PremulRgba8)], dx: i32, dy: i32) {
        let Some(target) = pixels
            .iter()
            .map(|&(x, y, _)| PixelBounds::new(x + dx, y + dy, x + dx + 1, y + dy + 1))
            .reduce(PixelBounds::union)
        else {
            return;
        };
        self.ensure_covers(target);
        for &(x, y, px) in pixels {
            let (tx, ty) = (x + dx, y + dy);
            let out = over(self.pixel(tx, ty), px, 1.0);
            self.put_pixel(tx, ty, out);
        }
    }

    /// Apply `f` to every visible pixel, restricted to `region` when given.
    pub fn map_pixels(
        &mut self,
        region: Option<&Region>,
        mut f: impl FnMut(PremulRgba8) -> PremulRgba8,
    ) {
        match region {
            Some(region) => {
                for (x, y) in region.cells() {
                    if let Some(i) = self.index(x, y) {
                        let px = [
                            self.data[i],
                            self.data[i + 1],
                            self.data[i + 2],
                            self.data[i + 3],
                        ];
                        if px[3] != 0 {
                            self.data[i..i + 4].copy_from_slice(&f(px));
                        }
                    }
                }
            }
            None => {
                for px in self.data.chunks_exact_mut(4) {
                    if px[3] != 0 {
                        let out = f([px[0], px[1], px[2], px[3]]);
                        px.copy_from_slice(&out);
                    }
                }
            }
        }
    }

    /// Composite `top` source-over onto this layer using `top`'s opacity.
    pub fn composite_from(&mut self, top: &Layer) {
        let Some(content) = top.bounds() else {
            return;
        };
        self.ensure_covers(content);
        for y in content.top..content.bottom {
            for x in content.left..content.right {
                let src = top.pixel(x, y);
                if src[3] == 0 {
                    continue;
                }
                let out = over(self.pixel(x, y), src, top.opacity);
                self.put_pixel(x, y, out);
            }
        }
    }

    /// True when some visible pixel lies off `canvas` and would be lost on export.
    pub fn crops_on(&self, canvas: Canvas) -> bool {
        self.bounds()
            .is_some_and(|b| b.intersect(canvas.bounds()) != Some(b))
    }

    /// Canvas-sized premultiplied copy of the pixels that fall on the canvas.
    pub fn to_canvas_rgba8_premul(&self, canvas: Canvas) -> Vec<u8> {
        let target = canvas.bounds();
        let mut out = vec![0u8; byte_len(target)];
        if let Some(overlap) = self.extent.intersect(target) {
            let w = canvas.width as usize;
            for y in overlap.top..overlap.bottom {
                for x in overlap.left..overlap.right {
                    let dst = (y as usize * w + x as usize) * 4;
                    out[dst..dst + 4].copy_from_slice(&self.pixel(x, y));
                }
            }
        }
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.extent.contains(x, y) {
            return None;
        }
        let col = (x - self.extent.left) as usize;
        let row = (y - self.extent.top) as usize;
        Some((row * self.extent.width() as usize + col) * 4)
    }
}

fn byte_len(extent: PixelBounds) -> usize {
    (extent.width() as usize)
        .saturating_mul(extent.height() as usize)
        .saturating_mul(4)
}

#[cfg(test)]
#[path = "../../tests/unit/document/layer.rs"]
mod tests;
