//! Explicit edit context standing in for an image editor's "active layer" and "current
//! selection" globals.

use crate::document::doc::Document;
use crate::effects::levels::LevelsParams;
use crate::foundation::core::{LayerId, PixelBounds, Point};
use crate::foundation::error::{StripewalkError, StripewalkResult};
use crate::selection::region::Region;
use crate::selection::stripes::stripe_region;

/// How a new region combines with the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SelectionMode {
    /// Discard the current selection.
    Replace,
    /// Union.
    Extend,
    /// Subtract the new region.
    Diminish,
    /// Keep only the overlap.
    Intersect,
}

/// Mutable editing state over one document: the active layer and the current selection.
#[derive(Debug)]
pub struct EditSession<'d> {
    doc: &'d mut Document,
    active: LayerId,
    selection: Region,
}

impl<'d> EditSession<'d> {
    /// Start a session with `active` as the active layer and nothing selected.
    pub fn new(doc: &'d mut Document, active: LayerId) -> StripewalkResult<Self> {
        doc.layer(active)?;
        Ok(Self {
            doc,
            active,
            selection: Region::empty(),
        })
    }

    /// The document being edited.
    pub fn document(&self) -> &Document {
        &*self.doc
    }

    /// Id of the active layer.
    pub fn active(&self) -> LayerId {
        self.active
    }

    /// Make `id` the active layer.
    pub fn set_active(&mut self, id: LayerId) -> StripewalkResult<()> {
        self.doc.layer(id)?;
        self.active = id;
        Ok(())
    }

    /// Content bounds of the active layer; a layer with nothing visible is a zero-sized sprite.
    pub fn active_bounds(&self) -> StripewalkResult<PixelBounds> {
        self.doc
            .layer(self.active)?
            .bounds()
            .ok_or_else(|| StripewalkError::invalid_dimensions(0, 0))?
            .require_sprite_extent()
    }

    /// Duplicate `id` directly above itself. The active layer does not change.
    pub fn duplicate(&mut self, id: LayerId) -> StripewalkResult<LayerId> {
        self.doc.duplicate(id)
    }

    /// Rename the active layer.
    pub fn rename_active(&mut self, name: impl Into<String>) -> StripewalkResult<()> {
        self.doc.layer_mut(self.active)?.set_name(name);
        Ok(())
    }

    /// Show or hide the active layer.
    pub fn set_active_visible(&mut self, visible: bool) -> StripewalkResult<()> {
        self.doc.layer_mut(self.active)?.set_visible(visible);
        Ok(())
    }

    /// Move the whole active layer regardless of the selection.
    pub fn translate_layer(&mut self, dx: i32, dy: i32) -> StripewalkResult<()> {
        self.doc.layer_mut(self.active)?.translate(dx, dy);
        Ok(())
    }

    /// Current selection.
    pub fn selection(&self) -> &Region {
        &self.selection
    }

    /// Bounding box of the selection, `None` when nothing is selected.
    pub fn selection_bounds(&self) -> Option<PixelBounds> {
        self.selection.bounds()
    }

    /// Combine `region` into the current selection.
    pub fn select(&mut self, region: &Region, mode: SelectionMode) {
        self.selection = match mode {
            SelectionMode::Replace => region.clone(),
            SelectionMode::Extend => self.selection.union(region),
            SelectionMode::Diminish => self.selection.subtract(region),
            SelectionMode::Intersect => self.selection.intersect(region),
        };
    }

    /// Rectangle counterpart of [`EditSession::select`].
    pub fn select_rect(&mut self, bounds: PixelBounds, mode: SelectionMode) {
        self.select(&Region::from_rect(bounds), mode);
    }

    /// Rasterize `points` with pixel-centre sampling, then [`EditSession::select`].
    pub fn select_polygon(&mut self, points: &[Point], mode: SelectionMode) {
        self.select(&Region::from_polygon(points), mode);
    }

    /// Add the stripe pattern over the active layer's current bounds to the selection.
    pub fn select_stripes(&mut self) -> StripewalkResult<()> {
        let stripes = stripe_region(self.active_bounds()?)?;
        self.select(&stripes, SelectionMode::Extend);
        Ok(())
    }

    /// Move the selected pixels of the active layer; the selection moves with them.
    ///
    /// Nothing moves when nothing is selected; use [`EditSession::translate_layer`] for that.
    pub fn move_selection(&mut self, dx: i32, dy: i32) -> StripewalkResult<()> {
        if self.selection.is_empty() {
            self.doc.layer(self.active)?;
            return Ok(());
        }
        let layer = self.doc.layer_mut(self.active)?;
        let lifted = layer.lift(&self.selection);
        layer.drop_pixels(&lifted, dx, dy);
        self.selection = self.selection.translate(dx, dy);
        Ok(())
    }

    /// Move only the selection outline.
    pub fn translate_boundary(&mut self, dx: i32, dy: i32) {
        self.selection = self.selection.translate(dx, dy);
    }

    /// Grow the selection by `px` in every direction.
    pub fn expand_selection(&mut self, px: u32) {
        self.selection = self.selection.expand(px);
    }

    /// Erase the selected pixels of the active layer.
    pub fn clear_selection(&mut self) -> StripewalkResult<()> {
        self.doc.layer_mut(self.active)?.clear(&self.selection);
        Ok(())
    }

    /// Drop the selection.
    pub fn deselect(&mut self) {
        self.selection = Region::empty();
    }

    /// Merge `id` into the layer beneath it; that layer becomes active.
    pub fn merge_down(&mut self, id: LayerId) -> StripewalkResult<LayerId> {
        let lower = self.doc.merge_down(id)?;
        self.active = lower;
        Ok(lower)
    }

    /// Levels on the active layer, limited to the selection when one exists.
    pub fn adjust_levels(&mut self, params: LevelsParams) -> StripewalkResult<()> {
        let lut = params.lut()?;
        let region = (!self.selection.is_empty()).then_some(&self.selection);
        self.doc
            .layer_mut(self.active)?
            .map_pixels(region, |px| lut.apply(px));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
