use crate::document::layer::Layer;
use crate::effects::composite::over_in_place;
use crate::foundation::core::{Canvas, LayerId};
use crate::foundation::error::{StripewalkError, StripewalkResult};

/// Canvas plus an arena of layers and their bottom-to-top stacking order.
#[derive(Clone, Debug)]
pub struct Document {
    canvas: Canvas,
    slots: Vec<Option<Layer>>,
    stack: Vec<LayerId>,
}

impl Document {
    /// An empty document.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            slots: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Canvas every layer is exported against.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Layer ids from bottom to top.
    pub fn stack(&self) -> &[LayerId] {
        &self.stack
    }

    /// Number of live layers.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// True when no layer is left.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push a layer on top of the stack.
    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = self.alloc(layer);
        self.stack.push(id);
        id
    }

    /// Insert a layer directly above `anchor`.
    pub fn insert_above(&mut self, anchor: LayerId, layer: Layer) -> StripewalkResult<LayerId> {
        let pos = self.position(anchor)?;
        let id = self.alloc(layer);
        self.stack.insert(pos + 1, id);
        Ok(id)
    }

    /// Borrow a live layer.
    pub fn layer(&self, id: LayerId) -> StripewalkResult<&Layer> {
        self.slots
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or_else(|| StripewalkError::layer(format!("{id} does not exist")))
    }

    /// Mutably borrow a live layer.
    pub fn layer_mut(&mut self, id: LayerId) -> StripewalkResult<&mut Layer> {
        self.slots
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or_else(|| StripewalkError::layer(format!("{id} does not exist")))
    }

    /// Topmost layer called `name`.
    pub fn find(&self, name: &str) -> Option<LayerId> {
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|&id| self.layer(id).is_ok_and(|l| l.name() == name))
    }

    /// The layer stacked directly beneath `id`, if any.
    pub fn below(&self, id: LayerId) -> StripewalkResult<Option<LayerId>> {
        let pos = self.position(id)?;
        Ok(pos.checked_sub(1).map(|p| self.stack[p]))
    }

    /// Take a layer out of the document. Its id becomes invalid.
    pub fn remove(&mut self, id: LayerId) -> StripewalkResult<Layer> {
        let pos = self.position(id)?;
        self.stack.remove(pos);
        self.slots[id.0 as usize]
            .take()
            .ok_or_else(|| StripewalkError::layer(format!("{id} does not exist")))
    }

    /// Deep-copy `id` into a new layer named "<name> copy" directly above it.
    pub fn duplicate(&mut self, id: LayerId) -> StripewalkResult<LayerId> {
        let mut copy = self.layer(id)?.clone();
        copy.set_name(format!("{} copy", copy.name()));
        self.insert_above(id, copy)
    }

    /// Composite `id` onto the layer beneath it and remove `id`. Returns the lower layer.
    pub fn merge_down(&mut self, id: LayerId) -> StripewalkResult<LayerId> {
        let lower = self
            .below(id)?
            .ok_or_else(|| StripewalkError::layer(format!("{id} has no layer beneath it")))?;
        let top = self.remove(id)?;
        if top.visible() {
            self.layer_mut(lower)?.composite_from(&top);
        }
        Ok(lower)
    }

    /// Canvas-sized premultiplied composite of all visible layers.
    pub fn flatten(&self) -> StripewalkResult<Vec<u8>> {
        let mut out = vec![0u8; self.canvas.width as usize * self.canvas.height as usize * 4];
        for &id in &self.stack {
            let layer = self.layer(id)?;
            if !layer.visible() {
                continue;
            }
            let src = layer.to_canvas_rgba8_premul(self.canvas);
            over_in_place(&mut out, &src, layer.opacity())?;
        }
        Ok(out)
    }

    fn alloc(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.slots.len() as u32);
        self.slots.push(Some(layer));
        id
    }

    fn position(&self, id: LayerId) -> StripewalkResult<usize> {
        self.stack
            .iter()
            .position(|&l| l == id)
            .ok_or_else(|| StripewalkError::layer(format!("{id} is not in the layer stack")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/doc.rs"]
mod tests;
