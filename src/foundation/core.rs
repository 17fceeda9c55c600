use crate::foundation::error::{StripewalkError, StripewalkResult};

pub use kurbo::{Point, Rect};

/// Integer pixel rectangle `[left, right) x [top, bottom)` in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelBounds {
    /// Inclusive left edge.
    pub left: i32,
    /// Inclusive top edge.
    pub top: i32,
    /// Exclusive right edge.
    pub right: i32,
    /// Exclusive bottom edge.
    pub bottom: i32,
}

impl PixelBounds {
    /// Create bounds from edges. Inverted edges collapse to an empty rectangle at `left/top`.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right: right.max(left),
            bottom: bottom.max(top),
        }
    }

    /// Create bounds from an origin and a size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(
            x,
            y,
            x.saturating_add_unsigned(width),
            y.saturating_add_unsigned(height),
        )
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.right.abs_diff(self.left)
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.bottom.abs_diff(self.top)
    }

    /// Return `true` when the rectangle covers no pixel.
    pub fn is_empty(self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Return `true` when pixel `(x, y)` lies inside.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    /// Smallest rectangle covering both. Empty inputs are ignored.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Overlap of both rectangles, or `None` when they do not touch.
    pub fn intersect(self, other: Self) -> Option<Self> {
        let out = Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if out.is_empty() { None } else { Some(out) }
    }

    /// Shift both corners by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Vertical midpoint, possibly on a half pixel.
    pub fn mid_y(self) -> f64 {
        (f64::from(self.top) + f64::from(self.bottom)) / 2.0
    }

    /// Same rectangle in kurbo's floating-point geometry.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }

    /// Error out unless both dimensions are at least one pixel.
    pub fn require_sprite_extent(self) -> StripewalkResult<Self> {
        if self.width() == 0 || self.height() == 0 {
            return Err(StripewalkError::invalid_dimensions(
                self.width(),
                self.height(),
            ));
        }
        Ok(self)
    }
}

/// Document canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> StripewalkResult<Self> {
        if width == 0 || height == 0 {
            return Err(StripewalkError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// The canvas as a pixel rectangle anchored at the origin.
    pub fn bounds(self) -> PixelBounds {
        PixelBounds::from_origin_size(0, 0, self.width, self.height)
    }
}

/// Stable handle to a layer in a [`crate::Document`] arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LayerId(pub u32);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
