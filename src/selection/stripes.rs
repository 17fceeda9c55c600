//! Bulging vertical stripe pattern.
//!
//! The stripe period follows one cosine cycle across the sprite width, so stripes crowd together
//! around the quarter-width point and thin out around three quarters, which reads as light falling
//! on a cylinder.

use std::f64::consts::PI;

use crate::foundation::core::PixelBounds;
use crate::foundation::error::{StripewalkError, StripewalkResult};
use crate::foundation::math::round_half_up;
use crate::selection::region::Region;

/// Smallest stripe period.
pub const STRIPE_MIN_PERIOD: u32 = 2;

/// Stripe period at column offset `x` for a sprite `width` pixels wide. Always 2, 3 or 4.
pub fn stripe_period(x: f64, width: u32) -> u32 {
    let w = f64::from(width);
    let wave = ((x - w / 4.0) * (2.0 * PI / w)).cos() + 3.0;
    round_half_up(wave).max(STRIPE_MIN_PERIOD as i32) as u32
}

/// Column offsets in `[0, width)` struck by the stripe pattern.
///
/// A column is struck when it is a multiple of its period and its left neighbour was not struck.
pub fn stripe_columns(width: u32) -> StripewalkResult<Vec<u32>> {
    if width == 0 {
        return Err(StripewalkError::invalid_dimensions(0, 0));
    }
    let mut columns = Vec::new();
    let mut previous = false;
    for x in 0..width {
        if !previous && x % stripe_period(f64::from(x), width) == 0 {
            columns.push(x);
            previous = true;
        } else {
            previous = false;
        }
    }
    Ok(columns)
}

/// Union of full-height 1px columns over `bounds`.
pub fn stripe_region(bounds: PixelBounds) -> StripewalkResult<Region> {
    let bounds = bounds.require_sprite_extent()?;
    let columns = stripe_columns(bounds.width())?;
    let region = columns.iter().fold(Region::empty(), |acc, &x| {
        let left = bounds.left.saturating_add_unsigned(x);
        acc.union(&Region::from_rect(PixelBounds::new(
            left,
            bounds.top,
            left + 1,
            bounds.bottom,
        )))
    });
    tracing::debug!(columns = columns.len(), ?bounds, "stripe region");
    Ok(region)
}

#[cfg(test)]
#[path = "../../tests/unit/selection/stripes.rs"]
mod tests;
