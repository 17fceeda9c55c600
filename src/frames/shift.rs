use crate::foundation::core::PixelBounds;
use crate::foundation::error::StripewalkResult;

/// Vertical bob applied by every frame builder: `-floor(cbrt(height))`.
///
/// Grows sub-linearly so tall sprites do not bounce more than short ones look like they do.
pub fn y_pixel_shift(sprite: PixelBounds) -> StripewalkResult<i32> {
    let sprite = sprite.require_sprite_extent()?;
    Ok(-(integer_cbrt(sprite.height()) as i32))
}

/// Largest `n` with `n^3 <= v`, exact where `f64::cbrt` may land a hair under a perfect cube.
fn integer_cbrt(v: u32) -> u32 {
    let v = u64::from(v);
    let mut n = (v as f64).cbrt() as u64;
    while n > 0 && n * n * n > v {
        n -= 1;
    }
    while (n + 1).pow(3) <= v {
        n += 1;
    }
    n as u32
}

#[cfg(test)]
#[path = "../../tests/unit/frames/shift.rs"]
mod tests;
