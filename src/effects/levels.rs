use crate::effects::composite::PremulRgba8;
use crate::foundation::error::{StripewalkError, StripewalkResult};
use crate::foundation::math::{premultiply, unpremultiply};

/// Midtone gamma used by the frame lightening pass.
pub const LIGHTEN_GAMMA: f32 = 1.5;

/// Levels adjustment parameters, all on the 0..=255 scale except `gamma`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LevelsParams {
    /// Input shadow point.
    pub input_black: u8,
    /// Input highlight point.
    pub input_white: u8,
    /// Midtone exponent; values above 1 lighten.
    pub gamma: f32,
    /// Output shadow point.
    pub output_black: u8,
    /// Output highlight point.
    pub output_white: u8,
}

impl LevelsParams {
    /// Full-range levels with the frame lightening gamma.
    pub const LIGHTEN: Self = Self {
        input_black: 0,
        input_white: 255,
        gamma: LIGHTEN_GAMMA,
        output_black: 0,
        output_white: 255,
    };

    /// Validate ranges and gamma.
    pub fn validate(self) -> StripewalkResult<Self> {
        if self.input_black >= self.input_white {
            return Err(StripewalkError::validation(
                "levels input_black must be < input_white",
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(StripewalkError::validation("levels gamma must be > 0"));
        }
        Ok(self)
    }

    /// Build the per-channel lookup table.
    pub fn lut(self) -> StripewalkResult<LevelsLut> {
        let p = self.validate()?;
        let in_black = f64::from(p.input_black);
        let in_range = f64::from(p.input_white) - in_black;
        let out_black = f64::from(p.output_black);
        let out_range = f64::from(p.output_white) - out_black;
        let inv_gamma = 1.0 / f64::from(p.gamma);

        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let normalized = ((i as f64 - in_black) / in_range).clamp(0.0, 1.0);
            let v = out_black + normalized.powf(inv_gamma) * out_range;
            *slot = v.round().clamp(0.0, 255.0) as u8;
        }
        Ok(LevelsLut(table))
    }
}

/// Precomputed levels table applied to straight colour channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelsLut(pub [u8; 256]);

impl LevelsLut {
    /// Remap one channel value.
    pub fn map(&self, v: u8) -> u8 {
        self.0[usize::from(v)]
    }

    /// Remap a premultiplied pixel's colour, leaving alpha untouched.
    pub fn apply(&self, px: PremulRgba8) -> PremulRgba8 {
        match px[3] {
            0 => px,
            255 => [self.map(px[0]), self.map(px[1]), self.map(px[2]), 255],
            _ => {
                let s = unpremultiply(px);
                premultiply([self.map(s[0]), self.map(s[1]), self.map(s[2]), s[3]])
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/levels.rs"]
mod tests;
