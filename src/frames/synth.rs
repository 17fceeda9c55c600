use crate::document::doc::Document;
use crate::foundation::core::{Canvas, LayerId, PixelBounds};
use crate::foundation::error::StripewalkResult;
use crate::frames::builders::{move1, move2, move3};
use crate::frames::shift::y_pixel_shift;
use crate::session::EditSession;

/// Runs the three frame builders with one y-shift taken from the source sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSynthesizer {
    y_shift: i32,
}

/// Layers produced by one synthesis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SynthesizedFrames {
    /// Vertical shift used by every builder.
    pub y_shift: i32,
    /// The idle layer the run started from.
    pub source: LayerId,
    /// Leading-step frame.
    pub move1: LayerId,
    /// Stripe-cut frame.
    pub move2: LayerId,
    /// Squash frame.
    pub move3: LayerId,
}

impl FrameSynthesizer {
    /// Measure the session's active layer. Fails on a sprite with no visible extent.
    pub fn from_session(sess: &EditSession<'_>) -> StripewalkResult<Self> {
        let bounds = sess.active_bounds()?;
        let y_shift = y_pixel_shift(bounds)?;
        Ok(Self { y_shift })
    }

    /// Vertical shift shared by all builders, never positive.
    pub fn y_shift(&self) -> i32 {
        self.y_shift
    }

    /// Build move1, move2 and move3 in order; each consumes the layer the previous one left active.
    #[tracing::instrument(skip(sess), fields(y_shift = self.y_shift))]
    pub fn synthesize(&self, sess: &mut EditSession<'_>) -> StripewalkResult<SynthesizedFrames> {
        let source = sess.active();
        sess.set_active_visible(true)?;

        let move1 = move1(sess, self.y_shift)?;
        let move2 = move2(sess, self.y_shift)?;
        let move3 = move3(sess, self.y_shift)?;
        tracing::info!(?move1, ?move2, ?move3, "frames synthesized");

        Ok(SynthesizedFrames {
            y_shift: self.y_shift,
            source,
            move1,
            move2,
            move3,
        })
    }
}

/// Synthesize the movement frames for `source` inside `doc`.
pub fn synthesize_document(
    doc: &mut Document,
    source: LayerId,
) -> StripewalkResult<SynthesizedFrames> {
    let mut sess = EditSession::new(doc, source)?;
    let synth = FrameSynthesizer::from_session(&sess)?;
    synth.synthesize(&mut sess)
}

/// Serializable summary of a synthesis run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameManifest {
    /// Document canvas.
    pub canvas: Canvas,
    /// Vertical shift used by every builder.
    pub y_shift: i32,
    /// Source layer followed by the three frames.
    pub frames: Vec<FrameEntry>,
}

/// One layer in a [`FrameManifest`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameEntry {
    /// Layer name.
    pub name: String,
    /// Content bounds, absent for a fully transparent layer.
    pub bounds: Option<PixelBounds>,
    /// Whether part of the layer falls outside the canvas.
    pub cropped: bool,
}

impl SynthesizedFrames {
    /// Layer ids in playback order: idle, move1, move2, move3.
    pub fn sequence(&self) -> [LayerId; 4] {
        [self.source, self.move1, self.move2, self.move3]
    }

    /// Describe the run against the document it was made in.
    pub fn manifest(&self, doc: &Document) -> StripewalkResult<FrameManifest> {
        let frames = self
            .sequence()
            .iter()
            .map(|&id| {
                let layer = doc.layer(id)?;
                Ok(FrameEntry {
                    name: layer.name().to_string(),
                    bounds: layer.bounds(),
                    cropped: layer.crops_on(doc.canvas()),
                })
            })
            .collect::<StripewalkResult<Vec<_>>>()?;
        Ok(FrameManifest {
            canvas: doc.canvas(),
            y_shift: self.y_shift,
            frames,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/synth.rs"]
mod tests;
