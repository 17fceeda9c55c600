//! stripewalk turns a single idle sprite into a short movement cycle.
//!
//! The sprite is loaded into a small layer [`Document`] and edited through an [`EditSession`]
//! that holds the active layer and the current selection. Three builders then derive frames:
//!
//! - `move1`: stripes bob upward and the lower half of the grown stripes follows, lightened
//! - `move2`: a bulging stripe pattern is cut out of the sprite
//! - `move3`: the outer thirds squeeze inward and the top half bobs, lightened twice
//!
//! [`synthesize_document`] runs all three in order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod document;
mod effects;
mod foundation;
mod frames;
mod selection;
/// Edit session over one document.
pub mod session;

pub use crate::assets::codec::{decode_sprite, encode_layer_png, encode_sheet_png, load_sprite};
pub use crate::document::doc::Document;
pub use crate::document::layer::Layer;
pub use crate::effects::composite::{PremulRgba8, over, over_in_place};
pub use crate::effects::levels::{LIGHTEN_GAMMA, LevelsLut, LevelsParams};
pub use crate::foundation::core::{Canvas, LayerId, PixelBounds, Point, Rect};
pub use crate::foundation::error::{StripewalkError, StripewalkResult};
pub use crate::frames::builders::{
    MOVE1_EXPAND_PX, MOVE1_NAME, MOVE1_RAISE_PX, MOVE1_SECOND_SHIFT_FACTOR, MOVE2_EXPAND_PX,
    MOVE2_NAME, MOVE3_NAME, MOVE3_SQUEEZE_PX, lighten_frame, move1, move2, move3,
};
pub use crate::frames::shift::y_pixel_shift;
pub use crate::frames::synth::{
    FrameEntry, FrameManifest, FrameSynthesizer, SynthesizedFrames, synthesize_document,
};
pub use crate::selection::region::{Region, Span};
pub use crate::selection::stripes::{
    STRIPE_MIN_PERIOD, stripe_columns, stripe_period, stripe_region,
};
pub use crate::session::{EditSession, SelectionMode};
