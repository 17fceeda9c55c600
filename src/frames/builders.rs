use crate::effects::levels::LevelsParams;
use crate::foundation::core::{LayerId, Point};
use crate::foundation::error::{StripewalkError, StripewalkResult};
use crate::foundation::math::round_half_up;
use crate::session::{EditSession, SelectionMode};

/// Name of the leading-step frame.
pub const MOVE1_NAME: &str = "move1";
/// Name of the stripe-cut frame.
pub const MOVE2_NAME: &str = "move2";
/// Name of the squash frame.
pub const MOVE3_NAME: &str = "move3";

/// Rows the whole move1 layer is raised before striping.
pub const MOVE1_RAISE_PX: i32 = 1;
/// Selection growth after the move1 stripe shift.
pub const MOVE1_EXPAND_PX: u32 = 2;
/// Multiplier on the y-shift for the move1 lower-half shift.
pub const MOVE1_SECOND_SHIFT_FACTOR: f64 = 1.5;
/// Selection growth after the move2 stripe cut.
pub const MOVE2_EXPAND_PX: u32 = 1;
/// Horizontal squeeze applied to each outer third in move3.
pub const MOVE3_SQUEEZE_PX: i32 = 2;

/// Build the "move1" frame: stripes lead the motion, the lower half of the grown stripes
/// follows further, and the frame is lightened.
#[tracing::instrument(skip(sess))]
pub fn move1(sess: &mut EditSession<'_>, y_shift: i32) -> StripewalkResult<LayerId> {
    let source = sess.active();
    let frame = sess.duplicate(source)?;
    let backing = sess.duplicate(frame)?;

    sess.set_active(frame)?;
    sess.rename_active(MOVE1_NAME)?;
    sess.translate_layer(0, -MOVE1_RAISE_PX)?;

    sess.select_stripes()?;
    sess.move_selection(0, y_shift)?;
    sess.expand_selection(MOVE1_EXPAND_PX);

    let bounds = sess
        .selection_bounds()
        .ok_or_else(|| StripewalkError::selection("move1 stripe selection is empty"))?;
    let mid_y = bounds.mid_y();
    let (left, top, right) = (
        f64::from(bounds.left),
        f64::from(bounds.top),
        f64::from(bounds.right),
    );
    sess.select_polygon(
        &[
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, mid_y),
            Point::new(left, mid_y),
        ],
        SelectionMode::Diminish,
    );
    let lower_shift = round_half_up(f64::from(y_shift) * MOVE1_SECOND_SHIFT_FACTOR);
    tracing::debug!(?bounds, mid_y, lower_shift, "move1 lower half");
    sess.move_selection(0, lower_shift)?;

    let merged = sess.merge_down(backing)?;
    sess.deselect();
    lighten_frame(sess)?;
    Ok(merged)
}

/// Build the "move2" frame: stripes are cut out of a copy of the active layer.
#[tracing::instrument(skip(sess))]
pub fn move2(sess: &mut EditSession<'_>, y_shift: i32) -> StripewalkResult<LayerId> {
    let frame = sess.duplicate(sess.active())?;
    sess.set_active(frame)?;
    sess.rename_active(MOVE2_NAME)?;

    sess.select_stripes()?;
    sess.clear_selection()?;
    sess.expand_selection(MOVE2_EXPAND_PX);
    // Only the outline moves and it is dropped right after; no pixel changes here.
    sess.translate_boundary(0, y_shift);
    sess.deselect();
    Ok(frame)
}

/// Build the "move3" frame: outer thirds squeeze inward, the top half bobs, and the frame is
/// lightened twice.
#[tracing::instrument(skip(sess))]
pub fn move3(sess: &mut EditSession<'_>, y_shift: i32) -> StripewalkResult<LayerId> {
    let frame = sess.duplicate(sess.active())?;
    sess.set_active(frame)?;
    sess.rename_active(MOVE3_NAME)?;

    let bounds = sess.active_bounds()?;
    let (left, top, right, bottom) = (
        f64::from(bounds.left),
        f64::from(bounds.top),
        f64::from(bounds.right),
        f64::from(bounds.bottom),
    );
    let one_third_x = (right + 2.0 * left) / 3.0;
    let two_third_x = (2.0 * right + left) / 3.0;
    let mid_y = bounds.mid_y();
    tracing::debug!(?bounds, one_third_x, two_third_x, mid_y, "move3 split");

    sess.select_polygon(
        &column(left, one_third_x, top, bottom),
        SelectionMode::Replace,
    );
    sess.move_selection(MOVE3_SQUEEZE_PX, 0)?;

    sess.select_polygon(
        &column(two_third_x, right, top, bottom),
        SelectionMode::Replace,
    );
    sess.move_selection(-MOVE3_SQUEEZE_PX, 0)?;

    let upper = sess.duplicate(frame)?;
    sess.set_active(upper)?;
    sess.select_polygon(&column(left, right, top, mid_y), SelectionMode::Replace);
    sess.move_selection(0, y_shift)?;

    let merged = sess.merge_down(upper)?;
    sess.deselect();
    lighten_frame(sess)?;
    lighten_frame(sess)?;
    Ok(merged)
}

/// Gamma-1.5 levels lift on the active layer.
pub fn lighten_frame(sess: &mut EditSession<'_>) -> StripewalkResult<()> {
    sess.adjust_levels(LevelsParams::LIGHTEN)
}

fn column(x0: f64, x1: f64, y0: f64, y1: f64) -> [Point; 4] {
    [
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/frames/builders.rs"]
mod tests;
