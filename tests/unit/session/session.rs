use super::*;
use crate::document::layer::Layer;
use crate::foundation::core::Canvas;

const RED: [u8; 4] = [255, 0, 0, 255];
const GREY: [u8; 4] = [128, 128, 128, 255];

fn sprite_doc(px: [u8; 4]) -> (Document, LayerId) {
    let mut doc = Document::new(Canvas::new(16, 16).unwrap());
    let extent = PixelBounds::new(4, 4, 12, 12);
    let data = px.repeat(64);
    let id = doc.add_layer(Layer::from_rgba8_premul("idle", extent, data).unwrap());
    (doc, id)
}

#[test]
fn new_rejects_unknown_layer() {
    let (mut doc, _) = sprite_doc(RED);
    assert!(EditSession::new(&mut doc, LayerId(99)).is_err());
}

#[test]
fn select_modes_combine_regions() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();

    sess.select_rect(PixelBounds::new(0, 0, 4, 4), SelectionMode::Replace);
    sess.select_rect(PixelBounds::new(2, 0, 6, 4), SelectionMode::Extend);
    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(0, 0, 6, 4)));

    sess.select_rect(PixelBounds::new(0, 0, 6, 2), SelectionMode::Diminish);
    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(0, 2, 6, 4)));

    sess.select_rect(PixelBounds::new(3, 0, 9, 9), SelectionMode::Intersect);
    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(3, 2, 6, 4)));

    sess.deselect();
    assert!(sess.selection().is_empty());
}

#[test]
fn active_bounds_of_empty_layer_is_invalid_dimensions() {
    let mut doc = Document::new(Canvas::new(4, 4).unwrap());
    let id = doc.add_layer(Layer::transparent("blank", PixelBounds::new(0, 0, 4, 4)));
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    assert!(matches!(
        sess.active_bounds(),
        Err(StripewalkError::InvalidSpriteDimensions { .. })
    ));
    assert!(sess.select_stripes().is_err());
}

#[test]
fn select_stripes_spans_active_bounds() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    sess.select_stripes().unwrap();
    // Width 8 strikes offsets 0 and 6.
    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(4, 4, 11, 12)));
    assert_eq!(sess.selection().area(), 16);
}

#[test]
fn move_selection_moves_pixels_and_selection() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    sess.select_rect(PixelBounds::new(4, 4, 5, 12), SelectionMode::Replace);
    sess.move_selection(0, -2).unwrap();

    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(4, 2, 5, 10)));
    let layer = sess.document().layer(id).unwrap();
    assert_eq!(layer.pixel(4, 2), RED);
    assert_eq!(layer.pixel(4, 11), [0, 0, 0, 0]);
    assert_eq!(layer.bounds(), Some(PixelBounds::new(4, 2, 12, 12)));
}

#[test]
fn move_without_selection_leaves_layer_alone() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    sess.move_selection(3, 0).unwrap();
    assert_eq!(sess.active_bounds().unwrap(), PixelBounds::new(4, 4, 12, 12));

    sess.translate_layer(3, 0).unwrap();
    assert_eq!(sess.active_bounds().unwrap(), PixelBounds::new(7, 4, 15, 12));
}

#[test]
fn translate_boundary_leaves_pixels_alone() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    sess.select_rect(PixelBounds::new(4, 4, 6, 6), SelectionMode::Replace);
    sess.translate_boundary(0, -3);
    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(4, 1, 6, 3)));
    assert_eq!(sess.active_bounds().unwrap(), PixelBounds::new(4, 4, 12, 12));
}

#[test]
fn clear_and_expand_selection() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    sess.select_rect(PixelBounds::new(4, 4, 12, 5), SelectionMode::Replace);
    sess.clear_selection().unwrap();
    assert_eq!(sess.active_bounds().unwrap(), PixelBounds::new(4, 5, 12, 12));

    sess.expand_selection(1);
    assert_eq!(sess.selection_bounds(), Some(PixelBounds::new(3, 3, 13, 6)));
}

#[test]
fn merge_down_makes_lower_layer_active() {
    let (mut doc, id) = sprite_doc(RED);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    let dup = sess.duplicate(id).unwrap();
    assert_eq!(sess.active(), id);
    sess.set_active(dup).unwrap();
    sess.rename_active("scratch").unwrap();
    let lower = sess.merge_down(dup).unwrap();
    assert_eq!(lower, id);
    assert_eq!(sess.active(), id);
    assert_eq!(sess.document().len(), 1);
    assert!(sess.set_active(dup).is_err());
}

#[test]
fn adjust_levels_respects_selection() {
    let (mut doc, id) = sprite_doc(GREY);
    let mut sess = EditSession::new(&mut doc, id).unwrap();
    sess.select_rect(PixelBounds::new(4, 4, 5, 5), SelectionMode::Replace);
    sess.adjust_levels(LevelsParams::LIGHTEN).unwrap();
    {
        let layer = sess.document().layer(id).unwrap();
        assert_eq!(layer.pixel(4, 4), [161, 161, 161, 255]);
        assert_eq!(layer.pixel(5, 5), GREY);
    }

    sess.deselect();
    sess.adjust_levels(LevelsParams::LIGHTEN).unwrap();
    let layer = sess.document().layer(id).unwrap();
    assert_eq!(layer.pixel(5, 5), [161, 161, 161, 255]);
    assert_eq!(layer.pixel(4, 4), [188, 188, 188, 255]);
}
