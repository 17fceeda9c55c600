use super::*;

fn rect(l: i32, t: i32, r: i32, b: i32) -> Region {
    Region::from_rect(PixelBounds::new(l, t, r, b))
}

#[test]
fn from_rect_covers_every_cell() {
    let r = rect(1, 2, 4, 5);
    assert_eq!(r.area(), 9);
    assert!(r.contains(1, 2));
    assert!(r.contains(3, 4));
    assert!(!r.contains(4, 4));
    assert_eq!(r.bounds(), Some(PixelBounds::new(1, 2, 4, 5)));
    assert!(rect(3, 3, 3, 9).is_empty());
}

#[test]
fn union_of_adjacent_columns_coalesces() {
    let a = rect(0, 0, 1, 3);
    let b = rect(1, 0, 2, 3);
    let u = a.union(&b);
    assert_eq!(u, rect(0, 0, 2, 3));
    for (_, spans) in u.rows() {
        assert_eq!(spans.len(), 1);
    }
}

#[test]
fn union_keeps_separate_columns_separate() {
    let u = rect(0, 0, 1, 2).union(&rect(3, 0, 4, 2));
    assert_eq!(u.area(), 4);
    assert!(!u.contains(1, 0));
    assert!(!u.contains(2, 1));
    assert_eq!(u.bounds(), Some(PixelBounds::new(0, 0, 4, 2)));
}

#[test]
fn intersect_and_subtract_partition_a_region() {
    let a = rect(0, 0, 6, 6);
    let b = rect(2, 3, 9, 9);
    let both = a.intersect(&b);
    let only_a = a.subtract(&b);

    assert_eq!(both, rect(2, 3, 6, 6));
    assert_eq!(both.area() + only_a.area(), a.area());
    assert!(only_a.intersect(&b).is_empty());
    assert_eq!(only_a.union(&both), a);
}

#[test]
fn subtract_punches_holes_in_a_span() {
    let a = rect(0, 0, 10, 1);
    let cut = rect(2, 0, 4, 1).union(&rect(6, 0, 7, 1));
    let out = a.subtract(&cut);
    let spans: Vec<Span> = out.rows().flat_map(|(_, s)| s.to_vec()).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(4, 6), Span::new(7, 10)]
    );
}

#[test]
fn translate_moves_cells_and_bounds() {
    let r = rect(0, 0, 2, 2).translate(3, -1);
    assert_eq!(r.bounds(), Some(PixelBounds::new(3, -1, 5, 1)));
    assert!(r.contains(4, 0));
    assert!(!r.contains(1, 1));
}

#[test]
fn expand_grows_square_in_every_direction() {
    let single = rect(5, 5, 6, 6);
    let grown = single.expand(2);
    assert_eq!(grown, rect(3, 3, 8, 8));
    assert_eq!(single.expand(0), single);
}

#[test]
fn expand_merges_nearby_columns() {
    let stripes = rect(0, 0, 1, 4).union(&rect(3, 0, 4, 4));
    let grown = stripes.expand(1);
    assert_eq!(grown, rect(-1, -1, 5, 5));
}

#[test]
fn polygon_rectangle_matches_from_rect() {
    let pts = [
        Point::new(1.0, 2.0),
        Point::new(5.0, 2.0),
        Point::new(5.0, 6.0),
        Point::new(1.0, 6.0),
    ];
    assert_eq!(Region::from_polygon(&pts), rect(1, 2, 5, 6));
}

#[test]
fn polygon_half_pixel_edge_excludes_the_straddled_row() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.5),
        Point::new(0.0, 4.5),
    ];
    assert_eq!(Region::from_polygon(&pts), rect(0, 0, 4, 4));
}

#[test]
fn polygon_fractional_columns_sample_pixel_centres() {
    // Columns 0..=2 have centres 0.5, 1.5, 2.5 < 2.666.
    let x = 8.0 / 3.0;
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(x, 0.0),
        Point::new(x, 2.0),
        Point::new(0.0, 2.0),
    ];
    assert_eq!(Region::from_polygon(&pts), rect(0, 0, 3, 2));
}

#[test]
fn polygon_triangle_tapers() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 4.0),
    ];
    let tri = Region::from_polygon(&pts);
    assert!(tri.contains(0, 0));
    assert!(tri.contains(2, 0));
    assert!(!tri.contains(3, 0));
    assert!(tri.contains(0, 2));
    assert!(!tri.contains(0, 3));
    assert_eq!(tri.area(), 6);
}

#[test]
fn degenerate_polygons_are_empty() {
    assert!(Region::from_polygon(&[]).is_empty());
    assert!(Region::from_polygon(&[Point::new(0.0, 0.0), Point::new(3.0, 3.0)]).is_empty());
}

#[test]
fn cells_iterate_row_major() {
    let r = rect(0, 0, 2, 2);
    let cells: Vec<(i32, i32)> = r.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}
