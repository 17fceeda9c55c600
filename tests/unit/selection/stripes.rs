use super::*;

#[test]
fn period_is_always_two_three_or_four() {
    for width in [1u32, 2, 3, 7, 8, 40, 97, 256] {
        for i in -50..400 {
            let x = f64::from(i) * 0.37;
            let p = stripe_period(x, width);
            assert!((2..=4).contains(&p), "width={width} x={x} p={p}");
        }
    }
    assert!((2..=4).contains(&stripe_period(1.0e12, 40)));
    assert_eq!(stripe_period(f64::NAN, 40), 2);
}

#[test]
fn period_peaks_at_quarter_width_and_bottoms_out_opposite() {
    assert_eq!(stripe_period(10.0, 40), 4);
    assert_eq!(stripe_period(30.0, 40), 2);
    assert_eq!(stripe_period(0.0, 40), 3);
}

#[test]
fn quarter_point_is_a_candidate_but_not_struck_when_not_a_multiple() {
    let columns = stripe_columns(40).unwrap();
    assert!(!columns.contains(&10));
    assert!(columns.contains(&0));
}

#[test]
fn columns_for_width_eight() {
    assert_eq!(stripe_columns(8).unwrap(), vec![0, 6]);
}

#[test]
fn first_column_is_always_struck() {
    for width in 1..64u32 {
        assert_eq!(stripe_columns(width).unwrap().first(), Some(&0));
    }
}

#[test]
fn no_two_adjacent_columns_are_struck() {
    for width in 4..300u32 {
        let columns = stripe_columns(width).unwrap();
        for pair in columns.windows(2) {
            assert!(pair[1] > pair[0] + 1, "width={width} {pair:?}");
        }
        assert!(columns.iter().all(|&x| x < width));
    }
}

#[test]
fn zero_width_is_rejected() {
    assert!(matches!(
        stripe_columns(0),
        Err(StripewalkError::InvalidSpriteDimensions { .. })
    ));
    assert!(stripe_region(PixelBounds::new(0, 0, 4, 0)).is_err());
}

#[test]
fn region_is_full_height_columns_offset_by_bounds() {
    let bounds = PixelBounds::new(10, 5, 18, 9);
    let region = stripe_region(bounds).unwrap();
    assert_eq!(region.area(), 2 * 4);
    for y in 5..9 {
        assert!(region.contains(10, y));
        assert!(region.contains(16, y));
        assert!(!region.contains(11, y));
    }
    assert_eq!(region.bounds(), Some(PixelBounds::new(10, 5, 17, 9)));
}
