use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_transparent_src_keeps_dst() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [0, 0, 0, 0], 1.0), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_onto_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src, 1.0), src);
}

#[test]
fn over_half_alpha_mixes_colors() {
    let dst = [0, 0, 255, 255];
    let src = [128, 0, 0, 128];
    let out = over(dst, src, 1.0);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert_eq!(out[2], 127);
}

#[test]
fn over_in_place_rejects_mismatched_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());

    let src = [9u8, 8, 7, 255, 0, 0, 0, 0];
    over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(dst, vec![9, 8, 7, 255, 0, 0, 0, 0]);
}
