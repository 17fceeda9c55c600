use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StripewalkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StripewalkError::layer("x")
            .to_string()
            .contains("layer error:")
    );
    assert!(
        StripewalkError::selection("x")
            .to_string()
            .contains("selection error:")
    );
}

#[test]
fn invalid_dimensions_reports_both_axes() {
    let msg = StripewalkError::invalid_dimensions(0, 12).to_string();
    assert!(msg.contains("invalid sprite dimensions"));
    assert!(msg.contains("0x12"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StripewalkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
