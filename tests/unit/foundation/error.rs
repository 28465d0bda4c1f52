use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OgError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(OgError::config("x").to_string().contains("config error:"));
    assert!(OgError::font("x").to_string().contains("font error:"));
    assert!(OgError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OgError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
