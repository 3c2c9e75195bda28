use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(SceneError::phase("x").to_string().contains("phase error:"));
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        SceneError::out_of_bounds(7, 3)
            .to_string()
            .contains("index 7 is out of bounds for 3")
    );
}

#[test]
fn render_error_names_block_and_keeps_source() {
    let err = SceneError::Render {
        block: 4,
        source: anyhow::anyhow!("device lost"),
    };
    let msg = err.to_string();
    assert!(msg.contains("block 4"));
    assert!(msg.contains("device lost"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
