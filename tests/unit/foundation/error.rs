use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VitrineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VitrineError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        VitrineError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VitrineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: VitrineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, VitrineError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
}
