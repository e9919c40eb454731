use cre_core::errors::{require_engine_count, require_positive, CreError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("field", "chamber_diameter")
        .with_context("value", 0.0)
}

#[test]
fn invalid_input_surface() {
    let err = CreError::InvalidInput(sample_info("engine_chamber_diameter", "must be positive"));
    assert_eq!(err.info().code, "engine_chamber_diameter");
    assert_eq!(err.info().context.get("value").map(String::as_str), Some("0"));
    assert!(err.is_invalid_input());
    assert!(!err.is_not_found());
}

#[test]
fn not_found_surface() {
    let err = CreError::NotFound(
        ErrorInfo::new("registry_engine", "unknown engine")
            .with_hint("available: merlin_1d, raptor_2"),
    );
    assert!(err.is_not_found());
    assert!(err.to_string().contains("hint: available: merlin_1d"));
}

#[test]
fn serde_error_surface() {
    let err = CreError::Serde(sample_info("json_deserialize", "schema mismatch"));
    assert_eq!(err.info().code, "json_deserialize");
}

#[test]
fn family_tag_serializes() {
    let err = CreError::invalid("ring_engine_count", "engine count must be at least one");
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["family"], "InvalidInput");
    assert_eq!(value["detail"]["code"], "ring_engine_count");
    let decoded: CreError = serde_json::from_value(value).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn validation_helpers_reject_bad_values() {
    assert!(require_positive("x", "sound_speed", 340.0).is_ok());
    assert!(require_positive("x", "sound_speed", 0.0).is_err());
    assert!(require_positive("x", "sound_speed", f64::NAN).is_err());
    match require_engine_count("ring_engine_count", 0) {
        Err(CreError::InvalidInput(info)) => assert_eq!(info.code, "ring_engine_count"),
        other => panic!("unexpected result: {other:?}"),
    }
}
