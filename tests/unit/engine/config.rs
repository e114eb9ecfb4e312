use super::*;

#[test]
fn defaults_validate() {
    let cfg = EngineConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.frame_rate().unwrap().frame_interval_ms(), 33);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = EngineConfig::from_json_str(r#"{ "fps": 60, "start_block_px": 16 }"#).unwrap();
    assert_eq!(cfg.fps, 60);
    assert_eq!(cfg.start_block_px, 16);
    assert_eq!(cfg.reveal_step_ms, 90);
    assert_eq!(cfg.max_preview, Viewport::new(980, 720));
}

#[test]
fn json_roundtrip_of_defaults() {
    let cfg = EngineConfig::default();
    let text = serde_json::to_string(&cfg).unwrap();
    assert_eq!(EngineConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(EngineConfig::from_json_str(r#"{ "fps": 0 }"#).is_err());
    assert!(EngineConfig::from_json_str(r#"{ "reveal_step_ms": 0 }"#).is_err());
    assert!(
        EngineConfig::from_json_str(r#"{ "max_preview": { "width": 0, "height": 10 } }"#)
            .is_err()
    );
    assert!(EngineConfig::from_json_str(r#"{ "bogus": 1 }"#).is_err());

    let cfg = EngineConfig {
        breathe_hz: f64::NAN,
        ..EngineConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(RevealError::Validation(_))));
}

#[test]
fn load_reports_missing_file() {
    let err = EngineConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("read engine config"));
}
