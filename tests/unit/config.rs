use super::*;

#[test]
fn defaults_match_documented_layout() {
    let cfg = GenerateConfig::default();
    assert_eq!(cfg.nice, 0);
    assert_eq!((cfg.gps_min, cfg.gps_max), (22, 22));
    assert_eq!((cfg.columns_regular, cfg.columns_irregular), (12, 12));
    assert!(cfg.include_lightning && cfg.include_metadata);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.column_request(), ColumnRequest::default());
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = GenerateConfig::from_json_str(r#"{ "nice": 3, "gps_max": 30 }"#).unwrap();
    assert_eq!(cfg.nice, 3);
    assert_eq!(cfg.gps_min, 22);
    assert_eq!(cfg.gps_max, 30);
    assert!(cfg.include_metadata);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GenerateConfig::from_json_str(r#"{ "nicee": 3 }"#).unwrap_err();
    assert!(matches!(err, GlyphfallError::Serde(_)));
}

#[test]
fn validate_reports_each_bad_field() {
    let bad = [
        GenerateConfig {
            nice: -1,
            ..Default::default()
        },
        GenerateConfig {
            gps_min: 0,
            ..Default::default()
        },
        GenerateConfig {
            gps_min: 10,
            gps_max: 9,
            ..Default::default()
        },
        GenerateConfig {
            columns_regular: -2,
            ..Default::default()
        },
        GenerateConfig {
            columns_irregular: -2,
            ..Default::default()
        },
    ];
    for cfg in bad {
        assert!(matches!(cfg.validate(), Err(GlyphfallError::Validation(_))));
    }
}

#[test]
fn column_request_clamps_instead_of_failing() {
    let cfg = GenerateConfig {
        nice: 40,
        gps_min: -5,
        gps_max: -9,
        columns_regular: -3,
        columns_irregular: 4,
        ..Default::default()
    };
    let req = cfg.column_request();
    assert_eq!((req.gps_min, req.gps_max), (1, 1));
    assert_eq!((req.regular, req.irregular), (0, 4));
    assert_eq!(cfg.quality().level(), crate::quality::MAX_QUALITY_LEVEL);
}

#[test]
fn lightning_respects_flag_and_dial() {
    assert!(GenerateConfig::default().lightning_enabled());
    let off = GenerateConfig {
        include_lightning: false,
        ..Default::default()
    };
    assert!(!off.lightning_enabled());
    let dialed = GenerateConfig {
        nice: 6,
        ..Default::default()
    };
    assert!(!dialed.lightning_enabled());
    let almost = GenerateConfig {
        nice: 5,
        ..Default::default()
    };
    assert!(almost.lightning_enabled());
}

#[test]
fn missing_file_is_an_error() {
    let err = GenerateConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("read config"));
}
