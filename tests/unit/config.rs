use super::*;

#[test]
fn empty_object_takes_defaults() {
    let cfg = GalleryConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, GalleryConfig::default());
    assert_eq!(cfg.gap_px, 8.0);
    assert_eq!(cfg.threading().threads, None);
    cfg.validate().unwrap();
}

#[test]
fn partial_config_overrides_fields() {
    let cfg = GalleryConfig::from_json_str(
        r#"{ "gapPx": 12, "threads": 2,
             "breakpoints": { "steps": [ { "minWidthPx": 900, "columns": 3 } ] } }"#,
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.gap_px, 12.0);
    assert_eq!(cfg.threading().threads, Some(2));
    assert_eq!(cfg.breakpoints.columns_for_width(950.0).get(), 3);
    assert_eq!(cfg.breakpoints.columns_for_width(500.0).get(), 1);
}

#[test]
fn out_of_range_values_fail_validation() {
    let negative_gap = GalleryConfig {
        gap_px: -1.0,
        ..GalleryConfig::default()
    };
    assert!(negative_gap.validate().is_err());

    let zero_threads = GalleryConfig {
        threads: Some(0),
        ..GalleryConfig::default()
    };
    assert!(zero_threads.validate().is_err());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(GalleryConfig::from_json_str(r#"{ "columns": 3 }"#).is_err());
}
