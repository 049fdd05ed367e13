use std::path::PathBuf;

use squish_core::config::AppConfig;
use squish_core::error::SquishError;
use squish_core::view::SyncMode;

#[test]
fn test_default_roundtrip() {
    let config = AppConfig::default();
    let text = config.to_toml().unwrap();
    assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_partial_document_uses_defaults() {
    let config = AppConfig::from_toml("default_compression_value = 12\n").unwrap();
    assert_eq!(config.default_quality().get(), 12);
    assert_eq!(config.out_img_name_pat, "*_compressed.jpg");
    assert_eq!(config.encoder_program, "ffmpeg");
    assert_eq!(config.scroll_sync, SyncMode::CompressedToOriginal);
}

#[test]
fn test_full_document() {
    let text = r#"
default_compression_value = 20
out_img_name_pat = "*-small.jpg"
load_folder = "/home/me/Pictures"
output_dir = "/tmp/squish"
encoder_program = "/usr/local/bin/ffmpeg"
scroll_sync = "bidirectional"

[zoom]
min = 0.1
max = 8.0
"#;
    let config = AppConfig::from_toml(text).unwrap();
    assert_eq!(config.load_folder, PathBuf::from("/home/me/Pictures"));
    assert_eq!(config.output_dir(), PathBuf::from("/tmp/squish"));
    assert_eq!(config.scroll_sync, SyncMode::Bidirectional);
    assert_eq!(config.zoom.max, 8.0);
    assert_eq!(config.zoom.step_in, 1.25);
}

#[test]
fn test_quality_out_of_range_rejected() {
    let err = AppConfig::from_toml("default_compression_value = 40\n").unwrap_err();
    assert!(matches!(err, SquishError::InvalidQuality(40)));
}

#[test]
fn test_pattern_needs_placeholder() {
    let err = AppConfig::from_toml("out_img_name_pat = \"out.jpg\"\n").unwrap_err();
    assert!(matches!(err, SquishError::InvalidConfig(_)));
    let err = AppConfig::from_toml("out_img_name_pat = \"dir/*.jpg\"\n").unwrap_err();
    assert!(matches!(err, SquishError::InvalidConfig(_)));
}

#[test]
fn test_bad_zoom_bounds_rejected() {
    let err = AppConfig::from_toml("[zoom]\nmin = 2.0\n").unwrap_err();
    assert!(matches!(err, SquishError::InvalidConfig(_)));
}

#[test]
fn test_malformed_toml() {
    let err = AppConfig::from_toml("default_compression_value = \"five\"").unwrap_err();
    assert!(matches!(err, SquishError::ConfigParse(_)));
}

#[test]
fn test_load_or_default() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("squish.toml");
    assert_eq!(AppConfig::load_or_default(&missing).unwrap(), AppConfig::default());

    std::fs::write(&missing, "default_compression_value = 3\n").unwrap();
    assert_eq!(AppConfig::load_or_default(&missing).unwrap().default_compression_value, 3);

    std::fs::write(&missing, "default_compression_value = 0\n").unwrap();
    assert!(AppConfig::load_or_default(&missing).is_err());
}
