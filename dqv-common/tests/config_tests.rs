//! Unit tests for configuration resolution and graceful degradation
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate DQV_VIDEO_DIR or DQV_ANNOTATION_FILE are marked with
//! #[serial] so they run sequentially, not in parallel.

use dqv_common::config::{
    config_file_path, resolve_viewer_config, TomlConfig, ENV_ANNOTATION_FILE, ENV_VIDEO_DIR,
};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(ENV_VIDEO_DIR);
    env::remove_var(ENV_ANNOTATION_FILE);
}

#[test]
#[serial]
fn test_defaults_with_no_overrides() {
    clear_env();

    let config = resolve_viewer_config(None, None, &TomlConfig::default());
    assert_eq!(config.video_dir, PathBuf::from("videos"));
    assert_eq!(
        config.annotation_file,
        PathBuf::from("desire_oriented_vqa.json")
    );
}

#[test]
#[serial]
fn test_env_var_beats_file_and_default() {
    clear_env();
    env::set_var(ENV_VIDEO_DIR, "/tmp/dqv-env-videos");

    let file = TomlConfig {
        video_dir: Some(PathBuf::from("/from-file")),
        ..TomlConfig::default()
    };
    let config = resolve_viewer_config(None, None, &file);
    assert_eq!(config.video_dir, PathBuf::from("/tmp/dqv-env-videos"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_arg_beats_env_var() {
    clear_env();
    env::set_var(ENV_ANNOTATION_FILE, "/tmp/dqv-env.json");

    let config = resolve_viewer_config(
        None,
        Some(PathBuf::from("/from-cli.json")),
        &TomlConfig::default(),
    );
    assert_eq!(config.annotation_file, PathBuf::from("/from-cli.json"));

    clear_env();
}

#[test]
#[serial]
fn test_file_value_beats_default() {
    clear_env();

    let file = TomlConfig {
        annotation_file: Some(PathBuf::from("/from-file.json")),
        ..TomlConfig::default()
    };
    let config = resolve_viewer_config(None, None, &file);
    assert_eq!(config.annotation_file, PathBuf::from("/from-file.json"));
}

#[test]
fn test_load_from_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TomlConfig::load_from(&dir.path().join("absent.toml"));
    assert!(config.video_dir.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_from_malformed_file_yields_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is [not toml").unwrap();

    let config = TomlConfig::load_from(file.path());
    assert!(config.video_dir.is_none());
    assert!(config.annotation_file.is_none());
}

#[test]
fn test_load_from_valid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
video_dir = "/media/clips"
annotation_file = "/media/annotations.json"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = TomlConfig::load_from(file.path());
    assert_eq!(config.video_dir, Some(PathBuf::from("/media/clips")));
    assert_eq!(
        config.annotation_file,
        Some(PathBuf::from("/media/annotations.json"))
    );
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_file_path_under_dqv() {
    if let Some(path) = config_file_path() {
        assert!(path.ends_with("dqv/config.toml"));
    }
}
