use std::fs;

use slidev_config::loader::env::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, EnvSnapshot, STEP_VAR,
};
use slidev_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, ConfigSource,
};
use slidev_core::{ConfigurationError, TimingFunction};
use tempfile::TempDir;

fn empty_env() -> EnvSnapshot {
    EnvSnapshot::default()
}

#[test]
fn falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(empty_env())
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config.frames_visible, 1);
    assert!(load.warnings.is_empty());
}

#[test]
fn finds_default_file_in_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/slidev.toml");
    fs::write(
        &path,
        "frames_visible = 3\nstep = 2\nloop = true\ndraggable = true\n",
    )
    .unwrap();

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(empty_env())
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.frames_visible, 3);
    assert_eq!(load.config.step, 2);
    assert!(load.config.looping);
    assert!(load.config.draggable);
}

#[test]
fn explicit_path_beats_environment() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("explicit.json");
    fs::write(&explicit, r#"{"frames_visible": 4, "step": 4}"#).unwrap();
    let from_env = dir.path().join("env.toml");
    fs::write(&from_env, "frames_visible = 2\n").unwrap();

    let env = EnvSnapshot::from_pairs([
        (CONFIG_PATH_VAR, from_env.display().to_string()),
        (CONFIG_JSON_VAR, r#"{"frames_visible": 5}"#.to_string()),
    ]);
    let load = ConfigLoader::new()
        .with_config_path(&explicit)
        .with_env(env)
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::Explicit(explicit));
    assert_eq!(load.config.frames_visible, 4);
}

#[test]
fn env_path_beats_inline_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slider.conf");
    // unknown extension: parsed as TOML, then JSON
    fs::write(&path, r#"{"frames_visible": 2, "transition_timing": "ease-in"}"#).unwrap();

    let env = EnvSnapshot::from_pairs([
        (CONFIG_PATH_VAR, path.display().to_string()),
        (CONFIG_JSON_VAR, r#"{"frames_visible": 5}"#.to_string()),
    ]);
    let load = ConfigLoader::new().with_env(env).load().unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(path));
    assert_eq!(load.config.frames_visible, 2);
    assert_eq!(load.config.transition_timing, TimingFunction::EaseIn);
}

#[test]
fn inline_json_with_overrides() {
    let dir = TempDir::new().unwrap();
    let env = EnvSnapshot::from_pairs([
        (CONFIG_JSON_VAR, r#"{"frames_visible": 3, "step": 1}"#),
        (STEP_VAR, "2"),
    ]);
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env)
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.frames_visible, 3);
    assert_eq!(load.config.step, 2);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env(empty_env())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Read { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slidev.toml");
    fs::write(&path, "frames_visible = \"three\"\n").unwrap();
    let err = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(empty_env())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse(_)));
}

#[test]
fn guard_rails_reject_zero_frames() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slidev.json");
    fs::write(&path, r#"{"frames_visible": 0}"#).unwrap();
    let err = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(empty_env())
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::Invalid(
            ConfigurationError::NoVisibleFrames
        ))
    ));
}
