use std::fs;

use tempfile::TempDir;
use vitrine_config::{
    ConfigLoadError, ConfigLoader, ConfigSource, EnvOverrides, ShowcaseConfig,
};
use vitrine_model::{ControlSize, PaginationVariant, ScalePreset};

fn isolated_loader(root: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .with_search_root(root.path())
        .with_env(EnvOverrides::default())
}

#[test]
fn empty_directory_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let load = isolated_loader(&dir).load().unwrap();

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, ShowcaseConfig::default());
    assert!(load.warnings.is_empty());
}

#[test]
fn discovers_toml_in_search_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vitrine.toml"),
        r#"
[pagination]
max_visible_pages = 5
variant = "compact"
size = "small"
show_page_info = true

[carousel]
autoplay = true
autoplay_interval_ms = 5000
infinite_loop = true

[theme]
scale_preset = "large"
"#,
    )
    .unwrap();

    let load = isolated_loader(&dir).load().unwrap();

    assert_eq!(
        load.source,
        ConfigSource::File(dir.path().join("vitrine.toml"))
    );
    let config = load.config;
    assert_eq!(config.pagination.max_visible_pages, 5);
    assert_eq!(config.pagination.variant, PaginationVariant::Compact);
    assert_eq!(config.pagination.size, ControlSize::Small);
    assert!(config.pagination.display.show_page_info);
    assert!(config.pagination.display.show_first_last);
    assert_eq!(config.pagination.items_per_page_options, vec![10, 20, 50, 100]);
    assert!(config.carousel.autoplay);
    assert_eq!(config.carousel.autoplay_interval_ms, 5000);
    assert!(config.carousel.loop_mode().is_infinite());
    assert_eq!(config.theme.scale_preset, ScalePreset::Large);
}

#[test]
fn env_path_wins_over_discovered_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vitrine.toml"),
        "[pagination]\nmax_visible_pages = 9\n",
    )
    .unwrap();
    let override_path = dir.path().join("override.json");
    fs::write(&override_path, r#"{"pagination": {"max_visible_pages": 3}}"#)
        .unwrap();

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(EnvOverrides {
            config_path: Some(override_path.clone()),
            config_json: Some(r#"{"pagination": {"max_visible_pages": 11}}"#.into()),
        })
        .load()
        .unwrap();

    assert_eq!(load.source, ConfigSource::EnvPath(override_path));
    assert_eq!(load.config.pagination.max_visible_pages, 3);
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let dir = TempDir::new().unwrap();
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(EnvOverrides {
            config_path: None,
            config_json: Some(r#"{"table": {"page_size": 10}}"#.into()),
        })
        .load()
        .unwrap();

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.table.page_size, 10);
    assert_eq!(load.config.table.row_count, 50);
}

#[test]
fn explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = isolated_loader(&dir)
        .with_config_path(&missing)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
}

#[test]
fn guard_rails_reject_invalid_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[carousel]\nautoplay_interval_ms = 5\n").unwrap();

    let err = isolated_loader(&dir)
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[pagination\nmax_visible_pages = ").unwrap();

    let err = isolated_loader(&dir)
        .with_config_path(&path)
        .load()
        .unwrap_err();

    match err {
        ConfigLoadError::Parse { origin, .. } => {
            assert!(origin.ends_with("broken.toml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn warnings_are_carried_with_the_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vitrine.json"),
        r#"{"pagination": {"max_visible_pages": 6, "items_per_page": 15}}"#,
    )
    .unwrap();

    let load = isolated_loader(&dir).load().unwrap();
    assert_eq!(load.warnings.len(), 2);
}
