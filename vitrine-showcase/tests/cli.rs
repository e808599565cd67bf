use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's environment and working directory.
fn showcase(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("vitrine-showcase");
    cmd.current_dir(dir.path())
        .env_remove("VITRINE_CONFIG_PATH")
        .env_remove("VITRINE_CONFIG_JSON")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(showcase(&dir).arg("--help"));
    for command in ["pages", "paginate", "carousel", "config"] {
        assert!(text.contains(command), "help missing '{command}'");
    }

    let carousel = stdout_of(showcase(&dir).args(["carousel", "--help"]));
    assert!(carousel.contains("--interval-ms"));
    assert!(carousel.contains("--infinite"));
}

#[test]
fn paginate_prints_window_and_bar() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(showcase(&dir).args([
        "paginate",
        "--current",
        "10",
        "--total",
        "50",
        "--max",
        "5",
    ]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "1 ... 8 9 10 11 12 ... 50");
    assert_eq!(lines[1], "⟨⟨ ⟨ 1 ... 8 9 [10] 11 12 ... 50 ⟩ ⟩⟩ | Go to:");
}

#[test]
fn paginate_with_no_pages_prints_an_empty_window() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(
        showcase(&dir).args(["paginate", "--current", "1", "--total", "0"]),
    );
    assert_eq!(text.lines().next(), Some(""));
}

#[test]
fn paginate_rejects_zero_window() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["paginate", "--current", "1", "--total", "9", "--max", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max must be at least 1"));
}

#[test]
fn home_page_renders_the_store() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(showcase(&dir).args(["pages", "home"]));
    assert!(text.contains("TechStore"));
    assert!(text.contains("‹ ● ○ ○ › ⏸"), "hero carousel missing:\n{text}");
}

#[test]
fn home_page_as_json() {
    let dir = TempDir::new().unwrap();
    let text =
        stdout_of(showcase(&dir).args(["pages", "home", "--format", "json"]));
    let value: serde_json::Value =
        serde_json::from_str(&text).expect("page output is JSON");
    assert_eq!(value["page"], "home");
    assert_eq!(value["store_name"], "TechStore");
}

#[test]
fn unknown_page_fails() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["pages", "checkout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown page: checkout"));
}

#[test]
fn components_page_uses_table_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[table]\npage_size = 10\nrow_count = 30\n").unwrap();

    showcase(&dir)
        .arg("--config")
        .arg(&path)
        .args(["pages", "components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linear Design System Components"))
        .stdout(predicate::str::contains("Showing 1-10 of 30 items"));
}

#[test]
fn carousel_autoplay_wraps() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(showcase(&dir).args([
        "carousel",
        "--slides",
        "3",
        "--interval-ms",
        "100",
        "--ticks",
        "3",
        "--infinite",
    ]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "‹ ● ○ ○ › ⏸",
            "tick 1: slide 2",
            "tick 2: slide 3",
            "tick 3: slide 1",
            "‹ ● ○ ○ › ▶",
        ]
    );
}

#[test]
fn carousel_rejects_short_interval() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["carousel", "--interval-ms", "10"])
        .assert()
        .failure();
}

#[test]
fn carousel_needs_two_slides() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["carousel", "--slides", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two slides"));
}

#[test]
fn config_reports_defaults() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("source: built-in defaults"));
}

#[test]
fn config_follows_env_path_and_warns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("showcase.toml");
    fs::write(&path, "[pagination]\nmax_visible_pages = 6\n").unwrap();

    let text = stdout_of(
        showcase(&dir)
            .env("VITRINE_CONFIG_PATH", &path)
            .args(["config", "--print"]),
    );
    assert!(text.contains("(from $VITRINE_CONFIG_PATH)"), "{text}");
    assert!(text.contains("max_visible_pages (6) is even"), "{text}");
    assert!(text.contains("max_visible_pages = 6"), "{text}");
}

#[test]
fn config_prints_json() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(showcase(&dir).args([
        "config",
        "--print",
        "--format",
        "json",
    ]));
    let json = text
        .split_once('\n')
        .map(|(_, rest)| rest)
        .expect("source line precedes the document");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["carousel"]["autoplay_interval_ms"], 3000);
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[carousel]\nautoplay_interval_ms = 10\n").unwrap();

    showcase(&dir)
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn config_warning_is_logged_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("showcase.toml");
    fs::write(&path, "[pagination]\nmax_visible_pages = 6\n").unwrap();

    let output = showcase(&dir)
        .arg("--config")
        .arg(&path)
        .args(["paginate", "--current", "1", "--total", "3"])
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    let log = String::from_utf8_lossy(&output);
    assert_eq!(log.matches("configuration warning").count(), 1, "{log}");
    assert_eq!(log.matches("configuration loaded").count(), 1, "{log}");
}
