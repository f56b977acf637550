use aurora_ui::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const BIN: &str = "aurora-gallery";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("AURORA_SERVER__PORT");
        env::remove_var("AURORA_GALLERY__GROUP_MAX");
        env::remove_var("AURORA_GALLERY__TITLE");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load defaults");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.server.address(), "127.0.0.1:3000");
    assert_eq!(config.gallery.title, "Aurora UI");
    assert_eq!(config.gallery.group_max, 5);
    assert!(!config.logging.json);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("AURORA_SERVER__PORT", "9090");
        env::set_var("AURORA_GALLERY__GROUP_MAX", "3");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.gallery.group_max, 3);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("AURORA_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([
        BIN,
        "--port",
        "8181",
        "--host",
        "0.0.0.0",
        "--group-max",
        "2",
        "--log-json",
        "true",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.gallery.group_max, 2);
    assert!(config.logging.json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        "server:\n  port: 7070\ngallery:\n  title: \"Team Directory\"\n  group_max: 4"
    )
    .expect("Failed to write temp config");

    let path = file.path().to_string_lossy().into_owned();
    let config =
        AppConfig::load_from_args([BIN, "--config", path.as_str()]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.gallery.title, "Team Directory");
    assert_eq!(config.gallery.group_max, 4);
    // Untouched keys keep their defaults
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_unknown_flag_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--no-such-flag"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./aurora.yaml
    let cwd_path = "aurora.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./aurora.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).expect("Failed to remove ./aurora.yaml");

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
