//! Configuration precedence tests: defaults < file < environment < flags.

use ragchat::config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serial_test::serial;
use std::env;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    // SAFETY: tests in this file are #[serial]; no concurrent env access.
    unsafe {
        env::remove_var("CONFIG_FILE");
        env::remove_var("RAGCHAT_BASE_URL");
        env::remove_var("RAGCHAT_TIMEOUT_SECS");
        env::remove_var("RAGCHAT_API__BASE_URL");
        env::remove_var("RAGCHAT_API__REQUEST_TIMEOUT_SECS");
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["ragchat"]).expect("failed to load config");
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
#[serial]
fn test_cli_flags_override_defaults() {
    clear_env_vars();

    let config = AppConfig::load_from_args([
        "ragchat",
        "--base-url",
        "https://rag.example.com/api",
        "--timeout-secs",
        "5",
    ])
    .expect("failed to load config");

    assert_eq!(config.api.base_url, "https://rag.example.com/api");
    assert_eq!(config.api.request_timeout_secs, 5);
    assert_eq!(config.api.request_timeout().as_secs(), 5);
}

#[test]
#[serial]
fn test_prefixed_env_override() {
    clear_env_vars();
    // SAFETY: serial test, no concurrent env access.
    unsafe {
        env::set_var("RAGCHAT_API__BASE_URL", "http://10.0.0.5:8000");
        env::set_var("RAGCHAT_API__REQUEST_TIMEOUT_SECS", "9");
    }

    let config = AppConfig::load_from_args(["ragchat"]).expect("failed to load config");
    assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
    assert_eq!(config.api.request_timeout_secs, 9);

    clear_env_vars();
}

#[test]
#[serial]
fn test_clap_env_fallback_behaves_like_a_flag() {
    clear_env_vars();
    // SAFETY: serial test, no concurrent env access.
    unsafe {
        env::set_var("RAGCHAT_BASE_URL", "http://envhost:8000");
    }

    let config = AppConfig::load_from_args(["ragchat"]).expect("failed to load config");
    assert_eq!(config.api.base_url, "http://envhost:8000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load_and_flag_precedence() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let file_path = dir.path().join("ragchat.yaml");
    std::fs::write(
        &file_path,
        "api:\n  base_url: \"http://filehost:7070\"\n  request_timeout_secs: 7\n",
    )
    .expect("failed to write temp config");
    let file_arg = file_path.to_str().unwrap();

    // File values apply over defaults.
    let config = AppConfig::load_from_args(["ragchat", "--config", file_arg])
        .expect("failed to load config from file");
    assert_eq!(config.api.base_url, "http://filehost:7070");
    assert_eq!(config.api.request_timeout_secs, 7);

    // A flag beats the file; untouched keys keep the file's value.
    let config = AppConfig::load_from_args([
        "ragchat",
        "--config",
        file_arg,
        "--base-url",
        "http://flaghost:6060",
    ])
    .expect("failed to load config");
    assert_eq!(config.api.base_url, "http://flaghost:6060");
    assert_eq!(config.api.request_timeout_secs, 7);
}
