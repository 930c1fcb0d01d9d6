//! Tests for configuration system

use pokeday::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.upstream.port, 8000);
    assert_eq!(config.upstream.base_url, "http://localhost:8000");
    assert_eq!(config.upstream.timeout_secs, 10);
    assert_eq!(config.client.base_url, "http://localhost:3000");
    assert_eq!(config.data.file, "data/pokedex.json");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_has_all_required_fields() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert!(!config.upstream.base_url.is_empty());
    assert!(config.upstream.timeout_secs > 0);
    assert!(!config.client.base_url.is_empty());
    assert!(!config.data.file.is_empty());
    assert!(!config.observability.log_level.is_empty());
}

#[test]
fn test_loaded_config_validates() {
    let config = Config::load(None).expect("Failed to load config");
    config.validate().expect("Default config should validate");
}
