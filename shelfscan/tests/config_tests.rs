use serial_test::serial;

use shelfscan::config::{Config, DEFAULT_CATALOG_URL};

const VARS: &[&str] = &[
    "SHELFSCAN_HOST",
    "SHELFSCAN_PORT",
    "SHELFSCAN_MAX_BODY_BYTES",
    "OCR_LANGUAGES",
    "OCR_MAX_DIMENSION",
    "OCR_CONTRAST_FACTOR",
    "CATALOG_ENABLED",
    "CATALOG_BASE_URL",
    "GOOGLE_BOOKS_API_KEY",
    "CATALOG_LANGUAGES",
    "CATALOG_TIMEOUT",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = Config::from_env();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.max_body_bytes, 25 * 1024 * 1024);
    assert_eq!(config.ocr.languages, "tur+eng");
    assert_eq!(config.ocr.max_image_dimension, 4096);
    assert!(config.catalog.enabled);
    assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_URL);
    assert_eq!(config.catalog.api_key, None);
    assert_eq!(config.catalog.languages, "tr|en");
    assert_eq!(config.catalog.timeout_secs, 10);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var("SHELFSCAN_PORT", "8088");
    std::env::set_var("OCR_LANGUAGES", "eng");
    std::env::set_var("OCR_CONTRAST_FACTOR", "1.5");
    std::env::set_var("CATALOG_ENABLED", "false");
    std::env::set_var("GOOGLE_BOOKS_API_KEY", "abc123");
    std::env::set_var("CATALOG_TIMEOUT", "3");

    let config = Config::from_env();
    clear_env();

    assert_eq!(config.server.port, 8088);
    assert_eq!(config.ocr.languages, "eng");
    assert_eq!(config.ocr.contrast_factor, 1.5);
    assert!(!config.catalog.enabled);
    assert_eq!(config.catalog.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.catalog.timeout_secs, 3);
}

#[test]
#[serial]
fn test_invalid_values_fall_back_to_defaults() {
    clear_env();
    std::env::set_var("SHELFSCAN_PORT", "not-a-port");
    std::env::set_var("CATALOG_ENABLED", "maybe");
    std::env::set_var("OCR_LANGUAGES", "   ");

    let config = Config::from_env();
    clear_env();

    assert_eq!(config.server.port, 5000);
    assert!(config.catalog.enabled);
    assert_eq!(config.ocr.languages, "tur+eng");
}
