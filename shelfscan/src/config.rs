use serde::Deserialize;
use std::env;

pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Read an optional string variable, treating an empty value as unset.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on request bodies; base64 photos are large.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language hint, `+`-separated (e.g. `tur+eng`).
    pub languages: String,
    pub max_image_dimension: u32,
    pub contrast_factor: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub enabled: bool,
    pub base_url: String,
    pub api_key: Option<String>,
    /// Value of the `langRestrict` query parameter, `|`-separated.
    pub languages: String,
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: "tur+eng".to_string(),
            max_image_dimension: 4096,
            contrast_factor: 2.0,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_CATALOG_URL.to_string(),
            api_key: None,
            languages: "tr|en".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let ocr_defaults = OcrConfig::default();
        let catalog_defaults = CatalogConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("SHELFSCAN_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_env_or("SHELFSCAN_PORT", 5000),
                max_body_bytes: parse_env_or("SHELFSCAN_MAX_BODY_BYTES", 25 * 1024 * 1024),
            },
            ocr: OcrConfig {
                languages: env_non_empty("OCR_LANGUAGES").unwrap_or(ocr_defaults.languages),
                max_image_dimension: parse_env_or(
                    "OCR_MAX_DIMENSION",
                    ocr_defaults.max_image_dimension,
                ),
                contrast_factor: parse_env_or("OCR_CONTRAST_FACTOR", ocr_defaults.contrast_factor),
            },
            catalog: CatalogConfig {
                enabled: parse_env_or("CATALOG_ENABLED", catalog_defaults.enabled),
                base_url: env_non_empty("CATALOG_BASE_URL").unwrap_or(catalog_defaults.base_url),
                api_key: env_non_empty("GOOGLE_BOOKS_API_KEY"),
                languages: env_non_empty("CATALOG_LANGUAGES")
                    .unwrap_or(catalog_defaults.languages),
                timeout_secs: parse_env_or("CATALOG_TIMEOUT", catalog_defaults.timeout_secs),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_ocr_config_defaults() {
        let defaults = OcrConfig::default();
        assert_eq!(defaults.languages, "tur+eng");
        assert_eq!(defaults.max_image_dimension, 4096);
        assert_eq!(defaults.contrast_factor, 2.0);
    }

    #[test]
    fn test_catalog_config_defaults() {
        let defaults = CatalogConfig::default();
        assert!(defaults.enabled);
        assert_eq!(defaults.base_url, DEFAULT_CATALOG_URL);
        assert!(defaults.api_key.is_none());
        assert_eq!(defaults.languages, "tr|en");
        assert_eq!(defaults.timeout_secs, 10);
    }

    #[test]
    fn test_empty_api_key_is_treated_as_unset() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        std::env::set_var("GOOGLE_BOOKS_API_KEY", "   ");
        let config = Config::default();
        assert!(config.catalog.api_key.is_none());
        std::env::remove_var("GOOGLE_BOOKS_API_KEY");
    }

    #[test]
    fn test_parse_env_or_valid_value() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        std::env::set_var("__TEST_PARSE_PORT", "8080");
        let result: u16 = parse_env_or("__TEST_PARSE_PORT", 3000);
        assert_eq!(result, 8080);
        std::env::remove_var("__TEST_PARSE_PORT");
    }

    #[test]
    fn test_parse_env_or_invalid_value_falls_back() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        std::env::set_var("__TEST_PARSE_FACTOR", "not-a-number");
        let result: f32 = parse_env_or("__TEST_PARSE_FACTOR", 2.0);
        assert_eq!(result, 2.0);
        std::env::remove_var("__TEST_PARSE_FACTOR");
    }
}
