use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::error::Result;
use crate::extraction::BookScanner;
use crate::ocr::TextRecognizer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub scanner: BookScanner,
}

impl AppState {
    /// Wire the scanner from config. The catalog client is only built when
    /// lookups are enabled.
    pub fn new(config: Config, recognizer: Arc<dyn TextRecognizer>) -> Result<Self> {
        let catalog = if config.catalog.enabled {
            Some(CatalogClient::new(&config.catalog)?)
        } else {
            None
        };
        let scanner = BookScanner::new(recognizer, catalog, config.ocr.clone());

        Ok(Self {
            config: Arc::new(config),
            scanner,
        })
    }
}
