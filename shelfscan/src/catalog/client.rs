use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::types::{CatalogMatch, VolumesResponse};
use crate::config::CatalogConfig;
use crate::error::{Result, ShelfScanError};

/// Single best-match lookups against a Google Books compatible endpoint.
///
/// Lookups never fail: transport errors, timeouts and bad statuses degrade to
/// a [`CatalogMatch`] with `found == false` and the cause in `error`.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    languages: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ShelfScanError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            languages: config.languages.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Look up `query`, capped at one result.
    pub async fn lookup(&self, query: &str) -> CatalogMatch {
        match self.fetch(query).await {
            Ok(found) => {
                debug!(query, found = found.found, "Catalog lookup finished");
                found
            }
            Err(e) => {
                let cause = e.to_string();
                warn!(query, error = %cause, "Catalog lookup failed, keeping OCR result");
                CatalogMatch::failed(query, cause)
            }
        }
    }

    async fn fetch(&self, query: &str) -> Result<CatalogMatch> {
        let mut params: Vec<(&str, &str)> = vec![
            ("q", query),
            ("maxResults", "1"),
            ("printType", "books"),
            ("langRestrict", self.languages.as_str()),
        ];
        if let Some(ref key) = self.api_key {
            params.push(("key", key.as_str()));
        }

        let resp = self
            .client
            .get(self.base_url.clone())
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ShelfScanError::Internal(format!(
                "Catalog request failed: {status} - {body}"
            )));
        }

        let body: VolumesResponse = resp.json().await?;
        Ok(body.into_match(query))
    }
}
