use serde::{Deserialize, Serialize};

/// Placeholder author used when the catalog lists no contributors.
///
/// Turkish for "unknown author".
pub const UNKNOWN_AUTHOR: &str = "Bilinmeyen Yazar";

/// Normalized result of a single best-match catalog lookup.
///
/// `found == false` covers both "no results" and "lookup failed"; `error` is
/// only set in the latter case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogMatch {
    pub title: String,
    pub author: String,
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogMatch {
    pub fn found(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            found: true,
            error: None,
        }
    }

    /// No match: the query stands in for the title.
    pub fn not_found(query: &str) -> Self {
        Self {
            title: query.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            found: false,
            error: None,
        }
    }

    /// Lookup failed: same as [`CatalogMatch::not_found`] with the cause attached.
    pub fn failed(query: &str, cause: impl Into<String>) -> Self {
        Self {
            error: Some(cause.into()),
            ..Self::not_found(query)
        }
    }
}

/// Subset of the Google Books `volumes` response that is consumed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumesResponse {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

impl VolumesResponse {
    /// Map the raw response onto a [`CatalogMatch`] for `query`.
    pub(crate) fn into_match(self, query: &str) -> CatalogMatch {
        if self.total_items == 0 {
            return CatalogMatch::not_found(query);
        }

        let Some(first) = self.items.into_iter().next() else {
            return CatalogMatch::failed(
                query,
                format!(
                    "Catalog reported {} result(s) but returned no items",
                    self.total_items
                ),
            );
        };

        let info = first.volume_info;
        let title = info
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| query.to_string());

        let authors: Vec<&str> = info
            .authors
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .collect();
        let author = if authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            authors.join(", ")
        };

        CatalogMatch::found(title, author)
    }
}
