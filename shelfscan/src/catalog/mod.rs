//! Bibliographic catalog lookup (Google Books `volumes` API).

mod client;
mod types;

pub use client::CatalogClient;
pub use types::{CatalogMatch, UNKNOWN_AUTHOR};
