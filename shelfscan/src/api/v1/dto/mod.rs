//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API, kept separate
//! from the pipeline types in `src/extraction/`.

pub mod catalog;
pub mod scan;

pub use catalog::*;
pub use scan::*;
