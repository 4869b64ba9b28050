//! Title/author extraction from cover photos.

pub mod heuristics;
mod pipeline;

pub use heuristics::{extract_candidates, parse_book_info, CandidateFields, RecognizedText};
pub use pipeline::{BookScanner, ResolvedScan, ScanResult};
