//! Core utilities shared by the pipeline stages
//!
//! - `http`: upstream request headers
//! - `snapshot`: JSON snapshot files written between stages

pub mod http;
pub mod snapshot;

// Re-export commonly used items for convenience
pub use http::rapidapi_header_map;
pub use snapshot::{write_string, SnapshotStore};
