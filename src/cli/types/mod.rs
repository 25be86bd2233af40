//! Type-safe wrappers for roster identifiers.

pub mod ids;

pub use ids::{PlayerId, TeamId};
