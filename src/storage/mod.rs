//! Storage layer for the roster
//!
//! A thin abstraction over one SQLite connection:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD and bulk-create operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::RosterDatabase;
