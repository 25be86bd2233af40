//! Upstream NHL roster API: wire types, fetching and reshaping.

pub mod http;
pub mod transform;
pub mod types;

pub use http::fetch_team_players;
pub use transform::{convert_height, transform, TransformOutcome};
pub use types::{PlayerRecord, RawAthlete, RawPosition};
