//! Command implementations for the roster CLI

pub mod fetch;
pub mod load;
pub mod run;
pub mod serve;
pub mod transform;


use std::{path::PathBuf, time::Duration};

use crate::{
    cli::{ApiArgs, SnapshotArgs},
    config::{resolve_api_key, ApiConfig},
    core::SnapshotStore,
    storage::RosterDatabase,
    Result,
};

/// Build the upstream config from CLI arguments and the environment
pub fn resolve_api_config(args: &ApiArgs) -> Result<ApiConfig> {
    let key = resolve_api_key(args.api_key.clone())?;
    let mut config = ApiConfig::new(key)
        .with_host(args.host.clone())
        .with_team(args.team_id)
        .with_timeout(args.timeout_secs.map(Duration::from_secs));
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.clone());
    }
    Ok(config)
}

pub fn snapshot_store(args: &SnapshotArgs) -> SnapshotStore {
    SnapshotStore::new(args.data_dir.clone(), args.naming)
}

/// Open the database at `path`, or at the default location
pub fn open_database(path: Option<&PathBuf>) -> Result<RosterDatabase> {
    match path {
        Some(path) => RosterDatabase::open(path),
        None => RosterDatabase::new(),
    }
}
