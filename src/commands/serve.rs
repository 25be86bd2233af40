//! `serve`: the REST API over the database.

use std::net::SocketAddr;

use crate::{api, storage::RosterDatabase, Result};

pub async fn handle_serve(addr: SocketAddr, db: RosterDatabase) -> Result<()> {
    api::serve(addr, db).await
}
