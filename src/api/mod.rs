//! REST CRUD surface over the roster store
//!
//! - `GET|PUT|PATCH|DELETE /player/{id}`
//! - `GET|POST /players`

pub mod error;
pub mod handlers;


use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{routing::get, Router};
use tracing::info;

use crate::{storage::RosterDatabase, Result};

pub use error::ApiError;

/// The one connection, shared by every handler.
pub type SharedDb = Arc<Mutex<RosterDatabase>>;

pub fn router(db: RosterDatabase) -> Router {
    router_with_state(Arc::new(Mutex::new(db)))
}

pub fn router_with_state(db: SharedDb) -> Router {
    Router::new()
        .route(
            "/player/{id}",
            get(handlers::get_player)
                .put(handlers::put_player)
                .patch(handlers::patch_player)
                .delete(handlers::delete_player),
        )
        .route(
            "/players",
            get(handlers::list_players).post(handlers::post_players),
        )
        .with_state(db)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: SocketAddr, db: RosterDatabase) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Serving roster API");
    axum::serve(listener, router(db)).await?;
    Ok(())
}
