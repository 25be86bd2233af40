use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{config::ApiConfig, core::rapidapi_header_map, error::RosterError, Result};

#[cfg(test)]
mod tests;

/// Build the client used for the upstream call.
pub fn build_client(config: &ApiConfig) -> Result<Client> {
    let mut builder =
        Client::builder().user_agent(concat!("nhl-roster/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// GET the team roster once. Non-2xx and transport failures are network
/// errors; a body that is not JSON, or is an empty document, is rejected.
pub async fn fetch_team_players(client: &Client, config: &ApiConfig) -> Result<Value> {
    let url = config.endpoint_url();
    let headers = rapidapi_header_map(config)?;
    debug!(%url, "Requesting team roster");

    let res = client.get(&url).headers(headers).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(RosterError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let body = res.text().await?;
    if body.trim().is_empty() {
        return Err(RosterError::EmptyResponse);
    }

    let v: Value = serde_json::from_str(&body).map_err(RosterError::MalformedResponse)?;
    let empty = match &v {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return Err(RosterError::EmptyResponse);
    }

    Ok(v)
}
