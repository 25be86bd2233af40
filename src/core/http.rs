//! HTTP utilities for upstream API communication

use crate::{config::ApiConfig, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

pub const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";
pub const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

/// Build the two static RapidAPI headers plus `Accept: application/json`.
pub fn rapidapi_header_map(config: &ApiConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        HeaderName::from_static(RAPIDAPI_HOST_HEADER),
        HeaderValue::from_str(&config.host)?,
    );
    let mut key = HeaderValue::from_str(&config.api_key)?;
    key.set_sensitive(true);
    h.insert(HeaderName::from_static(RAPIDAPI_KEY_HEADER), key);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_rapidapi_header_map_contains_both_headers() {
        let config = ApiConfig::new("secret");
        let headers = rapidapi_header_map(&config).unwrap();

        assert_eq!(
            headers.get(RAPIDAPI_HOST_HEADER).unwrap(),
            "sports-information.p.rapidapi.com"
        );
        assert_eq!(headers.get(RAPIDAPI_KEY_HEADER).unwrap(), "secret");
        assert!(headers.get(RAPIDAPI_KEY_HEADER).unwrap().is_sensitive());
        assert!(headers.contains_key(ACCEPT));
    }

    #[test]
    fn test_rapidapi_header_map_rejects_invalid_key() {
        let config = ApiConfig::new("bad\nkey");

        match rapidapi_header_map(&config) {
            Err(RosterError::InvalidHeader(_)) => (),
            other => panic!("Expected InvalidHeader error, got {other:?}"),
        }
    }
}
