//! Unit tests for the upstream HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::cli::types::TeamId;

#[cfg(test)]
mod http_tests {
    use super::*;

    fn config_for(server: &MockServer) -> ApiConfig {
        ApiConfig::new("test-key").with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_fetch_team_players_success() {
        let mock_server = MockServer::start().await;

        let mock_response = json!({
            "team": {
                "athletes": [
                    {
                        "fullName": "Test Player",
                        "age": 24,
                        "height": 73,
                        "weight": 190,
                        "position": {"displayName": "Center"},
                        "jersey": "91"
                    }
                ]
            }
        });

        Mock::given(method("GET"))
            .and(path("/nhl/team-players/21/"))
            .and(header("x-rapidapi-host", "sports-information.p.rapidapi.com"))
            .and(header("x-rapidapi-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server);
        let client = build_client(&config).unwrap();
        let result = fetch_team_players(&client, &config).await.unwrap();

        assert_eq!(result, mock_response);
    }

    #[tokio::test]
    async fn test_fetch_team_players_uses_configured_team() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nhl/team-players/10/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"team": {"athletes": []}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server).with_team(TeamId::new(10));
        let client = build_client(&config).unwrap();

        assert!(fetch_team_players(&client, &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_team_players_non_2xx_is_network_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server);
        let client = build_client(&config).unwrap();
        let err = fetch_team_players(&client, &config).await.unwrap_err();

        assert!(err.is_network());
        match err {
            RosterError::Status { status, reason } => {
                assert_eq!(status, 403);
                assert_eq!(reason, "Forbidden");
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_team_players_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server);
        let client = build_client(&config).unwrap();

        assert!(matches!(
            fetch_team_players(&client, &config).await,
            Err(RosterError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_team_players_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server);
        let client = build_client(&config).unwrap();

        assert!(matches!(
            fetch_team_players(&client, &config).await,
            Err(RosterError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_fetch_team_players_connection_refused() {
        // Nothing listens on port 9 locally.
        let config = ApiConfig::new("test-key").with_base_url("http://127.0.0.1:9");
        let client = build_client(&config).unwrap();

        let err = fetch_team_players(&client, &config).await.unwrap_err();
        assert!(matches!(err, RosterError::Network(_)));
    }
}
