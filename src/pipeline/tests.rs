//! Unit tests for the pipeline orchestrator

use super::*;
use crate::{cli::types::PlayerId, config::SnapshotNaming, core::snapshot::read_snapshot};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn sample_payload() -> Value {
    json!({"team": {"athletes": [{
        "fullName": "A",
        "age": 20,
        "height": 73,
        "weight": 180,
        "position": {"displayName": "C"},
        "jersey": "9"
    }]}})
}

fn pipeline(snapshots: Option<SnapshotStore>) -> Pipeline {
    Pipeline::new(ApiConfig::new("test-key"), snapshots)
}

#[test]
fn test_run_from_raw_end_to_end() {
    let mut db = RosterDatabase::new_in_memory().unwrap();

    let report = pipeline(None)
        .run_from_raw(&sample_payload(), &mut db)
        .unwrap();

    assert_eq!(report.stage(), PipelineStage::Done);
    assert_eq!(
        report.stages,
        vec![
            PipelineStage::Start,
            PipelineStage::Fetched,
            PipelineStage::Transformed,
            PipelineStage::Loaded,
            PipelineStage::Done
        ]
    );
    assert!(report.errors.is_empty());

    let stored = db.get(PlayerId::new(1)).unwrap();
    assert_eq!(stored.full_name, "A");
    assert_eq!(stored.age, 20);
    assert_eq!(stored.height, "6' 1\"");
    assert_eq!(stored.weight, 180);
    assert_eq!(stored.position, "C");
    assert_eq!(stored.jersey_number, "9");
}

#[test]
fn test_missing_athletes_aborts_and_leaves_store_unchanged() {
    let mut db = RosterDatabase::new_in_memory().unwrap();

    let result = pipeline(None).run_from_raw(&json!({"team": {}}), &mut db);

    assert!(matches!(result, Err(RosterError::MalformedData { .. })));
    assert_eq!(db.count().unwrap(), 0);
}

#[test]
fn test_partial_load_failure_still_completes() {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    // Second athlete has no weight, so its record cannot be stored
    let raw = json!({"team": {"athletes": [
        {"fullName": "A", "age": 20, "height": 73, "weight": 180,
         "position": {"displayName": "C"}, "jersey": "9"},
        {"fullName": "B", "age": 21, "height": 70,
         "position": {"displayName": "D"}, "jersey": "2"}
    ]}});

    let report = pipeline(None).run_from_raw(&raw, &mut db).unwrap();

    assert_eq!(report.stage(), PipelineStage::Done);
    assert_eq!(report.inserted.len(), 1);
    assert_eq!(
        report.errors,
        vec!["Missing required fields in player at index 1"]
    );
}

#[test]
fn test_skipped_athletes_are_reported() {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    let mut raw = sample_payload();
    raw["team"]["athletes"]
        .as_array_mut()
        .unwrap()
        .push(json!({"fullName": "Bad", "position": "C"}));

    let report = pipeline(None).run_from_raw(&raw, &mut db).unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.inserted.len(), 1);
}

#[test]
fn test_nothing_loaded_aborts() {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    db.create(
        PlayerId::new(1),
        &crate::storage::PlayerFields {
            full_name: Some("Existing".to_string()),
            age: Some(30),
            height: Some("6' 0\"".to_string()),
            weight: Some(200),
            position: Some("D".to_string()),
            jersey_number: Some("4".to_string()),
        },
    )
    .unwrap();

    let result = pipeline(None).run_from_raw(&sample_payload(), &mut db);

    match result {
        Err(RosterError::NothingLoaded { errors }) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("already exists"));
        }
        other => panic!("Expected NothingLoaded, got {other:?}"),
    }
    assert_eq!(db.get(PlayerId::new(1)).unwrap().full_name, "Existing");
}

#[test]
fn test_empty_roster_aborts() {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    let result = pipeline(None).run_from_raw(&json!({"team": {"athletes": []}}), &mut db);
    assert!(matches!(result, Err(RosterError::NothingLoaded { .. })));
}

#[test]
fn test_load_returns_report_on_success() {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    let entries = vec![json!({
        "full_name": "A", "age": 20, "height": "6' 1\"",
        "weight": 180, "position": "C", "jersey_number": "9"
    })];

    let report = load(&mut db, &entries).unwrap();
    assert_eq!(report.inserted.len(), 1);
}

#[test]
fn test_run_from_raw_writes_processed_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path(), SnapshotNaming::Fixed);
    let mut db = RosterDatabase::new_in_memory().unwrap();

    let report = pipeline(Some(store))
        .run_from_raw(&sample_payload(), &mut db)
        .unwrap();

    let processed = report.processed_snapshot.unwrap();
    assert_eq!(processed, dir.path().join("processed_players.json"));
    assert_eq!(
        read_snapshot(&processed).unwrap(),
        json!([{
            "full_name": "A",
            "age": 20,
            "height": "6' 1\"",
            "weight": 180,
            "position": "C",
            "jersey_number": "9"
        }])
    );
}

#[tokio::test]
async fn test_run_fetches_and_writes_both_snapshots() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nhl/team-players/21/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = ApiConfig::new("test-key").with_base_url(mock_server.uri());
    let client = crate::nhl::http::build_client(&config).unwrap();
    let pipeline = Pipeline::new(
        config,
        Some(SnapshotStore::new(dir.path(), SnapshotNaming::Fixed)),
    );
    let mut db = RosterDatabase::new_in_memory().unwrap();

    let report = pipeline.run(&client, &mut db).await.unwrap();

    assert_eq!(report.stage(), PipelineStage::Done);
    let raw = report.raw_snapshot.unwrap();
    assert_eq!(read_snapshot(&raw).unwrap(), sample_payload());
    assert!(report.processed_snapshot.unwrap().exists());
    assert_eq!(db.count().unwrap(), 1);
}

#[tokio::test]
async fn test_run_fetch_failure_aborts_before_snapshots() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path(), SnapshotNaming::Fixed);
    let raw_path = store.raw_path();
    let config = ApiConfig::new("test-key").with_base_url(mock_server.uri());
    let client = crate::nhl::http::build_client(&config).unwrap();
    let mut db = RosterDatabase::new_in_memory().unwrap();

    let err = Pipeline::new(config, Some(store))
        .run(&client, &mut db)
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert!(!raw_path.exists());
    assert_eq!(db.count().unwrap(), 0);
}

fn db_with_existing_player() -> RosterDatabase {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    db.create(
        PlayerId::new(7),
        &crate::storage::PlayerFields {
            full_name: Some("Existing".to_string()),
            age: Some(30),
            height: Some("6' 0\"".to_string()),
            weight: Some(200),
            position: Some("D".to_string()),
            jersey_number: Some("4".to_string()),
        },
    )
    .unwrap();
    db
}

#[test]
fn test_clear_db_replaces_players_on_success() {
    let mut db = db_with_existing_player();

    let report = pipeline(None)
        .with_clear_db(true)
        .run_from_raw(&sample_payload(), &mut db)
        .unwrap();

    assert_eq!(report.inserted.len(), 1);
    assert_eq!(db.count().unwrap(), 1);
    assert!(db.get(PlayerId::new(7)).is_err());
}

#[test]
fn test_clear_db_keeps_players_when_transform_aborts() {
    let mut db = db_with_existing_player();

    let result = pipeline(None)
        .with_clear_db(true)
        .run_from_raw(&json!({"team": {}}), &mut db);

    assert!(matches!(result, Err(RosterError::MalformedData { .. })));
    assert_eq!(db.get(PlayerId::new(7)).unwrap().full_name, "Existing");
}

#[test]
fn test_clear_db_keeps_players_when_nothing_loads() {
    let mut db = db_with_existing_player();
    let raw = json!({"team": {"athletes": [{"fullName": "No Stats"}]}});

    let result = pipeline(None).with_clear_db(true).run_from_raw(&raw, &mut db);

    assert!(matches!(result, Err(RosterError::NothingLoaded { .. })));
    assert_eq!(db.count().unwrap(), 1);
}

#[tokio::test]
async fn test_clear_db_keeps_players_when_fetch_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = ApiConfig::new("test-key").with_base_url(mock_server.uri());
    let client = crate::nhl::http::build_client(&config).unwrap();
    let mut db = db_with_existing_player();

    let result = Pipeline::new(config, None)
        .with_clear_db(true)
        .run(&client, &mut db)
        .await;

    assert!(result.is_err());
    assert_eq!(db.count().unwrap(), 1);
}

#[test]
fn test_stage_display() {
    assert_eq!(PipelineStage::Transformed.to_string(), "TRANSFORMED");
    assert_eq!(PipelineStage::Aborted.to_string(), "ABORTED");
}
