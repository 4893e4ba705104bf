//! Event repository tests against a migrated in-memory store.

mod common;

use chrono::{TimeZone, Utc};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;

use hero_api::domain::{CreateEvent, UpdateEvent};
use hero_api::errors::AppError;
use hero_api::infra::{EventRepository, EventStore};

fn new_event(name: &str, value: serde_json::Value) -> CreateEvent {
    CreateEvent {
        name: name.to_string(),
        value,
        created_at: None,
    }
}

#[tokio::test]
async fn test_create_then_get_round_trips_payload() {
    let store = EventStore::new(common::setup_db().await);
    let payload = json!({"stage": 1, "tags": ["a", "b"], "nested": {"ok": true}});

    let created = store.create(new_event("launch", payload.clone())).await.unwrap();
    assert_eq!(created.value, payload);
    assert_eq!(created.created_at, None);

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_explicit_created_at_is_stored() {
    let store = EventStore::new(common::setup_db().await);
    let at = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();

    let created = store
        .create(CreateEvent {
            created_at: Some(at),
            ..new_event("dated", json!({}))
        })
        .await
        .unwrap();

    assert_eq!(store.get_by_id(created.id).await.unwrap().created_at, Some(at));
}

#[tokio::test]
async fn test_null_payload_reads_back_as_empty_object() {
    let db = common::setup_db().await;
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "INSERT INTO events (name, value) VALUES ('legacy', NULL)".to_string(),
    ))
    .await
    .unwrap();
    let store = EventStore::new(db);

    let events = store.get_all().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "legacy");
    assert_eq!(events[0].value, json!({}));
}

#[tokio::test]
async fn test_update_value_replaces_whole_payload() {
    let store = EventStore::new(common::setup_db().await);
    let event = store
        .create(new_event("launch", json!({"stage": 1, "crew": 3})))
        .await
        .unwrap();

    let updated = store
        .update(
            event.id,
            UpdateEvent {
                value: Some(json!({"stage": 2})),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "launch");
    assert_eq!(updated.value, json!({"stage": 2}));
}

#[tokio::test]
async fn test_update_can_set_and_clear_created_at() {
    let store = EventStore::new(common::setup_db().await);
    let event = store.create(new_event("launch", json!({}))).await.unwrap();
    let at = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();

    let stamped = store
        .update(
            event.id,
            UpdateEvent {
                created_at: Some(Some(at)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(stamped.created_at, Some(at));

    let cleared = store
        .update(
            event.id,
            UpdateEvent {
                created_at: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.created_at, None);
}

#[tokio::test]
async fn test_empty_update_is_rejected() {
    let store = EventStore::new(common::setup_db().await);
    let event = store.create(new_event("launch", json!({"a": 1}))).await.unwrap();

    let err = store.update(event.id, UpdateEvent::default()).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidArgument(_)));
    assert_eq!(store.get_by_id(event.id).await.unwrap(), event);
}

#[tokio::test]
async fn test_missing_event_is_not_found() {
    let store = EventStore::new(common::setup_db().await);

    assert!(matches!(
        store.get_by_id(5).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        store
            .update(
                5,
                UpdateEvent {
                    name: Some("ghost".to_string()),
                    ..Default::default()
                }
            )
            .await
            .unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        store.delete(5).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_delete_removes_event() {
    let store = EventStore::new(common::setup_db().await);
    let keep = store.create(new_event("keep", json!({}))).await.unwrap();
    let drop = store.create(new_event("drop", json!({}))).await.unwrap();

    store.delete(drop.id).await.unwrap();

    let remaining = store.get_all().await.unwrap();
    assert_eq!(remaining, vec![keep]);
}
