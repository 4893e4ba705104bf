//! End-to-end API tests.
//!
//! Drives the full router over a migrated in-memory store with real JWT
//! verification.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use hero_api::api::{create_router, AppState};

async fn app() -> Router {
    let config = common::test_config();
    let database = common::setup_database().await;
    create_router(AppState::from_config(database, &config))
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_hero_lifecycle() {
    let app = app().await;
    let auth = common::bearer();
    let auth = Some(auth.as_str());

    let (status, created) = send(
        &app,
        request(
            Method::POST,
            "/heroes/",
            auth,
            Some(json!({"name": "Clark Kent", "alias": "Superman", "powers": "flight"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["alias"], "Superman");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, request(Method::GET, &format!("/heroes/{}", id), auth, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, conflict) = send(
        &app,
        request(
            Method::POST,
            "/heroes/",
            auth,
            Some(json!({"name": "Kal-El", "alias": "Superman"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict["error"]["code"], "ALREADY_EXISTS");

    let (status, updated) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/heroes/{}", id),
            auth,
            Some(json!({"alias": "Man of Steel"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["alias"], "Man of Steel");
    assert_eq!(updated["name"], "Clark Kent");
    assert_eq!(updated["powers"], "flight");

    let (status, list) = send(&app, request(Method::GET, "/heroes/", auth, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([updated]));

    let (status, body) = send(&app, request(Method::DELETE, &format!("/heroes/{}", id), auth, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, missing) = send(&app, request(Method::GET, &format!("/heroes/{}", id), auth, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_hero_validation_and_empty_patch() {
    let app = app().await;
    let auth = common::bearer();
    let auth = Some(auth.as_str());

    let (status, body) = send(
        &app,
        request(Method::POST, "/heroes/", auth, Some(json!({"name": "", "alias": "Nobody"}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");

    let (status, created) = send(
        &app,
        request(Method::POST, "/heroes/", auth, Some(json!({"name": "Barry Allen", "alias": "Flash"}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["powers"], Value::Null);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        request(Method::PATCH, &format!("/heroes/{}", id), auth, Some(json!({}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "No fields to update");

    let (status, _) = send(
        &app,
        request(Method::PATCH, "/heroes/999", auth, Some(json!({"name": "Ghost"}))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_lifecycle() {
    let app = app().await;
    let auth = common::bearer();
    let auth = Some(auth.as_str());
    let payload = json!({"stage": 1, "crew": ["a", "b"]});

    let (status, created) = send(
        &app,
        request(
            Method::POST,
            "/events/",
            auth,
            Some(json!({"name": "launch", "value": payload})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["value"], payload);
    assert_eq!(created["createdAt"], Value::Null);
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/events/{}", id),
            auth,
            Some(json!({"createdAt": "2024-01-01T00:00:00Z"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], payload);
    assert_eq!(updated["createdAt"], "2024-01-01T00:00:00Z");

    let (status, fetched) = send(&app, request(Method::GET, &format!("/events/{}", id), auth, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);

    let (status, _) = send(&app, request(Method::DELETE, &format!("/events/{}", id), auth, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, list) = send(&app, request(Method::GET, "/events/", auth, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_event_value_defaults_and_must_be_object() {
    let app = app().await;
    let auth = common::bearer();
    let auth = Some(auth.as_str());

    let (status, created) = send(
        &app,
        request(Method::POST, "/events/", auth, Some(json!({"name": "bare"}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["value"], json!({}));

    let (status, body) = send(
        &app,
        request(Method::POST, "/events/", auth, Some(json!({"name": "list", "value": [1, 2]}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_resource_routes_require_valid_token() {
    let app = app().await;
    let expired = format!("Bearer {}", common::mint_token(common::TEST_SECRET, -3600));
    let forged = format!(
        "Bearer {}",
        common::mint_token("some-other-secret-that-is-long-enough!!", 3600)
    );

    for auth in [None, Some("Bearer not-a-jwt"), Some(expired.as_str()), Some(forged.as_str())] {
        for (method, uri) in [
            (Method::GET, "/heroes/"),
            (Method::GET, "/heroes/1"),
            (Method::DELETE, "/events/1"),
            (Method::GET, "/events/"),
        ] {
            let (status, body) = send(&app, request(method, uri, auth, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} with {:?}", uri, auth);
            assert!(body["error"]["code"].is_string());
        }
    }

    // Rejected before the body is looked at
    let (status, _) = send(
        &app,
        request(Method::POST, "/heroes/", None, Some(json!({"name": ""}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_endpoints() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to Hero API");

    let (status, health) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["services"]["database"]["status"], "healthy");

    let (status, doc) = send(&app, request(Method::GET, "/api-docs/openapi.json", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/heroes/{id}"].is_object());
}

#[tokio::test]
async fn test_malformed_id_keeps_error_envelope() {
    let app = app().await;
    let auth = common::bearer();
    let auth = Some(auth.as_str());

    for (method, uri) in [
        (Method::GET, "/heroes/abc"),
        (Method::GET, "/heroes/99999999999"),
        (Method::DELETE, "/events/abc"),
    ] {
        let response = app
            .clone()
            .oneshot(request(method, uri, auth, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{}",
            uri
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT", "{}", uri);
    }

    let (status, body) = send(
        &app,
        request(Method::PATCH, "/events/x1", auth, Some(json!({"name": "renamed"}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let app = app().await;
    let token = common::mint_token(common::TEST_SECRET, 3600);

    for scheme in ["bearer", "BEARER", "Bearer"] {
        let auth = format!("{} {}", scheme, token);
        let (status, body) = send(&app, request(Method::GET, "/heroes/", Some(&auth), None)).await;

        assert_eq!(status, StatusCode::OK, "scheme {}", scheme);
        assert_eq!(body, json!([]));
    }
}
