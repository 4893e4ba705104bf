//! Event handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{CreateEvent, EventResponse, UpdateEvent};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create event routes
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events/", get(list_events).post(create_event))
        .route(
            "/events/:id",
            get(get_event).patch(update_event).delete(delete_event),
        )
}

/// List all events
#[utoipa::path(
    get,
    path = "/events/",
    tag = "Events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of all events", body = Vec<EventResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_events(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EventResponse>>> {
    tracing::debug!(user = %current_user.subject, "Fetching all events");

    let events = state
        .event_service
        .get_all_events()
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch events: {}", e))?;

    tracing::info!("Retrieved {} events", events.len());
    Ok(Json(events))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<EventResponse>> {
    tracing::debug!(user = %current_user.subject, "Fetching event {}", id);

    let event = state
        .event_service
        .get_event(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch event {}: {}", id, e))?;

    tracing::info!("Retrieved event {}", id);
    Ok(Json(event))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/events/",
    tag = "Events",
    security(("bearer_auth" = [])),
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_event(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEvent>,
) -> AppResult<Created<EventResponse>> {
    tracing::debug!(user = %current_user.subject, "Creating new event");

    let event = state
        .event_service
        .create_event(payload)
        .await
        .inspect_err(|e| tracing::error!("Failed to create event: {}", e))?;

    tracing::info!("Created event {}", event.id);
    Ok(Created(event))
}

/// Partially update an event
#[utoipa::path(
    patch,
    path = "/events/{id}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 422, description = "Validation error or empty update")
    )
)]
pub async fn update_event(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEvent>,
) -> AppResult<Json<EventResponse>> {
    tracing::debug!(user = %current_user.subject, "Updating event {}", id);

    let event = state
        .event_service
        .update_event(id, payload)
        .await
        .inspect_err(|e| tracing::error!("Failed to update event {}: {}", id, e))?;

    tracing::info!("Updated event {}", id);
    Ok(Json(event))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<NoContent> {
    tracing::debug!(user = %current_user.subject, "Deleting event {}", id);

    state
        .event_service
        .delete_event(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to delete event {}: {}", id, e))?;

    tracing::info!("Deleted event {}", id);
    Ok(NoContent)
}
