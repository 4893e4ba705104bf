//! Hero handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{CreateHero, HeroResponse, UpdateHero};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create hero routes
pub fn hero_routes() -> Router<AppState> {
    Router::new()
        .route("/heroes/", get(list_heroes).post(create_hero))
        .route(
            "/heroes/:id",
            get(get_hero).patch(update_hero).delete(delete_hero),
        )
}

/// List all heroes
#[utoipa::path(
    get,
    path = "/heroes/",
    tag = "Heroes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of all heroes", body = Vec<HeroResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_heroes(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HeroResponse>>> {
    tracing::debug!(user = %current_user.subject, "Fetching all heroes");

    let heroes = state
        .hero_service
        .get_all_heroes()
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch heroes: {}", e))?;

    tracing::info!("Retrieved {} heroes", heroes.len());
    Ok(Json(heroes))
}

/// Get hero by ID
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = "Heroes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Hero found", body = HeroResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn get_hero(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<HeroResponse>> {
    tracing::debug!(user = %current_user.subject, "Fetching hero {}", id);

    let hero = state
        .hero_service
        .get_hero(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch hero {}: {}", id, e))?;

    tracing::info!("Retrieved hero {}", id);
    Ok(Json(hero))
}

/// Create a new hero
#[utoipa::path(
    post,
    path = "/heroes/",
    tag = "Heroes",
    security(("bearer_auth" = [])),
    request_body = CreateHero,
    responses(
        (status = 201, description = "Hero created", body = HeroResponse),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Alias already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_hero(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateHero>,
) -> AppResult<Created<HeroResponse>> {
    tracing::debug!(user = %current_user.subject, "Creating new hero");

    let hero = state
        .hero_service
        .create_hero(payload)
        .await
        .inspect_err(|e| tracing::error!("Failed to create hero: {}", e))?;

    tracing::info!("Created hero {}", hero.id);
    Ok(Created(hero))
}

/// Partially update a hero
#[utoipa::path(
    patch,
    path = "/heroes/{id}",
    tag = "Heroes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    request_body = UpdateHero,
    responses(
        (status = 200, description = "Hero updated", body = HeroResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Hero not found"),
        (status = 409, description = "Alias already taken"),
        (status = 422, description = "Validation error or empty update")
    )
)]
pub async fn update_hero(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateHero>,
) -> AppResult<Json<HeroResponse>> {
    tracing::debug!(user = %current_user.subject, "Updating hero {}", id);

    let hero = state
        .hero_service
        .update_hero(id, payload)
        .await
        .inspect_err(|e| tracing::error!("Failed to update hero {}: {}", id, e))?;

    tracing::info!("Updated hero {}", id);
    Ok(Json(hero))
}

/// Delete a hero
#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    tag = "Heroes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 204, description = "Hero deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn delete_hero(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<NoContent> {
    tracing::debug!(user = %current_user.subject, "Deleting hero {}", id);

    state
        .hero_service
        .delete_hero(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to delete hero {}: {}", id, e))?;

    tracing::info!("Deleted hero {}", id);
    Ok(NoContent)
}
