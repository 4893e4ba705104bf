//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{event_handler, hero_handler};
use crate::domain::{CreateEvent, CreateHero, EventResponse, HeroResponse, UpdateEvent, UpdateHero};

/// OpenAPI documentation for the Hero API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hero API",
        version = "0.1.0",
        description = "CRUD service for heroes and events, protected by bearer JWTs"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Hero endpoints
        hero_handler::list_heroes,
        hero_handler::get_hero,
        hero_handler::create_hero,
        hero_handler::update_hero,
        hero_handler::delete_hero,
        // Event endpoints
        event_handler::list_events,
        event_handler::get_event,
        event_handler::create_event,
        event_handler::update_event,
        event_handler::delete_event,
    ),
    components(
        schemas(
            HeroResponse,
            CreateHero,
            UpdateHero,
            EventResponse,
            CreateEvent,
            UpdateEvent,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Heroes", description = "Hero management operations"),
        (name = "Events", description = "Event management operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("HMAC-signed JWT issued by the identity provider"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/heroes/"));
        assert!(paths.iter().any(|p| p.as_str() == "/heroes/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/events/"));
        assert!(paths.iter().any(|p| p.as_str() == "/events/{id}"));
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
