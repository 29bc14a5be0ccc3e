use std::sync::Arc;

use axum::Router;
use storage::EntityStore;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod openapi;
pub mod routes;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn EntityStore>;

/// Build the application router on top of the given store.
pub fn app(store: SharedStore) -> Router {
    let cors = CorsLayer::permissive().max_age(std::time::Duration::from_secs(3600));

    let swagger =
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi());

    Router::new()
        .merge(swagger)
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(store)
}
