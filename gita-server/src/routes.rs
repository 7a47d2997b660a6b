//! API routes

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Localhost origins allowed when nothing is configured
const DEVELOPMENT_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", s);
                        None
                    }
                }),
        ),
        CorsOrigins::Development => AllowOrigin::list(
            DEVELOPMENT_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router with development CORS
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, &CorsOrigins::Development)
}

/// Create the application router
pub fn create_router_with_cors(state: AppState, origins: &CorsOrigins) -> Router {
    let api_routes = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/locate", get(handlers::locate))
        // Library endpoints
        .route("/library", get(handlers::list_texts))
        .route("/library/:id", get(handlers::get_text))
        // Reader endpoints
        .route("/read/:text_id", get(handlers::chapter_index))
        .route("/read/:text_id/:chapter", get(handlers::read_chapter))
        .route("/read/:text_id/:chapter/:verse", get(handlers::read_verse))
        // Chat endpoints
        .route("/chat", post(handlers::ask))
        .route("/chat/seed", get(handlers::chat_seed));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(origins)),
        )
        .with_state(state)
}
