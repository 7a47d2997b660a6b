//! Request handlers

mod chat;
mod library;
mod reader;

pub use chat::*;
pub use library::*;
pub use reader::*;

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use gita_core::{parse_location, Location, UiConfig};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// UI configuration handed to clients at start-up
pub async fn get_config(State(state): State<AppState>) -> Json<UiConfig> {
    Json(state.ui.clone())
}

/// Query parameters for resolving a location
#[derive(Debug, Deserialize)]
pub struct LocateQuery {
    pub path: String,
}

/// Parse an addressable location into its page and parameters
pub async fn locate(Query(query): Query<LocateQuery>) -> Result<Json<Location>, (StatusCode, String)> {
    parse_location(&query.path)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}
