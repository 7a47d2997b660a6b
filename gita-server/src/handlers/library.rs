//! Library listing handlers

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use gita_core::library::TextEntry;
use serde::{Deserialize, Serialize};

/// Query parameters for listing texts
#[derive(Debug, Deserialize)]
pub struct ListTextsQuery {
    /// Page number (1-indexed, 0 treated as 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Search query over title, description and themes
    pub search: Option<String>,

    /// Theme filter ("all" for no filter)
    pub theme: Option<String>,
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    20
}

/// Sanitize page number (treat 0 as 1 to prevent underflow)
fn sanitize_page(page: u32) -> u32 {
    page.max(1)
}

/// Text summary for list response
#[derive(Debug, Serialize)]
pub struct TextSummary {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub chapters: u32,
    pub verses: u32,
    pub featured: bool,
    pub available: bool,
    pub read_location: Option<String>,
}

impl From<&TextEntry> for TextSummary {
    fn from(entry: &TextEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            subtitle: entry.subtitle.clone(),
            chapters: entry.chapters,
            verses: entry.verses,
            featured: entry.featured,
            available: entry.available,
            read_location: entry.read_location.clone(),
        }
    }
}

/// List response with pagination
#[derive(Debug, Serialize)]
pub struct ListTextsResponse {
    pub texts: Vec<TextSummary>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

/// List texts in the library
pub async fn list_texts(
    State(state): State<AppState>,
    Query(query): Query<ListTextsQuery>,
) -> Json<ListTextsResponse> {
    let texts: Vec<TextSummary> = state
        .library
        .filter(query.search.as_deref(), query.theme.as_deref())
        .map(TextSummary::from)
        .collect();

    let total = texts.len() as u32;

    // Paginate (sanitize page to prevent underflow)
    let page = sanitize_page(query.page);
    let start = (page - 1).saturating_mul(query.per_page) as usize;
    let texts: Vec<TextSummary> = texts
        .into_iter()
        .skip(start)
        .take(query.per_page as usize)
        .collect();

    Json(ListTextsResponse {
        texts,
        total,
        page,
        per_page: query.per_page,
    })
}

/// Get a single text's full library entry
pub async fn get_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TextEntry>, StatusCode> {
    state
        .library
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
