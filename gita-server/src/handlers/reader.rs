//! Reader handlers
//!
//! Each request builds a fresh controller over the shared catalog, resolves
//! the path parameters through it and returns the resulting view.

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gita_core::{reader_location, ReadRoute, ReaderView};
use serde::{Deserialize, Serialize};

/// Query parameters for reading a verse
#[derive(Debug, Default, Deserialize)]
pub struct ReadQuery {
    /// Commentary source to display
    pub commentary: Option<String>,
}

/// Read the first verse of a chapter
pub async fn read_chapter(
    State(state): State<AppState>,
    Path((text_id, chapter)): Path<(String, String)>,
    Query(query): Query<ReadQuery>,
) -> Response {
    render(&state, ReadRoute::new(text_id, Some(chapter.as_str()), None), query)
}

/// Read a single verse
pub async fn read_verse(
    State(state): State<AppState>,
    Path((text_id, chapter, verse)): Path<(String, String, String)>,
    Query(query): Query<ReadQuery>,
) -> Response {
    render(
        &state,
        ReadRoute::new(text_id, Some(chapter.as_str()), Some(verse.as_str())),
        query,
    )
}

fn render(state: &AppState, route: ReadRoute, query: ReadQuery) -> Response {
    let mut controller = state.controller(&route);

    if let Some(key) = query.commentary.as_deref() {
        // An unknown key keeps the default selection
        let _ = controller.select_commentary(key);
    }

    let view = ReaderView::of(&controller);
    let status = if view.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Json(view)).into_response()
}

/// A chapter entry of the index
#[derive(Debug, Serialize)]
pub struct ChapterEntry {
    pub number: u32,
    pub title: String,
    pub sanskrit_title: Option<String>,
    pub verse_count: u32,
    pub location: String,
}

/// Chapter index of a text
#[derive(Debug, Serialize)]
pub struct ChapterIndex {
    pub text_id: String,
    pub title: String,
    pub chapters: Vec<ChapterEntry>,
}

/// List the chapters of a text
pub async fn chapter_index(
    State(state): State<AppState>,
    Path(text_id): Path<String>,
) -> Result<Json<ChapterIndex>, StatusCode> {
    let catalog = &state.catalog;
    if text_id != catalog.text_id() {
        return Err(StatusCode::NOT_FOUND);
    }

    let chapters = catalog
        .chapters()
        .iter()
        .filter_map(|chapter| {
            let first = catalog.position(chapter.number, 1)?;
            Some(ChapterEntry {
                number: chapter.number,
                title: chapter.title.clone(),
                sanskrit_title: chapter.sanskrit_title.clone(),
                verse_count: chapter.verse_count(),
                location: reader_location(catalog.text_id(), first),
            })
        })
        .collect();

    Ok(Json(ChapterIndex {
        text_id,
        title: catalog.title().to_string(),
        chapters,
    }))
}
