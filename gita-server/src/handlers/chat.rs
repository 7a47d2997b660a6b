//! Chat handlers

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use gita_core::chat::{
    ask_with_timeout, seed_prompt, ChatRequest, QuickAction, Role, QUICK_ACTIONS,
    SAMPLE_QUESTIONS,
};
use gita_core::{ChatError, VerseRef};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a chat question
#[derive(Debug, Deserialize)]
pub struct AskBody {
    pub question: String,

    /// Optional "chapter.verse" the question is about
    #[serde(default)]
    pub verse: Option<String>,
}

/// A cited verse, linked into the reader when the catalog holds it
#[derive(Debug, Serialize)]
pub struct CitationLink {
    pub verse: String,
    pub text: String,
    pub chapter: u32,
    pub verse_number: u32,
    pub location: Option<String>,
}

/// Assistant message returned for a question
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub citations: Vec<CitationLink>,
}

fn status_for(error: &ChatError) -> StatusCode {
    match error {
        ChatError::EmptyQuestion => StatusCode::BAD_REQUEST,
        ChatError::Busy => StatusCode::CONFLICT,
        ChatError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ChatError::Unavailable(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Ask a question
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskBody>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let question = body.question.trim();
    if question.is_empty() {
        let error = ChatError::EmptyQuestion;
        return Err((status_for(&error), error.to_string()));
    }

    let verse = body
        .verse
        .as_deref()
        .map(str::parse::<VerseRef>)
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let request = ChatRequest {
        question: question.to_string(),
        verse,
    };

    let reply = ask_with_timeout(state.chat.as_ref(), &request, state.chat_timeout)
        .await
        .map_err(|e| {
            tracing::error!("Chat exchange failed: {}", e);
            (status_for(&e), e.to_string())
        })?;

    let citations = reply
        .citations
        .into_iter()
        .map(|c| CitationLink {
            location: c.location(&state.catalog),
            verse: c.verse,
            text: c.text,
            chapter: c.chapter,
            verse_number: c.verse_number,
        })
        .collect();

    Ok(Json(AskResponse {
        id: Uuid::new_v4(),
        role: Role::Assistant,
        content: reply.content,
        timestamp: Utc::now(),
        citations,
    }))
}

/// Query parameters for opening the chat page
#[derive(Debug, Deserialize)]
pub struct SeedQuery {
    pub verse: Option<String>,
}

/// What the chat page shows before the first question
#[derive(Debug, Serialize)]
pub struct ChatIntro {
    pub verse: Option<VerseRef>,
    pub prompt: Option<String>,
    pub quick_actions: Vec<QuickAction>,
    pub sample_questions: Vec<&'static str>,
}

/// Seed prompt, quick actions and sample questions
pub async fn chat_seed(
    Query(query): Query<SeedQuery>,
) -> Result<Json<ChatIntro>, (StatusCode, String)> {
    let verse = query
        .verse
        .as_deref()
        .map(str::parse::<VerseRef>)
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(ChatIntro {
        verse,
        prompt: verse.map(seed_prompt),
        quick_actions: QUICK_ACTIONS.to_vec(),
        sample_questions: SAMPLE_QUESTIONS.to_vec(),
    }))
}
