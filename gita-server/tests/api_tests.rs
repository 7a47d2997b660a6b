//! Integration tests for the Gita Server API

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use gita_core::chat::{ChatReply, ChatRequest, ChatService};
use gita_core::content::bhagavad_gita;
use gita_core::ChatError;
use gita_server::routes::create_router;
use gita_server::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Create a test server over the built-in catalog
fn create_test_server() -> TestServer {
    let state = AppState::with_catalog(bhagavad_gita());
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// A service that never answers within the test timeout
struct StalledChat;

#[async_trait]
impl ChatService for StalledChat {
    async fn ask(&self, _request: &ChatRequest) -> Result<ChatReply, ChatError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Err(ChatError::Unavailable("stalled".to_string()))
    }
}

/// A service whose backend is down
struct OfflineChat;

#[async_trait]
impl ChatService for OfflineChat {
    async fn ask(&self, _request: &ChatRequest) -> Result<ChatReply, ChatError> {
        Err(ChatError::Unavailable("connection refused".to_string()))
    }
}

fn server_with_chat(chat: Arc<dyn ChatService>, timeout: Duration) -> TestServer {
    let state = AppState::with_catalog(bhagavad_gita()).with_chat_service(chat, timeout);
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

// ============================================================================
// Health and configuration
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_get_config_defaults_to_light_theme() {
    let server = create_test_server();

    let response = server.get("/api/v1/config").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["theme"], "light");
}

// ============================================================================
// Library
// ============================================================================

#[tokio::test]
async fn test_list_texts() {
    let server = create_test_server();

    let response = server.get("/api/v1/library").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["texts"].as_array().unwrap().len(), 3);
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 20);
    assert_eq!(body["texts"][0]["id"], "bhagavad-gita");
    assert_eq!(body["texts"][0]["read_location"], "/read/gita/1/1");
    assert!(body["texts"][1]["read_location"].is_null());
}

#[tokio::test]
async fn test_list_texts_with_pagination() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/library")
        .add_query_param("page", "2")
        .add_query_param("per_page", "2")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["page"], 2);
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["texts"].as_array().unwrap().len(), 1);
    assert_eq!(body["texts"][0]["id"], "yoga-sutras");
}

#[tokio::test]
async fn test_list_texts_page_zero_is_first_page() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/library")
        .add_query_param("page", "0")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["page"], 1);
    assert_eq!(body["texts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_texts_search_and_theme() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/library")
        .add_query_param("search", "KRISHNA")
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["texts"][0]["id"], "bhagavad-gita");

    let response = server
        .get("/api/v1/library")
        .add_query_param("theme", "brahman")
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["texts"][0]["id"], "upanishads");

    let response = server
        .get("/api/v1/library")
        .add_query_param("theme", "all")
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_get_text() {
    let server = create_test_server();

    let response = server.get("/api/v1/library/bhagavad-gita").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Bhagavad Gita");
    assert_eq!(body["chapters"], 18);
    assert_eq!(body["verses"], 700);
}

#[tokio::test]
async fn test_get_text_not_found() {
    let server = create_test_server();

    let response = server.get("/api/v1/library/nonexistent").await;

    response.assert_status_not_found();
}

// ============================================================================
// Reader
// ============================================================================

#[tokio::test]
async fn test_read_verse() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/gita/1/2").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["state"], "verse");
    assert_eq!(body["verse"], 2);
    assert_eq!(body["chapter"]["number"], 1);
    assert_eq!(body["chapter"]["title"], "Arjuna's Dilemma");
    assert_eq!(body["location"], "/read/gita/1/2");
    assert_eq!(body["previous"], "/read/gita/1/1");
    assert!(body["next"].is_null());
    assert_eq!(body["selected_commentary"], "yogananda");
    assert_eq!(body["ask_location"], "/chat?verse=1.2");
    assert_eq!(body["share_title"], "Bhagavad Gita 1.2");
}

#[tokio::test]
async fn test_read_chapter_opens_first_verse() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/gita/1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["verse"], 1);
    assert_eq!(body["location"], "/read/gita/1/1");
    assert!(body["previous"].is_null());
    assert_eq!(body["next"], "/read/gita/1/2");
}

#[tokio::test]
async fn test_read_verse_out_of_range() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/gita/1/99").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["state"], "not_found");
    assert_eq!(
        body["message"],
        "The requested chapter or verse is not available yet."
    );
    assert_eq!(body["requested"]["verse"], 99);
    assert_eq!(body["requested"]["reason"], "verse_out_of_range");
    assert_eq!(body["recovery_location"], "/read/gita/1/1");
}

#[tokio::test]
async fn test_read_unknown_chapter() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/gita/5/1").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["requested"]["reason"], "unknown_chapter");
}

#[tokio::test]
async fn test_read_negative_or_overflowing_numbers() {
    let server = create_test_server();

    for path in [
        "/api/v1/read/gita/1/-3",
        "/api/v1/read/gita/1/4294967296",
        "/api/v1/read/gita/99999999999/1",
    ] {
        let response = server.get(path).await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["state"], "not_found");
        assert_eq!(body["recovery_location"], "/read/gita/1/1");
    }
}

#[tokio::test]
async fn test_read_unknown_text() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/quran/1/1").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["requested"]["reason"], "unknown_text");
    assert_eq!(body["recovery_location"], "/read/gita/1/1");
}

#[tokio::test]
async fn test_read_with_commentary_selection() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/read/gita/1/1")
        .add_query_param("commentary", "easwaran")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["selected_commentary"], "easwaran");
    let tabs = body["commentaries"].as_array().unwrap();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[1]["source"], "easwaran");
    assert_eq!(tabs[1]["selected"], true);
}

#[tokio::test]
async fn test_read_with_unknown_commentary_keeps_default() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/read/gita/1/1")
        .add_query_param("commentary", "nobody")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["selected_commentary"], "yogananda");
}

#[tokio::test]
async fn test_chapter_index() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/gita").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["text_id"], "gita");
    assert_eq!(body["title"], "Bhagavad Gita");
    assert_eq!(body["chapters"][0]["number"], 1);
    assert_eq!(body["chapters"][0]["verse_count"], 2);
    assert_eq!(body["chapters"][0]["location"], "/read/gita/1/1");
}

#[tokio::test]
async fn test_chapter_index_unknown_text() {
    let server = create_test_server();

    let response = server.get("/api/v1/read/quran").await;

    response.assert_status_not_found();
}

// ============================================================================
// Locations
// ============================================================================

#[tokio::test]
async fn test_locate_reader_path() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/locate")
        .add_query_param("path", "/read/gita/1/2")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["page"], "read");
    assert_eq!(body["text_id"], "gita");
    assert_eq!(body["chapter"], "1");
    assert_eq!(body["verse"], "2");
}

#[tokio::test]
async fn test_locate_chat_with_seed() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/locate")
        .add_query_param("path", "/chat?verse=2.47")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["page"], "chat");
    assert_eq!(body["seed"], json!({ "chapter": 2, "verse": 47 }));
}

#[tokio::test]
async fn test_locate_relative_path_rejected() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/locate")
        .add_query_param("path", "read/gita")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_seed_with_verse() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/chat/seed")
        .add_query_param("verse", "1.2")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["prompt"],
        "Please explain verse 1.2 and its deeper meaning."
    );
    assert_eq!(body["quick_actions"].as_array().unwrap().len(), 4);
    assert_eq!(body["sample_questions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_chat_seed_without_verse() {
    let server = create_test_server();

    let response = server.get("/api/v1/chat/seed").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["prompt"].is_null());
    assert!(body["verse"].is_null());
}

#[tokio::test]
async fn test_chat_seed_malformed_verse() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/chat/seed")
        .add_query_param("verse", "one.two")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ask_question() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/chat")
        .json(&json!({ "question": "What is karma yoga?" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["role"], "assistant");
    assert!(body["content"].as_str().unwrap().contains("karma yoga"));
    assert!(body["id"].is_string());

    let citations = body["citations"].as_array().unwrap();
    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0]["verse"], "2.47");
    // The bundled catalog only holds chapter 1
    assert!(citations[0]["location"].is_null());
}

#[tokio::test]
async fn test_ask_empty_question() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/chat")
        .json(&json!({ "question": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ask_malformed_verse() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/chat")
        .json(&json!({ "question": "Explain", "verse": "1-2" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ask_times_out() {
    let server = server_with_chat(Arc::new(StalledChat), Duration::from_millis(20));

    let response = server
        .post("/api/v1/chat")
        .json(&json!({ "question": "Will you answer?" }))
        .await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_ask_service_unavailable() {
    let server = server_with_chat(Arc::new(OfflineChat), Duration::from_secs(1));

    let response = server
        .post("/api/v1/chat")
        .json(&json!({ "question": "Hello?" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}
