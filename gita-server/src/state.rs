//! Application state

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use gita_core::chat::{CannedChatService, ChatService};
use gita_core::content::bhagavad_gita;
use gita_core::library::Library;
use gita_core::{Catalog, ReadRoute, ReaderController, UiConfig};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only content served by the reader endpoints
    pub catalog: Arc<Catalog>,

    /// Texts listed in the library
    pub library: Arc<Library>,

    /// Answer source for the chat endpoint
    pub chat: Arc<dyn ChatService>,

    /// Upper bound on one chat exchange
    pub chat_timeout: Duration,

    /// UI preferences handed to clients at start-up
    pub ui: UiConfig,
}

impl AppState {
    /// Create application state from configuration
    pub async fn new(config: &ServerConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read catalog {}", path.display()))?;
                let catalog = Catalog::from_json(&json)
                    .with_context(|| format!("Invalid catalog {}", path.display()))?;
                tracing::info!(
                    "Loaded catalog '{}' with {} verses from {}",
                    catalog.title(),
                    catalog.total_verses(),
                    path.display()
                );
                catalog
            }
            None => bhagavad_gita(),
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            library: Arc::new(Library::builtin()),
            chat: Arc::new(CannedChatService::new(config.chat_delay)),
            chat_timeout: config.chat_timeout,
            ui: config.ui.clone(),
        })
    }

    /// State over a given catalog with an immediate chat service
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            library: Arc::new(Library::builtin()),
            chat: Arc::new(CannedChatService::instant()),
            chat_timeout: ServerConfig::default().chat_timeout,
            ui: UiConfig::default(),
        }
    }

    /// Replace the chat service
    pub fn with_chat_service(mut self, chat: Arc<dyn ChatService>, timeout: Duration) -> Self {
        self.chat = chat;
        self.chat_timeout = timeout;
        self
    }

    /// A reader controller for one request
    pub fn controller(&self, route: &ReadRoute) -> ReaderController {
        ReaderController::from_route(self.catalog.clone(), route)
    }
}
