//! Question-and-answer exchange about the text
//!
//! The answer source sits behind the async [`ChatService`] trait. A
//! [`ChatSession`] tracks the visible conversation and the state of the one
//! exchange that may be in flight: a question is issued with
//! [`ChatSession::begin`], shown as pending, and settled with
//! [`ChatSession::resolve`].

use crate::error::ChatError;
use crate::route::{reader_location, VerseRef};
use crate::types::Catalog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// A question sent to the chat service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
    /// Verse the question is about, if any
    #[serde(default)]
    pub verse: Option<VerseRef>,
}

/// An answer with the verses it draws on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    pub citations: Vec<Citation>,
}

/// A verse cited by an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    /// "chapter.verse"
    pub verse: String,
    pub text: String,
    pub chapter: u32,
    pub verse_number: u32,
}

impl Citation {
    pub fn new(chapter: u32, verse_number: u32, text: impl Into<String>) -> Self {
        Self {
            verse: format!("{}.{}", chapter, verse_number),
            text: text.into(),
            chapter,
            verse_number,
        }
    }

    /// Reader location of the cited verse, when the catalog holds it
    pub fn location(&self, catalog: &Catalog) -> Option<String> {
        catalog
            .position(self.chapter, self.verse_number)
            .map(|p| reader_location(catalog.text_id(), p))
    }
}

/// Source of answers
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Answer one question
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// Placeholder service answering every question with the same text
pub struct CannedChatService {
    delay: Duration,
}

const CANNED_ANSWER: &str = "Thank you for your question about the Bhagavad Gita. Based on the sacred teachings, I can provide insight into your inquiry.

The concept you're asking about is deeply rooted in Krishna's teachings to Arjuna. The Gita emphasizes that true wisdom comes from understanding our eternal nature and acting without attachment to results.

As Krishna explains, when we act according to our dharma (righteous duty) without being attached to the fruits of our actions, we find peace and spiritual growth. This is the essence of karma yoga - the path of selfless action.

The key is to remain centered in the Self while engaging fully with the world. This balance between action and detachment is what leads to liberation.";

impl CannedChatService {
    /// Answer after the given simulated latency
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Answer immediately
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl ChatService for CannedChatService {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        if request.question.trim().is_empty() {
            return Err(ChatError::EmptyQuestion);
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(ChatReply {
            content: CANNED_ANSWER.to_string(),
            citations: vec![
                Citation::new(
                    2,
                    47,
                    "You have the right to perform your prescribed duty, but not to the fruits of action.",
                ),
                Citation::new(
                    3,
                    19,
                    "Therefore, always perform your duty efficiently and without attachment.",
                ),
            ],
        })
    }
}

/// Ask a service, failing with [`ChatError::Timeout`] if it takes too long
pub async fn ask_with_timeout(
    service: &dyn ChatService,
    request: &ChatRequest,
    timeout: Duration,
) -> Result<ChatReply, ChatError> {
    match tokio::time::timeout(timeout, service.ask(request)).await {
        Ok(result) => result,
        Err(_) => Err(ChatError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            citations,
        }
    }
}

/// State of the exchange currently in progress
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    /// A question was issued and has no answer yet
    Pending,
    /// The last question failed
    Failed(ChatError),
}

/// A shortcut that pre-fills the input
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub prompt: &'static str,
    pub description: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Explain verse",
        prompt: "/explain verse ",
        description: "Get detailed explanation of any verse",
    },
    QuickAction {
        label: "Compare commentaries",
        prompt: "/compare commentaries ",
        description: "Compare different interpretations",
    },
    QuickAction {
        label: "Summarize chapter",
        prompt: "/summarize chapter ",
        description: "Get chapter summaries",
    },
    QuickAction {
        label: "Define term",
        prompt: "/define ",
        description: "Understand Sanskrit terms",
    },
];

pub const SAMPLE_QUESTIONS: [&str; 5] = [
    "What does Krishna mean by 'dharma' in the Gita?",
    "How can I apply karma yoga in daily life?",
    "What is the significance of Arjuna's dilemma?",
    "Explain the concept of self-realization",
    "What are the different paths of yoga mentioned?",
];

/// Question pre-filled when the chat page is opened for a verse
pub fn seed_prompt(verse: VerseRef) -> String {
    format!("Please explain verse {} and its deeper meaning.", verse)
}

/// The visible conversation and its in-flight exchange
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft: String,
    state: ExchangeState,
    /// Verse the page was opened for; attached to every request
    seed: Option<VerseRef>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, pre-filling the input from a verse seed
    pub fn seeded(seed: Option<VerseRef>) -> Self {
        let mut session = Self::new();
        if let Some(verse) = seed {
            session.draft = seed_prompt(verse);
        }
        session.seed = seed;
        session
    }

    pub fn seed(&self) -> Option<VerseRef> {
        self.seed
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn apply_quick_action(&mut self, action: &QuickAction) {
        self.draft = action.prompt.to_string();
    }

    pub fn state(&self) -> &ExchangeState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ExchangeState::Pending
    }

    /// Record a question and mark the exchange pending
    pub fn begin(&mut self, question: &str) -> Result<ChatRequest, ChatError> {
        if self.is_pending() {
            return Err(ChatError::Busy);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        self.messages
            .push(ChatMessage::new(Role::User, question, Vec::new()));
        self.draft.clear();
        self.state = ExchangeState::Pending;

        Ok(ChatRequest {
            question: question.to_string(),
            verse: self.seed,
        })
    }

    /// Settle the pending exchange with an answer or a failure
    pub fn resolve(&mut self, outcome: Result<ChatReply, ChatError>) {
        match outcome {
            Ok(reply) => {
                self.messages.push(ChatMessage::new(
                    Role::Assistant,
                    reply.content,
                    reply.citations,
                ));
                self.state = ExchangeState::Idle;
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat exchange failed");
                self.state = ExchangeState::Failed(e);
            }
        }
    }

    /// Issue a question and wait for the answer
    pub async fn send(
        &mut self,
        service: &dyn ChatService,
        question: &str,
    ) -> Result<&ChatMessage, ChatError> {
        let request = self.begin(question)?;
        match service.ask(&request).await {
            Ok(reply) => {
                let answer = self.messages.len();
                self.resolve(Ok(reply));
                Ok(&self.messages[answer])
            }
            Err(e) => {
                self.resolve(Err(e.clone()));
                Err(e)
            }
        }
    }
}
