//! Error types for Gita Core

use crate::reader::UnresolvablePosition;
use thiserror::Error;

/// Result type alias using GitaError
pub type Result<T> = std::result::Result<T, GitaError>;

/// Top-level error type for all Gita operations
#[derive(Debug, Error)]
pub enum GitaError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building or loading a catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no chapters")]
    Empty,

    #[error("Text id must not be empty")]
    MissingTextId,

    #[error("Chapter numbers must be positive")]
    InvalidChapterNumber,

    #[error("Duplicate chapter: {0}")]
    DuplicateChapter(u32),

    #[error("Chapter {0} has no verses")]
    EmptyChapter(u32),

    #[error("Verse {chapter}.{verse} has no commentary")]
    MissingCommentary { chapter: u32, verse: u32 },

    #[error("Verse {chapter}.{verse} repeats commentary source '{source_key}'")]
    DuplicateCommentary {
        chapter: u32,
        verse: u32,
        source_key: String,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

/// Errors raised while parsing a location
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Location must start with '/': {0}")]
    NotAbsolute(String),

    #[error("Malformed verse reference: {0}")]
    MalformedVerseRef(String),
}

/// Failures of reading-position operations
///
/// Boundary navigation is not represented here: reaching either end of a
/// chapter is reported through [`crate::reader::Step`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Content not available: {0}")]
    Unresolvable(UnresolvablePosition),

    #[error("Verse {verse} is outside chapter {chapter} (1..={verse_count})")]
    OutOfRange {
        chapter: u32,
        verse: u32,
        verse_count: u32,
    },

    #[error("Unknown chapter: {0}")]
    UnknownChapter(u32),

    #[error("No commentary '{key}' for verse {chapter}.{verse}")]
    UnknownCommentary { key: String, chapter: u32, verse: u32 },

    #[error("No verse is currently displayed")]
    NoActivePosition,
}

/// Errors of the chat exchange
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Question must not be empty")]
    EmptyQuestion,

    #[error("A question is already awaiting an answer")]
    Busy,

    #[error("No answer within {0} ms")]
    Timeout(u64),

    #[error("Chat service unavailable: {0}")]
    Unavailable(String),
}

/// Errors in user-interface configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown theme '{0}' (expected light, dark or system)")]
    UnknownTheme(String),
}
