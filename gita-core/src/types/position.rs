//! A validated (chapter, verse) pointer

use serde::Serialize;
use std::fmt;

/// A (chapter, verse) pair known to exist in the catalog it came from
///
/// Positions are only handed out by [`super::Catalog::position`] and the
/// reader controller, so holding one means the lookup already succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReadingPosition {
    chapter: u32,
    verse: u32,
}

impl ReadingPosition {
    pub(crate) fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// Chapter number
    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// Verse number within the chapter (1-indexed)
    pub fn verse(&self) -> u32 {
        self.verse
    }
}

impl fmt::Display for ReadingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.verse)
    }
}
