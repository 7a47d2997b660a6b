//! Chapter type representing a numbered sequence of verses

use super::Verse;
use serde::{Deserialize, Serialize};

/// A single chapter of the text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Chapter number (positive)
    pub number: u32,

    /// Chapter title
    pub title: String,

    /// Title in the original script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanskrit_title: Option<String>,

    /// Verses in canonical order; verse N is `verses[N - 1]`
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Create a new chapter with a number and title
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            sanskrit_title: None,
            verses: Vec::new(),
        }
    }

    /// Set the original-script title
    pub fn with_sanskrit_title(mut self, title: impl Into<String>) -> Self {
        self.sanskrit_title = Some(title.into());
        self
    }

    /// Replace the verses
    pub fn with_verses(mut self, verses: Vec<Verse>) -> Self {
        self.verses = verses;
        self
    }

    /// Add a single verse at the end
    pub fn add_verse(&mut self, verse: Verse) {
        self.verses.push(verse);
    }

    /// Number of verses
    pub fn verse_count(&self) -> u32 {
        self.verses.len() as u32
    }

    /// Get a verse by its 1-indexed number
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        let index = (number as usize).checked_sub(1)?;
        self.verses.get(index)
    }
}
