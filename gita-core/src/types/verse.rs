//! Verse type holding source text and commentaries

use serde::{Deserialize, Serialize};

/// A single verse of a chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verse {
    /// Original-script text
    pub sanskrit: String,

    /// Romanized transliteration
    pub transliteration: String,

    /// English translation
    pub translation: String,

    /// Commentaries in display order, keyed by source
    pub commentary: Vec<Commentary>,
}

/// One commentator's text for a verse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commentary {
    /// Commentary-source-key (e.g. "yogananda")
    pub source: String,

    /// Commentary text
    pub text: String,
}

impl Verse {
    /// Create a verse without commentary
    pub fn new(
        sanskrit: impl Into<String>,
        transliteration: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            sanskrit: sanskrit.into(),
            transliteration: transliteration.into(),
            translation: translation.into(),
            commentary: Vec::new(),
        }
    }

    /// Append a commentary
    pub fn with_commentary(mut self, source: impl Into<String>, text: impl Into<String>) -> Self {
        self.commentary.push(Commentary {
            source: source.into(),
            text: text.into(),
        });
        self
    }

    /// Look up commentary text by source key
    pub fn commentary(&self, source: &str) -> Option<&str> {
        self.commentary
            .iter()
            .find(|c| c.source == source)
            .map(|c| c.text.as_str())
    }

    /// Whether a commentary with this key exists
    pub fn has_commentary(&self, source: &str) -> bool {
        self.commentary.iter().any(|c| c.source == source)
    }

    /// Source keys in display order
    pub fn commentary_sources(&self) -> impl Iterator<Item = &str> {
        self.commentary.iter().map(|c| c.source.as_str())
    }

    /// The key shown when nothing else is selected
    pub fn default_commentary(&self) -> Option<&str> {
        self.commentary.first().map(|c| c.source.as_str())
    }
}
