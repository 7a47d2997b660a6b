//! The Catalog type - the read-only root of all readable content

use super::{Chapter, ReadingPosition};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The complete, validated collection of chapters for one text
///
/// A catalog is immutable once built. Construction checks that chapter
/// numbers are positive and unique, every chapter has verses and every verse
/// has at least one commentary with unique source keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    /// Route segment selecting this text (e.g. "gita")
    text_id: String,

    /// Display title
    title: String,

    /// Chapters sorted by number
    chapters: Vec<Chapter>,
}

/// Unvalidated wire shape of a catalog
#[derive(Deserialize)]
struct CatalogData {
    text_id: String,
    title: String,
    chapters: Vec<Chapter>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::new(data.text_id, data.title, data.chapters)
    }
}

impl Catalog {
    /// Build a catalog, rejecting any structure the reader cannot navigate
    pub fn new(
        text_id: impl Into<String>,
        title: impl Into<String>,
        mut chapters: Vec<Chapter>,
    ) -> Result<Self, CatalogError> {
        let text_id = text_id.into();
        if text_id.trim().is_empty() {
            return Err(CatalogError::MissingTextId);
        }
        if chapters.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for chapter in &chapters {
            if chapter.number == 0 {
                return Err(CatalogError::InvalidChapterNumber);
            }
            if !seen.insert(chapter.number) {
                return Err(CatalogError::DuplicateChapter(chapter.number));
            }
            if chapter.verses.is_empty() {
                return Err(CatalogError::EmptyChapter(chapter.number));
            }
            for (index, verse) in chapter.verses.iter().enumerate() {
                let verse_number = index as u32 + 1;
                if verse.commentary.is_empty() {
                    return Err(CatalogError::MissingCommentary {
                        chapter: chapter.number,
                        verse: verse_number,
                    });
                }
                let mut keys = HashSet::new();
                for commentary in &verse.commentary {
                    if !keys.insert(commentary.source.as_str()) {
                        return Err(CatalogError::DuplicateCommentary {
                            chapter: chapter.number,
                            verse: verse_number,
                            source_key: commentary.source.clone(),
                        });
                    }
                }
            }
        }

        chapters.sort_by_key(|c| c.number);

        Ok(Self {
            text_id,
            title: title.into(),
            chapters,
        })
    }

    /// Parse and validate a JSON catalog
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        data.try_into()
    }

    /// Load a JSON catalog from disk
    pub fn load(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Route segment for this text
    pub fn text_id(&self) -> &str {
        &self.text_id
    }

    /// Display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Chapters in ascending order
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a chapter by number
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    /// Validate a (chapter, verse) pair, yielding a position on success
    pub fn position(&self, chapter: u32, verse: u32) -> Option<ReadingPosition> {
        self.chapter(chapter)?
            .verse(verse)
            .map(|_| ReadingPosition::new(chapter, verse))
    }

    /// The known-valid position used for recovery: first chapter, verse 1
    pub fn default_position(&self) -> ReadingPosition {
        // Construction guarantees at least one non-empty chapter
        ReadingPosition::new(self.chapters[0].number, 1)
    }

    /// Total number of verses across all chapters
    pub fn total_verses(&self) -> usize {
        self.chapters.iter().map(|c| c.verses.len()).sum()
    }
}
