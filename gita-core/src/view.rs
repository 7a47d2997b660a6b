//! Serializable snapshots of what the reader displays

use crate::reader::{ReaderController, ReaderStatus, UnresolvablePosition};
use crate::route::{chat_location, reader_location};
use crate::types::{Catalog, ReadingPosition, Verse};
use serde::Serialize;

/// What the reader shows for the controller's current state
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReaderView {
    Verse(VerseView),
    NotFound(NotFoundView),
}

/// A displayed verse with its navigation affordances
#[derive(Debug, Clone, Serialize)]
pub struct VerseView {
    pub text_id: String,
    pub text_title: String,
    pub chapter: ChapterSummary,
    pub verse: u32,
    pub sanskrit: String,
    pub transliteration: String,
    pub translation: String,
    pub commentaries: Vec<CommentaryTab>,
    pub selected_commentary: Option<String>,
    pub location: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    /// One link per verse of the chapter
    pub verse_links: Vec<String>,
    pub ask_location: String,
    pub share_title: String,
    pub copy_text: String,
}

/// Chapter heading data
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChapterSummary {
    pub number: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanskrit_title: Option<String>,
    pub verse_count: u32,
}

/// One commentary source as offered for selection
#[derive(Debug, Clone, Serialize)]
pub struct CommentaryTab {
    pub source: String,
    pub text: String,
    pub selected: bool,
}

/// The "content not available" panel and its single recovery action
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub message: String,
    pub requested: Option<UnresolvablePosition>,
    pub recovery_location: String,
}

impl ReaderView {
    /// Snapshot a controller
    pub fn of(controller: &ReaderController) -> Self {
        let catalog = controller.catalog();
        let recovery_location = reader_location(catalog.text_id(), catalog.default_position());

        let unresolved = match controller.status() {
            ReaderStatus::NotFound(unresolved) => Some(unresolved.clone()),
            ReaderStatus::Ready => None,
        };

        let verse_view = match (
            unresolved.is_none(),
            controller.position(),
            controller.current_chapter(),
            controller.current_verse(),
        ) {
            (true, Some(position), Some(chapter), Some(verse)) => Some(VerseView {
                text_id: catalog.text_id().to_string(),
                text_title: catalog.title().to_string(),
                chapter: ChapterSummary {
                    number: chapter.number,
                    title: chapter.title.clone(),
                    sanskrit_title: chapter.sanskrit_title.clone(),
                    verse_count: chapter.verse_count(),
                },
                verse: position.verse(),
                sanskrit: verse.sanskrit.clone(),
                transliteration: verse.transliteration.clone(),
                translation: verse.translation.clone(),
                commentaries: verse
                    .commentary
                    .iter()
                    .map(|c| CommentaryTab {
                        source: c.source.clone(),
                        text: c.text.clone(),
                        selected: controller.selected_commentary() == Some(c.source.as_str()),
                    })
                    .collect(),
                selected_commentary: controller.selected_commentary().map(str::to_string),
                location: reader_location(catalog.text_id(), position),
                previous: neighbour(catalog, position, -1),
                next: neighbour(catalog, position, 1),
                verse_links: (1..=chapter.verse_count())
                    .filter_map(|v| catalog.position(chapter.number, v))
                    .map(|p| reader_location(catalog.text_id(), p))
                    .collect(),
                ask_location: chat_location(position.into()),
                share_title: share_title(catalog, position),
                copy_text: copy_text(catalog, position, verse),
            }),
            _ => None,
        };

        match verse_view {
            Some(view) => ReaderView::Verse(view),
            None => ReaderView::NotFound(NotFoundView {
                message: "The requested chapter or verse is not available yet.".to_string(),
                requested: unresolved,
                recovery_location,
            }),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReaderView::NotFound(_))
    }
}

fn neighbour(catalog: &Catalog, position: ReadingPosition, offset: i64) -> Option<String> {
    let verse = u32::try_from(i64::from(position.verse()) + offset).ok()?;
    catalog
        .position(position.chapter(), verse)
        .map(|p| reader_location(catalog.text_id(), p))
}

/// Title used when sharing a verse, e.g. "Bhagavad Gita 1.2"
pub fn share_title(catalog: &Catalog, position: ReadingPosition) -> String {
    format!("{} {}", catalog.title(), position)
}

/// Plain-text rendering of a verse for the clipboard
pub fn copy_text(catalog: &Catalog, position: ReadingPosition, verse: &Verse) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n— {}",
        verse.sanskrit,
        verse.transliteration,
        verse.translation,
        share_title(catalog, position)
    )
}
