//! Reading position controller
//!
//! [`ReaderController`] owns the single (chapter, verse) pointer of a reader
//! view. It is seeded from route parameters, moved only through its
//! navigation operations, and mirrors every successful move into a
//! serialized location. A request for content the catalog does not hold puts
//! the controller in the not-found state without touching the last valid
//! position.

use crate::error::ReaderError;
use crate::route::{reader_location, ReadRoute};
use crate::types::{Catalog, Chapter, ReadingPosition, Verse};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Outcome of a step to the next or previous verse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "position", rename_all = "snake_case")]
pub enum Step {
    /// The position moved
    Moved(ReadingPosition),

    /// Already at verse 1; nothing changed
    AtStart,

    /// Already at the chapter's last verse; nothing changed
    AtEnd,
}

impl Step {
    /// Whether the step changed the position
    pub fn moved(&self) -> bool {
        matches!(self, Step::Moved(_))
    }
}

/// Why a requested position could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvableReason {
    UnknownText,
    UnknownChapter,
    VerseOutOfRange,
}

/// A requested position that does not exist in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvablePosition {
    pub text_id: String,
    pub chapter: u32,
    pub verse: u32,
    pub reason: UnresolvableReason,
}

impl fmt::Display for UnresolvablePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            UnresolvableReason::UnknownText => "unknown text",
            UnresolvableReason::UnknownChapter => "unknown chapter",
            UnresolvableReason::VerseOutOfRange => "verse out of range",
        };
        write!(
            f,
            "{} {}.{} ({})",
            self.text_id, self.chapter, self.verse, reason
        )
    }
}

/// Display state of the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderStatus {
    /// A verse is displayed
    Ready,

    /// The last request could not be resolved
    NotFound(UnresolvablePosition),
}

/// Controller maintaining one valid reading position over a catalog
#[derive(Debug, Clone)]
pub struct ReaderController {
    catalog: Arc<Catalog>,
    position: Option<ReadingPosition>,
    status: ReaderStatus,
    commentary: Option<String>,
    location: Option<String>,
}

/// Interpret a route parameter as a verse or chapter number
///
/// Only a missing value, or one that does not start with a number, yields
/// `None` so the caller can apply its fallback. A leading number is read the
/// way a browser's `parseInt` reads it, trailing text ignored. Numbers that
/// no catalog can hold (zero, negatives, anything past `u32::MAX`) come back
/// as `Some(0)` so the catalog lookup rejects them.
fn parse_param(param: Option<&str>) -> Option<u32> {
    let param = param?.trim();
    let (negative, unsigned) = match param.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, param.strip_prefix('+').unwrap_or(param)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(0))
}

impl ReaderController {
    /// Create a controller seeded from route parameters
    pub fn mount(catalog: Arc<Catalog>, chapter: Option<&str>, verse: Option<&str>) -> Self {
        let mut controller = Self::unseeded(catalog);
        // A failed seed leaves the controller in the not-found state
        let _ = controller.set_from_route(chapter, verse);
        controller
    }

    /// Create a controller from a parsed reader route
    pub fn from_route(catalog: Arc<Catalog>, route: &ReadRoute) -> Self {
        let mut controller = Self::unseeded(catalog);
        let _ = controller.apply_route(route);
        controller
    }

    fn unseeded(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            position: None,
            status: ReaderStatus::Ready,
            commentary: None,
            location: None,
        }
    }

    /// Resolve route parameters into a new position
    ///
    /// A missing or non-numeric chapter keeps the current chapter (1 before
    /// any position exists); a missing or non-numeric verse means verse 1.
    pub fn set_from_route(
        &mut self,
        chapter: Option<&str>,
        verse: Option<&str>,
    ) -> Result<ReadingPosition, ReaderError> {
        let chapter = parse_param(chapter)
            .unwrap_or_else(|| self.position.map_or(1, |p| p.chapter()));
        let verse = parse_param(verse).unwrap_or(1);
        self.resolve(chapter, verse)
    }

    /// Resolve a full reader route, including its text id
    pub fn apply_route(&mut self, route: &ReadRoute) -> Result<ReadingPosition, ReaderError> {
        if route.text_id != self.catalog.text_id() {
            let unresolved = UnresolvablePosition {
                text_id: route.text_id.clone(),
                chapter: parse_param(route.chapter.as_deref()).unwrap_or(1),
                verse: parse_param(route.verse.as_deref()).unwrap_or(1),
                reason: UnresolvableReason::UnknownText,
            };
            return Err(self.not_found(unresolved));
        }
        self.set_from_route(route.chapter.as_deref(), route.verse.as_deref())
    }

    /// Advance one verse within the current chapter
    pub fn next(&mut self) -> Result<Step, ReaderError> {
        let position = self.active()?;
        if position.verse() >= self.verse_count(position) {
            return Ok(Step::AtEnd);
        }
        let next = ReadingPosition::new(position.chapter(), position.verse() + 1);
        self.move_to(next);
        Ok(Step::Moved(next))
    }

    /// Go back one verse within the current chapter
    pub fn previous(&mut self) -> Result<Step, ReaderError> {
        let position = self.active()?;
        if position.verse() <= 1 {
            return Ok(Step::AtStart);
        }
        let previous = ReadingPosition::new(position.chapter(), position.verse() - 1);
        self.move_to(previous);
        Ok(Step::Moved(previous))
    }

    /// Jump to a verse of the current chapter
    pub fn jump_to_verse(&mut self, verse: u32) -> Result<ReadingPosition, ReaderError> {
        let position = self.active()?;
        let verse_count = self.verse_count(position);
        if verse == 0 || verse > verse_count {
            return Err(ReaderError::OutOfRange {
                chapter: position.chapter(),
                verse,
                verse_count,
            });
        }
        let target = ReadingPosition::new(position.chapter(), verse);
        self.move_to(target);
        Ok(target)
    }

    /// Jump to the first verse of another chapter
    pub fn jump_to_chapter(&mut self, chapter: u32) -> Result<ReadingPosition, ReaderError> {
        let target = self
            .catalog
            .position(chapter, 1)
            .ok_or(ReaderError::UnknownChapter(chapter))?;
        self.move_to(target);
        Ok(target)
    }

    /// Leave any state for the catalog's default position
    pub fn recover(&mut self) -> ReadingPosition {
        let target = self.catalog.default_position();
        self.move_to(target);
        target
    }

    /// Choose which commentary is displayed for the current verse
    pub fn select_commentary(&mut self, key: &str) -> Result<(), ReaderError> {
        let position = self.active()?;
        let known = self
            .current_verse()
            .is_some_and(|verse| verse.has_commentary(key));
        if !known {
            tracing::warn!(key, %position, "commentary source not present for verse");
            return Err(ReaderError::UnknownCommentary {
                key: key.to_string(),
                chapter: position.chapter(),
                verse: position.verse(),
            });
        }
        self.commentary = Some(key.to_string());
        Ok(())
    }

    /// The last valid position, kept while a not-found state is shown
    pub fn position(&self) -> Option<ReadingPosition> {
        self.position
    }

    pub fn status(&self) -> &ReaderStatus {
        &self.status
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.status, ReaderStatus::NotFound(_))
    }

    /// Serialized location of the current position
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn selected_commentary(&self) -> Option<&str> {
        self.commentary.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn text_id(&self) -> &str {
        self.catalog.text_id()
    }

    /// Chapter on display, if any
    pub fn current_chapter(&self) -> Option<&Chapter> {
        let position = self.active().ok()?;
        self.catalog.chapter(position.chapter())
    }

    /// Verse on display, if any
    pub fn current_verse(&self) -> Option<&Verse> {
        let position = self.active().ok()?;
        self.catalog
            .chapter(position.chapter())?
            .verse(position.verse())
    }

    pub fn can_go_previous(&self) -> bool {
        self.active().is_ok_and(|p| p.verse() > 1)
    }

    pub fn can_go_next(&self) -> bool {
        self.active()
            .is_ok_and(|p| p.verse() < self.verse_count(p))
    }

    fn active(&self) -> Result<ReadingPosition, ReaderError> {
        match self.status {
            ReaderStatus::Ready => self.position.ok_or(ReaderError::NoActivePosition),
            ReaderStatus::NotFound(_) => Err(ReaderError::NoActivePosition),
        }
    }

    fn verse_count(&self, position: ReadingPosition) -> u32 {
        self.catalog
            .chapter(position.chapter())
            .map_or(0, Chapter::verse_count)
    }

    fn resolve(&mut self, chapter: u32, verse: u32) -> Result<ReadingPosition, ReaderError> {
        if let Some(position) = self.catalog.position(chapter, verse) {
            self.move_to(position);
            return Ok(position);
        }

        let reason = if self.catalog.chapter(chapter).is_some() {
            UnresolvableReason::VerseOutOfRange
        } else {
            UnresolvableReason::UnknownChapter
        };
        let unresolved = UnresolvablePosition {
            text_id: self.catalog.text_id().to_string(),
            chapter,
            verse,
            reason,
        };
        Err(self.not_found(unresolved))
    }

    fn not_found(&mut self, unresolved: UnresolvablePosition) -> ReaderError {
        tracing::debug!(%unresolved, "requested position not in catalog");
        self.status = ReaderStatus::NotFound(unresolved.clone());
        ReaderError::Unresolvable(unresolved)
    }

    fn move_to(&mut self, position: ReadingPosition) {
        let verse = self
            .catalog
            .chapter(position.chapter())
            .and_then(|c| c.verse(position.verse()));
        // Keep the reader's commentary choice when the new verse offers it
        let commentary = match (verse, self.commentary.as_deref()) {
            (Some(v), Some(current)) if v.has_commentary(current) => Some(current.to_string()),
            (Some(v), _) => v.default_commentary().map(str::to_string),
            (None, _) => None,
        };

        self.commentary = commentary;
        self.position = Some(position);
        self.status = ReaderStatus::Ready;
        self.location = Some(reader_location(self.catalog.text_id(), position));
    }
}
