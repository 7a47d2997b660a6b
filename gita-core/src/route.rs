//! Location parsing and serialization
//!
//! The binding between addressable locations and reader state is two plain
//! functions: [`parse_location`] turns a path into a [`Location`] and
//! [`reader_location`] turns a [`ReadingPosition`] back into a path. Numeric
//! interpretation of reader parameters is left to the controller so that
//! its fallback rules apply.

use crate::error::RouteError;
use crate::types::ReadingPosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed addressable location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Location {
    Home,
    Library,
    About,
    Feedback,
    Privacy,
    Terms,
    /// `/read/{text_id}/{chapter}/{verse?}`
    Read(ReadRoute),
    /// `/chat?verse={chapter}.{verse}`
    Chat { seed: Option<VerseRef> },
    /// Any unrecognized path
    NotFound { path: String },
}

/// Raw reader route parameters, as they appear in the path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadRoute {
    pub text_id: String,
    pub chapter: Option<String>,
    pub verse: Option<String>,
}

impl ReadRoute {
    pub fn new(text_id: impl Into<String>, chapter: Option<&str>, verse: Option<&str>) -> Self {
        Self {
            text_id: text_id.into(),
            chapter: chapter.map(str::to_string),
            verse: verse.map(str::to_string),
        }
    }
}

/// A `chapter.verse` reference, not yet checked against any catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub chapter: u32,
    pub verse: u32,
}

impl FromStr for VerseRef {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RouteError::MalformedVerseRef(s.to_string());
        let (chapter, verse) = s.trim().split_once('.').ok_or_else(malformed)?;
        let chapter: u32 = chapter.parse().map_err(|_| malformed())?;
        let verse: u32 = verse.parse().map_err(|_| malformed())?;
        if chapter == 0 || verse == 0 {
            return Err(malformed());
        }
        Ok(Self { chapter, verse })
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.verse)
    }
}

impl From<ReadingPosition> for VerseRef {
    fn from(position: ReadingPosition) -> Self {
        Self {
            chapter: position.chapter(),
            verse: position.verse(),
        }
    }
}

/// Parse a path (optionally with query string) into a location
pub fn parse_location(input: &str) -> Result<Location, RouteError> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err(RouteError::NotAbsolute(input.to_string()));
    }

    let without_fragment = input.split('#').next().unwrap_or_default();
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let location = match segments.as_slice() {
        [] => Location::Home,
        ["library"] => Location::Library,
        ["about"] => Location::About,
        ["feedback"] => Location::Feedback,
        ["privacy"] => Location::Privacy,
        ["terms"] => Location::Terms,
        ["read", text_id] => Location::Read(ReadRoute::new(*text_id, None, None)),
        ["read", text_id, chapter] => {
            Location::Read(ReadRoute::new(*text_id, Some(*chapter), None))
        }
        ["read", text_id, chapter, verse] => {
            Location::Read(ReadRoute::new(*text_id, Some(*chapter), Some(*verse)))
        }
        ["chat"] => Location::Chat {
            // The seed is advisory: a malformed value is dropped
            seed: query
                .and_then(|q| query_param(q, "verse"))
                .and_then(|v| v.parse().ok()),
        },
        _ => Location::NotFound {
            path: path.to_string(),
        },
    };

    Ok(location)
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Serialize a reading position as a reader location
pub fn reader_location(text_id: &str, position: ReadingPosition) -> String {
    format!(
        "/read/{}/{}/{}",
        text_id,
        position.chapter(),
        position.verse()
    )
}

/// Location of the chat page seeded with a verse question
pub fn chat_location(verse: VerseRef) -> String {
    format!("/chat?verse={}", verse)
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Home => write!(f, "/"),
            Location::Library => write!(f, "/library"),
            Location::About => write!(f, "/about"),
            Location::Feedback => write!(f, "/feedback"),
            Location::Privacy => write!(f, "/privacy"),
            Location::Terms => write!(f, "/terms"),
            Location::Read(route) => {
                write!(f, "/read/{}", route.text_id)?;
                if let Some(chapter) = &route.chapter {
                    write!(f, "/{}", chapter)?;
                    if let Some(verse) = &route.verse {
                        write!(f, "/{}", verse)?;
                    }
                }
                Ok(())
            }
            Location::Chat { seed: Some(seed) } => f.write_str(&chat_location(*seed)),
            Location::Chat { seed: None } => write!(f, "/chat"),
            Location::NotFound { path } => f.write_str(path),
        }
    }
}
