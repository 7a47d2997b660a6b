//! Gita Core Library
//!
//! This crate provides the content catalog and reading logic for the Gita
//! reader. A [`ReaderController`] keeps one valid (chapter, verse) position
//! over an immutable [`Catalog`]; locations are parsed and serialized by the
//! pure functions in [`route`], and [`view`] turns controller state into
//! serializable snapshots for any front-end.

pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod library;
pub mod reader;
pub mod route;
pub mod types;
pub mod view;

pub use config::{Theme, UiConfig};
pub use error::{CatalogError, ChatError, ConfigError, GitaError, ReaderError, Result, RouteError};
pub use reader::{ReaderController, ReaderStatus, Step, UnresolvablePosition, UnresolvableReason};
pub use route::{parse_location, reader_location, Location, ReadRoute, VerseRef};
pub use types::{Catalog, Chapter, Commentary, ReadingPosition, Verse};
pub use view::ReaderView;
