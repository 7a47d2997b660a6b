//! Core content types: the catalog of chapters and verses

mod catalog;
mod chapter;
mod position;
mod verse;

pub use catalog::Catalog;
pub use chapter::Chapter;
pub use position::ReadingPosition;
pub use verse::{Commentary, Verse};
