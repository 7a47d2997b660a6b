//! Chapters command implementation

use super::load_catalog;
use anyhow::Result;
use gita_core::reader_location;
use serde::Serialize;
use std::path::Path;

/// Chapter listing output
#[derive(Serialize)]
struct ChapterInfo {
    number: u32,
    title: String,
    sanskrit_title: Option<String>,
    verses: u32,
    location: Option<String>,
}

/// List the chapters of the catalog
pub fn chapters(catalog: Option<&Path>, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    let chapters: Vec<ChapterInfo> = catalog
        .chapters()
        .iter()
        .map(|chapter| ChapterInfo {
            number: chapter.number,
            title: chapter.title.clone(),
            sanskrit_title: chapter.sanskrit_title.clone(),
            verses: chapter.verse_count(),
            location: catalog
                .position(chapter.number, 1)
                .map(|p| reader_location(catalog.text_id(), p)),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&chapters)?);
    } else {
        println!("{} ({} verses)", catalog.title(), catalog.total_verses());
        for chapter in &chapters {
            let verses = if chapter.verses == 1 { "verse" } else { "verses" };
            println!(
                "  {:>2}. {} ({} {})",
                chapter.number, chapter.title, chapter.verses, verses
            );
        }
    }

    Ok(())
}
