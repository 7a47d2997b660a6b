//! Read command implementation

use super::load_catalog;
use anyhow::{bail, Result};
use gita_core::view::{NotFoundView, VerseView};
use gita_core::{ReaderController, ReaderView};
use std::path::Path;

/// Display one verse
pub fn read(
    catalog: Option<&Path>,
    chapter: Option<&str>,
    verse: Option<&str>,
    commentary: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let mut controller = ReaderController::mount(catalog, chapter, verse);

    if let Some(key) = commentary {
        if let Err(e) = controller.select_commentary(key) {
            eprintln!("Warning: {}", e);
        }
    }

    let view = ReaderView::of(&controller);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        match &view {
            ReaderView::Verse(verse) => print_verse(verse),
            ReaderView::NotFound(panel) => print_not_found(panel),
        }
    }

    if let ReaderView::NotFound(panel) = &view {
        match &panel.requested {
            Some(requested) => bail!("Content not available: {}", requested),
            None => bail!("Content not available"),
        }
    }

    Ok(())
}

fn print_verse(view: &VerseView) {
    println!("{} - {}", view.share_title, view.chapter.title);
    if let Some(sanskrit_title) = &view.chapter.sanskrit_title {
        println!("{}", sanskrit_title);
    }
    println!();
    println!("{}", view.sanskrit);
    println!();
    println!("{}", view.transliteration);
    println!();
    println!("{}", view.translation);

    if let Some(tab) = view.commentaries.iter().find(|t| t.selected) {
        println!();
        println!("Commentary ({}):", tab.source);
        println!("{}", tab.text);
    }

    let others: Vec<&str> = view
        .commentaries
        .iter()
        .filter(|t| !t.selected)
        .map(|t| t.source.as_str())
        .collect();
    if !others.is_empty() {
        println!("Other commentary: {}", others.join(", "));
    }

    println!();
    println!("Location:    {}", view.location);
    if let Some(previous) = &view.previous {
        println!("Previous:    {}", previous);
    }
    if let Some(next) = &view.next {
        println!("Next:        {}", next);
    }
    println!("Ask:         {}", view.ask_location);
}

fn print_not_found(view: &NotFoundView) {
    println!("{}", view.message);
    println!("Go to:       {}", view.recovery_location);
}
