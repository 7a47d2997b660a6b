//! Library command implementation

use anyhow::Result;
use gita_core::library::{Library, TextEntry};

/// List the texts in the library
pub fn library(search: Option<&str>, theme: Option<&str>, json: bool) -> Result<()> {
    let library = Library::builtin();
    let texts: Vec<&TextEntry> = library.filter(search, theme).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&texts)?);
        return Ok(());
    }

    if texts.is_empty() {
        println!("No texts found");
        return Ok(());
    }

    for text in texts {
        let status = match &text.read_location {
            Some(location) if text.available => format!("read at {}", location),
            _ => "coming soon".to_string(),
        };
        println!("{} - {}", text.title, text.subtitle);
        println!(
            "  {} chapters, {} verses, {}",
            text.chapters, text.verses, status
        );
        println!("  Themes: {}", text.themes.join(", "));
    }

    Ok(())
}
