//! Validate command implementation

use anyhow::{bail, Result};
use gita_core::Catalog;
use std::collections::BTreeSet;
use std::path::Path;

/// Validate a JSON catalog file
pub fn validate(input: &Path) -> Result<()> {
    match Catalog::load(input) {
        Ok(catalog) => {
            let sources: BTreeSet<&str> = catalog
                .chapters()
                .iter()
                .flat_map(|c| c.verses.iter())
                .flat_map(|v| v.commentary_sources())
                .collect();

            println!("Valid catalog");
            println!("  Text:       {}", catalog.text_id());
            println!("  Title:      {}", catalog.title());
            println!("  Chapters:   {}", catalog.chapters().len());
            println!("  Verses:     {}", catalog.total_verses());
            println!(
                "  Commentary: {}",
                sources.into_iter().collect::<Vec<_>>().join(", ")
            );

            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid catalog: {}", e);
            bail!("Validation failed for {}", input.display());
        }
    }
}
