//! CLI command implementations

mod ask;
mod chapters;
mod library;
mod navigate;
mod read;
mod validate;

pub use ask::ask;
pub use chapters::chapters;
pub use library::library;
pub use navigate::{navigate, NavStep};
pub use read::read;
pub use validate::validate;

use anyhow::{Context, Result};
use gita_core::content::bhagavad_gita;
use gita_core::Catalog;
use std::path::Path;
use std::sync::Arc;

/// Load the catalog named by `--catalog`, or the bundled one
fn load_catalog(path: Option<&Path>) -> Result<Arc<Catalog>> {
    let catalog = match path {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            tracing::debug!(
                "Loaded catalog '{}' with {} verses",
                catalog.title(),
                catalog.total_verses()
            );
            catalog
        }
        None => bhagavad_gita(),
    };
    Ok(Arc::new(catalog))
}
