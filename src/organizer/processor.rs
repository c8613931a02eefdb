use std::path::PathBuf;

use tracing::debug;

use super::index::{write_category_indices, write_root_index};
use super::mover::{move_components, MovedFile};
use crate::error::{Error, Result};
use crate::models::{Config, Layout};

/// Outcome of an organize run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeReport {
    /// Files relocated by the move phase, in processing order
    pub moved: Vec<MovedFile>,
    /// Category barrels that were (re)written
    pub indices: Vec<PathBuf>,
    /// The root aggregator barrel
    pub root_index: PathBuf,
}

/// Move components into their category directories and regenerate all barrels
pub fn organize_components(config: &Config, layout: &Layout) -> Result<OrganizeReport> {
    let base = &config.base_dir;
    if !base.is_dir() {
        return Err(Error::InvalidPath(base.clone()));
    }

    println!("Moving files to new locations...");
    let moved = move_components(base, layout)?;
    debug!("Moved {} files", moved.len());

    println!("\nCreating {} files...", layout.index_file);
    let indices = write_category_indices(base, layout)?;

    let root_index = write_root_index(base, layout)?;
    println!("✓ Updated {}/{}", config.base_name(), layout.index_file);

    println!("\n✅ All files reorganized successfully!");

    Ok(OrganizeReport {
        moved,
        indices,
        root_index,
    })
}
