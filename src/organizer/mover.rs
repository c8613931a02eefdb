use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::{Category, Layout};
use crate::utils::{ensure_directory_exists, move_if_exists};

/// A file that was relocated into a category directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    pub category: String,
    pub file_name: String,
    pub destination: PathBuf,
}

/// Move one file name from `base` into `target_dir` if it is present
fn move_one(
    base: &Path,
    target_dir: &Path,
    category: &str,
    file_name: String,
    moved: &mut Vec<MovedFile>,
) -> Result<()> {
    let destination = target_dir.join(&file_name);
    if move_if_exists(&base.join(&file_name), &destination)? {
        println!("✓ Moved {} to {}/", file_name, category);
        moved.push(MovedFile {
            category: category.to_string(),
            file_name,
            destination,
        });
    }
    Ok(())
}

/// Move each component's source and stylesheet of one category into its subdirectory
pub fn move_category(base: &Path, category: &Category, layout: &Layout) -> Result<Vec<MovedFile>> {
    let target_dir = base.join(&category.name);
    ensure_directory_exists(&target_dir)?;

    let mut moved = Vec::new();
    for component in &category.components {
        debug!("Placing {} into {}", component, target_dir.display());
        move_one(
            base,
            &target_dir,
            &category.name,
            component.source_file(&layout.source_extension),
            &mut moved,
        )?;
        // The stylesheet is checked on its own, whether or not the source moved
        move_one(
            base,
            &target_dir,
            &category.name,
            component.style_file(&layout.style_extension),
            &mut moved,
        )?;
    }

    Ok(moved)
}

/// Run the move phase over every category of the layout, in order
pub fn move_components(base: &Path, layout: &Layout) -> Result<Vec<MovedFile>> {
    let mut moved = Vec::new();
    for category in &layout.moves {
        moved.extend(move_category(base, category, layout)?);
    }
    Ok(moved)
}
