use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Config, Layout};
use crate::utils::{list_directory, remove_if_exists, DirectoryListing};

/// What a cleanup run deleted and what it left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Duplicates that existed and were removed, in list order
    pub deleted: Vec<String>,
    /// Sorted contents of the base directory after deletion
    pub remaining: DirectoryListing,
}

/// Remove the layout's duplicate files from the base directory
pub fn remove_duplicates(config: &Config, layout: &Layout) -> Result<CleanupReport> {
    let base = &config.base_dir;
    if !base.is_dir() {
        return Err(Error::InvalidPath(base.clone()));
    }

    debug!(
        "Checking {} duplicate candidates in {}",
        layout.duplicates.len(),
        base.display()
    );

    let mut deleted = Vec::new();
    for file in &layout.duplicates {
        if remove_if_exists(&base.join(file))? {
            println!("✓ Deleted {}", file);
            deleted.push(file.clone());
        }
    }

    let remaining = list_directory(base)?;
    print_summary(config, &deleted, &remaining);

    Ok(CleanupReport { deleted, remaining })
}

fn print_summary(config: &Config, deleted: &[String], remaining: &DirectoryListing) {
    println!("\n✅ Deleted {} files", deleted.len());

    println!("\nRemaining files in {}:", config.base_dir.display());
    for file in &remaining.files {
        println!("  - {}", file);
    }

    println!("\nSubdirectories:");
    for dir in &remaining.dirs {
        println!("  - {}/", dir);
    }
}
