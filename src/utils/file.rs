use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IoResultExt, Result};

/// Names found directly inside a directory, split by kind and sorted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

/// Create a directory (and its parents) if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir).at_path(dir)?;
    }
    Ok(())
}

/// Move a file with fallback to copy+delete if rename fails
pub fn safe_move_file(src: &Path, dest: &Path) -> Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(
                "Rename failed for {}, trying copy+delete: {}",
                src.display(),
                e
            );
            fs::copy(src, dest).at_path(dest)?;
            fs::remove_file(src).at_path(src)
        }
    }
}

/// Move `src` to `dest` when `src` exists. Returns whether a move happened.
pub fn move_if_exists(src: &Path, dest: &Path) -> Result<bool> {
    if !src.exists() {
        debug!("{} not present, skipping", src.display());
        return Ok(false);
    }
    safe_move_file(src, dest)?;
    Ok(true)
}

/// Delete a file when it exists. Returns whether anything was deleted.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        debug!("{} not present, skipping", path.display());
        return Ok(false);
    }
    fs::remove_file(path).at_path(path)?;
    Ok(true)
}

/// Overwrite a file with the given contents
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents).at_path(path)
}

/// List the regular files and subdirectories directly inside `dir`
pub fn list_directory(dir: &Path) -> Result<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    for entry in fs::read_dir(dir).at_path(dir)? {
        let entry = entry.at_path(dir)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if path.is_file() {
            listing.files.push(name);
        } else if path.is_dir() {
            listing.dirs.push(name);
        }
    }

    listing.files.sort();
    listing.dirs.sort();
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn move_and_remove_skip_missing_paths() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("Missing.tsx");

        assert!(!move_if_exists(&missing, &tmp.path().join("moved.tsx")).unwrap());
        assert!(!remove_if_exists(&missing).unwrap());
    }

    #[test]
    fn move_replaces_source_location() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Verse.tsx");
        let dest_dir = tmp.path().join("features");
        fs::write(&src, "export default 1;").unwrap();
        ensure_directory_exists(&dest_dir).unwrap();

        let dest = dest_dir.join("Verse.tsx");
        assert!(move_if_exists(&src, &dest).unwrap());
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dest).unwrap(), "export default 1;");
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_directory_exists(&nested).unwrap();
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn listing_is_sorted_and_split() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.tsx", "a.tsx", "index.ts"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        for name in ["ui", "common"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }

        let listing = list_directory(tmp.path()).unwrap();
        assert_eq!(listing.files, ["a.tsx", "b.tsx", "index.ts"]);
        assert_eq!(listing.dirs, ["common", "ui"]);
    }
}
