use std::path::PathBuf;

/// Component directory the migration was written for
pub const DEFAULT_BASE_DIR: &str = "/workspaces/StarLightQuran-Next/sr/components";

/// Configuration for a cleanup or organize run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Directory holding the components to reorganize
    pub base_dir: PathBuf,
}

impl Config {
    /// Create a new configuration for the given base directory
    pub fn new(debug_mode: bool, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug_mode,
            base_dir: base_dir.into(),
        }
    }

    /// Display name of the base directory, used in progress lines
    pub fn base_name(&self) -> String {
        self.base_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.base_dir.display().to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false, DEFAULT_BASE_DIR)
    }
}
