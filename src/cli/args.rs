use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::models::{Config, Layout, DEFAULT_BASE_DIR};

#[derive(Parser, Debug)]
#[command(name = "CompSrt")]
#[command(about = "Clean up and reorganize a front-end component directory", long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Component directory to work on
    #[arg(long, global = true, default_value = DEFAULT_BASE_DIR)]
    pub base: PathBuf,

    /// TOML file overriding the built-in component layout
    #[arg(long, global = true)]
    pub layout: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Delete duplicate component files left in the base directory
    Cleanup,
    /// Move components into category directories and regenerate index files
    Organize,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.debug, &self.base)
    }

    /// Built-in layout unless a layout file was given
    pub fn load_layout(&self) -> Result<Layout> {
        match &self.layout {
            Some(path) => Layout::load(path),
            None => Ok(Layout::default()),
        }
    }
}
