//! Command-line interface handling

mod args;

pub use args::{Cli, Command};

use crate::cleanup::remove_duplicates;
use crate::error::Result;
use crate::organizer::organize_components;

/// Dispatch a parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let layout = cli.load_layout()?;

    tracing::debug!(
        "Running {:?} on {} with {} moved and {} indexed categories",
        cli.command,
        config.base_dir.display(),
        layout.moves.len(),
        layout.indices.len()
    );

    match cli.command {
        Command::Cleanup => {
            remove_duplicates(&config, &layout)?;
        }
        Command::Organize => {
            organize_components(&config, &layout)?;
        }
    }

    Ok(())
}
