//! Removal of duplicate component files left behind after a move

pub mod duplicates;

pub use duplicates::{remove_duplicates, CleanupReport};
