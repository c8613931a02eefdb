//! CompSrt: one-shot cleanup and reorganization of a front-end component directory

pub mod cleanup;
pub mod cli;
pub mod error;
pub mod models;
pub mod organizer;
pub mod utils;

pub use cleanup::{remove_duplicates, CleanupReport};
pub use error::{Error, Result};
pub use models::{Category, Component, Config, Layout};
pub use organizer::{organize_components, OrganizeReport};
