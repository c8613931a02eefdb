//! Component organization into category directories and barrel generation

pub mod index;
pub mod mover;
pub mod processor;

pub use index::{render_category_index, render_root_index};
pub use mover::MovedFile;
pub use processor::{organize_components, OrganizeReport};
