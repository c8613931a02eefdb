//! Data models for the component reorganization

pub mod component;
pub mod config;
pub mod layout;

pub use component::Component;
pub use config::{Config, DEFAULT_BASE_DIR};
pub use layout::{Category, Layout};
