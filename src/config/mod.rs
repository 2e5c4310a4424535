//! Configuration module for Pocketbook
//!
//! - Path resolution for settings and data files
//! - Application settings persistence

pub mod paths;
pub mod settings;

pub use paths::PocketPaths;
pub use settings::Settings;
