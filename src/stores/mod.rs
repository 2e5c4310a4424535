//! Client state containers
//!
//! Three independent stores, each passed explicitly to the code that needs
//! it and exposing only getters and named mutators:
//!
//! - [`AuthStore`]: the signed-in user, persisted through a [`KeyValueStore`]
//! - [`PreferencesStore`]: language, theme and hidden values, persisted the same way
//! - [`DataStore`]: accounts, cards, categories and transactions, held in memory
//!
//! [`KeyValueStore`]: crate::storage::KeyValueStore

pub mod auth;
pub mod data;
pub mod preferences;

pub use auth::AuthStore;
pub use data::{DataSnapshot, DataStore};
pub use preferences::{Preferences, PreferencesStore, Theme};
