//! Storage layer for Pocketbook
//!
//! JSON file helpers with atomic writes, and the key-value collaborator the
//! client state stores persist through.

pub mod file_io;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{
    JsonFileStore, KeyValueStore, MemoryStore, KEY_HIDE_VALUES, KEY_LANGUAGE, KEY_THEME, KEY_USER,
};
