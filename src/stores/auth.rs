//! Authentication state
//!
//! Holds the signed-in user and keeps it in the key-value store so a
//! session survives restarts.

use crate::error::{PocketError, PocketResult};
use crate::models::User;
use crate::storage::{KeyValueStore, KEY_USER};

/// Signed-in user state
#[derive(Debug)]
pub struct AuthStore<'a> {
    kv: &'a dyn KeyValueStore,
    user: Option<User>,
}

impl<'a> AuthStore<'a> {
    /// Create an empty store; call [`AuthStore::hydrate`] to restore a session
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv, user: None }
    }

    /// Restore the persisted user
    ///
    /// `Ok(None)` means nobody is signed in. A stored value that cannot be
    /// decoded is reported as an error and leaves the store signed out.
    pub fn hydrate(&mut self) -> PocketResult<Option<&User>> {
        self.user = None;

        let Some(raw) = self.kv.get(KEY_USER)? else {
            tracing::debug!("no persisted session");
            return Ok(None);
        };

        let user: User = serde_json::from_str(&raw).map_err(|e| {
            PocketError::Storage(format!("Corrupt value for {}: {}", KEY_USER, e))
        })?;

        tracing::info!(user = %user.email, "restored session");
        self.user = Some(user);
        Ok(self.user.as_ref())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Persist and activate a session
    ///
    /// The in-memory state only changes once the write succeeded.
    pub fn sign_in(&mut self, user: User) -> PocketResult<()> {
        let raw = serde_json::to_string(&user)?;
        self.kv.set(KEY_USER, &raw)?;
        tracing::info!(user = %user.email, "signed in");
        self.user = Some(user);
        Ok(())
    }

    /// Forget the persisted session
    pub fn sign_out(&mut self) -> PocketResult<()> {
        self.kv.remove(KEY_USER)?;
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.email, "signed out");
        }
        Ok(())
    }
}
