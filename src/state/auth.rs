//! Signed-in user, persisted across page reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page stores the user returned by `/api/login`; route guards and
//! identity-aware components read it back. Storage holds a serialized user
//! exactly when the in-memory value is `Some`.
//!
//! ERROR HANDLING
//! ==============
//! Stored data that is not valid JSON fails construction with
//! [`StoreError::Corrupt`]. The application root calls
//! [`UserStore::load_or_reset`], which discards the corrupt entry and starts
//! signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::platform::{Environment, KeyValueStorage};
use crate::store::{Observable, SubscriptionId};

/// Identity returned by the login endpoint.
///
/// Fields the client does not know about are kept in `extra` so the stored
/// record round-trips unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub vehicle_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn persist_user(storage: &dyn KeyValueStorage, key: &str, user: Option<&User>) {
    let result = match user {
        Some(user) => serde_json::to_string(user)
            .map_err(StoreError::from)
            .and_then(|raw| storage.set_item(key, &raw)),
        None => storage.remove_item(key),
    };
    match result {
        Ok(()) => log::debug!("auth: {} {key:?}", if user.is_some() { "stored" } else { "cleared" }),
        Err(e) => log::warn!("auth: failed to persist user: {e}"),
    }
}

/// Observable current user backed by durable storage.
#[derive(Clone, Debug)]
pub struct UserStore {
    user: Observable<Option<User>>,
    key: String,
}

impl UserStore {
    /// Read the stored user and install the persistence subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored value is not a valid
    /// user, or a storage error if the storage area cannot be read.
    pub fn load(env: &Environment, config: &StoreConfig) -> Result<Self, StoreError> {
        let key = config.user_key.clone();
        let initial = match env.storage().get_item(&key)? {
            Some(raw) => serde_json::from_str::<Option<User>>(&raw)
                .map_err(|source| StoreError::Corrupt { key: key.clone(), source })?,
            None => None,
        };
        Ok(Self::with_initial(env, key, initial))
    }

    /// Like [`Self::load`], but a corrupt stored user is removed and the store
    /// starts signed out.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area cannot be read or the corrupt
    /// entry cannot be removed.
    pub fn load_or_reset(env: &Environment, config: &StoreConfig) -> Result<Self, StoreError> {
        match Self::load(env, config) {
            Err(e) if e.is_corrupt() => {
                log::warn!("auth: discarding stored user: {e}");
                env.storage().remove_item(&config.user_key)?;
                Ok(Self::with_initial(env, config.user_key.clone(), None))
            }
            other => other,
        }
    }

    /// Start from `initial` without reading storage. The persistence
    /// subscriber runs immediately, so `initial` is written under `key`.
    #[must_use]
    pub fn with_initial(env: &Environment, key: impl Into<String>, initial: Option<User>) -> Self {
        let key = key.into();
        let user = Observable::new(initial);
        let storage = Arc::clone(env.storage());
        let sub_key = key.clone();
        user.subscribe(move |u: &Option<User>| persist_user(storage.as_ref(), &sub_key, u.as_ref()));
        Self { user, key }
    }

    #[must_use]
    pub fn get(&self) -> Option<User> {
        self.user.get()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn set(&self, user: Option<User>) {
        self.user.set(user);
    }

    pub fn update(&self, f: impl FnOnce(&mut Option<User>)) {
        self.user.update(f);
    }

    pub fn sign_in(&self, user: User) {
        self.set(Some(user));
    }

    pub fn sign_out(&self) {
        self.set(None);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Option<User>) + Send + Sync + 'static,
    {
        self.user.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.user.unsubscribe(id)
    }

    #[must_use]
    pub fn observable(&self) -> &Observable<Option<User>> {
        &self.user
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
