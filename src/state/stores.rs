//! The full set of stores for one page session.

#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::platform::Environment;
use crate::state::auth::UserStore;
use crate::state::theme::ThemeStore;
use crate::state::ui::UiFlags;

#[derive(Clone, Debug)]
pub struct AppStores {
    pub user: UserStore,
    pub theme: ThemeStore,
    pub ui: UiFlags,
}

impl AppStores {
    /// Build every store against `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the stored user is
    /// corrupt.
    pub fn load(env: &Environment, config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            user: UserStore::load(env, config)?,
            theme: ThemeStore::load(env, config)?,
            ui: UiFlags::new(),
        })
    }

    /// Build every store, discarding a corrupt stored user instead of failing.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written.
    pub fn load_or_reset(env: &Environment, config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            user: UserStore::load_or_reset(env, config)?,
            theme: ThemeStore::load(env, config)?,
            ui: UiFlags::new(),
        })
    }

    /// Stores with defaults and no side effects, for server rendering.
    #[must_use]
    pub fn detached(config: &StoreConfig) -> Self {
        let env = Environment::detached();
        Self {
            user: UserStore::with_initial(&env, config.user_key.clone(), None),
            theme: ThemeStore::with_initial(&env, config.theme_key.clone(), config.default_theme),
            ui: UiFlags::new(),
        }
    }
}
