//! Persisted light/dark theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stylesheet selects its palette from a `light` or `dark` class on the
//! `<html>` element. This store keeps that class, the stored preference, and
//! the in-memory value equal after every change, including at construction.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::platform::{Environment, KeyValueStorage, RootClassList};
use crate::store::{Observable, SubscriptionId};

/// Visual mode applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Every class name the theme may put on the root element.
    pub const CLASS_NAMES: [&'static str; 2] = ["light", "dark"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self == Self::Light { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Resolve the raw stored string to a theme. Empty or missing values use the
/// default; unrecognized values are logged and also use the default.
fn theme_from_stored(raw: Option<&str>, key: &str, default: Theme) -> Theme {
    match raw {
        None | Some("") => default,
        Some(raw) => raw.parse().unwrap_or_else(|err: ParseThemeError| {
            log::warn!("theme: ignoring stored value under {key:?}: {err}");
            default
        }),
    }
}

/// Write the theme to storage, then swap the root element's theme class.
fn apply_theme(storage: &dyn KeyValueStorage, root: &dyn RootClassList, key: &str, theme: Theme) {
    if let Err(e) = storage.set_item(key, theme.as_str()) {
        log::warn!("theme: failed to persist {theme}: {e}");
    }
    let swapped = root
        .remove_classes(&Theme::CLASS_NAMES)
        .and_then(|()| root.add_class(theme.as_str()));
    if let Err(e) = swapped {
        log::warn!("theme: failed to apply {theme} class: {e}");
    }
}

/// Observable theme preference backed by durable storage.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    theme: Observable<Theme>,
    key: String,
}

impl ThemeStore {
    /// Read the stored preference and install the persistence subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area cannot be read.
    pub fn load(env: &Environment, config: &StoreConfig) -> Result<Self, StoreError> {
        let key = config.theme_key.clone();
        let raw = env.storage().get_item(&key)?;
        let initial = theme_from_stored(raw.as_deref(), &key, config.default_theme);
        Ok(Self::with_initial(env, key, initial))
    }

    /// Start from `initial` without reading storage. The persistence
    /// subscriber runs immediately, so `initial` is written and applied.
    #[must_use]
    pub fn with_initial(env: &Environment, key: impl Into<String>, initial: Theme) -> Self {
        let key = key.into();
        let theme = Observable::new(initial);
        let storage = Arc::clone(env.storage());
        let root = Arc::clone(env.root());
        let sub_key = key.clone();
        theme.subscribe(move |t: &Theme| apply_theme(storage.as_ref(), root.as_ref(), &sub_key, *t));
        Self { theme, key }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn update(&self, f: impl FnOnce(&mut Theme)) {
        self.theme.update(f);
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        self.theme.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.theme.unsubscribe(id)
    }

    /// The underlying observable, for bridging into view signals.
    #[must_use]
    pub fn observable(&self) -> &Observable<Theme> {
        &self.theme
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
