//! Storage keys and defaults for the persisted stores.
//!
//! DESIGN
//! ======
//! Defaults match the keys the application has always written (`user`,
//! `theme`), so existing browser data keeps loading. Deployments that share an
//! origin with other apps can namespace both keys with a prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::theme::Theme;

pub const DEFAULT_USER_KEY: &str = "user";
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key holding the JSON-serialized signed-in user.
    pub user_key: String,
    /// Storage key holding the raw theme name.
    pub theme_key: String,
    /// Theme used when nothing is stored or outside the browser.
    pub default_theme: Theme,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            user_key: DEFAULT_USER_KEY.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            default_theme: Theme::Dark,
        }
    }
}

impl StoreConfig {
    /// Namespace both keys as `{prefix}_user` / `{prefix}_theme`.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }
        self.user_key = format!("{prefix}_{DEFAULT_USER_KEY}");
        self.theme_key = format!("{prefix}_{DEFAULT_THEME_KEY}");
        self
    }

    #[must_use]
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }
}
