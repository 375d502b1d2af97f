//! Browser capabilities injected into the stores.
//!
//! DESIGN
//! ======
//! The stores never ask "am I in a browser?". They receive an [`Environment`]
//! whose storage and root class list are either real browser handles or
//! detached no-ops (server rendering, native tools). Tests build one from the
//! in-memory implementations.

pub mod document;
pub mod storage;


use std::fmt;
use std::sync::Arc;

pub use document::{DetachedClassList, MemoryClassList, RootClassList};
pub use storage::{DetachedStorage, KeyValueStorage, MemoryStorage};

#[cfg(feature = "hydrate")]
pub use document::BrowserRootClassList;
#[cfg(feature = "hydrate")]
pub use storage::BrowserStorage;

/// Capabilities shared by every store built for one page session.
#[derive(Clone)]
pub struct Environment {
    storage: Arc<dyn KeyValueStorage>,
    root: Arc<dyn RootClassList>,
    in_browser: bool,
}

impl Environment {
    /// Real `localStorage` and `<html>` class list.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        Self {
            storage: Arc::new(BrowserStorage),
            root: Arc::new(BrowserRootClassList),
            in_browser: true,
        }
    }

    /// Non-browser context: nothing persists, the document is untouched.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            storage: Arc::new(DetachedStorage),
            root: Arc::new(DetachedClassList),
            in_browser: false,
        }
    }

    /// Caller-provided capabilities, treated as a browser context.
    #[must_use]
    pub fn custom(storage: impl KeyValueStorage + 'static, root: impl RootClassList + 'static) -> Self {
        Self { storage: Arc::new(storage), root: Arc::new(root), in_browser: true }
    }

    /// Browser when built with `hydrate` and a `window` exists, otherwise
    /// detached.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::window().is_some() {
                return Self::browser();
            }
        }
        Self::detached()
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    #[must_use]
    pub fn root(&self) -> &Arc<dyn RootClassList> {
        &self.root
    }

    #[must_use]
    pub fn is_browser(&self) -> bool {
        self.in_browser
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("in_browser", &self.in_browser)
            .finish_non_exhaustive()
    }
}
