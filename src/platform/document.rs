//! Class list of the document root element (`<html>`).
//!
//! Stylesheets key the active theme off a class on the root element, so the
//! theme store keeps that class in sync through [`RootClassList`].

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;

pub trait RootClassList: Send + Sync {
    /// Remove each of `names` that is present.
    fn remove_classes(&self, names: &[&str]) -> Result<(), StoreError>;

    /// Add `name` unless already present.
    fn add_class(&self, name: &str) -> Result<(), StoreError>;
}

/// `document.documentElement.classList`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRootClassList;

#[cfg(feature = "hydrate")]
impl BrowserRootClassList {
    fn class_list() -> Result<web_sys::DomTokenList, StoreError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .map(|el| el.class_list())
            .ok_or_else(|| StoreError::Unavailable("no document root element".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl RootClassList for BrowserRootClassList {
    fn remove_classes(&self, names: &[&str]) -> Result<(), StoreError> {
        let list = Self::class_list()?;
        for name in names {
            list.remove_1(name)
                .map_err(|e| StoreError::Document(format!("{e:?}")))?;
        }
        Ok(())
    }

    fn add_class(&self, name: &str) -> Result<(), StoreError> {
        Self::class_list()?
            .add_1(name)
            .map_err(|e| StoreError::Document(format!("{e:?}")))
    }
}

/// In-process class list preserving insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryClassList {
    classes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current classes.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.lock().clone()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lock().iter().any(|c| c == name)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.classes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RootClassList for MemoryClassList {
    fn remove_classes(&self, names: &[&str]) -> Result<(), StoreError> {
        self.lock().retain(|c| !names.contains(&c.as_str()));
        Ok(())
    }

    fn add_class(&self, name: &str) -> Result<(), StoreError> {
        let mut classes = self.lock();
        if !classes.iter().any(|c| c == name) {
            classes.push(name.to_owned());
        }
        Ok(())
    }
}

/// No document outside the browser; every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedClassList;

impl RootClassList for DetachedClassList {
    fn remove_classes(&self, _names: &[&str]) -> Result<(), StoreError> {
        Ok(())
    }

    fn add_class(&self, _name: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
