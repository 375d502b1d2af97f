//! Transient UI visibility flags (feedback modal, mobile menu).
//!
//! DESIGN
//! ======
//! Kept separate from the persisted stores: these flags reset to closed on
//! every page load and never touch storage.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::store::Observable;

/// Open/closed state for overlays that several components toggle.
#[derive(Clone, Debug, Default)]
pub struct UiFlags {
    pub feedback_modal_open: Observable<bool>,
    pub mobile_menu_open: Observable<bool>,
}

impl UiFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_feedback_modal(&self) {
        self.feedback_modal_open.set(true);
    }

    pub fn close_feedback_modal(&self) {
        self.feedback_modal_open.set(false);
    }

    pub fn toggle_feedback_modal(&self) {
        self.feedback_modal_open.update(|open| *open = !*open);
    }

    pub fn open_mobile_menu(&self) {
        self.mobile_menu_open.set(true);
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    /// Close every overlay, e.g. on navigation.
    pub fn close_all(&self) {
        self.close_feedback_modal();
        self.close_mobile_menu();
    }
}
