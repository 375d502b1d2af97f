//! # client-stores
//!
//! Session state for the browser client: the signed-in user and the theme
//! preference, both persisted to `localStorage`, plus transient UI flags.
//!
//! Every store is an [`store::Observable`] built once by the application root
//! ([`app::StoreProvider`]) against an injected [`platform::Environment`], so
//! the same code runs in the browser, during server rendering, and in tests.

pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;

/// Browser entry point: panic messages and `log` output go to the console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_client() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
