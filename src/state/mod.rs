//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`, `ui`) so components depend on
//! small focused stores. [`AppStores`] bundles one instance of each, built
//! once by the application root and handed to components through context.

pub mod auth;
pub mod stores;
pub mod theme;
pub mod ui;

pub use stores::AppStores;
