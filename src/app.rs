//! Application-root store provider and component hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one [`AppStores`] per page session and provides
//! it through Leptos context. Components fetch it with [`use_stores`] and
//! bridge individual observables into signals with [`observe`].

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::config::StoreConfig;
use crate::platform::Environment;
use crate::state::AppStores;
use crate::store::Observable;

/// Build the session's stores for the current environment.
///
/// A corrupt stored user is discarded. If storage cannot be used at all the
/// session falls back to detached stores so the page still renders.
pub fn build_stores(env: &Environment, config: &StoreConfig) -> AppStores {
    AppStores::load_or_reset(env, config).unwrap_or_else(|e| {
        log::error!("stores: storage unusable, continuing without persistence: {e}");
        AppStores::detached(config)
    })
}

/// Provides [`AppStores`] to every descendant.
#[component]
pub fn StoreProvider(
    /// Storage keys and defaults; `StoreConfig::default()` when omitted.
    #[prop(optional)]
    config: Option<StoreConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let stores = build_stores(&Environment::detect(), &config);
    provide_context(stores);
    children()
}

/// The session's stores.
///
/// # Panics
///
/// Panics if called outside a [`StoreProvider`].
pub fn use_stores() -> AppStores {
    expect_context::<AppStores>()
}

/// Mirror `observable` into a read-only signal. The subscription is removed
/// when the current reactive owner is cleaned up.
pub fn observe<T>(observable: &Observable<T>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let signal = RwSignal::new(observable.get());
    let id = observable.subscribe(move |value: &T| signal.set(value.clone()));
    let handle = observable.clone();
    on_cleanup(move || {
        handle.unsubscribe(id);
    });
    signal.read_only()
}
