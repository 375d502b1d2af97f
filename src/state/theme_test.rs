use std::sync::Mutex;

use super::*;
use crate::platform::{MemoryClassList, MemoryStorage};

fn browser_env(storage: &MemoryStorage, root: &MemoryClassList) -> Environment {
    Environment::custom(storage.clone(), root.clone())
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_parses_exact_names_only() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(ParseThemeError("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_display_matches_class_name() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn theme_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
    assert_eq!(serde_json::from_str::<Theme>(r#""dark""#).unwrap(), Theme::Dark);
}

// =============================================================
// ThemeStore: initial value
// =============================================================

#[test]
fn initial_theme_is_dark_when_nothing_stored() {
    let storage = MemoryStorage::new();
    let root = MemoryClassList::new();
    let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();
    assert_eq!(store.get(), Theme::Dark);
}

#[test]
fn initial_theme_reads_stored_value() {
    let storage = MemoryStorage::with_entries([("theme", "light")]);
    let root = MemoryClassList::new();
    let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn empty_stored_value_falls_back_to_default() {
    let storage = MemoryStorage::with_entries([("theme", "")]);
    let root = MemoryClassList::new();
    let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();
    assert_eq!(store.get(), Theme::Dark);
}

#[test]
fn unrecognized_stored_value_is_normalized_to_default() {
    let storage = MemoryStorage::with_entries([("theme", "sepia")]);
    let root = MemoryClassList::new();
    let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn construction_applies_class_and_persists_initial_theme() {
    let storage = MemoryStorage::new();
    let root = MemoryClassList::new();
    let _store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();
    assert_eq!(root.classes(), vec!["dark".to_owned()]);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn detached_environment_defaults_and_touches_nothing() {
    let store = ThemeStore::load(&Environment::detached(), &StoreConfig::default()).unwrap();
    assert_eq!(store.get(), Theme::Dark);
    store.set(Theme::Light);
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn configured_key_and_default_are_used() {
    let storage = MemoryStorage::new();
    let root = MemoryClassList::new();
    let config = StoreConfig::default()
        .with_key_prefix("app")
        .with_default_theme(Theme::Light);
    let store = ThemeStore::load(&browser_env(&storage, &root), &config).unwrap();
    assert_eq!(store.get(), Theme::Light);
    assert_eq!(store.key(), "app_theme");
    assert_eq!(storage.get_item("app_theme").unwrap().as_deref(), Some("light"));
    assert!(!storage.contains_key("theme"));
}

// =============================================================
// ThemeStore: changes
// =============================================================

#[test]
fn set_persists_exact_name_and_single_class() {
    for theme in [Theme::Light, Theme::Dark] {
        let storage = MemoryStorage::new();
        let root = MemoryClassList::new();
        let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();

        store.set(theme);
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some(theme.as_str()));
        assert_eq!(root.classes(), vec![theme.as_str().to_owned()]);
    }
}

#[test]
fn class_swap_preserves_unrelated_classes() {
    let storage = MemoryStorage::new();
    let root = MemoryClassList::new();
    root.add_class("no-js").unwrap();
    let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();

    store.set(Theme::Light);
    assert!(root.contains("no-js"));
    assert!(root.contains("light"));
    assert!(!root.contains("dark"));
}

#[test]
fn toggle_flips_and_double_toggle_restores() {
    let storage = MemoryStorage::new();
    let root = MemoryClassList::new();
    let store = ThemeStore::load(&browser_env(&storage, &root), &StoreConfig::default()).unwrap();

    store.toggle();
    assert_eq!(store.get(), Theme::Light);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));

    store.toggle();
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(root.classes(), vec!["dark".to_owned()]);
}

#[test]
fn reload_sees_last_written_theme() {
    let storage = MemoryStorage::new();
    let root = MemoryClassList::new();
    let env = browser_env(&storage, &root);
    ThemeStore::load(&env, &StoreConfig::default()).unwrap().set(Theme::Light);

    let reloaded = ThemeStore::load(&env, &StoreConfig::default()).unwrap();
    assert_eq!(reloaded.get(), Theme::Light);
}

#[test]
fn subscribers_observe_toggles() {
    let store = ThemeStore::load(&Environment::detached(), &StoreConfig::default()).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |t| sink.lock().unwrap().push(*t));

    store.toggle();
    assert!(store.unsubscribe(id));
    store.toggle();
    assert_eq!(*seen.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
}
