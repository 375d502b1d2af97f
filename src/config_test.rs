use super::*;

#[test]
fn default_keys_match_legacy_names() {
    let config = StoreConfig::default();
    assert_eq!(config.user_key, "user");
    assert_eq!(config.theme_key, "theme");
    assert_eq!(config.default_theme, Theme::Dark);
}

#[test]
fn key_prefix_namespaces_both_keys() {
    let config = StoreConfig::default().with_key_prefix("fleet");
    assert_eq!(config.user_key, "fleet_user");
    assert_eq!(config.theme_key, "fleet_theme");
}

#[test]
fn empty_prefix_keeps_defaults() {
    assert_eq!(StoreConfig::default().with_key_prefix(""), StoreConfig::default());
}

#[test]
fn default_theme_override() {
    let config = StoreConfig::default().with_default_theme(Theme::Light);
    assert_eq!(config.default_theme, Theme::Light);
}

#[test]
fn deserialize_fills_missing_fields_with_defaults() {
    let config: StoreConfig = serde_json::from_str(r#"{"theme_key":"ui_theme"}"#).unwrap();
    assert_eq!(config.theme_key, "ui_theme");
    assert_eq!(config.user_key, "user");
    assert_eq!(config.default_theme, Theme::Dark);
}

#[test]
fn deserialize_default_theme_by_name() {
    let config: StoreConfig = serde_json::from_str(r#"{"default_theme":"light"}"#).unwrap();
    assert_eq!(config.default_theme, Theme::Light);
}
