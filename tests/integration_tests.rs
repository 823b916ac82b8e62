//! Integration tests for the language resolver.
//!
//! These tests drive full resolution passes through the public API with the
//! file-backed preference store, covering the complete decision procedure
//! the way the binaries exercise it: configuration in, one pass, persisted
//! preference and path rewrite out.

use tempfile::TempDir;

use lang_select::config::SiteConfig;
use lang_select::i18n::SupportedLanguages;
use lang_select::navigation::{InMemoryNavigator, ROOT_PATH};
use lang_select::resolver::{self, Resolution};
use lang_select::storage::{FileStore, PreferenceStore};

// ==================== Test Helpers ====================

/// Create a pass configuration for a site serving English at `/` and
/// French under `/fr/`.
fn site_config(active_lang: &str, store_file: &str) -> SiteConfig {
    SiteConfig {
        active_lang: active_lang.to_string(),
        supported_langs: SupportedLanguages::from_json(r#"["en","fr"]"#),
        default_lang: "en".to_string(),
        current_path: ROOT_PATH.to_string(),
        store_file: store_file.to_string(),
    }
}

fn store_path(dir: &TempDir) -> String {
    dir.path()
        .join("lang_store.json")
        .to_str()
        .expect("utf-8 path")
        .to_string()
}

// ==================== First-Visit Tests ====================

#[test]
fn test_first_visit_adopts_supported_browser_language() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("en", &store_path(&dir));

    let mut store = FileStore::new(&config.store_file);
    let mut nav = InMemoryNavigator::at(ROOT_PATH);

    let resolution = resolver::resolve(&config, Some("fr"), &mut store, &mut nav);

    assert_eq!(resolution.navigate_to.as_deref(), Some("/fr/"));
    assert_eq!(nav.path(), "/fr/");
    assert_eq!(store.get().expect("get").as_deref(), Some("fr"));
}

#[test]
fn test_first_visit_with_unsupported_browser_language_settles_on_default() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("en", &store_path(&dir));

    let mut store = FileStore::new(&config.store_file);
    let mut nav = InMemoryNavigator::at(ROOT_PATH);

    let resolution = resolver::resolve(&config, Some("de"), &mut store, &mut nav);

    // Already at the root; the preference is persisted, nothing navigates
    assert_eq!(resolution.navigate_to, None);
    assert_eq!(nav.path(), ROOT_PATH);
    assert_eq!(store.get().expect("get").as_deref(), Some("en"));
}

// ==================== Returning-Visitor Tests ====================

#[test]
fn test_returning_visitor_is_sent_to_their_variant() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("en", &store_path(&dir));

    let mut store = FileStore::new(&config.store_file);
    store.set("fr").expect("seed store");

    let mut nav = InMemoryNavigator::at(ROOT_PATH);
    let resolution = resolver::resolve(&config, Some("de"), &mut store, &mut nav);

    assert_eq!(resolution.navigate_to.as_deref(), Some("/fr/"));
    assert_eq!(store.get().expect("get").as_deref(), Some("fr"));
}

#[test]
fn test_returning_visitor_on_the_right_page_is_left_alone() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("fr", &store_path(&dir));

    let mut store = FileStore::new(&config.store_file);
    store.set("fr").expect("seed store");
    let file_before =
        std::fs::read_to_string(&config.store_file).expect("store file should exist");

    let mut nav = InMemoryNavigator::at(ROOT_PATH);
    let resolution = resolver::resolve(&config, Some("de"), &mut store, &mut nav);

    assert_eq!(resolution.navigate_to, None);
    assert_eq!(nav.path(), ROOT_PATH);

    // The store file was not rewritten
    let file_after = std::fs::read_to_string(&config.store_file).expect("read");
    assert_eq!(file_before, file_after);
}

#[test]
fn test_stale_stored_language_is_cleared_and_replaced() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("en", &store_path(&dir));

    // A language the site stopped serving
    let mut store = FileStore::new(&config.store_file);
    store.set("es").expect("seed store");

    let mut nav = InMemoryNavigator::at(ROOT_PATH);
    let resolution = resolver::resolve(&config, Some("fr"), &mut store, &mut nav);

    assert_eq!(resolution.navigate_to.as_deref(), Some("/fr/"));
    assert_eq!(store.get().expect("get").as_deref(), Some("fr"));
}

// ==================== Page-Load Cycle Tests ====================

#[test]
fn test_reload_after_navigation_settles() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("en", &store_path(&dir));

    let mut store = FileStore::new(&config.store_file);
    let mut nav = InMemoryNavigator::at(ROOT_PATH);

    // First load: the visitor's French preference is adopted
    let first = resolver::resolve(&config, Some("fr"), &mut store, &mut nav);
    assert_eq!(first.navigate_to.as_deref(), Some("/fr/"));

    // The script runs again on the page it navigated to
    let reload_config = SiteConfig {
        active_lang: "fr".to_string(),
        current_path: nav.path().to_string(),
        ..config
    };
    let second = resolver::resolve(&reload_config, Some("fr"), &mut store, &mut nav);

    assert_eq!(second, Resolution::default());
    assert_eq!(nav.path(), "/fr/");
    assert_eq!(store.get().expect("get").as_deref(), Some("fr"));
}

#[test]
fn test_non_root_page_never_touches_the_store() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("fr", &store_path(&dir));

    let mut store = FileStore::new(&config.store_file);
    let mut nav = InMemoryNavigator::at("/fr/articles/");

    let resolution = resolver::resolve(&config, Some("fr"), &mut store, &mut nav);

    assert_eq!(resolution, Resolution::default());
    assert_eq!(nav.path(), "/fr/articles/");
    assert!(!std::path::Path::new(&config.store_file).exists());
}

// ==================== Store Degradation Tests ====================

#[test]
fn test_corrupt_store_file_degrades_and_heals() {
    let dir = TempDir::new().expect("temp dir");
    let config = site_config("en", &store_path(&dir));
    std::fs::write(&config.store_file, "{ not json").expect("write corrupt store");

    let mut store = FileStore::new(&config.store_file);
    let mut nav = InMemoryNavigator::at(ROOT_PATH);

    // The corrupt value reads as "no stored preference", the pass completes,
    // and the write replaces the broken file
    let resolution = resolver::resolve(&config, Some("fr"), &mut store, &mut nav);

    assert_eq!(resolution.navigate_to.as_deref(), Some("/fr/"));
    assert_eq!(store.get().expect("get").as_deref(), Some("fr"));
}
