//! Language-preference resolution for a static multi-language website.
//!
//! The site serves its default language at `/` and every other language
//! variant under `/<lang>/`. On each visit to the site root, one resolution
//! pass decides which variant the visitor should see (persisted preference
//! first, then the environment's reported language, then the site default)
//! and rewrites the page path when the current page is not the right one.
//!
//! The decision procedure itself lives in [`resolver`] and is pure apart
//! from two injected side channels: a [`storage::PreferenceStore`] for the
//! persisted preference and a [`navigation::NavigationPort`] for the current
//! path. The binaries wire real adapters to those ports; tests wire
//! in-memory ones.

pub mod config;
pub mod i18n;
pub mod navigation;
pub mod resolver;
pub mod storage;
