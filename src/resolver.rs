//! The language resolution pass.
//!
//! Runs once per page load on the site root. Decision order:
//!
//! 1. A stored preference outside the supported set is cleared and treated
//!    as absent.
//! 2. A (remaining) stored preference wins: if the page is already in that
//!    language nothing happens, otherwise the path is rewritten to its
//!    variant.
//! 3. With no stored preference, a supported browser language is adopted:
//!    persisted and navigated to.
//! 4. Otherwise the default language is persisted and the root path is the
//!    target.
//!
//! Anything missing or malformed among the inputs means "not enough
//! information": the pass is skipped, nothing is written, nothing navigates.
//! Store failures are logged and degrade to "no stored value". Re-running
//! the pass on the page it navigated to always lands in a no-action branch.

use crate::config::SiteConfig;
use crate::navigation::{path_for_language, NavigationPort, ROOT_PATH};
use crate::storage::PreferenceStore;
use tracing::{info, warn};

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The persisted preference at the end of the pass. `None` when the
    /// pass was skipped before the store was consulted.
    pub stored: Option<String>,

    /// The path a rewrite was triggered to, or `None` when the current page
    /// was already the right one (or the pass was skipped).
    pub navigate_to: Option<String>,
}

/// Run one resolution pass.
///
/// Reads the current path and the stored preference through the injected
/// ports, applies the decision order above, and performs at most one path
/// rewrite. The returned [`Resolution`] summarizes what happened.
pub fn resolve<S, N>(
    config: &SiteConfig,
    browser_language: Option<&str>,
    store: &mut S,
    nav: &mut N,
) -> Resolution
where
    S: PreferenceStore,
    N: NavigationPort,
{
    // Only for the root of the site
    if nav.current_path() != ROOT_PATH {
        info!(
            "Current path {} is not the site root, nothing to do",
            nav.current_path()
        );
        return Resolution::default();
    }

    if config.active_lang.is_empty() {
        info!("No active language supplied, skipping resolution");
        return Resolution::default();
    }
    info!("Active language: {}", config.active_lang);

    if config.supported_langs.is_empty() {
        info!("No supported languages supplied, skipping resolution");
        return Resolution::default();
    }
    info!("Supported languages: {:?}", config.supported_langs.codes());

    if config.default_lang.is_empty() {
        info!("No default language supplied, skipping resolution");
        return Resolution::default();
    }
    info!("Default language: {}", config.default_lang);

    let browser_lang = match browser_language {
        Some(lang) if !lang.is_empty() => lang,
        _ => {
            info!("No browser language reported, skipping resolution");
            return Resolution::default();
        }
    };
    info!("Browser language: {}", browser_lang);

    let mut stored_lang = match store.get() {
        Ok(value) => value,
        Err(e) => {
            warn!("Preference store unavailable ({}), treating stored language as absent", e);
            None
        }
    };
    info!("Stored language: {:?}", stored_lang);

    // A stored language the site no longer serves is stale: clear it and
    // resolve as if it had never been set.
    if let Some(lang) = stored_lang.as_deref() {
        if !config.supported_langs.contains(lang) {
            info!("Removing stored language {} since it is not supported", lang);
            if let Err(e) = store.remove() {
                warn!("Failed to clear stored language: {}", e);
            }
            stored_lang = None;
        }
    }

    if let Some(lang) = stored_lang {
        if lang == config.active_lang {
            info!("Active language {} already matches the stored preference", lang);
            return Resolution {
                stored: Some(lang),
                navigate_to: None,
            };
        }

        // The stored value is already correct; only the path needs fixing.
        let target = path_for_language(&lang, &config.default_lang);
        let navigate_to = navigate_if_needed(nav, &target);
        return Resolution {
            stored: Some(lang),
            navigate_to,
        };
    }

    if config.supported_langs.contains(browser_lang) {
        info!("Adopting browser language {}", browser_lang);
        if let Err(e) = store.set(browser_lang) {
            warn!("Failed to persist language preference: {}", e);
        }

        let target = path_for_language(browser_lang, &config.default_lang);
        let navigate_to = navigate_if_needed(nav, &target);
        return Resolution {
            stored: Some(browser_lang.to_string()),
            navigate_to,
        };
    }

    info!(
        "Browser language {} is not supported, falling back to default {}",
        browser_lang, config.default_lang
    );
    if let Err(e) = store.set(&config.default_lang) {
        warn!("Failed to persist language preference: {}", e);
    }

    let navigate_to = navigate_if_needed(nav, ROOT_PATH);
    Resolution {
        stored: Some(config.default_lang.clone()),
        navigate_to,
    }
}

/// Rewrite the path to `target` unless the page is already there.
fn navigate_if_needed<N: NavigationPort>(nav: &mut N, target: &str) -> Option<String> {
    if nav.current_path() == target {
        info!("Already at {}, no navigation needed", target);
        None
    } else {
        info!("Navigating to {}", target);
        nav.rewrite_path(target);
        Some(target.to_string())
    }
}
