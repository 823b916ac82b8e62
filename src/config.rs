use crate::i18n::SupportedLanguages;
use crate::navigation::ROOT_PATH;

/// Configuration for one resolution pass.
///
/// The first three fields are the page-supplied inputs (the static site
/// generator emits them alongside each page); the rest describe the host
/// environment the pass runs in.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    // Page inputs
    pub active_lang: String,
    pub supported_langs: SupportedLanguages,
    pub default_lang: String,

    // Host environment
    pub current_path: String,
    pub store_file: String,
}

impl SiteConfig {
    /// Load the configuration from environment variables.
    ///
    /// Missing page inputs load as empty values rather than errors: an
    /// incomplete configuration means "not enough information to resolve",
    /// and the resolver skips the pass instead of failing it.
    pub fn from_env() -> Self {
        Self {
            active_lang: env_or_empty("SITE_ACTIVE_LANG"),
            supported_langs: SupportedLanguages::from_json(&env_or_empty("SITE_SUPPORTED_LANGS")),
            default_lang: env_or_empty("SITE_DEFAULT_LANG"),

            current_path: std::env::var("SITE_CURRENT_PATH")
                .unwrap_or_else(|_| ROOT_PATH.to_string()),
            store_file: std::env::var("SITE_LANG_STORE")
                .unwrap_or_else(|_| "data/lang_store.json".to_string()),
        }
    }
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
