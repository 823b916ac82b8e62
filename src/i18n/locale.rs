//! Environment-reported preferred language.
//!
//! Detection order:
//! 1. `SITE_BROWSER_LANG` environment variable (debugging override)
//! 2. System locale via `sys-locale`
//!
//! The reported value is used verbatim; matching it against the supported
//! set is the resolver's job and is an exact comparison.

/// Environment variable overriding the detected system locale.
pub const BROWSER_LANG_VAR: &str = "SITE_BROWSER_LANG";

/// Read the preferred language the environment reports, if any.
///
/// # Returns
/// * `Some(language)` with the override or system locale, used verbatim
/// * `None` when neither reports a (non-empty) value
pub fn browser_language() -> Option<String> {
    if let Ok(lang) = std::env::var(BROWSER_LANG_VAR) {
        if !lang.is_empty() {
            return Some(lang);
        }
    }

    sys_locale::get_locale().filter(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_override_wins() {
        std::env::set_var(BROWSER_LANG_VAR, "fr");

        assert_eq!(browser_language().as_deref(), Some("fr"));

        std::env::remove_var(BROWSER_LANG_VAR);
    }

    #[test]
    #[serial]
    fn test_empty_override_is_ignored() {
        std::env::set_var(BROWSER_LANG_VAR, "");

        // Falls through to the system locale; whatever that reports, it is
        // never the empty string.
        assert_ne!(browser_language().as_deref(), Some(""));

        std::env::remove_var(BROWSER_LANG_VAR);
    }

    #[test]
    #[serial]
    fn test_never_reports_empty() {
        std::env::remove_var(BROWSER_LANG_VAR);

        if let Some(lang) = browser_language() {
            assert!(!lang.is_empty());
        }
    }
}
