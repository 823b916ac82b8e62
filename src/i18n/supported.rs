//! Supported-language set: the site's known locales.
//!
//! The page supplies its supported languages as a JSON-encoded array of
//! language codes. A payload that fails to parse is configuration noise, not
//! an error: it yields the empty set, and an empty set makes the resolver
//! skip the pass.

use tracing::warn;

/// The set of language codes a site serves.
///
/// Membership is an exact string comparison. The reported browser language
/// is matched verbatim, so a site that wants to serve `en-US` visitors its
/// `en` variant lists both codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedLanguages {
    codes: Vec<String>,
}

impl SupportedLanguages {
    /// Create a set from explicit language codes.
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// Parse the JSON-encoded array the page supplies.
    ///
    /// Anything that is not a JSON array of strings (malformed JSON, a
    /// non-array payload, mixed element types) is treated as the empty set.
    /// This never raises: a broken payload must not break the page.
    ///
    /// # Arguments
    /// * `payload` - The raw attribute value, e.g. `["en","fr"]`
    ///
    /// # Returns
    /// The parsed set, or the empty set for anything unparsable.
    pub fn from_json(payload: &str) -> Self {
        if payload.is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<Vec<String>>(payload) {
            Ok(codes) => Self { codes },
            Err(e) => {
                warn!("Ignoring malformed supported-languages payload: {}", e);
                Self::default()
            }
        }
    }

    /// Check whether a language code is in the set (exact match).
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The language codes, in the order the page listed them.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}
