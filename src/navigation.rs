//! Navigation port: reading and rewriting the current page path.
//!
//! Navigating is a statement of intent to change path. The resolver never
//! touches query string or hash; it only ever rewrites the path to `/` or
//! `/<lang>/`.

use tracing::debug;

/// Path of the site root, where the default language variant is served.
pub const ROOT_PATH: &str = "/";

/// The resolver's view of the current navigation state.
pub trait NavigationPort {
    /// The path of the page currently shown.
    fn current_path(&self) -> &str;

    /// Rewrite the current path, leaving query string and hash alone.
    fn rewrite_path(&mut self, path: &str);
}

/// Path serving a language variant: `/` for the default language,
/// `/<lang>/` for every other one.
pub fn path_for_language(language: &str, default_language: &str) -> String {
    if language == default_language {
        ROOT_PATH.to_string()
    } else {
        format!("/{language}/")
    }
}

/// In-process navigator: a plain path cell.
///
/// The binaries hand the starting path in and report the rewritten path out;
/// tests assert on it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryNavigator {
    path: String,
}

impl InMemoryNavigator {
    /// Create a navigator positioned at the given path.
    pub fn at(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path after any rewrites so far.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl NavigationPort for InMemoryNavigator {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn rewrite_path(&mut self, path: &str) {
        debug!("Path rewrite: {} -> {}", self.path, path);
        self.path = path.to_string();
    }
}
