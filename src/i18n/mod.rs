//! Language domain types for the resolver.
//!
//! This module owns the two language-shaped concerns of a resolution pass:
//!
//! - `supported`: the site's supported-language set, parsed from the
//!   JSON-encoded payload the page supplies
//! - `locale`: the environment's reported preferred language (the
//!   "browser language" of a pass)
//!
//! # Example
//!
//! ```rust,ignore
//! use lang_select::i18n::{locale, SupportedLanguages};
//!
//! let supported = SupportedLanguages::from_json(r#"["en","fr"]"#);
//! assert!(supported.contains("fr"));
//!
//! let browser = locale::browser_language();
//! ```

pub mod locale;
mod supported;

pub use supported::SupportedLanguages;
