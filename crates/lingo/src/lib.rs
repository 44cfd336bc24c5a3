// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

#![warn(missing_docs)]

//! Greeting text lookup for a fixed set of language codes.
//!
//! This crate is a pure, stateless collaborator: given a name and a
//! two-letter language code it either produces the greeting text for that
//! language or reports that the code is unsupported. It holds no state,
//! performs no I/O, and never blocks.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo::{DEFAULT_LANG, greeting};
//!
//! assert_eq!(greeting("Alice", DEFAULT_LANG).unwrap(), "Hello Alice!");
//! assert_eq!(greeting("Alice", "hu").unwrap(), "Szia Alice!");
//! assert!(greeting("Alice", "xx").is_err());
//! ```

use thiserror::Error;

/// The language code used when a caller does not pick one.
pub const DEFAULT_LANG: &str = "en";

/// The language code was not recognized by [`greeting`].
///
/// Carries the offending code so callers can report which request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported lang: {lang}")]
pub struct UnsupportedLanguage {
    /// The language code that was not recognized.
    pub lang: String,
}

/// Produces the greeting text for `name` in the language identified by `lang`.
///
/// Supported codes are `en`, `fr`, `es` and `hu`; any other code fails with
/// [`UnsupportedLanguage`]. Exactly one of text or error is produced per call.
///
/// # Errors
///
/// Returns [`UnsupportedLanguage`] when `lang` is not a supported code.
///
/// # Examples
///
/// ```rust
/// assert_eq!(lingo::greeting("Alice", "fr").unwrap(), "Bonjour Alice!");
/// ```
pub fn greeting(name: &str, lang: &str) -> Result<String, UnsupportedLanguage> {
    match lang {
        "en" => Ok(format!("Hello {name}!")),
        "fr" => Ok(format!("Bonjour {name}!")),
        // The Spanish greeting has no exclamation mark; callers depend on
        // the exact text, so leave it as-is.
        "es" => Ok(format!("Hola {name}")),
        "hu" => Ok(format!("Szia {name}!")),
        _ => Err(UnsupportedLanguage { lang: lang.to_owned() }),
    }
}
