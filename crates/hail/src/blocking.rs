// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

//! The blocking [`Greeter`] contract and its reference implementation.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// The blocking greeter contract.
///
/// All three operations suspend the calling thread until their result is
/// available. The multi-language operation never fails as a whole; partial
/// failures accumulate in its errors collection.
pub trait Greeter {
    /// Greets `name` in the default language.
    ///
    /// Never fails: a lookup failure for the default language is discarded and
    /// the accumulated (empty) text is returned instead. This mirrors the
    /// long-standing behavior of the original service, where the default
    /// language is assumed supported; do not add error propagation here.
    fn say_hello(&self, name: &str) -> String;

    /// Greets `name` in the language identified by `lang`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lang`] when `lang` is not a supported code, and
    /// [`Error::Cancelled`] when a wrapped asynchronous delegate observed its
    /// cancellation signal before producing a result.
    fn say_locale_hello(&self, name: &str, lang: &str) -> Result<String>;

    /// Greets `name` once per language in `langs`, in caller order.
    ///
    /// Successes land in the first collection and failures in the second, each
    /// appended to its next available slot. The two collections are therefore
    /// **not** index-aligned with `langs`: a caller cannot recover which
    /// language produced which slot, only the relative order within each
    /// collection. Never fails as a whole.
    fn say_multi_lang_hello(&self, name: &str, langs: &[&str]) -> (Vec<String>, Vec<Error>);
}

/// The in-process reference [`Greeter`].
///
/// Consults [`lingo::greeting`] after an artificial processing delay fixed at
/// construction; the delay exists to make concurrency behavior observable in
/// tests. Holds no other state and is freely copyable.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use hail::{Greeter, LocalGreeter};
///
/// let greeter = LocalGreeter::new(Duration::ZERO);
/// assert_eq!(greeter.say_hello("Alice"), "Hello Alice!");
/// assert_eq!(greeter.say_locale_hello("Alice", "hu").unwrap(), "Szia Alice!");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalGreeter {
    delay: Duration,
}

impl LocalGreeter {
    /// Creates a greeter that sleeps for `delay` before each lookup.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Greeter for LocalGreeter {
    fn say_hello(&self, name: &str) -> String {
        self.say_locale_hello(name, lingo::DEFAULT_LANG).unwrap_or_default()
    }

    fn say_locale_hello(&self, name: &str, lang: &str) -> Result<String> {
        thread::sleep(self.delay);
        Ok(lingo::greeting(name, lang)?)
    }

    fn say_multi_lang_hello(&self, name: &str, langs: &[&str]) -> (Vec<String>, Vec<Error>) {
        let mut greetings = Vec::new();
        let mut errors = Vec::new();

        for lang in langs {
            match self.say_locale_hello(name, lang) {
                Ok(greeting) => greetings.push(greeting),
                Err(err) => {
                    debug!(%lang, %err, "greeting lookup failed");
                    errors.push(err);
                }
            }
        }

        (greetings, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETER: LocalGreeter = LocalGreeter::new(Duration::ZERO);

    #[test]
    fn hello_uses_default_language() {
        assert_eq!(GREETER.say_hello("Alice"), "Hello Alice!");
    }

    #[test]
    fn locale_hello_rejects_unknown_codes() {
        let err = GREETER.say_locale_hello("Alice", "xx").unwrap_err();
        assert_eq!(err.to_string(), "unsupported lang: xx");
    }

    #[test]
    fn multi_lang_partitions_in_call_order() {
        let (greetings, errors) = GREETER.say_multi_lang_hello("Alice", &["hu", "en", "xx"]);
        assert_eq!(greetings, ["Szia Alice!", "Hello Alice!"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "unsupported lang: xx");
    }

    #[test]
    fn multi_lang_with_no_languages() {
        let (greetings, errors) = GREETER.say_multi_lang_hello("Alice", &[]);
        assert!(greetings.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn delay_is_applied() {
        let greeter = LocalGreeter::new(Duration::from_millis(20));
        let start = std::time::Instant::now();
        let _ = greeter.say_locale_hello("Alice", "en");
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
