// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

use thiserror::Error;

/// A specialized `Result` type for greeter operations that return a greeter
/// [`Error`][enum@Error] on failure.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced by a greeter operation.
///
/// Exactly one terminal event is produced per accepted request: a greeting, one
/// of these errors, or nothing at all when a cancelled operation closes its
/// channel without emitting. There are no retries anywhere in this crate; every
/// error is terminal for the request that produced it and is surfaced once to
/// the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// We are re-packaging a lookup failure from the `lingo` collaborator
    /// without adding further details in this layer.
    #[error(transparent)]
    Lang(#[from] lingo::UnsupportedLanguage),

    /// The caller-supplied cancellation signal fired before a result was
    /// produced.
    #[error("operation cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_error_is_transparent() {
        let err = Error::from(lingo::UnsupportedLanguage { lang: "xx".into() });
        assert_eq!(err.to_string(), "unsupported lang: xx");
    }

    #[test]
    fn cancelled_message() {
        assert_eq!(Error::Cancelled.to_string(), "operation cancelled");
    }
}
