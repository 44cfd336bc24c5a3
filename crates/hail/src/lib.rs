// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

#![warn(missing_docs)]

//! Dual blocking/channel-based greeter contracts with bidirectional adapters.
//!
//! The same domain operation (greet a name in a language) is exposed twice:
//!
//! - [`Greeter`] - three blocking operations; the multi-language one takes a
//!   slice of codes and returns two separately-partitioned collections.
//! - [`AsyncGreeter`] - three non-blocking operations returning bounded
//!   channels; the multi-language one consumes a channel of codes and streams
//!   its outcomes, observing a caller-owned [`CancellationToken`].
//!
//! Two adapters convert between the contracts in either direction:
//!
//! - [`AsyncAdapter`] wraps a [`Greeter`] and exposes [`AsyncGreeter`] by
//!   running the blocking delegate on a worker and racing it against
//!   cancellation.
//! - [`BlockingAdapter`] wraps an [`AsyncGreeter`] and exposes [`Greeter`] by
//!   suspending the calling thread on the underlying channels.
//!
//! The reference implementations ([`LocalGreeter`], [`TaskGreeter`]) consult
//! the [`lingo`] lookup crate after an artificial processing delay fixed at
//! construction, which makes the concurrency behavior observable in tests.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use hail::{AsyncAdapter, AsyncGreeter, CancellationToken, Greeter, LocalGreeter};
//!
//! #[tokio::main(flavor = "multi_thread")]
//! async fn main() {
//!     // A blocking greeter, seen through the async contract.
//!     let greeter = AsyncAdapter::new(LocalGreeter::new(Duration::from_millis(10)));
//!     let cancel = CancellationToken::new();
//!
//!     let (greetings, errors) = {
//!         let (lang_tx, lang_rx) = async_channel::bounded(4);
//!         let (msg_rx, err_rx) = greeter.say_multi_lang_hello(&cancel, "Alice", lang_rx);
//!         for lang in ["hu", "en", "xx"] {
//!             lang_tx.send(lang.to_owned()).await.unwrap();
//!         }
//!         drop(lang_tx); // close the input; the outputs close once drained
//!
//!         let mut greetings = Vec::new();
//!         while let Ok(greeting) = msg_rx.recv().await {
//!             greetings.push(greeting);
//!         }
//!         let mut errors = Vec::new();
//!         while let Ok(err) = err_rx.recv().await {
//!             errors.push(err);
//!         }
//!         (greetings, errors)
//!     };
//!
//!     assert_eq!(greetings, ["Szia Alice!", "Hello Alice!"]);
//!     assert_eq!(errors.len(), 1);
//! }
//! ```
//!
//! # Cancellation
//!
//! Cancellation is cooperative and idempotent. Every worker races its waits
//! against the token; a computation already in flight is never interrupted,
//! only the next wait point observes the signal. A cancelled `say_hello`
//! closes its channel without emitting (the blocking side reads that as an
//! empty greeting); the other operations deliver [`Error::Cancelled`] on
//! their error channel or error slot.
//!
//! # Backpressure and the deadlock hazard
//!
//! All output channels are bounded to a single slot, so a producer blocks
//! until its consumer reads. Consumers of
//! [`AsyncGreeter::say_multi_lang_hello`] must close the input channel and
//! drain both output channels concurrently while feeding; see the method docs
//! for the failure mode when they do not.

mod blocking;
mod error;
mod into_async;
mod into_blocking;
mod non_blocking;

pub use async_channel::Receiver;
pub use blocking::{Greeter, LocalGreeter};
pub use error::{Error, Result};
pub use into_async::AsyncAdapter;
pub use into_blocking::BlockingAdapter;
pub use non_blocking::{AsyncGreeter, TaskGreeter};
pub use tokio_util::sync::CancellationToken;
