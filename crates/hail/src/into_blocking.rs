// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

//! [`BlockingAdapter`] exposes an [`AsyncGreeter`] as a blocking [`Greeter`].

use futures::executor::block_on;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::blocking::Greeter;
use crate::error::{Error, Result};
use crate::non_blocking::AsyncGreeter;

/// Adapts a channel-based [`AsyncGreeter`] into the blocking [`Greeter`]
/// contract.
///
/// Point operations suspend the calling thread on a select across the result
/// channel, the error channel and the cancellation token, returning whichever
/// fires first; cancellation maps to [`Error::Cancelled`]. The cancellation
/// token is supplied at construction and is caller-owned: the adapter only
/// reacts to it.
///
/// The blocking operations must be invoked where a Tokio runtime is current
/// (typically inside [`tokio::task::spawn_blocking`]), since the wrapped
/// delegate spawns its workers there. Do not call them from an async task
/// directly; they block the thread.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use hail::{BlockingAdapter, CancellationToken, Greeter, TaskGreeter};
///
/// # #[tokio::main(flavor = "multi_thread")]
/// # async fn main() {
/// let cancel = CancellationToken::new();
/// let greeter = BlockingAdapter::new(TaskGreeter::new(Duration::from_millis(10)), cancel);
///
/// let greeting = tokio::task::spawn_blocking(move || greeter.say_hello("Alice"))
///     .await
///     .unwrap();
/// assert_eq!(greeting, "Hello Alice!");
/// # }
/// ```
#[derive(Debug)]
pub struct BlockingAdapter<G> {
    inner: G,
    cancel: CancellationToken,
}

impl<G> BlockingAdapter<G> {
    /// Wraps `inner`; every operation observes `cancel`.
    pub fn new(inner: G, cancel: CancellationToken) -> Self {
        Self { inner, cancel }
    }
}

impl<G: AsyncGreeter> Greeter for BlockingAdapter<G> {
    fn say_hello(&self, name: &str) -> String {
        // A channel closed without emission is the cancelled case; it maps to
        // the empty greeting, as the contract requires.
        self.inner
            .say_hello(&self.cancel, name)
            .recv_blocking()
            .unwrap_or_default()
    }

    fn say_locale_hello(&self, name: &str, lang: &str) -> Result<String> {
        let (msg_rx, err_rx) = self.inner.say_locale_hello(&self.cancel, name, lang);

        block_on(async {
            tokio::select! {
                () = self.cancel.cancelled() => Err(Error::Cancelled),
                greeting = msg_rx.recv() => match greeting {
                    Ok(greeting) => Ok(greeting),
                    // Closed empty: the terminal event, if any, is on the
                    // other channel.
                    Err(_) => match err_rx.recv().await {
                        Ok(err) => Err(err),
                        Err(_) => Ok(String::new()),
                    },
                },
                err = err_rx.recv() => match err {
                    Ok(err) => Err(err),
                    Err(_) => match msg_rx.recv().await {
                        Ok(greeting) => Ok(greeting),
                        Err(_) => Ok(String::new()),
                    },
                },
            }
        })
    }

    fn say_multi_lang_hello(&self, name: &str, langs: &[&str]) -> (Vec<String>, Vec<Error>) {
        // Buffered to the batch size so feeding below cannot deadlock against
        // the delegate's worker. bounded() rejects a zero capacity.
        let (lang_tx, lang_rx) = async_channel::bounded(langs.len().max(1));
        let (msg_rx, err_rx) = self.inner.say_multi_lang_hello(&self.cancel, name, lang_rx);
        let cancel = self.cancel.clone();

        // Drains both output channels concurrently while this thread feeds
        // the input; a closed channel is still drained of buffered values so
        // no terminal event is lost.
        let collector = tokio::spawn(async move {
            let mut greetings = Vec::new();
            let mut errors = Vec::new();
            loop {
                // Biased: channel deliveries win over the cancellation branch,
                // so a cancellation that the delegate already surfaced on its
                // error channel is not recorded a second time.
                tokio::select! {
                    biased;
                    greeting = msg_rx.recv() => match greeting {
                        Ok(greeting) => greetings.push(greeting),
                        Err(_) => {
                            while let Ok(err) = err_rx.recv().await {
                                errors.push(err);
                            }
                            break;
                        }
                    },
                    err = err_rx.recv() => match err {
                        Ok(err) => errors.push(err),
                        Err(_) => {
                            while let Ok(greeting) = msg_rx.recv().await {
                                greetings.push(greeting);
                            }
                            break;
                        }
                    },
                    () = cancel.cancelled() => {
                        trace!("multi-lang collector observed cancellation");
                        errors.push(Error::Cancelled);
                        break;
                    }
                }
            }
            (greetings, errors)
        });

        for lang in langs {
            if lang_tx.send_blocking((*lang).to_owned()).is_err() {
                break;
            }
        }
        drop(lang_tx);

        block_on(collector).expect("collector task panicked")
    }
}
