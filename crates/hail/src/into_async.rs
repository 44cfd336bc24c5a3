// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

//! [`AsyncAdapter`] exposes a blocking [`Greeter`] as an [`AsyncGreeter`].

use std::sync::Arc;

use async_channel::Receiver;
use tokio::task::spawn_blocking;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::blocking::Greeter;
use crate::error::Error;
use crate::non_blocking::AsyncGreeter;

/// Adapts a blocking [`Greeter`] into the channel-based [`AsyncGreeter`]
/// contract.
///
/// Each call runs the blocking delegate on a dedicated blocking worker and
/// races its completion against the caller's cancellation token in a
/// forwarding task. Cancellation is cooperative: it decides which branch of
/// the race is taken, but a delegate call already in flight runs to completion
/// on its blocking thread (its result is then discarded).
///
/// The adapter holds nothing but the shared delegate; every call is
/// independent.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use hail::{AsyncAdapter, AsyncGreeter, CancellationToken, LocalGreeter};
///
/// # #[tokio::main(flavor = "multi_thread")]
/// # async fn main() {
/// let greeter = AsyncAdapter::new(LocalGreeter::new(Duration::from_millis(10)));
/// let cancel = CancellationToken::new();
///
/// let greeting = greeter.say_hello(&cancel, "Alice").recv().await;
/// assert_eq!(greeting.unwrap(), "Hello Alice!");
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncAdapter<G> {
    inner: Arc<G>,
}

impl<G> AsyncAdapter<G> {
    /// Wraps `inner`, taking shared ownership of it.
    pub fn new(inner: G) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl<G> Clone for AsyncAdapter<G> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<G> AsyncGreeter for AsyncAdapter<G>
where
    G: Greeter + Send + Sync + 'static,
{
    fn say_hello(&self, cancel: &CancellationToken, name: &str) -> Receiver<String> {
        let (tx, rx) = async_channel::bounded(1);
        let cancel = cancel.clone();
        let inner = Arc::clone(&self.inner);
        let name = name.to_owned();
        let done = spawn_blocking(move || inner.say_hello(&name));

        drop(tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {
                    trace!("hello adapter cancelled, closing without emission");
                }
                result = done => {
                    let greeting = result.expect("blocking greeter panicked");
                    let _ = tx.send(greeting).await;
                }
            }
        }));

        rx
    }

    fn say_locale_hello(
        &self,
        cancel: &CancellationToken,
        name: &str,
        lang: &str,
    ) -> (Receiver<String>, Receiver<Error>) {
        let (msg_tx, msg_rx) = async_channel::bounded(1);
        let (err_tx, err_rx) = async_channel::bounded(1);
        let cancel = cancel.clone();
        let inner = Arc::clone(&self.inner);
        let name = name.to_owned();
        let lang = lang.to_owned();
        let done = spawn_blocking(move || inner.say_locale_hello(&name, &lang));

        drop(tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {
                    let _ = err_tx.send(Error::Cancelled).await;
                }
                result = done => match result.expect("blocking greeter panicked") {
                    Ok(greeting) => {
                        let _ = msg_tx.send(greeting).await;
                    }
                    Err(err) => {
                        let _ = err_tx.send(err).await;
                    }
                },
            }
        }));

        (msg_rx, err_rx)
    }

    /// Note: the wrapped contract is batch-shaped, not streaming. The worker
    /// drains the whole input channel first, makes one batch call, then
    /// re-emits every outcome individually; nothing is delivered until the
    /// entire batch completes, so pipelining is not preserved across this
    /// adapter direction.
    fn say_multi_lang_hello(
        &self,
        cancel: &CancellationToken,
        name: &str,
        langs: Receiver<String>,
    ) -> (Receiver<String>, Receiver<Error>) {
        let (msg_tx, msg_rx) = async_channel::bounded(1);
        let (err_tx, err_rx) = async_channel::bounded(1);
        let cancel = cancel.clone();
        let inner = Arc::clone(&self.inner);
        let name = name.to_owned();

        drop(tokio::spawn(async move {
            let mut batch = Vec::new();
            while let Ok(lang) = langs.recv().await {
                batch.push(lang);
            }
            trace!(%name, batch_len = batch.len(), "multi-lang input drained, invoking delegate");

            let done = spawn_blocking(move || {
                let refs: Vec<&str> = batch.iter().map(String::as_str).collect();
                inner.say_multi_lang_hello(&name, &refs)
            });

            let (greetings, errors) = tokio::select! {
                () = cancel.cancelled() => {
                    let _ = err_tx.send(Error::Cancelled).await;
                    return;
                }
                result = done => result.expect("blocking greeter panicked"),
            };

            // Intra-stream order is the contract; errors are re-emitted before
            // greetings, and each emit still races cancellation so a slow
            // consumer cannot pin a cancelled worker forever.
            for err in errors {
                tokio::select! {
                    () = cancel.cancelled() => {
                        let _ = err_tx.send(Error::Cancelled).await;
                        return;
                    }
                    sent = err_tx.send(err) => {
                        if sent.is_err() {
                            return;
                        }
                    }
                }
            }
            for greeting in greetings {
                tokio::select! {
                    () = cancel.cancelled() => {
                        let _ = err_tx.send(Error::Cancelled).await;
                        return;
                    }
                    sent = msg_tx.send(greeting) => {
                        if sent.is_err() {
                            return;
                        }
                    }
                }
            }
        }));

        (msg_rx, err_rx)
    }
}
