// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

//! The channel-based [`AsyncGreeter`] contract and its reference
//! implementation.
//!
//! Every operation returns immediately and hands back one or two
//! minimally-buffered channels; a single worker task per call produces the
//! terminal events. Channels close when the worker drops its sender ends, so
//! "closed without a value" is itself a signal (an aborted `say_hello`).

use std::time::Duration;

use async_channel::Receiver;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::error::Error;

/// The channel-based greeter contract.
///
/// Operations never block the calling thread; each spawns one worker that
/// observes the caller-owned `cancel` token at every wait point. Cancellation
/// is cooperative: a computation already in flight is not interrupted, only
/// the worker's next wait observes the token.
pub trait AsyncGreeter {
    /// Greets `name` in the default language on the returned channel.
    ///
    /// The worker waits out the processing delay (or cancellation), then emits
    /// exactly one greeting and closes the channel. If cancellation wins the
    /// race, the channel closes without emitting.
    fn say_hello(&self, cancel: &CancellationToken, name: &str) -> Receiver<String>;

    /// Greets `name` in the language identified by `lang`.
    ///
    /// Exactly one of the two channels delivers a value; the other closes
    /// empty. Cancellation is delivered as [`Error::Cancelled`] on the error
    /// channel.
    fn say_locale_hello(
        &self,
        cancel: &CancellationToken,
        name: &str,
        lang: &str,
    ) -> (Receiver<String>, Receiver<Error>);

    /// Greets `name` once per language received on `langs`, streaming the
    /// outcomes.
    ///
    /// The worker loops: wait for the next input language or cancellation,
    /// process it, emit onto whichever output channel applies, and go back to
    /// waiting. When `langs` closes, both output channels close; on
    /// cancellation the worker emits one [`Error::Cancelled`] and terminates.
    ///
    /// # Deadlock hazard
    ///
    /// The output channels are rendezvous-like: the worker blocks on each emit
    /// until a consumer reads it. Callers must close `langs` when done feeding
    /// it and must drain **both** output channels concurrently while feeding.
    /// A consumer that drains only one output (or never closes the input)
    /// leaves the worker blocked on an emit that is never read and its own
    /// feed blocked on a send that is never received. This is inherent to the
    /// backpressure contract, not a bug in any one implementation.
    fn say_multi_lang_hello(
        &self,
        cancel: &CancellationToken,
        name: &str,
        langs: Receiver<String>,
    ) -> (Receiver<String>, Receiver<Error>);
}

/// The task-per-call reference [`AsyncGreeter`].
///
/// Workers are Tokio tasks; construction fixes the artificial processing delay
/// applied before each lookup. Must be used where a Tokio runtime is current.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use hail::{AsyncGreeter, CancellationToken, TaskGreeter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let greeter = TaskGreeter::new(Duration::from_millis(10));
/// let cancel = CancellationToken::new();
///
/// let greeting = greeter.say_hello(&cancel, "Alice").recv().await;
/// assert_eq!(greeting.unwrap(), "Hello Alice!");
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TaskGreeter {
    delay: Duration,
}

impl TaskGreeter {
    /// Creates a greeter whose workers wait for `delay` before each lookup.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Waits out the processing delay, unless cancellation fires first.
    async fn pause(delay: Duration, cancel: &CancellationToken) -> bool {
        tokio::select! {
            () = cancel.cancelled() => false,
            () = sleep(delay) => true,
        }
    }
}

impl AsyncGreeter for TaskGreeter {
    fn say_hello(&self, cancel: &CancellationToken, name: &str) -> Receiver<String> {
        let (tx, rx) = async_channel::bounded(1);
        let cancel = cancel.clone();
        let delay = self.delay;
        let name = name.to_owned();

        drop(tokio::spawn(async move {
            if !Self::pause(delay, &cancel).await {
                trace!(%name, "hello worker cancelled, closing without emission");
                return;
            }
            // Default-language lookups are assumed to succeed; a failure is
            // discarded, matching the blocking contract.
            let greeting = lingo::greeting(&name, lingo::DEFAULT_LANG).unwrap_or_default();
            let _ = tx.send(greeting).await;
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
        let delay = self.delay;
        let name = name.to_owned();
        let lang = lang.to_owned();

        drop(tokio::spawn(async move {
            if !Self::pause(delay, &cancel).await {
                trace!(%name, %lang, "locale worker cancelled");
                let _ = err_tx.send(Error::Cancelled).await;
                return;
            }
            match lingo::greeting(&name, &lang) {
                Ok(greeting) => {
                    let _ = msg_tx.send(greeting).await;
                }
                Err(err) => {
                    let _ = err_tx.send(err.into()).await;
                }
            }
        }));

        (msg_rx, err_rx)
    }

    fn say_multi_lang_hello(
        &self,
        cancel: &CancellationToken,
        name: &str,
        langs: Receiver<String>,
    ) -> (Receiver<String>, Receiver<Error>) {
        let (msg_tx, msg_rx) = async_channel::bounded(1);
        let (err_tx, err_rx) = async_channel::bounded(1);
        let cancel = cancel.clone();
        let delay = self.delay;
        let name = name.to_owned();

        drop(tokio::spawn(async move {
            loop {
                let lang = tokio::select! {
                    () = cancel.cancelled() => {
                        trace!(%name, "multi-lang worker cancelled while waiting for input");
                        let _ = err_tx.send(Error::Cancelled).await;
                        return;
                    }
                    lang = langs.recv() => match lang {
                        Ok(lang) => lang,
                        // Input exhausted; dropping the senders closes both
                        // output channels.
                        Err(_) => return,
                    },
                };

                if !Self::pause(delay, &cancel).await {
                    trace!(%name, %lang, "multi-lang worker cancelled while processing");
                    let _ = err_tx.send(Error::Cancelled).await;
                    return;
                }

                // Emitting blocks this worker until a consumer reads the
                // value; see the trait-level hazard note. A send only fails
                // once the consumer has dropped the receiver, at which point
                // there is nobody left to produce for.
                let delivered = match lingo::greeting(&name, &lang) {
                    Ok(greeting) => msg_tx.send(greeting).await.is_ok(),
                    Err(err) => err_tx.send(err.into()).await.is_ok(),
                };
                if !delivered {
                    trace!(%name, "multi-lang consumer went away, terminating");
                    return;
                }
            }
        }));

        (msg_rx, err_rx)
    }
}
