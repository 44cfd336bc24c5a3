// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

//! Exercising both greeter contracts and the adapters.

use std::time::Duration;

use hail::{
    AsyncAdapter, AsyncGreeter, BlockingAdapter, CancellationToken, Greeter, LocalGreeter,
    TaskGreeter,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let delay = Duration::from_millis(400);

    println!("--- blocking greeter ---");
    let blocking = LocalGreeter::new(delay);
    let outcome = tokio::task::spawn_blocking(move || {
        println!("{}", blocking.say_hello("Alice"));
        println!("{:?}", blocking.say_locale_hello("Alice", "hu"));
        println!("{:?}", blocking.say_locale_hello("Alice", "xx"));
        blocking.say_multi_lang_hello("Alice", &["en", "xx", "fr", "yy", "es"])
    })
    .await
    .unwrap();
    println!("{outcome:?}");

    println!("--- channel-based greeter ---");
    let tasked = TaskGreeter::new(delay);
    let cancel = CancellationToken::new();
    println!("{:?}", tasked.say_hello(&cancel, "Alice").recv().await);

    for lang in ["hu", "xx"] {
        let (msg_rx, err_rx) = tasked.say_locale_hello(&cancel, "Alice", lang);
        tokio::select! {
            greeting = msg_rx.recv() => println!("{greeting:?}"),
            err = err_rx.recv() => println!("{err:?}"),
        }
    }

    println!("--- round trip through both adapters ---");
    let round_trip = BlockingAdapter::new(
        AsyncAdapter::new(LocalGreeter::new(delay)),
        CancellationToken::new(),
    );
    let outcome = tokio::task::spawn_blocking(move || {
        round_trip.say_multi_lang_hello("Alice", &["hu", "en", "xx"])
    })
    .await
    .unwrap();
    println!("{outcome:?}");
}
