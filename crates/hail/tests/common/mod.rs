// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

//! Helpers shared by the integration test binaries.

#![allow(dead_code, reason = "not every binary uses every helper")]

use std::time::{Duration, Instant};

use hail::Error;

/// Expected outcome of a multi-language call, partitioned the way the
/// contract partitions: greetings and error messages as two independently
/// appended collections in call order.
pub fn expected_partition(name: &str, langs: &[&str]) -> (Vec<String>, Vec<String>) {
    let mut greetings = Vec::new();
    let mut errors = Vec::new();
    for lang in langs {
        match lingo::greeting(name, lang) {
            Ok(greeting) => greetings.push(greeting),
            Err(err) => errors.push(err.to_string()),
        }
    }
    (greetings, errors)
}

/// Errors compare by message, both here and against the Vec of expectations.
pub fn error_messages(errors: &[Error]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Alive-task count of the current runtime, the baseline for leak checks.
pub fn alive_tasks() -> usize {
    tokio::runtime::Handle::current().metrics().num_alive_tasks()
}

/// Asserts that every worker attributable to the operation under test has
/// terminated: the runtime's alive-task count must return to `baseline`
/// within a grace period.
pub async fn assert_tasks_drained(baseline: usize) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let alive = alive_tasks();
        if alive <= baseline {
            return;
        }
        assert!(
            Instant::now() < deadline,
            "worker tasks leaked: {alive} alive, baseline was {baseline}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
