// SPDX-License-Identifier: MPL-2.0

//! Shared async runtime.
//!
//! Hover handling is single-threaded: timers, fetch continuations and popup
//! writes all run interleaved on one event loop, so no two of them ever touch
//! the popup at the same time.

use once_cell::sync::Lazy;
use std::future::Future;
use tokio::runtime::Runtime;

static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .thread_name("pdga-profiler")
        .build()
        .expect("failed to create async runtime")
});

/// Execute a future on the shared runtime, blocking until completion.
pub fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
