//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor, but reqwest needs a tokio reactor.
//! HTTP futures are shipped to a process-wide tokio runtime and their
//! result is awaited from the GPUI task.
//!
//! ## Pattern
//!
//! ```text
//! GPUI foreground task
//!       │
//!       ▼
//! run_in_tokio(client.get_books())
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("booktrack-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and await its result
///
/// Used for the one-shot books request; the caller may be any executor.
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
