//! Blocking bridge for the `_sync` method twins.
//!
//! Every blocking method delegates to its async twin through [`block_on`],
//! so both call styles share one request-building and response-parsing
//! implementation. The runtime is created lazily on first blocking call and
//! shared for the life of the process; concurrent blocking calls from
//! multiple threads park independently while the worker drives I/O.
//!
//! Calling a `_sync` method from inside an async context panics — tokio
//! refuses to block a runtime thread. Use the async form there.

use lazy_static::lazy_static;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

lazy_static! {
    static ref RUNTIME: Runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("redis-cloud-blocking")
        .enable_all()
        .build()
        .expect("failed to build blocking runtime");
}

/// Run a future to completion on the shared runtime.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
