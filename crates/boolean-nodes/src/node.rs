//! The node contract shared by every computation in a graph
//!
//! A node is a unit of asynchronous work. Applying it returns a handle to
//! its eventual result; applying it again returns the same handle without
//! running the work a second time.
//!
//! # Key Concepts
//!
//! - **Handle**: `NodeFuture<T>` is a cloneable shared future, so any number
//!   of callers can await the same resolution
//! - **Memoization**: `ResultCell<T>` is a single-assignment slot holding the
//!   handle created by the first `apply`
//! - **Started on apply**: work is spawned onto the current tokio runtime, so
//!   an applied node makes progress even when nobody is awaiting it yet

use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};

use futures_util::future::{BoxFuture, FutureExt, Shared};

use crate::error::{NodeError, Result};

/// Shared handle to a node's eventual result
pub type NodeFuture<T> = Shared<BoxFuture<'static, Result<T>>>;

/// Type-erased boolean operand
pub type BooleanNode = Arc<dyn Node<bool>>;

/// A unit of asynchronous computation in a node graph
pub trait Node<T>: Send + Sync {
    /// Human-readable name used in logs and errors
    fn name(&self) -> &str;

    /// Start the node (if not already started) and return its result handle
    ///
    /// Must be idempotent: repeated calls return clones of the same handle.
    fn apply(&self) -> NodeFuture<T>;
}

/// Single-assignment slot for a node's result handle
pub struct ResultCell<T> {
    handle: OnceLock<NodeFuture<T>>,
}

impl<T: Clone> ResultCell<T> {
    pub fn new() -> Self {
        Self {
            handle: OnceLock::new(),
        }
    }

    /// Return the stored handle, creating it with `start` on first use
    ///
    /// `start` runs at most once even when several threads race here.
    pub fn get_or_start(&self, start: impl FnOnce() -> NodeFuture<T>) -> NodeFuture<T> {
        self.handle.get_or_init(start).clone()
    }

    /// Whether the handle has been created
    pub fn is_started(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl<T: Clone> Default for ResultCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ResultCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCell")
            .field("started", &self.handle.get().is_some())
            .finish()
    }
}

/// Start `future` for the named node and wrap it in a shared handle
///
/// Inside a tokio runtime the future is spawned immediately. Outside one it
/// runs on the first poll of the handle instead.
pub fn spawn_shared<T, F>(node: &str, future: F) -> NodeFuture<T>
where
    T: Clone + Send + Sync + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        log::trace!("No tokio runtime for node '{}', deferring to first poll", node);
        return future.boxed().shared();
    };

    let node = node.to_string();
    let task = runtime.spawn(future);
    async move {
        match task.await {
            Ok(result) => result,
            Err(err) => Err(NodeError::Aborted {
                node,
                reason: err.to_string(),
            }),
        }
    }
    .boxed()
    .shared()
}
