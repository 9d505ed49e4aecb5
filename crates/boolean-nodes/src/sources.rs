//! Leaf nodes that produce values without depending on other nodes
//!
//! - `ValueNode`: an already-known value
//! - `TaskNode`: runs a `Compute` implementation once, on first apply

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::node::{spawn_shared, BooleanNode, Node, NodeFuture, ResultCell};

/// A node whose value is known up front
#[derive(Debug)]
pub struct ValueNode<T: Clone> {
    name: String,
    value: T,
    result: ResultCell<T>,
}

impl<T> ValueNode<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(value: T) -> Self {
        Self::named("Value", value)
    }

    pub fn named(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            result: ResultCell::new(),
        }
    }
}

impl ValueNode<bool> {
    /// Wrap a constant as a boolean operand
    pub fn boxed(value: bool) -> BooleanNode {
        Arc::new(Self::new(value))
    }
}

impl<T> Node<T> for ValueNode<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self) -> NodeFuture<T> {
        self.result.get_or_start(|| {
            let value = self.value.clone();
            spawn_shared(&self.name, async move { Ok(value) })
        })
    }
}

/// Asynchronous computation backing a `TaskNode`
#[async_trait]
pub trait Compute<T>: Send + Sync + 'static {
    async fn compute(&self) -> Result<T>;
}

/// Adapter turning an async closure into a `Compute`
pub struct FnCompute<F, Fut> {
    func: F,
    _future: PhantomData<fn() -> Fut>,
}

#[async_trait]
impl<T, F, Fut> Compute<T> for FnCompute<F, Fut>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    async fn compute(&self) -> Result<T> {
        (self.func)().await
    }
}

/// A node that runs an asynchronous computation at most once
///
/// The computation starts on the first `apply`; until then the node is
/// inert, which is what lets lazy combinators skip it entirely.
pub struct TaskNode<T: Clone> {
    name: String,
    compute: Arc<dyn Compute<T>>,
    result: ResultCell<T>,
}

impl<T> TaskNode<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, compute: impl Compute<T>) -> Self {
        Self {
            name: name.into(),
            compute: Arc::new(compute),
            result: ResultCell::new(),
        }
    }

    /// Build a task node from an async closure
    pub fn from_fn<F, Fut>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self::new(
            name,
            FnCompute {
                func,
                _future: PhantomData,
            },
        )
    }

    /// Whether `apply` has been called
    pub fn is_applied(&self) -> bool {
        self.result.is_started()
    }
}

impl<T> Node<T> for TaskNode<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self) -> NodeFuture<T> {
        self.result.get_or_start(|| {
            log::debug!("TaskNode {}: starting", self.name);
            let compute = self.compute.clone();
            spawn_shared(&self.name, async move { compute.compute().await })
        })
    }
}

impl<T: Clone> std::fmt::Debug for TaskNode<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskNode")
            .field("name", &self.name)
            .field("result", &self.result)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodeError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_value_node() {
        let node = ValueNode::named("answer", 42u32);
        assert_eq!(node.name(), "answer");
        assert_eq!(node.apply().await, Ok(42));
    }

    #[tokio::test]
    async fn test_task_node_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let node = TaskNode::from_fn("count", move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }
        });

        assert!(!node.is_applied());
        assert_eq!(node.apply().await, Ok(true));
        assert_eq!(node.apply().await, Ok(true));
        assert!(node.is_applied());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_task_node_failure_is_memoized() {
        let node: TaskNode<bool> =
            TaskNode::from_fn("broken", || async { Err(NodeError::failed("broken", "no data")) });

        let first = node.apply().await;
        let second = node.apply().await;
        assert_eq!(first, Err(NodeError::failed("broken", "no data")));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_task_node_with_compute_impl() {
        struct Threshold {
            value: u32,
        }

        #[async_trait]
        impl Compute<bool> for Threshold {
            async fn compute(&self) -> Result<bool> {
                Ok(self.value > 10)
            }
        }

        let node = TaskNode::new("threshold", Threshold { value: 12 });
        assert_eq!(node.apply().await, Ok(true));
    }
}
