//! Boolean Nodes - Short-circuiting combinators for async node graphs
//!
//! This crate provides boolean combinator nodes for graphs of asynchronous
//! computations. It supports:
//!
//! - Memoized nodes: applying a node twice never runs it twice
//! - Left-to-right short-circuit disjunction (`OrNode`)
//! - Eager (all operands concurrent) and lazy (start-on-demand) parallelism
//! - Composition: a combinator is itself a node and can be an operand
//!
//! # Architecture
//!
//! - `Node`: the contract every graph node satisfies (`apply` returns a
//!   shared handle to the eventual result)
//! - `ValueNode` / `TaskNode`: leaf operands
//! - `OrNode`: the disjunction combinator
//!
//! # Example
//!
//! ```ignore
//! use boolean_nodes::{Node, OrNode, TaskNode, ValueNode};
//! use std::sync::Arc;
//!
//! let is_owner = Arc::new(TaskNode::from_fn("is_owner", || async { Ok(false) }));
//! let is_admin = Arc::new(TaskNode::from_fn("is_admin", || async { Ok(true) }));
//!
//! let can_edit = OrNode::create_lazy_named("can_edit", vec![is_owner as _, is_admin as _])?;
//! assert!(can_edit.apply().await?);
//! ```

pub mod boolean;
pub mod config;
pub mod error;
pub mod node;
pub mod or;
pub mod sources;

// Re-export key types
pub use boolean::{BooleanOperands, Parallelism};
pub use config::OrConfig;
pub use error::{NodeError, Result};
pub use node::{BooleanNode, Node, NodeFuture, ResultCell};
pub use or::OrNode;
pub use sources::{Compute, TaskNode, ValueNode};
