//! Short-circuiting disjunction of boolean nodes
//!
//! `OrNode` resolves to `true` as soon as an operand resolves `true`,
//! inspecting operands strictly left to right. The parallelism mode decides
//! when operands are started:
//!
//! - **Eager**: applying the `OrNode` applies every operand up front, so they
//!   all run concurrently. Short-circuiting then skips inspecting the rest,
//!   not running them.
//! - **Lazy**: each operand is applied only after every operand before it
//!   resolved `false`. Operands past the first `true` never run at all.
//!
//! Operand application is idempotent, so operands already applied elsewhere
//! (e.g. shared with another combinator) are never started twice.

use std::sync::Arc;

use crate::boolean::{BooleanOperands, Parallelism};
use crate::config::OrConfig;
use crate::error::{NodeError, Result};
use crate::node::{spawn_shared, BooleanNode, Node, NodeFuture, ResultCell};

/// Default name of an eager disjunction
pub const DEFAULT_NAME: &str = "Or";

/// Default name of a lazy disjunction
pub const DEFAULT_LAZY_NAME: &str = "Or-lazy";

/// Disjunction of two or more boolean nodes
#[derive(Debug)]
pub struct OrNode {
    name: String,
    operands: BooleanOperands,
    parallelism: Parallelism,
    result: ResultCell<bool>,
}

impl OrNode {
    /// Create an eager disjunction named "Or"
    pub fn create(operands: impl IntoIterator<Item = BooleanNode>) -> Result<Self> {
        Self::create_named(DEFAULT_NAME, operands)
    }

    /// Create an eager disjunction
    ///
    /// Every operand starts when this node is applied; results are then
    /// inspected left to right.
    pub fn create_named(
        name: impl Into<String>,
        operands: impl IntoIterator<Item = BooleanNode>,
    ) -> Result<Self> {
        Self::with_parallelism(name, Parallelism::Eager, operands)
    }

    /// Create a lazy disjunction named "Or-lazy"
    pub fn create_lazy(operands: impl IntoIterator<Item = BooleanNode>) -> Result<Self> {
        Self::create_lazy_named(DEFAULT_LAZY_NAME, operands)
    }

    /// Create a lazy disjunction
    ///
    /// Operands start one at a time, left to right, and only while every
    /// earlier operand resolved `false`.
    pub fn create_lazy_named(
        name: impl Into<String>,
        operands: impl IntoIterator<Item = BooleanNode>,
    ) -> Result<Self> {
        Self::with_parallelism(name, Parallelism::Lazy, operands)
    }

    /// Create a disjunction described by `config`
    pub fn from_config(
        config: &OrConfig,
        operands: impl IntoIterator<Item = BooleanNode>,
    ) -> Result<Self> {
        let name = config
            .name
            .clone()
            .unwrap_or_else(|| Self::default_name(config.parallelism).to_string());
        Self::with_parallelism(name, config.parallelism, operands)
    }

    /// Create a disjunction with an explicit mode
    ///
    /// Fails with `NodeError::InvalidArity` when given fewer than two
    /// operands. Nothing is applied here.
    pub fn with_parallelism(
        name: impl Into<String>,
        parallelism: Parallelism,
        operands: impl IntoIterator<Item = BooleanNode>,
    ) -> Result<Self> {
        let name = name.into();
        let operands = BooleanOperands::new(&name, operands)?;
        log::debug!(
            "OrNode {}: created ({} mode, operands {:?})",
            name,
            parallelism,
            operands
        );
        Ok(Self {
            name,
            operands,
            parallelism,
            result: ResultCell::new(),
        })
    }

    /// Name used when none is given for `parallelism`
    pub fn default_name(parallelism: Parallelism) -> &'static str {
        match parallelism {
            Parallelism::Eager => DEFAULT_NAME,
            Parallelism::Lazy => DEFAULT_LAZY_NAME,
        }
    }

    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    pub fn operands(&self) -> &BooleanOperands {
        &self.operands
    }

    /// Whether evaluation has started
    pub fn is_applied(&self) -> bool {
        self.result.is_started()
    }

    /// Erase the type so this node can be an operand of another combinator
    pub fn boxed(self) -> BooleanNode {
        Arc::new(self)
    }

    fn start(&self) -> NodeFuture<bool> {
        if self.parallelism == Parallelism::Eager {
            for operand in self.operands.iter() {
                let _ = operand.apply();
            }
        }
        log::debug!("OrNode {}: evaluating {} operands", self.name, self.operands.len());
        spawn_shared(&self.name, evaluate(self.name.clone(), self.operands.clone()))
    }
}

impl Node<bool> for OrNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self) -> NodeFuture<bool> {
        self.result.get_or_start(|| self.start())
    }
}

/// Fold the operands left to right, stopping at the first `true` or failure
///
/// The last operand's resolution is returned as-is.
async fn evaluate(name: String, operands: BooleanOperands) -> Result<bool> {
    let (last, leading) = operands
        .as_slice()
        .split_last()
        .ok_or_else(|| NodeError::InvalidArity {
            name: name.clone(),
            expected: crate::boolean::MIN_OPERANDS,
            actual: 0,
        })?;

    for (index, operand) in leading.iter().enumerate() {
        let value = operand.apply().await.map_err(|err| {
            log::debug!("OrNode {}: operand {} ({}) failed: {}", name, index, operand.name(), err);
            err
        })?;
        log::trace!("OrNode {}: operand {} ({}) = {}", name, index, operand.name(), value);
        if value {
            log::debug!("OrNode {}: short-circuit at operand {}", name, index);
            return Ok(true);
        }
    }

    let value = last.apply().await;
    log::debug!("OrNode {}: resolved by last operand ({}): {:?}", name, last.name(), value);
    value
}
