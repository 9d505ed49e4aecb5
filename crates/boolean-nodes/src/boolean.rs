//! Plumbing shared by boolean combinators
//!
//! Combinators differ only in how they fold their operands. What they share
//! is here: the parallelism mode and an ordered, validated operand list.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{NodeError, Result};
use crate::node::BooleanNode;

/// Minimum number of operands a boolean combinator accepts
pub const MIN_OPERANDS: usize = 2;

/// When a combinator's operands get started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// All operands run concurrently; results are inspected in order
    #[default]
    Eager,
    /// Each operand starts only after the previous one has been inspected
    Lazy,
}

impl Parallelism {
    pub fn is_lazy(self) -> bool {
        matches!(self, Self::Lazy)
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager => write!(f, "eager"),
            Self::Lazy => write!(f, "lazy"),
        }
    }
}

/// Ordered, immutable operand list with at least `MIN_OPERANDS` entries
#[derive(Clone)]
pub struct BooleanOperands {
    nodes: Arc<[BooleanNode]>,
}

impl BooleanOperands {
    /// Copy `operands` into an immutable list, checking arity
    ///
    /// `name` is the combinator being built and only appears in the error.
    pub fn new(name: &str, operands: impl IntoIterator<Item = BooleanNode>) -> Result<Self> {
        let nodes: Arc<[BooleanNode]> = operands.into_iter().collect();
        if nodes.len() < MIN_OPERANDS {
            return Err(NodeError::InvalidArity {
                name: name.to_string(),
                expected: MIN_OPERANDS,
                actual: nodes.len(),
            });
        }
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BooleanNode> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[BooleanNode] {
        &self.nodes
    }

    /// Operand names in evaluation order
    pub fn names(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.name().to_string()).collect()
    }
}

impl fmt::Debug for BooleanOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ValueNode;
    use std::sync::Arc;

    fn named(name: &str, value: bool) -> BooleanNode {
        Arc::new(ValueNode::named(name, value))
    }

    #[test]
    fn test_operands_preserve_order() {
        let operands =
            BooleanOperands::new("Or", vec![named("a", false), named("b", true), named("c", false)])
                .unwrap();
        assert_eq!(operands.len(), 3);
        assert_eq!(operands.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_operands_are_copied() {
        let mut source = vec![named("a", false), named("b", true)];
        let operands = BooleanOperands::new("Or", source.clone()).unwrap();

        source.push(named("c", true));
        source.swap(0, 1);

        assert_eq!(operands.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_too_few_operands() {
        let err = BooleanOperands::new("Or", vec![named("a", true)]).unwrap_err();
        assert_eq!(
            err,
            NodeError::InvalidArity {
                name: "Or".to_string(),
                expected: 2,
                actual: 1,
            }
        );

        let err = BooleanOperands::new("Or", Vec::new()).unwrap_err();
        assert!(matches!(err, NodeError::InvalidArity { actual: 0, .. }));
    }

    #[test]
    fn test_parallelism_serde() {
        assert_eq!(serde_json::to_string(&Parallelism::Lazy).unwrap(), "\"lazy\"");
        let mode: Parallelism = serde_json::from_str("\"eager\"").unwrap();
        assert_eq!(mode, Parallelism::Eager);
        assert_eq!(Parallelism::default(), Parallelism::Eager);
        assert!(Parallelism::Lazy.is_lazy());
    }
}
