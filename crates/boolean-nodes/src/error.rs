//! Error types for boolean nodes

use thiserror::Error;

/// Result type alias using NodeError
pub type Result<T> = std::result::Result<T, NodeError>;

/// Errors that can occur while building or evaluating nodes
///
/// Errors are `Clone` because a node's result handle is shared: every
/// caller that applied the node observes the same resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// A combinator was built with too few operands
    #[error("Node '{name}' requires at least {expected} operands, got {actual}")]
    InvalidArity {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A node's computation failed
    #[error("Node '{node}' failed: {message}")]
    Failed { node: String, message: String },

    /// A node's spawned computation panicked or was aborted
    #[error("Node '{node}' aborted: {reason}")]
    Aborted { node: String, reason: String },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl NodeError {
    /// Create a failure for the named node
    pub fn failed(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            node: node.into(),
            message: message.into(),
        }
    }

    /// Create from a serde_json error
    pub fn from_json(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NodeError::InvalidArity {
            name: "Or".to_string(),
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "Node 'Or' requires at least 2 operands, got 1");

        let err = NodeError::failed("lookup", "backend unavailable");
        assert_eq!(err.to_string(), "Node 'lookup' failed: backend unavailable");
    }
}
