//! Configuration for building disjunctions from data
//!
//! Lets a graph description pick the name and parallelism of an `OrNode`
//! without code changes, e.g. `{"name": "can_edit", "parallelism": "lazy"}`.

use serde::{Deserialize, Serialize};

use crate::boolean::Parallelism;
use crate::error::{NodeError, Result};

/// Settings for an `OrNode`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrConfig {
    /// Diagnostic name; defaults to "Or" or "Or-lazy" by mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When operands are started
    pub parallelism: Parallelism,
}

impl OrConfig {
    pub fn eager() -> Self {
        Self::default()
    }

    pub fn lazy() -> Self {
        Self {
            name: None,
            parallelism: Parallelism::Lazy,
        }
    }

    /// Set the diagnostic name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(NodeError::from_json)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(NodeError::from_json)
    }
}
