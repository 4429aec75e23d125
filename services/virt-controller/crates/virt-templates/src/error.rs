use std::fmt;

use thiserror::Error;

/// Which end of a migration a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Source,
    Target,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Source => f.write_str("source"),
            NodeRole::Target => f.write_str("target"),
        }
    }
}

/// Errors returned by template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The node reports neither a host name nor an internal IP.
    #[error("migration {role} node is unreachable")]
    UnreachableNode { role: NodeRole },
}

impl TemplateError {
    /// Whether the same call can succeed once cluster state changes
    /// (for example after the node status is refreshed).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            TemplateError::UnreachableNode { .. } => true,
        }
    }
}

pub type Result<T, E = TemplateError> = std::result::Result<T, E>;
