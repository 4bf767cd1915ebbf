//! Error types for path resolution.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the path registry.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Path reference {attribute} is not a relative path: {reason}")]
    InvalidPathConfiguration {
        attribute: String,
        reason: InvalidReason,
    },

    #[error("unknown logical path name: {0}")]
    UnknownName(String),

    #[error("path registry has not been initialized")]
    Uninitialized,

    #[error("failed to read host document {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    pub(crate) fn invalid(attribute: &str, reason: InvalidReason) -> Self {
        Self::InvalidPathConfiguration {
            attribute: attribute.to_string(),
            reason,
        }
    }

    /// The offending attribute, if this is a validation failure.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::InvalidPathConfiguration { attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}

/// Why a directly-read attribute was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    Missing,
    Empty,
    NotRootRelative(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => f.write_str("attribute is missing"),
            InvalidReason::Empty => f.write_str("attribute is empty"),
            InvalidReason::NotRootRelative(value) => {
                write!(f, "value {value:?} does not start with '/'")
            }
        }
    }
}
