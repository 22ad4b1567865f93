//! Error types for elemtree

use std::fmt;
use thiserror::Error;

/// Mutations that only container elements accept
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    SetAttribute,
    AppendChild,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetAttribute => write!(f, "set an attribute"),
            Self::AppendChild => write!(f, "append a child"),
        }
    }
}

/// Main error type for elemtree
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("cannot {operation} on a text node")]
    UnsupportedOperation { operation: Operation },
}

impl Error {
    pub const fn unsupported(operation: Operation) -> Self {
        Self::UnsupportedOperation { operation }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::UnsupportedOperation { operation } => *operation,
        }
    }
}

/// Result type alias for elemtree
pub type Result<T> = std::result::Result<T, Error>;
