use std::result::Result as StdResult;

use thiserror::Error;

use crate::NodeId;

/// Result type for arbor operations.
pub type Result<T> = StdResult<T, Error>;

/// Parse error for the textual style forms.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
#[error("{message}")]
pub struct ParseError {
    /// Parse error message, including the offending input.
    message: String,
}

impl ParseError {
    /// Construct a parse error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Construct a parse error quoting the input that failed.
    pub fn with_input(message: impl Into<String>, input: &str) -> Self {
        Self {
            message: format!("{}: {input:?}", message.into()),
        }
    }
}

/// Errors from the node arena. Layout computation itself never fails.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The id does not name a live node.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Requested parent.
        parent: NodeId,
        /// Requested child.
        child: NodeId,
    },

    #[error("parse error: {0}")]
    /// Parsing failure.
    Parse(#[source] ParseError),

    #[error("internal: {0}")]
    /// Internal error.
    Internal(String),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
