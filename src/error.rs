//! Error taxonomy of the conversion core.
//!
//! Errors surface to the caller exactly as produced; nothing in the core wraps
//! or translates them.

use crate::tool::Tool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubsetError {
    /// The report does not have the structural shape the tool is known to emit
    #[error("{tool} report does not match the expected schema at `{at}`: expected {expected}")]
    Schema { tool: Tool, at: String, expected: String },

    /// A structurally valid report holds a field of the wrong type or value
    #[error("{tool} report has an invalid `{field}` for message #{index} in {file}: {reason}")]
    Conversion {
        tool: Tool,
        file: String,
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("No converters enabled")]
    NoConvertersEnabled,

    /// Output was requested without a successful conversion run
    #[error("No converted output available; the last conversion did not succeed")]
    NotConverted,

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SubsetError {
    pub fn schema(tool: Tool, at: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Schema {
            tool,
            at: at.into(),
            expected: expected.into(),
        }
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}

pub type SubsetResult<T> = Result<T, SubsetError>;
