//! The canonical Code Climate issue subset.
//!
//! Every converter emits [`Issue`] values; the aggregator serializes them as a
//! JSON array. Field order follows declaration order so output is stable.

use serde::{Deserialize, Serialize};

/// One entry of the Code Climate subset report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub description: String,
    pub fingerprint: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub lines: Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lines {
    pub begin: u64,
}

impl Issue {
    pub fn new(
        description: impl Into<String>,
        fingerprint: impl Into<String>,
        path: impl Into<String>,
        begin: u64,
    ) -> Self {
        Self {
            description: description.into(),
            fingerprint: fingerprint.into(),
            location: Location {
                path: path.into(),
                lines: Lines { begin },
            },
        }
    }

    pub fn path(&self) -> &str {
        &self.location.path
    }

    pub fn line(&self) -> u64 {
        self.location.lines.begin
    }
}
