use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("unknown matching type '{0}', expected 'complete' or 'exclusive'")]
    UnknownMatchingType(String),
}

/// Which pairs of a partition become true positives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchingType {
    /// Every pair at or above the threshold (n-to-m).
    Complete,
    /// Confidence-ordered greedy one-to-one assignment.
    Exclusive,
}

impl MatchingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingType::Complete => "complete",
            MatchingType::Exclusive => "exclusive",
        }
    }
}

impl fmt::Display for MatchingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchingType {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(MatchingType::Complete),
            "exclusive" => Ok(MatchingType::Exclusive),
            other => Err(CorrelationError::UnknownMatchingType(other.to_string())),
        }
    }
}
