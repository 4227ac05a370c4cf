//! # Error Module
//!
//! Error taxonomy for revision construction and parsing. Gate evaluation
//! itself is total and never fails.

use crate::revision::ChipRevision;
use thiserror::Error;

/// Errors from building or parsing revisions and ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevisionError {
    /// A minor component of 100 or more would corrupt the
    /// `major * 100 + minor` encoding.
    #[error("minor revision {0} does not fit the encoding (must be below 100)")]
    MinorOutOfRange(u32),

    /// A major component whose encoded value would overflow `u32`.
    #[error("major revision {0} does not fit the encoding (must be at most {limit})", limit = u32::MAX / 100)]
    MajorOutOfRange(u32),

    /// Input was not `major.minor` notation.
    #[error("invalid revision `{0}`: expected `major.minor` notation, e.g. `3.1`")]
    Parse(String),

    /// A revision range was constructed with its minimum above its maximum.
    #[error("inverted revision range: minimum {min} is above maximum {max}")]
    InvertedRange {
        /// Offending lower bound.
        min: ChipRevision,
        /// Offending upper bound.
        max: ChipRevision,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = RevisionError::MinorOutOfRange(100);
        assert!(err.to_string().contains("100"));

        let err = RevisionError::InvertedRange {
            min: ChipRevision::from_full(301),
            max: ChipRevision::from_full(300),
        };
        assert!(err.to_string().contains("3.1"));
        assert!(err.to_string().contains("3.0"));
    }
}
