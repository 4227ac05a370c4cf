//! # Supported Revision Range
//!
//! The inclusive window of chip revisions a build claims to support.
//! A build configured for minimum 1.0 and maximum 3.99 runs on any
//! revision inside that window and should refuse silicon outside it.

use crate::error::RevisionError;
use crate::revision::ChipRevision;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` window of supported revisions.
///
/// Deserialization runs through [`RevisionRange::new`], so inverted bounds
/// are rejected on the wire as well as in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRevisionRange")]
pub struct RevisionRange {
    min: ChipRevision,
    max: ChipRevision,
}

/// Unvalidated wire form of [`RevisionRange`].
#[derive(Deserialize)]
struct RawRevisionRange {
    min: ChipRevision,
    max: ChipRevision,
}

impl TryFrom<RawRevisionRange> for RevisionRange {
    type Error = RevisionError;

    fn try_from(raw: RawRevisionRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl RevisionRange {
    /// Build a range, rejecting inverted bounds with
    /// [`RevisionError::InvertedRange`].
    pub const fn new(min: ChipRevision, max: ChipRevision) -> Result<Self, RevisionError> {
        if min.full() > max.full() {
            return Err(RevisionError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lowest supported revision.
    #[must_use]
    pub const fn min(self) -> ChipRevision {
        self.min
    }

    /// Highest supported revision.
    #[must_use]
    pub const fn max(self) -> ChipRevision {
        self.max
    }

    /// Whether `rev` falls inside the window, bounds included.
    #[must_use]
    pub const fn contains(self, rev: ChipRevision) -> bool {
        self.min.full() <= rev.full() && rev.full() <= self.max.full()
    }
}
