//! # Revision Encoding
//!
//! The integer encoding of hardware chip revisions.
//!
//! A revision packs (major, minor) into one `u32` as `major * 100 + minor`.
//! Integer order on the encoded value agrees with lexicographic order on
//! (major, minor) for every minor below 100, which is what makes plain
//! integer comparison a valid revision comparison.

use crate::error::RevisionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of minor revisions each major version can hold in the encoding.
pub const MINORS_PER_MAJOR: u32 = 100;

/// An integer-encoded hardware chip revision.
///
/// Wraps the full `major * 100 + minor` value (wafer version 3.1 is 301).
/// Revisions are immutable and totally ordered by their encoded value.
///
/// The encoding assumes the minor component stays below
/// [`MINORS_PER_MAJOR`]. A full value built from a minor of 100 or more is
/// indistinguishable from a later major version; such values are a caller
/// precondition violation, not a detected error. Use
/// [`ChipRevision::from_parts`] when the components come from untrusted
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChipRevision(u32);

impl ChipRevision {
    /// Revision 0.0, the first silicon of any chip line.
    pub const ZERO: Self = Self(0);

    /// Wrap an already encoded `major * 100 + minor` value.
    ///
    /// Total over `u32`; performs no validation. See the type-level note
    /// on the minor-below-100 precondition.
    #[must_use]
    pub const fn from_full(full: u32) -> Self {
        Self(full)
    }

    /// Encode a (major, minor) pair.
    ///
    /// Rejects minors that would corrupt the encoding with
    /// [`RevisionError::MinorOutOfRange`], and majors whose encoded value
    /// would not fit in a `u32` with [`RevisionError::MajorOutOfRange`].
    pub const fn from_parts(major: u32, minor: u32) -> Result<Self, RevisionError> {
        if minor >= MINORS_PER_MAJOR {
            return Err(RevisionError::MinorOutOfRange(minor));
        }
        match major.checked_mul(MINORS_PER_MAJOR) {
            Some(base) => match base.checked_add(minor) {
                Some(full) => Ok(Self(full)),
                None => Err(RevisionError::MajorOutOfRange(major)),
            },
            None => Err(RevisionError::MajorOutOfRange(major)),
        }
    }

    /// The full encoded value.
    #[must_use]
    pub const fn full(self) -> u32 {
        self.0
    }

    /// The major component: `full / 100`, truncating division.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.0 / MINORS_PER_MAJOR
    }

    /// The minor component: `full % 100`.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.0 % MINORS_PER_MAJOR
    }

    /// Whether this revision satisfies a forward-open minimum.
    ///
    /// Method form of [`crate::gate::rev_above`].
    #[must_use]
    pub const fn is_above(self, min: Self) -> bool {
        crate::gate::rev_above(self, min)
    }

    /// Whether this revision satisfies a forward-closed minimum.
    ///
    /// Method form of [`crate::gate::rev_major_and_above`].
    #[must_use]
    pub const fn is_major_and_above(self, min: Self) -> bool {
        crate::gate::rev_major_and_above(self, min)
    }
}

impl fmt::Display for ChipRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

impl FromStr for ChipRevision {
    type Err = RevisionError;

    /// Parse `major.minor` notation, e.g. `3.1`.
    ///
    /// Components must be bare decimal digits; signs and whitespace are
    /// rejected, unlike plain `u32::from_str`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn component(part: &str, full: &str) -> Result<u32, RevisionError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RevisionError::Parse(full.to_string()));
            }
            part.parse().map_err(|_| RevisionError::Parse(full.to_string()))
        }

        let Some((major, minor)) = s.split_once('.') else {
            return Err(RevisionError::Parse(s.to_string()));
        };
        Self::from_parts(component(major, s)?, component(minor, s)?)
    }
}

impl From<ChipRevision> for u32 {
    fn from(rev: ChipRevision) -> Self {
        rev.full()
    }
}
