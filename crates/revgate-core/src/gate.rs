//! # Revision Gates
//!
//! The two comparison policies for gating a change on a chip revision.
//!
//! Wafer revisions form a branching timeline. On one real chip line:
//!
//! ```text
//! 0.0 -> 1.0 -> 2.0 -> 3.0 -> 3.1 -> N.A.
//!            |-> 1.1
//! ```
//!
//! A change introduced on 1.1 must gate with [`rev_major_and_above`]:
//! major version 2 already existed when 1.1 taped out, so the condition
//! holds from 1.1 through 1.99 and is not inherited by 2.0 and above.
//!
//! A change introduced on 3.1 gates with [`rev_above`]: no major version 4
//! exists yet, so the condition holds from 3.1 through 3.99 and for 4.0 and
//! above. If a revision 4.0 is later added on top of this change, the gate
//! keeps holding without edits.

use crate::revision::{ChipRevision, MINORS_PER_MAJOR};
use serde::{Deserialize, Serialize};

// =============================================================================
// GATE PREDICATES
// =============================================================================

/// Forward-open gate: true iff `min <= rev`, plain integer comparison.
///
/// Once a revision reaches the minimum, the gate holds for every later
/// revision, including major versions that did not exist when the gate was
/// authored. Total over all revision values; never fails.
#[must_use]
pub const fn rev_above(rev: ChipRevision, min: ChipRevision) -> bool {
    min.full() <= rev.full()
}

/// Forward-closed gate: true iff `rev` shares `min`'s major version and
/// `rev >= min`.
///
/// Scopes a change to a single major line. A later major version starts
/// over at minor 0 and never inherits the gate, whatever its magnitude.
/// Total over all revision values; never fails.
#[must_use]
pub const fn rev_major_and_above(rev: ChipRevision, min: ChipRevision) -> bool {
    rev.full() / MINORS_PER_MAJOR == min.full() / MINORS_PER_MAJOR && rev.full() >= min.full()
}

// =============================================================================
// POLICY AND GATE TYPES
// =============================================================================

/// Which of the two comparison semantics a gate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatePolicy {
    /// Forward-open: inherited by every later revision, future majors
    /// included. See [`rev_above`].
    Above,
    /// Forward-closed: scoped to the minimum's major version only. See
    /// [`rev_major_and_above`].
    MajorAndAbove,
}

impl GatePolicy {
    /// Evaluate this policy for `rev` against the minimum `min`.
    #[must_use]
    pub const fn allows(self, rev: ChipRevision, min: ChipRevision) -> bool {
        match self {
            Self::Above => rev_above(rev, min),
            Self::MajorAndAbove => rev_major_and_above(rev, min),
        }
    }
}

/// A minimum revision paired with the policy that decides whether later
/// major versions inherit the gated change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionGate {
    /// First revision the gated change applies to.
    pub min: ChipRevision,
    /// Inheritance semantics across major versions.
    pub policy: GatePolicy,
}

impl RevisionGate {
    /// A forward-open gate starting at `min`.
    #[must_use]
    pub const fn above(min: ChipRevision) -> Self {
        Self {
            min,
            policy: GatePolicy::Above,
        }
    }

    /// A forward-closed gate starting at `min`.
    #[must_use]
    pub const fn major_and_above(min: ChipRevision) -> Self {
        Self {
            min,
            policy: GatePolicy::MajorAndAbove,
        }
    }

    /// Whether `rev` satisfies this gate.
    #[must_use]
    pub const fn admits(self, rev: ChipRevision) -> bool {
        self.policy.allows(rev, self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn rev(full: u32) -> ChipRevision {
        ChipRevision::from_full(full)
    }

    #[test]
    fn above_meets_exact_minimum() {
        // 3.1 meets minimum 3.1
        assert!(rev_above(rev(301), rev(301)));
    }

    #[test]
    fn above_inherited_by_next_major() {
        // 4.0 inherits a gate authored at 3.1 before any major 4 existed
        assert!(rev_above(rev(400), rev(301)));
    }

    #[test]
    fn above_rejects_older_revision() {
        assert!(!rev_above(rev(300), rev(301)));
    }

    #[test]
    fn major_and_above_within_same_major() {
        // 1.11 meets minimum 1.1, same major 1
        assert!(rev_major_and_above(rev(111), rev(101)));
    }

    #[test]
    fn major_and_above_not_inherited_across_majors() {
        // 2.0 does not inherit a 1.1-scoped gate
        assert!(!rev_major_and_above(rev(200), rev(101)));
    }

    #[test]
    fn major_and_above_rejects_older_minor() {
        // 1.0 is below minimum 1.1, same major
        assert!(!rev_major_and_above(rev(100), rev(101)));
    }

    #[test]
    fn major_and_above_rejects_earlier_major() {
        // an earlier major never satisfies a later-major minimum
        assert!(!rev_major_and_above(rev(99), rev(101)));
    }

    #[test]
    fn gates_evaluate_in_const_context() {
        const FIX_APPLIES: bool = rev_above(rev(400), rev(301));
        const SCOPED_FIX_APPLIES: bool = rev_major_and_above(rev(111), rev(101));
        assert!(FIX_APPLIES);
        assert!(SCOPED_FIX_APPLIES);
    }

    #[test]
    fn policy_dispatches_to_matching_predicate() {
        assert!(GatePolicy::Above.allows(rev(400), rev(301)));
        assert!(!GatePolicy::MajorAndAbove.allows(rev(400), rev(301)));
        assert!(GatePolicy::MajorAndAbove.allows(rev(111), rev(101)));
    }

    #[test]
    fn gate_admits_by_policy() {
        let open = RevisionGate::above(rev(301));
        assert!(open.admits(rev(301)));
        assert!(open.admits(rev(400)));
        assert!(!open.admits(rev(300)));

        let closed = RevisionGate::major_and_above(rev(101));
        assert!(closed.admits(rev(111)));
        assert!(closed.admits(rev(199)));
        assert!(!closed.admits(rev(200)));
    }
}
