//! # Revgate Core
//!
//! Deterministic gating of code paths on hardware chip revisions.
//!
//! A chip revision packs a two-part wafer version into a single integer as
//! `major * 100 + minor` (wafer version 3.1 encodes as 301). Silicon
//! revisions form a branching timeline, so a change introduced at some
//! revision must declare whether later major versions inherit it:
//!
//! - [`rev_above`] is forward-open: once the minimum is reached, the gate
//!   holds for every later revision, future majors included.
//! - [`rev_major_and_above`] is forward-closed: the gate holds only within
//!   the minimum's own major version.
//!
//! Both predicates are total, pure `const fn`s, so gates can be resolved in
//! constant expressions:
//!
//! ```
//! use revgate_core::{rev_above, ChipRevision};
//!
//! const ADC_CALIBRATED: bool =
//!     rev_above(ChipRevision::from_full(301), ChipRevision::from_full(300));
//! assert!(ADC_CALIBRATED);
//! ```

pub mod error;
pub mod gate;
pub mod range;
pub mod revision;

pub use error::RevisionError;
pub use gate::{GatePolicy, RevisionGate, rev_above, rev_major_and_above};
pub use range::RevisionRange;
pub use revision::{ChipRevision, MINORS_PER_MAJOR};
