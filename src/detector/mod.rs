//! # Linear Cycle Detection Module
//!
//! This module implements the incremental form of Floyd's tortoise-and-hare
//! algorithm over an implicitly defined sequence.
//!
//! ## Algorithm
//!
//! The classic algorithm runs both pointers in a loop it owns. Here the loop
//! belongs to the caller instead: each call to [`CycleDetector::hare`] or
//! [`CycleDetector::tortoise`] supplies exactly one externally produced value
//! for that pointer, and the detector advances the other pointer itself
//! through the step capability so that the 2:1 speed ratio always holds.
//! Tortoise and hare positions are compared at every completed pairing
//! checkpoint; a match means the sequence has entered a cycle. The detector
//! itself stores only the two current positions and two counters, so memory
//! stays O(1) no matter how long the sequence runs.
//!
//! ## Key Components
//!
//! - **CycleDetector**: immutable detector value; every advance returns a new
//!   state and never mutates the receiver
//! - **DetectorBuilder**: fallible assembly of a detector from parts
//!
//! ## Example
//!
//! ```
//! use carousel::detector::CycleDetector;
//!
//! # fn main() -> Result<(), carousel::error::DetectorError> {
//! // A self-loop is the smallest possible cycle.
//! let mut detector = CycleDetector::new(0u32, |_: &u32| Some(0));
//!
//! detector = detector.hare(0)?;
//! assert!(detector.ok()?);
//!
//! detector = detector.hare(0)?;
//! assert!(!detector.ok()?);
//! assert_eq!(detector.hare_count()?, 2);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
