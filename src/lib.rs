//! # Carousel - Detect Cycles in Lazily Generated Sequences
//!
//! Carousel detects cycles in sequences and graphs that are never materialized
//! up front: the elements are produced on demand by a caller-supplied step
//! function, and the detector keeps O(1) state for linear sequences (or
//! O(depth) state for recursive traversals) instead of a visited set.
//!
//! ## Main Components
//!
//! - **Detector**: the incremental state machine implementing Floyd's
//!   tortoise-and-hare advance, driven one externally produced value at a time
//! - **Branching**: the recursion-friendly wrapper that lets divergent call
//!   paths share a common prefix of hare values through a bounded path ledger
//! - **Step**: the capability contracts (step and compare functions) the core
//!   requires of its caller
//! - **Status**: serializable snapshots and the state-machine view of a
//!   detector
//!
//! ## Usage
//!
//! ### Linear Sequences
//!
//! Drive the hare with the values your own iteration produces; the detector
//! advances its internal tortoise through the step capability and compares the
//! two positions at every second call:
//!
//! ```
//! use carousel::detector::CycleDetector;
//!
//! # fn main() -> Result<(), carousel::error::DetectorError> {
//! // 0 → 1 → 2 → 0 → …: period 3, no tail.
//! let mut detector = CycleDetector::new(0u32, |v: &u32| Some((v + 1) % 3));
//!
//! let mut position = 0u32;
//! while detector.ok()? && !detector.done()? {
//!     position = (position + 1) % 3;
//!     detector = detector.hare(position)?;
//! }
//!
//! assert!(!detector.ok()?);
//! assert_eq!(detector.hare_count()?, 6);
//! assert_eq!(detector.tortoise_count()?, 3);
//! # Ok(())
//! # }
//! ```
//!
//! ### Finite Sequences
//!
//! A step capability that returns `None` signals exhaustion, which is a
//! terminal state distinct from finding a cycle:
//!
//! ```
//! use carousel::detector::CycleDetector;
//! use carousel::status::DetectorState;
//!
//! # fn main() -> Result<(), carousel::error::DetectorError> {
//! // 0, 1, …, 10 and nothing after that.
//! let step = |v: &u32| if v + 1 < 11 { Some(v + 1) } else { None };
//! let mut detector = CycleDetector::new(0u32, step);
//!
//! let mut value = 0u32;
//! while detector.ok()? && !detector.done()? {
//!     match step(&value) {
//!         Some(next) => value = next,
//!         None => break,
//!     }
//!     detector = detector.tortoise(value)?;
//! }
//!
//! assert_eq!(detector.state()?, DetectorState::Exhausted);
//! assert_eq!(detector.hare_count()?, 10);
//! # Ok(())
//! # }
//! ```
//!
//! ### Recursive Traversals
//!
//! [`branching::BranchingDetector`] hands every recursive branch its own
//! detector value while the buffered hare prefix stays shared. Each returned
//! value owes one `clear` call once its subtree is finished:
//!
//! ```
//! use carousel::branching::BranchingDetector;
//! use carousel::error::DetectorError;
//!
//! fn visit(
//!     node: u32,
//!     edges: &[(u32, u32)],
//!     detector: &BranchingDetector<u32>,
//! ) -> Result<bool, DetectorError> {
//!     for &(_, to) in edges.iter().filter(|&&(from, _)| from == node) {
//!         let child = detector.hare(to)?;
//!         let cyclic = !child.ok()? || visit(to, edges, &child)?;
//!         child.clear();
//!         if cyclic {
//!             return Ok(true);
//!         }
//!     }
//!     Ok(false)
//! }
//!
//! # fn main() -> Result<(), DetectorError> {
//! let acyclic = [(1, 2), (1, 3), (2, 4), (3, 4)];
//! assert!(!visit(1, &acyclic, &BranchingDetector::new(1u32))?);
//!
//! let looping = [(1, 2), (2, 3), (3, 1)];
//! assert!(visit(1, &looping, &BranchingDetector::new(1u32))?);
//! # Ok(())
//! # }
//! ```

pub mod branching;
pub mod detector;
pub mod error;
pub mod status;
pub mod step;
