//! # Branching Cycle Detection Module
//!
//! This module extends the linear detector to recursive traversals whose call
//! paths diverge: many branches share a common prefix of hare values without
//! any branch recomputing or restoring full history.
//!
//! ## How It Works
//!
//! A branching detector only ever receives hare values — the nodes the
//! traversal is visiting. The deferred tortoise steps the linear algorithm
//! needs are synthesized from a path ledger: every `hare` call buffers its
//! value in a slot arena shared by the whole traversal, and the wrapped
//! detector's tortoise reads buffered values back out of that arena instead
//! of calling the caller. Each returned detector value owns exactly one arena
//! slot and must release it with [`BranchingDetector::clear`] once no deeper
//! recursion level still needs it; under that discipline the live arena
//! contributions stay proportional to the recursion depth, not to the number
//! of nodes visited.
//!
//! Sharing is single-threaded by construction: the arena handle is an `Rc`,
//! so detector values never cross threads, and sibling branches reuse slots
//! strictly in call/return order.
//!
//! ## Example
//!
//! ```
//! use carousel::branching::BranchingDetector;
//!
//! # fn main() -> Result<(), carousel::error::DetectorError> {
//! let root = BranchingDetector::new(0u32);
//! let prefix = root.hare(1)?;
//!
//! // The first branch explores and finishes…
//! let left = prefix.hare(2)?;
//! assert!(left.ok()?);
//! left.clear();
//!
//! // …then its sibling starts from the same prefix, reusing the slot.
//! let right = prefix.hare(3)?;
//! assert!(right.ok()?);
//! right.clear();
//!
//! prefix.clear();
//! # Ok(())
//! # }
//! ```

mod branching_impl;
mod ledger;

pub use branching_impl::*;
