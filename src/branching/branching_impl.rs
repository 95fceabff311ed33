use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::branching::ledger::PathLedger;
use crate::detector::CycleDetector;
use crate::error::DetectorError;
use crate::status::{DetectorState, DetectorStatus};
use crate::step::{self, CompareFn};

/// Cycle detector for recursive traversals with divergent call paths.
///
/// Wraps a [`CycleDetector`] whose tortoise is fed from a shared path ledger
/// instead of a caller capability, so the traversal only ever supplies the
/// node it is visiting (the hare role). Every value returned by
/// [`BranchingDetector::hare`] owns one ledger slot and owes one
/// [`BranchingDetector::clear`] call once no deeper recursion level still
/// needs it; a traversal that never clears keeps the whole visited path
/// buffered.
pub struct BranchingDetector<T> {
    detector: CycleDetector<T>,
    ledger: PathLedger<T>,
    /// Next ledger slot the synthesized tortoise will consume.
    front: usize,
    /// Ledger slot the next `hare` call will fill.
    back: usize,
    /// The slot this value appended; `None` for a constructor root.
    slot: Option<usize>,
}

impl<T: Clone> Clone for BranchingDetector<T> {
    fn clone(&self) -> Self {
        Self {
            detector: self.detector.clone(),
            ledger: self.ledger.clone(),
            front: self.front,
            back: self.back,
            slot: self.slot,
        }
    }
}

impl<T> Default for BranchingDetector<T> {
    fn default() -> Self {
        Self {
            detector: CycleDetector::default(),
            ledger: PathLedger::default(),
            front: 0,
            back: 0,
            slot: None,
        }
    }
}

impl<T> fmt::Debug for BranchingDetector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchingDetector")
            .field("detector", &self.detector)
            .field("front", &self.front)
            .field("back", &self.back)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl<T> BranchingDetector<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Create a traversal root at `start` with the default equality compare.
    pub fn new(start: T) -> Self {
        Self::from_parts(start, step::equality())
    }
}

impl<T> BranchingDetector<T>
where
    T: Clone + 'static,
{
    /// Create a traversal root at `start` with a custom compare capability.
    pub fn with_compare(start: T, compare: impl Fn(&T, &T) -> bool + 'static) -> Self {
        Self::from_parts(start, Arc::new(compare))
    }

    fn from_parts(start: T, compare: CompareFn<T>) -> Self {
        Self {
            // The sentinel capability is never consulted between hare calls.
            detector: CycleDetector::from_parts(start, step::exhausted(), compare),
            ledger: PathLedger::new(),
            front: 0,
            back: 0,
            slot: None,
        }
    }

    /// Advance the hare by the node this branch is visiting.
    ///
    /// The value is buffered in the ledger before the wrapped detector runs,
    /// so the deferred tortoise advance is satisfied without calling back to
    /// the caller. Terminal receivers are returned unchanged and buffer
    /// nothing.
    pub fn hare(&self, step: T) -> Result<Self, DetectorError> {
        if !self.detector.ok()? || self.detector.done()? {
            return Ok(self.clone());
        }

        let slot = self.back;
        self.ledger.place(slot, step.clone());
        trace!(slot, front = self.front, "buffered hare value");

        // Arm the wrapped detector with this branch's front slot, delegate,
        // then disarm back to the sentinel so no stale window survives.
        let armed = self.detector.set_step_fn(self.ledger.step_at(self.front))?;
        let consumed_before = armed.tortoise_count()?;
        let advanced = armed.hare(step)?;
        let consumed = (advanced.tortoise_count()? - consumed_before) as usize;
        let detector = advanced.set_step_fn(step::exhausted())?;

        Ok(Self {
            detector,
            ledger: self.ledger.clone(),
            front: self.front + consumed,
            back: slot + 1,
            slot: Some(slot),
        })
    }

    /// Release the ledger slot this value appended.
    ///
    /// Must be called once per value returned by
    /// [`BranchingDetector::hare`], after the branch it spawned has finished.
    /// Releasing is idempotent, and a constructor root releases nothing.
    pub fn clear(&self) {
        if let Some(slot) = self.slot {
            self.ledger.release(slot);
        }
    }

    /// True while no cycle has been confirmed.
    pub fn ok(&self) -> Result<bool, DetectorError> {
        self.detector.ok()
    }

    /// True once a synthesized tortoise step found its slot released, which
    /// only happens when the clear discipline was broken.
    pub fn done(&self) -> Result<bool, DetectorError> {
        self.detector.done()
    }

    /// Hare steps taken since construction.
    pub fn hare_count(&self) -> Result<u64, DetectorError> {
        self.detector.hare_count()
    }

    /// Tortoise steps taken since construction.
    pub fn tortoise_count(&self) -> Result<u64, DetectorError> {
        self.detector.tortoise_count()
    }

    /// The state-machine view of the wrapped detector.
    pub fn state(&self) -> Result<DetectorState, DetectorError> {
        self.detector.state()
    }

    /// Snapshot of the observable counters and flags.
    pub fn status(&self) -> Result<DetectorStatus, DetectorError> {
        self.detector.status()
    }

    /// Number of ledger slots currently holding a buffered value. Under the
    /// clear discipline this never exceeds the depth of the live call chain.
    pub fn buffered(&self) -> Result<usize, DetectorError> {
        self.detector.validate()?;
        Ok(self.ledger.live())
    }
}
