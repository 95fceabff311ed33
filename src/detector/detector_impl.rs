use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::DetectorError;
use crate::status::{DetectorState, DetectorStatus};
use crate::step::{self, CompareFn, StepFn};

/// The fields only a constructor can populate. A detector that was never
/// constructed has no core, and every method on it fails with `InvalidState`
/// before touching anything else.
struct DetectorCore<T> {
    step: StepFn<T>,
    compare: CompareFn<T>,
    tortoise: T,
    hare: T,
}

impl<T: Clone> Clone for DetectorCore<T> {
    fn clone(&self) -> Self {
        Self {
            step: Arc::clone(&self.step),
            compare: Arc::clone(&self.compare),
            tortoise: self.tortoise.clone(),
            hare: self.hare.clone(),
        }
    }
}

/// Incremental cycle detector over an implicitly defined sequence.
///
/// A detector is an immutable value: both advance operations consume nothing
/// and return a new state, leaving the receiver usable by other call paths.
/// Once a cycle is confirmed (`ok` turns false) or the step capability reports
/// exhaustion (`done` turns true), the state is terminal and further advances
/// return it unchanged.
pub struct CycleDetector<T> {
    core: Option<DetectorCore<T>>,
    ok: bool,
    done: bool,
    hare_count: u64,
    tortoise_count: u64,
}

impl<T: Clone> Clone for CycleDetector<T> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            ok: self.ok,
            done: self.done,
            hare_count: self.hare_count,
            tortoise_count: self.tortoise_count,
        }
    }
}

impl<T> Default for CycleDetector<T> {
    fn default() -> Self {
        Self {
            core: None,
            ok: false,
            done: false,
            hare_count: 0,
            tortoise_count: 0,
        }
    }
}

impl<T> fmt::Debug for CycleDetector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleDetector")
            .field("initialized", &self.core.is_some())
            .field("ok", &self.ok)
            .field("done", &self.done)
            .field("hare_count", &self.hare_count)
            .field("tortoise_count", &self.tortoise_count)
            .finish_non_exhaustive()
    }
}

impl<T> CycleDetector<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Create a detector at `start` with the default equality compare.
    pub fn new(start: T, step: impl Fn(&T) -> Option<T> + 'static) -> Self {
        Self::from_parts(start, Arc::new(step), step::equality())
    }
}

impl<T> CycleDetector<T>
where
    T: Clone + 'static,
{
    /// Create a detector at `start` with a custom compare capability.
    pub fn with_compare(
        start: T,
        step: impl Fn(&T) -> Option<T> + 'static,
        compare: impl Fn(&T, &T) -> bool + 'static,
    ) -> Self {
        Self::from_parts(start, Arc::new(step), Arc::new(compare))
    }

    pub fn builder() -> DetectorBuilder<T> {
        DetectorBuilder::new()
    }

    pub(crate) fn from_parts(start: T, step: StepFn<T>, compare: CompareFn<T>) -> Self {
        Self {
            core: Some(DetectorCore {
                step,
                compare,
                tortoise: start.clone(),
                hare: start,
            }),
            ok: true,
            done: false,
            hare_count: 0,
            tortoise_count: 0,
        }
    }

    /// Advance the hare by the one supplied value.
    ///
    /// On every even hare count the detector first advances its own tortoise
    /// through the step capability, keeping the 2:1 ratio; positions are then
    /// compared whenever the incremented hare count is even. Terminal
    /// receivers are returned unchanged.
    pub fn hare(&self, step: T) -> Result<Self, DetectorError> {
        self.validate()?;
        if !self.ok || self.done {
            return Ok(self.clone());
        }

        let mut next = self.clone();

        // One deferred tortoise step per pair of hare values.
        if next.hare_count % 2 == 0 {
            let advanced = {
                let core = next.core_ref()?;
                (core.step)(&core.tortoise)
            };
            match advanced {
                Some(value) => {
                    next.core_mut()?.tortoise = value;
                    next.tortoise_count += 1;
                }
                None => return self.exhausted(),
            }
        }

        next.core_mut()?.hare = step;
        next.hare_count += 1;

        // Positions can only be compared after one tortoise and two hares.
        if next.hare_count % 2 == 0 {
            next.checkpoint()?;
        }

        Ok(next)
    }

    /// Advance the tortoise by the one supplied value, advancing the hare two
    /// steps through the step capability.
    ///
    /// A pending odd hare value left by an earlier [`CycleDetector::hare`]
    /// call is completed first. If any capability invocation reports
    /// exhaustion, the returned state is identical to the receiver except
    /// `done` — partial progress from earlier sub-steps is discarded.
    pub fn tortoise(&self, step: T) -> Result<Self, DetectorError> {
        self.validate()?;
        if !self.ok || self.done {
            return Ok(self.clone());
        }

        let mut next = self.clone();

        // Complete the pending pairing before registering the tortoise.
        if next.hare_count % 2 != 0 {
            if !next.advance_hare()? {
                return self.exhausted();
            }
            next.checkpoint()?;
            if !next.ok {
                return Ok(next);
            }
        }

        next.core_mut()?.tortoise = step;
        next.tortoise_count += 1;

        for _ in 0..2 {
            if !next.advance_hare()? {
                return self.exhausted();
            }
        }

        // The final state is always at a checkpoint.
        next.checkpoint()?;
        Ok(next)
    }

    /// True while no cycle has been confirmed.
    pub fn ok(&self) -> Result<bool, DetectorError> {
        self.validate()?;
        Ok(self.ok)
    }

    /// True once the step capability has reported exhaustion.
    pub fn done(&self) -> Result<bool, DetectorError> {
        self.validate()?;
        Ok(self.done)
    }

    /// Hare steps taken since construction.
    pub fn hare_count(&self) -> Result<u64, DetectorError> {
        self.validate()?;
        Ok(self.hare_count)
    }

    /// Tortoise steps taken since construction.
    pub fn tortoise_count(&self) -> Result<u64, DetectorError> {
        self.validate()?;
        Ok(self.tortoise_count)
    }

    /// The state-machine view of this detector.
    pub fn state(&self) -> Result<DetectorState, DetectorError> {
        self.validate()?;
        Ok(if !self.ok {
            DetectorState::CycleFound
        } else if self.done {
            DetectorState::Exhausted
        } else {
            DetectorState::Active
        })
    }

    /// Snapshot of the observable counters and flags.
    pub fn status(&self) -> Result<DetectorStatus, DetectorError> {
        self.validate()?;
        Ok(DetectorStatus {
            ok: self.ok,
            done: self.done,
            hare_count: self.hare_count,
            tortoise_count: self.tortoise_count,
        })
    }

    /// Return a copy of this detector with a different step capability.
    pub fn set_step(&self, step: impl Fn(&T) -> Option<T> + 'static) -> Result<Self, DetectorError> {
        self.set_step_fn(Arc::new(step))
    }

    /// Return a copy of this detector with a different compare capability.
    pub fn set_compare(
        &self,
        compare: impl Fn(&T, &T) -> bool + 'static,
    ) -> Result<Self, DetectorError> {
        self.validate()?;
        let mut next = self.clone();
        next.core_mut()?.compare = Arc::new(compare);
        Ok(next)
    }

    pub(crate) fn set_step_fn(&self, step: StepFn<T>) -> Result<Self, DetectorError> {
        self.validate()?;
        let mut next = self.clone();
        next.core_mut()?.step = step;
        Ok(next)
    }

    pub(crate) fn validate(&self) -> Result<(), DetectorError> {
        match self.core {
            Some(_) => Ok(()),
            None => Err(DetectorError::InvalidState),
        }
    }

    fn core_ref(&self) -> Result<&DetectorCore<T>, DetectorError> {
        self.core.as_ref().ok_or(DetectorError::InvalidState)
    }

    fn core_mut(&mut self) -> Result<&mut DetectorCore<T>, DetectorError> {
        self.core.as_mut().ok_or(DetectorError::InvalidState)
    }

    /// One hare step through the step capability. Returns false on exhaustion,
    /// leaving the caller to discard this state.
    fn advance_hare(&mut self) -> Result<bool, DetectorError> {
        let stepped = {
            let core = self.core_ref()?;
            (core.step)(&core.hare)
        };
        match stepped {
            Some(value) => {
                self.core_mut()?.hare = value;
                self.hare_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Compare tortoise and hare positions, recording a found cycle.
    fn checkpoint(&mut self) -> Result<(), DetectorError> {
        let matched = {
            let core = self.core_ref()?;
            (core.compare)(&core.tortoise, &core.hare)
        };
        if matched {
            debug!(
                hare_count = self.hare_count,
                tortoise_count = self.tortoise_count,
                "tortoise and hare positions match, cycle found"
            );
            self.ok = false;
        }
        Ok(())
    }

    /// The receiver with only `done` flipped; everything else unchanged.
    fn exhausted(&self) -> Result<Self, DetectorError> {
        debug!(
            hare_count = self.hare_count,
            tortoise_count = self.tortoise_count,
            "step capability exhausted"
        );
        let mut next = self.clone();
        next.done = true;
        Ok(next)
    }
}

/// Fallible assembly of a [`CycleDetector`] from parts.
///
/// `build` fails with `InvalidArgument` when the start value or the step
/// capability is missing; the compare capability defaults to equality.
pub struct DetectorBuilder<T> {
    start: Option<T>,
    step: Option<StepFn<T>>,
    compare: Option<CompareFn<T>>,
}

impl<T> Default for DetectorBuilder<T> {
    fn default() -> Self {
        Self {
            start: None,
            step: None,
            compare: None,
        }
    }
}

impl<T> DetectorBuilder<T>
where
    T: Clone + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: T) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_step(mut self, step: impl Fn(&T) -> Option<T> + 'static) -> Self {
        self.step = Some(Arc::new(step));
        self
    }

    pub fn with_compare(mut self, compare: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.compare = Some(Arc::new(compare));
        self
    }
}

impl<T> DetectorBuilder<T>
where
    T: Clone + PartialEq + 'static,
{
    pub fn build(self) -> Result<CycleDetector<T>, DetectorError> {
        let start = self.start.ok_or_else(|| DetectorError::InvalidArgument {
            message: "missing required field: start".to_string(),
        })?;
        let step = self.step.ok_or_else(|| DetectorError::InvalidArgument {
            message: "missing required capability: step".to_string(),
        })?;
        let compare = self.compare.unwrap_or_else(step::equality);
        Ok(CycleDetector::from_parts(start, step, compare))
    }
}
