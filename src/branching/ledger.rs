use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::step::StepFn;

/// Slot arena shared by every branch descended from one traversal root.
///
/// Slots are addressed by position, never by backing-capacity identity: a
/// branch appending at index `i` either grows the arena by exactly one slot or
/// reuses the slot a finished sibling left behind. Releasing a slot is
/// idempotent and touches nothing a live branch can still reach.
pub(crate) struct PathLedger<T> {
    slots: Rc<RefCell<Vec<Option<T>>>>,
}

impl<T> Clone for PathLedger<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T> Default for PathLedger<T> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> PathLedger<T>
where
    T: Clone + 'static,
{
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write `value` at `index`, growing the arena by one slot when `index`
    /// is the current length.
    pub(crate) fn place(&self, index: usize, value: T) {
        let mut slots = self.slots.borrow_mut();
        if index == slots.len() {
            slots.push(Some(value));
        } else {
            slots[index] = Some(value);
        }
    }

    /// Synthetic step capability yielding the buffered element at `index`. A
    /// released or out-of-range slot reads as exhaustion.
    pub(crate) fn step_at(&self, index: usize) -> StepFn<T> {
        let slots = Rc::clone(&self.slots);
        Arc::new(move |_current: &T| slots.borrow().get(index).cloned().flatten())
    }

    /// Release the slot at `index`.
    pub(crate) fn release(&self, index: usize) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(index) {
            *slot = None;
        }
    }

    /// Number of slots currently holding a buffered value.
    pub(crate) fn live(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    /// Physical arena length, counting released slots.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}
