//! Capability contracts required of the caller
//!
//! The core never owns the sequence it is checking. The caller supplies a step
//! capability that produces the next element from the current one, and a
//! compare capability that decides whether two elements denote the same
//! logical position. Both are shared so that every detector value derived from
//! a common ancestor keeps using the same functions.

use std::sync::Arc;

/// Produces the next element of the sequence, or `None` once the sequence is
/// exhausted at the current point. Exhaustion is permanent and is not a cycle
/// signal.
pub type StepFn<T> = Arc<dyn Fn(&T) -> Option<T>>;

/// Decides whether two elements denote the same logical position.
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> bool>;

/// The default compare capability.
pub(crate) fn equality<T: PartialEq + 'static>() -> CompareFn<T> {
    Arc::new(|a: &T, b: &T| a == b)
}

/// Sentinel step capability that reports exhaustion on every call. The
/// branching detector installs it whenever no buffered element is armed.
pub(crate) fn exhausted<T: 'static>() -> StepFn<T> {
    Arc::new(|_: &T| None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_compares_values() {
        let compare = equality::<u32>();
        assert!(compare(&7, &7));
        assert!(!compare(&7, &8));
    }

    #[test]
    fn test_exhausted_never_yields() {
        let step = exhausted::<u32>();
        assert_eq!(step(&0), None);
        assert_eq!(step(&99), None);
    }
}
