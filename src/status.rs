//! Observable detector state
//!
//! These types carry no logic; they are the data a caller can read off a
//! detector without touching the algorithm itself.

use serde::Serialize;

/// Snapshot of a detector's counters and flags, suitable for embedding in a
/// caller's own serialized report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectorStatus {
    /// True while no cycle has been confirmed.
    pub ok: bool,
    /// True once the step capability has reported exhaustion.
    pub done: bool,
    /// Hare steps taken since construction.
    pub hare_count: u64,
    /// Tortoise steps taken since construction.
    pub tortoise_count: u64,
}

/// State-machine view of a detector. `Active` is the initial state; the other
/// two are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorState {
    Active,
    CycleFound,
    Exhausted,
}

impl std::fmt::Display for DetectorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectorState::Active => write!(f, "active"),
            DetectorState::CycleFound => write!(f, "cycle-found"),
            DetectorState::Exhausted => write!(f, "exhausted"),
        }
    }
}
