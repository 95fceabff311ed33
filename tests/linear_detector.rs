//! Integration tests driving the linear detector through the library
//! interface, the way an embedding caller would.

use carousel::detector::CycleDetector;
use carousel::error::DetectorError;
use carousel::status::{DetectorState, DetectorStatus};
use pretty_assertions::assert_eq;

/// Step capability over 0, 1, …, `limit - 1` and nothing after that.
fn bounded(limit: u32) -> impl Fn(&u32) -> Option<u32> {
    move |v: &u32| if v + 1 < limit { Some(v + 1) } else { None }
}

#[test]
fn hare_driven_period_three_detection() -> Result<(), DetectorError> {
    // Logical values 0,1,2,0,1,2,… — period 3 with no tail, compared by
    // value. The hare is driven externally; the tortoise runs on the step
    // capability.
    let mut detector = CycleDetector::new(0u32, |v: &u32| Some((v + 1) % 3));

    let mut position = 0u32;
    while detector.ok()? && !detector.done()? {
        position = (position + 1) % 3;
        detector = detector.hare(position)?;
    }

    assert_eq!(detector.state()?, DetectorState::CycleFound);
    assert_eq!(detector.hare_count()?, 6);
    assert_eq!(detector.tortoise_count()?, 3);
    assert!(!detector.done()?);
    Ok(())
}

#[test]
fn tortoise_driven_finite_sequence_exhausts() -> Result<(), DetectorError> {
    // Values 0..=10; the hare runs ahead on the step capability and is the
    // first to hit the end, at hare_count == length - 1.
    let step = bounded(11);
    let mut detector = CycleDetector::new(0u32, bounded(11));

    let mut value = 0u32;
    while detector.ok()? && !detector.done()? {
        match step(&value) {
            Some(next) => value = next,
            None => break,
        }
        detector = detector.tortoise(value)?;
    }

    assert_eq!(detector.state()?, DetectorState::Exhausted);
    assert_eq!(detector.hare_count()?, 10);
    assert_eq!(detector.tortoise_count()?, 5);
    assert!(detector.ok()?);
    Ok(())
}

#[test]
fn hare_driven_finite_sequence_exhausts() -> Result<(), DetectorError> {
    // Same sequence, hare-driven from a wider supply of values: here the
    // tortoise is the capability-advanced pointer, and it is the one that
    // reaches the end of the sequence.
    let mut detector = CycleDetector::new(0u32, bounded(11));

    for supplied in 1..=40 {
        detector = detector.hare(supplied)?;
        if detector.done()? {
            break;
        }
    }

    assert_eq!(detector.state()?, DetectorState::Exhausted);
    assert_eq!(detector.tortoise_count()?, 10);
    assert_eq!(detector.hare_count()?, 20);
    assert!(detector.ok()?);
    Ok(())
}

#[test]
fn derived_states_never_affect_each_other() -> Result<(), DetectorError> {
    let ancestor = CycleDetector::new(0u32, |v: &u32| Some(v + 1)).hare(1)?;
    let ancestor_status = ancestor.status()?;

    let left = ancestor.hare(2)?.hare(3)?;
    let right = ancestor.tortoise(1)?;

    assert_eq!(ancestor.status()?, ancestor_status);
    assert_eq!(left.hare_count()?, 3);
    assert_eq!(right.hare_count()?, 4);
    assert_eq!(right.tortoise_count()?, 2);
    Ok(())
}

#[test]
fn status_snapshot_serializes() -> Result<(), DetectorError> {
    let detector = CycleDetector::new(0u32, |v: &u32| Some(v + 1)).hare(1)?;
    let status = detector.status()?;

    assert_eq!(
        status,
        DetectorStatus {
            ok: true,
            done: false,
            hare_count: 1,
            tortoise_count: 1,
        }
    );

    let json = serde_json::to_value(status).expect("status serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "ok": true,
            "done": false,
            "hare_count": 1,
            "tortoise_count": 1,
        })
    );
    Ok(())
}

#[test]
fn exhaustion_and_cycle_are_distinct_outcomes() -> Result<(), DetectorError> {
    // A sequence that ends is not cyclic …
    let ended = CycleDetector::new(0u32, |_: &u32| None).hare(1)?;
    assert_eq!(ended.state()?, DetectorState::Exhausted);
    assert!(ended.ok()?);

    // … and a cyclic sequence never reports exhaustion.
    let mut cyclic = CycleDetector::new(0u32, |_: &u32| Some(0));
    cyclic = cyclic.hare(0)?.hare(0)?;
    assert_eq!(cyclic.state()?, DetectorState::CycleFound);
    assert!(!cyclic.done()?);
    Ok(())
}
