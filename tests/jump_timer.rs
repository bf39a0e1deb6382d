use stroll::controller::{JumpTick, JumpTimer, JUMP_TICKS_TOTAL, JUMP_TICK_SECONDS};

#[test]
fn accumulates_until_the_first_tick_boundary() {
    let mut timer = JumpTimer::start(1.0);
    assert_eq!(timer.advance(0.02, 2.0), None);
    assert_eq!(timer.advance(0.02, 2.0), None);
    // 0.06s accumulated: one tick fires.
    assert!(matches!(
        timer.advance(0.02, 2.0),
        Some(JumpTick::Airborne(_))
    ));
}

#[test]
fn midpoint_reaches_full_amplitude() {
    let mut timer = JumpTimer::start(1.0);
    let mut last = None;
    for _ in 0..JUMP_TICKS_TOTAL / 2 {
        last = timer.advance(JUMP_TICK_SECONDS, 2.0);
    }
    assert!((timer.progress() - 0.5).abs() < 1e-6);
    match last {
        Some(JumpTick::Airborne(h)) => assert!((h - 3.0).abs() < 1e-5, "height {h}"),
        other => panic!("expected airborne sample at midpoint, got {other:?}"),
    }
}

#[test]
fn amplitude_scales_the_arc() {
    let mut timer = JumpTimer::start(2.0);
    let mut last = None;
    for _ in 0..JUMP_TICKS_TOTAL / 2 {
        last = timer.advance(JUMP_TICK_SECONDS, 1.0);
    }
    match last {
        Some(JumpTick::Airborne(h)) => assert!((h - 3.0).abs() < 1e-5, "height {h}"),
        other => panic!("expected airborne sample at midpoint, got {other:?}"),
    }
}

#[test]
fn completion_restores_the_exact_baseline() {
    let baseline = 1.25;
    let mut timer = JumpTimer::start(baseline);
    let mut last = None;
    for _ in 0..JUMP_TICKS_TOTAL {
        last = timer.advance(JUMP_TICK_SECONDS, 2.0);
    }
    // Landing reports the baseline verbatim, not the last arc sample.
    assert_eq!(last, Some(JumpTick::Landed(baseline)));
    assert_eq!(timer.progress(), 1.0);
}

#[test]
fn one_large_delta_fires_every_remaining_tick() {
    let mut timer = JumpTimer::start(0.0);
    assert_eq!(timer.advance(1.0, 2.0), Some(JumpTick::Landed(0.0)));
}
