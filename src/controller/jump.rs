//! The jump arc: a time-boxed vertical offset generator.
//!
//! The arc is sampled on a fixed 50 ms grid rather than per rendered frame,
//! with ticks fired from accumulated frame delta instead of a second
//! wall-clock timer. The tick count is an integer so ten ticks always reach
//! completion, independent of float accumulation error.

use std::f32::consts::PI;

/// Wall-clock length of one progress tick.
pub const JUMP_TICK_SECONDS: f32 = 0.05;
/// Ticks from takeoff to touchdown (10 x 50 ms = 500 ms in the air).
pub const JUMP_TICKS_TOTAL: u32 = 10;

/// Result of advancing the timer across one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum JumpTick {
    /// Still in the air; the actor's Y should be set to this height.
    Airborne(f32),
    /// Arc complete; the actor's Y is restored to exactly this baseline.
    Landed(f32),
}

/// Runs from takeoff to touchdown and cannot be cancelled; the owner drops
/// it once `advance` reports `Landed`.
#[derive(Clone, Copy, Debug)]
pub struct JumpTimer {
    baseline: f32,
    ticks: u32,
    accum: f32,
}

impl JumpTimer {
    /// Start an arc from the actor's current height.
    pub fn start(baseline: f32) -> Self {
        Self {
            baseline,
            ticks: 0,
            accum: 0.0,
        }
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Fraction of the arc completed, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.ticks as f32 / JUMP_TICKS_TOTAL as f32
    }

    /// Accumulate `dt` and fire any elapsed ticks. Returns `None` when no
    /// tick boundary was crossed this frame, otherwise the height sample
    /// for the latest tick. Landing reports the takeoff baseline verbatim,
    /// so touchdown height never drifts from float error in the arc.
    pub fn advance(&mut self, dt: f32, amplitude: f32) -> Option<JumpTick> {
        self.accum += dt;
        let mut fired = false;
        while self.accum >= JUMP_TICK_SECONDS && self.ticks < JUMP_TICKS_TOTAL {
            self.accum -= JUMP_TICK_SECONDS;
            self.ticks += 1;
            fired = true;
        }
        if !fired {
            return None;
        }
        if self.ticks >= JUMP_TICKS_TOTAL {
            Some(JumpTick::Landed(self.baseline))
        } else {
            let height = self.baseline + (PI * self.progress()).sin() * amplitude;
            Some(JumpTick::Airborne(height))
        }
    }
}
