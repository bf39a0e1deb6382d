//! Engine-agnostic locomotion core: held-key tracking, heading resolution,
//! the discrete locomotion state machine, and the jump arc.
//!
//! Nothing in this module touches SDL or GL. The platform layer feeds key
//! edges in (`systems::locomotion`) and the integrator applies the results
//! to the actor's transform, so the whole core runs headless under test.

pub mod heading;
mod jump;
mod locomotion;

pub use jump::{JumpTick, JumpTimer, JUMP_TICKS_TOTAL, JUMP_TICK_SECONDS};
pub use locomotion::{Controller, LocomotionState};

use std::str::FromStr;

/// Logical control keys. Bindings are fixed: the four arrow keys plus space.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Jump,
}

impl GameKey {
    pub fn is_directional(self) -> bool {
        !matches!(self, GameKey::Jump)
    }
}

/// Live pressed-state of every control key.
///
/// Mutated only on key-down/key-up edges. A key-up that never arrives
/// (focus lost mid-press) leaves the key held until the next release
/// event for it; there is deliberately no blur-style reset.
#[derive(Clone, Copy, Default, Debug)]
pub struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    jump: bool,
}

impl HeldKeys {
    pub fn set(&mut self, key: GameKey, pressed: bool) {
        match key {
            GameKey::Up => self.up = pressed,
            GameKey::Down => self.down = pressed,
            GameKey::Left => self.left = pressed,
            GameKey::Right => self.right = pressed,
            GameKey::Jump => self.jump = pressed,
        }
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        match key {
            GameKey::Up => self.up,
            GameKey::Down => self.down,
            GameKey::Left => self.left,
            GameKey::Right => self.right,
            GameKey::Jump => self.jump,
        }
    }

    /// Any of the four movement keys currently down.
    pub fn any_directional(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// What the actor lands into when the jump arc completes with a movement
/// key still held. `Idle` reproduces the original behavior: landing always
/// drops to Idle and the next frame's held-key check resumes Walking.
/// `Resume` goes straight back to Walking in the same tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LandingPolicy {
    Idle,
    Resume,
}

impl FromStr for LandingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "resume" => Ok(Self::Resume),
            other => Err(format!("unknown landing policy '{other}' (expected 'idle' or 'resume')")),
        }
    }
}

/// Tuning knobs for the locomotion core.
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    /// Horizontal step per frame while grounded, in world units.
    pub walk_speed: f32,
    /// Horizontal speed factor applied while airborne.
    pub air_speed_mult: f32,
    /// Peak height of the jump arc above the takeoff baseline.
    pub jump_amplitude: f32,
    /// Half-extent of the square play area the actor is clamped into.
    pub bound: f32,
    pub landing_policy: LandingPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 0.05,
            air_speed_mult: 1.5,
            jump_amplitude: 2.0,
            bound: 10.0,
            landing_policy: LandingPolicy::Idle,
        }
    }
}
