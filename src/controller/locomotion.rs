//! The locomotion state machine.
//!
//! Key edges arrive from the platform layer, the per-frame update applies
//! displacement and the jump arc. Clip switching goes through the
//! [`ClipPlayer`]'s play/stop/restart surface, which tolerates missing
//! clips, so the machine never has to care whether a clip actually loaded.

use glam::Quat;

use crate::anim::{ClipPlayer, CLIP_IDLE, CLIP_JUMP, CLIP_WALK};
use crate::components::LocalTransform;

use super::{heading, ControllerConfig, GameKey, HeldKeys, JumpTick, JumpTimer, LandingPolicy};

/// Discrete movement mode of the actor.
///
/// Idle and Walking toggle with the presence of held movement keys.
/// Jumping overrides both: it is entered on the jump key edge, rejects
/// re-entry, and only the jump timer's completion leaves it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LocomotionState {
    Idle,
    Walking,
    Jumping,
}

/// Owns every piece of mutable control state for one actor: the held-key
/// set, the locomotion state, the last resolved heading, and the jump
/// timer while one is in flight. Attached to the actor entity as a plain
/// component; the platform layer calls in, nothing global.
pub struct Controller {
    pub config: ControllerConfig,
    held: HeldKeys,
    state: LocomotionState,
    heading: f32,
    jump: Option<JumpTimer>,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            held: HeldKeys::default(),
            state: LocomotionState::Idle,
            heading: 0.0,
            jump: None,
        }
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    /// Yaw the actor faces and moves along, in radians. Holds its last
    /// value while no movement key is down.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn jump_timer(&self) -> Option<&JumpTimer> {
        self.jump.as_ref()
    }

    /// Key-down edge. The held set is updated unconditionally; state and
    /// clip reactions are skipped while the actor transform is not there
    /// yet (startup, before the rig has been spawned).
    pub fn key_down(
        &mut self,
        key: GameKey,
        clips: &mut ClipPlayer,
        transform: Option<&mut LocalTransform>,
    ) {
        self.held.set(key, true);
        let Some(transform) = transform else {
            log::debug!("{key:?} pressed before the actor exists, held-state recorded only");
            return;
        };
        match key {
            GameKey::Jump => {
                // A second jump press mid-flight is rejected outright.
                if self.state != LocomotionState::Jumping {
                    self.enter_jumping(clips, transform.position.y);
                }
            }
            _ => {
                if self.state == LocomotionState::Idle {
                    self.enter_walking(clips);
                }
            }
        }
    }

    /// Key-up edge. Walking drops back to Idle only once every movement
    /// key is released; mid-flight releases change nothing but the set.
    pub fn key_up(&mut self, key: GameKey, clips: &mut ClipPlayer) {
        self.held.set(key, false);
        if key.is_directional()
            && self.state == LocomotionState::Walking
            && !self.held.any_directional()
        {
            self.enter_idle(clips);
        }
    }

    /// Per-frame update: advance the jump arc, then apply this frame's
    /// horizontal step along the freshly resolved heading. No-op without
    /// a transform to write to.
    pub fn frame(
        &mut self,
        dt: f32,
        clips: &mut ClipPlayer,
        transform: Option<&mut LocalTransform>,
    ) {
        let Some(transform) = transform else { return };

        // Pick Walking back up from a previous frame's landing before the
        // arc is sampled, so a landing this frame still gets its one Idle
        // frame under the default policy.
        if self.state == LocomotionState::Idle && self.held.any_directional() {
            self.enter_walking(clips);
        }

        if let Some(timer) = self.jump.as_mut() {
            match timer.advance(dt, self.config.jump_amplitude) {
                Some(JumpTick::Airborne(height)) => transform.position.y = height,
                Some(JumpTick::Landed(baseline)) => {
                    transform.position.y = baseline;
                    self.jump = None;
                    self.land(clips);
                }
                None => {}
            }
        }

        let moving = self.held.any_directional()
            && matches!(
                self.state,
                LocomotionState::Walking | LocomotionState::Jumping
            );
        if moving {
            if let Some(angle) = heading::resolve(&self.held) {
                self.heading = angle;
            }
            transform.rotation = Quat::from_rotation_y(self.heading);
            let mult = if self.state == LocomotionState::Jumping {
                self.config.air_speed_mult
            } else {
                1.0
            };
            let step = mult * self.config.walk_speed;
            transform.position.x += step * self.heading.sin();
            transform.position.z += step * self.heading.cos();
        }
    }

    fn enter_walking(&mut self, clips: &mut ClipPlayer) {
        clips.stop(CLIP_IDLE);
        clips.play(CLIP_WALK);
        self.go(LocomotionState::Walking);
    }

    fn enter_idle(&mut self, clips: &mut ClipPlayer) {
        clips.stop(CLIP_WALK);
        clips.play(CLIP_IDLE);
        self.go(LocomotionState::Idle);
    }

    fn enter_jumping(&mut self, clips: &mut ClipPlayer, baseline: f32) {
        clips.stop(CLIP_WALK);
        clips.stop(CLIP_IDLE);
        clips.restart(CLIP_JUMP);
        self.jump = Some(JumpTimer::start(baseline));
        self.go(LocomotionState::Jumping);
    }

    fn land(&mut self, clips: &mut ClipPlayer) {
        clips.stop(CLIP_JUMP);
        if self.config.landing_policy == LandingPolicy::Resume && self.held.any_directional() {
            clips.play(CLIP_WALK);
            self.go(LocomotionState::Walking);
        } else {
            clips.play(CLIP_IDLE);
            self.go(LocomotionState::Idle);
        }
    }

    fn go(&mut self, next: LocomotionState) {
        log::debug!("locomotion: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
