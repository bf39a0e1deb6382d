use glam::Quat;
use hecs::Entity;

use crate::anim::ClipKind;

/// Tracks the limb entities that make up the actor's blocky body.
/// Attached to the actor entity for direct access from the pose system.
#[derive(Clone, Copy)]
pub struct ActorBody {
    pub head: Entity,
    pub left_arm: Entity,
    pub right_arm: Entity,
    pub left_leg: Entity,
    pub right_leg: Entity,
}

/// A snapshot of all limb orientations, used for crossfade blending.
#[derive(Clone, Copy)]
pub struct BonePose {
    pub head: Quat,
    pub left_arm: Quat,
    pub right_arm: Quat,
    pub left_leg: Quat,
    pub right_leg: Quat,
}

/// Crossfade bookkeeping for the pose system, attached to the actor.
pub struct BlendState {
    /// Blend factor: 0.0 = blend_from pose, 1.0 = current clip's pose.
    pub blend: f32,
    /// Speed at which blend approaches 1.0 (per second).
    pub blend_speed: f32,
    /// Snapshot of limb rotations taken when the active clip changed.
    pub blend_from: Option<BonePose>,
    /// Which clip the snapshot was taken against.
    pub last_kind: Option<ClipKind>,
}

impl BlendState {
    pub fn new() -> Self {
        Self {
            blend: 1.0,
            blend_speed: 8.0,
            blend_from: None,
            last_kind: None,
        }
    }
}

impl Default for BlendState {
    fn default() -> Self {
        Self::new()
    }
}
