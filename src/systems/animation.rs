use std::f32::consts::TAU;

use glam::Quat;
use hecs::{Entity, World};

use crate::anim::{ClipKind, ClipPlayer};
use crate::components::{ActorBody, BlendState, BonePose, LocalTransform};

// Stride and sway tuning for the procedural clip poses.
const IDLE_HZ: f32 = 0.3;
const IDLE_SWAY: f32 = 0.04;
const WALK_HZ: f32 = 1.6;
const WALK_SWING: f32 = 0.7;

fn rest_pose() -> BonePose {
    BonePose {
        head: Quat::IDENTITY,
        left_arm: Quat::IDENTITY,
        right_arm: Quat::IDENTITY,
        left_leg: Quat::IDENTITY,
        right_leg: Quat::IDENTITY,
    }
}

/// Slow breathing oscillation: arms drift a few hundredths of a radian.
fn pose_idle(time: f32) -> BonePose {
    let sway = (TAU * IDLE_HZ * time).sin() * IDLE_SWAY;
    BonePose {
        left_arm: Quat::from_rotation_x(-sway),
        right_arm: Quat::from_rotation_x(sway),
        ..rest_pose()
    }
}

/// Stride cycle: arms and legs counter-swing, head bobs a touch.
fn pose_walk(time: f32) -> BonePose {
    let phase = TAU * WALK_HZ * time;
    let s = phase.sin();
    BonePose {
        head: Quat::from_rotation_z(phase.cos() * 0.02),
        left_arm: Quat::from_rotation_x(-WALK_SWING * 0.6 * s),
        right_arm: Quat::from_rotation_x(WALK_SWING * 0.6 * s),
        left_leg: Quat::from_rotation_x(WALK_SWING * s),
        right_leg: Quat::from_rotation_x(-WALK_SWING * s),
    }
}

/// Held tuck for the whole arc: arms back, knees drawn up.
fn pose_jump() -> BonePose {
    BonePose {
        left_arm: Quat::from_rotation_x(-0.45),
        right_arm: Quat::from_rotation_x(-0.45),
        left_leg: Quat::from_rotation_x(0.35),
        right_leg: Quat::from_rotation_x(0.35),
        ..rest_pose()
    }
}

fn sample_pose(kind: ClipKind, time: f32) -> BonePose {
    match kind {
        ClipKind::Idle => pose_idle(time),
        ClipKind::Walk => pose_walk(time),
        ClipKind::Jump => pose_jump(),
    }
}

fn slerp_pose(a: &BonePose, b: &BonePose, t: f32) -> BonePose {
    BonePose {
        head: a.head.slerp(b.head, t),
        left_arm: a.left_arm.slerp(b.left_arm, t),
        right_arm: a.right_arm.slerp(b.right_arm, t),
        left_leg: a.left_leg.slerp(b.left_leg, t),
        right_leg: a.right_leg.slerp(b.right_leg, t),
    }
}

fn snapshot_bones(world: &World, body: &ActorBody) -> BonePose {
    let rot = |e: Entity| {
        world
            .get::<&LocalTransform>(e)
            .map(|lt| lt.rotation)
            .unwrap_or(Quat::IDENTITY)
    };
    BonePose {
        head: rot(body.head),
        left_arm: rot(body.left_arm),
        right_arm: rot(body.right_arm),
        left_leg: rot(body.left_leg),
        right_leg: rot(body.right_leg),
    }
}

fn apply_pose(world: &mut World, body: &ActorBody, pose: &BonePose) {
    let mut set_rot = |e: Entity, r: Quat| {
        if let Ok(mut lt) = world.get::<&mut LocalTransform>(e) {
            lt.rotation = r;
        }
    };
    set_rot(body.head, pose.head);
    set_rot(body.left_arm, pose.left_arm);
    set_rot(body.right_arm, pose.right_arm);
    set_rot(body.left_leg, pose.left_leg);
    set_rot(body.right_leg, pose.right_leg);
}

/// Sample the active clip into limb rotations, crossfading from the pose
/// that was on screen when the active clip last changed. Runs after the
/// integrator (clip times are fresh) and before transform propagation.
pub fn animation_system(world: &mut World, dt: f32) {
    struct FrameData {
        entity: Entity,
        kind: ClipKind,
        time: f32,
        blend: f32,
        blend_speed: f32,
        blend_from: Option<BonePose>,
        changed: bool,
        body: ActorBody,
    }

    // Phase 1: collect under shared borrows; the query is released before
    // any per-entity writes below.
    let actors: Vec<FrameData> = world
        .query::<(&ClipPlayer, &ActorBody, &BlendState)>()
        .iter()
        .filter_map(|(e, (clips, body, blend))| {
            let clip = clips.active()?;
            Some(FrameData {
                entity: e,
                kind: clip.kind,
                time: clip.time,
                blend: blend.blend,
                blend_speed: blend.blend_speed,
                blend_from: blend.blend_from,
                changed: blend.last_kind != Some(clip.kind),
                body: *body,
            })
        })
        .collect();

    // Phase 2: compute and apply.
    for fd in actors {
        let (blend_from, blend) = if fd.changed {
            (Some(snapshot_bones(world, &fd.body)), 0.0)
        } else {
            (fd.blend_from, fd.blend)
        };

        let blend = (blend + fd.blend_speed * dt).min(1.0);
        let target = sample_pose(fd.kind, fd.time);
        let final_pose = match blend_from {
            Some(ref from) if blend < 1.0 => slerp_pose(from, &target, blend),
            _ => target,
        };

        if let Ok(mut bs) = world.get::<&mut BlendState>(fd.entity) {
            bs.blend = blend;
            bs.blend_from = blend_from;
            bs.last_kind = Some(fd.kind);
        }

        apply_pose(world, &fd.body, &final_pose);
    }
}
