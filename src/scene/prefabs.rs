use glam::{Mat4, Vec3};
use hecs::{Entity, World};

use crate::anim::ClipPlayer;
use crate::components::{
    add_child, ActorBody, BlendState, Checkerboard, Color, GlobalTransform, LocalTransform,
    MeshHandle,
};
use crate::controller::{Controller, ControllerConfig};
use crate::renderer::mesh::{create_box, create_limb, create_plane};
use crate::renderer::MeshStore;

/// Half-extent of the ground square. Matches the clamp bound so the actor
/// can reach the edge of the visible floor but not walk off it.
const GROUND_HALF_EXTENT: f32 = 10.0;

// ---------------------------------------------------------------------------
// ActorRig: private proportions table for spawn_actor
// ---------------------------------------------------------------------------

/// All body proportions and joint offsets in one place. The rig is a
/// blocky five-limb figure: box torso at the root, box head, and four
/// top-pivoted box limbs hanging from shoulders and hips.
struct ActorRig {
    head_size: f32,
    torso_w: f32,
    torso_h: f32,
    torso_d: f32,
    limb_w: f32,
    limb_h: f32,
    limb_d: f32,

    // Attachment points, relative to the torso center.
    shoulder_x: f32,
    shoulder_y: f32,
    hip_x: f32,
    hip_y: f32,

    torso_color: Vec3,
    head_color: Vec3,
    arm_color: Vec3,
    leg_color: Vec3,
}

impl ActorRig {
    fn head_y(&self) -> f32 {
        self.torso_h / 2.0 + self.head_size / 2.0
    }
}

fn default_rig() -> ActorRig {
    ActorRig {
        head_size: 0.5,
        torso_w: 0.55,
        torso_h: 0.8,
        torso_d: 0.3,
        limb_w: 0.22,
        limb_h: 0.72,
        limb_d: 0.22,

        shoulder_x: 0.4,
        shoulder_y: 0.4,
        hip_x: 0.15,
        hip_y: -0.4,

        torso_color: Vec3::new(0.0, 0.55, 0.55),
        head_color: Vec3::new(0.78, 0.6, 0.45),
        arm_color: Vec3::new(0.0, 0.55, 0.55),
        leg_color: Vec3::new(0.25, 0.3, 0.6),
    }
}

// ---------------------------------------------------------------------------
// Public prefab factories
// ---------------------------------------------------------------------------

/// Spawn the ground: a 20x20 plane with its top at Y=0, two-tone tiled.
pub fn spawn_ground(world: &mut World, meshes: &mut MeshStore) -> Entity {
    let ground_handle = meshes.add(create_plane(GROUND_HALF_EXTENT));
    world.spawn((
        LocalTransform::new(Vec3::ZERO),
        GlobalTransform(Mat4::IDENTITY),
        ground_handle,
        Color(Vec3::new(0.45, 0.55, 0.35)),
        Checkerboard(Vec3::new(0.36, 0.45, 0.28)),
    ))
}

fn spawn_body(
    world: &mut World,
    actor: Entity,
    head_handle: MeshHandle,
    limb_handle: MeshHandle,
    rig: &ActorRig,
) -> ActorBody {
    // Head, a cube sitting on top of the torso.
    let head = world.spawn((
        LocalTransform::new(Vec3::new(0.0, rig.head_y(), 0.0)),
        GlobalTransform(Mat4::IDENTITY),
        head_handle,
        Color(rig.head_color),
    ));
    add_child(world, actor, head);

    // Arms hang from the shoulders (+X = left), legs from the hips. The
    // limb mesh pivots at its top, so pose rotations swing the segment
    // about the joint.
    let mut limb = |x: f32, y: f32, color: Vec3| {
        let e = world.spawn((
            LocalTransform::new(Vec3::new(x, y, 0.0)),
            GlobalTransform(Mat4::IDENTITY),
            limb_handle,
            Color(color),
        ));
        add_child(world, actor, e);
        e
    };

    let left_arm = limb(rig.shoulder_x, rig.shoulder_y, rig.arm_color);
    let right_arm = limb(-rig.shoulder_x, rig.shoulder_y, rig.arm_color);
    let left_leg = limb(rig.hip_x, rig.hip_y, rig.leg_color);
    let right_leg = limb(-rig.hip_x, rig.hip_y, rig.leg_color);

    ActorBody {
        head,
        left_arm,
        right_arm,
        left_leg,
        right_leg,
    }
}

/// Spawn the controllable actor at `pos` with its full body, clip set
/// (idle already playing), and locomotion controller. Returns the actor
/// entity; the ActorBody component is also inserted onto it.
pub fn spawn_actor(
    world: &mut World,
    meshes: &mut MeshStore,
    pos: Vec3,
    config: ControllerConfig,
) -> Entity {
    let rig = default_rig();

    let torso_handle = meshes.add(create_box(rig.torso_w, rig.torso_h, rig.torso_d));
    let head_handle = meshes.add(create_box(rig.head_size, rig.head_size, rig.head_size));
    let limb_handle = meshes.add(create_limb(rig.limb_w, rig.limb_h, rig.limb_d));

    let mut actor_t = LocalTransform::new(pos);
    actor_t.scale = Vec3::splat(0.5);

    let actor = world.spawn((
        actor_t,
        GlobalTransform(Mat4::IDENTITY),
        torso_handle,
        Color(rig.torso_color),
        Controller::new(config),
        ClipPlayer::with_standard_clips(),
        BlendState::new(),
    ));

    let body = spawn_body(world, actor, head_handle, limb_handle, &rig);
    world.insert_one(actor, body).unwrap();

    actor
}
