//! Whole-loop checks: key events in through the systems layer, transform
//! and clip state out, no window or GL involved.

use glam::{Mat4, Quat, Vec3};
use hecs::{Entity, World};
use sdl2::keyboard::Scancode;

use stroll::anim::{ClipPlayer, CLIP_IDLE, CLIP_JUMP, CLIP_WALK};
use stroll::components::{
    add_child, ActorBody, BlendState, GlobalTransform, LocalTransform,
};
use stroll::controller::{Controller, ControllerConfig, LocomotionState, JUMP_TICK_SECONDS};
use stroll::engine::input::{InputEvent, InputState};
use stroll::systems::{
    animation_system, frame_integrator_system, locomotion_frame_system, locomotion_input_system,
    transform_propagation_system,
};

fn spawn_test_actor(world: &mut World, pos: Vec3) -> Entity {
    world.spawn((
        LocalTransform::new(pos),
        GlobalTransform(Mat4::IDENTITY),
        Controller::new(ControllerConfig::default()),
        ClipPlayer::with_standard_clips(),
        BlendState::new(),
    ))
}

fn press(world: &mut World, scancode: Scancode) {
    let mut input = InputState::new();
    input.events.push(InputEvent::KeyPressed(scancode));
    locomotion_input_system(world, &input);
}

fn release(world: &mut World, scancode: Scancode) {
    let mut input = InputState::new();
    input.events.push(InputEvent::KeyReleased(scancode));
    locomotion_input_system(world, &input);
}

fn step(world: &mut World, dt: f32) {
    locomotion_frame_system(world, dt);
    frame_integrator_system(world, dt);
}

#[test]
fn arrow_up_walks_the_actor_forward() {
    let mut world = World::new();
    let actor = spawn_test_actor(&mut world, Vec3::new(0.0, 1.0, 0.0));

    press(&mut world, Scancode::Up);
    step(&mut world, 0.016);

    {
        let controller = world.get::<&Controller>(actor).unwrap();
        assert!(matches!(controller.state(), LocomotionState::Walking));
        assert_eq!(controller.heading(), 0.0);
        let clips = world.get::<&ClipPlayer>(actor).unwrap();
        assert!(clips.is_playing(CLIP_WALK));
        assert!(!clips.is_playing(CLIP_IDLE));
        let t = world.get::<&LocalTransform>(actor).unwrap();
        assert!((t.position.z - 0.05).abs() < 1e-6);
        assert_eq!(t.position.y, 1.0);
    }

    release(&mut world, Scancode::Up);
    {
        let controller = world.get::<&Controller>(actor).unwrap();
        assert!(matches!(controller.state(), LocomotionState::Idle));
        let clips = world.get::<&ClipPlayer>(actor).unwrap();
        assert!(clips.is_playing(CLIP_IDLE));
        assert!(!clips.is_playing(CLIP_WALK));
    }
}

#[test]
fn space_runs_a_full_jump_arc() {
    let mut world = World::new();
    let actor = spawn_test_actor(&mut world, Vec3::new(0.0, 1.0, 0.0));

    press(&mut world, Scancode::Space);
    {
        let controller = world.get::<&Controller>(actor).unwrap();
        assert!(matches!(controller.state(), LocomotionState::Jumping));
        let clips = world.get::<&ClipPlayer>(actor).unwrap();
        assert!(clips.is_playing(CLIP_JUMP));
        assert!(!clips.is_playing(CLIP_IDLE));
    }

    for _ in 0..5 {
        step(&mut world, JUMP_TICK_SECONDS);
    }
    {
        let t = world.get::<&LocalTransform>(actor).unwrap();
        // Apex: baseline 1 plus the default amplitude of 2.
        assert!((t.position.y - 3.0).abs() < 1e-4, "y {}", t.position.y);
    }

    for _ in 0..5 {
        step(&mut world, JUMP_TICK_SECONDS);
    }
    {
        let controller = world.get::<&Controller>(actor).unwrap();
        assert!(matches!(controller.state(), LocomotionState::Idle));
        let t = world.get::<&LocalTransform>(actor).unwrap();
        assert_eq!(t.position.y, 1.0);
        let clips = world.get::<&ClipPlayer>(actor).unwrap();
        assert!(clips.is_playing(CLIP_IDLE));
        assert!(!clips.is_playing(CLIP_JUMP));
    }
}

#[test]
fn integrator_clamps_into_the_play_area() {
    let mut world = World::new();
    let actor = spawn_test_actor(&mut world, Vec3::new(12.5, 1.0, -11.0));

    frame_integrator_system(&mut world, 0.016);
    {
        let t = world.get::<&LocalTransform>(actor).unwrap();
        assert_eq!(t.position.x, 10.0);
        assert_eq!(t.position.z, -10.0);
    }

    world.get::<&mut LocalTransform>(actor).unwrap().position = Vec3::new(3.25, 1.0, -9.9);
    frame_integrator_system(&mut world, 0.016);
    {
        let t = world.get::<&LocalTransform>(actor).unwrap();
        assert_eq!(t.position.x, 3.25);
        assert_eq!(t.position.z, -9.9);
    }
}

#[test]
fn clip_playback_advances_with_frame_delta() {
    let mut world = World::new();
    let actor = spawn_test_actor(&mut world, Vec3::new(0.0, 1.0, 0.0));

    frame_integrator_system(&mut world, 0.25);
    frame_integrator_system(&mut world, 0.25);

    let clips = world.get::<&ClipPlayer>(actor).unwrap();
    assert!((clips.find(CLIP_IDLE).unwrap().time - 0.5).abs() < 1e-6);
    // Stopped clips hold their time.
    assert_eq!(clips.find(CLIP_WALK).unwrap().time, 0.0);
}

#[test]
fn walking_swings_the_limbs_and_crossfades() {
    let mut world = World::new();
    let actor = spawn_test_actor(&mut world, Vec3::new(0.0, 1.0, 0.0));

    let bone = |world: &mut World, offset: Vec3| {
        world.spawn((
            LocalTransform::new(offset),
            GlobalTransform(Mat4::IDENTITY),
        ))
    };
    let head = bone(&mut world, Vec3::new(0.0, 0.65, 0.0));
    let left_arm = bone(&mut world, Vec3::new(0.4, 0.4, 0.0));
    let right_arm = bone(&mut world, Vec3::new(-0.4, 0.4, 0.0));
    let left_leg = bone(&mut world, Vec3::new(0.15, -0.4, 0.0));
    let right_leg = bone(&mut world, Vec3::new(-0.15, -0.4, 0.0));
    for b in [head, left_arm, right_arm, left_leg, right_leg] {
        add_child(&mut world, actor, b);
    }
    world
        .insert_one(
            actor,
            ActorBody {
                head,
                left_arm,
                right_arm,
                left_leg,
                right_leg,
            },
        )
        .unwrap();

    press(&mut world, Scancode::Up);
    step(&mut world, 0.016);
    animation_system(&mut world, 0.016);

    // The clip just changed, so the crossfade is still in progress.
    {
        let blend = world.get::<&BlendState>(actor).unwrap();
        assert!(blend.blend < 1.0);
        assert!(blend.blend_from.is_some());
    }

    // Let the walk cycle develop; the legs should leave the rest pose.
    for _ in 0..20 {
        step(&mut world, 0.016);
        animation_system(&mut world, 0.016);
    }
    {
        let lt = world.get::<&LocalTransform>(left_leg).unwrap();
        assert!(lt.rotation.angle_between(Quat::IDENTITY) > 0.05);
    }

    transform_propagation_system(&mut world);
    {
        // Children combine the actor's transform with their own offset.
        let head_global = world.get::<&GlobalTransform>(head).unwrap();
        let y = head_global.0.w_axis.y;
        assert!((y - 1.65).abs() < 1e-4, "head global y {y}");
    }
}
