use hecs::World;
use sdl2::keyboard::Scancode;

use crate::anim::ClipPlayer;
use crate::components::LocalTransform;
use crate::controller::{Controller, GameKey};
use crate::engine::input::{InputEvent, InputState};

/// Fixed key binding: arrow keys move, space jumps. No remapping.
fn game_key(scancode: Scancode) -> Option<GameKey> {
    match scancode {
        Scancode::Up => Some(GameKey::Up),
        Scancode::Down => Some(GameKey::Down),
        Scancode::Left => Some(GameKey::Left),
        Scancode::Right => Some(GameKey::Right),
        Scancode::Space => Some(GameKey::Jump),
        _ => None,
    }
}

/// Feed this frame's key edges, in arrival order, into the controller.
/// Runs before [`locomotion_frame_system`].
pub fn locomotion_input_system(world: &mut World, input: &InputState) {
    for (_e, (controller, clips, mut transform)) in
        world.query_mut::<(&mut Controller, &mut ClipPlayer, Option<&mut LocalTransform>)>()
    {
        for event in &input.events {
            match event {
                InputEvent::KeyPressed(sc) => {
                    if let Some(key) = game_key(*sc) {
                        controller.key_down(key, clips, transform.as_mut().map(|t| &mut **t));
                    }
                }
                InputEvent::KeyReleased(sc) => {
                    if let Some(key) = game_key(*sc) {
                        controller.key_up(key, clips);
                    }
                }
            }
        }
    }
}

/// Advance the controller one frame: jump arc, heading, horizontal step.
pub fn locomotion_frame_system(world: &mut World, dt: f32) {
    for (_e, (controller, clips, transform)) in
        world.query_mut::<(&mut Controller, &mut ClipPlayer, Option<&mut LocalTransform>)>()
    {
        controller.frame(dt, clips, transform);
    }
}
