use hecs::World;

use crate::anim::ClipPlayer;
use crate::components::LocalTransform;
use crate::controller::Controller;

/// End-of-frame integration: advance clip playback by the frame delta,
/// then clamp the actor's horizontal position into the square play area.
/// The clamp is a hard wall, applied after movement: the actor can touch
/// the boundary but never ends a frame outside it.
pub fn frame_integrator_system(world: &mut World, dt: f32) {
    for (_e, (controller, clips, transform)) in
        world.query_mut::<(&Controller, &mut ClipPlayer, Option<&mut LocalTransform>)>()
    {
        clips.advance(dt);
        if let Some(transform) = transform {
            let bound = controller.config.bound;
            transform.position.x = transform.position.x.clamp(-bound, bound);
            transform.position.z = transform.position.z.clamp(-bound, bound);
        }
    }
}
