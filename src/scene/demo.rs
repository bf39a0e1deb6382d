use glam::Vec3;
use hecs::{Entity, World};

use crate::controller::ControllerConfig;
use crate::renderer::MeshStore;
use crate::scene::prefabs::{spawn_actor, spawn_ground};

/// Build and populate the demo scene: ground plane plus the controllable
/// actor at its start position, one unit above the floor.
/// Returns the mesh store (owns all GPU mesh data) and the actor entity.
pub fn load_demo_scene(world: &mut World, config: ControllerConfig) -> (MeshStore, Entity) {
    let mut meshes = MeshStore::new();

    spawn_ground(world, &mut meshes);
    let actor = spawn_actor(world, &mut meshes, Vec3::new(0.0, 1.0, 0.0), config);

    (meshes, actor)
}
