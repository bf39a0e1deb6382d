use anyhow::Result;
use hecs::World;
use sdl2::Sdl;

use crate::camera::Camera;
use crate::engine::input::InputState;
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::{MeshStore, Renderer};
use crate::systems::{
    animation_system, frame_integrator_system, locomotion_frame_system, locomotion_input_system,
    transform_propagation_system,
};

pub struct DemoApp {
    world: World,
    meshes: MeshStore,
    camera: Camera,
    renderer: Renderer,
}

impl DemoApp {
    /// Requires a live GL context (create the window first).
    pub fn new(world: World, meshes: MeshStore) -> Result<Self> {
        Ok(Self {
            world,
            meshes,
            camera: Camera::new(),
            renderer: Renderer::init()?,
        })
    }

    pub fn run(&mut self, sdl: &Sdl, window: &GameWindow) -> Result<()> {
        let mut event_pump = sdl.event_pump().map_err(anyhow::Error::msg)?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.should_quit() {
                break;
            }

            // Key edges first, then the per-frame controller step, then
            // integration (clip time + bounds). Pose sampling and transform
            // propagation run last so rendering sees this frame's state.
            locomotion_input_system(&mut self.world, &input);
            locomotion_frame_system(&mut self.world, timer.dt);
            frame_integrator_system(&mut self.world, timer.dt);
            animation_system(&mut self.world, timer.dt);
            transform_propagation_system(&mut self.world);

            let view = self.camera.view_matrix();
            let proj = self.camera.projection_matrix(window.aspect_ratio());
            self.renderer.draw_scene(&self.world, &self.meshes, &view, &proj);

            window.swap();
        }

        Ok(())
    }
}
