pub mod mesh;
pub mod shader;

use anyhow::Result;
use glam::{Mat4, Vec3};
use hecs::World;
use mesh::Mesh;
use shader::ShaderProgram;

use crate::components::{Checkerboard, Color, GlobalTransform, MeshHandle};

const VERT_SRC: &str = include_str!("../../shaders/scene.vert");
const FRAG_SRC: &str = include_str!("../../shaders/scene.frag");

const SKY_COLOR: Vec3 = Vec3::new(0.53, 0.74, 0.92);
// Sun sits up at (5, 5, 5) shining toward the origin.
const LIGHT_DIR: Vec3 = Vec3::new(-1.0, -1.0, -1.0);
const AMBIENT: f32 = 0.5;

/// Holds all loaded meshes. Entities reference meshes by MeshHandle index.
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> &Mesh {
        &self.meshes[handle.0]
    }
}

impl Default for MeshStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Renderer {
    shader: ShaderProgram,
}

impl Renderer {
    pub fn init() -> Result<Self> {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::ClearColor(SKY_COLOR.x, SKY_COLOR.y, SKY_COLOR.z, 1.0);
        }

        let shader = ShaderProgram::from_sources(VERT_SRC, FRAG_SRC)?;

        Ok(Self { shader })
    }

    pub fn draw_scene(&mut self, world: &World, meshes: &MeshStore, view: &Mat4, proj: &Mat4) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.shader.bind();
        self.shader.set_mat4("u_view", view);
        self.shader.set_mat4("u_projection", proj);
        self.shader.set_vec3("u_light_dir", LIGHT_DIR);
        self.shader.set_float("u_ambient", AMBIENT);

        for (_entity, (global_transform, mesh_handle, color, checker)) in world
            .query::<(&GlobalTransform, &MeshHandle, &Color, Option<&Checkerboard>)>()
            .iter()
        {
            self.shader.set_mat4("u_model", &global_transform.0);
            self.shader.set_vec3("u_object_color", color.0);
            if let Some(checker) = checker {
                self.shader.set_int("u_checkerboard", 1);
                self.shader.set_vec3("u_object_color_2", checker.0);
            } else {
                self.shader.set_int("u_checkerboard", 0);
            }
            meshes.get(*mesh_handle).draw();
        }
    }
}
