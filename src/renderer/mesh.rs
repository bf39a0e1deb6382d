use gl::types::*;
use std::mem;
use std::ptr;

pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    pub index_count: i32,
}

impl Mesh {
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(gl::TRIANGLES, self.index_count, gl::UNSIGNED_INT, ptr::null());
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

/// Vertex layout: position (location 0) and normal (location 1), interleaved.
fn upload_mesh(vertices: &[f32], indices: &[u32]) -> Mesh {
    let mut vao = 0;
    let mut vbo = 0;
    let mut ebo = 0;

    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::GenBuffers(1, &mut vbo);
        gl::GenBuffers(1, &mut ebo);

        gl::BindVertexArray(vao);

        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (vertices.len() * mem::size_of::<f32>()) as GLsizeiptr,
            vertices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            (indices.len() * mem::size_of::<u32>()) as GLsizeiptr,
            indices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        let stride = 6 * mem::size_of::<f32>() as GLsizei;

        gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, ptr::null());
        gl::EnableVertexAttribArray(0);

        gl::VertexAttribPointer(
            1,
            3,
            gl::FLOAT,
            gl::FALSE,
            stride,
            (3 * mem::size_of::<f32>()) as *const _,
        );
        gl::EnableVertexAttribArray(1);

        gl::BindVertexArray(0);
    }

    Mesh {
        vao,
        vbo,
        ebo,
        index_count: indices.len() as i32,
    }
}

/// Flat square in the XZ plane, normal up, centered at the origin.
pub fn create_plane(half_extent: f32) -> Mesh {
    let h = half_extent;
    #[rustfmt::skip]
    let vertices: [f32; 24] = [
        -h, 0.0, -h,  0.0, 1.0, 0.0,
         h, 0.0, -h,  0.0, 1.0, 0.0,
         h, 0.0,  h,  0.0, 1.0, 0.0,
        -h, 0.0,  h,  0.0, 1.0, 0.0,
    ];
    let indices: [u32; 6] = [0, 2, 1, 0, 3, 2];
    upload_mesh(&vertices, &indices)
}

fn build_box(x0: f32, x1: f32, y0: f32, y1: f32, z0: f32, z1: f32) -> Mesh {
    #[rustfmt::skip]
    let vertices: [f32; 144] = [
        // +X
        x1, y0, z0,  1.0, 0.0, 0.0,
        x1, y1, z0,  1.0, 0.0, 0.0,
        x1, y1, z1,  1.0, 0.0, 0.0,
        x1, y0, z1,  1.0, 0.0, 0.0,
        // -X
        x0, y0, z1, -1.0, 0.0, 0.0,
        x0, y1, z1, -1.0, 0.0, 0.0,
        x0, y1, z0, -1.0, 0.0, 0.0,
        x0, y0, z0, -1.0, 0.0, 0.0,
        // +Y
        x0, y1, z0,  0.0, 1.0, 0.0,
        x0, y1, z1,  0.0, 1.0, 0.0,
        x1, y1, z1,  0.0, 1.0, 0.0,
        x1, y1, z0,  0.0, 1.0, 0.0,
        // -Y
        x0, y0, z1,  0.0, -1.0, 0.0,
        x0, y0, z0,  0.0, -1.0, 0.0,
        x1, y0, z0,  0.0, -1.0, 0.0,
        x1, y0, z1,  0.0, -1.0, 0.0,
        // +Z
        x0, y0, z1,  0.0, 0.0, 1.0,
        x1, y0, z1,  0.0, 0.0, 1.0,
        x1, y1, z1,  0.0, 0.0, 1.0,
        x0, y1, z1,  0.0, 0.0, 1.0,
        // -Z
        x1, y0, z0,  0.0, 0.0, -1.0,
        x0, y0, z0,  0.0, 0.0, -1.0,
        x0, y1, z0,  0.0, 0.0, -1.0,
        x1, y1, z0,  0.0, 0.0, -1.0,
    ];
    let mut indices = Vec::with_capacity(36);
    for face in 0..6u32 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    upload_mesh(&vertices, &indices)
}

/// Axis-aligned box centered on the origin.
pub fn create_box(width: f32, height: f32, depth: f32) -> Mesh {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    build_box(-hw, hw, -hh, hh, -hd, hd)
}

/// Box hanging below its origin: Y spans [-height, 0]. Used for limbs so
/// a rotation swings the whole segment about the shoulder or hip joint.
pub fn create_limb(width: f32, height: f32, depth: f32) -> Mesh {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    build_box(-hw, hw, -height, 0.0, -hd, hd)
}
