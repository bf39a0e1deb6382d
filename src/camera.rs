use glam::{Mat4, Vec3};

/// Fixed viewpoint: raised behind the play area, looking at the origin.
/// The demo has no camera controls; the framing never changes.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::ZERO,
            fov_deg: 50.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), aspect, 0.1, 100.0)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
