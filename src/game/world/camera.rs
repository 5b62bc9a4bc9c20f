use glam::{Mat4, Quat, Vec3, Vec4};

use crate::engine::Ray;

/// Perspective camera looking down its local -Z axis.
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 1.6, 0.0),
            rotation: Quat::IDENTITY,
            fov_y: 60.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_proj_mat(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Ray from the near plane through a pixel, with y growing downwards.
    pub fn screen_point_to_ray(&self, x: f32, y: f32, width: f32, height: f32) -> Ray {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let ndc_x = 2.0 * x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * y / height;
        let inv = self.view_proj_mat(width / height).inverse();

        let unproject = |z: f32| {
            let p = inv * Vec4::new(ndc_x, ndc_y, z, 1.0);
            p.truncate() / p.w
        };
        // wgpu clip space puts depth in [0, 1].
        let near = unproject(0.0);
        let far = unproject(1.0);
        Ray::new(near, far - near)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
