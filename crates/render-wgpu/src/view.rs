use freefly_camera::CameraState;
use glam::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// View matrix looking from the camera position toward `position + front`.
pub fn view_matrix(state: &CameraState) -> Mat4 {
    Mat4::look_at_rh(state.position, state.position + state.front, state.up)
}

/// Combined projection * view for the given camera and aspect ratio.
pub fn view_projection(state: &CameraState, projection: &Projection, aspect: f32) -> Mat4 {
    projection.matrix(aspect) * view_matrix(state)
}
