use glam::{Mat3, Vec3};

use crate::state::{check_finite, CameraError};

/// Rotate `front` about the X axis by `angle_degrees`.
///
/// Builds the standard pitch matrix
/// ```text
/// | 1    0       0     |
/// | 0  cos(a) -sin(a)  |
/// | 0  sin(a)  cos(a)  |
/// ```
/// and returns its product with `front`. The result is NOT renormalized;
/// callers applying increments repeatedly renormalize themselves, as
/// [`FreeCamera::look`](crate::FreeCamera::look) does.
pub fn rotate_pitch(front: Vec3, angle_degrees: f32) -> Result<Vec3, CameraError> {
    check_angle(angle_degrees)?;
    check_finite(front)?;
    Ok(Mat3::from_rotation_x(angle_degrees.to_radians()) * front)
}

/// Rotate `front` about the Y axis by `angle_degrees`.
///
/// ```text
/// |  cos(a)  0  sin(a) |
/// |    0     1    0    |
/// | -sin(a)  0  cos(a) |
/// ```
/// Same contract as [`rotate_pitch`].
pub fn rotate_yaw(front: Vec3, angle_degrees: f32) -> Result<Vec3, CameraError> {
    check_angle(angle_degrees)?;
    check_finite(front)?;
    Ok(Mat3::from_rotation_y(angle_degrees.to_radians()) * front)
}

fn check_angle(angle_degrees: f32) -> Result<(), CameraError> {
    if angle_degrees.is_finite() {
        Ok(())
    } else {
        Err(CameraError::NonFiniteAngle(angle_degrees))
    }
}
