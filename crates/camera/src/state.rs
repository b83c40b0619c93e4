use glam::Vec3;

/// Squared length below which a direction cannot be safely normalized.
pub(crate) const MIN_DIRECTION_LENGTH_SQUARED: f32 = 1e-12;

/// Errors from camera operations on degenerate input.
///
/// The windowing system normally delivers finite values, so these fire only
/// on genuinely broken state, instead of letting a NaN reach the view matrix.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// A rotation angle was NaN or infinite.
    #[error("non-finite rotation angle: {0}")]
    NonFiniteAngle(f32),
    /// A direction vector had a NaN or infinite component.
    #[error("non-finite direction vector: {0}")]
    NonFiniteVector(Vec3),
    /// A vector that must be normalizable had near-zero length: a zero
    /// front or up, or front collinear with up while strafing.
    #[error("degenerate direction: cannot normalize a near-zero vector")]
    DegenerateDirection,
}

/// The camera's spatial state: where it sits and which way it faces.
///
/// `up` is the world-up reference and is never mutated by the camera
/// operations; `position` and `front` are. `front` is a direction, not a
/// target point; the render layer builds its look-at target from
/// `position + front`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Facing direction. Kept at unit length by [`FreeCamera`](crate::FreeCamera);
    /// the raw operations accept any finite vector.
    pub front: Vec3,
    /// World-up reference, conventionally +Y.
    pub up: Vec3,
}

impl CameraState {
    /// State with the given position and facing, up fixed at +Y.
    pub fn new(position: Vec3, front: Vec3) -> Self {
        Self {
            position,
            front,
            up: Vec3::Y,
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.0, 1.0, 3.0),
            front: Vec3::new(-0.5, 0.0, -1.0),
            up: Vec3::Y,
        }
    }
}

/// Reject vectors with NaN or infinite components.
pub(crate) fn check_finite(v: Vec3) -> Result<(), CameraError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(CameraError::NonFiniteVector(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_named_constants() {
        let state = CameraState::default();
        assert_eq!(state.position, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(state.front, Vec3::new(-0.5, 0.0, -1.0));
        assert_eq!(state.up, Vec3::Y);
    }

    #[test]
    fn new_fixes_up_at_world_y() {
        let state = CameraState::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(state.up, Vec3::Y);
    }

    #[test]
    fn check_finite_accepts_ordinary_vectors() {
        assert!(check_finite(Vec3::new(-0.5, 0.0, -1.0)).is_ok());
        assert!(check_finite(Vec3::ZERO).is_ok());
    }

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert!(matches!(
            check_finite(Vec3::new(f32::NAN, 0.0, 0.0)),
            Err(CameraError::NonFiniteVector(_))
        ));
        assert!(matches!(
            check_finite(Vec3::new(0.0, f32::INFINITY, 0.0)),
            Err(CameraError::NonFiniteVector(_))
        ));
    }
}
