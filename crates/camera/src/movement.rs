use glam::Vec3;

use crate::flags::MovementFlags;
use crate::state::{check_finite, CameraError, CameraState, MIN_DIRECTION_LENGTH_SQUARED};

/// Integrate one frame of movement into `state.position`.
///
/// Each set flag contributes `step` units along its axis: `up`/`down` along
/// the up vector, `left`/`right` along the normalized `cross(front, up)`,
/// `forward`/`backward` along the front vector. Contributions are summed
/// and committed in one assignment, so on error the position is untouched.
/// `front` and `up` are read-only here.
///
/// Errors if `front` or `up` is non-finite, or if a strafe flag is set
/// while `cross(front, up)` has near-zero length (front collinear with up).
pub fn apply_movement(
    state: &mut CameraState,
    flags: MovementFlags,
    step: f32,
) -> Result<(), CameraError> {
    check_finite(state.front)?;
    check_finite(state.up)?;

    let mut delta = Vec3::ZERO;
    if flags.up {
        delta += step * state.up;
    }
    if flags.down {
        delta -= step * state.up;
    }
    if flags.left || flags.right {
        let side = strafe_axis(state.front, state.up)?;
        if flags.left {
            delta -= step * side;
        }
        if flags.right {
            delta += step * side;
        }
    }
    if flags.forward {
        tracing::trace!("moving forward");
        delta += step * state.front;
    }
    if flags.backward {
        tracing::trace!("moving backward");
        delta -= step * state.front;
    }

    state.position += delta;
    Ok(())
}

/// Unit vector pointing to the camera's right.
fn strafe_axis(front: Vec3, up: Vec3) -> Result<Vec3, CameraError> {
    let side = front.cross(up);
    if side.length_squared() < MIN_DIRECTION_LENGTH_SQUARED {
        return Err(CameraError::DegenerateDirection);
    }
    Ok(side.normalize())
}
