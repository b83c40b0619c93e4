use glam::Vec3;

use crate::flags::MovementFlags;
use crate::movement::apply_movement;
use crate::rotation::{rotate_pitch, rotate_yaw};
use crate::state::{CameraError, CameraState, MIN_DIRECTION_LENGTH_SQUARED};

/// Distance moved along each requested axis per `advance` call.
pub const DEFAULT_STEP: f32 = 0.05;

/// Degrees of rotation applied per pixel of pointer travel.
pub const DEFAULT_SENSITIVITY: f32 = 1.0;

/// Tuning knobs for [`FreeCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Movement distance per `advance` call, per axis.
    pub step: f32,
    /// Degrees per pixel of pointer delta.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// Free-fly camera: pointer deltas rotate the facing vector, held keys
/// translate the position.
///
/// Looking is purely incremental. Each `look` call rotates the current
/// front vector by the frame's pointer delta and renormalizes, so there
/// are no stored yaw/pitch angles and no pitch limit. Rolling the pointer
/// back retraces the same arc in reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeCamera {
    pub state: CameraState,
    pub config: CameraConfig,
}

impl FreeCamera {
    pub fn new(state: CameraState, config: CameraConfig) -> Self {
        Self { state, config }
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn front(&self) -> Vec3 {
        self.state.front
    }

    pub fn up(&self) -> Vec3 {
        self.state.up
    }

    /// Rotate the facing vector by one frame of pointer travel.
    ///
    /// Horizontal travel yaws about the world Y axis, vertical travel
    /// pitches about the world X axis, in that order. Pixel deltas are
    /// scaled into degrees by `config.sensitivity`. The resulting front
    /// is renormalized before being stored, so rounding from repeated
    /// rotations never accumulates into the vector's length.
    pub fn look(&mut self, dx_pixels: f32, dy_pixels: f32) -> Result<(), CameraError> {
        let front = rotate_yaw(self.state.front, dx_pixels * self.config.sensitivity)?;
        let front = rotate_pitch(front, dy_pixels * self.config.sensitivity)?;
        if front.length_squared() < MIN_DIRECTION_LENGTH_SQUARED {
            return Err(CameraError::DegenerateDirection);
        }
        self.state.front = front.normalize();
        Ok(())
    }

    /// Integrate one frame of held movement keys into the position.
    pub fn advance(&mut self, flags: MovementFlags) -> Result<(), CameraError> {
        apply_movement(&mut self.state, flags, self.config.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn default_config_values() {
        let config = CameraConfig::default();
        assert_eq!(config.step, 0.05);
        assert_eq!(config.sensitivity, 1.0);
    }

    #[test]
    fn look_keeps_front_unit_length() {
        let mut camera = FreeCamera::default();
        for _ in 0..1000 {
            camera.look(3.7, -1.3).unwrap();
            assert!((camera.front().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn look_yaws_then_pitches() {
        let mut camera = FreeCamera::default();
        camera.look(30.0, 12.5).unwrap();

        let yawed = rotate_yaw(CameraState::default().front, 30.0).unwrap();
        let expected = rotate_pitch(yawed, 12.5).unwrap().normalize();
        assert!(camera.front().abs_diff_eq(expected, TOLERANCE));
    }

    #[test]
    fn sensitivity_scales_pointer_deltas() {
        let mut camera = FreeCamera::default();
        camera.config.sensitivity = 2.0;
        camera.look(45.0, 0.0).unwrap();

        let expected = rotate_yaw(CameraState::default().front, 90.0)
            .unwrap()
            .normalize();
        assert!(camera.front().abs_diff_eq(expected, TOLERANCE));
    }

    #[test]
    fn look_leaves_position_alone() {
        let mut camera = FreeCamera::default();
        let before = camera.position();
        camera.look(90.0, 45.0).unwrap();
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn opposite_deltas_retrace_the_arc() {
        let mut camera = FreeCamera::default();
        // The default front is not unit length; looking normalizes it, so
        // compare against the normalized start.
        let start = camera.front().normalize();
        camera.look(0.0, 25.0).unwrap();
        camera.look(0.0, -25.0).unwrap();
        assert!(camera.front().abs_diff_eq(start, 1e-5));
    }

    #[test]
    fn advance_without_flags_is_a_noop() {
        let mut camera = FreeCamera::default();
        let before = camera.state;
        camera.advance(MovementFlags::default()).unwrap();
        assert_eq!(camera.state, before);
    }

    #[test]
    fn advance_uses_configured_step() {
        let mut camera = FreeCamera::default();
        camera.config.step = 0.5;
        let before = camera.position();
        camera
            .advance(MovementFlags {
                up: true,
                ..Default::default()
            })
            .unwrap();
        assert!(camera
            .position()
            .abs_diff_eq(before + Vec3::new(0.0, 0.5, 0.0), TOLERANCE));
    }

    #[test]
    fn zero_front_look_is_rejected() {
        let mut camera = FreeCamera::default();
        camera.state.front = Vec3::ZERO;
        assert!(camera.look(10.0, 0.0).is_err());
    }
}
