use clap::ValueEnum;
use freefly_camera::{CameraConfig, CameraState};
use freefly_render_wgpu::{MeshKind, RenderSettings, Shading};
use glam::Vec3;

const ORANGE: [f32; 4] = [1.0, 0.5, 0.2, 1.0];

/// Which demo variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Per-vertex colored cube, camera at (1, 1, 3).
    Colored,
    /// Flat orange mesh, camera at (0, 0, 3).
    Solid,
}

/// CLI-facing mesh choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeshArg {
    Cube,
    Triangle,
}

impl From<MeshArg> for MeshKind {
    fn from(arg: MeshArg) -> Self {
        match arg {
            MeshArg::Cube => MeshKind::Cube,
            MeshArg::Triangle => MeshKind::Triangle,
        }
    }
}

/// Optional CLI overrides layered on top of a preset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub mesh: Option<MeshKind>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub step: Option<f32>,
    pub sensitivity: Option<f32>,
}

/// Everything one demo run needs. Variants are data here, not separate
/// programs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSettings {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub camera: CameraState,
    pub config: CameraConfig,
    pub render: RenderSettings,
}

impl DemoSettings {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Colored => Self {
                title: "Freefly",
                width: 800,
                height: 600,
                camera: CameraState::default(),
                config: CameraConfig::default(),
                render: RenderSettings::default(),
            },
            Preset::Solid => Self {
                title: "Freefly",
                width: 800,
                height: 600,
                camera: CameraState::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z),
                config: CameraConfig::default(),
                render: RenderSettings {
                    shading: Shading::Solid(ORANGE),
                    ..RenderSettings::default()
                },
            },
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(mesh) = overrides.mesh {
            self.render.mesh = mesh;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(step) = overrides.step {
            self.config.step = step;
        }
        if let Some(sensitivity) = overrides.sensitivity {
            self.config.sensitivity = sensitivity;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_preset_matches_the_classic_layout() {
        let settings = DemoSettings::preset(Preset::Colored);
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.camera.position, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(settings.camera.front, Vec3::new(-0.5, 0.0, -1.0));
        assert_eq!(settings.render.mesh, MeshKind::Cube);
        assert_eq!(settings.render.shading, Shading::VertexColor);
    }

    #[test]
    fn solid_preset_is_the_orange_variant() {
        let settings = DemoSettings::preset(Preset::Solid);
        assert_eq!(settings.camera.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(settings.camera.front, Vec3::NEG_Z);
        assert_eq!(settings.render.shading, Shading::Solid(ORANGE));
    }

    #[test]
    fn overrides_take_precedence_over_the_preset() {
        let settings = DemoSettings::preset(Preset::Colored).with_overrides(Overrides {
            mesh: Some(MeshKind::Triangle),
            width: Some(1024),
            height: Some(768),
            step: Some(0.1),
            sensitivity: Some(0.25),
        });
        assert_eq!(settings.render.mesh, MeshKind::Triangle);
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, 768);
        assert_eq!(settings.config.step, 0.1);
        assert_eq!(settings.config.sensitivity, 0.25);
    }

    #[test]
    fn empty_overrides_leave_the_preset_alone() {
        let preset = DemoSettings::preset(Preset::Solid);
        assert_eq!(preset.with_overrides(Overrides::default()), preset);
    }

    #[test]
    fn mesh_arg_maps_onto_mesh_kind() {
        assert_eq!(MeshKind::from(MeshArg::Cube), MeshKind::Cube);
        assert_eq!(MeshKind::from(MeshArg::Triangle), MeshKind::Triangle);
    }
}
