use anyhow::Result;
use clap::Parser;
use freefly_camera::{FreeCamera, MovementFlags};
use freefly_render_wgpu::MeshRenderer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

mod settings;

use settings::{DemoSettings, MeshArg, Overrides, Preset};

#[derive(Parser)]
#[command(name = "freefly-desktop", about = "Windowed free-fly camera demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Demo variant to run
    #[arg(long, value_enum, default_value = "colored")]
    preset: Preset,

    /// Override the preset's mesh
    #[arg(long, value_enum)]
    mesh: Option<MeshArg>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Movement distance per frame
    #[arg(long)]
    step: Option<f32>,

    /// Degrees of rotation per pixel of mouse travel
    #[arg(long)]
    sensitivity: Option<f32>,
}

/// Application state.
struct AppState {
    camera: FreeCamera,
    flags: MovementFlags,
    mouse_look: bool,
}

impl AppState {
    fn new(settings: &DemoSettings) -> Self {
        Self {
            camera: FreeCamera::new(settings.camera, settings.config),
            flags: MovementFlags::default(),
            mouse_look: false,
        }
    }

    /// One frame of movement from the currently held keys.
    fn update(&mut self) {
        if !self.flags.any() {
            return;
        }
        if let Err(e) = self.camera.advance(self.flags) {
            tracing::warn!("movement skipped: {e}");
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.flags.forward = pressed,
            KeyCode::KeyS => self.flags.backward = pressed,
            KeyCode::KeyA => self.flags.left = pressed,
            KeyCode::KeyD => self.flags.right = pressed,
            KeyCode::Space => self.flags.up = pressed,
            KeyCode::ControlLeft => self.flags.down = pressed,
            _ => {}
        }
    }

    fn handle_look(&mut self, dx: f32, dy: f32) {
        if let Err(e) = self.camera.look(dx, dy) {
            tracing::warn!("look skipped: {e}");
        }
    }
}

struct GpuApp {
    settings: DemoSettings,
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<MeshRenderer>,
}

impl GpuApp {
    fn new(settings: DemoSettings) -> Self {
        Self {
            settings,
            state: AppState::new(&settings),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.settings.title)
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("freefly_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = MeshRenderer::new(
            &device,
            surface_format,
            size.width,
            size.height,
            self.settings.render,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                    tracing::debug!("resized to {}x{}", config.width, config.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }
                self.state.handle_key(key, pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                self.state.mouse_look = btn_state == ElementState::Pressed;
                if let Some(window) = &self.window {
                    window.set_cursor_visible(!self.state.mouse_look);
                }
            }
            WindowEvent::RedrawRequested => {
                self.state.update();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, &self.state.camera.state);
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.mouse_look {
                self.state.handle_look(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("freefly-desktop starting");

    let settings = DemoSettings::preset(cli.preset).with_overrides(Overrides {
        mesh: cli.mesh.map(Into::into),
        width: cli.width,
        height: cli.height,
        step: cli.step,
        sensitivity: cli.sensitivity,
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(settings);
    event_loop.run_app(&mut app)?;

    Ok(())
}
