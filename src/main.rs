use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_nav::cli::Cli;
use scene_nav::core::{CanvasContext, Dimensions, InputEvent, Key, WinitInputAdapter};
use scene_nav::{CameraError, CameraSeed, NavigationConfig, NavigationMode, Navigator};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const SPIN_DURATION_MS: f32 = 1500.0;

/// Window as a canvas, queried for its size on every use
struct WindowCanvas(Arc<Window>);

impl CanvasContext for WindowCanvas {
    fn dimensions(&self) -> Dimensions {
        let size = self.0.inner_size();
        Dimensions::new(size.width, size.height)
    }
}

struct App {
    navigator: Navigator,
    adapter: WinitInputAdapter,
    last_frame: Instant,
    canvas: Option<WindowCanvas>,
}

impl App {
    fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            adapter: WinitInputAdapter::new(),
            last_frame: Instant::now(),
            canvas: None,
        }
    }

    /// Keys the shell owns; everything else goes to the camera
    fn handle_shell_key(&mut self, key: Key, event_loop: &ActiveEventLoop) -> bool {
        match key {
            Key::Escape => event_loop.exit(),
            Key::Digit(digit) => {
                if let Some(mode) = NavigationMode::from_digit(digit) {
                    if let Err(e) = self.navigator.switch_mode(mode) {
                        log::warn!("cannot switch to {}: {}", mode.name(), e);
                    }
                }
            }
            Key::Space => {
                let camera = self.navigator.camera_mut();
                let up = camera.basis().up;
                if let Err(e) = camera.rotate_with_animation(up, std::f32::consts::PI, SPIN_DURATION_MS) {
                    log::warn!("cannot start spin: {}", e);
                }
            }
            _ => return false,
        }
        true
    }

    /// Milliseconds since the previous frame
    fn frame_delta_ms(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        dt.as_secs_f32() * 1000.0
    }

    fn redraw(&mut self, canvas: &WindowCanvas) {
        let dt = self.frame_delta_ms();
        match self.navigator.frame(dt, canvas) {
            Ok(uniform) => {
                let [x, y, z] = uniform.position;
                canvas.0.set_title(&format!(
                    "scene-nav [{}] eye ({:.2}, {:.2}, {:.2}) {}",
                    self.navigator.mode().name(),
                    x,
                    y,
                    z,
                    self.navigator.camera().interaction_kind().name(),
                ));
            }
            // minimised windows report a zero size
            Err(CameraError::InvalidDimensions { .. }) => {}
            Err(e) => log::error!("frame failed: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("scene-nav")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.last_frame = Instant::now();
            self.canvas = Some(WindowCanvas(window));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(canvas) = self.canvas.take() else {
            return;
        };

        match &event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(&canvas),
            _ => {
                if let Some(input) = self.adapter.translate(&event) {
                    let consumed = match input {
                        InputEvent::KeyDown(key) => self.handle_shell_key(key, event_loop),
                        _ => false,
                    };
                    if !consumed {
                        if let Err(e) = self.navigator.handle_input(&input, &canvas) {
                            log::warn!("{} rejected: {}", input.name(), e);
                        }
                    }
                }
            }
        }

        self.canvas = Some(canvas);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(canvas) = &self.canvas {
            canvas.0.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NavigationConfig::from_json_file(path)?,
        None => NavigationConfig::default(),
    };
    if let Some(fov) = cli.fov {
        config.fov_degrees = fov;
    }

    let seed = CameraSeed::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, config.fov());
    let navigator = Navigator::new(cli.mode, seed, config).context("Failed to build camera")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(navigator);

    println!("scene-nav - drag to rotate, shift/right drag to pan, wheel to dolly");
    println!("WASD/arrows (trackball), 1-4 switch model, Space spins, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
