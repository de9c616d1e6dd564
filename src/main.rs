use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use fly_cam::cli::Cli;
use fly_cam::config::FlyCameraConfig;
use fly_cam::controller::FlyCamera;
use fly_cam::core::{Clock, Interval, WinitInput};
use fly_cam::state::Transform;
use fly_cam::traits::{CursorController, ExitRequester};

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const POSE_LOG_INTERVAL: f32 = 1.0;

/// Cursor capture backed by the winit window
struct WindowCursor {
    window: Arc<Window>,
}

impl CursorController for WindowCursor {
    fn lock(&mut self) {
        // Locked is unsupported on some platforms; Confined still keeps the
        // pointer inside the window
        if self.window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
            let _ = self.window.set_cursor_grab(CursorGrabMode::Confined);
        }
        self.window.set_cursor_visible(false);
    }

    fn unlock(&mut self) {
        let _ = self.window.set_cursor_grab(CursorGrabMode::None);
        self.window.set_cursor_visible(true);
    }
}

/// Exit flag polled after each camera update
#[derive(Default)]
struct ExitFlag {
    requested: bool,
}

impl ExitRequester for ExitFlag {
    fn request_exit(&mut self) {
        self.requested = true;
    }
}

struct App {
    window: Option<Arc<Window>>,
    cursor: Option<WindowCursor>,
    input: WinitInput,
    camera: FlyCamera,
    transform: Transform,
    clock: Clock,
    pose_log: Interval,
    exit: ExitFlag,
}

impl App {
    fn new(config: FlyCameraConfig) -> Self {
        Self {
            window: None,
            cursor: None,
            input: WinitInput::new(),
            camera: FlyCamera::new(config),
            transform: Transform::default(),
            clock: Clock::new(),
            pose_log: Interval::new(POSE_LOG_INTERVAL),
            exit: ExitFlag::default(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Fly Cam")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.cursor = Some(WindowCursor {
                window: window.clone(),
            });
            self.window = Some(window);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();

                if let Some(cursor) = &mut self.cursor {
                    self.camera.update(
                        &self.input,
                        cursor,
                        &mut self.exit,
                        &mut self.transform,
                        delta,
                    );
                }

                if self.exit.requested {
                    event_loop.exit();
                    return;
                }

                self.input.end_frame();

                if self.pose_log.tick(delta) {
                    let pose = self.camera.interpolating();
                    log::info!(
                        "camera at ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1} boost {:.1}",
                        pose.x,
                        pose.y,
                        pose.z,
                        pose.yaw,
                        pose.pitch,
                        self.camera.boost()
                    );
                }
            }
            other => self.input.process_window_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FlyCameraConfig::load(path)?,
        None => FlyCameraConfig::default(),
    };
    if cli.invert_y {
        config.invert_y = true;
    }
    if let Some(boost) = cli.boost {
        config.boost = boost;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!(
        "Fly Cam - Controls: WASD + QE, Shift to sprint, hold RMB to look, scroll for speed, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
