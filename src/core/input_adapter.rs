use std::collections::HashSet;

use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{InputSource, Key};

/// Scroll distance in pixels treated as one wheel line
const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that bridges winit events to the InputSource trait.
///
/// Key and look-button state are level-based; look press/release edges and
/// the mouse/scroll deltas accumulate within a frame and are cleared by
/// `end_frame`.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Currently held logical keys
    held: HashSet<Key>,
    look_held: bool,
    look_pressed: bool,
    look_released: bool,
    /// Raw mouse motion accumulated since last `end_frame`
    mouse_delta: Vec2,
    /// Wheel lines accumulated since last `end_frame`
    scroll_delta: f32,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(key) = Self::keycode_to_key(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                self.held.insert(key);
                            }
                            ElementState::Released => {
                                self.held.remove(&key);
                            }
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Right {
                    match state {
                        ElementState::Pressed => {
                            if !self.look_held {
                                self.look_pressed = true;
                            }
                            self.look_held = true;
                        }
                        ElementState::Released => {
                            if self.look_held {
                                self.look_released = true;
                            }
                            self.look_held = false;
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scroll_delta += y,
                MouseScrollDelta::PixelDelta(pos) => {
                    self.scroll_delta += pos.y as f32 / PIXELS_PER_LINE;
                }
            },
            _ => {}
        }
    }

    /// Process a winit DeviceEvent; raw motion is used for mouse look so
    /// deltas keep arriving while the cursor is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_delta.x += *dx as f32;
            self.mouse_delta.y += *dy as f32;
        }
    }

    /// Clear per-frame state (edges and deltas).
    /// Call this at the end of each frame after the camera update.
    pub fn end_frame(&mut self) {
        self.look_pressed = false;
        self.look_released = false;
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    /// Map winit KeyCode to a logical key
    fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::Forward),
            KeyCode::KeyS => Some(Key::Back),
            KeyCode::KeyA => Some(Key::Left),
            KeyCode::KeyD => Some(Key::Right),
            KeyCode::KeyQ => Some(Key::Down),
            KeyCode::KeyE => Some(Key::Up),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Key::Sprint),
            KeyCode::Escape => Some(Key::Exit),
            _ => None,
        }
    }
}

impl InputSource for WinitInput {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn look_pressed(&self) -> bool {
        self.look_pressed
    }

    fn look_released(&self) -> bool {
        self.look_released
    }

    fn look_held(&self) -> bool {
        self.look_held
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
