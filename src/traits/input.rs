use glam::Vec2;

/// Logical key identifier for camera control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    Down,
    Up,
    Sprint,
    Exit,
}

/// Per-frame sampled input for the fly camera.
///
/// Key state is level-based and polled once per frame; the look button
/// additionally exposes press/release edges for cursor capture.
pub trait InputSource {
    /// Check if a logical key is currently held
    fn is_held(&self, key: Key) -> bool;

    /// Look button went down this frame
    fn look_pressed(&self) -> bool;

    /// Look button went up this frame
    fn look_released(&self) -> bool;

    /// Look button is currently held
    fn look_held(&self) -> bool;

    /// Mouse movement accumulated since the last frame
    fn mouse_delta(&self) -> Vec2;

    /// Scroll wheel movement accumulated since the last frame
    fn scroll_delta(&self) -> f32;
}
