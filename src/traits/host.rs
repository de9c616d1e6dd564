use glam::Vec3;

/// Cursor capture control provided by the host window
pub trait CursorController {
    /// Hide the cursor and lock it to the window
    fn lock(&mut self);

    /// Show the cursor and release the lock
    fn unlock(&mut self);
}

/// Application shutdown request channel
pub trait ExitRequester {
    /// Ask the host to terminate; fire-and-forget
    fn request_exit(&mut self);
}

/// Read/write access to the externally owned camera pose.
///
/// Euler angles are (pitch, yaw, roll) in degrees and are stored verbatim,
/// without wrapping into a canonical range.
pub trait TransformHandle {
    /// World-space position
    fn position(&self) -> Vec3;

    /// Euler angles in degrees
    fn euler_angles(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn set_euler_angles(&mut self, euler: Vec3);
}
