use glam::{EulerRot, Quat, Vec3};

use crate::traits::TransformHandle;

/// World-space pose of the render camera, owned by the host.
///
/// `euler_angles` is (pitch, yaw, roll) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub euler_angles: Vec3,
}

impl TransformHandle for Transform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn euler_angles(&self) -> Vec3 {
        self.euler_angles
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_euler_angles(&mut self, euler: Vec3) {
        self.euler_angles = euler;
    }
}

/// Interpolatable 6-DOF camera pose: world position plus Euler angles in
/// degrees. Angles accumulate without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl CameraState {
    /// Snap this state to the given transform, verbatim
    pub fn set_from_transform(&mut self, transform: &dyn TransformHandle) {
        let euler = transform.euler_angles();
        self.pitch = euler.x;
        self.yaw = euler.y;
        self.roll = euler.z;

        let position = transform.position();
        self.x = position.x;
        self.y = position.y;
        self.z = position.z;
    }

    /// Move by a local-space displacement, rotated into world space by the
    /// current orientation
    pub fn translate(&mut self, translation: Vec3) {
        let rotated = self.orientation() * translation;

        self.x += rotated.x;
        self.y += rotated.y;
        self.z += rotated.z;
    }

    /// Interpolate each field toward `target`, position and rotation fields
    /// by their own unclamped fraction
    pub fn lerp_towards(&mut self, target: &CameraState, position_pct: f32, rotation_pct: f32) {
        self.yaw = lerp(self.yaw, target.yaw, rotation_pct);
        self.pitch = lerp(self.pitch, target.pitch, rotation_pct);
        self.roll = lerp(self.roll, target.roll, rotation_pct);

        self.x = lerp(self.x, target.x, position_pct);
        self.y = lerp(self.y, target.y, position_pct);
        self.z = lerp(self.z, target.z, position_pct);
    }

    /// Write this state back to the transform, verbatim
    pub fn update_transform(&self, transform: &mut dyn TransformHandle) {
        transform.set_euler_angles(Vec3::new(self.pitch, self.yaw, self.roll));
        transform.set_position(Vec3::new(self.x, self.y, self.z));
    }

    /// Orientation as a quaternion, intrinsic yaw-pitch-roll
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// World-space position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Linear interpolation
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
