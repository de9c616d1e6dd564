use glam::{Vec2, Vec3};

use crate::config::FlyCameraConfig;
use crate::state::CameraState;
use crate::traits::{CursorController, ExitRequester, InputSource, Key, TransformHandle};

/// Translation multiplier while the sprint key is held
pub const SPRINT_MULTIPLIER: f32 = 10.0;
/// Boost change per unit of scroll wheel movement
pub const SCROLL_BOOST_STEP: f32 = 0.2;

/// Fraction of the gap closed after `lerp_time` seconds of convergence
const CONVERGED_FRACTION: f32 = 0.99;

/// Fly-style debug camera: accumulates input into a target pose and
/// exponentially smooths the rendered pose toward it each frame.
pub struct FlyCamera {
    config: FlyCameraConfig,
    target: CameraState,
    interpolating: CameraState,
    active: bool,
}

impl FlyCamera {
    pub fn new(config: FlyCameraConfig) -> Self {
        Self {
            config,
            target: CameraState::default(),
            interpolating: CameraState::default(),
            active: false,
        }
    }

    pub fn config(&self) -> &FlyCameraConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FlyCameraConfig {
        &mut self.config
    }

    /// Current exponential speed boost
    pub fn boost(&self) -> f32 {
        self.config.boost
    }

    /// Pose the camera is converging toward
    pub fn target(&self) -> &CameraState {
        &self.target
    }

    /// Pose written to the transform last frame
    pub fn interpolating(&self) -> &CameraState {
        &self.interpolating
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Snap both poses to the transform. Called once on the first update so
    /// the camera starts without a visible pop; may be called again to
    /// re-home after the host teleports the transform.
    pub fn activate(&mut self, transform: &dyn TransformHandle) {
        self.target.set_from_transform(transform);
        self.interpolating.set_from_transform(transform);
        self.active = true;
        log::debug!(
            "fly camera activated at {:?}, euler {:?}",
            transform.position(),
            transform.euler_angles()
        );
    }

    /// Per-frame update: sample input, mutate the target pose, smooth the
    /// interpolating pose toward it, and write the result to `transform`.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        cursor: &mut dyn CursorController,
        exit: &mut dyn ExitRequester,
        transform: &mut dyn TransformHandle,
        dt: f32,
    ) {
        if !self.active {
            self.activate(transform);
        }

        if input.is_held(Key::Exit) {
            log::info!("exit requested");
            exit.request_exit();
            return;
        }

        // Capture the cursor while the look button is down, edge-triggered
        if input.look_pressed() {
            cursor.lock();
        }
        if input.look_released() {
            cursor.unlock();
        }

        if input.look_held() {
            let raw = input.mouse_delta();
            let movement = Vec2::new(raw.x, if self.config.invert_y { -raw.y } else { raw.y });

            let factor = self.config.sensitivity_curve.evaluate(movement.length());
            self.target.yaw += movement.x * factor;
            self.target.pitch += movement.y * factor;
        }

        let mut translation = Self::input_direction(input) * dt;

        if input.is_held(Key::Sprint) {
            translation *= SPRINT_MULTIPLIER;
        }

        // Scroll adjusts the boost; each unit of boost doubles speed
        self.config.boost += input.scroll_delta() * SCROLL_BOOST_STEP;
        translation *= 2f32.powf(self.config.boost);

        self.target.translate(translation);

        let position_pct = lerp_fraction(self.config.position_lerp_time, dt);
        let rotation_pct = lerp_fraction(self.config.rotation_lerp_time, dt);
        self.interpolating
            .lerp_towards(&self.target, position_pct, rotation_pct);

        self.interpolating.update_transform(transform);
    }

    /// Local-space direction from held movement keys. Opposing keys cancel
    /// by vector addition; the result is not normalized.
    fn input_direction(input: &dyn InputSource) -> Vec3 {
        let mut direction = Vec3::ZERO;

        if input.is_held(Key::Forward) {
            direction += Vec3::Z;
        }
        if input.is_held(Key::Back) {
            direction += Vec3::NEG_Z;
        }
        if input.is_held(Key::Left) {
            direction += Vec3::NEG_X;
        }
        if input.is_held(Key::Right) {
            direction += Vec3::X;
        }
        if input.is_held(Key::Down) {
            direction += Vec3::NEG_Y;
        }
        if input.is_held(Key::Up) {
            direction += Vec3::Y;
        }

        direction
    }
}

/// Frame-rate-independent interpolation fraction: after `lerp_time` seconds
/// of continuous convergence toward a stationary target, 99% of the original
/// gap is closed, regardless of frame rate.
pub fn lerp_fraction(lerp_time: f32, dt: f32) -> f32 {
    1.0 - ((1.0 - CONVERGED_FRACTION).ln() / lerp_time * dt).exp()
}
