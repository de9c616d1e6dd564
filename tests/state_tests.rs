use glam::Vec3;
use fly_cam::state::{CameraState, Transform};

const EPS: f32 = 1e-4;

#[cfg(test)]
mod lerp_tests {
    use super::*;

    fn source() -> CameraState {
        CameraState {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            pitch: 10.0,
            yaw: 20.0,
            roll: 30.0,
        }
    }

    fn target() -> CameraState {
        CameraState {
            x: 5.0,
            y: 6.0,
            z: 7.0,
            pitch: 50.0,
            yaw: 60.0,
            roll: 70.0,
        }
    }

    #[test]
    fn zero_pct_leaves_state_unchanged() {
        let mut state = source();
        state.lerp_towards(&target(), 0.0, 0.0);

        assert_eq!(state, source());
    }

    #[test]
    fn full_pct_snaps_to_target() {
        let mut state = source();
        state.lerp_towards(&target(), 1.0, 1.0);

        assert_eq!(state, target());
    }

    #[test]
    fn half_pct_reaches_midpoint() {
        let mut state = source();
        state.lerp_towards(&target(), 0.5, 0.5);

        assert!((state.x - 3.0).abs() < EPS);
        assert!((state.y - 4.0).abs() < EPS);
        assert!((state.z - 5.0).abs() < EPS);
        assert!((state.pitch - 30.0).abs() < EPS);
        assert!((state.yaw - 40.0).abs() < EPS);
        assert!((state.roll - 50.0).abs() < EPS);
    }

    #[test]
    fn position_and_rotation_fractions_are_independent() {
        let mut state = source();
        state.lerp_towards(&target(), 1.0, 0.0);

        assert_eq!(state.x, 5.0);
        assert_eq!(state.yaw, 20.0, "rotation must not move with pct 0");
    }
}

#[cfg(test)]
mod translate_tests {
    use super::*;

    #[test]
    fn zero_vector_is_noop_under_any_orientation() {
        let mut state = CameraState {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            pitch: 33.0,
            yaw: -120.0,
            roll: 710.0,
        };
        let before = state;

        state.translate(Vec3::ZERO);

        assert_eq!(state, before);
    }

    #[test]
    fn identity_orientation_moves_along_world_axes() {
        let mut state = CameraState::default();

        state.translate(Vec3::new(0.0, 0.0, 1.0));

        assert!((state.z - 1.0).abs() < EPS);
        assert!(state.x.abs() < EPS);
        assert!(state.y.abs() < EPS);
    }

    #[test]
    fn yaw_90_turns_forward_into_plus_x() {
        let mut state = CameraState {
            yaw: 90.0,
            ..CameraState::default()
        };

        state.translate(Vec3::new(0.0, 0.0, 1.0));

        assert!((state.x - 1.0).abs() < EPS, "got x = {}", state.x);
        assert!(state.y.abs() < EPS);
        assert!(state.z.abs() < EPS, "got z = {}", state.z);
    }

    #[test]
    fn pitch_90_turns_forward_downward() {
        let mut state = CameraState {
            pitch: 90.0,
            ..CameraState::default()
        };

        state.translate(Vec3::new(0.0, 0.0, 1.0));

        assert!((state.y + 1.0).abs() < EPS, "got y = {}", state.y);
        assert!(state.x.abs() < EPS);
        assert!(state.z.abs() < EPS);
    }

    #[test]
    fn translation_accumulates_position_only() {
        let mut state = CameraState {
            pitch: 5.0,
            yaw: 15.0,
            roll: 25.0,
            ..CameraState::default()
        };

        state.translate(Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(state.pitch, 5.0);
        assert_eq!(state.yaw, 15.0);
        assert_eq!(state.roll, 25.0);
    }
}

#[cfg(test)]
mod transform_tests {
    use super::*;

    #[test]
    fn set_then_update_round_trips() {
        let mut transform = Transform {
            position: Vec3::new(4.0, -2.0, 9.5),
            euler_angles: Vec3::new(12.0, 345.0, -7.0),
        };
        let original = transform;

        let mut state = CameraState::default();
        state.set_from_transform(&transform);
        state.update_transform(&mut transform);

        assert!((transform.position - original.position).length() < EPS);
        assert!((transform.euler_angles - original.euler_angles).length() < EPS);
    }

    #[test]
    fn angles_are_copied_verbatim_without_wrapping() {
        let transform = Transform {
            position: Vec3::ZERO,
            euler_angles: Vec3::new(500.0, -720.0, 1080.0),
        };

        let mut state = CameraState::default();
        state.set_from_transform(&transform);

        assert_eq!(state.pitch, 500.0);
        assert_eq!(state.yaw, -720.0);
        assert_eq!(state.roll, 1080.0);
    }

    #[test]
    fn update_writes_pitch_yaw_roll_order() {
        let state = CameraState {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            pitch: 10.0,
            yaw: 20.0,
            roll: 30.0,
        };

        let mut transform = Transform::default();
        state.update_transform(&mut transform);

        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.euler_angles, Vec3::new(10.0, 20.0, 30.0));
    }
}
