pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod curve;
pub mod state;
pub mod traits;

pub use config::FlyCameraConfig;
pub use controller::{lerp_fraction, FlyCamera};
pub use curve::{Keyframe, SensitivityCurve};
pub use state::{CameraState, Transform};
