use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::curve::SensitivityCurve;

/// Smallest accepted time-to-99%-convergence, in seconds
pub const MIN_LERP_TIME: f32 = 0.001;
/// Largest accepted time-to-99%-convergence, in seconds
pub const MAX_LERP_TIME: f32 = 1.0;

/// Tunable fly camera settings, loadable from a JSON file.
///
/// Every field has a default so a partial file is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyCameraConfig {
    /// Exponential boost factor on translation; each unit doubles speed.
    /// Adjusted at runtime by the scroll wheel.
    pub boost: f32,
    /// Invert the Y axis for mouse look
    pub invert_y: bool,
    /// Mouse-delta magnitude to rotation sensitivity factor
    pub sensitivity_curve: SensitivityCurve,
    /// Seconds to interpolate position 99% of the way to the target
    pub position_lerp_time: f32,
    /// Seconds to interpolate rotation 99% of the way to the target
    pub rotation_lerp_time: f32,
}

impl Default for FlyCameraConfig {
    fn default() -> Self {
        Self {
            boost: 3.5,
            invert_y: false,
            sensitivity_curve: SensitivityCurve::default(),
            position_lerp_time: 0.2,
            rotation_lerp_time: 0.01,
        }
    }
}

impl FlyCameraConfig {
    /// Load settings from a JSON file and sanitize them
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Clamp lerp times into the accepted range and restore curve ordering
    pub fn sanitize(&mut self) {
        self.position_lerp_time = self.position_lerp_time.clamp(MIN_LERP_TIME, MAX_LERP_TIME);
        self.rotation_lerp_time = self.rotation_lerp_time.clamp(MIN_LERP_TIME, MAX_LERP_TIME);
        self.sensitivity_curve.sort_keys();
    }
}
