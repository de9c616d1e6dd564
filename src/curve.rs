use serde::{Deserialize, Serialize};

/// One control point of a keyframed curve, with explicit Hermite tangents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    pub const fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Piecewise cubic Hermite curve mapping mouse-delta magnitude to a
/// rotation sensitivity factor.
///
/// Evaluation outside the key range clamps to the endpoint values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCurve {
    keys: Vec<Keyframe>,
}

impl SensitivityCurve {
    /// Build a curve from control points; keys are kept sorted by time
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Re-sort keys by time. Needed after deserializing hand-edited files.
    pub fn sort_keys(&mut self) {
        self.keys.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Sample the curve at `t`, clamping outside the key range
    pub fn evaluate(&self, t: f32) -> f32 {
        let keys = &self.keys;
        let (first, last) = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        let mut i = 0;
        while i + 1 < keys.len() && keys[i + 1].time <= t {
            i += 1;
        }

        hermite(&keys[i], &keys[i + 1], t)
    }
}

impl Default for SensitivityCurve {
    /// Gentle response for small deltas, ramping to 2.5x for fast flicks
    fn default() -> Self {
        Self::new(vec![
            Keyframe::new(0.0, 0.5, 0.0, 5.0),
            Keyframe::new(1.0, 2.5, 0.0, 0.0),
        ])
    }
}

/// Cubic Hermite interpolation between two keyframes, using the left key's
/// out-tangent and the right key's in-tangent
fn hermite(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt <= f32::EPSILON {
        return k0.value;
    }

    let s = (t - k0.time) / dt;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
}
