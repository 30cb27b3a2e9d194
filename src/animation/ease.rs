/// Easing curve applied to normalized progress between two keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    EaseOut,
    /// Smoothstep ease-in-out.
    EaseInOut,
}

impl Ease {
    /// Canonical host-facing names, in schema order.
    pub const NAMES: [&'static str; 4] = ["linear", "ease_in", "ease_out", "ease_in_out"];

    /// Map a host-provided curve name to an easing curve.
    ///
    /// Unrecognized names degrade to [`Ease::Linear`] rather than erroring;
    /// the host treats the curve as a cosmetic choice.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "ease_in" => Self::EaseIn,
            "ease_out" => Self::EaseOut,
            "ease_in_out" => Self::EaseInOut,
            _ => Self::Linear,
        }
    }

    /// Apply the curve to normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => 3.0 * t * t - 2.0 * t * t * t,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
