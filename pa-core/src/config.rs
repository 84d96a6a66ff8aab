use crate::error::GrowthError;
use serde::{Deserialize, Serialize};

/// Upper bound on `Config::steps`; runs are meant for small networks.
pub const MAX_STEPS: usize = 100_000;

/// Parameters for a full growth run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Seed for the attachment RNG. The layout stream is derived from it.
    pub seed: u64,
    /// Number of nodes attached after the seed triangle.
    pub steps: usize,
    /// Mean distance of grown nodes from the origin.
    pub ring_radius: f32,
    /// Maximum deviation from `ring_radius`.
    pub ring_jitter: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            // Grows ids 3..=19.
            steps: 17,
            ring_radius: 3.0,
            ring_jitter: 0.7,
        }
    }
}

impl Config {
    /// Checks the parameters before any work is done.
    ///
    /// ### Errors
    /// [`GrowthError::InvalidConfig`] if `steps` exceeds [`MAX_STEPS`] or
    /// either ring parameter is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), GrowthError> {
        if self.steps > MAX_STEPS {
            return Err(GrowthError::InvalidConfig(format!(
                "steps must be at most {MAX_STEPS}, got {}",
                self.steps
            )));
        }
        for (name, value) in [
            ("ring_radius", self.ring_radius),
            ("ring_jitter", self.ring_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GrowthError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
