use serde::{Deserialize, Serialize};

use crate::error::FieldError;

// Offset above sea level where altitude attenuation starts
pub const DEFAULT_ATTENUATION_THRESHOLD: f64 = 10.0;
pub const DEFAULT_SCALE: f64 = 0.1;

// How the third axis of a density field is sampled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthSampling {
    // Raw integer index, the layout existing worlds were generated with
    #[default]
    Unscaled,
    // Index multiplied by `scale`, like the other two axes
    Scaled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: i64,
    pub scale: f64,
    pub attenuation_threshold: f64,
    pub depth_sampling: DepthSampling,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: DEFAULT_SCALE,
            attenuation_threshold: DEFAULT_ATTENUATION_THRESHOLD,
            depth_sampling: DepthSampling::Unscaled,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, FieldError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.scale.is_finite() {
            return Err(FieldError::InvalidScale(self.scale));
        }
        if !self.attenuation_threshold.is_finite() {
            return Err(FieldError::InvalidThreshold(self.attenuation_threshold));
        }
        Ok(())
    }
}
