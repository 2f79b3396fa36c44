//! Tolerances and heuristic thresholds for the intersection routines.
//!
//! Every value has a documented default. The struct can be deserialized from
//! JSON so a host application can tune it, and tests tighten or loosen
//! individual values through the `with_*` builders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Magnitude below which a conic matrix entry counts as zero.
pub const DEFAULT_CONIC_TOLERANCE: f64 = 1e-10;
/// Relative tolerance for imaginary parts and duplicate roots.
pub const DEFAULT_ROOT_TOLERANCE: f64 = 1e-6;
/// Distance from a conic-conic candidate point to either curve, in model units.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-6;
/// Combined bounding-box extent below which a curve pair counts as flat.
pub const DEFAULT_FLATNESS: f64 = 1e-3;
/// Subdivision depth at which Bézier-Bézier recursion stops.
pub const DEFAULT_MAX_DEPTH: usize = 48;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionConfig {
    /// Degeneracy threshold for the quadratic part of a conic.
    pub conic_tolerance: f64,
    pub root_tolerance: f64,
    pub residual_tolerance: f64,
    /// Flatness threshold on the summed bounding-box widths.
    pub flatness_width: f64,
    /// Flatness threshold on the summed bounding-box heights.
    pub flatness_height: f64,
    pub max_depth: usize,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            conic_tolerance: DEFAULT_CONIC_TOLERANCE,
            root_tolerance: DEFAULT_ROOT_TOLERANCE,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
            flatness_width: DEFAULT_FLATNESS,
            flatness_height: DEFAULT_FLATNESS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IntersectionConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerances = [
            ("conic_tolerance", self.conic_tolerance),
            ("root_tolerance", self.root_tolerance),
            ("residual_tolerance", self.residual_tolerance),
            ("flatness_width", self.flatness_width),
            ("flatness_height", self.flatness_height),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_conic_tolerance(mut self, tolerance: f64) -> Self {
        self.conic_tolerance = tolerance;
        self
    }

    pub fn with_root_tolerance(mut self, tolerance: f64) -> Self {
        self.root_tolerance = tolerance;
        self
    }

    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }

    pub fn with_flatness(mut self, width: f64, height: f64) -> Self {
        self.flatness_width = width;
        self.flatness_height = height;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
