//! Simulation tunables.
//!
//! Defaults match the editor's play mode: gravity pulls +y (screen down) at
//! 200 px/s², bodies weigh 1, keep 80% of their speed per second and bounce
//! back 30% of it.

use serde::{Deserialize, Serialize};

use super::error::{PhysicsError, PhysicsResult};
use crate::core::Vec2;

pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 200.0);
pub const DEFAULT_MASS: f32 = 1.0;
pub const DEFAULT_FRICTION: f32 = 0.8;
pub const DEFAULT_BOUNCINESS: f32 = 0.3;
/// Longest slice of simulated time a single tick may cover
pub const MAX_STEP_SECONDS: f32 = 1.0 / 30.0;
/// Floor for dynamic body mass
pub const MIN_MASS: f32 = 1e-3;

/// Lower world boundary. Dynamic bodies are clamped to `x >= min_x` and
/// `y >= min_y`; there is no upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldBounds {
    pub min_x: f32,
    pub min_y: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self { min_x: 0.0, min_y: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    pub gravity: Vec2,
    pub default_mass: f32,
    pub default_friction: f32,
    pub default_bounciness: f32,
    pub max_step_seconds: f32,
    /// `None` disables the world boundary entirely
    pub bounds: Option<WorldBounds>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            default_mass: DEFAULT_MASS,
            default_friction: DEFAULT_FRICTION,
            default_bounciness: DEFAULT_BOUNCINESS,
            max_step_seconds: MAX_STEP_SECONDS,
            bounds: Some(WorldBounds::default()),
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> PhysicsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite".into()));
        }
        if !(self.default_mass.is_finite() && self.default_mass > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "defaultMass must be positive, got {}",
                self.default_mass
            )));
        }
        if !(0.0..=1.0).contains(&self.default_friction) {
            return Err(PhysicsError::InvalidConfig(format!(
                "defaultFriction must be in [0, 1], got {}",
                self.default_friction
            )));
        }
        if !(0.0..=1.0).contains(&self.default_bounciness) {
            return Err(PhysicsError::InvalidConfig(format!(
                "defaultBounciness must be in [0, 1], got {}",
                self.default_bounciness
            )));
        }
        if !(self.max_step_seconds.is_finite() && self.max_step_seconds > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "maxStepSeconds must be positive, got {}",
                self.max_step_seconds
            )));
        }
        if let Some(bounds) = self.bounds {
            if !(bounds.min_x.is_finite() && bounds.min_y.is_finite()) {
                return Err(PhysicsError::InvalidConfig("bounds must be finite".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json(r#"{ "gravity": { "x": 0, "y": 500 } }"#).unwrap();
        assert_eq!(config.gravity, Vec2::new(0.0, 500.0));
        assert_eq!(config.default_friction, DEFAULT_FRICTION);
        assert_eq!(config.bounds, Some(WorldBounds::default()));
    }

    #[test]
    fn null_bounds_disables_boundary() {
        let config = PhysicsConfig::from_json(r#"{ "bounds": null }"#).unwrap();
        assert_eq!(config.bounds, None);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = PhysicsConfig::from_json(r#"{ "defaultBounciness": 1.5 }"#).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));

        let err = PhysicsConfig::from_json(r#"{ "maxStepSeconds": 0 }"#).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        let err = PhysicsConfig::from_json("{ gravity").unwrap_err();
        assert!(matches!(err, PhysicsError::Json(_)));
    }

    #[test]
    fn json_round_trip_preserves_bounds() {
        let mut config = PhysicsConfig::default();
        config.bounds = Some(WorldBounds { min_x: -50.0, min_y: 10.0 });
        let parsed = PhysicsConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
