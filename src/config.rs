//! Render configuration.
//!
//! Loaded from an optional JSON file at startup; every field has a default so
//! a partial file is enough.

use macroquad::color::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, PersistError};
use crate::simulation::params::Params;

/// Default background, cleared to at initialization.
pub const DEFAULT_BACKGROUND: [u8; 3] = [0, 0, 0];
/// Default triangle fill.
pub const DEFAULT_ANIMAL_FILL: [u8; 3] = [255, 255, 255];
/// Default triangle outline.
pub const DEFAULT_ANIMAL_STROKE: [u8; 3] = [0, 0, 0];
/// Default food fill.
pub const DEFAULT_FOOD_FILL: [u8; 3] = [0, 150, 0];

/// What the render loop does when a frame fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the error and stop scheduling frames. A failed frame clears nothing, so
    /// the last drawn frame stays visible.
    #[default]
    Halt,
    /// Log the error, count the frame as skipped and keep going.
    SkipFrame,
}

/// Render loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Logical viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Logical viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Triangle size as a fraction of the viewport width.
    pub animal_size_ratio: f32,
    /// Food circle radius as a fraction of the viewport width.
    pub food_radius_ratio: f32,
    /// Default fill color set at initialization.
    pub background: [u8; 3],
    /// Triangle fill.
    pub animal_fill: [u8; 3],
    /// Triangle outline.
    pub animal_stroke: [u8; 3],
    /// Food fill.
    pub food_fill: [u8; 3],
    /// Reaction to a failed frame.
    pub failure_policy: FailurePolicy,
    /// Stop after this many frames (`None` runs until stopped).
    pub max_frames: Option<u64>,
    /// Simulation seed (`None` uses OS entropy).
    pub seed: Option<u64>,
    /// Reference simulation parameters.
    pub simulation: Params,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            animal_size_ratio: 0.01,
            food_radius_ratio: 0.005,
            background: DEFAULT_BACKGROUND,
            animal_fill: DEFAULT_ANIMAL_FILL,
            animal_stroke: DEFAULT_ANIMAL_STROKE,
            food_fill: DEFAULT_FOOD_FILL,
            failure_policy: FailurePolicy::Halt,
            max_frames: None,
            seed: None,
            simulation: Params::default(),
        }
    }
}

impl RenderConfig {
    /// Checks that sizes and ratios are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("animal_size_ratio", self.animal_size_ratio),
            ("food_radius_ratio", self.food_radius_ratio),
            ("simulation.animal_speed", self.simulation.animal_speed),
            ("simulation.eat_radius", self.simulation.eat_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(PersistError::from)?;
        let config: Self = serde_json::from_str(&json).map_err(PersistError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a pretty-printed JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// [`RenderConfig::background`] as a color.
    pub fn background_color(&self) -> Color {
        rgb(self.background)
    }

    /// [`RenderConfig::animal_fill`] as a color.
    pub fn animal_fill_color(&self) -> Color {
        rgb(self.animal_fill)
    }

    /// [`RenderConfig::animal_stroke`] as a color.
    pub fn animal_stroke_color(&self) -> Color {
        rgb(self.animal_stroke)
    }

    /// [`RenderConfig::food_fill`] as a color.
    pub fn food_fill_color(&self) -> Color {
        rgb(self.food_fill)
    }
}

/// Opaque color from an RGB triple.
pub fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}
