//! Read-only world views.
//!
//! A snapshot carries just what the renderer needs: normalized positions and
//! headings. It is fetched once per frame and dropped after drawing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PersistError;

/// An animal as seen by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnimalSnapshot {
    /// Normalized horizontal position in `[0, 1]`.
    pub x: f32,
    /// Normalized vertical position in `[0, 1]`.
    pub y: f32,
    /// Heading in radians.
    pub rotation: f32,
}

/// A food item as seen by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FoodSnapshot {
    /// Normalized horizontal position in `[0, 1]`.
    pub x: f32,
    /// Normalized vertical position in `[0, 1]`.
    pub y: f32,
}

/// Every animal and food item at one simulation tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorldSnapshot {
    /// Animals in simulation order.
    pub animals: Vec<AnimalSnapshot>,
    /// Food items in simulation order.
    pub foods: Vec<FoodSnapshot>,
}

impl WorldSnapshot {
    /// Saves the snapshot to a pretty-printed JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a snapshot from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&json)?;
        Ok(snapshot)
    }
}
