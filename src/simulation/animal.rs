//! Animals drifting across the unit square.
//!
//! An animal only has a position, a heading and a constant speed; it has no
//! perception or decision making of its own.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::snapshot::AnimalSnapshot;

/// A drifting animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    /// Normalized position in `[0, 1)²`.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub rot: f32,
    /// Distance covered per step.
    pub speed: f32,
}

impl Animal {
    /// Creates an animal at a random position with a random heading.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source for position and heading.
    /// * `speed` - Distance covered per step.
    pub fn random(rng: &mut impl Rng, speed: f32) -> Self {
        Self {
            pos: Array1::from_vec(vec![rng.random::<f32>(), rng.random::<f32>()]),
            rot: rng.random_range(-PI..PI),
            speed,
        }
    }

    /// Displacement for one step.
    ///
    /// The vector `(0, speed)` rotated by the heading, i.e. `(-sin, cos)`.
    pub fn velocity(&self) -> Array1<f32> {
        let (sin, cos) = self.rot.sin_cos();
        Array1::from_vec(vec![-sin * self.speed, cos * self.speed])
    }

    /// Read-only view handed to the renderer.
    pub fn snapshot(&self) -> AnimalSnapshot {
        AnimalSnapshot {
            x: self.pos[0],
            y: self.pos[1],
            rotation: self.rot,
        }
    }
}
