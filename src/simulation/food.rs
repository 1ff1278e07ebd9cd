//! Food items scattered over the unit square.
//!
//! Eaten food is not removed; it reappears somewhere else.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::snapshot::FoodSnapshot;

/// A food item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Normalized position in `[0, 1)²`.
    pub pos: Array1<f32>,
}

impl Food {
    /// Creates a food item at a random position.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            pos: random_position(rng),
        }
    }

    /// Moves this food item to a fresh random position.
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.pos = random_position(rng);
    }

    /// Read-only view handed to the renderer.
    pub fn snapshot(&self) -> FoodSnapshot {
        FoodSnapshot {
            x: self.pos[0],
            y: self.pos[1],
        }
    }
}

fn random_position(rng: &mut impl Rng) -> Array1<f32> {
    Array1::from_vec(vec![rng.random::<f32>(), rng.random::<f32>()])
}
