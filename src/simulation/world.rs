use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::animal::Animal;
use super::food::Food;
use super::params::Params;
use super::snapshot::WorldSnapshot;
use crate::error::PersistError;

/// Entity storage of the reference simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct World {
    /// All animals, in creation order.
    pub animals: Vec<Animal>,
    /// All food items, in creation order.
    pub foods: Vec<Food>,
}

impl World {
    /// Creates a world with `params.n_animals` animals and `params.n_foods` food items.
    pub fn random(params: &Params, rng: &mut impl Rng) -> Self {
        let animals = (0..params.n_animals)
            .map(|_| Animal::random(rng, params.animal_speed))
            .collect();

        let foods = (0..params.n_foods).map(|_| Food::random(rng)).collect();

        Self { animals, foods }
    }

    /// Read-only view of every entity.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            animals: self.animals.iter().map(Animal::snapshot).collect(),
            foods: self.foods.iter().map(Food::snapshot).collect(),
        }
    }

    /// Saves the world state to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a world state from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let json = std::fs::read_to_string(path)?;
        let world = serde_json::from_str(&json)?;
        Ok(world)
    }
}
