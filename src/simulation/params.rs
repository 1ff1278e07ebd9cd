use serde::{Deserialize, Serialize};

/// Parameters of the reference drifting simulation.
///
/// All distances are in normalized world units: the world is the unit square.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Number of animals created at startup.
    pub n_animals: usize,
    /// Number of food items created at startup.
    pub n_foods: usize,
    /// Distance an animal covers per step.
    pub animal_speed: f32,
    /// An animal eats any food within this distance.
    pub eat_radius: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n_animals: 40,
            n_foods: 60,
            animal_speed: 0.002,
            eat_radius: 0.01,
        }
    }
}
