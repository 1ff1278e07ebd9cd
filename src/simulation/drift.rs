//! Reference simulation: animals drift in straight lines over a toroidal unit
//! square and scatter any food they touch.
//!
//! Each step runs two phases:
//! - Collisions: every food item within `eat_radius` of an animal respawns at
//!   a random position (KD-tree query over animal positions)
//! - Movement: every animal moves by its velocity and wraps into `[0, 1)²`
//!   (parallel over animals with rayon)

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use super::params::Params;
use super::snapshot::WorldSnapshot;
use super::source::Simulation;
use super::spatial::AnimalIndex;
use super::world::World;
use crate::error::SimulationError;

/// The reference simulation.
#[derive(Debug, Clone)]
pub struct DriftSimulation {
    world: World,
    params: Params,
    rng: StdRng,
    steps: u64,
}

impl DriftSimulation {
    /// Creates a simulation with default parameters seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(Params::default(), StdRng::from_os_rng())
    }

    /// Creates a reproducible simulation with default parameters.
    pub fn seeded(seed: u64) -> Self {
        Self::with_params(Params::default(), Some(seed))
    }

    /// Creates a simulation from explicit parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - World size and movement parameters
    /// * `seed` - Fixed seed, or `None` for OS entropy
    pub fn with_params(params: Params, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::from_rng(params, rng)
    }

    /// Resumes a simulation from a previously saved world.
    pub fn from_world(world: World, params: Params, seed: Option<u64>) -> Self {
        let mut simulation = Self::with_params(params, seed);
        simulation.world = world;
        simulation
    }

    fn from_rng(params: Params, mut rng: StdRng) -> Self {
        let world = World::random(&params, &mut rng);
        Self {
            world,
            params,
            rng,
            steps: 0,
        }
    }

    /// Current entity storage.
    pub fn world_state(&self) -> &World {
        &self.world
    }

    /// Mutable entity storage, for seeding scenarios.
    pub fn world_state_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Parameters this simulation runs with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn process_collisions(&mut self) -> Result<(), SimulationError> {
        let index = AnimalIndex::build(&self.world.animals)?;
        if index.is_empty() {
            return Ok(());
        }

        for food in &mut self.world.foods {
            if index.any_within(&food.pos, self.params.eat_radius)? {
                food.respawn(&mut self.rng);
            }
        }
        Ok(())
    }

    fn process_movement(&mut self) -> Result<(), SimulationError> {
        self.world.animals.par_iter_mut().for_each(|animal| {
            let velocity = animal.velocity();
            animal.pos += &velocity;
            wrap_around_mut(&mut animal.pos);
        });

        match self
            .world
            .animals
            .iter()
            .position(|animal| !animal.pos.iter().all(|v| v.is_finite()))
        {
            Some(index) => {
                let pos = &self.world.animals[index].pos;
                Err(SimulationError::NonFinitePosition {
                    index,
                    x: pos[0],
                    y: pos[1],
                })
            }
            None => Ok(()),
        }
    }
}

impl Default for DriftSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for DriftSimulation {
    fn world(&self) -> WorldSnapshot {
        self.world.snapshot()
    }

    fn step(&mut self) -> Result<(), SimulationError> {
        self.process_collisions()?;
        self.process_movement()?;
        self.steps += 1;
        Ok(())
    }
}

/// Wraps a normalized position around the unit square (toroidal topology).
pub fn wrap_around_mut(v: &mut Array1<f32>) {
    for value in v.iter_mut() {
        *value = value.rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        if *value >= 1.0 {
            *value = 0.0;
        }
    }
}
