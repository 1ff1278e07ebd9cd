use super::snapshot::WorldSnapshot;
use crate::error::SimulationError;

/// A stepping world the render loop can draw.
///
/// The render loop calls [`Simulation::world`] and then [`Simulation::step`]
/// exactly once per frame, so every frame shows the world as it was before
/// that frame's step.
pub trait Simulation {
    /// Returns the current state of every animal and food item.
    fn world(&self) -> WorldSnapshot;

    /// Advances the simulation by one discrete tick.
    fn step(&mut self) -> Result<(), SimulationError>;
}

impl<S: Simulation + ?Sized> Simulation for Box<S> {
    fn world(&self) -> WorldSnapshot {
        (**self).world()
    }

    fn step(&mut self) -> Result<(), SimulationError> {
        (**self).step()
    }
}
