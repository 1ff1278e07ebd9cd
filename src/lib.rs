//! # Evo Viewport - Render Loop for a Drifting Organism World
//!
//! Draws a stepping 2D world of organisms ("animals") and food on a
//! device-pixel-ratio aware canvas. Every frame clears the canvas, fetches a
//! snapshot of the world, advances the simulation by one step and paints the
//! snapshot: animals as oriented triangles, food as green circles.
//!
//! ## Features
//!
//! - High-DPI viewport with logical-pixel drawing coordinates
//! - Canvas-style drawing surface trait with a macroquad backend
//! - Command-recording surface for headless inspection
//! - Stoppable async frame loop with a configurable failure policy
//! - Reference drifting simulation with k-d tree collision queries
//! - JSON configuration and world snapshot persistence
//!
//! ## Core Modules
//!
//! - [`render::frame`] - Render loop state and per-frame contract
//! - [`render::viewport`] - Logical size, device pixel ratio, coordinate mapping
//! - [`render::shapes`] - Triangle and circle primitives
//! - [`render::surface`] - Drawing surface trait and recording surface
//! - [`simulation::source`] - The simulation collaborator trait
//! - [`simulation::drift`] - Reference simulation

/// Configuration loaded at startup.
pub mod config;
/// Error types shared across the crate.
pub mod error;

/// Everything that turns a world snapshot into pixels.
pub mod render {
    /// Render loop state, stop signal and per-frame contract.
    pub mod frame;
    /// Drawing surface backed by macroquad.
    pub mod macroquad_surface;
    /// Stateless triangle and circle primitives.
    pub mod shapes;
    /// Canvas-style drawing surface trait and a recording implementation.
    pub mod surface;
    /// Viewport sizing and normalized-to-pixel mapping.
    pub mod viewport;
}

/// Simulation collaborator and the reference drifting world.
pub mod simulation {
    /// Animals that drift across the world.
    pub mod animal;
    /// Reference simulation stepping collisions and movement.
    pub mod drift;
    /// Food items animals run into.
    pub mod food;
    /// Reference simulation parameters.
    pub mod params;
    /// Read-only world views handed to the renderer.
    pub mod snapshot;
    /// Trait the render loop drives.
    ///
    /// The [`source::Simulation`] trait is the only view the render loop has of
    /// any simulation: fetch a [`snapshot::WorldSnapshot`], advance one step.
    pub mod source;
    /// Spatial indexing for collision queries.
    pub mod spatial;
    /// Entity storage of the reference simulation.
    pub mod world;
}
