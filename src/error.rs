//! Error types for simulation stepping, drawing, configuration and persistence.

use kdtree::ErrorKind as KdTreeError;
use thiserror::Error;

/// Failure while advancing a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The k-d tree refused a position or a query.
    #[error("spatial index error: {0:?}")]
    SpatialIndex(KdTreeError),
    /// An entity ended up at a NaN or infinite position.
    #[error("animal {index} has a non-finite position ({x}, {y})")]
    NonFinitePosition {
        /// Index of the offending animal.
        index: usize,
        /// Horizontal coordinate.
        x: f32,
        /// Vertical coordinate.
        y: f32,
    },
}

impl From<KdTreeError> for SimulationError {
    fn from(err: KdTreeError) -> Self {
        Self::SpatialIndex(err)
    }
}

/// Failure while rendering a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Circles cannot have a negative (or NaN) radius.
    #[error("circle radius must be a non-negative finite number, got {0}")]
    InvalidRadius(f32),
    /// The simulation failed to step.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Failure while loading or saving JSON files.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents were not valid JSON for the expected type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while loading or validating the render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or parsed.
    #[error(transparent)]
    Persist(#[from] PersistError),
    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
