//! Intersection of lines, conics, arcs, ellipses and Bézier curves.
//!
//! [`Intersector`] holds the configuration and the numeric backend. Each
//! primitive pair has its own entry point; [`Intersector::intersect`] picks the
//! right one for two [`Shape`](crate::geometry::Shape) values.

pub mod frame;
mod closed_form;
mod dispatch;
mod subdivision;

#[cfg(test)]
mod tests_bezier;
#[cfg(test)]
mod tests_subdivision;

pub use frame::CurveFrame;

use crate::config::IntersectionConfig;
use crate::math::{NumericRootSolver, RootSolver, SolverError};
use thiserror::Error;

/// Errors that can occur while intersecting two primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntersectError {
    #[error("Unsupported curve degree: {0} control points (expected 3 or 4)")]
    UnsupportedDegree(usize),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Solver failed: {0}")]
    Solver(#[from] SolverError),
}

/// Result type for intersection operations.
pub type IntersectResult<T> = Result<T, IntersectError>;

/// Entry point for all intersection routines.
///
/// Stateless apart from its configuration: every call works only on its
/// arguments, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Intersector<S: RootSolver = NumericRootSolver> {
    config: IntersectionConfig,
    solver: S,
}

impl Default for Intersector {
    fn default() -> Self {
        Self::new(IntersectionConfig::default())
    }
}

impl Intersector {
    pub fn new(config: IntersectionConfig) -> Self {
        let solver = NumericRootSolver::from_config(&config);
        Self { config, solver }
    }
}

impl<S: RootSolver> Intersector<S> {
    /// Use a different numeric backend.
    pub fn with_solver(config: IntersectionConfig, solver: S) -> Self {
        Self { config, solver }
    }

    pub fn config(&self) -> &IntersectionConfig {
        &self.config
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }
}
