//! Numeric root finding used by the closed-form intersection routines.
//!
//! The intersection code talks to this layer only through [`RootSolver`], so a
//! different numeric backend can be dropped in without touching the router.

pub mod conics;
pub mod polynomial;
pub mod roots;

pub use polynomial::Polynomial;
pub use roots::NumericRootSolver;

use crate::geometry::{Matrix2, Vector2};
use thiserror::Error;

/// Errors that can occur while solving.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("System is singular or has no unique solution")]
    Singular,

    #[error("Root finder did not converge for a degree {degree} polynomial")]
    NoConvergence { degree: usize },

    #[error("Coefficients are not finite")]
    NonFiniteCoefficients,
}

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Real-root polynomial and equation-system solving.
pub trait RootSolver {
    /// Relative tolerance used for root acceptance and de-duplication.
    fn tolerance(&self) -> f64;

    /// Solve the 2x2 system `m * x = rhs`.
    fn solve_linear_2x2(&self, m: &Matrix2, rhs: &Vector2) -> SolverResult<Vector2>;

    /// Real roots of `x^n + c[0] x^(n-1) + ... + c[n-1]`, ascending, without duplicates.
    fn monic_roots(&self, coefficients: &[f64]) -> SolverResult<Vec<f64>>;

    /// Real intersection points of two conics `A x² + B xy + C y² + D x + E y + F = 0`,
    /// each given as `[A, B, C, D, E, F]`.
    fn intersect_conics(&self, first: &[f64; 6], second: &[f64; 6]) -> SolverResult<Vec<[f64; 2]>>;

    fn quadratic(&self, coefficients: [f64; 2]) -> SolverResult<Vec<f64>> {
        self.monic_roots(&coefficients)
    }

    fn cubic(&self, coefficients: [f64; 3]) -> SolverResult<Vec<f64>> {
        self.monic_roots(&coefficients)
    }

    fn quartic(&self, coefficients: [f64; 4]) -> SolverResult<Vec<f64>> {
        self.monic_roots(&coefficients)
    }

    fn sextic(&self, coefficients: [f64; 6]) -> SolverResult<Vec<f64>> {
        self.monic_roots(&coefficients)
    }

    /// Real roots of an arbitrary polynomial.
    ///
    /// Negligible leading coefficients are dropped first, so a nominal quartic
    /// whose top terms cancel is solved as the lower-degree polynomial it is.
    /// The zero polynomial and non-zero constants have no isolated roots.
    fn real_roots(&self, poly: &Polynomial) -> SolverResult<Vec<f64>> {
        if !poly.is_finite() {
            return Err(SolverError::NonFiniteCoefficients);
        }
        let trimmed = poly.trimmed(polynomial::LEADING_TOLERANCE);
        if trimmed.degree() == 0 {
            return Ok(Vec::new());
        }
        self.monic_roots(&trimmed.monic_tail())
    }
}
