//! Default [`RootSolver`] backed by closed forms and nalgebra.
//!
//! Degrees one to three use closed forms. Higher degrees take the eigenvalues
//! of the companion matrix (real Schur decomposition) and polish each real
//! candidate with a few Newton steps.

use super::conics;
use super::{Polynomial, RootSolver, SolverError, SolverResult};
use crate::config::IntersectionConfig;
use crate::geometry::{Matrix2, Vector2};
use nalgebra::{DMatrix, Schur};
use std::f64::consts::PI;
use tracing::trace;

/// Relative determinant below which a 2x2 system counts as singular.
pub const SINGULAR_TOLERANCE: f64 = 1e-12;

const MAX_SCHUR_ITERATIONS: usize = 1000;
const NEWTON_STEPS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRootSolver {
    /// Relative tolerance for imaginary parts and duplicate roots.
    pub tolerance: f64,
    /// Largest distance from a conic intersection to either curve.
    pub residual_tolerance: f64,
}

impl Default for NumericRootSolver {
    fn default() -> Self {
        Self::from_config(&IntersectionConfig::default())
    }
}

impl NumericRootSolver {
    pub fn new(tolerance: f64, residual_tolerance: f64) -> Self {
        Self { tolerance, residual_tolerance }
    }

    pub fn from_config(config: &IntersectionConfig) -> Self {
        Self::new(config.root_tolerance, config.residual_tolerance)
    }

    fn quadratic_roots(&self, b: f64, c: f64) -> Vec<f64> {
        let disc = b * b - 4.0 * c;
        let slack = self.tolerance * (b * b).max(4.0 * c.abs());
        if disc < -slack {
            return Vec::new();
        }
        let sqrt_d = disc.max(0.0).sqrt();
        // Cancellation-free form of (-b ± √d) / 2
        let q = -0.5 * (b + b.signum() * sqrt_d);
        if q == 0.0 {
            return vec![0.0];
        }
        vec![q, c / q]
    }

    fn cubic_roots(&self, a: f64, b: f64, c: f64) -> Vec<f64> {
        // Depressed cubic t^3 + p t + q with x = t - a/3
        let shift = a / 3.0;
        let p = b - a * a / 3.0;
        let q = 2.0 * a * a * a / 27.0 - a * b / 3.0 + c;
        let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);

        if p.abs() < f64::EPSILON && q.abs() < f64::EPSILON {
            return vec![-shift];
        }

        if disc > 0.0 {
            let sqrt_d = disc.sqrt();
            let u = (-q / 2.0 + sqrt_d).cbrt();
            let v = (-q / 2.0 - sqrt_d).cbrt();
            let mut roots = vec![u + v - shift];
            // The complex pair collapses onto a double root near tangency
            let re = -(u + v) / 2.0;
            let im = (3.0_f64.sqrt() / 2.0) * (u - v);
            if im.abs() <= self.tolerance * (1.0 + re.abs()) {
                roots.push(re - shift);
            }
            return roots;
        }

        let r = (-p / 3.0).sqrt();
        let cos_arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let phi = cos_arg.acos();
        (0..3)
            .map(|k| 2.0 * r * (phi / 3.0 - 2.0 * PI * k as f64 / 3.0).cos() - shift)
            .collect()
    }

    fn companion_roots(&self, coefficients: &[f64]) -> SolverResult<Vec<f64>> {
        let n = coefficients.len();
        let mut companion = DMatrix::<f64>::zeros(n, n);
        for (j, c) in coefficients.iter().enumerate() {
            companion[(0, j)] = -c;
        }
        for i in 1..n {
            companion[(i, i - 1)] = 1.0;
        }

        let schur = Schur::try_new(companion, f64::EPSILON, MAX_SCHUR_ITERATIONS)
            .ok_or(SolverError::NoConvergence { degree: n })?;

        Ok(schur
            .complex_eigenvalues()
            .iter()
            .filter(|z| z.im.abs() <= self.tolerance * (1.0 + z.re.abs()))
            .map(|z| z.re)
            .collect())
    }

    /// Newton refinement that only keeps steps reducing the residual.
    fn polish(poly: &Polynomial, root: f64) -> f64 {
        let deriv = poly.derivative();
        let mut x = root;
        let mut fx = poly.eval(x).abs();
        for _ in 0..NEWTON_STEPS {
            let d = deriv.eval(x);
            if d == 0.0 || fx == 0.0 {
                break;
            }
            let next = x - poly.eval(x) / d;
            let f_next = poly.eval(next).abs();
            if !next.is_finite() || f_next >= fx {
                break;
            }
            x = next;
            fx = f_next;
        }
        x
    }

    fn dedup_sorted(&self, mut roots: Vec<f64>) -> Vec<f64> {
        roots.sort_by(|a, b| a.total_cmp(b));
        let mut out: Vec<f64> = Vec::with_capacity(roots.len());
        for r in roots {
            match out.last() {
                Some(last) if (r - last).abs() <= self.tolerance * (1.0 + last.abs()) => {}
                _ => out.push(r),
            }
        }
        out
    }
}

impl RootSolver for NumericRootSolver {
    fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn solve_linear_2x2(&self, m: &Matrix2, rhs: &Vector2) -> SolverResult<Vector2> {
        if m.iter().chain(rhs.iter()).any(|v| !v.is_finite()) {
            return Err(SolverError::NonFiniteCoefficients);
        }
        let scale = m.row(0).norm() * m.row(1).norm();
        if scale == 0.0 || m.determinant().abs() <= SINGULAR_TOLERANCE * scale {
            return Err(SolverError::Singular);
        }
        m.col_piv_qr().solve(rhs).ok_or(SolverError::Singular)
    }

    fn monic_roots(&self, coefficients: &[f64]) -> SolverResult<Vec<f64>> {
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(SolverError::NonFiniteCoefficients);
        }

        let candidates = match *coefficients {
            [] => Vec::new(),
            [c] => vec![-c],
            [b, c] => self.quadratic_roots(b, c),
            [a, b, c] => self.cubic_roots(a, b, c),
            _ => self.companion_roots(coefficients)?,
        };

        let mut full = vec![1.0];
        full.extend_from_slice(coefficients);
        full.reverse();
        let poly = Polynomial::new(full);

        let roots = self.dedup_sorted(
            candidates
                .into_iter()
                .map(|r| Self::polish(&poly, r))
                .filter(|r| r.is_finite())
                .collect(),
        );
        trace!(degree = coefficients.len(), count = roots.len(), "polynomial roots");
        Ok(roots)
    }

    fn intersect_conics(&self, first: &[f64; 6], second: &[f64; 6]) -> SolverResult<Vec<[f64; 2]>> {
        conics::intersect_conics(self, first, second, self.residual_tolerance)
    }
}
