//! Dense univariate polynomials with real coefficients.

use std::ops::{Add, Mul, Sub};

/// Leading coefficients below this fraction of the largest coefficient are
/// treated as zero when trimming.
pub const LEADING_TOLERANCE: f64 = 1e-12;

/// Polynomial stored in ascending order: `coeffs[i]` multiplies `x^i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Nominal degree, ignoring exactly-zero leading coefficients.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| *c != 0.0)
            .unwrap_or(0)
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[self.degree()]
    }

    pub fn max_abs_coefficient(&self) -> f64 {
        self.coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()))
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    /// Evaluate with Horner's scheme.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    pub fn derivative(&self) -> Self {
        if self.coeffs.len() < 2 {
            return Self::zero();
        }
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * i as f64)
                .collect(),
        )
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * factor).collect())
    }

    /// Add a constant term.
    pub fn offset(&self, c: f64) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] += c;
        Self::new(coeffs)
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Drop leading coefficients that are negligible relative to the largest one.
    pub fn trimmed(&self, tolerance: f64) -> Self {
        let limit = self.max_abs_coefficient() * tolerance;
        let keep = self
            .coeffs
            .iter()
            .rposition(|c| c.abs() > limit)
            .map_or(1, |i| i + 1);
        Self::new(self.coeffs[..keep].to_vec())
    }

    /// Coefficients after the leading one, highest power first, divided by the
    /// leading coefficient: `x^n + c[0] x^(n-1) + ... + c[n-1]`.
    pub fn monic_tail(&self) -> Vec<f64> {
        let n = self.degree();
        let lead = self.coeffs[n];
        self.coeffs[..n].iter().rev().map(|c| c / lead).collect()
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.coeffs.get(i).unwrap_or(&0.0) + rhs.coeffs.get(i).unwrap_or(&0.0))
            .collect();
        Polynomial::new(coeffs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &rhs.scale(-1.0)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.scale(rhs)
    }
}
