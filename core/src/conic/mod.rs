//! Lines and conics as homogeneous 3x3 symmetric matrices.
//!
//! A curve is the set of points `(x, y)` with `vᵗ M v = 0` for `v = (x, y, 1)`.
//! The upper-left 2x2 block holds the quadratic terms; a line is the
//! degenerate case where that block vanishes.

use crate::config::DEFAULT_CONIC_TOLERANCE;
use crate::geometry::{Circle, Coordinate, Ellipse, Line, Matrix3, Vector2};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Which kind of curve an [`Equation`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquationKind {
    Line,
    Conic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    matrix: Matrix3,
    kind: EquationKind,
}

impl Equation {
    /// Build from any 3x3 matrix; the symmetric part is kept.
    pub fn from_matrix(m: Matrix3) -> Self {
        let matrix = (m + m.transpose()) * 0.5;
        let kind = if quadratic_block_vanishes(&matrix, DEFAULT_CONIC_TOLERANCE) {
            EquationKind::Line
        } else {
            EquationKind::Conic
        };
        Self { matrix, kind }
    }

    /// `A x² + B xy + C y² + D x + E y + F = 0` from `[A, B, C, D, E, F]`.
    pub fn from_coefficients(c: [f64; 6]) -> Self {
        let [a, b, cc, d, e, f] = c;
        Self::from_matrix(Matrix3::new(
            a, b / 2.0, d / 2.0,
            b / 2.0, cc, e / 2.0,
            d / 2.0, e / 2.0, f,
        ))
    }

    /// Line through `line.start` and `line.end` with a unit normal.
    pub fn from_line(line: &Line) -> Self {
        let dir = line.direction();
        let len = dir.magnitude();
        let (a, b) = if len > 0.0 { (-dir.y / len, dir.x / len) } else { (0.0, 0.0) };
        let c = -(a * line.start.x + b * line.start.y);
        Self {
            matrix: Matrix3::new(
                0.0, 0.0, a / 2.0,
                0.0, 0.0, b / 2.0,
                a / 2.0, b / 2.0, c,
            ),
            kind: EquationKind::Line,
        }
    }

    pub fn from_circle(circle: &Circle) -> Self {
        let Coordinate { x: cx, y: cy } = circle.center;
        let f = cx * cx + cy * cy - circle.radius * circle.radius;
        Self {
            matrix: Matrix3::new(
                1.0, 0.0, -cx,
                0.0, 1.0, -cy,
                -cx, -cy, f,
            ),
            kind: EquationKind::Conic,
        }
    }

    /// The full ellipse; any angular span is ignored.
    pub fn from_ellipse(ellipse: &Ellipse) -> Self {
        let a = ellipse.major_radius();
        let b = ellipse.minor_radius;
        let (sin, cos) = ellipse.angle().sin_cos();
        let Coordinate { x: cx, y: cy } = ellipse.center;

        // World to ellipse-local frame: rotate(-angle) after translate(-center)
        let to_local = Matrix3::new(
            cos, sin, -(cos * cx + sin * cy),
            -sin, cos, sin * cx - cos * cy,
            0.0, 0.0, 1.0,
        );
        let local = Matrix3::from_diagonal(&Vector3::new(1.0 / (a * a), 1.0 / (b * b), -1.0));
        Self {
            matrix: to_local.transpose() * local * to_local,
            kind: EquationKind::Conic,
        }
    }

    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    pub fn is_line(&self) -> bool {
        self.kind == EquationKind::Line
    }

    /// Classify again with a caller-chosen degeneracy `tolerance`.
    ///
    /// Equations built from a [`Line`] stay lines regardless of `tolerance`.
    pub fn kind_within(&self, tolerance: f64) -> EquationKind {
        if self.is_line() || quadratic_block_vanishes(&self.matrix, tolerance) {
            EquationKind::Line
        } else {
            EquationKind::Conic
        }
    }

    /// `[A, B, C, D, E, F]` for `A x² + B xy + C y² + D x + E y + F = 0`.
    pub fn coefficients(&self) -> [f64; 6] {
        let m = &self.matrix;
        [
            m[(0, 0)],
            m[(0, 1)] + m[(1, 0)],
            m[(1, 1)],
            m[(0, 2)] + m[(2, 0)],
            m[(1, 2)] + m[(2, 1)],
            m[(2, 2)],
        ]
    }

    /// Same curve with the X and Y axes exchanged.
    pub fn flip_xy(&self) -> Self {
        let mut matrix = self.matrix;
        matrix.swap_rows(0, 1);
        matrix.swap_columns(0, 1);
        Self { matrix, kind: self.kind }
    }

    /// Both the `x²` and `xy` entries are within `tolerance` of zero.
    pub fn has_vanishing_x_terms(&self, tolerance: f64) -> bool {
        self.matrix[(0, 0)].abs() < tolerance && self.matrix[(0, 1)].abs() < tolerance
    }

    /// Value of `vᵗ M v`; zero on the curve.
    pub fn eval(&self, p: &Coordinate) -> f64 {
        let v = Vector3::new(p.x, p.y, 1.0);
        v.dot(&(self.matrix * v))
    }

    /// Gradient of the implicit function at `p`.
    pub fn gradient(&self, p: &Coordinate) -> Vector2 {
        let v = Vector3::new(p.x, p.y, 1.0);
        let g = self.matrix * v * 2.0;
        Vector2::new(g.x, g.y)
    }

    /// Image of this curve under the homogeneous point transform `t`.
    ///
    /// Returns `None` when `t` is not invertible.
    pub fn transformed(&self, t: &Matrix3) -> Option<Self> {
        let inv = t.try_inverse()?;
        Some(Self {
            matrix: inv.transpose() * self.matrix * inv,
            kind: self.kind,
        })
    }
}

fn quadratic_block_vanishes(m: &Matrix3, tolerance: f64) -> bool {
    m[(0, 0)].abs() < tolerance && m[(0, 1)].abs() < tolerance && m[(1, 1)].abs() < tolerance
}
