//! Coordinate frames that put a reference shape into canonical position.
//!
//! A [`CurveFrame`] is an affine map stored as a homogeneous 3x3 matrix. The
//! same frame is applied to the Bézier curve and to the reference line or
//! ellipse, so the curve parameter `t` of every intersection is unchanged.

use crate::geometry::{BezierCurve, Coordinate, Ellipse, Line, Matrix3};
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    matrix: Matrix3,
}

impl Default for CurveFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl CurveFrame {
    pub fn identity() -> Self {
        Self { matrix: Matrix3::identity() }
    }

    pub fn from_matrix(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Apply `next` after this frame.
    pub fn then(&self, next: &CurveFrame) -> Self {
        Self { matrix: next.matrix * self.matrix }
    }

    pub fn translate(&self, offset: Coordinate) -> Self {
        let mut m = Matrix3::identity();
        m[(0, 2)] = offset.x;
        m[(1, 2)] = offset.y;
        self.then(&Self::from_matrix(m))
    }

    /// Rotate counter-clockwise about the origin.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let m = Matrix3::new(
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        );
        self.then(&Self::from_matrix(m))
    }

    /// Scale about the origin by independent X and Y factors.
    pub fn scale(&self, factor: Coordinate) -> Self {
        let m = Matrix3::from_diagonal(&Vector3::new(factor.x, factor.y, 1.0));
        self.then(&Self::from_matrix(m))
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::from_matrix)
    }

    pub fn apply(&self, p: &Coordinate) -> Coordinate {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Coordinate::new(v.x, v.y)
    }

    pub fn apply_to_curve(&self, curve: &BezierCurve) -> BezierCurve {
        curve.map_points(|p| self.apply(p))
    }

    /// Moves `line.start` to the origin and turns the line onto the +X axis.
    pub fn aligned_to_line(line: &Line) -> Self {
        Self::identity().translate(-line.start).rotate(-line.angle())
    }

    /// Maps the ellipse onto the origin-centred circle of radius `minor_radius`.
    ///
    /// Translate by `-center`, undo the rotation, then shrink X by the axis
    /// ratio. The eccentric angle of a point becomes its polar angle.
    pub fn normalizing_ellipse(ellipse: &Ellipse) -> Self {
        Self::identity()
            .translate(-ellipse.center)
            .rotate(-ellipse.angle())
            .scale(Coordinate::new(ellipse.ratio(), 1.0))
    }
}
