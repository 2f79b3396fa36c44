//! Quadratic and cubic Bézier curves.

use super::{utils_2d, BoundingBox, Coordinate};
use crate::intersect::{IntersectError, IntersectResult};
use crate::math::Polynomial;
use serde::{Deserialize, Serialize};

/// A Bézier curve with three or four control points.
///
/// The degree is fixed by the variant and never changes; every transform
/// returns a new curve of the same degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BezierCurve {
    Quadratic([Coordinate; 3]),
    Cubic([Coordinate; 4]),
}

impl BezierCurve {
    pub fn quadratic(p0: Coordinate, p1: Coordinate, p2: Coordinate) -> Self {
        Self::Quadratic([p0, p1, p2])
    }

    pub fn cubic(p0: Coordinate, p1: Coordinate, p2: Coordinate, p3: Coordinate) -> Self {
        Self::Cubic([p0, p1, p2, p3])
    }

    /// Fails for anything other than 3 or 4 control points.
    pub fn from_control_points(points: &[Coordinate]) -> IntersectResult<Self> {
        match *points {
            [p0, p1, p2] => Ok(Self::quadratic(p0, p1, p2)),
            [p0, p1, p2, p3] => Ok(Self::cubic(p0, p1, p2, p3)),
            _ => Err(IntersectError::UnsupportedDegree(points.len())),
        }
    }

    pub fn control_points(&self) -> &[Coordinate] {
        match self {
            Self::Quadratic(pts) => pts,
            Self::Cubic(pts) => pts,
        }
    }

    /// Polynomial degree: 2 or 3.
    pub fn degree(&self) -> usize {
        self.control_points().len() - 1
    }

    /// Box around the control polygon, which always contains the curve.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.control_points())
    }

    /// Point at parameter `t` in `[0, 1]` (de Casteljau).
    pub fn direct_value_at(&self, t: f64) -> Coordinate {
        let mut pts: Vec<[f64; 2]> = self.control_points().iter().map(|p| p.to_array()).collect();
        while pts.len() > 1 {
            pts = pts.windows(2).map(|w| utils_2d::lerp(w[0], w[1], t)).collect();
        }
        Coordinate::from_array(pts[0])
    }

    /// Split at `t`, returning the curves covering `[0, t]` and `[t, 1]`.
    pub fn split_at(&self, t: f64) -> [BezierCurve; 2] {
        match self {
            Self::Quadratic([p0, p1, p2]) => {
                let a = lerp(p0, p1, t);
                let b = lerp(p1, p2, t);
                let m = lerp(&a, &b, t);
                [Self::quadratic(*p0, a, m), Self::quadratic(m, b, *p2)]
            }
            Self::Cubic([p0, p1, p2, p3]) => {
                let a = lerp(p0, p1, t);
                let b = lerp(p1, p2, t);
                let c = lerp(p2, p3, t);
                let ab = lerp(&a, &b, t);
                let bc = lerp(&b, &c, t);
                let m = lerp(&ab, &bc, t);
                [Self::cubic(*p0, a, ab, m), Self::cubic(m, bc, c, *p3)]
            }
        }
    }

    pub fn split_half(&self) -> [BezierCurve; 2] {
        self.split_at(0.5)
    }

    /// Apply `f` to every control point.
    ///
    /// Only exact for affine maps, which carry Bézier curves onto Bézier curves.
    pub fn map_points(&self, f: impl Fn(&Coordinate) -> Coordinate) -> Self {
        match self {
            Self::Quadratic(pts) => Self::Quadratic(pts.map(|p| f(&p))),
            Self::Cubic(pts) => Self::Cubic(pts.map(|p| f(&p))),
        }
    }

    pub fn translate(&self, offset: Coordinate) -> Self {
        self.map_points(|p| p.translate(offset))
    }

    pub fn rotate(&self, pivot: Coordinate, angle: f64) -> Self {
        self.map_points(|p| p.rotate(pivot, angle))
    }

    pub fn scale(&self, pivot: Coordinate, factor: Coordinate) -> Self {
        self.map_points(|p| p.scale(pivot, factor))
    }

    /// `x(t)` and `y(t)` in the monomial basis.
    pub fn power_basis(&self) -> (Polynomial, Polynomial) {
        let axis = |pick: fn(&Coordinate) -> f64| -> Polynomial {
            match self {
                Self::Quadratic(pts) => {
                    let [p0, p1, p2] = pts.map(|p| pick(&p));
                    Polynomial::new(vec![p0, 2.0 * (p1 - p0), p0 - 2.0 * p1 + p2])
                }
                Self::Cubic(pts) => {
                    let [p0, p1, p2, p3] = pts.map(|p| pick(&p));
                    Polynomial::new(vec![
                        p0,
                        3.0 * (p1 - p0),
                        3.0 * (p0 - 2.0 * p1 + p2),
                        p3 - 3.0 * p2 + 3.0 * p1 - p0,
                    ])
                }
            }
        };
        (axis(|p| p.x), axis(|p| p.y))
    }
}

fn lerp(a: &Coordinate, b: &Coordinate, t: f64) -> Coordinate {
    Coordinate::from_array(utils_2d::lerp(a.to_array(), b.to_array(), t))
}
