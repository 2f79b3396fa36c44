use super::utils_2d::{self, ANGLE_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point or offset in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn from_array(arr: [f64; 2]) -> Self {
        Self { x: arr[0], y: arr[1] }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Move by `offset`.
    pub fn translate(&self, offset: Coordinate) -> Self {
        *self + offset
    }

    /// Rotate counter-clockwise by `angle` radians around `pivot`.
    pub fn rotate(&self, pivot: Coordinate, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let d = *self - pivot;
        Self::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
    }

    /// Scale away from `pivot` by independent X and Y factors.
    pub fn scale(&self, pivot: Coordinate, factor: Coordinate) -> Self {
        Self::new(
            pivot.x + (self.x - pivot.x) * factor.x,
            pivot.y + (self.y - pivot.y) * factor.y,
        )
    }

    /// Polar angle of this coordinate seen from the origin, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Polar angle of `other` seen from this coordinate.
    pub fn angle_to(&self, other: &Coordinate) -> f64 {
        (*other - *self).angle()
    }

    /// Exchange the X and Y components.
    pub fn flip_xy(&self) -> Self {
        Self::new(self.y, self.x)
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_squared(&self, other: &Coordinate) -> f64 {
        utils_2d::distance_squared(self.to_array(), other.to_array())
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        Coordinate::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: f64) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    pub fn new(min: Coordinate, max: Coordinate) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Coordinate::new(f64::INFINITY, f64::INFINITY),
            max: Coordinate::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.extend(p);
        }
        bb
    }

    pub fn extend(&mut self, p: &Coordinate) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Boxes that only touch along an edge still overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn contains(&self, p: &Coordinate) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Infinite line through two distinct points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Line {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Coordinate {
        self.end - self.start
    }

    /// Direction angle from `start` towards `end`.
    pub fn angle(&self) -> f64 {
        self.direction().angle()
    }

    pub fn length(&self) -> f64 {
        self.direction().magnitude()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coordinate,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coordinate, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn point_at(&self, angle: f64) -> Coordinate {
        utils_2d::arc_point(self.center.to_array(), self.radius, angle).into()
    }
}

/// Circular arc swept from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Coordinate,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Sweep direction: counter-clockwise when true.
    #[serde(default = "default_ccw")]
    pub ccw: bool,
}

fn default_ccw() -> bool {
    true
}

impl Arc {
    pub fn new(center: Coordinate, radius: f64, start_angle: f64, end_angle: f64, ccw: bool) -> Self {
        Self { center, radius, start_angle, end_angle, ccw }
    }

    /// The full circle this arc lies on.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    pub fn is_angle_between(&self, angle: f64) -> bool {
        utils_2d::is_angle_between(angle, self.start_angle, self.end_angle, self.ccw)
    }

    /// Whether `point` (assumed on the circle) falls inside the sweep.
    pub fn contains_angle_of(&self, point: &Coordinate) -> bool {
        self.is_angle_between(self.center.angle_to(point))
    }

    pub fn point_at(&self, angle: f64) -> Coordinate {
        self.circle().point_at(angle)
    }

    pub fn start_point(&self) -> Coordinate {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Coordinate {
        self.point_at(self.end_angle)
    }
}

/// Ellipse or elliptic arc.
///
/// `major_p` is the major-axis endpoint relative to `center`; its length is the
/// major radius and its direction the rotation. Start and end are eccentric
/// (parametric) angles; equal values describe the full ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Coordinate,
    pub major_p: Coordinate,
    pub minor_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    #[serde(default = "default_ccw")]
    pub ccw: bool,
}

impl Ellipse {
    pub fn new(
        center: Coordinate,
        major_p: Coordinate,
        minor_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self { center, major_p, minor_radius, start_angle, end_angle, ccw: true }
    }

    /// Full ellipse with the given radii, rotated by `rotation` radians.
    pub fn full(center: Coordinate, major_radius: f64, minor_radius: f64, rotation: f64) -> Self {
        let major_p = Coordinate::new(major_radius, 0.0).rotate(Coordinate::origin(), rotation);
        Self::new(center, major_p, minor_radius, 0.0, 0.0)
    }

    pub fn major_radius(&self) -> f64 {
        self.major_p.magnitude()
    }

    /// Minor over major radius.
    pub fn ratio(&self) -> f64 {
        self.minor_radius / self.major_radius()
    }

    /// Rotation of the major axis.
    pub fn angle(&self) -> f64 {
        self.major_p.angle()
    }

    pub fn is_arc(&self) -> bool {
        let span = utils_2d::normalize_angle(self.end_angle - self.start_angle);
        span > ANGLE_TOLERANCE && (2.0 * std::f64::consts::PI - span) > ANGLE_TOLERANCE
    }

    pub fn is_angle_between(&self, angle: f64) -> bool {
        utils_2d::is_angle_between(angle, self.start_angle, self.end_angle, self.ccw)
    }

    /// Point at eccentric angle `param`.
    pub fn point_at(&self, param: f64) -> Coordinate {
        let local = Coordinate::new(self.major_radius() * param.cos(), self.minor_radius * param.sin());
        local.rotate(Coordinate::origin(), self.angle()) + self.center
    }

    /// Eccentric angle of `point` in the ellipse's own frame.
    pub fn eccentric_angle_of(&self, point: &Coordinate) -> f64 {
        let local = (*point - self.center).rotate(Coordinate::origin(), -self.angle());
        (local.y / self.minor_radius).atan2(local.x / self.major_radius())
    }
}
