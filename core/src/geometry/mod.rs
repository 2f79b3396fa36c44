use nalgebra as na;

pub type Vector2 = na::Vector2<f64>;
pub type Matrix2 = na::Matrix2<f64>;
pub type Matrix3 = na::Matrix3<f64>;

pub const EPSILON: f64 = 1e-6;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Coordinate {
    fn approx_eq(&self, other: &Self) -> bool {
        self.distance_squared(other) < EPSILON * EPSILON
    }
}

pub mod primitives;
pub use primitives::*;

pub mod bezier;
pub use bezier::BezierCurve;

pub mod shape;
pub use shape::Shape;

pub mod utils_2d;
