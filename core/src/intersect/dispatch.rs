//! Routing of arbitrary shape pairs to the specialised routines.

use super::closed_form::{validate_ellipse, validate_line, validate_radius};
use super::{IntersectResult, Intersector};
use crate::conic::Equation;
use crate::geometry::{BezierCurve, Coordinate, Shape};
use crate::math::RootSolver;

impl<S: RootSolver> Intersector<S> {
    /// Intersect any two shapes. Argument order only affects point order.
    pub fn intersect(&self, a: &Shape, b: &Shape) -> IntersectResult<Vec<Coordinate>> {
        match (a, b) {
            (Shape::Bezier(p), Shape::Bezier(q)) => Ok(self.bezier_bezier(p, q)),
            (Shape::Bezier(p), other) | (other, Shape::Bezier(p)) => self.bezier_against(p, other),
            _ => {
                let points = self.intersect_equations(&equation_of(a)?, &equation_of(b)?)?;
                Ok(points
                    .into_iter()
                    .filter(|p| a.contains_on_curve(p) && b.contains_on_curve(p))
                    .collect())
            }
        }
    }

    fn bezier_against(&self, curve: &BezierCurve, other: &Shape) -> IntersectResult<Vec<Coordinate>> {
        match other {
            Shape::Line(line) => self.bezier_line(curve, line),
            Shape::Circle(circle) => self.bezier_circle(curve, circle),
            Shape::Arc(arc) => self.bezier_arc(curve, arc),
            Shape::Ellipse(ellipse) => self.bezier_ellipse(curve, ellipse),
            Shape::Bezier(q) => Ok(self.bezier_bezier(curve, q)),
        }
    }
}

/// Matrix form of the full curve underlying a non-Bézier shape.
fn equation_of(shape: &Shape) -> IntersectResult<Equation> {
    match shape {
        Shape::Line(line) => {
            validate_line(line)?;
            Ok(Equation::from_line(line))
        }
        Shape::Circle(circle) => {
            validate_radius("circle radius", circle.radius)?;
            Ok(Equation::from_circle(circle))
        }
        Shape::Arc(arc) => {
            validate_radius("arc radius", arc.radius)?;
            Ok(Equation::from_circle(&arc.circle()))
        }
        Shape::Ellipse(ellipse) => {
            validate_ellipse(ellipse)?;
            Ok(Equation::from_ellipse(ellipse))
        }
        Shape::Bezier(_) => Err(super::IntersectError::InvalidGeometry(
            "bezier curves have no conic equation".into(),
        )),
    }
}
