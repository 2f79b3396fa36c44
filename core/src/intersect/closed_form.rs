//! Intersections with an algebraic closed form.
//!
//! Line and conic pairs go through their matrix form. Bézier curves against
//! lines, circles, arcs and ellipses reduce to a single polynomial in the curve
//! parameter `t`, built from the power basis of the (possibly reframed) curve:
//!
//! * line: the curve's `y(t)` after the line is moved onto the X axis, degree 2 or 3
//! * circle: `(x(t) - cx)² + (y(t) - cy)² - r²`, degree 4 or 6
//! * ellipse: the circle case after the ellipse is normalized to a circle
//!
//! Only roots strictly inside `(0, 1)` are kept, and they are always evaluated
//! on the curve the caller passed in.

use super::{CurveFrame, IntersectError, IntersectResult, Intersector};
use crate::conic::{Equation, EquationKind};
use crate::geometry::{Arc, BezierCurve, Circle, Coordinate, Ellipse, Line, Matrix2, Vector2, EPSILON};
use crate::math::{Polynomial, RootSolver, SolverError};
use tracing::{debug, trace};

impl<S: RootSolver> Intersector<S> {
    /// Intersection of two lines in matrix form; empty when they are parallel.
    pub fn line_line(&self, l1: &Equation, l2: &Equation) -> IntersectResult<Vec<Coordinate>> {
        let m1 = l1.matrix();
        let m2 = l2.matrix();

        let m = Matrix2::new(
            m1[(2, 0)] + m1[(0, 2)], m1[(2, 1)] + m1[(1, 2)],
            m2[(2, 0)] + m2[(0, 2)], m2[(2, 1)] + m2[(1, 2)],
        );
        let v = Vector2::new(-m1[(2, 2)], -m2[(2, 2)]);

        match self.solver.solve_linear_2x2(&m, &v) {
            Ok(r) => Ok(vec![Coordinate::new(r[0], r[1])]),
            Err(SolverError::Singular) => {
                debug!("parallel or coincident lines");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Line against conic, solved with both axes exchanged.
    ///
    /// Flipping keeps a vertical line from reaching the general solver with
    /// vanishing `x²` and `xy` terms on both sides.
    pub fn line_quad(&self, line: &Equation, quad: &Equation) -> IntersectResult<Vec<Coordinate>> {
        let points = self.quad_quad(&line.flip_xy(), &quad.flip_xy())?;
        Ok(points.iter().map(Coordinate::flip_xy).collect())
    }

    pub fn quad_quad(&self, q1: &Equation, q2: &Equation) -> IntersectResult<Vec<Coordinate>> {
        let tol = self.config.conic_tolerance;

        if q1.has_vanishing_x_terms(tol) && q2.has_vanishing_x_terms(tol) {
            let (m1, m2) = (q1.matrix(), q2.matrix());
            if m1[(1, 1)].abs() < tol && m2[(1, 1)].abs() < tol {
                debug!("both conics degenerate to lines");
                return self.line_line(q1, q2);
            }
            return self.line_quad(q1, q2);
        }

        let points = self
            .solver
            .intersect_conics(&q1.coefficients(), &q2.coefficients())?;
        trace!(count = points.len(), "conic-conic intersection");
        Ok(points.into_iter().map(Coordinate::from).collect())
    }

    /// Dispatch two equations on their line/conic kind under `conic_tolerance`.
    pub fn intersect_equations(&self, a: &Equation, b: &Equation) -> IntersectResult<Vec<Coordinate>> {
        let tol = self.config.conic_tolerance;
        let is_line = |eq: &Equation| eq.kind_within(tol) == EquationKind::Line;
        match (is_line(a), is_line(b)) {
            (true, true) => self.line_line(a, b),
            (true, false) => self.line_quad(a, b),
            (false, true) => self.line_quad(b, a),
            (false, false) => self.quad_quad(a, b),
        }
    }

    pub fn bezier_line(&self, bezier: &BezierCurve, line: &Line) -> IntersectResult<Vec<Coordinate>> {
        validate_line(line)?;

        let local = CurveFrame::aligned_to_line(line).apply_to_curve(bezier);
        let (_, y) = local.power_basis();

        let roots = self.solver.real_roots(&y)?;
        trace!(degree = bezier.degree(), roots = roots.len(), "bezier-line");
        Ok(points_on_curve(bezier, &roots))
    }

    pub fn bezier_circle(&self, bezier: &BezierCurve, circle: &Circle) -> IntersectResult<Vec<Coordinate>> {
        validate_radius("circle radius", circle.radius)?;

        let roots = self.circle_roots(bezier, &circle.center, circle.radius)?;
        trace!(degree = bezier.degree(), roots = roots.len(), "bezier-circle");
        Ok(points_on_curve(bezier, &roots))
    }

    /// Circle intersections whose angle about the arc centre lies in the sweep.
    pub fn bezier_arc(&self, bezier: &BezierCurve, arc: &Arc) -> IntersectResult<Vec<Coordinate>> {
        let points = self.bezier_circle(bezier, &arc.circle())?;
        Ok(points.into_iter().filter(|p| arc.contains_angle_of(p)).collect())
    }

    pub fn bezier_ellipse(&self, bezier: &BezierCurve, ellipse: &Ellipse) -> IntersectResult<Vec<Coordinate>> {
        validate_ellipse(ellipse)?;

        let local = CurveFrame::normalizing_ellipse(ellipse).apply_to_curve(bezier);
        let roots = self.circle_roots(&local, &Coordinate::origin(), ellipse.minor_radius)?;
        trace!(degree = bezier.degree(), roots = roots.len(), "bezier-ellipse");

        let points = points_on_curve(bezier, &roots);
        if !ellipse.is_arc() {
            return Ok(points);
        }
        Ok(points
            .into_iter()
            .filter(|p| ellipse.is_angle_between(ellipse.eccentric_angle_of(p)))
            .collect())
    }

    /// Parameters where `curve` is at distance `radius` from `center`.
    fn circle_roots(&self, curve: &BezierCurve, center: &Coordinate, radius: f64) -> IntersectResult<Vec<f64>> {
        let (x, y) = curve.power_basis();
        let dx = x.offset(-center.x);
        let dy = y.offset(-center.y);
        let poly: Polynomial = (&dx.square() + &dy.square()).offset(-radius * radius);
        Ok(self.solver.real_roots(&poly)?)
    }
}

/// Evaluate the roots inside the open unit interval on `curve`.
fn points_on_curve(curve: &BezierCurve, roots: &[f64]) -> Vec<Coordinate> {
    roots
        .iter()
        .filter(|t| **t > 0.0 && **t < 1.0)
        .map(|t| curve.direct_value_at(*t))
        .collect()
}

pub(super) fn validate_line(line: &Line) -> IntersectResult<()> {
    if !line.start.is_finite() || !line.end.is_finite() || line.length() < EPSILON {
        return Err(IntersectError::InvalidGeometry(format!(
            "line from {:?} to {:?} has no direction",
            line.start, line.end
        )));
    }
    Ok(())
}

pub(super) fn validate_radius(what: &str, radius: f64) -> IntersectResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(IntersectError::InvalidGeometry(format!("{} must be positive, got {}", what, radius)));
    }
    Ok(())
}

pub(super) fn validate_ellipse(ellipse: &Ellipse) -> IntersectResult<()> {
    validate_radius("ellipse major radius", ellipse.major_radius())?;
    validate_radius("ellipse minor radius", ellipse.minor_radius)
}
