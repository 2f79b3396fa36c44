use super::{IntersectError, Intersector};
use crate::conic::Equation;
use crate::geometry::{Arc, BezierCurve, Circle, Coordinate, Ellipse, Line};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn arch() -> BezierCurve {
    BezierCurve::quadratic(c(0.0, 0.0), c(1.0, 2.0), c(2.0, 0.0))
}

fn wave() -> BezierCurve {
    BezierCurve::cubic(c(0.0, 0.0), c(1.0, 3.0), c(2.0, -3.0), c(3.0, 0.0))
}

/// Straight quadratic along y = `y` from x = -`half` to x = `half`.
fn flat_quadratic(y: f64, half: f64) -> BezierCurve {
    BezierCurve::quadratic(c(-half, y), c(0.0, y), c(half, y))
}

fn sorted(mut pts: Vec<Coordinate>) -> Vec<Coordinate> {
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts
}

fn assert_near(actual: &[Coordinate], expected: &[Coordinate]) {
    assert_eq!(actual.len(), expected.len(), "points were {:?}", actual);
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.distance_to(e) < 1e-6, "expected {:?}, got {:?}", expected, actual);
    }
}

// =============================================================================
// Bézier - Line
// =============================================================================

#[test]
fn test_bezier_line_single_interior_root() {
    let i = Intersector::default();
    let line = Line::new(c(-5.0, 1.0), c(5.0, 1.0));
    let pts = i.bezier_line(&arch(), &line).unwrap();
    assert_near(&pts, &[c(1.0, 1.0)]);
}

#[test]
fn test_bezier_line_two_roots() {
    let i = Intersector::default();
    let line = Line::new(c(-5.0, 0.5), c(5.0, 0.5));
    let pts = sorted(i.bezier_line(&arch(), &line).unwrap());

    let s = 0.5_f64.sqrt();
    assert_near(&pts, &[c(1.0 - s, 0.5), c(1.0 + s, 0.5)]);
}

#[test]
fn test_bezier_line_slanted() {
    let i = Intersector::default();
    // y = x - 0.5
    let line = Line::new(c(0.5, 0.0), c(1.5, 1.0));
    let pts = i.bezier_line(&arch(), &line).unwrap();

    let t = (2.0 + 12.0_f64.sqrt()) / 8.0;
    assert_near(&pts, &[arch().direct_value_at(t)]);
    let eq = Equation::from_line(&line);
    assert!(eq.eval(&pts[0]).abs() < 1e-9);
}

#[test]
fn test_bezier_line_vertical() {
    let i = Intersector::default();
    let line = Line::new(c(1.0, -5.0), c(1.0, 5.0));
    let pts = i.bezier_line(&arch(), &line).unwrap();
    assert_near(&pts, &[c(1.0, 1.0)]);
}

#[test]
fn test_bezier_line_cubic() {
    let i = Intersector::default();
    let line = Line::new(c(-1.0, 0.5), c(4.0, 0.5));
    let pts = i.bezier_line(&wave(), &line).unwrap();

    assert_eq!(pts.len(), 2);
    for p in &pts {
        assert!((p.y - 0.5).abs() < 1e-9);
        assert!(p.x > 0.0 && p.x < 1.5);
    }
}

#[test]
fn test_bezier_line_roots_outside_segment() {
    let i = Intersector::default();
    // The arch's parabola reaches x = 3 only at t = 1.5
    let line = Line::new(c(3.0, -5.0), c(3.0, 5.0));
    assert!(i.bezier_line(&arch(), &line).unwrap().is_empty());

    let above = Line::new(c(-5.0, 3.0), c(5.0, 3.0));
    assert!(i.bezier_line(&arch(), &above).unwrap().is_empty());
}

#[test]
fn test_bezier_line_degenerate_line() {
    let i = Intersector::default();
    let line = Line::new(c(1.0, 1.0), c(1.0, 1.0));
    assert!(matches!(
        i.bezier_line(&arch(), &line),
        Err(IntersectError::InvalidGeometry(_))
    ));
}

// =============================================================================
// Bézier - Circle / Arc
// =============================================================================

#[test]
fn test_bezier_circle_straight_quadratic() {
    let i = Intersector::default();
    let circle = Circle::new(Coordinate::origin(), 1.0);
    let pts = sorted(i.bezier_circle(&flat_quadratic(0.0, 2.0), &circle).unwrap());
    assert_near(&pts, &[c(-1.0, 0.0), c(1.0, 0.0)]);
}

#[test]
fn test_bezier_circle_quadratic_residuals() {
    let i = Intersector::default();
    // Dips inside the circle twice: four crossings
    let circle = Circle::new(c(1.0, 0.0), 0.9);
    let pts = i.bezier_circle(&arch(), &circle).unwrap();

    assert_eq!(pts.len(), 4);
    for p in &pts {
        assert!((p.distance_to(&circle.center) - 0.9).abs() < 1e-9);
    }
}

#[test]
fn test_bezier_circle_cubic() {
    let i = Intersector::default();
    let circle = Circle::new(c(1.5, 0.0), 1.0);
    let pts = sorted(i.bezier_circle(&wave(), &circle).unwrap());

    assert_eq!(pts.len(), 2);
    for p in &pts {
        assert!((p.distance_to(&circle.center) - 1.0).abs() < 1e-9);
    }
    // The wave is point-symmetric about the circle centre
    assert!((pts[0].x + pts[1].x - 3.0).abs() < 1e-6);
    assert!((pts[0].y + pts[1].y).abs() < 1e-6);
}

#[test]
fn test_bezier_circle_cubic_uses_every_control_point() {
    let i = Intersector::default();
    let curve = BezierCurve::cubic(c(0.0, 0.0), c(1.0, 2.0), c(3.0, 2.0), c(4.0, 5.0));
    let circle = Circle::new(c(2.0, 2.0), 1.5);
    let pts = i.bezier_circle(&curve, &circle).unwrap();

    assert_eq!(pts.len(), 2);
    for p in &pts {
        assert!((p.distance_to(&circle.center) - 1.5).abs() < 1e-9);
    }
}

#[test]
fn test_bezier_circle_miss() {
    let i = Intersector::default();
    let circle = Circle::new(c(10.0, 10.0), 1.0);
    assert!(i.bezier_circle(&wave(), &circle).unwrap().is_empty());
}

#[test]
fn test_bezier_circle_invalid_radius() {
    let i = Intersector::default();
    let circle = Circle::new(Coordinate::origin(), -1.0);
    assert!(matches!(
        i.bezier_circle(&arch(), &circle),
        Err(IntersectError::InvalidGeometry(_))
    ));
}

#[test]
fn test_bezier_arc_excludes_point_outside_sweep() {
    let i = Intersector::default();
    let arc = Arc::new(Coordinate::origin(), 1.0, 0.0, FRAC_PI_2, true);

    // Candidates at 0° and 180°; only the first is on the arc
    let pts = i.bezier_arc(&flat_quadratic(0.0, 2.0), &arc).unwrap();
    assert_near(&pts, &[c(1.0, 0.0)]);

    // Candidates at 30° and 150°
    let pts = i.bezier_arc(&flat_quadratic(0.5, 2.0), &arc).unwrap();
    assert_near(&pts, &[c(0.75_f64.sqrt(), 0.5)]);
}

#[test]
fn test_bezier_arc_angle_relative_to_center() {
    let i = Intersector::default();
    let arc = Arc::new(c(5.0, 5.0), 1.0, 0.0, FRAC_PI_2, true);
    let curve = BezierCurve::quadratic(c(3.0, 5.5), c(5.0, 5.5), c(7.0, 5.5));
    let pts = i.bezier_arc(&curve, &arc).unwrap();
    assert_near(&pts, &[c(5.0 + 0.75_f64.sqrt(), 5.5)]);
}

#[test]
fn test_bezier_arc_clockwise() {
    let i = Intersector::default();
    // Clockwise from 90° to 0° is the same quarter as counter-clockwise 0° to 90°
    let arc = Arc::new(Coordinate::origin(), 1.0, FRAC_PI_2, 0.0, false);
    let pts = i.bezier_arc(&flat_quadratic(0.5, 2.0), &arc).unwrap();
    assert_near(&pts, &[c(0.75_f64.sqrt(), 0.5)]);
}

// =============================================================================
// Bézier - Ellipse
// =============================================================================

#[test]
fn test_bezier_ellipse_axis_aligned() {
    let i = Intersector::default();
    let ellipse = Ellipse::full(Coordinate::origin(), 2.0, 1.0, 0.0);
    let pts = sorted(i.bezier_ellipse(&flat_quadratic(0.0, 3.0), &ellipse).unwrap());
    assert_near(&pts, &[c(-2.0, 0.0), c(2.0, 0.0)]);
}

#[test]
fn test_bezier_ellipse_rotated_cubic_along_minor_axis() {
    let i = Intersector::default();
    let center = c(1.0, 1.0);
    let ellipse = Ellipse::full(center, 3.0, 1.0, FRAC_PI_4);
    let minor = c(-FRAC_PI_4.sin(), FRAC_PI_4.cos());

    let p0 = center + minor * 2.0;
    let p3 = center - minor * 2.0;
    let step = (p3 - p0) * (1.0 / 3.0);
    let curve = BezierCurve::cubic(p0, p0 + step, p0 + step * 2.0, p3);

    let pts = sorted(i.bezier_ellipse(&curve, &ellipse).unwrap());
    assert_near(&pts, &sorted(vec![center + minor, center - minor]));
}

#[test]
fn test_bezier_ellipse_cubic_residuals() {
    let i = Intersector::default();
    let ellipse = Ellipse::full(c(1.5, 0.2), 1.2, 0.6, 0.3);
    let eq = Equation::from_ellipse(&ellipse);
    let pts = i.bezier_ellipse(&wave(), &ellipse).unwrap();

    assert!(!pts.is_empty());
    for p in &pts {
        assert!(eq.eval(p).abs() < 1e-8, "{:?} off ellipse", p);
    }
}

#[test]
fn test_bezier_elliptic_arc_filter() {
    let i = Intersector::default();
    // Upper half of the ellipse x²/4 + y² = 1
    let ellipse = Ellipse::new(Coordinate::origin(), c(2.0, 0.0), 1.0, 0.0, PI);
    let curve = BezierCurve::quadratic(c(0.5, -2.0), c(0.5, 0.0), c(0.5, 2.0));
    let pts = i.bezier_ellipse(&curve, &ellipse).unwrap();
    assert_near(&pts, &[c(0.5, (1.0 - 0.0625_f64).sqrt())]);
}

#[test]
fn test_bezier_ellipse_invalid() {
    let i = Intersector::default();
    let ellipse = Ellipse::full(Coordinate::origin(), 2.0, 0.0, 0.0);
    assert!(matches!(
        i.bezier_ellipse(&arch(), &ellipse),
        Err(IntersectError::InvalidGeometry(_))
    ));
}
