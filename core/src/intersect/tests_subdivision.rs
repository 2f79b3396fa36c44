use super::Intersector;
use crate::config::IntersectionConfig;
use crate::geometry::{BezierCurve, Coordinate};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn arch() -> BezierCurve {
    BezierCurve::quadratic(c(0.0, 0.0), c(1.0, 2.0), c(2.0, 0.0))
}

fn near_any(p: &Coordinate, expected: &[Coordinate], tol: f64) -> bool {
    expected.iter().any(|e| p.distance_to(e) < tol)
}

#[test]
fn test_disjoint_boxes_give_nothing() {
    let i = Intersector::default();
    let left = BezierCurve::cubic(c(0.0, 0.0), c(0.3, 1.0), c(0.7, -1.0), c(1.0, 0.0));
    let right = BezierCurve::cubic(c(10.0, 0.0), c(10.3, 1.0), c(10.7, -1.0), c(11.0, 0.0));
    assert!(i.bezier_bezier(&left, &right).is_empty());
    assert!(i.bezier_bezier(&right, &left).is_empty());
}

#[test]
fn test_identical_curves_overlap() {
    let config = IntersectionConfig::default().with_flatness(0.05, 0.05);
    let i = Intersector::new(config);
    let pts = i.bezier_bezier(&arch(), &arch());
    assert!(!pts.is_empty());
}

#[test]
fn test_arch_against_horizontal() {
    let i = Intersector::default();
    let flat = BezierCurve::quadratic(c(-1.0, 0.5), c(1.0, 0.5), c(3.0, 0.5));
    let pts = i.bezier_bezier(&arch(), &flat);

    let s = 0.5_f64.sqrt();
    let expected = [c(1.0 - s, 0.5), c(1.0 + s, 0.5)];
    assert!(!pts.is_empty());
    for p in &pts {
        assert!(near_any(p, &expected, 5e-3), "{:?} is not near a crossing", p);
    }
    for e in &expected {
        assert!(pts.iter().any(|p| p.distance_to(e) < 5e-3), "missed {:?}", e);
    }
}

#[test]
fn test_nearby_points_are_merged() {
    let i = Intersector::default();
    let flat = BezierCurve::quadratic(c(-1.0, 0.5), c(1.0, 0.5), c(3.0, 0.5));
    let pts = i.bezier_bezier(&arch(), &flat);

    let w = i.config().flatness_width;
    let h = i.config().flatness_height;
    for (k, p) in pts.iter().enumerate() {
        for q in &pts[k + 1..] {
            assert!((p.x - q.x).abs() > w || (p.y - q.y).abs() > h);
        }
    }
}

#[test]
fn test_cubic_wave_crossings() {
    let i = Intersector::default();
    let wave = BezierCurve::cubic(c(0.0, 0.0), c(1.0, 3.0), c(2.0, -3.0), c(3.0, 0.0));
    let axis = BezierCurve::cubic(c(-1.0, 0.0), c(0.5, 0.0), c(2.5, 0.0), c(4.0, 0.0));
    let pts = i.bezier_bezier(&wave, &axis);

    assert!(pts.iter().any(|p| p.distance_to(&c(1.5, 0.0)) < 5e-3), "points were {:?}", pts);
}

#[test]
fn test_depth_limit_returns_best_effort() {
    let config = IntersectionConfig::default().with_max_depth(3);
    let i = Intersector::new(config);
    let pts = i.bezier_bezier(&arch(), &arch());
    assert!(!pts.is_empty());
}

#[test]
fn test_identical_large_curves_finish_quickly() {
    // 100 units wide at the default 1e-3 flatness: hundreds of thousands of leaves
    let i = Intersector::default();
    let big = BezierCurve::quadratic(c(0.0, 0.0), c(50.0, 100.0), c(100.0, 0.0));

    let start = std::time::Instant::now();
    let pts = i.bezier_bezier(&big, &big);
    let elapsed = start.elapsed();

    assert!(!pts.is_empty());
    assert!(elapsed.as_secs() < 30, "took {:?}", elapsed);
    let bb = big.bounding_box();
    for p in &pts {
        assert!(bb.contains(p), "{:?} outside the curve's box", p);
    }
}
