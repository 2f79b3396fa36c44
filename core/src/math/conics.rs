//! Simultaneous solution of two conics.
//!
//! Each conic `A x² + B xy + C y² + D x + E y + F = 0` is viewed as a quadratic
//! in x whose coefficients are polynomials in y:
//!
//! ```text
//! a x² + b(y) x + c(y) = 0,   a = A,  b(y) = B y + D,  c(y) = C y² + E y + F
//! ```
//!
//! The resultant of the two quadratics eliminates x and leaves a polynomial of
//! degree at most four in y. Every real root y gives candidate x values, which
//! are kept when they lie on both conics.
//!
//! Both conics are first moved to a local origin near their common region, so
//! the coefficients stay comparable in size however far the geometry sits from
//! the world origin.

use super::{Polynomial, RootSolver, SolverResult};
use tracing::debug;

/// Relative magnitude below which a coefficient or eliminant counts as zero.
const ZERO_TOLERANCE: f64 = 1e-12;
/// Relative determinant of the quadratic block below which a conic has no centre.
const CENTER_TOLERANCE: f64 = 1e-9;
const PROJECTION_STEPS: usize = 64;

type Coefficients = [f64; 6];

fn eval(c: &Coefficients, x: f64, y: f64) -> f64 {
    let [a, b, cc, d, e, f] = *c;
    a * x * x + b * x * y + cc * y * y + d * x + e * y + f
}

fn gradient(c: &Coefficients, x: f64, y: f64) -> [f64; 2] {
    let [a, b, cc, d, e, _] = *c;
    [2.0 * a * x + b * y + d, b * x + 2.0 * cc * y + e]
}

/// Centre of an ellipse or hyperbola; `None` for parabolas and lines.
fn center(c: &Coefficients) -> Option<[f64; 2]> {
    let [a, b, cc, d, e, _] = *c;
    let det = 4.0 * a * cc - b * b;
    let quad = a.abs() + b.abs() + cc.abs();
    if quad == 0.0 || det.abs() <= CENTER_TOLERANCE * quad * quad {
        return None;
    }
    let p = [(b * e - 2.0 * cc * d) / det, (b * d - 2.0 * a * e) / det];
    p.iter().all(|v| v.is_finite()).then_some(p)
}

/// Newton projection of `start` onto the curve. Exact in one step for a line.
fn project(c: &Coefficients, start: [f64; 2]) -> [f64; 2] {
    let mut p = start;
    for _ in 0..PROJECTION_STEPS {
        let f = eval(c, p[0], p[1]);
        let g = gradient(c, p[0], p[1]);
        let g2 = g[0] * g[0] + g[1] * g[1];
        if g2 == 0.0 || f == 0.0 {
            break;
        }
        let next = [p[0] - f * g[0] / g2, p[1] - f * g[1] / g2];
        if !next.iter().all(|v| v.is_finite()) {
            break;
        }
        let moved = (next[0] - p[0]).hypot(next[1] - p[1]);
        p = next;
        if moved <= ZERO_TOLERANCE * (1.0 + p[0].abs() + p[1].abs()) {
            break;
        }
    }
    p
}

/// A point near where the two conics can meet.
fn local_origin(first: &Coefficients, second: &Coefficients) -> [f64; 2] {
    let midpoint = |p: [f64; 2], q: [f64; 2]| [(p[0] + q[0]) / 2.0, (p[1] + q[1]) / 2.0];
    match (center(first), center(second)) {
        (Some(p), Some(q)) => midpoint(p, q),
        (Some(p), None) => midpoint(p, project(second, p)),
        (None, Some(q)) => midpoint(project(first, q), q),
        (None, None) => {
            let p = project(first, [0.0, 0.0]);
            midpoint(p, project(second, p))
        }
    }
}

/// Substitute `x = u + x0`, `y = v + y0`.
fn translated(c: &Coefficients, origin: [f64; 2]) -> Coefficients {
    let [a, b, cc, _, _, _] = *c;
    let [x0, y0] = origin;
    let [d, e] = gradient(c, x0, y0);
    [a, b, cc, d, e, eval(c, x0, y0)]
}

struct QuadraticInX {
    a: f64,
    b: Polynomial,
    c: Polynomial,
    coeffs: Coefficients,
}

impl QuadraticInX {
    /// Normalized so the largest coefficient has magnitude one.
    fn new(coeffs: &Coefficients) -> Option<Self> {
        let scale = coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
        if scale == 0.0 || !scale.is_finite() {
            return None;
        }
        let n = (*coeffs).map(|c| c / scale);
        let [a, b, c, d, e, f] = n;
        Some(Self {
            a,
            b: Polynomial::new(vec![d, b]),
            c: Polynomial::new(vec![f, e, c]),
            coeffs: n,
        })
    }

    /// Whether `(x, y)` lies within `tolerance` of the curve, to first order.
    fn passes_near(&self, x: f64, y: f64, tolerance: f64) -> bool {
        let [gx, gy] = gradient(&self.coeffs, x, y);
        eval(&self.coeffs, x, y).abs() <= tolerance * gx.hypot(gy)
    }

    /// The conic restricted to a horizontal line.
    fn at_y(&self, y: f64) -> Polynomial {
        Polynomial::new(vec![self.c.eval(y), self.b.eval(y), self.a])
    }
}

/// Real intersection points of two conics given as `[A, B, C, D, E, F]`.
///
/// A candidate is accepted when its first-order distance `|f| / |∇f|` to each
/// conic is at most `distance_tolerance`.
pub fn intersect_conics<S: RootSolver + ?Sized>(
    solver: &S,
    first: &Coefficients,
    second: &Coefficients,
    distance_tolerance: f64,
) -> SolverResult<Vec<[f64; 2]>> {
    let origin = local_origin(first, second);
    let (Some(q1), Some(q2)) = (
        QuadraticInX::new(&translated(first, origin)),
        QuadraticInX::new(&translated(second, origin)),
    ) else {
        debug!("conic with all-zero coefficients has no defined intersection");
        return Ok(Vec::new());
    };

    let a1 = Polynomial::constant(q1.a);
    let a2 = Polynomial::constant(q2.a);
    // a2*f1 - a1*f2 = -(q x + p)
    let p = &(&a1 * &q2.c) - &(&a2 * &q1.c);
    let q = &(&a1 * &q2.b) - &(&a2 * &q1.b);
    let r_lhs = &q1.b * &q2.c;
    let r_rhs = &q2.b * &q1.c;
    let r = &r_lhs - &r_rhs;

    let (eliminant, magnitude) = if q1.a.abs() <= ZERO_TOLERANCE && q2.a.abs() <= ZERO_TOLERANCE {
        let magnitude = r_lhs.max_abs_coefficient().max(r_rhs.max_abs_coefficient());
        (r, magnitude)
    } else {
        let p2 = p.square();
        let qr = &q * &r;
        let magnitude = p2.max_abs_coefficient().max(qr.max_abs_coefficient());
        (&p2 - &qr, magnitude)
    };

    if eliminant.max_abs_coefficient() <= ZERO_TOLERANCE * magnitude {
        debug!("conics share a component; no finite intersection set");
        return Ok(Vec::new());
    }

    let tol = solver.tolerance();
    let mut points: Vec<[f64; 2]> = Vec::new();

    for y in solver.real_roots(&eliminant)? {
        let mut candidates = Vec::new();
        let qv = q.eval(y);
        if qv.abs() > ZERO_TOLERANCE {
            candidates.push(-p.eval(y) / qv);
        }
        candidates.extend(solver.real_roots(&q1.at_y(y))?);
        candidates.extend(solver.real_roots(&q2.at_y(y))?);

        for x in candidates {
            if !q1.passes_near(x, y, distance_tolerance) || !q2.passes_near(x, y, distance_tolerance) {
                continue;
            }
            let duplicate = points.iter().any(|pt| {
                (pt[0] - x).abs() <= tol * (1.0 + x.abs()) && (pt[1] - y).abs() <= tol * (1.0 + y.abs())
            });
            if !duplicate {
                points.push([x, y]);
            }
        }
    }

    Ok(points
        .into_iter()
        .map(|[x, y]| [x + origin[0], y + origin[1]])
        .collect())
}
