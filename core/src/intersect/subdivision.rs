//! Bézier-Bézier intersection by recursive subdivision.
//!
//! Pairs whose bounding boxes are disjoint are dropped. Pairs that are small
//! enough in both directions count as flat and contribute one approximate
//! point. Everything else is split in half and the four sub-pairs are
//! examined in turn.

use super::Intersector;
use crate::geometry::{BezierCurve, Coordinate};
use crate::math::RootSolver;
use std::collections::HashMap;
use tracing::{trace, warn};

struct Subdivision<'a> {
    flat_width: f64,
    flat_height: f64,
    max_depth: usize,
    points: &'a mut Vec<Coordinate>,
    hit_depth_limit: bool,
}

impl Subdivision<'_> {
    fn run(&mut self, b1: &BezierCurve, b2: &BezierCurve, depth: usize) {
        let bb1 = b1.bounding_box();
        let bb2 = b2.bounding_box();

        if !bb1.overlaps(&bb2) {
            return;
        }

        let flat = bb1.height() + bb2.height() <= self.flat_height
            && bb1.width() + bb2.width() <= self.flat_width;
        if flat || depth >= self.max_depth {
            if !flat {
                self.hit_depth_limit = true;
            }
            self.points.push(b1.control_points()[1]);
            return;
        }

        let [b1_first, b1_second] = b1.split_half();
        let [b2_first, b2_second] = b2.split_half();
        self.run(&b1_first, &b2_first, depth + 1);
        self.run(&b1_second, &b2_first, depth + 1);
        self.run(&b1_first, &b2_second, depth + 1);
        self.run(&b1_second, &b2_second, depth + 1);
    }
}

impl<S: RootSolver> Intersector<S> {
    /// Approximate intersection points of two Bézier curves.
    ///
    /// Points within the flatness thresholds of an earlier point are merged.
    /// Recursion stops at `max_depth`; the pairs still overlapping there
    /// contribute their best-effort point.
    pub fn bezier_bezier(&self, b1: &BezierCurve, b2: &BezierCurve) -> Vec<Coordinate> {
        let mut raw = Vec::new();
        let mut state = Subdivision {
            flat_width: self.config.flatness_width,
            flat_height: self.config.flatness_height,
            max_depth: self.config.max_depth,
            points: &mut raw,
            hit_depth_limit: false,
        };
        state.run(b1, b2, 0);

        if state.hit_depth_limit {
            warn!(max_depth = self.config.max_depth, "bezier subdivision reached depth limit");
        }

        let points = merge_close(raw, self.config.flatness_width, self.config.flatness_height);
        trace!(count = points.len(), "bezier-bezier");
        points
    }
}

/// Drop points within `width` and `height` of an earlier kept point.
///
/// Kept points are bucketed into `width x height` cells, so each point is
/// only compared against the kept points of its own and neighbouring cells.
fn merge_close(raw: Vec<Coordinate>, width: f64, height: f64) -> Vec<Coordinate> {
    let cell = |p: &Coordinate| ((p.x / width).floor() as i64, (p.y / height).floor() as i64);
    let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    let mut points: Vec<Coordinate> = Vec::new();

    for p in raw {
        let (cx, cy) = cell(&p);
        let close = (cx - 1..=cx + 1)
            .flat_map(|i| (cy - 1..=cy + 1).map(move |j| (i, j)))
            .filter_map(|key| grid.get(&key))
            .flatten()
            .any(|&k| (p.x - points[k].x).abs() <= width && (p.y - points[k].y).abs() <= height);
        if !close {
            grid.entry((cx, cy)).or_default().push(points.len());
            points.push(p);
        }
    }
    points
}
