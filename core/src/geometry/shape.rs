use super::{Arc, BezierCurve, Circle, Coordinate, Ellipse, Line};
use serde::{Deserialize, Serialize};

/// Any primitive that can take part in an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    Bezier(BezierCurve),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Arc(_) => "arc",
            Shape::Ellipse(_) => "ellipse",
            Shape::Bezier(_) => "bezier",
        }
    }

    /// Whether `p`, already known to lie on the underlying full curve, is
    /// inside this shape's angular span. Shapes without a span accept every point.
    pub fn contains_on_curve(&self, p: &Coordinate) -> bool {
        match self {
            Shape::Arc(arc) => arc.contains_angle_of(p),
            Shape::Ellipse(e) if e.is_arc() => e.is_angle_between(e.eccentric_angle_of(p)),
            _ => true,
        }
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Arc> for Shape {
    fn from(arc: Arc) -> Self {
        Shape::Arc(arc)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl From<BezierCurve> for Shape {
    fn from(curve: BezierCurve) -> Self {
        Shape::Bezier(curve)
    }
}
