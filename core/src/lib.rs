pub mod config;
pub mod conic;
pub mod geometry;
pub mod intersect;
pub mod math;

pub use config::IntersectionConfig;
pub use intersect::{IntersectError, IntersectResult, Intersector};

pub fn version() -> &'static str {
    "0.1.0"
}
