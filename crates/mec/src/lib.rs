//! Minimum enclosing circles of small planar point sets.
//!
//! Pipeline: hull culling → gift-wrapped convex hull → exhaustive search over
//! pair (diameter) and triple (circumcircle) candidates of hull vertices.
//!
//! Everything is a pure function of its input. There is no shared state;
//! intermediate stages are returned in `MecDiagnostics` when requested.

pub mod circle;
pub mod geom2;
pub mod hull;
pub mod source;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::{
    minimal_bounding_circle, minimal_bounding_circle_of_hull, minimal_bounding_circle_with,
    minimal_bounding_circle_with_diagnostics, Circle, MecDiagnostics, MecError,
};
pub use geom2::{MecCfg, Point2};
pub use hull::{convex_hull, cull, culling_box, CullingBox};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circle::{
        minimal_bounding_circle, minimal_bounding_circle_with,
        minimal_bounding_circle_with_diagnostics, Circle, MecDiagnostics, MecError,
    };
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
    pub use crate::geom2::{MecCfg, Point2};
    pub use crate::hull::{convex_hull, Corners, CullingBox};
    pub use crate::source::{circle_within_range, within_range, PointSource};
}
