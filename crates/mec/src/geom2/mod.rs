//! 2D primitives shared by the hull and circle searches.
//!
//! Purpose
//! - One point type (`Point2`, a nalgebra `Vector2<f64>`) and one tolerance
//!   record (`MecCfg`) so every stage agrees on what "equal" and "inside" mean.
//! - Structural identity is exact; geometric tests go through `MecCfg`.

pub mod rand;
mod types;
mod util;

pub use types::{MecCfg, Point2};
pub use util::{coord_scale, first_non_finite, same_point, sq_dist};
