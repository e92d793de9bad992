//! Tolerance defaults for hull construction (internal).
//!
//! Policy
//! - Fixed constants; the hull builder has no user-facing knobs. Enclosure
//!   tolerances live in `MecCfg` instead.

/// Angle value returned for two identical points (one full turn).
pub(crate) const ANGLE_SAME: f64 = 360.0;
/// Angle values closer than this are treated as the same direction (collinear tie).
pub(crate) const ANGLE_TIE_EPS: f64 = 1e-10;
