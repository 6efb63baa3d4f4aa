//! Shared gesture constants for consistent touch/pointer handling.
//!
//! All distances and velocities are in dp so recognition behaves the same
//! across screen densities.

/// Squared distance (dp²) a pointer must move from its down position before
/// a transaction turns into a drag.
pub const TAP_DISTANCE_THRESHOLD_SQR: f32 = 4.0;

/// Per-axis release velocity (dp/s) above which a drag end carries a flick.
pub const FLICK_VELOCITY_THRESHOLD_X: f32 = 50.0;
pub const FLICK_VELOCITY_THRESHOLD_Y: f32 = 50.0;

/// Magnitude limits (dp/s) applied to flick velocities.
///
/// The maximum matches Android's default maximum fling velocity
/// (ViewConfiguration) on a baseline density.
pub const MIN_FLING_VELOCITY: f32 = 50.0;
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
