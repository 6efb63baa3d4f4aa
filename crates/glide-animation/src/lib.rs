//! Transition curves and value animators for Glide
//!
//! Animations here are driven explicitly: the host advances them with the
//! elapsed frame time and reads the interpolated value back.

mod animation;
mod transition;

pub use animation::*;
pub use transition::*;
