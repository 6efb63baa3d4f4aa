//! Pure math/data for units and geometry in Glide
//!
//! This crate contains the device-independent (dp) and device pixel (px)
//! value types, the point/size primitives built on them, and the
//! density-driven converter between the two spaces.

mod converter;
mod geometry;
mod unit;

pub use converter::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::converter::{DensityDpi, UnitConverter};
    pub use crate::geometry::{DpPoint2F, PxPoint2, PxSize2D, PxVector2};
    pub use crate::unit::{Dp, Px};
}
