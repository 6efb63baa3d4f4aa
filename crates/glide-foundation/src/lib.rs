//! Gesture recognition and velocity tracking for Glide
//!
//! Raw pointer samples go into a [`GestureManager`], which runs them through a
//! [`GestureDetector`] and exposes the recognised drags as a pull-style queue
//! of [`GestureEvent`]s.

pub mod gesture_constants;
pub mod gestures;
pub mod velocity_tracker;

pub use gestures::{
    GestureAxis, GestureDetector, GestureEvent, GestureManager, GestureRecord, GestureSource,
    GestureType, PointerState,
};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::gestures::{GestureEvent, GestureManager, GestureSource};
}
