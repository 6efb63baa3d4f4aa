//! Scroll gesture physics and scroll viewer for Glide
//!
//! [`ScrollGestureHandler`] turns drag gestures into a per-frame content
//! offset with inertial flicks and spring bounces at the content edges.
//! [`ScrollViewer`] is the host-facing control that owns a handler.

mod scroll_gesture_animation_config;
mod scroll_gesture_handler;
mod scroll_mode;
pub mod scroll_physics;
mod scroll_viewer;

pub use scroll_gesture_animation_config::*;
pub use scroll_gesture_handler::*;
pub use scroll_mode::*;
pub use scroll_viewer::*;

pub mod prelude {
    pub use crate::scroll_gesture_animation_config::ScrollGestureAnimationConfig;
    pub use crate::scroll_gesture_handler::{AnimStatus, DragStatus, ScrollGestureHandler};
    pub use crate::scroll_mode::ScrollModeFlags;
    pub use crate::scroll_viewer::ScrollViewer;
}
