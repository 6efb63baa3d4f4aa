//! Testing utilities and harness for Glide

pub mod robot;
pub mod robot_assertions;
pub mod scripted_gestures;

pub use robot::*;
pub use scripted_gestures::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::scripted_gestures::*;
}
