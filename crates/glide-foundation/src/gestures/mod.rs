pub mod detector;
pub mod manager;
pub mod types;

pub use detector::GestureDetector;
pub use manager::{GestureManager, GestureSource};
pub use types::{GestureAxis, GestureEvent, GestureRecord, GestureType, PointerState};
