use glide_ui_graphics::{DpPoint2F, PxPoint2};

/// Phase of a raw pointer sample fed to the [`GestureDetector`](super::GestureDetector).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Down,
    Move,
    Up,
    Cancel,
}

/// Axes a detector considers when deciding that a pointer started dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureAxis {
    X,
    Y,
    #[default]
    XY,
}

impl GestureAxis {
    /// Zero the components this axis setting ignores.
    pub fn clamp(self, value: DpPoint2F) -> DpPoint2F {
        match self {
            GestureAxis::XY => value,
            GestureAxis::X => DpPoint2F::new(value.x, 0.0),
            GestureAxis::Y => DpPoint2F::new(0.0, value.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureType {
    FreeDrag,
    DragComplete,
    DragCanceled,
}

/// A recognised gesture in dp space, as queued by the detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRecord {
    pub gesture: GestureType,
    pub position_dpf: DpPoint2F,
    pub velocity_dpf: DpPoint2F,
}

impl GestureRecord {
    pub fn new(gesture: GestureType, position_dpf: DpPoint2F, velocity_dpf: DpPoint2F) -> Self {
        Self {
            gesture,
            position_dpf,
            velocity_dpf,
        }
    }
}

/// Discrete drag events handed to scroll consumers.
///
/// `DragBegin` carries the pointer position where the drag started. `Drag`
/// and `DragEnd` carry the displacement from that origin, so a consumer can
/// add it straight onto its resting offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    DragBegin {
        position_px: PxPoint2,
    },
    Drag {
        position_px: PxPoint2,
    },
    DragEnd {
        position_px: PxPoint2,
        flick_velocity_dpf: DpPoint2F,
    },
    DragCancel,
}
