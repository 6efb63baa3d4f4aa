//! A gesture source that replays hand-written gesture events.
//!
//! Lets tests drive a scroll handler with exact displacements and release
//! velocities instead of synthesising pointer samples.

use std::collections::VecDeque;

use glide_foundation::{GestureEvent, GestureSource};
use glide_ui_graphics::{DensityDpi, DpPoint2F, PxPoint2};

/// A raw pointer sample that reached the gesture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMovement {
    pub timestamp_ms: i64,
    pub position_px: PxPoint2,
    pub is_down: bool,
}

#[derive(Debug, Default)]
pub struct ScriptedGestureSource {
    events: VecDeque<GestureEvent>,
    movements: Vec<RecordedMovement>,
    clear_count: usize,
    density_dpi: Option<DensityDpi>,
}

impl ScriptedGestureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GestureEvent) -> &mut Self {
        self.events.push_back(event);
        self
    }

    pub fn drag_begin(&mut self, position_px: PxPoint2) -> &mut Self {
        self.push(GestureEvent::DragBegin { position_px })
    }

    /// `displacement_px` is relative to the drag origin.
    pub fn drag(&mut self, displacement_px: PxPoint2) -> &mut Self {
        self.push(GestureEvent::Drag {
            position_px: displacement_px,
        })
    }

    pub fn drag_end(&mut self, displacement_px: PxPoint2, flick_velocity_dpf: DpPoint2F) -> &mut Self {
        self.push(GestureEvent::DragEnd {
            position_px: displacement_px,
            flick_velocity_dpf,
        })
    }

    pub fn drag_cancel(&mut self) -> &mut Self {
        self.push(GestureEvent::DragCancel)
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn movements(&self) -> &[RecordedMovement] {
        &self.movements
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn density_dpi(&self) -> Option<DensityDpi> {
        self.density_dpi
    }
}

impl GestureSource for ScriptedGestureSource {
    fn add_movement(&mut self, timestamp_ms: i64, screen_position_px: PxPoint2, is_down: bool) {
        self.movements.push(RecordedMovement {
            timestamp_ms,
            position_px: screen_position_px,
            is_down,
        });
    }

    fn process(&mut self) -> bool {
        !self.events.is_empty()
    }

    fn try_get(&mut self) -> Option<GestureEvent> {
        self.events.pop_front()
    }

    fn clear(&mut self) {
        self.events.clear();
        self.clear_count += 1;
    }

    fn is_idle(&self) -> bool {
        self.events.is_empty()
    }

    fn set_density_dpi(&mut self, density_dpi: DensityDpi) {
        self.density_dpi = Some(density_dpi);
    }
}
