//! Turns raw pixel-space pointer samples into a queue of [`GestureEvent`]s.

use std::collections::VecDeque;

use glide_ui_graphics::{DensityDpi, DpPoint2F, PxPoint2, UnitConverter};

use super::detector::GestureDetector;
use super::types::{GestureAxis, GestureEvent, GestureType, PointerState};

/// Producer of discrete drag events consumed by scroll handlers.
///
/// Events must be handed out in arrival order and [`GestureSource::clear`]
/// must discard both queued events and any recognition in progress.
pub trait GestureSource {
    /// Feed a raw pointer sample. `is_down` is true for the initial press and
    /// every sample while the pointer stays pressed.
    fn add_movement(&mut self, timestamp_ms: i64, screen_position_px: PxPoint2, is_down: bool);

    /// Move newly recognised gestures into the event queue. Returns true if
    /// any event is waiting.
    fn process(&mut self) -> bool;

    /// Pop the oldest pending event.
    fn try_get(&mut self) -> Option<GestureEvent>;

    fn clear(&mut self);

    /// True when no pointer transaction is open and nothing is queued.
    fn is_idle(&self) -> bool;

    fn set_density_dpi(&mut self, density_dpi: DensityDpi);
}

pub struct GestureManager {
    detector: GestureDetector,
    unit_converter: UnitConverter,
    is_down: bool,
    drag_origin_dpf: Option<DpPoint2F>,
    events: VecDeque<GestureEvent>,
}

impl GestureManager {
    pub fn new(axis: GestureAxis, density_dpi: DensityDpi) -> Self {
        Self {
            detector: GestureDetector::new(axis),
            unit_converter: UnitConverter::new(density_dpi),
            is_down: false,
            drag_origin_dpf: None,
            events: VecDeque::new(),
        }
    }

    pub fn detector(&self) -> &GestureDetector {
        &self.detector
    }

    pub fn set_axis(&mut self, axis: GestureAxis) {
        self.detector.set_axis(axis);
    }

    fn to_px(&self, value_dpf: DpPoint2F) -> PxPoint2 {
        self.unit_converter.to_px_vector2(value_dpf).to_px_point2()
    }
}

impl Default for GestureManager {
    fn default() -> Self {
        Self::new(GestureAxis::XY, DensityDpi::BASE)
    }
}

impl GestureSource for GestureManager {
    fn add_movement(&mut self, timestamp_ms: i64, screen_position_px: PxPoint2, is_down: bool) {
        let state = match (self.is_down, is_down) {
            (false, true) => PointerState::Down,
            (true, true) => PointerState::Move,
            (true, false) => PointerState::Up,
            // Hover
            (false, false) => return,
        };
        self.is_down = is_down;
        let position_dpf = self.unit_converter.to_dp_point2f(screen_position_px);
        self.detector.add_movement(timestamp_ms, position_dpf, state);
    }

    fn process(&mut self) -> bool {
        while let Some(record) = self.detector.try_read_gesture() {
            match record.gesture {
                GestureType::FreeDrag => match self.drag_origin_dpf {
                    None => {
                        self.drag_origin_dpf = Some(record.position_dpf);
                        let position_px = self.to_px(record.position_dpf);
                        self.events.push_back(GestureEvent::DragBegin { position_px });
                    }
                    Some(origin_dpf) => {
                        let position_px = self.to_px(record.position_dpf - origin_dpf);
                        self.events.push_back(GestureEvent::Drag { position_px });
                    }
                },
                GestureType::DragComplete => match self.drag_origin_dpf.take() {
                    Some(origin_dpf) => {
                        let position_px = self.to_px(record.position_dpf - origin_dpf);
                        self.events.push_back(GestureEvent::DragEnd {
                            position_px,
                            flick_velocity_dpf: record.velocity_dpf,
                        });
                    }
                    None => log::warn!("Drag complete without a drag in progress, ignoring"),
                },
                GestureType::DragCanceled => {
                    if self.drag_origin_dpf.take().is_some() {
                        self.events.push_back(GestureEvent::DragCancel);
                    }
                }
            }
        }
        !self.events.is_empty()
    }

    fn try_get(&mut self) -> Option<GestureEvent> {
        self.process();
        self.events.pop_front()
    }

    fn clear(&mut self) {
        self.detector.clear();
        self.events.clear();
        self.drag_origin_dpf = None;
        self.is_down = false;
    }

    fn is_idle(&self) -> bool {
        !self.detector.in_movement_transaction()
            && !self.detector.is_gesture_available()
            && self.events.is_empty()
            && self.drag_origin_dpf.is_none()
    }

    fn set_density_dpi(&mut self, density_dpi: DensityDpi) {
        log::debug!("GestureManager density changed to {} dpi", density_dpi.get());
        self.unit_converter.set_density_dpi(density_dpi);
    }
}
