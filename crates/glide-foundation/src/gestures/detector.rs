//! Drag gesture recogniser.
//!
//! A pointer-down opens a movement transaction. Once the pointer has moved
//! further than the tap threshold the transaction is "in motion" and every
//! subsequent sample is queued as a [`GestureType::FreeDrag`]. Releasing the
//! pointer queues a [`GestureType::DragComplete`] carrying the release
//! velocity when it is fast enough to count as a flick.

use std::collections::VecDeque;

use glide_ui_graphics::DpPoint2F;

use super::types::{GestureAxis, GestureRecord, GestureType, PointerState};
use crate::gesture_constants::{
    FLICK_VELOCITY_THRESHOLD_X, FLICK_VELOCITY_THRESHOLD_Y, MAX_FLING_VELOCITY,
    MIN_FLING_VELOCITY, TAP_DISTANCE_THRESHOLD_SQR,
};
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug)]
struct Transaction {
    initial_down_position_dpf: DpPoint2F,
    in_motion: bool,
}

#[derive(Debug, Default)]
pub struct GestureDetector {
    axis: GestureAxis,
    velocity_tracker: VelocityTracker,
    transaction: Option<Transaction>,
    queue: VecDeque<GestureRecord>,
}

impl GestureDetector {
    pub fn new(axis: GestureAxis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn axis(&self) -> GestureAxis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: GestureAxis) {
        self.axis = axis;
    }

    pub fn is_gesture_available(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn in_movement_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    pub fn has_velocity_entries(&self) -> bool {
        !self.velocity_tracker.is_empty()
    }

    /// Pops the oldest recognised gesture.
    pub fn try_read_gesture(&mut self) -> Option<GestureRecord> {
        self.queue.pop_front()
    }

    /// Drops the open transaction, velocity history and queued gestures while
    /// keeping the axis configuration.
    pub fn clear(&mut self) {
        self.velocity_tracker.clear();
        self.transaction = None;
        self.queue.clear();
    }

    pub fn add_movement(&mut self, time_ms: i64, position_dpf: DpPoint2F, state: PointerState) {
        match state {
            PointerState::Down => {
                if self.transaction.is_some() {
                    log::warn!(
                        "Got a pointer down while already in a transaction, cancelling existing transaction"
                    );
                    self.cancel_transaction(position_dpf);
                }
                self.begin_transaction(time_ms, position_dpf);
            }
            PointerState::Move if self.transaction.is_some() => {
                self.continue_transaction(time_ms, position_dpf);
            }
            PointerState::Up if self.transaction.is_some() => {
                self.end_transaction(time_ms, position_dpf);
            }
            PointerState::Cancel if self.transaction.is_some() => {
                self.cancel_transaction(position_dpf);
            }
            // Samples outside a transaction are not ours
            PointerState::Move | PointerState::Up | PointerState::Cancel => {}
        }
    }

    fn begin_transaction(&mut self, time_ms: i64, position_dpf: DpPoint2F) {
        log::trace!("BeginTransaction: {} {:?}", time_ms, position_dpf);
        self.velocity_tracker.clear();
        self.velocity_tracker.add_movement(time_ms, position_dpf);
        self.transaction = Some(Transaction {
            initial_down_position_dpf: position_dpf,
            in_motion: false,
        });
    }

    fn continue_transaction(&mut self, time_ms: i64, position_dpf: DpPoint2F) {
        self.velocity_tracker.add_movement(time_ms, position_dpf);
        let Some(mut transaction) = self.transaction else {
            return;
        };

        if transaction.in_motion {
            self.enqueue(GestureType::FreeDrag, position_dpf, DpPoint2F::ZERO);
        } else {
            let delta = self
                .axis
                .clamp(position_dpf - transaction.initial_down_position_dpf);
            if delta.length_squared() > TAP_DISTANCE_THRESHOLD_SQR {
                transaction.in_motion = true;
                self.enqueue(
                    GestureType::FreeDrag,
                    transaction.initial_down_position_dpf,
                    DpPoint2F::ZERO,
                );
                self.enqueue(GestureType::FreeDrag, position_dpf, DpPoint2F::ZERO);
            }
        }
        self.transaction = Some(transaction);
    }

    fn end_transaction(&mut self, time_ms: i64, position_dpf: DpPoint2F) {
        log::trace!("EndTransaction: {} {:?}", time_ms, position_dpf);
        self.velocity_tracker.add_movement(time_ms, position_dpf);
        let Some(mut transaction) = self.transaction.take() else {
            return;
        };

        // A down followed directly by a distant up is still a drag
        if !transaction.in_motion {
            let delta = position_dpf - transaction.initial_down_position_dpf;
            if delta.length_squared() > TAP_DISTANCE_THRESHOLD_SQR {
                transaction.in_motion = true;
                self.enqueue(
                    GestureType::FreeDrag,
                    transaction.initial_down_position_dpf,
                    DpPoint2F::ZERO,
                );
            }
        }

        if transaction.in_motion {
            let velocity_dpf = self.velocity_tracker.velocity();
            let is_flick = velocity_dpf.x.abs() > FLICK_VELOCITY_THRESHOLD_X
                || velocity_dpf.y.abs() > FLICK_VELOCITY_THRESHOLD_Y;
            let flick_velocity_dpf = if is_flick {
                clamp_magnitude_on_axis(
                    velocity_dpf,
                    MIN_FLING_VELOCITY,
                    MAX_FLING_VELOCITY,
                    self.axis,
                )
            } else {
                DpPoint2F::ZERO
            };
            self.enqueue(GestureType::DragComplete, position_dpf, flick_velocity_dpf);
        }
        self.velocity_tracker.clear();
    }

    fn cancel_transaction(&mut self, position_dpf: DpPoint2F) {
        log::trace!("CancelTransaction: {:?}", position_dpf);
        self.velocity_tracker.clear();
        if let Some(transaction) = self.transaction.take() {
            if transaction.in_motion {
                self.enqueue(GestureType::DragCanceled, position_dpf, DpPoint2F::ZERO);
            }
        }
    }

    fn enqueue(&mut self, gesture: GestureType, position_dpf: DpPoint2F, velocity_dpf: DpPoint2F) {
        log::trace!(
            "EnqueueGesture: {:?} {:?} {:?}",
            gesture,
            position_dpf,
            velocity_dpf
        );
        self.queue
            .push_back(GestureRecord::new(gesture, position_dpf, velocity_dpf));
    }
}

fn clamp_magnitude(value: DpPoint2F, min: f32, max: f32) -> DpPoint2F {
    let length_squared = value.length_squared();
    if length_squared < min * min || length_squared > max * max {
        let length = length_squared.sqrt();
        if length == 0.0 {
            return DpPoint2F::ZERO;
        }
        let target = if length_squared < min * min { min } else { max };
        return (value / length) * target;
    }
    value
}

fn clamp_magnitude_1d(value: f32, min: f32, max: f32) -> f32 {
    let clamped = value.abs().clamp(min, max);
    if value >= 0.0 {
        clamped
    } else {
        -clamped
    }
}

fn clamp_magnitude_on_axis(value: DpPoint2F, min: f32, max: f32, axis: GestureAxis) -> DpPoint2F {
    match axis {
        GestureAxis::XY => clamp_magnitude(value, min, max),
        GestureAxis::X => DpPoint2F::new(clamp_magnitude_1d(value.x, min, max), 0.0),
        GestureAxis::Y => DpPoint2F::new(0.0, clamp_magnitude_1d(value.y, min, max)),
    }
}

#[cfg(test)]
#[path = "../tests/detector_tests.rs"]
mod tests;
