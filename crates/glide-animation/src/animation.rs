//! Time-driven value transitions.
//!
//! A [`Transition`] interpolates from the value it held when a new target was
//! set towards that target over a fixed duration, shaped by a
//! [`TransitionType`] curve. Time only moves when the owner calls
//! [`Transition::update`], which keeps per-frame behaviour deterministic.

use std::time::Duration;

use glide_ui_graphics::PxVector2;

use crate::TransitionType;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for PxVector2 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        PxVector2::lerp(self, target, fraction)
    }
}

/// Duration and curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub transition: TransitionType,
}

impl TransitionSpec {
    pub fn new(duration: Duration, transition: TransitionType) -> Self {
        Self {
            duration,
            transition,
        }
    }
}

/// A value that transitions towards its target over time.
#[derive(Debug, Clone)]
pub struct Transition<T: Lerp + Clone> {
    start: T,
    current: T,
    target: T,
    spec: TransitionSpec,
    elapsed: Duration,
}

/// Fractional pixel offset animator.
pub type TransitionVector2 = Transition<PxVector2>;

impl<T: Lerp + Clone + Default> Default for Transition<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Lerp + Clone> Transition<T> {
    /// Create a completed transition resting at `value`.
    pub fn new(value: T) -> Self {
        Self {
            start: value.clone(),
            current: value.clone(),
            target: value,
            spec: TransitionSpec::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// Snap to `value` and complete any transition in flight.
    pub fn set_actual_value(&mut self, value: T) {
        self.start = value.clone();
        self.current = value.clone();
        self.target = value;
        self.elapsed = self.spec.duration;
    }

    /// Change the duration and curve used by the next [`Transition::set_value`].
    pub fn set_transition_time(&mut self, duration: Duration, transition: TransitionType) {
        self.spec = TransitionSpec::new(duration, transition);
    }

    pub fn spec(&self) -> TransitionSpec {
        self.spec
    }

    /// Start transitioning from the current value towards `target`.
    pub fn set_value(&mut self, target: T) {
        self.start = self.current.clone();
        self.target = target;
        self.elapsed = Duration::ZERO;
        if self.spec.duration.is_zero() {
            self.current = self.target.clone();
        }
    }

    /// Advance the transition by `delta`.
    pub fn update(&mut self, delta: Duration) {
        if self.is_completed() {
            return;
        }
        self.elapsed = (self.elapsed + delta).min(self.spec.duration);
        let linear = self.elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        if self.elapsed >= self.spec.duration {
            self.current = self.target.clone();
        } else {
            let progress = self.spec.transition.transform(linear);
            self.current = self.start.lerp(&self.target, progress);
        }
    }

    /// Jump to the end of the transition in flight.
    pub fn force_complete(&mut self) {
        self.elapsed = self.spec.duration;
        self.current = self.target.clone();
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_completed(&self) -> bool {
        self.elapsed >= self.spec.duration
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
