//! Drag, flick and bounce state machine for scrollable content.
//!
//! The handler keeps a committed scroll offset plus at most one transient
//! contribution on top of it: either the displacement of the drag in
//! progress or the value of the running flick/bounce animation. Every
//! [`ScrollGestureHandler::arrange`] drains the gesture queue, resolves
//! finished drags and animations into the committed offset and returns the
//! combined location after spring collision against the content edges.

use std::time::Duration;

use glide_animation::TransitionVector2;
use glide_foundation::{GestureAxis, GestureEvent, GestureManager, GestureSource};
use glide_ui_graphics::{DensityDpi, DpPoint2F, PxPoint2, PxSize2D, PxVector2, UnitConverter};

use crate::scroll_physics::{
    apply_spring_collision, final_position, flick_animation_time, time_to_rest,
};
use crate::{ScrollGestureAnimationConfig, ScrollModeFlags};

/// Release velocities below this (dp/s) end the drag without a flick.
pub const MINIMUM_VELOCITY_DPF: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragStatus {
    Idle,
    Dragging,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimStatus {
    Idle,
    Flick,
    Bounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragRecord {
    #[default]
    Idle,
    Dragging {
        offset_px: PxPoint2,
    },
    Completed {
        offset_px: PxPoint2,
        flick_velocity_dpf: DpPoint2F,
    },
}

impl DragRecord {
    fn status(&self) -> DragStatus {
        match self {
            DragRecord::Idle => DragStatus::Idle,
            DragRecord::Dragging { .. } => DragStatus::Dragging,
            DragRecord::Completed { .. } => DragStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Default)]
enum AnimationRecord {
    #[default]
    Idle,
    Flick(TransitionVector2),
    Bounce(TransitionVector2),
}

impl AnimationRecord {
    fn status(&self) -> AnimStatus {
        match self {
            AnimationRecord::Idle => AnimStatus::Idle,
            AnimationRecord::Flick(_) => AnimStatus::Flick,
            AnimationRecord::Bounce(_) => AnimStatus::Bounce,
        }
    }

    fn transition(&self) -> Option<&TransitionVector2> {
        match self {
            AnimationRecord::Idle => None,
            AnimationRecord::Flick(anim) | AnimationRecord::Bounce(anim) => Some(anim),
        }
    }

    fn transition_mut(&mut self) -> Option<&mut TransitionVector2> {
        match self {
            AnimationRecord::Idle => None,
            AnimationRecord::Flick(anim) | AnimationRecord::Bounce(anim) => Some(anim),
        }
    }

    /// Current animated offset, zero when idle.
    fn value_px(&self) -> PxPoint2 {
        self.transition()
            .map_or(PxPoint2::ZERO, |anim| anim.value().to_px_point2())
    }

    fn is_completed(&self) -> bool {
        self.transition().is_some_and(TransitionVector2::is_completed)
    }
}

fn apply_scroll_mode_to_velocity(scroll_mode: ScrollModeFlags, value: DpPoint2F) -> DpPoint2F {
    let velocity_dpf = scroll_mode.apply_dp(value);
    if velocity_dpf.length_squared() >= MINIMUM_VELOCITY_DPF * MINIMUM_VELOCITY_DPF {
        velocity_dpf
    } else {
        DpPoint2F::ZERO
    }
}

pub struct ScrollGestureHandler<G: GestureSource = GestureManager> {
    unit_converter: UnitConverter,
    gesture_source: G,
    config: ScrollGestureAnimationConfig,
    scroll_mode: ScrollModeFlags,
    scroll_enabled: bool,
    scroll_offset_px: PxPoint2,
    drag: DragRecord,
    anim: AnimationRecord,
}

impl ScrollGestureHandler<GestureManager> {
    pub fn new(density_dpi: DensityDpi) -> Self {
        Self::with_gesture_source(
            density_dpi,
            GestureManager::new(GestureAxis::XY, density_dpi),
        )
    }
}

impl Default for ScrollGestureHandler<GestureManager> {
    fn default() -> Self {
        Self::new(DensityDpi::BASE)
    }
}

impl<G: GestureSource> ScrollGestureHandler<G> {
    pub fn with_gesture_source(density_dpi: DensityDpi, mut gesture_source: G) -> Self {
        gesture_source.set_density_dpi(density_dpi);
        Self {
            unit_converter: UnitConverter::new(density_dpi),
            gesture_source,
            config: ScrollGestureAnimationConfig::default(),
            scroll_mode: ScrollModeFlags::default(),
            scroll_enabled: false,
            scroll_offset_px: PxPoint2::ZERO,
            drag: DragRecord::Idle,
            anim: AnimationRecord::Idle,
        }
    }

    pub fn scroll_offset(&self) -> PxPoint2 {
        self.scroll_offset_px
    }

    pub fn scroll_mode(&self) -> ScrollModeFlags {
        self.scroll_mode
    }

    pub fn drag_status(&self) -> DragStatus {
        self.drag.status()
    }

    /// Pixel displacement of the drag in progress.
    pub fn drag_offset(&self) -> Option<PxPoint2> {
        match self.drag {
            DragRecord::Idle => None,
            DragRecord::Dragging { offset_px } | DragRecord::Completed { offset_px, .. } => {
                Some(offset_px)
            }
        }
    }

    pub fn anim_status(&self) -> AnimStatus {
        self.anim.status()
    }

    /// The running flick or bounce animator.
    pub fn animation(&self) -> Option<&TransitionVector2> {
        self.anim.transition()
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn config(&self) -> &ScrollGestureAnimationConfig {
        &self.config
    }

    pub fn unit_converter(&self) -> &UnitConverter {
        &self.unit_converter
    }

    pub fn gesture_source(&self) -> &G {
        &self.gesture_source
    }

    pub fn gesture_source_mut(&mut self) -> &mut G {
        &mut self.gesture_source
    }

    pub fn configuration_changed(&mut self, density_dpi: DensityDpi) {
        self.try_cancel_drag();
        log::debug!("ScrollGestureHandler density changed to {} dpi", density_dpi.get());
        self.unit_converter.set_density_dpi(density_dpi);
        self.gesture_source.set_density_dpi(density_dpi);
    }

    /// Pointer samples are dropped while the content fits its area.
    pub fn add_movement(&mut self, timestamp_ms: i64, screen_position_px: PxPoint2, is_down: bool) {
        if self.scroll_enabled {
            self.gesture_source
                .add_movement(timestamp_ms, screen_position_px, is_down);
        }
    }

    pub fn set_scroll_mode(&mut self, value: ScrollModeFlags) {
        if value == self.scroll_mode {
            return;
        }
        log::debug!("ScrollGestureHandler scroll mode {:?} -> {:?}", self.scroll_mode, value);
        self.try_cancel_drag();
        // The pending animation delta is discarded, the offset is re-masked below
        self.anim = AnimationRecord::Idle;
        self.scroll_mode = value;
        self.scroll_offset_px = self.scroll_mode.apply_px(self.scroll_offset_px);
    }

    /// Stores `config` for this frame and advances the running animation.
    /// Returns true if the layout needs to be refreshed.
    pub fn update_animation(
        &mut self,
        time_span: Duration,
        config: ScrollGestureAnimationConfig,
    ) -> bool {
        self.config = config;
        let mut layout_dirty = self.gesture_source.process();
        if let Some(anim) = self.anim.transition_mut() {
            if !anim.is_completed() {
                anim.update(time_span);
                layout_dirty = true;
            }
        }
        layout_dirty
    }

    /// True while the host must keep scheduling frames. With
    /// `force_complete_animation` the running animation jumps to its end; the
    /// next arrange commits it.
    pub fn update_animation_state(&mut self, force_complete_animation: bool) -> bool {
        if force_complete_animation {
            if let Some(anim) = self.anim.transition_mut() {
                anim.force_complete();
            }
        }
        !self.gesture_source.is_idle()
            || self.drag.status() != DragStatus::Idle
            || self.anim.status() != AnimStatus::Idle
    }

    pub fn arrange(
        &mut self,
        final_area_render_size_px: PxSize2D,
        content_render_size_px: PxSize2D,
    ) -> PxPoint2 {
        if !self
            .scroll_mode
            .is_scrolling_required(final_area_render_size_px, content_render_size_px)
        {
            if self.scroll_enabled {
                log::debug!("ScrollGestureHandler content fits, scrolling disabled");
            }
            self.scroll_enabled = false;
            self.try_cancel_drag();
            self.anim = AnimationRecord::Idle;
            self.scroll_offset_px = PxPoint2::ZERO;
            self.gesture_source.clear();
            return PxPoint2::ZERO;
        }
        self.scroll_enabled = true;

        let scroll_size_px = content_render_size_px.saturating_sub(final_area_render_size_px);

        let mut location_px = None;
        while let Some(event) = self.gesture_source.try_get() {
            match event {
                GestureEvent::DragBegin { position_px } => self.begin_drag(position_px),
                GestureEvent::Drag { position_px } => {
                    self.try_drag(position_px);
                }
                GestureEvent::DragEnd {
                    position_px,
                    flick_velocity_dpf,
                } => {
                    self.try_drag_end(position_px, flick_velocity_dpf);
                }
                GestureEvent::DragCancel => {
                    self.try_cancel_drag();
                }
            }
            location_px = Some(self.arrange_now(scroll_size_px));
        }

        match location_px {
            Some(location_px) => location_px,
            None => self.arrange_now(scroll_size_px),
        }
    }

    /// Starts a drag, folding any running animation into the committed
    /// offset first.
    pub fn begin_drag(&mut self, position_px: PxPoint2) {
        if self.drag.status() != DragStatus::Idle {
            log::trace!("BeginDrag: cancelling existing drag due to starting a new drag");
            self.try_cancel_drag();
        }

        log::trace!("BeginDrag: starting drag at position {:?}px", position_px);
        if self.anim.status() != AnimStatus::Idle {
            log::trace!("BeginDrag: applying animation position");
            self.scroll_offset_px += self.anim.value_px();
            self.anim = AnimationRecord::Idle;
        }
        self.drag = DragRecord::Dragging {
            offset_px: PxPoint2::ZERO,
        };
    }

    /// `position_px` is the displacement since the drag began.
    pub fn try_drag(&mut self, position_px: PxPoint2) -> bool {
        if self.drag.status() != DragStatus::Dragging {
            return false;
        }
        let offset_px = self.scroll_mode.apply_px(position_px);
        log::trace!("TryDrag: position {:?}", offset_px);
        self.drag = DragRecord::Dragging { offset_px };
        true
    }

    pub fn try_drag_end(&mut self, position_px: PxPoint2, flick_velocity_dpf: DpPoint2F) -> bool {
        if self.drag.status() != DragStatus::Dragging {
            return false;
        }
        let offset_px = self.scroll_mode.apply_px(position_px);
        let velocity_dpf = apply_scroll_mode_to_velocity(self.scroll_mode, flick_velocity_dpf);
        log::trace!(
            "TryDragEnd: position {:?}px velocity {:?}dp unclamped velocity {:?}dp",
            offset_px,
            velocity_dpf,
            flick_velocity_dpf
        );
        self.drag = DragRecord::Completed {
            offset_px,
            flick_velocity_dpf: velocity_dpf,
        };
        true
    }

    /// Returns true if a drag was in progress.
    pub fn try_cancel_drag(&mut self) -> bool {
        let was_dragging = self.drag.status() != DragStatus::Idle;
        self.drag = DragRecord::Idle;
        was_dragging
    }

    fn arrange_now(&mut self, scroll_size_px: PxSize2D) -> PxPoint2 {
        if let DragRecord::Completed {
            offset_px,
            flick_velocity_dpf,
        } = self.drag
        {
            debug_assert_eq!(self.anim.status(), AnimStatus::Idle);
            let velocity_dpf = apply_scroll_mode_to_velocity(self.scroll_mode, flick_velocity_dpf);
            let final_position_px = self.scroll_mode.apply_px(self.scroll_offset_px + offset_px);

            if velocity_dpf.is_zero() {
                self.select_animation(final_position_px, scroll_size_px);
            } else {
                let acceleration = -self.config.drag_flick_deceleration;
                let acceleration_dpf = self
                    .scroll_mode
                    .apply_dp(DpPoint2F::new(acceleration, acceleration));
                let time_to_rest = time_to_rest(velocity_dpf, acceleration_dpf);
                if time_to_rest > 0.0 {
                    self.select_flick_animation(
                        time_to_rest,
                        acceleration_dpf,
                        final_position_px,
                        velocity_dpf,
                    );
                } else {
                    self.select_animation(final_position_px, scroll_size_px);
                }
            }
            self.drag = DragRecord::Idle;
        } else if self.anim.is_completed() {
            match self.anim.status() {
                AnimStatus::Flick => {
                    let final_position_px = self.scroll_offset_px + self.anim.value_px();
                    self.select_animation(final_position_px, scroll_size_px);
                }
                AnimStatus::Bounce => {
                    self.scroll_offset_px += self.anim.value_px();
                    self.anim = AnimationRecord::Idle;
                }
                AnimStatus::Idle => {}
            }
        }

        let location_px = match self.drag {
            DragRecord::Dragging { offset_px } => self.scroll_offset_px + offset_px,
            _ if self.anim.status() != AnimStatus::Idle => {
                self.scroll_offset_px + self.anim.value_px()
            }
            _ => {
                // A cancelled drag over a running animation can leave the
                // committed offset out of bounds
                let offset_px = self.scroll_offset_px;
                self.select_animation(offset_px, scroll_size_px);
                offset_px
            }
        };
        apply_spring_collision(
            &self.unit_converter,
            location_px,
            scroll_size_px,
            self.config.bounce_spring_stiffness,
        )
    }

    /// Bounces back into `[-scroll_size_px, 0]` if needed, otherwise commits
    /// `final_position_px` as is.
    fn select_animation(&mut self, final_position_px: PxPoint2, scroll_size_px: PxSize2D) {
        let clipped_position_px = PxPoint2::new(
            final_position_px.x.clamp(-scroll_size_px.width(), 0),
            final_position_px.y.clamp(-scroll_size_px.height(), 0),
        );

        if clipped_position_px != final_position_px {
            let start_offset_px = final_position_px - clipped_position_px;
            log::trace!("SelectAnimation: bounce from overshoot {:?}px", start_offset_px);

            let mut anim = TransitionVector2::default();
            anim.set_actual_value(start_offset_px.to_vector());
            anim.set_transition_time(
                self.config.bounce_animation_time,
                self.config.bounce_transition_type,
            );
            anim.set_value(PxVector2::ZERO);
            self.anim = AnimationRecord::Bounce(anim);
            self.scroll_offset_px = clipped_position_px;
        } else {
            self.anim = AnimationRecord::Idle;
            self.scroll_offset_px = final_position_px;
        }
    }

    /// Commits the drag end position and animates the analytic flick
    /// displacement on top of it. A flick that ends out of bounds is turned
    /// into a bounce once it completes.
    fn select_flick_animation(
        &mut self,
        time_to_rest: f32,
        acceleration_dpf: DpPoint2F,
        final_position_px: PxPoint2,
        velocity_dpf: DpPoint2F,
    ) {
        let final_offset_dpf = final_position(velocity_dpf, acceleration_dpf, time_to_rest);
        let final_offset_pxf = self.unit_converter.to_px_vector2(final_offset_dpf);
        let animation_time =
            flick_animation_time(time_to_rest, self.config.drag_end_anim_time_multiplier);

        log::trace!(
            "SelectFlickAnimation: time {:?} final offset {:?}dp {:?}px deceleration {} multiplier {} time to rest {}s",
            animation_time,
            final_offset_dpf,
            final_offset_pxf,
            self.config.drag_flick_deceleration,
            self.config.drag_end_anim_time_multiplier,
            time_to_rest
        );

        let mut anim = TransitionVector2::default();
        anim.set_transition_time(animation_time, self.config.drag_flick_transition_type);
        anim.set_value(final_offset_pxf);
        self.anim = AnimationRecord::Flick(anim);
        self.scroll_offset_px = final_position_px;
    }
}

#[cfg(test)]
#[path = "tests/scroll_gesture_handler_tests.rs"]
mod tests;
