//! Host-facing scroll container.
//!
//! Holds the tunable scroll properties, forwards pointer input to its
//! [`ScrollGestureHandler`] and turns the handler offset into the content
//! arrangement for each layout pass.

use std::time::Duration;

use glide_animation::TransitionType;
use glide_foundation::{GestureManager, GestureSource};
use glide_ui_graphics::{DensityDpi, PxPoint2, PxSize2D};

use crate::{
    ScrollGestureAnimationConfig, ScrollGestureHandler, ScrollModeFlags, SpringStiffness,
    DEFAULT_BOUNCE_ANIMATION_TIME, DEFAULT_DRAG_END_ANIM_TIME_MULTIPLIER,
    DEFAULT_DRAG_FLICK_DECELERATION, DEFAULT_SPRING_STIFFNESS,
};

/// Result of [`ScrollViewer::arrange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollArrangement {
    /// Size the content is arranged at.
    pub content_size_px: PxSize2D,
    /// Where the content's origin goes relative to the viewer.
    pub offset_px: PxPoint2,
}

pub struct ScrollViewer<G: GestureSource = GestureManager> {
    gesture_handler: ScrollGestureHandler<G>,
    scroll_mode: ScrollModeFlags,
    drag_flick_deceleration: f32,
    drag_flick_transition_type: TransitionType,
    drag_end_anim_time_multiplier: f32,
    bounce_spring_stiffness: f32,
    bounce_animation_time: Duration,
    bounce_transition_type: TransitionType,
    content_desired_size_px: PxSize2D,
    is_down: bool,
    layout_dirty: bool,
}

impl ScrollViewer<GestureManager> {
    pub fn new(density_dpi: DensityDpi) -> Self {
        Self::with_handler(ScrollGestureHandler::new(density_dpi))
    }
}

impl Default for ScrollViewer<GestureManager> {
    fn default() -> Self {
        Self::new(DensityDpi::BASE)
    }
}

impl<G: GestureSource> ScrollViewer<G> {
    pub fn with_handler(mut gesture_handler: ScrollGestureHandler<G>) -> Self {
        let scroll_mode = ScrollModeFlags::Translate;
        gesture_handler.set_scroll_mode(scroll_mode);
        Self {
            gesture_handler,
            scroll_mode,
            drag_flick_deceleration: DEFAULT_DRAG_FLICK_DECELERATION,
            drag_flick_transition_type: TransitionType::EaseOutSine,
            drag_end_anim_time_multiplier: DEFAULT_DRAG_END_ANIM_TIME_MULTIPLIER,
            bounce_spring_stiffness: DEFAULT_SPRING_STIFFNESS,
            bounce_animation_time: DEFAULT_BOUNCE_ANIMATION_TIME,
            bounce_transition_type: TransitionType::EaseInOutQuad,
            content_desired_size_px: PxSize2D::ZERO,
            is_down: false,
            layout_dirty: true,
        }
    }

    pub fn gesture_handler(&self) -> &ScrollGestureHandler<G> {
        &self.gesture_handler
    }

    pub fn gesture_handler_mut(&mut self) -> &mut ScrollGestureHandler<G> {
        &mut self.gesture_handler
    }

    /// True when a property or the animation changed since the last arrange.
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    pub fn configuration_changed(&mut self, density_dpi: DensityDpi) {
        self.gesture_handler.configuration_changed(density_dpi);
        self.layout_dirty = true;
    }

    pub fn scroll_mode(&self) -> ScrollModeFlags {
        self.scroll_mode
    }

    pub fn set_scroll_mode(&mut self, value: ScrollModeFlags) -> bool {
        let changed = self.scroll_mode != value;
        if changed {
            self.scroll_mode = value;
            self.gesture_handler.set_scroll_mode(value);
            self.layout_dirty = true;
        }
        changed
    }

    pub fn drag_flick_deceleration(&self) -> f32 {
        self.drag_flick_deceleration
    }

    /// dp/s²
    pub fn set_drag_flick_deceleration(&mut self, value: f32) -> bool {
        set_property(&mut self.drag_flick_deceleration, value, &mut self.layout_dirty)
    }

    pub fn drag_flick_transition_type(&self) -> TransitionType {
        self.drag_flick_transition_type
    }

    pub fn set_drag_flick_transition_type(&mut self, value: TransitionType) -> bool {
        set_property(&mut self.drag_flick_transition_type, value, &mut self.layout_dirty)
    }

    pub fn drag_end_anim_time_multiplier(&self) -> f32 {
        self.drag_end_anim_time_multiplier
    }

    pub fn set_drag_end_anim_time_multiplier(&mut self, value: f32) -> bool {
        set_property(&mut self.drag_end_anim_time_multiplier, value, &mut self.layout_dirty)
    }

    pub fn bounce_spring_stiffness(&self) -> f32 {
        self.bounce_spring_stiffness
    }

    pub fn set_bounce_spring_stiffness(&mut self, value: f32) -> bool {
        set_property(&mut self.bounce_spring_stiffness, value, &mut self.layout_dirty)
    }

    pub fn bounce_animation_time(&self) -> Duration {
        self.bounce_animation_time
    }

    pub fn set_bounce_animation_time(&mut self, value: Duration) -> bool {
        set_property(&mut self.bounce_animation_time, value, &mut self.layout_dirty)
    }

    pub fn bounce_transition_type(&self) -> TransitionType {
        self.bounce_transition_type
    }

    pub fn set_bounce_transition_type(&mut self, value: TransitionType) -> bool {
        set_property(&mut self.bounce_transition_type, value, &mut self.layout_dirty)
    }

    pub fn content_desired_size(&self) -> PxSize2D {
        self.content_desired_size_px
    }

    /// Size the content wants to be, as measured by the host.
    pub fn set_content_desired_size(&mut self, value: PxSize2D) -> bool {
        set_property(&mut self.content_desired_size_px, value, &mut self.layout_dirty)
    }

    /// Builds the per-frame physics config from the current properties.
    /// Invalid values fall back to the defaults.
    pub fn animation_config(&self) -> ScrollGestureAnimationConfig {
        let config = ScrollGestureAnimationConfig {
            drag_flick_deceleration: self.drag_flick_deceleration,
            drag_flick_transition_type: self.drag_flick_transition_type,
            drag_end_anim_time_multiplier: self.drag_end_anim_time_multiplier,
            bounce_spring_stiffness: SpringStiffness::uniform(self.bounce_spring_stiffness),
            bounce_animation_time: self.bounce_animation_time,
            bounce_transition_type: self.bounce_transition_type,
        };
        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("Invalid scroll configuration, using defaults: {}", err);
                ScrollGestureAnimationConfig::default()
            }
        }
    }

    pub fn pointer_down(&mut self, timestamp_ms: i64, position_px: PxPoint2) {
        self.is_down = true;
        self.gesture_handler.add_movement(timestamp_ms, position_px, true);
    }

    /// Hover moves are not forwarded.
    pub fn pointer_move(&mut self, timestamp_ms: i64, position_px: PxPoint2) {
        if self.is_down {
            self.gesture_handler.add_movement(timestamp_ms, position_px, true);
        }
    }

    pub fn pointer_up(&mut self, timestamp_ms: i64, position_px: PxPoint2) {
        if self.is_down {
            self.gesture_handler.add_movement(timestamp_ms, position_px, false);
            self.is_down = false;
        }
    }

    /// Returns true if the layout must be refreshed.
    pub fn update_animation(&mut self, time_span: Duration) -> bool {
        let config = self.animation_config();
        if self.gesture_handler.update_animation(time_span, config) {
            self.layout_dirty = true;
        }
        self.layout_dirty
    }

    pub fn update_animation_state(&mut self, force_complete_animation: bool) -> bool {
        self.gesture_handler
            .update_animation_state(force_complete_animation)
    }

    /// Arranges the content inside `final_size_px`. Axes that don't scroll
    /// use the viewer extent.
    pub fn arrange(&mut self, final_size_px: PxSize2D) -> ScrollArrangement {
        let mut content_size_px = self.content_desired_size_px;
        match self.scroll_mode {
            ScrollModeFlags::Translate => {}
            ScrollModeFlags::TranslateX => content_size_px.set_height(final_size_px.height()),
            ScrollModeFlags::TranslateY => content_size_px.set_width(final_size_px.width()),
            ScrollModeFlags::NotDefined => content_size_px = final_size_px,
        }

        let offset_px = self.gesture_handler.arrange(final_size_px, content_size_px);
        self.layout_dirty = false;
        ScrollArrangement {
            content_size_px,
            offset_px,
        }
    }
}

/// Stores `value` and flags the layout when it differs from the current one.
fn set_property<T: PartialEq>(slot: &mut T, value: T, layout_dirty: &mut bool) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    *layout_dirty = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_report_changes() {
        let mut viewer = ScrollViewer::default();
        assert!(!viewer.set_scroll_mode(ScrollModeFlags::Translate));
        assert!(viewer.set_scroll_mode(ScrollModeFlags::TranslateY));
        assert_eq!(viewer.gesture_handler().scroll_mode(), ScrollModeFlags::TranslateY);

        assert!(!viewer.set_drag_flick_deceleration(DEFAULT_DRAG_FLICK_DECELERATION));
        assert!(viewer.set_drag_flick_deceleration(5_000.0));
        assert!(viewer.set_bounce_transition_type(TransitionType::EaseOutBounce));
        assert!(!viewer.set_bounce_transition_type(TransitionType::EaseOutBounce));
        assert!(viewer.set_bounce_animation_time(Duration::from_millis(250)));
    }

    #[test]
    fn changed_properties_invalidate_layout() {
        let mut viewer = ScrollViewer::default();
        let area = PxSize2D::new(100, 200);
        let setters: [fn(&mut ScrollViewer) -> bool; 6] = [
            |viewer| viewer.set_drag_flick_deceleration(5_000.0),
            |viewer| viewer.set_drag_flick_transition_type(TransitionType::Linear),
            |viewer| viewer.set_drag_end_anim_time_multiplier(2.0),
            |viewer| viewer.set_bounce_spring_stiffness(3.0),
            |viewer| viewer.set_bounce_animation_time(Duration::from_millis(250)),
            |viewer| viewer.set_bounce_transition_type(TransitionType::EaseOutBounce),
        ];
        for setter in setters {
            viewer.arrange(area);
            assert!(!viewer.is_layout_dirty());
            assert!(setter(&mut viewer));
            assert!(viewer.is_layout_dirty());

            // Setting the same value again is not a change
            viewer.arrange(area);
            assert!(!setter(&mut viewer));
            assert!(!viewer.is_layout_dirty());
        }
    }

    #[test]
    fn animation_config_mirrors_properties() {
        let mut viewer = ScrollViewer::default();
        viewer.set_drag_flick_deceleration(1_000.0);
        viewer.set_bounce_spring_stiffness(2.0);
        viewer.set_drag_end_anim_time_multiplier(2.0);

        let config = viewer.animation_config();
        assert_eq!(config.drag_flick_deceleration, 1_000.0);
        assert_eq!(config.bounce_spring_stiffness, SpringStiffness::uniform(2.0));
        assert_eq!(config.drag_end_anim_time_multiplier, 2.0);
    }

    #[test]
    fn invalid_properties_fall_back_to_defaults() {
        let mut viewer = ScrollViewer::default();
        viewer.set_drag_flick_deceleration(-10.0);
        assert_eq!(
            viewer.animation_config(),
            ScrollGestureAnimationConfig::default()
        );
    }

    #[test]
    fn arrange_uses_viewer_extent_on_fixed_axes() {
        let mut viewer = ScrollViewer::default();
        viewer.set_content_desired_size(PxSize2D::new(50, 1000));
        viewer.set_scroll_mode(ScrollModeFlags::TranslateY);

        let arrangement = viewer.arrange(PxSize2D::new(100, 200));
        assert_eq!(arrangement.content_size_px, PxSize2D::new(100, 1000));
        assert_eq!(arrangement.offset_px, PxPoint2::ZERO);
        assert!(viewer.gesture_handler().is_scroll_enabled());
        assert!(!viewer.is_layout_dirty());

        viewer.set_scroll_mode(ScrollModeFlags::NotDefined);
        let arrangement = viewer.arrange(PxSize2D::new(100, 200));
        assert_eq!(arrangement.content_size_px, PxSize2D::new(100, 200));
        assert!(!viewer.gesture_handler().is_scroll_enabled());
    }

    #[test]
    fn pointer_input_drags_content() {
        let mut viewer = ScrollViewer::default();
        viewer.set_scroll_mode(ScrollModeFlags::TranslateY);
        viewer.set_content_desired_size(PxSize2D::new(100, 1000));
        let area = PxSize2D::new(100, 200);
        viewer.arrange(area);

        viewer.pointer_move(0, PxPoint2::new(50, 150));
        viewer.pointer_down(0, PxPoint2::new(50, 150));
        viewer.pointer_move(40, PxPoint2::new(50, 140));
        viewer.pointer_move(80, PxPoint2::new(50, 100));
        assert!(viewer.update_animation(Duration::from_millis(16)));

        let arrangement = viewer.arrange(area);
        assert_eq!(arrangement.offset_px, PxPoint2::new(0, -50));
        assert!(viewer.update_animation_state(false));
    }
}
