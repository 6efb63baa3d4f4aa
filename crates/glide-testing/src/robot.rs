//! Robot-style driver for scroll viewers
//!
//! A [`ScrollRobot`] owns a [`ScrollViewer`] and a fake clock. Pointer
//! interactions are timestamped with that clock and every frame runs the
//! viewer's update then arrange phase, the same lockstep a window loop uses.
//!
//! # Example
//!
//! ```
//! use glide_testing::ScrollRobot;
//! use glide_ui::ScrollModeFlags;
//! use glide_ui_graphics::{PxPoint2, PxSize2D};
//!
//! let mut robot = ScrollRobot::new(PxSize2D::new(100, 200), PxSize2D::new(100, 1000));
//! robot.viewer_mut().set_scroll_mode(ScrollModeFlags::TranslateY);
//! robot.swipe(PxPoint2::new(50, 180), PxPoint2::new(50, 20), 80, 5);
//! robot.wait_for_idle();
//! assert!(robot.offset().y < 0);
//! ```

use std::time::Duration;

use glide_foundation::{GestureManager, GestureSource};
use glide_ui::{ScrollGestureHandler, ScrollViewer};
use glide_ui_graphics::{DensityDpi, PxPoint2, PxSize2D};

use crate::ScriptedGestureSource;

pub const DEFAULT_FRAME_TIME: Duration = Duration::from_millis(16);

/// Frames [`ScrollRobot::wait_for_idle`] runs before giving up.
pub const MAX_IDLE_FRAMES: usize = 10_000;

pub struct ScrollRobot<G: GestureSource = GestureManager> {
    viewer: ScrollViewer<G>,
    viewport_px: PxSize2D,
    frame_time: Duration,
    now_ms: i64,
    pointer_px: PxPoint2,
    offsets: Vec<PxPoint2>,
}

impl ScrollRobot<GestureManager> {
    /// A robot around a default viewer. One frame is run so scrolling is
    /// enabled before the first interaction.
    pub fn new(viewport_px: PxSize2D, content_px: PxSize2D) -> Self {
        let mut viewer = ScrollViewer::default();
        viewer.set_content_desired_size(content_px);
        Self::with_viewer(viewer, viewport_px)
    }
}

impl ScrollRobot<ScriptedGestureSource> {
    /// A robot whose gestures are pushed directly through
    /// [`ScrollRobot::gestures`].
    pub fn scripted(viewport_px: PxSize2D, content_px: PxSize2D) -> Self {
        let handler = ScrollGestureHandler::with_gesture_source(
            DensityDpi::BASE,
            ScriptedGestureSource::new(),
        );
        let mut viewer = ScrollViewer::with_handler(handler);
        viewer.set_content_desired_size(content_px);
        Self::with_viewer(viewer, viewport_px)
    }

    pub fn gestures(&mut self) -> &mut ScriptedGestureSource {
        self.viewer.gesture_handler_mut().gesture_source_mut()
    }
}

impl<G: GestureSource> ScrollRobot<G> {
    pub fn with_viewer(viewer: ScrollViewer<G>, viewport_px: PxSize2D) -> Self {
        let mut robot = Self {
            viewer,
            viewport_px,
            frame_time: DEFAULT_FRAME_TIME,
            now_ms: 0,
            pointer_px: PxPoint2::ZERO,
            offsets: Vec::new(),
        };
        robot.frame();
        robot
    }

    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn viewer(&self) -> &ScrollViewer<G> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ScrollViewer<G> {
        &mut self.viewer
    }

    pub fn viewport_size(&self) -> PxSize2D {
        self.viewport_px
    }

    pub fn set_viewport(&mut self, viewport_px: PxSize2D) {
        self.viewport_px = viewport_px;
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    /// Offset from the most recent frame.
    pub fn offset(&self) -> PxPoint2 {
        self.offsets.last().copied().unwrap_or(PxPoint2::ZERO)
    }

    /// Every arranged offset so far, oldest first.
    pub fn offsets(&self) -> &[PxPoint2] {
        &self.offsets
    }

    pub fn take_offsets(&mut self) -> Vec<PxPoint2> {
        std::mem::take(&mut self.offsets)
    }

    /// Runs one update + arrange pass.
    pub fn frame(&mut self) -> PxPoint2 {
        self.viewer.update_animation(self.frame_time);
        self.now_ms += self.frame_time.as_millis() as i64;
        let offset = self.viewer.arrange(self.viewport_px).offset_px;
        self.offsets.push(offset);
        offset
    }

    /// Runs frames until at least `millis` have passed.
    pub fn advance_time(&mut self, millis: i64) {
        let target_ms = self.now_ms + millis;
        while self.now_ms < target_ms {
            self.frame();
        }
    }

    /// Runs frames until the viewer stops asking for them. Returns the
    /// number of frames run.
    pub fn wait_for_idle(&mut self) -> usize {
        for frames in 0..MAX_IDLE_FRAMES {
            if !self.viewer.update_animation_state(false) {
                return frames;
            }
            self.frame();
        }
        panic!(
            "scroll viewer still animating after {} frames, offset {:?}",
            MAX_IDLE_FRAMES,
            self.offset()
        );
    }

    pub fn mouse_move(&mut self, position_px: PxPoint2) {
        self.pointer_px = position_px;
        self.viewer.pointer_move(self.now_ms, position_px);
    }

    pub fn mouse_down(&mut self) {
        self.viewer.pointer_down(self.now_ms, self.pointer_px);
    }

    pub fn mouse_up(&mut self) {
        self.viewer.pointer_up(self.now_ms, self.pointer_px);
    }

    /// Presses at `from` and moves to `to` in `steps` evenly spaced samples
    /// over `duration_ms`, running frames in between. The pointer stays down.
    /// Sample spacing is rounded up to whole frames.
    pub fn drag(&mut self, from: PxPoint2, to: PxPoint2, duration_ms: i64, steps: u32) {
        self.pointer_path(from, to, duration_ms, steps, false);
    }

    /// Like [`ScrollRobot::drag`] but the last sample releases the pointer,
    /// so the release carries the full drag velocity.
    pub fn swipe(&mut self, from: PxPoint2, to: PxPoint2, duration_ms: i64, steps: u32) {
        self.pointer_path(from, to, duration_ms, steps, true);
    }

    /// Drag that holds still at `to` long enough for the release velocity
    /// to drop to zero.
    pub fn drag_and_hold(&mut self, from: PxPoint2, to: PxPoint2, duration_ms: i64, steps: u32) {
        self.drag(from, to, duration_ms, steps);
        self.advance_time(200);
        self.mouse_up();
        self.frame();
    }

    fn pointer_path(
        &mut self,
        from: PxPoint2,
        to: PxPoint2,
        duration_ms: i64,
        steps: u32,
        release: bool,
    ) {
        let steps = steps.max(1);
        self.pointer_px = from;
        self.mouse_down();
        let step_ms = duration_ms / i64::from(steps);
        for step in 1..=steps {
            self.advance_time(step_ms);
            let fraction = step as f32 / steps as f32;
            let position_px = from
                .to_vector()
                .lerp(&to.to_vector(), fraction)
                .to_px_point2();
            if release && step == steps {
                self.pointer_px = position_px;
                self.mouse_up();
            } else {
                self.mouse_move(position_px);
            }
        }
        self.frame();
    }
}
