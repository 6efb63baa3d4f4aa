use std::time::Duration;

use glide_ui::{ScrollModeFlags, ScrollViewer};
use glide_ui_graphics::{DensityDpi, PxPoint2, PxSize2D};
use web_time::Instant;

const FRAME_TIME: Duration = Duration::from_millis(16);
const VIEWPORT: PxSize2D = PxSize2D::new(720, 1280);
const CONTENT: PxSize2D = PxSize2D::new(720, 6000);
const MAX_FRAMES: usize = 2_000;

struct Demo {
    viewer: ScrollViewer,
    now_ms: i64,
    frames: usize,
}

impl Demo {
    fn new(density_dpi: DensityDpi) -> Self {
        let mut viewer = ScrollViewer::new(density_dpi);
        viewer.set_scroll_mode(ScrollModeFlags::TranslateY);
        viewer.set_content_desired_size(CONTENT);
        let mut demo = Self {
            viewer,
            now_ms: 0,
            frames: 0,
        };
        demo.frame();
        demo
    }

    fn frame(&mut self) -> PxPoint2 {
        let changed = self.viewer.update_animation(FRAME_TIME);
        self.now_ms += FRAME_TIME.as_millis() as i64;
        self.frames += 1;
        let arrangement = self.viewer.arrange(VIEWPORT);
        if changed {
            let handler = self.viewer.gesture_handler();
            log::debug!(
                "t={}ms offset={:?} drag={:?} anim={:?}",
                self.now_ms,
                arrangement.offset_px,
                handler.drag_status(),
                handler.anim_status()
            );
        }
        arrangement.offset_px
    }

    /// Moves the pointer from `from` to `to` one sample per frame and
    /// releases on the last sample.
    fn fling(&mut self, from: PxPoint2, to: PxPoint2, samples: u32) {
        self.viewer.pointer_down(self.now_ms, from);
        for step in 1..=samples {
            self.frame();
            let fraction = step as f32 / samples as f32;
            let position = from
                .to_vector()
                .lerp(&to.to_vector(), fraction)
                .to_px_point2();
            if step == samples {
                self.viewer.pointer_up(self.now_ms, position);
            } else {
                self.viewer.pointer_move(self.now_ms, position);
            }
        }
    }

    fn run_until_idle(&mut self) -> PxPoint2 {
        let mut offset = self.frame();
        while self.viewer.update_animation_state(false) {
            if self.frames >= MAX_FRAMES {
                log::warn!("Giving up after {} frames", self.frames);
                break;
            }
            offset = self.frame();
        }
        offset
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let density_dpi = match DensityDpi::new(320) {
        Ok(density_dpi) => density_dpi,
        Err(err) => {
            log::error!("Invalid density: {}", err);
            DensityDpi::default()
        }
    };

    let started = Instant::now();
    let mut demo = Demo::new(density_dpi);

    log::info!("Flinging up");
    demo.fling(PxPoint2::new(360, 1100), PxPoint2::new(360, 500), 6);
    let offset = demo.run_until_idle();
    log::info!("Settled at {:?} after {} frames", offset, demo.frames);

    log::info!("Flinging back past the start edge");
    demo.fling(PxPoint2::new(360, 200), PxPoint2::new(360, 1200), 4);
    let offset = demo.run_until_idle();
    log::info!("Settled at {:?} after {} frames", offset, demo.frames);

    log::info!(
        "Simulated {}ms of scrolling in {:?}",
        demo.now_ms,
        started.elapsed()
    );
}
