//! Pointer velocity estimation for drag release.
//!
//! Each axis keeps the most recent samples in a fixed ring. The velocity is
//! the slope at the newest sample of a quadratic fit (unweighted least
//! squares) through the samples that are still inside the horizon.

use glide_ui_graphics::DpPoint2F;
use smallvec::SmallVec;

const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, are ignored.
pub const HORIZON_MS: i64 = 100;

/// A gap this long between two samples means the pointer stopped in between.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Velocity estimator for a single axis.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    ring: [Sample; HISTORY_SIZE],
    newest: usize,
    len: usize,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        if self.len > 0 {
            self.newest = (self.newest + 1) % HISTORY_SIZE;
        }
        self.ring[self.newest] = Sample { time_ms, position };
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.newest = 0;
        self.len = 0;
    }

    /// Newest first.
    fn recent(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len).map(move |back| self.ring[(self.newest + HISTORY_SIZE - back) % HISTORY_SIZE])
    }

    /// Units per second, 0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.recent().next() else {
            return 0.0;
        };

        // (time relative to the newest sample in seconds, position)
        let mut points: SmallVec<[(f64, f64); HISTORY_SIZE]> = SmallVec::new();
        let mut later_ms = newest.time_ms;
        for sample in self.recent() {
            if newest.time_ms - sample.time_ms > HORIZON_MS
                || later_ms - sample.time_ms > ASSUME_STOPPED_MS
            {
                break;
            }
            later_ms = sample.time_ms;
            points.push((
                (sample.time_ms - newest.time_ms) as f64 / 1000.0,
                f64::from(sample.position),
            ));
        }

        let slope = match points.len() {
            0 | 1 => None,
            2 => endpoint_slope(&points),
            _ => QuadraticFit::new(&points)
                .slope_at_origin()
                .or_else(|| endpoint_slope(&points)),
        };
        slope
            .filter(|value| value.is_finite())
            .map_or(0.0, |value| value as f32)
    }
}

fn endpoint_slope(points: &[(f64, f64)]) -> Option<f64> {
    let (t_newest, p_newest) = *points.first()?;
    let (t_oldest, p_oldest) = *points.last()?;
    let span = t_newest - t_oldest;
    (span > 1e-10).then(|| (p_newest - p_oldest) / span)
}

/// Centered moments of `p = a + b*t + c*t^2`.
struct QuadraticFit {
    tt: f64,
    tp: f64,
    t2t: f64,
    t2p: f64,
    t2t2: f64,
}

impl QuadraticFit {
    fn new(points: &[(f64, f64)]) -> Self {
        let n = points.len() as f64;
        let (mut t, mut p, mut t2, mut t3, mut t4, mut tp, mut t2p) =
            (0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        for &(ti, pi) in points {
            let ti2 = ti * ti;
            t += ti;
            p += pi;
            t2 += ti2;
            t3 += ti2 * ti;
            t4 += ti2 * ti2;
            tp += ti * pi;
            t2p += ti2 * pi;
        }
        Self {
            tt: t2 - t * t / n,
            tp: tp - t * p / n,
            t2t: t3 - t * t2 / n,
            t2p: t2p - t2 * p / n,
            t2t2: t4 - t2 * t2 / n,
        }
    }

    /// `b`, the derivative at `t = 0`.
    fn slope_at_origin(&self) -> Option<f64> {
        let det = self.tt * self.t2t2 - self.t2t * self.t2t;
        if det.abs() < 1e-18 {
            return None;
        }
        Some((self.tp * self.t2t2 - self.t2p * self.t2t) / det)
    }
}

/// Two axis trackers fed with dp positions.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movement(&mut self, time_ms: i64, position_dpf: DpPoint2F) {
        self.x.add_sample(time_ms, position_dpf.x);
        self.y.add_sample(time_ms, position_dpf.y);
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// dp/s
    pub fn velocity(&self) -> DpPoint2F {
        DpPoint2F::new(self.x.velocity(), self.y.velocity())
    }

    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
