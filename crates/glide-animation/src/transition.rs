//! Easing curves used by transition animations.

use std::f32::consts::PI;

/// Transition curves. Each maps a linear fraction in `[0, 1]` onto `[0, 1]`
/// with exact endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionType {
    #[default]
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutBounce,
}

impl TransitionType {
    /// Apply the curve to a linear fraction; input is clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = fraction;
        match self {
            TransitionType::Linear => t,
            TransitionType::EaseInSine => 1.0 - ((t * PI) / 2.0).cos(),
            TransitionType::EaseOutSine => ((t * PI) / 2.0).sin(),
            TransitionType::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            TransitionType::EaseInQuad => t * t,
            TransitionType::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            TransitionType::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            TransitionType::EaseInCubic => t * t * t,
            TransitionType::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            TransitionType::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            TransitionType::EaseOutBounce => ease_out_bounce(t),
        }
    }
}

fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TransitionType; 11] = [
        TransitionType::Linear,
        TransitionType::EaseInSine,
        TransitionType::EaseOutSine,
        TransitionType::EaseInOutSine,
        TransitionType::EaseInQuad,
        TransitionType::EaseOutQuad,
        TransitionType::EaseInOutQuad,
        TransitionType::EaseInCubic,
        TransitionType::EaseOutCubic,
        TransitionType::EaseInOutCubic,
        TransitionType::EaseOutBounce,
    ];

    #[test]
    fn linear_is_identity() {
        assert_eq!(TransitionType::Linear.transform(0.25), 0.25);
        assert_eq!(TransitionType::Linear.transform(0.5), 0.5);
    }

    #[test]
    fn endpoints_are_exact() {
        for transition in ALL {
            assert_eq!(transition.transform(0.0), 0.0, "start of {:?}", transition);
            assert_eq!(transition.transform(1.0), 1.0, "end of {:?}", transition);
            assert_eq!(transition.transform(-3.0), 0.0, "clamp low {:?}", transition);
            assert_eq!(transition.transform(7.0), 1.0, "clamp high {:?}", transition);
        }
    }

    #[test]
    fn ease_out_leads_ease_in() {
        let t = 0.3;
        assert!(TransitionType::EaseOutSine.transform(t) > t);
        assert!(TransitionType::EaseInSine.transform(t) < t);
        assert!(TransitionType::EaseOutQuad.transform(t) > TransitionType::EaseInQuad.transform(t));
    }

    #[test]
    fn in_out_curves_pass_through_midpoint() {
        for transition in [
            TransitionType::EaseInOutSine,
            TransitionType::EaseInOutQuad,
            TransitionType::EaseInOutCubic,
        ] {
            assert!((transition.transform(0.5) - 0.5).abs() < 1e-5, "{:?}", transition);
        }
    }

    #[test]
    fn bounce_stays_in_range() {
        for i in 0..=100 {
            let value = TransitionType::EaseOutBounce.transform(i as f32 / 100.0);
            assert!((0.0..=1.0 + 1e-5).contains(&value), "value {value} at step {i}");
        }
    }
}
