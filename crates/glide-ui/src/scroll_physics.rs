//! Stateless physics helpers used by the scroll gesture handler.
//!
//! Velocities and accelerations are in dp so the motion looks the same on
//! every screen density; positions are converted to pixels only where they
//! meet pixel-space offsets.

use std::time::Duration;

use glide_ui_graphics::{Dp, DpPoint2F, Px, PxPoint2, PxSize2D, UnitConverter};

use crate::SpringStiffness;

/// Upper bound for a flick animation, whatever the configured deceleration.
pub const MAX_FLICK_ANIMATION_TIME: Duration = Duration::from_secs(5);

/// Hooke's law, `x = F / k`. A stiffness below 1 disables the spring.
pub fn calculate_spring_displacement(force: f32, spring_stiffness: f32) -> Dp {
    if spring_stiffness >= 1.0 {
        Dp(force / spring_stiffness)
    } else {
        Dp::ZERO
    }
}

/// Pulls a location that left `[-max_scroll_px, 0]` back towards the range.
/// The overshoot is treated as the force acting on a spring so the result
/// grows smoothly, and much slower than the overshoot itself.
pub fn apply_spring_collision_1d(
    unit_converter: &UnitConverter,
    location_px: Px,
    max_scroll_px: Px,
    spring_stiffness: f32,
) -> Px {
    if location_px >= Px::ZERO {
        let force = unit_converter.to_dp_value(location_px).0;
        return unit_converter.to_px_value(calculate_spring_displacement(force, spring_stiffness));
    }
    if -location_px > max_scroll_px {
        let force = unit_converter.to_dp_value(-location_px - max_scroll_px).0;
        let displacement_px =
            unit_converter.to_px_value(calculate_spring_displacement(force, spring_stiffness));
        return -(max_scroll_px + displacement_px);
    }
    location_px
}

pub fn apply_spring_collision(
    unit_converter: &UnitConverter,
    location_px: PxPoint2,
    max_scroll_px: PxSize2D,
    spring_stiffness: SpringStiffness,
) -> PxPoint2 {
    PxPoint2::new(
        apply_spring_collision_1d(
            unit_converter,
            Px(location_px.x),
            Px(max_scroll_px.width()),
            spring_stiffness.x,
        )
        .0,
        apply_spring_collision_1d(
            unit_converter,
            Px(location_px.y),
            Px(max_scroll_px.height()),
            spring_stiffness.y,
        )
        .0,
    )
}

/// Seconds until `velocity_dpf` reaches zero under a constant
/// `acceleration_dpf`. Returns -1 when the acceleration is zero.
pub fn time_to_rest(velocity_dpf: DpPoint2F, acceleration_dpf: DpPoint2F) -> f32 {
    let acceleration = acceleration_dpf.length();
    if acceleration == 0.0 {
        log::error!("Acceleration cannot be zero");
        return -1.0;
    }
    velocity_dpf.length() / acceleration
}

/// Displacement after `time` seconds: `v0 * t + 0.5 * a * t^2`.
pub fn final_position(velocity_dpf: DpPoint2F, acceleration_dpf: DpPoint2F, time: f32) -> DpPoint2F {
    velocity_dpf * time + acceleration_dpf * (0.5 * time * time)
}

/// Flick duration for a time-to-rest, clamped to [`MAX_FLICK_ANIMATION_TIME`].
pub fn flick_animation_time(time_to_rest: f32, time_multiplier: f32) -> Duration {
    let seconds = f64::from(time_to_rest) * f64::from(time_multiplier);
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    let nanos = (seconds * 1_000_000_000.0).round();
    if nanos >= MAX_FLICK_ANIMATION_TIME.as_nanos() as f64 {
        MAX_FLICK_ANIMATION_TIME
    } else {
        Duration::from_nanos(nanos as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_ui_graphics::DensityDpi;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn spring_displacement_follows_hookes_law() {
        assert_eq!(calculate_spring_displacement(50.0, 5.0), Dp(10.0));
        assert_eq!(calculate_spring_displacement(50.0, 1.0), Dp(50.0));
        assert_eq!(calculate_spring_displacement(50.0, 0.99), Dp::ZERO);
    }

    #[test]
    fn spring_collision_inside_range_is_identity() {
        let converter = UnitConverter::default();
        for location in [-1, -400, -800] {
            assert_eq!(
                apply_spring_collision_1d(&converter, Px(location), Px(800), 5.0),
                Px(location)
            );
        }
    }

    #[test]
    fn spring_collision_softens_both_edges() {
        let converter = UnitConverter::default();
        assert_eq!(
            apply_spring_collision_1d(&converter, Px(50), Px(800), 5.0),
            Px(10)
        );
        assert_eq!(
            apply_spring_collision_1d(&converter, Px(-850), Px(800), 5.0),
            Px(-810)
        );
        // Exactly on the start edge
        assert_eq!(
            apply_spring_collision_1d(&converter, Px(0), Px(800), 5.0),
            Px(0)
        );
    }

    #[test]
    fn spring_collision_without_stiffness_clamps() {
        let converter = UnitConverter::default();
        assert_eq!(
            apply_spring_collision_1d(&converter, Px(50), Px(800), 0.0),
            Px(0)
        );
        assert_eq!(
            apply_spring_collision_1d(&converter, Px(-900), Px(800), 0.5),
            Px(-800)
        );
    }

    #[test]
    fn spring_collision_works_in_dp() {
        // 100px at 320dpi is 50dp, 50 / 5 = 10dp = 20px
        let converter = UnitConverter::new(DensityDpi::new(320).expect("valid density"));
        assert_eq!(
            apply_spring_collision_1d(&converter, Px(100), Px(800), 5.0),
            Px(20)
        );
    }

    #[test]
    fn spring_collision_2d_uses_per_axis_stiffness() {
        let converter = UnitConverter::default();
        let result = apply_spring_collision(
            &converter,
            PxPoint2::new(40, -850),
            PxSize2D::new(100, 800),
            SpringStiffness::new(2.0, 0.0),
        );
        assert_eq!(result, PxPoint2::new(20, -800));
    }

    #[test]
    fn time_to_rest_is_speed_over_deceleration() {
        let t = time_to_rest(DpPoint2F::new(0.0, -300.0), DpPoint2F::new(0.0, 20_000.0));
        assert!(approx(t, 0.015));

        let t = time_to_rest(DpPoint2F::new(30.0, 40.0), DpPoint2F::new(-6.0, -8.0));
        assert!(approx(t, 5.0));
    }

    #[test]
    fn time_to_rest_with_zero_acceleration_is_sentinel() {
        assert_eq!(
            time_to_rest(DpPoint2F::new(0.0, 300.0), DpPoint2F::ZERO),
            -1.0
        );
    }

    #[test]
    fn final_position_uses_constant_acceleration_kinematics() {
        let velocity = DpPoint2F::new(0.0, 300.0);
        let acceleration = DpPoint2F::new(0.0, -20_000.0);
        let t = time_to_rest(velocity, acceleration);
        let position = final_position(velocity, acceleration, t);
        // v^2 / (2a)
        assert!(approx(position.x, 0.0));
        assert!(approx(position.y, 2.25));
    }

    #[test]
    fn diagonal_deceleration_uses_its_full_length() {
        let deceleration = DpPoint2F::new(-20_000.0, -20_000.0);
        let t = time_to_rest(DpPoint2F::new(-300.0, -400.0), deceleration);
        assert!(approx(t, 500.0 / (20_000.0 * std::f32::consts::SQRT_2)));
    }

    #[test]
    fn flick_time_is_rounded_and_capped() {
        assert_eq!(flick_animation_time(0.125, 4.0), Duration::from_millis(500));
        let short = flick_animation_time(0.015, 4.0);
        assert!((short.as_secs_f64() - 0.06).abs() < 1e-6);
        assert_eq!(flick_animation_time(2.0, 4.0), MAX_FLICK_ANIMATION_TIME);
        assert_eq!(flick_animation_time(1.25, 4.0), MAX_FLICK_ANIMATION_TIME);
        assert_eq!(flick_animation_time(-1.0, 4.0), Duration::ZERO);
        assert_eq!(flick_animation_time(f32::NAN, 4.0), Duration::ZERO);
    }
}
