//! Assertion utilities for scroll tests
//!
//! This module provides assertion helpers for validating offsets produced
//! by scroll handlers and viewers.

use glide_ui_graphics::{PxPoint2, PxSize2D};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that two pixel points differ by at most `tolerance` on each axis.
pub fn assert_point_approx_eq(actual: PxPoint2, expected: PxPoint2, tolerance: i32, msg: &str) {
    let dx = (actual.x - expected.x).abs();
    let dy = (actual.y - expected.y).abs();
    assert!(
        dx <= tolerance && dy <= tolerance,
        "{}: expected {:?} (±{}), got {:?}",
        msg,
        expected,
        tolerance,
        actual
    );
}

/// Assert that an offset lies inside `[-scroll_size, 0]` on both axes.
pub fn assert_within_scroll_range(offset: PxPoint2, scroll_size: PxSize2D, msg: &str) {
    assert!(
        (-scroll_size.width()..=0).contains(&offset.x)
            && (-scroll_size.height()..=0).contains(&offset.y),
        "{}: offset {:?} outside scroll range {:?}",
        msg,
        offset,
        scroll_size
    );
}

/// Assert that a sequence never increases.
pub fn assert_non_increasing(values: &[i32], msg: &str) {
    if let Some(index) = values.windows(2).position(|pair| pair[1] > pair[0]) {
        panic!(
            "{}: value increased from {} to {} at index {} in {:?}",
            msg,
            values[index],
            values[index + 1],
            index + 1,
            values
        );
    }
}

/// Assert that a sequence never decreases.
pub fn assert_non_decreasing(values: &[i32], msg: &str) {
    if let Some(index) = values.windows(2).position(|pair| pair[1] < pair[0]) {
        panic!(
            "{}: value decreased from {} to {} at index {} in {:?}",
            msg,
            values[index],
            values[index + 1],
            index + 1,
            values
        );
    }
}
