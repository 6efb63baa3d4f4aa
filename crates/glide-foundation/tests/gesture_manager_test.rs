//! Tests for the pixel-space gesture manager
//!
//! These feed raw pointer samples the way a window would and check the
//! resulting drag events.

use glide_foundation::{GestureAxis, GestureEvent, GestureManager, GestureSource};
use glide_ui_graphics::{DensityDpi, PxPoint2};

fn drain(manager: &mut GestureManager) -> Vec<GestureEvent> {
    std::iter::from_fn(|| manager.try_get()).collect()
}

#[test]
fn drag_events_carry_displacement_from_origin() {
    let mut manager = GestureManager::default();
    manager.add_movement(0, PxPoint2::new(50, 500), true);
    manager.add_movement(16, PxPoint2::new(50, 450), true);
    manager.add_movement(32, PxPoint2::new(50, 400), true);

    assert!(manager.process());
    let events = drain(&mut manager);
    assert_eq!(
        events,
        vec![
            GestureEvent::DragBegin {
                position_px: PxPoint2::new(50, 500)
            },
            GestureEvent::Drag {
                position_px: PxPoint2::new(0, -50)
            },
            GestureEvent::Drag {
                position_px: PxPoint2::new(0, -100)
            },
        ]
    );
    assert!(!manager.is_idle(), "pointer is still down");
}

#[test]
fn release_produces_drag_end_and_returns_to_idle() {
    let mut manager = GestureManager::default();
    manager.add_movement(0, PxPoint2::new(0, 0), true);
    manager.add_movement(10, PxPoint2::new(0, 30), true);
    manager.add_movement(20, PxPoint2::new(0, 60), false);

    let events = drain(&mut manager);
    match events.last() {
        Some(GestureEvent::DragEnd {
            position_px,
            flick_velocity_dpf,
        }) => {
            assert_eq!(*position_px, PxPoint2::new(0, 60));
            assert!(flick_velocity_dpf.y > 0.0);
        }
        other => panic!("expected drag end, got {:?}", other),
    }
    assert!(manager.is_idle());
}

#[test]
fn hover_samples_are_ignored() {
    let mut manager = GestureManager::default();
    manager.add_movement(0, PxPoint2::new(0, 0), false);
    manager.add_movement(10, PxPoint2::new(0, 100), false);
    assert!(!manager.process());
    assert!(manager.is_idle());
}

#[test]
fn density_scales_displacement_back_to_pixels() {
    let mut manager = GestureManager::new(
        GestureAxis::XY,
        DensityDpi::new(320).expect("valid density"),
    );
    manager.add_movement(0, PxPoint2::new(100, 100), true);
    manager.add_movement(10, PxPoint2::new(100, 140), true);

    let events = drain(&mut manager);
    assert_eq!(
        events.last(),
        Some(&GestureEvent::Drag {
            position_px: PxPoint2::new(0, 40)
        })
    );
}

#[test]
fn clear_discards_pending_and_in_progress_recognition() {
    let mut manager = GestureManager::default();
    manager.add_movement(0, PxPoint2::new(0, 0), true);
    manager.add_movement(10, PxPoint2::new(0, 30), true);
    assert!(manager.process());

    manager.clear();
    assert!(manager.is_idle());
    assert!(manager.try_get().is_none());

    // A following press starts a fresh drag
    manager.add_movement(20, PxPoint2::new(0, 0), true);
    manager.add_movement(30, PxPoint2::new(20, 0), true);
    assert!(matches!(
        manager.try_get(),
        Some(GestureEvent::DragBegin { .. })
    ));
}

#[test]
fn consecutive_presses_produce_separate_drags() {
    let mut manager = GestureManager::default();
    manager.add_movement(0, PxPoint2::new(0, 0), true);
    manager.add_movement(10, PxPoint2::new(0, 30), true);
    manager.add_movement(20, PxPoint2::new(0, 30), false);
    manager.add_movement(30, PxPoint2::new(0, 30), true);
    manager.add_movement(40, PxPoint2::new(0, 80), true);

    let events = drain(&mut manager);
    let begins = events
        .iter()
        .filter(|e| matches!(e, GestureEvent::DragBegin { .. }))
        .count();
    assert_eq!(begins, 2);
    assert!(events
        .iter()
        .any(|e| matches!(e, GestureEvent::DragEnd { .. })));
}
