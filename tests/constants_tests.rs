// Host-side tests for tuning constants and their relationships.
// The web constants module is wasm-only, so it is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use card_particles::core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_distance_range_is_ordered() {
    assert!(DISTANCE_MIN > 0.0);
    assert!(DISTANCE_MIN < DISTANCE_DEFAULT);
    assert!(DISTANCE_DEFAULT < DISTANCE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn min_distance_keeps_the_volume_center_in_front_of_the_camera() {
    // Anything nearer than DISTANCE_MIN behind the origin is culled, never divided by zero.
    assert!(DISTANCE_MIN <= VOLUME_HALF_EXTENT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pop_animation_grows_and_has_a_duration() {
    assert!(POP_SCALE_MAX > 1.0);
    assert_eq!(POP_DURATION.as_millis(), 300);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_sensitivities_are_positive() {
    assert!(DRAG_DEGREES_PER_PX > 0.0);
    assert!(WHEEL_DISTANCE_PER_DELTA > 0.0);
    assert!(DEFAULT_SPRITE_COUNT >= 1);
}

#[test]
fn web_hooks_are_consistent() {
    assert!(MOUNT_SELECTOR.contains(VARIANT_ATTR));
    assert!(CONFIG_ATTR.starts_with(VARIANT_ATTR));
    assert_ne!(CURSOR_IDLE, CURSOR_DRAGGING);
    let events = [
        EV_POINTER_DOWN,
        EV_POINTER_MOVE,
        EV_POINTER_UP,
        EV_POINTER_LEAVE,
        EV_WHEEL,
        EV_CLICK,
    ];
    for (i, a) in events.iter().enumerate() {
        for b in &events[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
