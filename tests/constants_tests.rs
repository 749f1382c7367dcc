// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn pour_window_is_inside_unit_range() {
    assert!(POUR_START > 0.0 && POUR_START < POUR_END);
    assert!(POUR_END <= 1.0);
    // smoothing arms inside the window
    assert!(SMOOTHING_ARM_PROGRESS > POUR_START && SMOOTHING_ARM_PROGRESS < POUR_END);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parameter_ranges_are_ordered() {
    assert!(GLASS_ROTATION_MAX_DEG > 0.0 && GLASS_ROTATION_MAX_DEG <= 90.0);
    assert!(MILK_LEVEL_EMPTY_PCT < MILK_LEVEL_FULL_PCT);
    assert!(MILK_LEVEL_FULL_PCT <= 100.0);
    assert!(CONTAINER_FILL_MAX_PCT <= 100.0);
    assert!(STREAM_LENGTH_MAX_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drip_chance_is_one_in_five() {
    assert!((1.0 - DRIP_ROLL_THRESHOLD - 0.2).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(SMOOTHING_DURATION_SEC > 0.0);
    assert!(COUNTER_STEPS > 0 && COUNTER_DURATION_MS >= COUNTER_STEPS);
    assert!(FORM_SENDING_MS > 0 && FORM_SUCCESS_MS > 0);
    assert!(DRIP_FALL_SEC > 0.0 && TOAST_SLIDE_SEC > 0.0 && MODAL_FADE_SEC > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(RIPPLE_LIFETIME_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulses_grow_elements() {
    assert!(BUTTON_PULSE_SCALE > 1.0);
    assert!(BADGE_PULSE_SCALE > BUTTON_PULSE_SCALE);
    assert!(COUNTER_VISIBLE_THRESHOLD > 0.0 && COUNTER_VISIBLE_THRESHOLD <= 1.0);
}

#[test]
fn selectors_are_classes_ids_or_attributes() {
    for sel in [
        SEL_GLASS,
        SEL_CONTAINER_LIQUID,
        SEL_POUR_HOST,
        SEL_ADD_TO_CART,
        SEL_QUICK_VIEW,
        SEL_PRODUCT_CARD,
        SEL_ORDER_BUTTON,
        SEL_FLOATING,
        SEL_NAVBAR,
    ] {
        assert!(sel.starts_with('.'), "{}", sel);
    }
    assert!(SEL_COUNTER.starts_with('[') && SEL_COUNTER.contains(ATTR_COUNT));
    assert!(!ID_MILK_LEVEL.starts_with('#') && !ID_MILK_POUR.starts_with('#'));
}

#[test]
fn ripple_style_is_marked_for_single_injection() {
    assert!(!RIPPLE_STYLE_ID.is_empty());
    assert!(RIPPLE_STYLE_ID
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    assert!(!RIPPLE_STYLE_ID.starts_with(|c: char| c.is_ascii_digit()));
    assert!(RIPPLE_KEYFRAMES.starts_with("@keyframes ripple"));
}
