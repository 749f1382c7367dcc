// Host-side tests for counters, cart, page effects and the mocked form.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod counter {
    include!("../src/core/counter.rs");
}
mod cart {
    include!("../src/core/cart.rs");
}
mod ux {
    include!("../src/core/ux.rs");
}
mod form {
    include!("../src/core/form.rs");
}

use cart::*;
use counter::*;
use form::*;
use ux::*;

#[test]
fn counter_reaches_exact_target_in_sixty_steps() {
    let mut c = CounterAnimation::new(120);
    let mut shown = Vec::new();
    while !c.is_finished() {
        shown.push(c.tick());
    }
    assert_eq!(shown.len(), 60);
    assert_eq!(shown[0], 2);
    assert_eq!(*shown.last().unwrap(), 120);
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn counter_with_uneven_increment_still_lands_on_target() {
    let mut c = CounterAnimation::new(1000 / 3);
    let mut last = 0;
    let mut ticks = 0;
    while !c.is_finished() && ticks < 100 {
        last = c.tick();
        ticks += 1;
    }
    assert!(ticks <= 61, "ticks={}", ticks);
    assert_eq!(last, 333);
    // further ticks keep showing the target
    assert_eq!(c.tick(), 333);
}

#[test]
fn counter_ticks_span_two_seconds() {
    assert_eq!(counter_tick_ms(), 33);
}

#[test]
fn count_attribute_parsing() {
    assert_eq!(parse_count("1500"), 1500);
    assert_eq!(parse_count(" 42 "), 42);
    assert_eq!(parse_count("98%"), 98);
    assert_eq!(parse_count("abc"), 0);
    assert_eq!(parse_count(""), 0);
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let mut c = CounterAnimation::from_attribute("n/a");
    assert_eq!(c.target(), 0);
    assert_eq!(c.tick(), 0);
    assert!(c.is_finished());
}

#[test]
fn cart_counts_in_click_order() {
    let mut cart = Cart::new();
    assert!(cart.is_empty());
    assert_eq!(cart.add("Whole Milk"), 1);
    assert_eq!(cart.add("Oat Milk"), 2);
    assert_eq!(cart.add("Whole Milk"), 3);
    assert_eq!(cart.len(), 3);
    assert_eq!(cart.items()[1], "Oat Milk");
}

#[test]
fn notification_message() {
    assert_eq!(added_message("Whole Milk"), "Whole Milk added to cart!");
}

#[test]
fn quick_view_escapes_title() {
    let html = quick_view_html("Milk & <Cookies>");
    assert!(html.contains("<h3>Milk &amp; &lt;Cookies&gt;</h3>"));
    assert!(html.contains("class=\"close-modal\""));
    assert!(html.contains("Order Now"));
}

#[test]
fn parallax_speeds_increase_with_index() {
    assert!((parallax_offset_px(100.0, 0) + 10.0).abs() < 1e-9);
    assert!((parallax_offset_px(100.0, 1) + 15.0).abs() < 1e-9);
    assert!((parallax_offset_px(100.0, 2) + 20.0).abs() < 1e-9);
    assert_eq!(parallax_offset_px(0.0, 5), 0.0);
}

#[test]
fn navbar_threshold_is_exclusive() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(100.0));
    assert!(navbar_scrolled(100.5));
}

#[test]
fn ripple_is_centred_on_click() {
    let r = ripple_geometry((10.0, 20.0, 100.0, 40.0), 60.0, 40.0);
    assert_eq!(r.size, 100.0);
    assert_eq!(r.left, 0.0);
    assert_eq!(r.top, -30.0);
}

#[test]
fn form_walks_through_sending_and_success() {
    let mut s = Submission::default();
    assert_eq!(s.phase(), SubmitPhase::Idle);

    assert_eq!(s.submit("Send Message"), Some(2000));
    assert_eq!(s.phase(), SubmitPhase::Sending);
    assert_eq!(s.original_label(), "Send Message");

    assert_eq!(s.sent(), Some(3000));
    assert_eq!(s.phase(), SubmitPhase::Sent);

    assert_eq!(s.finish().as_deref(), Some("Send Message"));
    assert_eq!(s.phase(), SubmitPhase::Idle);
}

#[test]
fn form_ignores_out_of_order_steps() {
    let mut s = Submission::default();
    assert_eq!(s.sent(), None);
    assert_eq!(s.finish(), None);

    s.submit("Send");
    assert_eq!(s.submit("Send"), None);
    assert_eq!(s.finish(), None);
}
