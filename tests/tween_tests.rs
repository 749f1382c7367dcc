// Host-side tests for easing, tween sampling, timeline sequencing and the
// tween engine's bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}

use motion::*;
use std::rc::Rc;
use timeline::*;
use tween::*;

fn all_eases() -> Vec<Ease> {
    vec![
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::back_in(),
        Ease::back_out(),
    ]
}

#[test]
fn eases_hit_both_endpoints() {
    for ease in all_eases() {
        assert!(ease.apply(0.0).abs() < 1e-12, "{:?} at 0", ease);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at 1", ease);
    }
}

#[test]
fn eases_clamp_time_input() {
    for ease in all_eases() {
        assert_eq!(ease.apply(-0.5), ease.apply(0.0));
        assert_eq!(ease.apply(1.5), ease.apply(1.0));
    }
}

#[test]
fn back_out_overshoots_and_back_in_dips() {
    let samples: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
    let out_max = samples
        .iter()
        .map(|&t| Ease::back_out().apply(t))
        .fold(f64::MIN, f64::max);
    let in_min = samples
        .iter()
        .map(|&t| Ease::back_in().apply(t))
        .fold(f64::MAX, f64::min);
    assert!(out_max > 1.0);
    assert!(in_min < 0.0);
}

#[test]
fn power2_in_out_is_symmetric() {
    let e = Ease::Power2InOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn power2_out_leads_power2_in() {
    for i in 1..10 {
        let t = i as f64 / 10.0;
        assert!(Ease::Power2Out.apply(t) > Ease::Power2In.apply(t));
    }
}

#[test]
fn tween_samples_from_start_to_end() {
    let tw = Tween::new(80.0, 20.0, 1.0, Ease::Linear);
    assert_eq!(tw.sample(0.0), 80.0);
    assert!((tw.sample(0.5) - 50.0).abs() < 1e-12);
    assert_eq!(tw.sample(1.0), 20.0);
    assert_eq!(tw.sample(3.0), 20.0);
    assert!(!tw.is_done(0.99));
    assert!(tw.is_done(1.0));
}

#[test]
fn yoyo_returns_to_start() {
    let tw = Tween::new(1.0, 1.5, 0.2, Ease::Power1Out).with_yoyo();
    assert!((tw.total_sec() - 0.4).abs() < 1e-12);
    assert!((tw.sample(0.2) - 1.5).abs() < 1e-9);
    assert!((tw.sample(0.1) - tw.sample(0.3)).abs() < 1e-9);
    assert_eq!(tw.sample(0.4), 1.0);
    assert!(!tw.is_done(0.3));
    assert!(tw.is_done(0.4));
}

#[test]
fn zero_duration_tween_finishes_immediately() {
    let tw = Tween::new(0.0, 200.0, 0.0, Ease::Power2Out);
    assert_eq!(tw.sample(0.001), 200.0);
    assert!(tw.is_done(0.001));
}

#[test]
fn timeline_appends_and_overlaps() {
    let tl = Timeline::new()
        .to("a", 1.0, 1.0, Ease::Linear, Position::End)
        .to("b", 1.0, 1.0, Ease::Linear, Position::BeforeEnd(0.25))
        .to("c", 1.0, 0.5, Ease::Linear, Position::End);
    let starts: Vec<f64> = tl.stages().iter().map(|s| s.start_sec).collect();
    assert_eq!(starts, vec![0.0, 0.75, 1.75]);
    assert_eq!(tl.duration_sec(), 2.25);
}

#[test]
fn overlap_never_starts_before_zero() {
    let tl = Timeline::new()
        .to(0u8, 1.0, 0.5, Ease::Linear, Position::End)
        .to(1u8, 1.0, 0.5, Ease::Linear, Position::BeforeEnd(2.0));
    assert_eq!(tl.stages()[1].start_sec, 0.0);
    assert_eq!(tl.duration_sec(), 0.5);
}

#[test]
fn short_overlapping_stage_does_not_shrink_timeline() {
    let tl = Timeline::new()
        .to(0u8, 1.0, 2.0, Ease::Linear, Position::End)
        .to(1u8, 1.0, 0.5, Ease::Linear, Position::BeforeEnd(1.5));
    assert_eq!(tl.stages()[1].end_sec(), 1.0);
    assert_eq!(tl.duration_sec(), 2.0);
}

// ---------------- Tween set ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
enum Prop {
    Height,
    Opacity,
}

impl Channel for Prop {
    fn resting_value(self) -> f64 {
        match self {
            Prop::Opacity => 1.0,
            Prop::Height => 0.0,
        }
    }
}

type Set = TweenSet<&'static str, Prop, u32>;

fn linear(prop: Prop, to: f64, dur: f64) -> Motion<Prop> {
    Motion::new(prop, to, dur).ease(Ease::Linear)
}

#[test]
fn completion_fires_once_when_done() {
    let mut set = Set::new();
    set.start(&"stream", linear(Prop::Height, 200.0, 1.0), 0.0, Some(1));

    let mut writes = Vec::new();
    assert!(set.step(0.5, &mut writes).is_empty());
    assert_eq!(writes, vec![("stream", Prop::Height, 100.0)]);

    writes.clear();
    assert_eq!(set.step(1.0, &mut writes), vec![1]);
    assert_eq!(writes, vec![("stream", Prop::Height, 200.0)]);
    assert!(set.is_empty());

    writes.clear();
    assert!(set.step(2.0, &mut writes).is_empty());
    assert!(writes.is_empty());
}

#[test]
fn replacing_a_tween_completes_the_old_one_now() {
    let mut set = Set::new();
    set.start(&"stream", linear(Prop::Height, 200.0, 2.0), 0.0, Some(1));
    let mut writes = Vec::new();
    set.step(1.0, &mut writes);

    let started = set.start(&"stream", linear(Prop::Height, 0.0, 1.0), 1.0, Some(2));
    assert_eq!(started.replaced, vec![1]);
    assert_eq!(started.from, 100.0);
    assert_eq!(set.len(), 1);

    assert_eq!(set.step(2.0, &mut writes), vec![2]);
}

#[test]
fn other_channels_and_elements_are_not_replaced() {
    let mut set = Set::new();
    set.start(&"drip", linear(Prop::Height, 100.0, 1.0), 0.0, Some(1));
    let started = set.start(&"drip", linear(Prop::Opacity, 0.0, 1.0), 0.0, Some(2));
    assert!(started.replaced.is_empty());
    let started = set.start(&"toast", linear(Prop::Height, 50.0, 1.0), 0.0, Some(3));
    assert!(started.replaced.is_empty());
    assert_eq!(set.len(), 3);
}

#[test]
fn stop_completes_every_tween_on_the_element() {
    let mut set = Set::new();
    set.start(&"glass", linear(Prop::Height, 45.0, 1.0), 0.0, Some(1));
    set.start(&"glass", linear(Prop::Opacity, 0.0, 1.0), 0.0, Some(2));
    set.start(&"stream", linear(Prop::Height, 200.0, 1.0), 0.0, Some(3));

    let mut done = set.stop(&"glass");
    done.sort();
    assert_eq!(done, vec![1, 2]);
    assert!(set.stop(&"glass").is_empty());

    let mut writes = Vec::new();
    assert_eq!(set.step(1.0, &mut writes), vec![3]);
}

#[test]
fn start_value_prefers_explicit_then_last_written_then_resting() {
    let mut set = Set::new();
    let started = set.start(&"drip", linear(Prop::Opacity, 0.0, 1.0), 0.0, None);
    assert_eq!(started.from, 1.0);

    set.record(&"stream", Prop::Height, 120.0);
    let started = set.start(&"stream", linear(Prop::Height, 200.0, 1.0), 0.0, None);
    assert_eq!(started.from, 120.0);

    let started = set.start(
        &"stream",
        linear(Prop::Height, 200.0, 1.0).from(10.0),
        0.0,
        None,
    );
    assert_eq!(started.from, 10.0);
    assert_eq!(set.last_written(&"stream", Prop::Height), Some(10.0));
}

#[test]
fn stopped_completion_releases_what_it_captured() {
    let scene = Rc::new(());
    let mut set: TweenSet<&'static str, Prop, Box<dyn FnOnce()>> = TweenSet::new();
    let held = scene.clone();
    set.start(
        &"stream",
        linear(Prop::Height, 200.0, 2.0),
        0.0,
        Some(Box::new(move || drop(held))),
    );
    assert_eq!(Rc::strong_count(&scene), 2);

    for cb in set.stop(&"stream") {
        cb();
    }
    assert_eq!(Rc::strong_count(&scene), 1);
    assert!(set.is_empty());
}

#[test]
fn forget_drops_tweens_without_completing() {
    let mut set = Set::new();
    set.start(&"drip", linear(Prop::Height, 100.0, 1.0), 0.0, Some(1));
    set.forget(&"drip");
    assert!(set.is_empty());
    assert_eq!(set.last_written(&"drip", Prop::Height), None);
    let mut writes = Vec::new();
    assert!(set.step(5.0, &mut writes).is_empty());
}

#[test]
fn yoyo_motion_ends_back_at_start() {
    let mut set = Set::new();
    set.start(
        &"badge",
        Motion::new(Prop::Height, 1.5, 0.2).from(1.0).yoyo(),
        0.0,
        Some(7),
    );
    let mut writes = Vec::new();
    assert!(set.step(0.3, &mut writes).is_empty());
    assert_eq!(set.step(0.4, &mut writes), vec![7]);
    assert_eq!(set.last_written(&"badge", Prop::Height), Some(1.0));
}
