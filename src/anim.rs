//! Frame-stepped tween engine.
//!
//! Tweens animate one style property of one element and are stepped from
//! `requestAnimationFrame` only while something is moving. Starting a tween
//! on an (element, property) pair that is already animating replaces the
//! running tween; the replaced tween's completion fires at that moment so
//! every started tween completes exactly once.

use crate::core::{tilt_transform, Channel, Motion, TweenSet};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Style channel a tween writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProp {
    /// `translateX(-50%) rotate(<v>deg)`, the centred tilt of the glass and stream.
    Tilt,
    HeightPct,
    HeightPx,
    TranslateYPx,
    TranslateXPct,
    Opacity,
    Scale,
}

impl Channel for StyleProp {
    fn resting_value(self) -> f64 {
        match self {
            StyleProp::Opacity | StyleProp::Scale => 1.0,
            _ => 0.0,
        }
    }
}

impl StyleProp {
    pub fn write(self, el: &web::HtmlElement, v: f64) {
        let style = el.style();
        _ = match self {
            StyleProp::Tilt => style.set_property("transform", &tilt_transform(v)),
            StyleProp::HeightPct => style.set_property("height", &format!("{}%", v)),
            StyleProp::HeightPx => style.set_property("height", &format!("{}px", v)),
            StyleProp::TranslateYPx => {
                style.set_property("transform", &format!("translateY({}px)", v))
            }
            StyleProp::TranslateXPct => {
                style.set_property("transform", &format!("translateX({}%)", v))
            }
            StyleProp::Opacity => style.set_property("opacity", &v.to_string()),
            StyleProp::Scale => style.set_property("transform", &format!("scale({})", v)),
        };
    }
}

pub type OnComplete = Box<dyn FnOnce()>;

struct AnimInner {
    tweens: RefCell<TweenSet<web::HtmlElement, StyleProp, OnComplete>>,
    origin: Instant,
    running: Cell<bool>,
}

/// Shared handle to the page's tween engine.
#[derive(Clone)]
pub struct Animator {
    inner: Rc<AnimInner>,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(AnimInner {
                tweens: RefCell::new(TweenSet::new()),
                origin: Instant::now(),
                running: Cell::new(false),
            }),
        }
    }

    fn now_sec(&self) -> f64 {
        self.inner.origin.elapsed().as_secs_f64()
    }

    /// Write a value immediately, outside any tween.
    pub fn set(&self, el: &web::HtmlElement, prop: StyleProp, v: f64) {
        prop.write(el, v);
        self.inner.tweens.borrow_mut().record(el, prop, v);
    }

    /// Start a tween on `el`. Without an explicit `from`, it starts at the
    /// last value this engine wrote for that property.
    pub fn play(
        &self,
        el: &web::HtmlElement,
        motion: Motion<StyleProp>,
        on_complete: Option<OnComplete>,
    ) {
        let now = self.now_sec();
        let started = self
            .inner
            .tweens
            .borrow_mut()
            .start(el, motion, now, on_complete);
        motion.prop.write(el, started.from);
        for cb in started.replaced {
            cb();
        }
        self.ensure_running();
    }

    /// Stop every tween on `el` where it stands, firing their completions.
    pub fn stop(&self, el: &web::HtmlElement) {
        let done = self.inner.tweens.borrow_mut().stop(el);
        for cb in done {
            cb();
        }
    }

    /// Drop bookkeeping for an element that left the page.
    pub fn forget(&self, el: &web::HtmlElement) {
        self.inner.tweens.borrow_mut().forget(el);
    }

    fn ensure_running(&self) {
        if self.inner.running.get() || self.inner.tweens.borrow().is_empty() {
            return;
        }
        self.inner.running.set(true);
        self.request_frame();
    }

    // Each frame gets a one-shot callback holding only a weak handle, so a
    // pending frame neither keeps the engine alive nor outlives it.
    fn request_frame(&self) {
        let Some(w) = web::window() else {
            self.inner.running.set(false);
            return;
        };
        let weak: Weak<AnimInner> = Rc::downgrade(&self.inner);
        let cb = Closure::once_into_js(move || {
            if let Some(inner) = weak.upgrade() {
                Animator { inner }.on_frame();
            }
        });
        if w.request_animation_frame(cb.unchecked_ref()).is_err() {
            self.inner.running.set(false);
        }
    }

    fn on_frame(&self) {
        if self.step() {
            self.request_frame();
        } else {
            self.inner.running.set(false);
        }
    }

    /// Advance all tweens to now. Returns whether anything is still moving.
    fn step(&self) -> bool {
        let now = self.now_sec();
        let mut writes = Vec::new();
        let done = self.inner.tweens.borrow_mut().step(now, &mut writes);
        for (el, prop, v) in writes {
            prop.write(&el, v);
        }
        // completions may start new tweens, so they run with no borrow held
        for cb in done {
            cb();
        }
        !self.inner.tweens.borrow().is_empty()
    }
}
