// Bookkeeping behind the frame-stepped tween engine.
//
// `TweenSet` tracks running tweens per (key, channel) pair and the last
// value written to each pair. It is generic over the element key and the
// completion payload so the page can store DOM elements and boxed
// callbacks while tests use plain values. Completions are handed back to
// the caller instead of being run here, and each is handed back once.

use super::tween::{Ease, Tween};

/// One animatable property of an element.
pub trait Channel: Copy + PartialEq {
    /// Value assumed when nothing has been written yet.
    fn resting_value(self) -> f64 {
        0.0
    }
}

/// What to animate: a channel, its end value and timing.
#[derive(Clone, Copy, Debug)]
pub struct Motion<P> {
    pub prop: P,
    pub from: Option<f64>,
    pub to: f64,
    pub duration_sec: f64,
    pub ease: Ease,
    pub yoyo: bool,
}

impl<P: Channel> Motion<P> {
    pub fn new(prop: P, to: f64, duration_sec: f64) -> Self {
        Self {
            prop,
            from: None,
            to,
            duration_sec,
            ease: Ease::default(),
            yoyo: false,
        }
    }

    pub fn from(mut self, v: f64) -> Self {
        self.from = Some(v);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Go to `to` and come back once.
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }
}

struct Running<K, P, C> {
    key: K,
    prop: P,
    tween: Tween,
    started_sec: f64,
    on_complete: Option<C>,
}

/// Result of starting a tween.
pub struct Started<C> {
    /// Value the tween starts from; the caller writes it right away.
    pub from: f64,
    /// Completions of the tween it replaced, due now.
    pub replaced: Vec<C>,
}

pub struct TweenSet<K, P, C> {
    running: Vec<Running<K, P, C>>,
    written: Vec<(K, P, f64)>,
}

impl<K, P, C> Default for TweenSet<K, P, C> {
    fn default() -> Self {
        Self {
            running: Vec::new(),
            written: Vec::new(),
        }
    }
}

impl<K: Clone + PartialEq, P: Channel, C> TweenSet<K, P, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn last_written(&self, key: &K, prop: P) -> Option<f64> {
        self.written
            .iter()
            .find(|(k, p, _)| k == key && *p == prop)
            .map(|(_, _, v)| *v)
    }

    /// Note a value written outside any tween.
    pub fn record(&mut self, key: &K, prop: P, v: f64) {
        match self
            .written
            .iter_mut()
            .find(|(k, p, _)| k == key && *p == prop)
        {
            Some(slot) => slot.2 = v,
            None => self.written.push((key.clone(), prop, v)),
        }
    }

    /// Start a tween on `key`, replacing any running on the same channel.
    /// Without an explicit `from`, it starts at the last value written for
    /// that channel, else at the channel's resting value.
    pub fn start(
        &mut self,
        key: &K,
        motion: Motion<P>,
        now_sec: f64,
        on_complete: Option<C>,
    ) -> Started<C> {
        let replaced = self.take_matching(|r| r.key == *key && r.prop == motion.prop);
        let from = motion
            .from
            .or_else(|| self.last_written(key, motion.prop))
            .unwrap_or_else(|| motion.prop.resting_value());
        let mut tween = Tween::new(from, motion.to, motion.duration_sec, motion.ease);
        if motion.yoyo {
            tween = tween.with_yoyo();
        }
        self.record(key, motion.prop, from);
        self.running.push(Running {
            key: key.clone(),
            prop: motion.prop,
            tween,
            started_sec: now_sec,
            on_complete,
        });
        Started { from, replaced }
    }

    /// Stop every tween on `key` where it stands and return their completions.
    pub fn stop(&mut self, key: &K) -> Vec<C> {
        self.take_matching(|r| r.key == *key)
    }

    /// Drop everything known about `key` without completing its tweens.
    pub fn forget(&mut self, key: &K) {
        self.running.retain(|r| r.key != *key);
        self.written.retain(|(k, _, _)| k != key);
    }

    /// Advance every tween to `now_sec`, pushing the values to write into
    /// `writes` and returning the completions of tweens that finished.
    pub fn step(&mut self, now_sec: f64, writes: &mut Vec<(K, P, f64)>) -> Vec<C> {
        let mut done = Vec::new();
        for mut r in std::mem::take(&mut self.running) {
            let elapsed = now_sec - r.started_sec;
            let v = r.tween.sample(elapsed);
            self.record(&r.key, r.prop, v);
            writes.push((r.key.clone(), r.prop, v));
            if r.tween.is_done(elapsed) {
                done.extend(r.on_complete.take());
            } else {
                self.running.push(r);
            }
        }
        done
    }

    fn take_matching(&mut self, mut filter: impl FnMut(&Running<K, P, C>) -> bool) -> Vec<C> {
        let mut done = Vec::new();
        let mut kept = Vec::with_capacity(self.running.len());
        for mut r in self.running.drain(..) {
            if filter(&r) {
                done.extend(r.on_complete.take());
            } else {
                kept.push(r);
            }
        }
        self.running = kept;
        done
    }
}
