use super::constants::BACK_OVERSHOOT;

/// Easing curves understood by the tween engine.
///
/// The power curves follow the usual animation-library naming where
/// `power1` is quadratic and `power2` is cubic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2In,
    Power2Out,
    Power2InOut,
    BackIn(f64),
    BackOut(f64),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

impl Ease {
    pub fn back_in() -> Self {
        Ease::BackIn(BACK_OVERSHOOT)
    }

    pub fn back_out() -> Self {
        Ease::BackOut(BACK_OVERSHOOT)
    }

    /// Map linear time `t` in [0, 1] onto the curve. Back curves overshoot
    /// outside [0, 1] in the middle but always hit 0 and 1 at the ends.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackIn(s) => (s + 1.0) * t * t * t - s * t * t,
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

/// A single numeric animation from `from` to `to`. With `yoyo` it plays
/// forward then back once, ending at `from`.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_sec: f64,
    pub ease: Ease,
    pub yoyo: bool,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_sec: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_sec: duration_sec.max(1e-6),
            ease,
            yoyo: false,
        }
    }

    pub fn with_yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Total time from start until the final value is reached.
    pub fn total_sec(&self) -> f64 {
        let legs = if self.yoyo { 2.0 } else { 1.0 };
        self.duration_sec * legs
    }

    pub fn is_done(&self, elapsed_sec: f64) -> bool {
        elapsed_sec >= self.total_sec()
    }

    /// Value of the tween `elapsed_sec` after it started.
    pub fn sample(&self, elapsed_sec: f64) -> f64 {
        if elapsed_sec <= 0.0 {
            return self.from;
        }
        let mut t = elapsed_sec / self.duration_sec;
        if self.yoyo {
            if t >= 2.0 {
                return self.from;
            }
            if t > 1.0 {
                // return leg replays the curve backwards
                t = 2.0 - t;
            }
        } else if t >= 1.0 {
            return self.to;
        }
        let eased = self.ease.apply(t);
        self.from + (self.to - self.from) * eased
    }
}
