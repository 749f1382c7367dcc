use super::constants::{COUNTER_DURATION_MS, COUNTER_STEPS};

/// Count-up animation for a `data-count` element.
///
/// Each `tick` adds `target / COUNTER_STEPS` and returns the text to show.
/// Once the running value reaches the target the exact target is shown and
/// the counter reports itself finished.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            increment: target as f64 / COUNTER_STEPS as f64,
            current: 0.0,
            finished: false,
        }
    }

    /// Parse the attribute value; anything that is not a number counts to 0.
    pub fn from_attribute(value: &str) -> Self {
        Self::new(parse_count(value))
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the value to display.
    pub fn tick(&mut self) -> u32 {
        if self.finished {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            self.target
        } else {
            self.current.floor() as u32
        }
    }
}

/// Delay between counter ticks.
pub fn counter_tick_ms() -> u32 {
    COUNTER_DURATION_MS / COUNTER_STEPS
}

/// Leading-integer parse: "1500+" -> 1500, "abc" -> 0.
pub fn parse_count(value: &str) -> u32 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
