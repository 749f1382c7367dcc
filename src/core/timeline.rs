use super::tween::Ease;

/// Where a stage starts relative to the timeline built so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after everything already on the timeline.
    End,
    /// Overlap: this many seconds before the current end (clamped at 0).
    BeforeEnd(f64),
}

/// One entry of a timeline: which target moves, where to, and when.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage<T> {
    pub target: T,
    pub to: f64,
    pub start_sec: f64,
    pub duration_sec: f64,
    pub ease: Ease,
}

impl<T> Stage<T> {
    pub fn end_sec(&self) -> f64 {
        self.start_sec + self.duration_sec
    }
}

/// Sequencer that resolves relative stage positions into absolute start
/// times, the way chained `.to(..., "-=0.3")` calls do.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    stages: Vec<Stage<T>>,
    end_sec: f64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            stages: Vec::new(),
            end_sec: 0.0,
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to(mut self, target: T, to: f64, duration_sec: f64, ease: Ease, at: Position) -> Self {
        let start_sec = match at {
            Position::End => self.end_sec,
            Position::BeforeEnd(overlap) => (self.end_sec - overlap).max(0.0),
        };
        let stage = Stage {
            target,
            to,
            start_sec,
            duration_sec,
            ease,
        };
        self.end_sec = self.end_sec.max(stage.end_sec());
        self.stages.push(stage);
        self
    }

    pub fn stages(&self) -> &[Stage<T>] {
        &self.stages
    }

    pub fn duration_sec(&self) -> f64 {
        self.end_sec
    }
}
