// Scroll-driven milk pour.
//
// Scroll position is normalized to a progress value and mapped through a
// piecewise-linear schedule onto the four visual parameters of the pour.
// `PourController` owns the mutable bits (stored progress, the smoothing
// latch, the drip RNG and the replay ownership token) and reports what the
// page should do as `PourCommand`s, so it can be driven by synthetic
// notifications in tests.
//
// Below the window the visuals are whatever `reset` left. Past the window
// they settle on `PourParameters::POURED` once, when the window is left.

use super::constants::*;
use super::timeline::{Position, Timeline};
use super::tween::Ease;
use rand::prelude::*;

/// Viewport geometry sampled at notification time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scroll_offset_px: u32,
    pub viewport_height_px: u32,
    pub document_height_px: u32,
}

impl ScrollState {
    pub fn new(scroll_offset_px: u32, viewport_height_px: u32, document_height_px: u32) -> Self {
        Self {
            scroll_offset_px,
            viewport_height_px,
            document_height_px,
        }
    }

    /// Normalized scroll position in [0, 1].
    ///
    /// Documents no taller than the viewport cannot scroll and report 0.
    pub fn progress(&self) -> f64 {
        if self.document_height_px <= self.viewport_height_px {
            return 0.0;
        }
        let range = (self.document_height_px - self.viewport_height_px) as f64;
        (self.scroll_offset_px as f64 / range.max(PROGRESS_EPSILON)).clamp(0.0, 1.0)
    }
}

/// The four interpolated quantities driving the pour visuals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PourParameters {
    pub glass_rotation_deg: f64,
    pub milk_level_pct: f64,
    pub stream_length_px: f64,
    pub container_fill_pct: f64,
}

impl PourParameters {
    /// Glass upright and full, nothing poured.
    pub const RESET: PourParameters = PourParameters {
        glass_rotation_deg: 0.0,
        milk_level_pct: MILK_LEVEL_FULL_PCT,
        stream_length_px: 0.0,
        container_fill_pct: 0.0,
    };

    /// Values at the upper bound of the pour window.
    pub const POURED: PourParameters = PourParameters {
        glass_rotation_deg: GLASS_ROTATION_MAX_DEG,
        milk_level_pct: MILK_LEVEL_EMPTY_PCT,
        stream_length_px: STREAM_LENGTH_MAX_PX,
        container_fill_pct: CONTAINER_FILL_MAX_PCT,
    };

    /// Linear blend for a pour fraction `t` in [0, 1].
    pub fn at_fraction(t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            glass_rotation_deg: GLASS_ROTATION_MAX_DEG * t,
            milk_level_pct: MILK_LEVEL_FULL_PCT - (MILK_LEVEL_FULL_PCT - MILK_LEVEL_EMPTY_PCT) * t,
            stream_length_px: STREAM_LENGTH_MAX_PX * t,
            container_fill_pct: CONTAINER_FILL_MAX_PCT * t,
        }
    }
}

impl Default for PourParameters {
    fn default() -> Self {
        Self::RESET
    }
}

/// Tunables for the scroll mapping.
#[derive(Clone, Copy, Debug)]
pub struct PourConfig {
    pub pour_start: f64,
    pub pour_end: f64,
    pub drip_roll_threshold: f64,
    pub smoothing_arm_progress: f64,
}

impl Default for PourConfig {
    fn default() -> Self {
        Self {
            pour_start: POUR_START,
            pour_end: POUR_END,
            drip_roll_threshold: DRIP_ROLL_THRESHOLD,
            smoothing_arm_progress: SMOOTHING_ARM_PROGRESS,
        }
    }
}

impl PourConfig {
    pub fn in_window(&self, progress: f64) -> bool {
        progress >= self.pour_start && progress <= self.pour_end
    }

    /// Position inside the pour window, 0 at its start and 1 at its end.
    pub fn window_fraction(&self, progress: f64) -> f64 {
        let span = (self.pour_end - self.pour_start).max(PROGRESS_EPSILON);
        ((progress - self.pour_start) / span).clamp(0.0, 1.0)
    }

    /// Parameters for a progress value: reset values before the window,
    /// linear inside it, held at the upper bound past it.
    pub fn parameters(&self, progress: f64) -> PourParameters {
        if progress < self.pour_start {
            PourParameters::RESET
        } else if progress > self.pour_end {
            PourParameters::POURED
        } else {
            PourParameters::at_fraction(self.window_fraction(progress))
        }
    }
}

/// Shorthand for `PourConfig::default().parameters(progress)`.
pub fn pour_parameters(progress: f64) -> PourParameters {
    PourConfig::default().parameters(progress)
}

/// Visual elements making up the pour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PourTarget {
    Glass,
    MilkLevel,
    Stream,
    ContainerFill,
}

/// Who is currently allowed to write to the pour elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Scroll,
    Replay,
}

/// Work for the page to carry out after a notification.
#[derive(Clone, Debug)]
pub enum PourCommand {
    /// Put every element back to `PourParameters::RESET`.
    Reset,
    Apply(PourParameters),
    SpawnDrip,
    /// Ease the stream toward `to_px`; report back via `smoothing_finished`.
    StartSmoothing {
        to_px: f64,
        duration_sec: f64,
        ease: Ease,
    },
    /// Run the manual replay; report back via `replay_finished` with the
    /// same generation.
    PlayReplay {
        timeline: Timeline<PourTarget>,
        generation: u32,
    },
}

/// Reset-then-pour sequence played by the add-to-cart action.
pub fn replay_timeline() -> Timeline<PourTarget> {
    Timeline::new()
        .to(
            PourTarget::Glass,
            GLASS_ROTATION_MAX_DEG,
            0.5,
            Ease::back_out(),
            Position::End,
        )
        .to(
            PourTarget::MilkLevel,
            MILK_LEVEL_EMPTY_PCT,
            1.0,
            Ease::Power2InOut,
            Position::BeforeEnd(0.3),
        )
        .to(
            PourTarget::Stream,
            STREAM_LENGTH_MAX_PX,
            1.0,
            Ease::Power2Out,
            Position::BeforeEnd(0.8),
        )
        .to(
            PourTarget::ContainerFill,
            CONTAINER_FILL_MAX_PCT,
            1.5,
            Ease::Power2InOut,
            Position::BeforeEnd(1.0),
        )
        .to(PourTarget::Glass, 0.0, 0.5, Ease::back_in(), Position::End)
        .to(PourTarget::Stream, 0.0, 0.3, Ease::Power2In, Position::End)
}

/// Owner of all pour state for one page.
///
/// Typical usage:
/// - Construct with `PourController::new(config, seed)` and call `reset`
/// - Feed `on_scroll` for every scroll notification and `reset` on resize
/// - Call `begin_replay` for the manual pour and `replay_finished` /
///   `smoothing_finished` when the corresponding animations complete
pub struct PourController {
    pub config: PourConfig,
    progress: f64,
    is_animating: bool,
    // POURED has been applied since the last in-window notification or reset
    settled_past_end: bool,
    owner: Owner,
    replay_generation: u32,
    rng: StdRng,
}

impl PourController {
    pub fn new(config: PourConfig, seed: u64) -> Self {
        Self {
            config,
            progress: 0.0,
            is_animating: false,
            settled_past_end: false,
            owner: Owner::Scroll,
            replay_generation: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Zero the stored progress and put the visuals back to their initial
    /// values. Calling it repeatedly leaves the same state.
    pub fn reset(&mut self, out: &mut Vec<PourCommand>) {
        self.progress = 0.0;
        self.settled_past_end = false;
        out.push(PourCommand::Reset);
    }

    /// Handle one scroll notification.
    pub fn on_scroll(&mut self, state: ScrollState, out: &mut Vec<PourCommand>) {
        self.progress = state.progress();
        if self.owner == Owner::Replay {
            return;
        }

        if self.config.in_window(self.progress) {
            self.settled_past_end = false;
            out.push(PourCommand::Apply(self.config.parameters(self.progress)));
            if self.rng.gen::<f64>() > self.config.drip_roll_threshold {
                out.push(PourCommand::SpawnDrip);
            }
        } else if self.progress > self.config.pour_end && !self.settled_past_end {
            self.settled_past_end = true;
            out.push(PourCommand::Apply(PourParameters::POURED));
        }

        if self.progress > self.config.smoothing_arm_progress && !self.is_animating {
            self.is_animating = true;
            out.push(PourCommand::StartSmoothing {
                to_px: STREAM_LENGTH_MAX_PX,
                duration_sec: SMOOTHING_DURATION_SEC,
                ease: Ease::Power2Out,
            });
        }
    }

    /// Release the smoothing latch once its animation has completed.
    pub fn smoothing_finished(&mut self) {
        self.is_animating = false;
    }

    /// Take the pour elements for the manual replay. Restarts a replay that
    /// is already running.
    pub fn begin_replay(&mut self, out: &mut Vec<PourCommand>) {
        self.owner = Owner::Replay;
        self.replay_generation = self.replay_generation.wrapping_add(1);
        self.reset(out);
        out.push(PourCommand::PlayReplay {
            timeline: replay_timeline(),
            generation: self.replay_generation,
        });
    }

    /// Hand the pour elements back to scroll updates. Completions of a
    /// replay that has since been restarted are ignored.
    pub fn replay_finished(&mut self, generation: u32) {
        if generation == self.replay_generation {
            self.owner = Owner::Scroll;
        }
    }
}

/// CSS transform for the glass and the stream, both centred horizontally.
pub fn tilt_transform(deg: f64) -> String {
    format!("translateX(-50%) rotate({}deg)", deg)
}
