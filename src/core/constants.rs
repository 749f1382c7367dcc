/// Pour window and parameter ranges.
///
/// Progress is the normalized scroll position in [0, 1]. The pour only
/// animates while progress lies inside [POUR_START, POUR_END].
pub const POUR_START: f64 = 0.10;
pub const POUR_END: f64 = 0.50;

// Guards the progress denominator against zero-height scroll ranges
pub const PROGRESS_EPSILON: f64 = 1e-9;

// Parameter ranges at the window bounds
pub const GLASS_ROTATION_MAX_DEG: f64 = 45.0;
pub const MILK_LEVEL_FULL_PCT: f64 = 80.0;
pub const MILK_LEVEL_EMPTY_PCT: f64 = 20.0;
pub const STREAM_LENGTH_MAX_PX: f64 = 200.0;
pub const CONTAINER_FILL_MAX_PCT: f64 = 80.0;

// Drips spawn when a uniform roll in [0, 1) exceeds this (20% chance)
pub const DRIP_ROLL_THRESHOLD: f64 = 0.8;

// Smoothing pass on the stream, armed once progress passes this point
pub const SMOOTHING_ARM_PROGRESS: f64 = 0.3;
pub const SMOOTHING_DURATION_SEC: f64 = 2.0;

// Back easing overshoot used by the replay and toast animations
pub const BACK_OVERSHOOT: f64 = 1.7;

// Counters
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

// Parallax speed per floating element: base + index * step
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

// Navbar switches to its compact style past this scroll offset
pub const NAVBAR_SCROLLED_PX: f64 = 100.0;

// Minimum tap target for touch devices
pub const TOUCH_TARGET_MIN_PX: u32 = 44;

// Mocked form submission
pub const FORM_SENDING_MS: u32 = 2000;
pub const FORM_SUCCESS_MS: u32 = 3000;
