use super::constants::{NAVBAR_SCROLLED_PX, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP};

/// Vertical offset for the `index`-th floating element; later elements move
/// faster and everything moves up as the page scrolls down.
#[inline]
pub fn parallax_offset_px(scroll_y: f64, index: usize) -> f64 {
    let speed = PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP;
    -(scroll_y * speed)
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}

/// Size and top-left corner of a ripple, relative to the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Ripple covering the button, centred on the click point.
///
/// `rect` is the button's client rect as (left, top, width, height).
pub fn ripple_geometry(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Ripple {
    let (left, top, width, height) = rect;
    let size = width.max(height);
    Ripple {
        size,
        left: client_x - left - size / 2.0,
        top: client_y - top - size / 2.0,
    }
}
