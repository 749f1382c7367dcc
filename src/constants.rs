// Page hooks and animation timings used by the web layer.

// Pour scene
pub const SEL_GLASS: &str = ".milk-glass";
pub const ID_MILK_LEVEL: &str = "milkLevel";
pub const ID_MILK_POUR: &str = "milkPour";
pub const SEL_CONTAINER_LIQUID: &str = ".container-liquid";
pub const SEL_POUR_HOST: &str = ".milk-animation-container";
pub const POUR_RNG_SEED: u64 = 0x6d69_6c6b; // "milk"

// Drips
pub const DRIP_FALL_PX: f64 = 100.0;
pub const DRIP_FALL_SEC: f64 = 0.8;
pub const DRIP_STREAM_INSET_PX: i32 = 6; // centres the 8px drip on the stream
pub const DRIP_CSS: &str = "position: absolute; width: 8px; height: 8px; \
    background: rgba(255,250,240,0.9); border-radius: 50%; z-index: 1;";

// Shop
pub const SEL_ADD_TO_CART: &str = ".btn-add-to-cart";
pub const SEL_QUICK_VIEW: &str = ".btn-quick-view";
pub const SEL_PRODUCT_CARD: &str = ".product-card";
pub const SEL_ORDER_BUTTON: &str = ".btn-order";
pub const ATTR_PRODUCT: &str = "data-product";
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const BUTTON_PULSE_SCALE: f64 = 1.2;
pub const BADGE_PULSE_SCALE: f64 = 1.5;
pub const PULSE_SEC: f64 = 0.2;
pub const TOAST_SLIDE_SEC: f64 = 0.5;
pub const TOAST_HOLD_MS: u32 = 3000;
pub const MODAL_FADE_SEC: f64 = 0.3;
pub const TOAST_CSS: &str = "position: fixed; top: 100px; right: 30px; \
    background: linear-gradient(135deg, var(--deep-blue), var(--medium-blue)); \
    color: white; padding: 15px 25px; border-radius: 10px; z-index: 1000; \
    box-shadow: 0 10px 30px rgba(33, 150, 243, 0.3); \
    transform: translateX(100%); opacity: 0;";
pub const BADGE_CSS: &str = "position: absolute; top: -5px; right: -5px; \
    background: #ff5252; color: white; width: 20px; height: 20px; \
    border-radius: 50%; font-size: 0.7rem; display: flex; \
    align-items: center; justify-content: center;";
pub const MODAL_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; \
    height: 100%; background: rgba(0,0,0,0.8); display: flex; \
    align-items: center; justify-content: center; z-index: 1000; opacity: 0;";

// Counters
pub const SEL_COUNTER: &str = "[data-count]";
pub const ATTR_COUNT: &str = "data-count";
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;

// UX
pub const SEL_FLOATING: &str = ".floating";
pub const SEL_NAVBAR: &str = ".navbar";
pub const SEL_RIPPLE_BUTTONS: &str = ".btn-primary, .btn-add-to-cart";
pub const SEL_TAP_TARGETS: &str = "button, .nav-link";
pub const SEL_AOS: &str = "[data-aos]";
pub const RIPPLE_LIFETIME_MS: u32 = 600;
/// Marks the injected keyframes so a re-boot does not add them again.
pub const RIPPLE_STYLE_ID: &str = "ripple-keyframes";
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const AOS_REFRESH_DELAY_MS: u32 = 100;
pub const SERVICE_WORKER_URL: &str = "/sw.js";

// Contact form
pub const ID_CONTACT_FORM: &str = "contactForm";
pub const SEL_SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
