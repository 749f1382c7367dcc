//! Small page effects: parallax, navbar state, ripples, touch sizing, the
//! resize refresh and service-worker registration.

use crate::constants::*;
use crate::core::constants::TOUCH_TARGET_MIN_PX;
use crate::core::{navbar_scrolled, parallax_offset_px, ripple_geometry};
use crate::dom;
use crate::events::{listen, ListenerHandle};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Scroll handler for the floating decorations and the navbar.
pub fn wire_scroll_effects(window: &web::Window, document: &web::Document) -> ListenerHandle {
    let floating = dom::query_all(document, SEL_FLOATING);
    let navbar = dom::query(document, SEL_NAVBAR);
    let wnd = window.clone();
    listen(window, "scroll", move |_ev| {
        let y = dom::scroll_y(&wnd);
        for (i, el) in floating.iter().enumerate() {
            let offset = parallax_offset_px(y, i);
            dom::set_style(el, "transform", &format!("translateY({}px)", offset));
        }
        if let Some(nav) = &navbar {
            let cl = nav.class_list();
            _ = if navbar_scrolled(y) {
                cl.add_1("scrolled")
            } else {
                cl.remove_1("scrolled")
            };
        }
    })
}

/// Click ripples on primary and add-to-cart buttons.
pub fn wire_ripples(document: &web::Document) -> Vec<ListenerHandle> {
    inject_ripple_keyframes(document);
    dom::query_all(document, SEL_RIPPLE_BUTTONS)
        .into_iter()
        .map(|button| {
            let doc = document.clone();
            let host = button.clone();
            listen(&button, "click", move |ev| {
                if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
                    spawn_ripple(&doc, &host, mouse);
                }
            })
        })
        .collect()
}

fn inject_ripple_keyframes(document: &web::Document) {
    if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        return;
    };
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    _ = head.append_child(&style);
}

fn spawn_ripple(document: &web::Document, button: &web::HtmlElement, ev: &web::MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let r = ripple_geometry(
        (rect.left(), rect.top(), rect.width(), rect.height()),
        ev.client_x() as f64,
        ev.client_y() as f64,
    );
    let Some(ripple) = dom::create_html(document, "span") else {
        return;
    };
    _ = ripple.style().set_css_text(&format!(
        "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.7); \
         transform: scale(0); animation: ripple 0.6s linear; \
         width: {size}px; height: {size}px; top: {top}px; left: {left}px;",
        size = r.size,
        top = r.top,
        left = r.left
    ));
    if button.append_child(&ripple).is_ok() {
        Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    }
}

pub fn is_touch_device(window: &web::Window) -> bool {
    let has_touch_events = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart"))
        .unwrap_or(false);
    has_touch_events || window.navigator().max_touch_points() > 0
}

/// Tag the body and enlarge tap targets on touch screens.
pub fn apply_touch_sizing(window: &web::Window, document: &web::Document) {
    if !is_touch_device(window) {
        return;
    }
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("touch-device");
    }
    let min = format!("{}px", TOUCH_TARGET_MIN_PX);
    let targets = dom::query_all(document, SEL_TAP_TARGETS);
    for el in &targets {
        dom::set_style(el, "min-height", &min);
        dom::set_style(el, "min-width", &min);
    }
    log::info!("[ux] touch device: resized {} tap targets", targets.len());
}

/// Hide scroll-reveal elements again and ask the reveal library to
/// recompute them shortly after.
pub fn refresh_reveal_animations(document: &web::Document) {
    for el in dom::query_all(document, SEL_AOS) {
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateY(30px)");
    }
    Timeout::new(AOS_REFRESH_DELAY_MS, call_aos_refresh).forget();
}

fn call_aos_refresh() {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(aos) = js_sys::Reflect::get(&window, &JsValue::from_str("AOS")) else {
        return;
    };
    if aos.is_undefined() || aos.is_null() {
        return;
    }
    let aos: js_sys::Object = aos.unchecked_into();
    let refresh = js_sys::Reflect::get(&aos, &JsValue::from_str("refresh"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(refresh) = refresh {
        if let Err(e) = refresh.call0(&aos) {
            log::warn!("[ux] AOS.refresh failed: {:?}", e);
        }
    }
}

/// Register the offline worker once the page has loaded, when supported.
pub fn wire_service_worker(window: &web::Window) -> Option<ListenerHandle> {
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        return None;
    }
    Some(listen(window, "load", move |_ev| {
        let container = navigator.service_worker();
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(container.register(SERVICE_WORKER_URL)).await {
                Ok(reg) => log::info!("[sw] registered: {:?}", reg),
                Err(e) => log::warn!("[sw] registration failed: {:?}", e),
            }
        });
    }))
}
