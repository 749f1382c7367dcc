#![cfg(target_arch = "wasm32")]
use crate::anim::Animator;
use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::events::{listen, Debouncer, Listeners};
use crate::pour::{PourElements, PourScene};
use crate::shop::Shop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod anim;
mod constants;
mod core;
mod counter;
mod dom;
mod events;
mod form;
mod pour;
mod shop;
mod ux;

/// Everything the page set up. Dropping it unregisters every listener,
/// disconnects the counter observer and shuts the pour scene down.
struct App {
    listeners: Listeners,
    _counters: Option<counter::CounterWatch>,
    pour: Option<Rc<PourScene>>,
    _shop: Rc<Shop>,
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(pour) = &self.pour {
            pour.shutdown();
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("milk-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if dom::is_loading(&document) {
        let ready = Closure::once_into_js(move || boot());
        document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
    } else {
        boot();
    }
    wire_lifecycle(&window);
    Ok(())
}

fn boot() {
    match init() {
        Ok(app) => {
            log::info!("[app] ready, {} listeners", app.listeners.len());
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        }
        Err(e) => log::error!("init error: {:?}", e),
    }
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let animator = Animator::new();
    let mut listeners = Listeners::default();

    let pour = match PourElements::locate(&document) {
        Ok(elements) => {
            let scene = PourScene::new(document.clone(), elements, animator.clone());
            scene.wire(&window, &mut listeners);
            Some(scene)
        }
        Err(e) => {
            log::warn!("[pour] disabled: {}", e);
            None
        }
    };

    let counters = counter::watch_counters(&document).unwrap_or_else(|e| {
        log::warn!("[counter] disabled: {}", e);
        None
    });

    let shop = Shop::new(document.clone(), animator);
    shop.wire(&mut listeners);

    listeners.push(ux::wire_scroll_effects(&window, &document));
    for handle in ux::wire_ripples(&document) {
        listeners.push(handle);
    }
    if let Some(handle) = form::wire_contact_form(&document) {
        listeners.push(handle);
    }
    ux::apply_touch_sizing(&window, &document);

    let doc_for_resize = document.clone();
    let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS, move || {
        ux::refresh_reveal_animations(&doc_for_resize);
    });
    listeners.push(listen(&window, "resize", move |_ev| debouncer.poke()));

    if let Some(handle) = ux::wire_service_worker(&window) {
        listeners.push(handle);
    }

    Ok(App {
        listeners,
        _counters: counters,
        pour,
        _shop: shop,
    })
}

// Tear down on pagehide; rebuild if the page comes back from the
// back/forward cache.
fn wire_lifecycle(window: &web::Window) {
    let hide = Closure::wrap(Box::new(move || {
        if APP.with(|slot| slot.borrow_mut().take()).is_some() {
            log::info!("[app] torn down");
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", hide.as_ref().unchecked_ref());
    hide.forget();

    let show = Closure::wrap(Box::new(move || {
        if APP.with(|slot| slot.borrow().is_none()) {
            boot();
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pageshow", show.as_ref().unchecked_ref());
    show.forget();
}
