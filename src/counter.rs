use crate::constants::{ATTR_COUNT, COUNTER_VISIBLE_THRESHOLD, SEL_COUNTER};
use crate::core::{counter_tick_ms, CounterAnimation};
use crate::dom;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Watches `data-count` elements and starts each one's count-up the first
/// time it is at least half visible. Disconnects when dropped.
pub struct CounterWatch {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for CounterWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn watch_counters(document: &web::Document) -> anyhow::Result<Option<CounterWatch>> {
    let counters = dom::query_all(document, SEL_COUNTER);
    if counters.is_empty() {
        return Ok(None);
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<web::HtmlElement>() {
                    start_count(el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(COUNTER_VISIBLE_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for el in &counters {
        observer.observe(el);
    }
    log::info!("[counter] watching {} counters", counters.len());
    Ok(Some(CounterWatch {
        observer,
        _callback: callback,
    }))
}

fn start_count(el: web::HtmlElement) {
    let value = el.get_attribute(ATTR_COUNT).unwrap_or_default();
    schedule_tick(el, CounterAnimation::from_attribute(&value));
}

fn schedule_tick(el: web::HtmlElement, mut anim: CounterAnimation) {
    Timeout::new(counter_tick_ms(), move || {
        let shown = anim.tick();
        el.set_text_content(Some(&shown.to_string()));
        if !anim.is_finished() {
            schedule_tick(el, anim);
        }
    })
    .forget();
}
