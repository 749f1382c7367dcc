//! Host event plumbing: listener registration with teardown, geometry
//! sampling for scroll notifications and the debounced resize signal.

use crate::core::ScrollState;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered event listener. Dropping the handle unregisters it.
pub struct ListenerHandle {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> ListenerHandle {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        log::warn!("[events] could not listen for {}: {:?}", kind, e);
    }
    ListenerHandle {
        target: target.clone(),
        kind,
        closure,
    }
}

/// Every listener owned by the page, released together on teardown.
#[derive(Default)]
pub struct Listeners {
    handles: Vec<ListenerHandle>,
}

impl Listeners {
    pub fn push(&mut self, handle: ListenerHandle) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

/// Current scroll geometry of the window.
pub fn read_scroll_state(window: &web::Window, document: &web::Document) -> ScrollState {
    let offset = window.scroll_y().unwrap_or(0.0).max(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(0.0);
    let doc_height = document
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0)
        .max(0);
    ScrollState::new(offset.round() as u32, viewport.round() as u32, doc_height as u32)
}

/// Runs `action` once resizing has been quiet for `quiet_ms`. Each new
/// resize notification cancels the pending run and schedules a fresh one.
pub struct Debouncer {
    quiet_ms: u32,
    pending: RefCell<Option<Timeout>>,
    action: Rc<dyn Fn()>,
}

impl Debouncer {
    pub fn new(quiet_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            quiet_ms,
            pending: RefCell::new(None),
            action: Rc::new(action),
        }
    }

    pub fn poke(&self) {
        let action = self.action.clone();
        // replacing the old timeout drops it, which clears it
        *self.pending.borrow_mut() = Some(Timeout::new(self.quiet_ms, move || action()));
    }
}
