use wasm_bindgen::JsCast;
use web_sys as web;

/// Whether the document is still parsing (before `DOMContentLoaded`).
pub fn is_loading(document: &web::Document) -> bool {
    js_sys::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s == "loading")
        .unwrap_or(false)
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All matching elements in document order; non-HTML nodes are skipped.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            log::warn!("bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn create_html(document: &web::Document, tag: &str) -> Option<web::HtmlElement> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Element the event was dispatched to, if it is one.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn event_closest(ev: &web::Event, selector: &str) -> Option<web::HtmlElement> {
    event_element(ev)
        .and_then(|el| el.closest(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
