use crate::constants::{ID_CONTACT_FORM, SEL_SUBMIT_BUTTON};
use crate::core::{Submission, SENDING_LABEL, SENT_BACKGROUND, SENT_LABEL};
use crate::dom;
use crate::events::{listen, ListenerHandle};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mocked contact form: no request is made, the button just walks through
/// sending and success states.
pub fn wire_contact_form(document: &web::Document) -> Option<ListenerHandle> {
    let form = document
        .get_element_by_id(ID_CONTACT_FORM)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())?;
    let submission = Rc::new(RefCell::new(Submission::default()));
    let target = form.clone();
    Some(listen(&form, "submit", move |ev| {
        ev.prevent_default();
        on_submit(&target, &submission);
    }))
}

fn on_submit(form: &web::HtmlFormElement, submission: &Rc<RefCell<Submission>>) {
    let Some(button) = form
        .query_selector(SEL_SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        log::warn!("[form] no submit button");
        return;
    };
    let Some(sending_ms) = submission.borrow_mut().submit(&button.inner_html()) else {
        return;
    };
    button.set_inner_html(SENDING_LABEL);
    button.set_disabled(true);
    log::info!("[form] sending");

    let form = form.clone();
    let submission = submission.clone();
    Timeout::new(sending_ms, move || {
        let Some(success_ms) = submission.borrow_mut().sent() else {
            return;
        };
        button.set_inner_html(SENT_LABEL);
        dom::set_style(&button, "background", SENT_BACKGROUND);
        form.reset();
        log::info!("[form] sent");

        Timeout::new(success_ms, move || {
            if let Some(label) = submission.borrow_mut().finish() {
                button.set_inner_html(&label);
                button.set_disabled(false);
                dom::set_style(&button, "background", "");
            }
        })
        .forget();
    })
    .forget();
}
