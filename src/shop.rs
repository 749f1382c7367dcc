use crate::anim::{Animator, StyleProp};
use crate::constants::*;
use crate::core::{added_message, quick_view_html, Cart, Ease, Motion};
use crate::dom;
use crate::events::{listen, ListenerHandle, Listeners};
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Product cards: add-to-cart, the cart badge, toasts and quick view.
pub struct Shop {
    document: web::Document,
    animator: Animator,
    cart: RefCell<Cart>,
    badge: RefCell<Option<web::HtmlElement>>,
}

impl Shop {
    pub fn new(document: web::Document, animator: Animator) -> Rc<Self> {
        Rc::new(Self {
            document,
            animator,
            cart: RefCell::new(Cart::new()),
            badge: RefCell::new(None),
        })
    }

    pub fn wire(self: &Rc<Self>, listeners: &mut Listeners) {
        for button in dom::query_all(&self.document, SEL_ADD_TO_CART) {
            let shop = self.clone();
            let btn = button.clone();
            listeners.push(listen(&button, "click", move |_ev| shop.add_to_cart(&btn)));
            listeners.push(listen(&button, "mouseenter", |_ev| {
                log::debug!("[cart] button hovered");
            }));
        }

        for button in dom::query_all(&self.document, SEL_QUICK_VIEW) {
            let shop = self.clone();
            listeners.push(listen(&button, "click", move |ev| {
                ev.stop_propagation();
                if let Some(card) = dom::event_closest(&ev, SEL_PRODUCT_CARD) {
                    shop.show_quick_view(&card);
                }
            }));
        }

        for card in dom::query_all(&self.document, SEL_PRODUCT_CARD) {
            let hovered = card.clone();
            listeners.push(listen(&card, "mouseenter", move |_ev| {
                dom::set_style(&hovered, "transform", CARD_HOVER_TRANSFORM);
            }));
            let left = card.clone();
            listeners.push(listen(&card, "mouseleave", move |_ev| {
                dom::set_style(&left, "transform", CARD_REST_TRANSFORM);
            }));
        }
    }

    fn add_to_cart(self: &Rc<Self>, button: &web::HtmlElement) {
        let product = button.get_attribute(ATTR_PRODUCT).unwrap_or_default();
        let count = self.cart.borrow_mut().add(product.clone());
        log::info!("[cart] added {:?} ({} items)", product, count);

        self.show_notification(&added_message(&product));
        self.animator.play(
            button,
            Motion::new(StyleProp::Scale, BUTTON_PULSE_SCALE, PULSE_SEC)
                .from(1.0)
                .yoyo(),
            None,
        );
        self.update_badge(count);
    }

    fn show_notification(self: &Rc<Self>, message: &str) {
        let Some(toast) = dom::create_html(&self.document, "div") else {
            return;
        };
        toast.set_class_name("cart-notification");
        toast.set_text_content(Some(message));
        _ = toast.style().set_css_text(TOAST_CSS);
        let Some(body) = self.document.body() else {
            return;
        };
        if body.append_child(&toast).is_err() {
            return;
        }

        self.animator.play(
            &toast,
            Motion::new(StyleProp::TranslateXPct, 0.0, TOAST_SLIDE_SEC)
                .from(100.0)
                .ease(Ease::back_out()),
            None,
        );
        self.animator.play(
            &toast,
            Motion::new(StyleProp::Opacity, 1.0, TOAST_SLIDE_SEC).from(0.0),
            None,
        );

        let animator = self.animator.clone();
        Timeout::new(TOAST_HOLD_MS, move || {
            animator.play(
                &toast,
                Motion::new(StyleProp::Opacity, 0.0, TOAST_SLIDE_SEC),
                None,
            );
            let leaving = toast.clone();
            let cleanup = animator.clone();
            animator.play(
                &toast,
                Motion::new(StyleProp::TranslateXPct, 100.0, TOAST_SLIDE_SEC).ease(Ease::back_in()),
                Some(Box::new(move || {
                    leaving.remove();
                    cleanup.forget(&leaving);
                })),
            );
        })
        .forget();
    }

    fn update_badge(&self, count: usize) {
        let existing = self.badge.borrow().clone();
        match existing {
            Some(badge) => {
                badge.set_text_content(Some(&count.to_string()));
                self.animator.play(
                    &badge,
                    Motion::new(StyleProp::Scale, BADGE_PULSE_SCALE, PULSE_SEC)
                        .from(1.0)
                        .yoyo(),
                    None,
                );
            }
            None => {
                let Some(order) = dom::query(&self.document, SEL_ORDER_BUTTON) else {
                    log::warn!("[cart] no {} to hold the badge", SEL_ORDER_BUTTON);
                    return;
                };
                let Some(badge) = dom::create_html(&self.document, "span") else {
                    return;
                };
                badge.set_class_name("cart-count");
                badge.set_text_content(Some(&count.to_string()));
                _ = badge.style().set_css_text(BADGE_CSS);
                dom::set_style(&order, "position", "relative");
                if order.append_child(&badge).is_ok() {
                    *self.badge.borrow_mut() = Some(badge);
                }
            }
        }
    }

    fn show_quick_view(self: &Rc<Self>, card: &web::HtmlElement) {
        let title = card
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|h| h.text_content())
            .unwrap_or_default();
        let Some(modal) = dom::create_html(&self.document, "div") else {
            return;
        };
        modal.set_class_name("quick-view-modal");
        modal.set_inner_html(&quick_view_html(&title));
        _ = modal.style().set_css_text(MODAL_CSS);
        let Some(body) = self.document.body() else {
            return;
        };
        if body.append_child(&modal).is_err() {
            return;
        }
        self.animator.play(
            &modal,
            Motion::new(StyleProp::Opacity, 1.0, MODAL_FADE_SEC).from(0.0),
            None,
        );

        // The modal's listener lives as long as the modal; it is released
        // when the fade-out completes.
        let slot: Rc<RefCell<Option<ListenerHandle>>> = Rc::new(RefCell::new(None));
        let animator = self.animator.clone();
        let backdrop = modal.clone();
        let handle_slot = slot.clone();
        let closing_started = Rc::new(Cell::new(false));
        let handle = listen(&modal, "click", move |ev| {
            if closing_started.get() {
                return;
            }
            let Some(target) = dom::event_element(&ev) else {
                return;
            };
            let on_backdrop = target.unchecked_ref::<web::HtmlElement>() == &backdrop;
            if !on_backdrop && !target.class_list().contains("close-modal") {
                return;
            }
            closing_started.set(true);
            let closing = backdrop.clone();
            let cleanup = animator.clone();
            let release = handle_slot.clone();
            animator.play(
                &backdrop,
                Motion::new(StyleProp::Opacity, 0.0, MODAL_FADE_SEC),
                Some(Box::new(move || {
                    closing.remove();
                    cleanup.forget(&closing);
                    release.borrow_mut().take();
                })),
            );
        });
        *slot.borrow_mut() = Some(handle);
        log::info!("[cart] quick view for {:?}", title);
    }
}
