use crate::anim::{Animator, StyleProp};
use crate::constants::*;
use crate::core::{
    Ease, Motion, PourCommand, PourConfig, PourController, PourParameters, PourTarget, ScrollState,
    Timeline,
};
use crate::dom;
use crate::events::{listen, read_scroll_state, Listeners};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Elements the pour writes to, located once at start-up.
pub struct PourElements {
    pub glass: web::HtmlElement,
    pub milk_level: web::HtmlElement,
    pub stream: web::HtmlElement,
    pub container_liquid: web::HtmlElement,
    pub drip_host: Option<web::HtmlElement>,
}

impl PourElements {
    pub fn locate(document: &web::Document) -> anyhow::Result<Self> {
        let need = |el: Option<web::HtmlElement>, what: &str| {
            el.ok_or_else(|| anyhow::anyhow!("missing {}", what))
        };
        Ok(Self {
            glass: need(dom::query(document, SEL_GLASS), SEL_GLASS)?,
            milk_level: need(dom::by_id(document, ID_MILK_LEVEL), ID_MILK_LEVEL)?,
            stream: need(dom::by_id(document, ID_MILK_POUR), ID_MILK_POUR)?,
            container_liquid: need(
                dom::query(document, SEL_CONTAINER_LIQUID),
                SEL_CONTAINER_LIQUID,
            )?,
            drip_host: dom::query(document, SEL_POUR_HOST),
        })
    }

    fn target(&self, target: PourTarget) -> (&web::HtmlElement, StyleProp) {
        match target {
            PourTarget::Glass => (&self.glass, StyleProp::Tilt),
            PourTarget::MilkLevel => (&self.milk_level, StyleProp::HeightPct),
            PourTarget::Stream => (&self.stream, StyleProp::HeightPx),
            PourTarget::ContainerFill => (&self.container_liquid, StyleProp::HeightPct),
        }
    }

    fn all(&self) -> [&web::HtmlElement; 4] {
        [
            &self.glass,
            &self.milk_level,
            &self.stream,
            &self.container_liquid,
        ]
    }
}

/// The pour on the page: controller state plus the elements it drives.
pub struct PourScene {
    document: web::Document,
    elements: PourElements,
    animator: Animator,
    controller: RefCell<PourController>,
    replay_timers: RefCell<Vec<Timeout>>,
}

impl PourScene {
    pub fn new(document: web::Document, elements: PourElements, animator: Animator) -> Rc<Self> {
        let scene = Rc::new(Self {
            document,
            elements,
            animator,
            controller: RefCell::new(PourController::new(PourConfig::default(), POUR_RNG_SEED)),
            replay_timers: RefCell::new(Vec::new()),
        });
        scene.reset();
        scene
    }

    pub fn reset(self: &Rc<Self>) {
        let mut out = Vec::new();
        self.controller.borrow_mut().reset(&mut out);
        self.run(out);
    }

    pub fn on_scroll(self: &Rc<Self>, state: ScrollState) {
        let mut out = Vec::new();
        self.controller.borrow_mut().on_scroll(state, &mut out);
        self.run(out);
    }

    /// Manual pour triggered by the add-to-cart action.
    pub fn replay(self: &Rc<Self>) {
        let mut out = Vec::new();
        self.controller.borrow_mut().begin_replay(&mut out);
        self.run(out);
    }

    /// Cancel pending replay stages and settle running pour tweens. Their
    /// callbacks hold the scene, so this is what lets it be freed.
    pub fn shutdown(&self) {
        // dropping a pending Timeout clears it
        drop(self.replay_timers.take());
        for el in self.elements.all() {
            self.animator.stop(el);
        }
        log::debug!("[pour] shut down");
    }

    // Commands run with the controller borrow released: completions call back into it.
    fn run(self: &Rc<Self>, commands: Vec<PourCommand>) {
        for cmd in commands {
            match cmd {
                PourCommand::Reset => self.apply(&PourParameters::RESET),
                PourCommand::Apply(params) => self.apply(&params),
                PourCommand::SpawnDrip => self.spawn_drip(),
                PourCommand::StartSmoothing {
                    to_px,
                    duration_sec,
                    ease,
                } => {
                    let scene = self.clone();
                    self.animator.play(
                        &self.elements.stream,
                        Motion::new(StyleProp::HeightPx, to_px, duration_sec).ease(ease),
                        Some(Box::new(move || {
                            scene.controller.borrow_mut().smoothing_finished();
                        })),
                    );
                }
                PourCommand::PlayReplay {
                    timeline,
                    generation,
                } => self.play_replay(timeline, generation),
            }
        }
    }

    fn apply(&self, p: &PourParameters) {
        let e = &self.elements;
        self.animator.set(&e.glass, StyleProp::Tilt, p.glass_rotation_deg);
        self.animator
            .set(&e.milk_level, StyleProp::HeightPct, p.milk_level_pct);
        self.animator
            .set(&e.stream, StyleProp::HeightPx, p.stream_length_px);
        self.animator.set(&e.stream, StyleProp::Tilt, p.glass_rotation_deg);
        self.animator
            .set(&e.container_liquid, StyleProp::HeightPct, p.container_fill_pct);
    }

    fn play_replay(self: &Rc<Self>, timeline: Timeline<PourTarget>, generation: u32) {
        // a restarted replay owns the elements from a clean slate
        self.replay_timers.borrow_mut().clear();
        for el in self.elements.all() {
            self.animator.stop(el);
        }
        self.apply(&PourParameters::RESET);

        let mut timers = Vec::with_capacity(timeline.stages().len() + 1);
        for stage in timeline.stages().iter().copied() {
            let scene = self.clone();
            timers.push(Timeout::new(secs_to_ms(stage.start_sec), move || {
                let (el, prop) = scene.elements.target(stage.target);
                scene.animator.play(
                    el,
                    Motion::new(prop, stage.to, stage.duration_sec).ease(stage.ease),
                    None,
                );
            }));
        }
        let scene = self.clone();
        timers.push(Timeout::new(secs_to_ms(timeline.duration_sec()), move || {
            scene.controller.borrow_mut().replay_finished(generation);
            log::debug!("[pour] replay {} finished", generation);
        }));
        *self.replay_timers.borrow_mut() = timers;
        log::info!(
            "[pour] replay {} started ({:.1}s)",
            generation,
            timeline.duration_sec()
        );
    }

    fn spawn_drip(&self) {
        let Some(host) = self.elements.drip_host.as_ref() else {
            return;
        };
        let Some(drip) = dom::create_html(&self.document, "div") else {
            return;
        };
        let stream = &self.elements.stream;
        drip.set_class_name("drip");
        let top = stream.offset_top() + stream.offset_height();
        let left = stream.offset_left() + DRIP_STREAM_INSET_PX;
        _ = drip.style().set_css_text(&format!(
            "{} top: {}px; left: {}px;",
            DRIP_CSS, top, left
        ));
        if host.append_child(&drip).is_err() {
            return;
        }

        self.animator.play(
            &drip,
            Motion::new(StyleProp::Opacity, 0.0, DRIP_FALL_SEC).from(1.0),
            None,
        );
        let animator = self.animator.clone();
        let falling = drip.clone();
        self.animator.play(
            &drip,
            Motion::new(StyleProp::TranslateYPx, DRIP_FALL_PX, DRIP_FALL_SEC)
                .from(0.0)
                .ease(Ease::Power2In),
            Some(Box::new(move || {
                falling.remove();
                animator.forget(&falling);
            })),
        );
    }
}

#[inline]
fn secs_to_ms(sec: f64) -> u32 {
    (sec * 1000.0).round().max(0.0) as u32
}

impl PourScene {
    /// Subscribe the scene to scroll, resize and add-to-cart clicks.
    pub fn wire(self: &Rc<Self>, window: &web::Window, listeners: &mut Listeners) {
        let scene = self.clone();
        let wnd = window.clone();
        let doc = self.document.clone();
        listeners.push(listen(window, "scroll", move |_ev| {
            scene.on_scroll(read_scroll_state(&wnd, &doc));
        }));

        let scene = self.clone();
        listeners.push(listen(window, "resize", move |_ev| scene.reset()));

        let scene = self.clone();
        listeners.push(listen(&self.document, "click", move |ev| {
            if dom::event_closest(&ev, SEL_ADD_TO_CART).is_some() {
                scene.replay();
            }
        }));
    }
}
