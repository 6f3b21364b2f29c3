//! Pointer-driven effects: spring hover lift, button glow, floating cards

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::PageRoot;
use crate::core::motion::floating_card_transform;
use crate::core::scheduler::{Scheduler, TaskId};
use crate::core::spring::{
    BUTTON_HOVER, BUTTON_SPRING, CARD_HOVER, CARD_SPRING, HoverSpring, Pose, REST, SpringConfig,
};
use crate::core::{Behavior, EffectGroup};
use crate::ui::dom::{self, Listener};

const BUTTON_SELECTOR: &str = ".btn";
const CARD_SELECTOR: &str = ".glass-card, .algo-card, .step-card, .stat-card";
const FLOATING_CARD_SELECTOR: &str = ".floating-card";

/// Frame gap assumed for the first step after a spring wakes up
const FIRST_STEP_S: f64 = 1.0 / 60.0;

/// Spring state for one hovered element
struct SpringDriver {
    element: Element,
    spring: RefCell<HoverSpring>,
    last_frame: Cell<Option<f64>>,
    running: Cell<bool>,
    scheduler: Rc<dyn Scheduler>,
}

impl SpringDriver {
    fn aim(self: &Rc<Self>, pose: Pose) {
        self.spring.borrow_mut().set_target(pose);
        if !self.running.replace(true) {
            self.last_frame.set(None);
            self.request();
        }
    }

    fn request(self: &Rc<Self>) {
        let driver = self.clone();
        self.scheduler
            .request_frame(Box::new(move |timestamp| driver.step(timestamp)));
    }

    fn step(self: &Rc<Self>, timestamp: f64) {
        let dt = self
            .last_frame
            .replace(Some(timestamp))
            .map_or(FIRST_STEP_S, |last| (timestamp - last) / 1000.0);
        let moving = self.spring.borrow_mut().step(dt);
        let pose = self.spring.borrow().pose();
        dom::set_style(&self.element, "transform", &pose.transform());
        if moving {
            self.request();
        } else {
            self.running.set(false);
        }
    }
}

#[derive(Default)]
pub struct SpringHover {
    listeners: Vec<Listener>,
}

impl SpringHover {
    fn bind(&mut self, root: &PageRoot, selector: &str, config: SpringConfig, hover: Pose) {
        for element in dom::elements(root.document.query_selector_all(selector)) {
            let driver = Rc::new(SpringDriver {
                element: element.clone(),
                spring: RefCell::new(HoverSpring::new(config)),
                last_frame: Cell::new(None),
                running: Cell::new(false),
                scheduler: root.scheduler.clone(),
            });

            let on_enter = driver.clone();
            self.listeners.push(Listener::new(&element, "mouseenter", move |_| {
                on_enter.aim(hover);
            }));
            let on_leave = driver;
            self.listeners.push(Listener::new(&element, "mouseleave", move |_| {
                on_leave.aim(REST);
            }));
        }
    }
}

impl Behavior<PageRoot> for SpringHover {
    fn name(&self) -> &'static str {
        "spring-hover"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::SpringHover
    }

    fn attach(&mut self, root: &PageRoot) {
        self.bind(root, BUTTON_SELECTOR, BUTTON_SPRING, BUTTON_HOVER);
        self.bind(root, CARD_SELECTOR, CARD_SPRING, CARD_HOVER);
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}

/// Tracks the pointer inside buttons for the CSS glow
#[derive(Default)]
pub struct ButtonGlow {
    listeners: Vec<Listener>,
}

impl Behavior<PageRoot> for ButtonGlow {
    fn name(&self) -> &'static str {
        "button-glow"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::Pointer
    }

    fn attach(&mut self, root: &PageRoot) {
        for button in dom::elements(root.document.query_selector_all(BUTTON_SELECTOR)) {
            let target = button.clone();
            self.listeners.push(Listener::new(&button, "mouseenter", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = target.get_bounding_client_rect();
                let x = f64::from(event.client_x()) - rect.left();
                let y = f64::from(event.client_y()) - rect.top();
                dom::set_style(&target, "--mouse-x", &format!("{x}px"));
                dom::set_style(&target, "--mouse-y", &format!("{y}px"));
            }));
        }
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}

/// Idle bobbing of the hero's floating cards, one update per frame
#[derive(Default)]
pub struct FloatingCards {
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<TaskId>>>,
    scheduler: Option<Rc<dyn Scheduler>>,
}

impl Behavior<PageRoot> for FloatingCards {
    fn name(&self) -> &'static str {
        "floating-cards"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::FloatingCards
    }

    fn attach(&mut self, root: &PageRoot) {
        let cards = dom::elements(root.document.query_selector_all(FLOATING_CARD_SELECTOR));
        if cards.is_empty() {
            return;
        }
        self.active.set(true);
        self.scheduler = Some(root.scheduler.clone());
        request_float_frame(
            root.scheduler.clone(),
            Rc::new(cards),
            self.active.clone(),
            self.pending.clone(),
        );
    }

    fn detach(&mut self) {
        self.active.set(false);
        if let (Some(scheduler), Some(id)) = (self.scheduler.take(), self.pending.take()) {
            scheduler.cancel(id);
        }
    }
}

fn request_float_frame(
    scheduler: Rc<dyn Scheduler>,
    cards: Rc<Vec<Element>>,
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<TaskId>>>,
) {
    let next = scheduler.clone();
    let slot = pending.clone();
    let id = scheduler.request_frame(Box::new(move |timestamp| {
        slot.set(None);
        if !active.get() {
            return;
        }
        let time_s = timestamp / 1000.0;
        for (index, card) in cards.iter().enumerate() {
            dom::set_style(card, "transform", &floating_card_transform(time_s, index));
        }
        request_float_frame(next, cards, active, slot);
    }));
    pending.set(Some(id));
}
