//! Intersection observers for reveals, counters and word reveal

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;
use web_sys::Element;

use super::PageRoot;
use crate::core::counter::{COUNTED_CLASS, COUNTER_ATTRIBUTE, animate_counter, parse_target};
use crate::core::reveal::{
    ANIMATE_IN_CLASS, BAR_HIDDEN_STYLE, BAR_SHOWN_STYLE, DIFF_BAR_SELECTOR,
    INITIAL_REVEAL_DELAY_MS, RevealDecision, RevealEffect, RevealGroup, RevealTracker, Targets,
    is_above_fold, stagger_delay,
};
use crate::core::scheduler::{Scheduler, TaskId};
use crate::core::words::render_words;
use crate::core::{Behavior, EffectGroup};
use crate::ui::dom::{self, Observer};

/// One [`RevealGroup`] bound to a live `IntersectionObserver`
pub struct RevealObserver {
    group: RevealGroup,
    observer: Option<Observer>,
}

impl RevealObserver {
    pub fn new(group: RevealGroup) -> Self {
        Self {
            group,
            observer: None,
        }
    }
}

impl Behavior<PageRoot> for RevealObserver {
    fn name(&self) -> &'static str {
        self.group.name
    }

    fn group(&self) -> EffectGroup {
        self.group.group
    }

    fn attach(&mut self, root: &PageRoot) {
        let targets = resolve_targets(root, self.group.targets);
        if targets.is_empty() {
            return;
        }
        prepare_targets(root, &self.group, &targets);

        let effect = self.group.effect;
        let scheduler = root.scheduler.clone();
        let tracker = RefCell::new(RevealTracker::new(self.group.mode));
        let observed = targets.clone();

        let observer = Observer::new(&self.group.options, move |entries, observer| {
            for entry in entries {
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                let decision = tracker.borrow_mut().on_entry(index, entry.is_intersecting());
                if let RevealDecision::Fire { unobserve } = decision {
                    apply_effect(&scheduler, effect, &target);
                    if unobserve {
                        observer.unobserve(&target);
                    }
                }
            }
        });

        let Some(observer) = observer else {
            warn!("IntersectionObserver unavailable, {} disabled", self.group.name);
            return;
        };
        for target in &targets {
            observer.observe(target);
        }
        self.observer = Some(observer);
    }

    fn detach(&mut self) {
        self.observer = None;
    }
}

fn resolve_targets(root: &PageRoot, targets: Targets) -> Vec<Element> {
    match targets {
        Targets::All(selectors) => selectors
            .iter()
            .flat_map(|selector| dom::elements(root.document.query_selector_all(selector)))
            .collect(),
        Targets::ClosestTo { anchor, ancestor } => dom::first(root.document.query_selector(anchor))
            .and_then(|el| el.closest(ancestor).ok().flatten())
            .into_iter()
            .collect(),
    }
}

/// One-time DOM preparation before observing
fn prepare_targets(root: &PageRoot, group: &RevealGroup, targets: &[Element]) {
    match group.effect {
        RevealEffect::Bars { .. } => {
            for bar in dom::elements(root.document.query_selector_all(DIFF_BAR_SELECTOR)) {
                for (property, value) in BAR_HIDDEN_STYLE {
                    dom::set_style(&bar, property, value);
                }
            }
        }
        _ if group.group == EffectGroup::WordReveal => {
            for target in targets {
                target.set_inner_html(&render_words(&target.inner_html()));
            }
        }
        _ => {}
    }
}

fn apply_effect(scheduler: &Rc<dyn Scheduler>, effect: RevealEffect, target: &Element) {
    match effect {
        RevealEffect::AddClass(class) => dom::add_class(target, class),
        RevealEffect::AnimateWithCounters => {
            dom::add_class(target, ANIMATE_IN_CLASS);
            let selector = format!("[{COUNTER_ATTRIBUTE}]");
            let mut counters = dom::elements(target.query_selector_all(&selector));
            if target.has_attribute(COUNTER_ATTRIBUTE) {
                counters.push(target.clone());
            }
            for counter in counters {
                start_counter(scheduler, counter);
            }
        }
        RevealEffect::Cascade {
            children,
            class,
            step_ms,
            include_target,
        } => {
            if include_target {
                dom::add_class(target, class);
            }
            for (index, child) in dom::elements(target.query_selector_all(children))
                .into_iter()
                .enumerate()
            {
                scheduler.schedule_once(
                    stagger_delay(index, step_ms),
                    Box::new(move || dom::add_class(&child, class)),
                );
            }
        }
        RevealEffect::Bars { step_ms } => {
            for (index, bar) in dom::elements(target.query_selector_all(DIFF_BAR_SELECTOR))
                .into_iter()
                .enumerate()
            {
                scheduler.schedule_once(
                    stagger_delay(index, step_ms),
                    Box::new(move || {
                        for (property, value) in BAR_SHOWN_STYLE {
                            dom::set_style(&bar, property, value);
                        }
                    }),
                );
            }
        }
        RevealEffect::Animate { child, animation } => {
            if let Some(child) = dom::first(target.query_selector(child)) {
                dom::set_style(&child, "animation", animation);
            }
        }
    }
}

/// Count up once; the `counted` class keeps later intersections from restarting it
fn start_counter(scheduler: &Rc<dyn Scheduler>, counter: Element) {
    if counter.class_list().contains(COUNTED_CLASS) {
        return;
    }
    let Some(target) = counter
        .get_attribute(COUNTER_ATTRIBUTE)
        .as_deref()
        .and_then(parse_target)
    else {
        return;
    };
    dom::add_class(&counter, COUNTED_CLASS);
    animate_counter(scheduler.clone(), target, move |value| {
        counter.set_text_content(Some(&value.to_string()));
    });
}

/// Load-time pass marking `[data-animate]` elements already on screen
#[derive(Default)]
pub struct InitialReveal {
    scheduler: Option<Rc<dyn Scheduler>>,
    pending: Option<TaskId>,
}

impl Behavior<PageRoot> for InitialReveal {
    fn name(&self) -> &'static str {
        "initial-reveal"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::Reveal
    }

    fn attach(&mut self, root: &PageRoot) {
        let window = root.window.clone();
        let document = root.document.clone();
        let id = root.scheduler.schedule_once(
            INITIAL_REVEAL_DELAY_MS,
            Box::new(move || {
                let viewport_height = dom::viewport_height(&window);
                for element in dom::elements(document.query_selector_all("[data-animate]")) {
                    if is_above_fold(element.get_bounding_client_rect().top(), viewport_height) {
                        dom::add_class(&element, ANIMATE_IN_CLASS);
                    }
                }
            }),
        );
        self.scheduler = Some(root.scheduler.clone());
        self.pending = Some(id);
    }

    fn detach(&mut self) {
        if let (Some(scheduler), Some(id)) = (self.scheduler.take(), self.pending.take()) {
            scheduler.cancel(id);
        }
    }
}
