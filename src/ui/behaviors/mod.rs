//! DOM bindings for the landing page
//!
//! Each submodule provides [`Behavior`] implementations over [`PageRoot`].
//! [`mount`] builds the full set for the current motion preference and
//! attaches it; [`unmount`] detaches it again.

mod anchors;
mod hover;
mod newsletter;
mod reveal;
mod scroll;
mod typing;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::log;
use web_sys::{Document, Window};

use crate::core::reveal::REVEAL_GROUPS;
use crate::core::{BehaviorSet, MotionPolicy, Scheduler};
use crate::ui::preferences::prefers_reduced_motion;
use crate::ui::scheduler;

pub use anchors::AnchorScroll;
pub use hover::{ButtonGlow, FloatingCards, SpringHover};
pub use newsletter::NewsletterForms;
pub use reveal::{InitialReveal, RevealObserver};
pub use scroll::ScrollEffect;
pub use typing::TypingText;

/// What every behavior attaches to
pub struct PageRoot {
    pub window: Window,
    pub document: Document,
    pub scheduler: Rc<dyn Scheduler>,
}

impl PageRoot {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            scheduler: scheduler::shared(),
        })
    }
}

/// Every landing page behavior, filtered by `policy`
pub fn build_behaviors(policy: MotionPolicy) -> BehaviorSet<PageRoot> {
    let mut set = BehaviorSet::new(policy);

    set.register(ScrollEffect::navbar());
    set.register(ScrollEffect::hero_orbs());
    set.register(ScrollEffect::data_parallax());
    set.register(ScrollEffect::hero_scale());
    set.register(ScrollEffect::scroll_progress());

    for group in REVEAL_GROUPS {
        set.register(RevealObserver::new(group));
    }
    set.register(InitialReveal::default());

    set.register(TypingText::default());
    set.register(FloatingCards::default());
    set.register(SpringHover::default());
    set.register(ButtonGlow::default());
    set.register(AnchorScroll::default());
    set.register(NewsletterForms::default());

    set
}

thread_local! {
    static ACTIVE: RefCell<Option<BehaviorSet<PageRoot>>> = const { RefCell::new(None) };
}

/// Attach all behaviors to the live document, replacing any previous set
pub fn mount() {
    let Some(root) = PageRoot::current() else {
        return;
    };

    unmount();

    let mut set = build_behaviors(MotionPolicy::new(prefers_reduced_motion()));
    if !set.skipped_names().is_empty() {
        log!("Reduced motion: skipping {}", set.skipped_names().join(", "));
    }
    set.attach_all(&root);

    ACTIVE.with(|active| *active.borrow_mut() = Some(set));
}

pub fn unmount() {
    let active = ACTIVE.with(|active| active.borrow_mut().take());
    if let Some(mut set) = active {
        set.detach_all();
    }
}
