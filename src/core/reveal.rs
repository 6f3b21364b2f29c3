//! Intersection-triggered reveals
//!
//! Each [`RevealGroup`] describes one `IntersectionObserver`: which elements
//! it watches, its threshold and margin, whether it unsubscribes after the
//! first hit, and what happens to a target when it scrolls into view. The
//! DOM layer turns a group into a real observer; [`RevealTracker`] decides
//! per entry whether the effect fires.

use std::collections::HashSet;

use super::behavior::EffectGroup;

pub const ANIMATE_IN_CLASS: &str = "animate-in";
pub const WORDS_VISIBLE_CLASS: &str = "words-visible";
/// Delay of the load-time pass over elements already above the fold
pub const INITIAL_REVEAL_DELAY_MS: u32 = 100;

pub const CARD_STAGGER_MS: u32 = 60;
pub const CHILD_STAGGER_MS: u32 = 100;
pub const BAR_STAGGER_MS: u32 = 150;

pub const GRID_SELECTOR: &str = ".bento-grid, .algorithm-grid, .steps-grid, .stats-grid, .faq-grid";
pub const CARD_SELECTOR: &str = ".bento-card, .algo-card, .step-card, .stat-card, .faq-item";
pub const DIFF_BAR_SELECTOR: &str = ".diff-bar";
pub const CURVE_SELECTOR: &str = ".curve-path";
pub const CURVE_ANIMATION: &str = "drawCurve 2s ease-out forwards";

/// Inline styles a difficulty bar starts from and ends at
pub const BAR_HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateX(-20px)"),
    ("transition", "all 0.5s cubic-bezier(0.16, 1, 0.3, 1)"),
];
pub const BAR_SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateX(0)")];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    /// Negative values shrink the viewport from the bottom
    pub bottom_margin_px: i32,
}

impl ObserverOptions {
    pub const fn new(threshold: f64, bottom_margin_px: i32) -> Self {
        Self {
            threshold,
            bottom_margin_px,
        }
    }

    /// CSS `rootMargin` string
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Stop observing a target after its first reveal
    Once,
    /// Keep observing; the effect itself must be idempotent
    Recount,
}

/// Which elements a group observes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targets {
    /// Every element matching the selectors, in order
    All(&'static [&'static str]),
    /// The closest `ancestor` of the first element matching `anchor`
    ClosestTo {
        anchor: &'static str,
        ancestor: &'static str,
    },
}

/// What happens to an observed target when it becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    AddClass(&'static str),
    /// Add `animate-in` and start every uncounted counter at or inside the target
    AnimateWithCounters,
    /// Add `class` to the matching descendants one after another
    Cascade {
        children: &'static str,
        class: &'static str,
        step_ms: u32,
        include_target: bool,
    },
    /// Slide the difficulty bars inside the target in one after another
    Bars { step_ms: u32 },
    /// Start a CSS animation on a descendant
    Animate {
        child: &'static str,
        animation: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGroup {
    pub name: &'static str,
    pub group: EffectGroup,
    pub targets: Targets,
    pub options: ObserverOptions,
    pub mode: RevealMode,
    pub effect: RevealEffect,
}

pub const ANIMATE: RevealGroup = RevealGroup {
    name: "reveal-animate",
    group: EffectGroup::Reveal,
    targets: Targets::All(&["[data-animate]", GRID_SELECTOR]),
    options: ObserverOptions::new(0.1, -80),
    mode: RevealMode::Recount,
    effect: RevealEffect::AnimateWithCounters,
};

pub const SECTION_HEADERS: RevealGroup = RevealGroup {
    name: "reveal-section-headers",
    group: EffectGroup::Reveal,
    targets: Targets::All(&[".section-header"]),
    options: ObserverOptions::new(0.2, -50),
    mode: RevealMode::Once,
    effect: RevealEffect::AddClass(ANIMATE_IN_CLASS),
};

pub const COMPARISON: RevealGroup = RevealGroup {
    name: "reveal-comparison",
    group: EffectGroup::Reveal,
    targets: Targets::All(&[".comparison-container"]),
    options: ObserverOptions::new(0.3, 0),
    mode: RevealMode::Once,
    effect: RevealEffect::AddClass(ANIMATE_IN_CLASS),
};

pub const GRIDS: RevealGroup = RevealGroup {
    name: "reveal-grids",
    group: EffectGroup::Reveal,
    targets: Targets::All(&[GRID_SELECTOR]),
    options: ObserverOptions::new(0.15, -80),
    mode: RevealMode::Once,
    effect: RevealEffect::Cascade {
        children: CARD_SELECTOR,
        class: ANIMATE_IN_CLASS,
        step_ms: CARD_STAGGER_MS,
        include_target: true,
    },
};

pub const CHILD_STAGGER: RevealGroup = RevealGroup {
    name: "reveal-child-stagger",
    group: EffectGroup::ChildStagger,
    targets: Targets::All(&[".section-header, .bento-grid, .algorithm-grid"]),
    options: ObserverOptions::new(0.2, 0),
    mode: RevealMode::Once,
    effect: RevealEffect::Cascade {
        children: "[data-animate]",
        class: ANIMATE_IN_CLASS,
        step_ms: CHILD_STAGGER_MS,
        include_target: false,
    },
};

pub const DIFFICULTY_BARS: RevealGroup = RevealGroup {
    name: "reveal-difficulty-bars",
    group: EffectGroup::Reveal,
    targets: Targets::ClosestTo {
        anchor: DIFF_BAR_SELECTOR,
        ancestor: ".bento-card",
    },
    options: ObserverOptions::new(0.5, 0),
    mode: RevealMode::Recount,
    effect: RevealEffect::Bars {
        step_ms: BAR_STAGGER_MS,
    },
};

pub const FORGETTING_CURVE: RevealGroup = RevealGroup {
    name: "reveal-forgetting-curve",
    group: EffectGroup::Reveal,
    targets: Targets::ClosestTo {
        anchor: CURVE_SELECTOR,
        ancestor: ".bento-card",
    },
    options: ObserverOptions::new(0.5, 0),
    mode: RevealMode::Recount,
    effect: RevealEffect::Animate {
        child: CURVE_SELECTOR,
        animation: CURVE_ANIMATION,
    },
};

pub const WORD_REVEAL: RevealGroup = RevealGroup {
    name: "reveal-words",
    group: EffectGroup::WordReveal,
    targets: Targets::All(&["[data-word-reveal]"]),
    options: ObserverOptions::new(0.3, 0),
    mode: RevealMode::Once,
    effect: RevealEffect::AddClass(WORDS_VISIBLE_CLASS),
};

/// Every observer group on the landing page, in registration order
pub const REVEAL_GROUPS: [RevealGroup; 8] = [
    ANIMATE,
    SECTION_HEADERS,
    COMPARISON,
    GRIDS,
    CHILD_STAGGER,
    DIFFICULTY_BARS,
    FORGETTING_CURVE,
    WORD_REVEAL,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDecision {
    Ignore,
    Fire { unobserve: bool },
}

/// Per-observer bookkeeping keyed by target index
#[derive(Debug, Clone)]
pub struct RevealTracker {
    mode: RevealMode,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            revealed: HashSet::new(),
        }
    }

    pub fn on_entry(&mut self, target: usize, is_intersecting: bool) -> RevealDecision {
        if !is_intersecting {
            return RevealDecision::Ignore;
        }
        match self.mode {
            RevealMode::Recount => {
                self.revealed.insert(target);
                RevealDecision::Fire { unobserve: false }
            }
            RevealMode::Once => {
                if self.revealed.insert(target) {
                    RevealDecision::Fire { unobserve: true }
                } else {
                    RevealDecision::Ignore
                }
            }
        }
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.contains(&target)
    }
}

/// Delay for the `index`-th element of a staggered cascade
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Load-time check: is the element's top above the viewport bottom?
pub fn is_above_fold(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height
}
