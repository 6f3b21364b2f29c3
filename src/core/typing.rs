//! Typing-text cycler for the hero headline
//!
//! Types a phrase one character at a time, pauses, deletes it, pauses again
//! and moves on to the next phrase, forever.
//!
//! ```text
//! Typing --(phrase complete)--> PausingAfterType --> Deleting
//!   ^                                                  |
//!   +---- PausingAfterDelete <--(phrase empty)---------+
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::scheduler::{Scheduler, TaskId};

/// Delay between typed characters
pub const TYPE_INTERVAL_MS: u32 = 80;
/// Delay between deleted characters
pub const DELETE_INTERVAL_MS: u32 = 40;
/// Hold time once a phrase is fully typed
pub const PAUSE_AFTER_TYPE_MS: u32 = 2000;
/// Hold time once a phrase is fully deleted
pub const PAUSE_AFTER_DELETE_MS: u32 = 500;
/// Delay before the first character after page load
pub const START_DELAY_MS: u32 = 1000;

pub const DEFAULT_PHRASES: [&str; 5] = [
    "Finding your knowledge gaps...",
    "Mapping exam concepts...",
    "Personalizing your path...",
    "Optimizing question difficulty...",
    "Building lasting memory...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausingAfterType,
    Deleting,
    PausingAfterDelete,
}

/// Output of one tick: what to show, and how long until the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingCycler {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    phase: TypingPhase,
}

impl TypingCycler {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            phase: TypingPhase::Typing,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Currently visible text
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p[..self.char_index].iter().collect())
            .unwrap_or_default()
    }

    /// Advance by one character. `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypingStep> {
        let len = self.phrases.get(self.phrase_index)?.len();

        let delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = TypingPhase::PausingAfterDelete;
                PAUSE_AFTER_DELETE_MS
            } else {
                self.phase = TypingPhase::Deleting;
                DELETE_INTERVAL_MS
            }
        } else {
            self.char_index = (self.char_index + 1).min(len);
            if self.char_index == len {
                self.deleting = true;
                self.phase = TypingPhase::PausingAfterType;
                PAUSE_AFTER_TYPE_MS
            } else {
                self.phase = TypingPhase::Typing;
                TYPE_INTERVAL_MS
            }
        };

        // After a full delete the index already points at the next phrase,
        // whose visible prefix is empty
        Some(TypingStep {
            text: self.text(),
            delay_ms,
        })
    }
}

impl Default for TypingCycler {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES)
    }
}

/// Runs a [`TypingCycler`] on a scheduler, one timer per tick
pub struct TypingTicker {
    scheduler: Rc<dyn Scheduler>,
    pending: Rc<Cell<Option<TaskId>>>,
}

impl TypingTicker {
    /// Start ticking after [`START_DELAY_MS`], handing each text to `render`
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        cycler: TypingCycler,
        render: impl Fn(&str) + 'static,
    ) -> Self {
        let pending = Rc::new(Cell::new(None));
        schedule_tick(
            scheduler.clone(),
            Rc::new(RefCell::new(cycler)),
            Rc::new(render),
            pending.clone(),
            START_DELAY_MS,
        );
        Self { scheduler, pending }
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }
}

fn schedule_tick(
    scheduler: Rc<dyn Scheduler>,
    cycler: Rc<RefCell<TypingCycler>>,
    render: Rc<dyn Fn(&str)>,
    pending: Rc<Cell<Option<TaskId>>>,
    delay_ms: u32,
) {
    let next_scheduler = scheduler.clone();
    let slot = pending.clone();
    let id = scheduler.schedule_once(
        delay_ms,
        Box::new(move || {
            slot.set(None);
            let step = cycler.borrow_mut().tick();
            if let Some(step) = step {
                render(&step.text);
                schedule_tick(next_scheduler, cycler, render, slot, step.delay_ms);
            }
        }),
    );
    pending.set(Some(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::VirtualScheduler;

    #[test]
    fn test_initial_state() {
        let cycler = TypingCycler::default();
        assert_eq!(cycler.phrase_index(), 0);
        assert_eq!(cycler.char_index(), 0);
        assert_eq!(cycler.text(), "");
        assert_eq!(cycler.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut cycler = TypingCycler::new(["abc"]);

        let step = cycler.tick().unwrap();
        assert_eq!(step, TypingStep { text: "a".into(), delay_ms: TYPE_INTERVAL_MS });

        let step = cycler.tick().unwrap();
        assert_eq!(step.text, "ab");
    }

    #[test]
    fn test_full_cycle_moves_to_next_phrase() {
        let mut cycler = TypingCycler::new(["hey", "yo"]);

        let typed: Vec<_> = (0..3).map(|_| cycler.tick().unwrap()).collect();
        assert_eq!(typed[2], TypingStep { text: "hey".into(), delay_ms: PAUSE_AFTER_TYPE_MS });
        assert_eq!(cycler.phase(), TypingPhase::PausingAfterType);

        let step = cycler.tick().unwrap();
        assert_eq!(step, TypingStep { text: "he".into(), delay_ms: DELETE_INTERVAL_MS });
        assert_eq!(cycler.phase(), TypingPhase::Deleting);

        cycler.tick();
        let step = cycler.tick().unwrap();
        assert_eq!(step, TypingStep { text: String::new(), delay_ms: PAUSE_AFTER_DELETE_MS });
        assert_eq!(cycler.phase(), TypingPhase::PausingAfterDelete);
        assert_eq!(cycler.phrase_index(), 1);
        assert_eq!(cycler.char_index(), 0);

        let step = cycler.tick().unwrap();
        assert_eq!(step.text, "y");
        assert_eq!(cycler.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_wraps_after_last_phrase() {
        let mut cycler = TypingCycler::new(["ab", "c"]);
        // "ab": 2 type + 2 delete, "c": 1 type + 1 delete
        for _ in 0..6 {
            cycler.tick();
        }
        assert_eq!(cycler.phrase_index(), 0);
        assert_eq!(cycler.text(), "");
    }

    #[test]
    fn test_default_phrases_cycle() {
        let mut cycler = TypingCycler::default();
        let first_len = DEFAULT_PHRASES[0].chars().count();

        for _ in 0..first_len * 2 {
            cycler.tick();
        }

        assert_eq!(cycler.phrase_index(), 1 % DEFAULT_PHRASES.len());
        assert_eq!(cycler.text(), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cycler = TypingCycler::new(["héllo→"]);
        let texts: Vec<_> = (0..6).map(|_| cycler.tick().unwrap().text).collect();
        assert_eq!(texts[1], "hé");
        assert_eq!(texts[5], "héllo→");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut cycler = TypingCycler::new(Vec::<String>::new());
        assert!(cycler.tick().is_none());
        assert_eq!(cycler.text(), "");
    }

    #[test]
    fn test_empty_phrase_is_skipped() {
        let mut cycler = TypingCycler::new(["", "x"]);
        let step = cycler.tick().unwrap();
        assert_eq!(step.delay_ms, PAUSE_AFTER_TYPE_MS);
        let step = cycler.tick().unwrap();
        assert_eq!(step.delay_ms, PAUSE_AFTER_DELETE_MS);
        assert_eq!(cycler.phrase_index(), 1);
    }

    #[test]
    fn test_ticker_follows_timing() {
        let scheduler = VirtualScheduler::new();
        let shown = Rc::new(RefCell::new(String::from("untouched")));

        let sink = shown.clone();
        let ticker = TypingTicker::start(scheduler.clone(), TypingCycler::new(["hi"]), move |text| {
            *sink.borrow_mut() = text.to_string();
        });

        scheduler.advance(999.0);
        assert_eq!(*shown.borrow(), "untouched");

        scheduler.advance(1.0);
        assert_eq!(*shown.borrow(), "h");

        scheduler.advance(f64::from(TYPE_INTERVAL_MS));
        assert_eq!(*shown.borrow(), "hi");

        // Full phrase stays up for the pause
        scheduler.advance(f64::from(PAUSE_AFTER_TYPE_MS - 1));
        assert_eq!(*shown.borrow(), "hi");
        scheduler.advance(1.0);
        assert_eq!(*shown.borrow(), "h");

        scheduler.advance(f64::from(DELETE_INTERVAL_MS));
        assert_eq!(*shown.borrow(), "");
        assert!(ticker.is_running());
    }

    #[test]
    fn test_ticker_stop() {
        let scheduler = VirtualScheduler::new();
        let ticks = Rc::new(Cell::new(0));

        let count = ticks.clone();
        let ticker = TypingTicker::start(scheduler.clone(), TypingCycler::default(), move |_| {
            count.set(count.get() + 1)
        });

        scheduler.advance(1500.0);
        let before = ticks.get();
        assert!(before > 0);

        ticker.stop();
        scheduler.advance(10_000.0);
        assert_eq!(ticks.get(), before);
        assert!(!ticker.is_running());
    }
}
