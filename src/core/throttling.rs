//! Rate limiting for scroll and resize reactions
//!
//! - [`FrameGate`]: runs a callback at most once per rendering frame
//! - [`Debouncer`]: runs a callback once a burst of calls has settled
//!
//! Both read nothing from the triggering event. The callback is expected to
//! re-read live state (scroll position, window width) when it finally runs,
//! so the last event before idle is always reflected.

use std::cell::Cell;
use std::rc::Rc;

use super::scheduler::{Scheduler, TaskId};

/// Debounce window for viewport resize handling (250ms)
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Frame-rate-limited reactor
///
/// # Example
/// ```
/// # use learnr_landing::core::scheduler::VirtualScheduler;
/// # use learnr_landing::core::throttling::FrameGate;
/// # use std::cell::Cell;
/// # use std::rc::Rc;
/// let scheduler = VirtualScheduler::new();
/// let runs = Rc::new(Cell::new(0));
///
/// let counter = runs.clone();
/// let gate = FrameGate::new(scheduler.clone(), move || counter.set(counter.get() + 1));
///
/// for _ in 0..10 {
///     gate.trigger();
/// }
/// scheduler.flush_frame();
/// assert_eq!(runs.get(), 1);
/// ```
#[derive(Clone)]
pub struct FrameGate {
    scheduler: Rc<dyn Scheduler>,
    in_flight: Rc<Cell<bool>>,
    callback: Rc<dyn Fn()>,
}

impl FrameGate {
    pub fn new(scheduler: Rc<dyn Scheduler>, callback: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            in_flight: Rc::new(Cell::new(false)),
            callback: Rc::new(callback),
        }
    }

    /// Request a run on the next frame
    ///
    /// Returns `true` if this call scheduled the frame, `false` if one was
    /// already pending.
    pub fn trigger(&self) -> bool {
        if self.in_flight.get() {
            return false;
        }
        self.in_flight.set(true);

        let in_flight = self.in_flight.clone();
        let callback = self.callback.clone();
        self.scheduler.request_frame(Box::new(move |_| {
            in_flight.set(false);
            callback();
        }));
        true
    }

    /// Run the callback synchronously, outside the frame discipline
    pub fn run_now(&self) {
        (self.callback)();
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

/// Trailing-edge debouncer
#[derive(Clone)]
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
    pending: Rc<Cell<Option<TaskId>>>,
    callback: Rc<dyn Fn()>,
}

impl Debouncer {
    pub fn new(scheduler: Rc<dyn Scheduler>, wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            wait_ms,
            pending: Rc::new(Cell::new(None)),
            callback: Rc::new(callback),
        }
    }

    /// Restart the wait window
    pub fn call(&self) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }

        let pending = self.pending.clone();
        let callback = self.callback.clone();
        let id = self.scheduler.schedule_once(
            self.wait_ms,
            Box::new(move || {
                pending.set(None);
                callback();
            }),
        );
        self.pending.set(Some(id));
    }

    /// Drop the pending run, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
