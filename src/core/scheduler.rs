//! Scheduling capability shared by every time-driven effect
//!
//! Effects never talk to `setTimeout` or `requestAnimationFrame` directly.
//! They receive an `Rc<dyn Scheduler>` instead, which is backed by the
//! browser in the WASM bundle and by [`VirtualScheduler`] in tests.
//!
//! # Example
//!
//! ```
//! # use learnr_landing::core::scheduler::{Scheduler, VirtualScheduler};
//! # use std::cell::Cell;
//! # use std::rc::Rc;
//! let scheduler = VirtualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//!
//! let flag = fired.clone();
//! scheduler.schedule_once(250, Box::new(move || flag.set(true)));
//!
//! scheduler.advance(249.0);
//! assert!(!fired.get());
//! scheduler.advance(1.0);
//! assert!(fired.get());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// Virtual frame period used by [`VirtualScheduler::advance_frames`] (~60fps)
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Handle returned by every scheduling call, usable with [`Scheduler::cancel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Deferred-execution capability
///
/// All methods take `&self`; implementations use interior mutability so a
/// running task can schedule follow-up work on the same scheduler.
pub trait Scheduler {
    /// Monotonic clock in milliseconds
    fn now(&self) -> f64;

    /// Run `task` once after `delay_ms`
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId;

    /// Run `task` every `interval_ms` until cancelled
    fn schedule_repeating(&self, interval_ms: u32, task: Box<dyn FnMut()>) -> TaskId;

    /// Run `task` before the next repaint, passing the frame timestamp
    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskId;

    /// Cancel a pending task. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TaskId);
}

enum TimerTask {
    Once(Box<dyn FnOnce()>),
    Repeating {
        interval: f64,
        task: Box<dyn FnMut()>,
    },
}

struct Timer {
    id: TaskId,
    due: f64,
    seq: u64,
    task: TimerTask,
}

#[derive(Default)]
struct VirtualState {
    now: f64,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer>,
    frames: Vec<(TaskId, Box<dyn FnOnce(f64)>)>,
    running: Option<TaskId>,
    running_cancelled: bool,
}

impl VirtualState {
    fn allocate_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    fn allocate_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Index of the earliest timer due at or before `limit`, FIFO among ties
    fn next_due(&self, limit: f64) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= limit)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(index, _)| index)
    }
}

/// Deterministic scheduler driven by an explicit virtual clock
///
/// Timers only fire inside [`advance`](Self::advance) and frame callbacks only
/// run inside [`flush_frame`](Self::flush_frame), so tests control exactly
/// what happens between two observations.
pub struct VirtualScheduler {
    state: RefCell<VirtualState>,
}

impl VirtualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(VirtualState::default()),
        })
    }

    /// Move the clock forward by `ms`, firing every timer that becomes due
    pub fn advance(&self, ms: f64) {
        let target = self.state.borrow().now + ms;

        loop {
            let timer = {
                let mut state = self.state.borrow_mut();
                match state.next_due(target) {
                    Some(index) => {
                        let timer = state.timers.remove(index);
                        state.now = timer.due;
                        state.running = Some(timer.id);
                        state.running_cancelled = false;
                        timer
                    }
                    None => break,
                }
            };

            let Timer { id, due, task, .. } = timer;
            match task {
                TimerTask::Once(task) => {
                    task();
                    self.state.borrow_mut().running = None;
                }
                TimerTask::Repeating { interval, mut task } => {
                    task();
                    let mut state = self.state.borrow_mut();
                    state.running = None;
                    if !state.running_cancelled {
                        let seq = state.allocate_seq();
                        state.timers.push(Timer {
                            id,
                            due: due + interval,
                            seq,
                            task: TimerTask::Repeating { interval, task },
                        });
                    }
                }
            }
        }

        self.state.borrow_mut().now = target;
    }

    /// Run the frame callbacks queued so far
    ///
    /// Callbacks requested while flushing land in the next frame.
    pub fn flush_frame(&self) {
        let (now, frames) = {
            let mut state = self.state.borrow_mut();
            (state.now, std::mem::take(&mut state.frames))
        };
        for (_, task) in frames {
            task(now);
        }
    }

    /// Alternate `advance(FRAME_INTERVAL_MS)` and `flush_frame()` `count` times
    pub fn advance_frames(&self, count: usize) {
        for _ in 0..count {
            self.advance(FRAME_INTERVAL_MS);
            self.flush_frame();
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> f64 {
        self.state.borrow().now
    }

    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        let seq = state.allocate_seq();
        let due = state.now + f64::from(delay_ms);
        state.timers.push(Timer {
            id,
            due,
            seq,
            task: TimerTask::Once(task),
        });
        id
    }

    fn schedule_repeating(&self, interval_ms: u32, task: Box<dyn FnMut()>) -> TaskId {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        let seq = state.allocate_seq();
        // A zero interval would spin `advance` forever
        let interval = f64::from(interval_ms.max(1));
        let due = state.now + interval;
        state.timers.push(Timer {
            id,
            due,
            seq,
            task: TimerTask::Repeating { interval, task },
        });
        id
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskId {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        state.frames.push((id, task));
        id
    }

    fn cancel(&self, id: TaskId) {
        let mut state = self.state.borrow_mut();
        if state.running == Some(id) {
            state.running_cancelled = true;
        }
        state.timers.retain(|t| t.id != id);
        state.frames.retain(|(frame_id, _)| *frame_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_timers_fire_in_due_order() {
        let scheduler = VirtualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = log.clone();
            scheduler.schedule_once(delay, Box::new(move || log.borrow_mut().push(label)));
        }

        scheduler.advance(1000.0);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_fire_in_submission_order() {
        let scheduler = VirtualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let log = log.clone();
            scheduler.schedule_once(50, Box::new(move || log.borrow_mut().push(label)));
        }

        scheduler.advance(50.0);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clock_reads_due_time_inside_task() {
        let scheduler = VirtualScheduler::new();
        let seen = Rc::new(Cell::new(0.0));

        let sched = scheduler.clone();
        let seen_clone = seen.clone();
        scheduler.schedule_once(
            120,
            Box::new(move || seen_clone.set(sched.now())),
        );

        scheduler.advance(500.0);
        assert_eq!(seen.get(), 120.0);
        assert_eq!(scheduler.now(), 500.0);
    }

    #[test]
    fn test_task_scheduled_from_task_fires_in_same_advance() {
        let scheduler = VirtualScheduler::new();
        let count = Rc::new(Cell::new(0));

        let sched = scheduler.clone();
        let outer = count.clone();
        scheduler.schedule_once(
            10,
            Box::new(move || {
                outer.set(outer.get() + 1);
                let inner = outer.clone();
                sched.schedule_once(10, Box::new(move || inner.set(inner.get() + 1)));
            }),
        );

        scheduler.advance(20.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_repeating_until_cancelled() {
        let scheduler = VirtualScheduler::new();
        let count = Rc::new(Cell::new(0));

        let counter = count.clone();
        let id = scheduler.schedule_repeating(100, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(350.0);
        assert_eq!(count.get(), 3);

        scheduler.cancel(id);
        scheduler.advance(1000.0);
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_repeating_task_can_cancel_itself() {
        let scheduler = VirtualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let sched = scheduler.clone();
        let counter = count.clone();
        let id_slot = own_id.clone();
        let id = scheduler.schedule_repeating(
            10,
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 2 {
                    if let Some(id) = id_slot.get() {
                        sched.cancel(id);
                    }
                }
            }),
        );
        own_id.set(Some(id));

        scheduler.advance(100.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_cancelled_once_never_fires() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let id = scheduler.schedule_once(10, Box::new(move || flag.set(true)));
        scheduler.cancel(id);
        scheduler.cancel(id);

        scheduler.advance(100.0);
        assert!(!fired.get());
    }

    #[test]
    fn test_frames_requested_during_flush_wait_for_next_frame() {
        let scheduler = VirtualScheduler::new();
        let count = Rc::new(Cell::new(0));

        let sched = scheduler.clone();
        let counter = count.clone();
        scheduler.request_frame(Box::new(move |_| {
            counter.set(counter.get() + 1);
            let again = counter.clone();
            sched.request_frame(Box::new(move |_| again.set(again.get() + 1)));
        }));

        scheduler.flush_frame();
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending_frames(), 1);

        scheduler.flush_frame();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_frame_receives_current_time() {
        let scheduler = VirtualScheduler::new();
        let stamp = Rc::new(Cell::new(-1.0));

        let stamp_clone = stamp.clone();
        scheduler.request_frame(Box::new(move |ts| stamp_clone.set(ts)));
        scheduler.advance_frames(1);

        assert_eq!(stamp.get(), FRAME_INTERVAL_MS);
    }

    #[test]
    fn test_cancel_frame() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let id = scheduler.request_frame(Box::new(move |_| flag.set(true)));
        scheduler.cancel(id);
        scheduler.flush_frame();

        assert!(!fired.get());
    }
}
