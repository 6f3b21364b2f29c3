//! Browser-backed [`Scheduler`]
//!
//! Timers are `gloo_timers` callbacks, frames go through
//! `requestAnimationFrame` and the clock is `performance.now()`.
//!
//! A timer's closure must outlive its own invocation, so a handle whose task
//! is executing is moved to `spent` instead of being dropped, and released
//! by the next sweep once that task has returned.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::scheduler::{Scheduler, TaskId};

enum Handle {
    Timeout(Timeout),
    Interval(Interval),
    Frame(i32),
}

enum Spent {
    Timeout(Timeout),
    Interval(Closure<dyn FnMut()>),
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    running: Option<TaskId>,
    live: HashMap<TaskId, Handle>,
    spent: Vec<(TaskId, Spent)>,
}

pub struct BrowserScheduler {
    this: Weak<BrowserScheduler>,
    inner: RefCell<Inner>,
}

thread_local! {
    static SHARED: Rc<BrowserScheduler> = BrowserScheduler::new();
}

/// The page-wide scheduler
pub fn shared() -> Rc<BrowserScheduler> {
    SHARED.with(Rc::clone)
}

impl BrowserScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            inner: RefCell::default(),
        })
    }

    fn next_id(&self) -> TaskId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        TaskId::new(inner.next_id)
    }

    fn run<R>(&self, id: TaskId, task: impl FnOnce() -> R) -> R {
        let previous = self.inner.borrow_mut().running.replace(id);
        let out = task();
        self.inner.borrow_mut().running = previous;
        out
    }

    /// Stop `id` from firing again while keeping its closure alive
    fn retire(&self, id: TaskId) {
        let mut inner = self.inner.borrow_mut();
        let spent = match inner.live.remove(&id) {
            Some(Handle::Timeout(timeout)) => Spent::Timeout(timeout),
            Some(Handle::Interval(interval)) => Spent::Interval(interval.cancel()),
            Some(Handle::Frame(_)) | None => return,
        };
        inner.spent.push((id, spent));
    }

    fn sweep(&self) {
        let released: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            let running = inner.running;
            let (keep, release): (Vec<_>, Vec<_>) = inner
                .spent
                .drain(..)
                .partition(|(id, _)| Some(*id) == running);
            inner.spent = keep;
            release
        };
        drop(released);
    }
}

impl Scheduler for BrowserScheduler {
    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        self.sweep();
        let id = self.next_id();
        let this = self.this.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(this) = this.upgrade() {
                this.retire(id);
                this.run(id, task);
            }
        });
        self.inner
            .borrow_mut()
            .live
            .insert(id, Handle::Timeout(timeout));
        id
    }

    fn schedule_repeating(&self, interval_ms: u32, mut task: Box<dyn FnMut()>) -> TaskId {
        self.sweep();
        let id = self.next_id();
        let this = self.this.clone();
        let interval = Interval::new(interval_ms, move || {
            if let Some(this) = this.upgrade() {
                this.run(id, &mut task);
            }
        });
        self.inner
            .borrow_mut()
            .live
            .insert(id, Handle::Interval(interval));
        id
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskId {
        let id = self.next_id();
        let Some(window) = web_sys::window() else {
            return id;
        };
        let this = self.this.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| {
            if let Some(this) = this.upgrade() {
                this.inner.borrow_mut().live.remove(&id);
                this.run(id, || task(timestamp));
            }
        });
        if let Ok(raw) = window.request_animation_frame(callback.unchecked_ref()) {
            self.inner.borrow_mut().live.insert(id, Handle::Frame(raw));
        }
        id
    }

    fn cancel(&self, id: TaskId) {
        if self.inner.borrow().running == Some(id) {
            self.retire(id);
            return;
        }
        let handle = self.inner.borrow_mut().live.remove(&id);
        if let Some(Handle::Frame(raw)) = handle {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(raw);
            }
        } else {
            // Dropping a gloo handle clears the timer
            drop(handle);
        }
        self.sweep();
    }
}
