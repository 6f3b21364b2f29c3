//! Numeric counter easing
//!
//! Counters start at 0 and ease out (quartic) to an integer target over a
//! fixed duration. The displayed value is always an integer, never decreases,
//! and the last frame is forced to the exact target.

use std::rc::Rc;

use super::scheduler::Scheduler;

/// Counter animation length (2000ms)
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Attribute holding a counter's target value
pub const COUNTER_ATTRIBUTE: &str = "data-counter";

/// Class marking a counter that has already been animated
pub const COUNTED_CLASS: &str = "counted";

/// Quartic ease-out: fast start, slow settle
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Displayed value after `elapsed_ms` of a `duration_ms` animation
pub fn value_at(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    let progress = if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / duration_ms).min(1.0)
    };

    if progress >= 1.0 {
        return target;
    }

    let eased = (target as f64 * ease_out_quart(progress)).floor();
    (eased.max(0.0) as u64).min(target)
}

/// Parse a counter target the way the page markup writes it
///
/// Leading digits are taken (`"120+"` → 120), surrounding whitespace is
/// ignored. Anything without leading digits, including negatives, yields
/// `None` and the counter is left alone.
pub fn parse_target(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

/// One rendered counter frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// Time-driven counter state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    started_at: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, started_at: f64) -> Self {
        Self {
            target,
            duration_ms: COUNTER_DURATION_MS,
            started_at,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value to display for a frame stamped `timestamp`
    pub fn frame(&self, timestamp: f64) -> CounterFrame {
        let elapsed = (timestamp - self.started_at).max(0.0);
        let done = self.duration_ms <= 0.0 || elapsed >= self.duration_ms;
        CounterFrame {
            value: if done {
                self.target
            } else {
                value_at(self.target, elapsed, self.duration_ms)
            },
            done,
        }
    }
}

/// Drive a counter from 0 to `target`, rendering once per frame
pub fn animate_counter(scheduler: Rc<dyn Scheduler>, target: u64, render: impl Fn(u64) + 'static) {
    let animation = CounterAnimation::new(target, scheduler.now());
    request_counter_frame(scheduler, animation, Rc::new(render));
}

fn request_counter_frame(
    scheduler: Rc<dyn Scheduler>,
    animation: CounterAnimation,
    render: Rc<dyn Fn(u64)>,
) {
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |timestamp| {
        let frame = animation.frame(timestamp);
        render(frame.value);
        if !frame.done {
            request_counter_frame(next, animation, render);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::VirtualScheduler;
    use std::cell::RefCell;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(-1.0), 0.0);
    }

    #[test]
    fn test_exact_target_at_end() {
        for target in [0, 1, 7, 99, 2500, 98_765, u32::MAX as u64] {
            assert_eq!(value_at(target, COUNTER_DURATION_MS, COUNTER_DURATION_MS), target);
            assert_eq!(value_at(target, 10_000.0, COUNTER_DURATION_MS), target);
        }
    }

    #[test]
    fn test_values_never_decrease() {
        let target = 12_345;
        let mut previous = 0;
        let mut elapsed = 0.0;
        while elapsed <= COUNTER_DURATION_MS {
            let value = value_at(target, elapsed, COUNTER_DURATION_MS);
            assert!(value >= previous, "{value} < {previous} at {elapsed}ms");
            assert!(value <= target);
            previous = value;
            elapsed += 7.0;
        }
    }

    #[test]
    fn test_quarter_way_matches_curve() {
        // p = 0.25 → 1 - 0.75^4 = 0.68359375
        assert_eq!(value_at(1000, 500.0, 2000.0), 683);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        assert_eq!(value_at(42, 0.0, 0.0), 42);
        let frame = CounterAnimation::new(42, 0.0).with_duration(0.0).frame(0.0);
        assert_eq!(frame, CounterFrame { value: 42, done: true });
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("250"), Some(250));
        assert_eq!(parse_target(" 98 "), Some(98));
        assert_eq!(parse_target("120+"), Some(120));
        assert_eq!(parse_target("-5"), None);
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn test_animation_frames_before_start_show_zero() {
        let animation = CounterAnimation::new(100, 1000.0);
        assert_eq!(animation.frame(900.0), CounterFrame { value: 0, done: false });
    }

    #[test]
    fn test_animate_counter_renders_until_target() {
        let scheduler = VirtualScheduler::new();
        let rendered = Rc::new(RefCell::new(Vec::new()));

        let sink = rendered.clone();
        animate_counter(scheduler.clone(), 500, move |value| sink.borrow_mut().push(value));

        // 2000ms at 16ms per frame is 125 frames; run a few more
        scheduler.advance_frames(140);

        let rendered = rendered.borrow();
        assert_eq!(rendered.last(), Some(&500));
        assert!(rendered.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(rendered.iter().filter(|v| **v == 500).count(), 1);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn test_animation_stops_requesting_frames_when_done() {
        let scheduler = VirtualScheduler::new();
        let frames = Rc::new(RefCell::new(0));

        let count = frames.clone();
        animate_counter(scheduler.clone(), 10, move |_| *count.borrow_mut() += 1);

        scheduler.advance_frames(200);
        let total = *frames.borrow();
        scheduler.advance_frames(50);

        assert_eq!(*frames.borrow(), total);
    }
}
