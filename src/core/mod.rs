//! Framework-agnostic landing page logic: timing, state machines and geometry

pub mod behavior;
#[cfg(feature = "ssr")]
pub mod config;
pub mod counter;
pub mod form;
pub mod menu;
pub mod motion;
pub mod reveal;
pub mod scheduler;
pub mod settings;
pub mod spring;
pub mod throttling;
pub mod typing;
pub mod words;

pub use behavior::{Behavior, BehaviorSet, EffectGroup, MotionPolicy};
pub use scheduler::{Scheduler, TaskId, VirtualScheduler};
pub use settings::SiteSettings;
