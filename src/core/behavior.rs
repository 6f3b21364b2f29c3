//! Behavior registry
//!
//! Every unit of page interactivity is a [`Behavior`] that binds itself to a
//! root (the live document in the browser, a fake in tests) on
//! [`Behavior::attach`] and releases everything on [`Behavior::detach`].
//! A [`BehaviorSet`] owns the behaviors of one page and applies the
//! [`MotionPolicy`] at registration time, so motion effects are never bound
//! at all when the user prefers reduced motion.

/// Coarse grouping used by the motion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectGroup {
    Reveal,
    Counter,
    Navigation,
    /// Pointer feedback that does not move anything
    Pointer,
    Typing,
    Forms,
    Parallax,
    FloatingCards,
    SpringHover,
    ChildStagger,
    WordReveal,
    ScrollProgress,
}

impl EffectGroup {
    /// Continuous or decorative motion, dropped under reduced motion
    pub fn is_motion(self) -> bool {
        matches!(
            self,
            Self::Parallax
                | Self::FloatingCards
                | Self::SpringHover
                | Self::ChildStagger
                | Self::WordReveal
                | Self::ScrollProgress
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPolicy {
    reduced_motion: bool,
}

impl MotionPolicy {
    pub fn new(reduced_motion: bool) -> Self {
        Self { reduced_motion }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn allows(&self, group: EffectGroup) -> bool {
        !(self.reduced_motion && group.is_motion())
    }
}

pub trait Behavior<R: ?Sized> {
    fn name(&self) -> &'static str;

    fn group(&self) -> EffectGroup;

    /// Bind listeners, observers and timers. Missing elements mean the
    /// behavior binds nothing.
    fn attach(&mut self, root: &R);

    /// Release everything bound by `attach`. Must be safe to call twice.
    fn detach(&mut self);
}

pub struct BehaviorSet<R: ?Sized> {
    policy: MotionPolicy,
    behaviors: Vec<Box<dyn Behavior<R>>>,
    skipped: Vec<&'static str>,
    attached: bool,
}

impl<R: ?Sized> BehaviorSet<R> {
    pub fn new(policy: MotionPolicy) -> Self {
        Self {
            policy,
            behaviors: Vec::new(),
            skipped: Vec::new(),
            attached: false,
        }
    }

    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    /// Add a behavior unless the policy forbids its group.
    /// Returns `false` when it was skipped.
    pub fn register(&mut self, behavior: impl Behavior<R> + 'static) -> bool {
        if !self.policy.allows(behavior.group()) {
            self.skipped.push(behavior.name());
            return false;
        }
        self.behaviors.push(Box::new(behavior));
        true
    }

    pub fn registered_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    pub fn skipped_names(&self) -> &[&'static str] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attach in registration order. A second call is a no-op.
    pub fn attach_all(&mut self, root: &R) {
        if self.attached {
            return;
        }
        for behavior in &mut self.behaviors {
            behavior.attach(root);
        }
        self.attached = true;
    }

    /// Detach in reverse registration order
    pub fn detach_all(&mut self) {
        if !self.attached {
            return;
        }
        for behavior in self.behaviors.iter_mut().rev() {
            behavior.detach();
        }
        self.attached = false;
    }
}
