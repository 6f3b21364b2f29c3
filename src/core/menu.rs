//! Mobile navigation menu and FAQ accordion state

/// Viewport width above which the mobile menu is closed automatically
pub const MENU_BREAKPOINT_PX: f64 = 768.0;

/// Why the menu was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    LinkClick,
    EscapeKey,
    ResizedAboveBreakpoint,
}

/// Mobile menu open flag
///
/// The page scroll lock is derived from the open flag instead of being
/// stored next to it, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Value for `document.body.style.overflow`
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }

    /// Class shared by the hamburger button and the menu panel
    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }

    /// Hamburger click. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self, _trigger: CloseTrigger) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Keyboard handler; only Escape does anything
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close(CloseTrigger::EscapeKey)
    }

    /// Debounced resize handler
    pub fn handle_resize(&mut self, viewport_width: f64) -> bool {
        viewport_width > MENU_BREAKPOINT_PX && self.close(CloseTrigger::ResizedAboveBreakpoint)
    }
}

/// FAQ accordion with at most one open item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Value for the question button's `aria-expanded`
    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.is_open(index) { "true" } else { "false" }
    }

    /// Question click: opens `index` and closes every other item, or closes
    /// `index` if it was the open one. Out-of-range clicks are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed_and_unlocked() {
        let menu = MobileMenu::new();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
        assert_eq!(menu.body_overflow(), "");
        assert_eq!(menu.active_class(), None);
    }

    #[test]
    fn test_toggle_locks_scroll() {
        let mut menu = MobileMenu::new();
        assert!(menu.toggle());
        assert!(menu.scroll_locked());
        assert_eq!(menu.body_overflow(), "hidden");
        assert_eq!(menu.active_class(), Some("active"));

        assert!(!menu.toggle());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_every_close_trigger_unlocks_scroll() {
        for trigger in [
            CloseTrigger::LinkClick,
            CloseTrigger::EscapeKey,
            CloseTrigger::ResizedAboveBreakpoint,
        ] {
            let mut menu = MobileMenu::new();
            menu.toggle();
            assert!(menu.close(trigger));
            assert!(!menu.is_open());
            assert_eq!(menu.body_overflow(), "");
        }
    }

    #[test]
    fn test_closing_closed_menu_is_noop() {
        let mut menu = MobileMenu::new();
        assert!(!menu.close(CloseTrigger::LinkClick));
        assert!(!menu.handle_key("Escape"));
        assert!(!menu.handle_resize(1200.0));
        assert_eq!(menu, MobileMenu::new());
    }

    #[test]
    fn test_escape_closes_other_keys_do_not() {
        let mut menu = MobileMenu::new();
        menu.toggle();

        assert!(!menu.handle_key("Enter"));
        assert!(menu.is_open());

        assert!(menu.handle_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_closes_only_above_breakpoint() {
        let mut menu = MobileMenu::new();
        menu.toggle();

        assert!(!menu.handle_resize(MENU_BREAKPOINT_PX));
        assert!(menu.is_open());

        assert!(menu.handle_resize(MENU_BREAKPOINT_PX + 1.0));
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_accordion_mutual_exclusion() {
        let mut faq = Accordion::new(4);

        faq.toggle(0);
        assert!(faq.is_open(0));

        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
        assert_eq!((0..4).filter(|i| faq.is_open(*i)).count(), 1);
    }

    #[test]
    fn test_accordion_reclick_closes() {
        let mut faq = Accordion::new(3);
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
        assert_eq!(faq.aria_expanded(1), "false");
    }

    #[test]
    fn test_accordion_aria_mirrors_state() {
        let mut faq = Accordion::new(3);
        faq.toggle(2);
        assert_eq!(faq.aria_expanded(0), "false");
        assert_eq!(faq.aria_expanded(1), "false");
        assert_eq!(faq.aria_expanded(2), "true");
    }

    #[test]
    fn test_accordion_ignores_out_of_range() {
        let mut faq = Accordion::new(2);
        faq.toggle(0);
        faq.toggle(5);
        assert_eq!(faq.open_index(), Some(0));

        let mut empty = Accordion::new(0);
        empty.toggle(0);
        assert!(empty.is_empty());
        assert_eq!(empty.open_index(), None);
    }

    #[test]
    fn test_accordion_close_all() {
        let mut faq = Accordion::new(2);
        faq.toggle(1);
        faq.close_all();
        assert_eq!(faq.open_index(), None);
    }
}
