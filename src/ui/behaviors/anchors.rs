//! Smooth scrolling for in-page links

use web_sys::{ScrollBehavior, ScrollToOptions};

use super::PageRoot;
use crate::core::motion::{anchor_scroll_top, anchor_target};
use crate::core::{Behavior, EffectGroup};
use crate::ui::dom::{self, Listener};

#[derive(Default)]
pub struct AnchorScroll {
    listeners: Vec<Listener>,
}

impl Behavior<PageRoot> for AnchorScroll {
    fn name(&self) -> &'static str {
        "anchor-scroll"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::Navigation
    }

    fn attach(&mut self, root: &PageRoot) {
        for link in dom::elements(root.document.query_selector_all(r##"a[href^="#"]"##)) {
            let window = root.window.clone();
            let document = root.document.clone();
            let href = link.get_attribute("href").unwrap_or_default();

            self.listeners.push(Listener::new(&link, "click", move |event| {
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                let Some(target) = dom::first(document.query_selector(selector)) else {
                    return;
                };
                event.prevent_default();

                let top = anchor_scroll_top(
                    target.get_bounding_client_rect().top(),
                    dom::scroll_y(&window),
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }));
        }
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
