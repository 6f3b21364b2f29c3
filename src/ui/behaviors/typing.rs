//! Hero typing line

use super::PageRoot;
use crate::core::typing::{TypingCycler, TypingTicker};
use crate::core::{Behavior, EffectGroup};
use crate::ui::dom;

pub const TYPING_SELECTOR: &str = ".typing-text";

#[derive(Default)]
pub struct TypingText {
    ticker: Option<TypingTicker>,
}

impl Behavior<PageRoot> for TypingText {
    fn name(&self) -> &'static str {
        "typing-text"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::Typing
    }

    fn attach(&mut self, root: &PageRoot) {
        let Some(element) = dom::first(root.document.query_selector(TYPING_SELECTOR)) else {
            return;
        };
        element.set_text_content(Some(""));
        self.ticker = Some(TypingTicker::start(
            root.scheduler.clone(),
            TypingCycler::default(),
            move |text| element.set_text_content(Some(text)),
        ));
    }

    fn detach(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}
