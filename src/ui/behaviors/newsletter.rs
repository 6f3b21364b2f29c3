//! Footer newsletter forms: local acknowledgement, no network call

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use super::PageRoot;
use crate::core::form::{NEWSLETTER_DONE_BACKGROUND, NEWSLETTER_DONE_LABEL, NewsletterAck};
use crate::core::{Behavior, EffectGroup};
use crate::ui::dom::{self, Listener};

const NEWSLETTER_SELECTOR: &str = ".newsletter-form";

#[derive(Default)]
pub struct NewsletterForms {
    listeners: Vec<Listener>,
}

impl Behavior<PageRoot> for NewsletterForms {
    fn name(&self) -> &'static str {
        "newsletter-forms"
    }

    fn group(&self) -> EffectGroup {
        EffectGroup::Forms
    }

    fn attach(&mut self, root: &PageRoot) {
        for form in dom::elements(root.document.query_selector_all(NEWSLETTER_SELECTOR)) {
            let Some(button) = dom::first(form.query_selector("button")) else {
                continue;
            };
            let input = dom::first(form.query_selector("input"))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

            let idle_label = button.inner_html();
            let ack = NewsletterAck::new(root.scheduler.clone(), move |done| {
                render_button(&button, done, &idle_label);
            });

            self.listeners.push(Listener::new(&form, "submit", move |event| {
                event.prevent_default();
                ack.acknowledge();
                if let Some(input) = &input {
                    input.set_value("");
                }
            }));
        }
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}

fn render_button(button: &Element, done: bool, idle_label: &str) {
    if done {
        button.set_inner_html(NEWSLETTER_DONE_LABEL);
        dom::set_style(button, "background", NEWSLETTER_DONE_BACKGROUND);
    } else {
        button.set_inner_html(idle_label);
        dom::clear_style(button, "background");
    }
}
