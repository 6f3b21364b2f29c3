//! Scroll-driven effects, each rendered at most once per frame

use std::rc::Rc;

use web_sys::Element;

use super::PageRoot;
use crate::core::motion::{
    HeroFrame, NavbarFrame, VerticalSpan, orb_offset, parallax_offset, parallax_speed,
    scroll_progress_percent, translate_y,
};
use crate::core::throttling::FrameGate;
use crate::core::{Behavior, EffectGroup};
use crate::ui::dom::{self, Listener};

const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
     background: linear-gradient(90deg, #8b5cf6, #6366f1); z-index: 10000; \
     transition: width 0.1s ease-out; pointer-events: none;";

/// Frame body plus anything the effect inserted into the page
struct Prepared {
    render: Rc<dyn Fn()>,
    inserted: Option<Element>,
}

type Prepare = fn(&PageRoot) -> Option<Prepared>;

/// A scroll listener feeding one [`FrameGate`]
pub struct ScrollEffect {
    name: &'static str,
    group: EffectGroup,
    prepare: Prepare,
    render_on_attach: bool,
    listener: Option<Listener>,
    inserted: Option<Element>,
}

impl ScrollEffect {
    fn new(name: &'static str, group: EffectGroup, prepare: Prepare) -> Self {
        Self {
            name,
            group,
            prepare,
            render_on_attach: false,
            listener: None,
            inserted: None,
        }
    }

    fn render_on_attach(mut self) -> Self {
        self.render_on_attach = true;
        self
    }

    pub fn navbar() -> Self {
        Self::new("navbar", EffectGroup::Navigation, prepare_navbar).render_on_attach()
    }

    pub fn hero_orbs() -> Self {
        Self::new("hero-orbs", EffectGroup::Parallax, prepare_orbs)
    }

    pub fn data_parallax() -> Self {
        Self::new("data-parallax", EffectGroup::Parallax, prepare_data_parallax).render_on_attach()
    }

    pub fn hero_scale() -> Self {
        Self::new("hero-scale", EffectGroup::Parallax, prepare_hero_scale)
    }

    pub fn scroll_progress() -> Self {
        Self::new("scroll-progress", EffectGroup::ScrollProgress, prepare_progress)
            .render_on_attach()
    }
}

impl Behavior<PageRoot> for ScrollEffect {
    fn name(&self) -> &'static str {
        self.name
    }

    fn group(&self) -> EffectGroup {
        self.group
    }

    fn attach(&mut self, root: &PageRoot) {
        let Some(prepared) = (self.prepare)(root) else {
            return;
        };
        let render = prepared.render;
        let gate = FrameGate::new(root.scheduler.clone(), move || render());
        if self.render_on_attach {
            gate.run_now();
        }
        self.listener = Some(Listener::new(&root.window, "scroll", move |_| {
            gate.trigger();
        }));
        self.inserted = prepared.inserted;
    }

    fn detach(&mut self) {
        self.listener = None;
        if let Some(element) = self.inserted.take() {
            element.remove();
        }
    }
}

fn prepare_navbar(root: &PageRoot) -> Option<Prepared> {
    let navbar = dom::first(root.document.query_selector("#navbar"));
    let banner = dom::first(root.document.query_selector("#promoBanner"));
    if navbar.is_none() && banner.is_none() {
        return None;
    }

    let window = root.window.clone();
    Some(Prepared {
        render: Rc::new(move || {
            let frame = NavbarFrame::at(dom::scroll_y(&window));
            if let Some(navbar) = &navbar {
                dom::toggle_class(navbar, "scrolled", frame.scrolled);
            }
            if let Some(banner) = &banner {
                dom::set_style(banner, "transform", frame.banner_transform());
                dom::set_style(banner, "opacity", frame.banner_opacity());
            }
        }),
        inserted: None,
    })
}

fn prepare_orbs(root: &PageRoot) -> Option<Prepared> {
    let orbs = dom::elements(root.document.query_selector_all(".hero-orb"));
    if orbs.is_empty() {
        return None;
    }

    let window = root.window.clone();
    Some(Prepared {
        render: Rc::new(move || {
            let scroll_y = dom::scroll_y(&window);
            for (index, orb) in orbs.iter().enumerate() {
                dom::set_style(orb, "transform", &translate_y(orb_offset(scroll_y, index)));
            }
        }),
        inserted: None,
    })
}

fn prepare_data_parallax(root: &PageRoot) -> Option<Prepared> {
    let elements: Vec<(Element, f64)> =
        dom::elements(root.document.query_selector_all("[data-parallax]"))
            .into_iter()
            .map(|el| {
                let speed = parallax_speed(el.get_attribute("data-parallax").as_deref());
                (el, speed)
            })
            .collect();
    if elements.is_empty() {
        return None;
    }

    let window = root.window.clone();
    Some(Prepared {
        render: Rc::new(move || {
            let viewport_height = dom::viewport_height(&window);
            for (element, speed) in &elements {
                let rect = element.get_bounding_client_rect();
                let span = VerticalSpan::new(rect.top(), rect.bottom());
                if let Some(offset) = parallax_offset(span, viewport_height, *speed) {
                    dom::set_style(element, "transform", &translate_y(offset));
                }
            }
        }),
        inserted: None,
    })
}

fn prepare_hero_scale(root: &PageRoot) -> Option<Prepared> {
    let floating = dom::first(root.document.query_selector(".hero-floating"));
    let content = dom::first(root.document.query_selector(".hero-content"));
    if floating.is_none() && content.is_none() {
        return None;
    }

    let window = root.window.clone();
    Some(Prepared {
        render: Rc::new(move || {
            let Some(frame) = HeroFrame::at(dom::scroll_y(&window)) else {
                return;
            };
            if let Some(floating) = &floating {
                dom::set_style(floating, "transform", &format!("scale({})", frame.floating_scale));
                dom::set_style(floating, "opacity", &frame.floating_opacity.to_string());
            }
            if let Some(content) = &content {
                dom::set_style(content, "transform", &translate_y(frame.content_offset));
                dom::set_style(content, "opacity", &frame.content_opacity.to_string());
            }
        }),
        inserted: None,
    })
}

fn prepare_progress(root: &PageRoot) -> Option<Prepared> {
    let body = root.document.body()?;
    let bar = root.document.create_element("div").ok()?;
    bar.set_class_name("scroll-progress");
    let _ = bar.set_attribute("style", PROGRESS_BAR_STYLE);
    body.append_child(&bar).ok()?;

    let window = root.window.clone();
    let document = root.document.clone();
    let target = bar.clone();
    Some(Prepared {
        render: Rc::new(move || {
            let Some(page) = document.document_element() else {
                return;
            };
            let percent = scroll_progress_percent(
                f64::from(page.scroll_top()),
                f64::from(page.scroll_height()),
                dom::viewport_height(&window),
            );
            dom::set_style(&target, "width", &format!("{percent}%"));
        }),
        inserted: Some(bar),
    })
}
