//! Scroll-driven transforms: navbar, parallax, hero scale, floating cards
//!
//! Everything here is plain geometry. The DOM layer reads scroll position and
//! element rects, calls into this module once per frame, and writes the
//! resulting styles back.

/// Navbar gets the `scrolled` class past this offset
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 60.0;
/// Promo banner slides away past this offset
pub const PROMO_HIDDEN_AFTER_PX: f64 = 100.0;
/// Hero scale/fade completes over this much scroll
pub const HERO_SCALE_DISTANCE_PX: f64 = 600.0;
/// Smallest scale the floating hero block shrinks to
pub const HERO_MIN_SCALE: f64 = 0.85;
/// `data-parallax` speed when the attribute is missing or unparseable
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.1;
/// Fixed header height subtracted when scrolling to an anchor
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 100.0;

/// Navbar and promo banner presentation for a scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarFrame {
    pub scrolled: bool,
    pub banner_hidden: bool,
}

impl NavbarFrame {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > NAVBAR_SCROLLED_AFTER_PX,
            banner_hidden: scroll_y > PROMO_HIDDEN_AFTER_PX,
        }
    }

    pub fn banner_transform(&self) -> &'static str {
        if self.banner_hidden {
            "translateX(-50%) translateY(-100%)"
        } else {
            "translateX(-50%) translateY(0)"
        }
    }

    pub fn banner_opacity(&self) -> &'static str {
        if self.banner_hidden { "0" } else { "1" }
    }
}

/// Vertical offset of the `index`-th hero orb; deeper orbs move faster
pub fn orb_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = 0.1 + index as f64 * 0.05;
    scroll_y * speed
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// Parse a `data-parallax` attribute
pub fn parallax_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite() && *speed != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Element's viewport-relative vertical extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalSpan {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Offset for a `data-parallax` element, `None` while it is off-screen
pub fn parallax_offset(span: VerticalSpan, viewport_height: f64, speed: f64) -> Option<f64> {
    span.intersects_viewport(viewport_height)
        .then(|| (span.top - viewport_height / 2.0) * speed)
}

/// Hero block presentation while scrolling away from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub floating_scale: f64,
    pub floating_opacity: f64,
    pub content_offset: f64,
    pub content_opacity: f64,
}

impl HeroFrame {
    /// `None` once the scroll offset is past the effect distance; the last
    /// applied frame is left in place
    pub fn at(scroll_y: f64) -> Option<Self> {
        if scroll_y >= HERO_SCALE_DISTANCE_PX {
            return None;
        }
        let progress = scroll_y.max(0.0) / HERO_SCALE_DISTANCE_PX;
        Some(Self {
            floating_scale: (1.0 - progress * 0.15).max(HERO_MIN_SCALE),
            floating_opacity: (1.0 - progress * 1.5).max(0.0),
            content_offset: scroll_y * 0.3,
            content_opacity: (1.0 - progress * 0.8).max(0.0),
        })
    }
}

/// Idle bobbing of the `index`-th floating hero card at `time_s` seconds
///
/// Returns `(translate_y_px, rotate_deg)`.
pub fn floating_card_pose(time_s: f64, index: usize) -> (f64, f64) {
    let base_delay = index as f64 * 2.0;
    let amplitude = 8.0 + index as f64 * 2.0;
    let y = (time_s + base_delay).sin() * amplitude;
    let rotation = (time_s * 0.5 + base_delay).sin() * 2.0;
    (y, rotation)
}

pub fn floating_card_transform(time_s: f64, index: usize) -> String {
    let (y, rotation) = floating_card_pose(time_s, index);
    format!("translateY({y}px) rotate({rotation}deg)")
}

/// Reading-progress bar width in percent
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Document offset to scroll to for an in-page anchor click
///
/// `href` of `"#"` means "no target". Returns `None` for it.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

pub fn anchor_scroll_top(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - ANCHOR_HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_thresholds() {
        assert_eq!(NavbarFrame::at(0.0), NavbarFrame { scrolled: false, banner_hidden: false });
        assert_eq!(NavbarFrame::at(60.0), NavbarFrame { scrolled: false, banner_hidden: false });
        assert_eq!(NavbarFrame::at(61.0), NavbarFrame { scrolled: true, banner_hidden: false });
        assert_eq!(NavbarFrame::at(101.0), NavbarFrame { scrolled: true, banner_hidden: true });
    }

    #[test]
    fn test_banner_styles() {
        let hidden = NavbarFrame::at(500.0);
        assert_eq!(hidden.banner_transform(), "translateX(-50%) translateY(-100%)");
        assert_eq!(hidden.banner_opacity(), "0");

        let shown = NavbarFrame::at(0.0);
        assert_eq!(shown.banner_transform(), "translateX(-50%) translateY(0)");
        assert_eq!(shown.banner_opacity(), "1");
    }

    #[test]
    fn test_orb_speeds_increase_with_depth() {
        assert!((orb_offset(100.0, 0) - 10.0).abs() < 1e-9);
        assert!((orb_offset(100.0, 1) - 15.0).abs() < 1e-9);
        assert!((orb_offset(100.0, 2) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_speed_parsing() {
        assert_eq!(parallax_speed(Some("0.3")), 0.3);
        assert_eq!(parallax_speed(Some(" -0.2 ")), -0.2);
        assert_eq!(parallax_speed(Some("fast")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(Some("0")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(None), DEFAULT_PARALLAX_SPEED);
    }

    #[test]
    fn test_parallax_only_in_viewport() {
        let vh = 800.0;
        assert_eq!(parallax_offset(VerticalSpan::new(600.0, 900.0), vh, 0.5), Some(100.0));
        assert_eq!(parallax_offset(VerticalSpan::new(0.0, 300.0), vh, 0.2), Some(-80.0));
        assert_eq!(parallax_offset(VerticalSpan::new(800.0, 1100.0), vh, 0.5), None);
        assert_eq!(parallax_offset(VerticalSpan::new(-400.0, 0.0), vh, 0.5), None);
    }

    #[test]
    fn test_hero_frame_at_top() {
        let frame = HeroFrame::at(0.0).unwrap();
        assert_eq!(frame.floating_scale, 1.0);
        assert_eq!(frame.floating_opacity, 1.0);
        assert_eq!(frame.content_offset, 0.0);
        assert_eq!(frame.content_opacity, 1.0);
    }

    #[test]
    fn test_hero_frame_clamps_to_floor() {
        let frame = HeroFrame::at(599.0).unwrap();
        assert!(frame.floating_scale >= HERO_MIN_SCALE);
        assert_eq!(frame.floating_opacity, 0.0);
        assert!(frame.content_opacity > 0.0);

        let half = HeroFrame::at(300.0).unwrap();
        assert!((half.floating_scale - 0.925).abs() < 1e-9);
        assert!((half.floating_opacity - 0.25).abs() < 1e-9);
        assert!((half.content_offset - 90.0).abs() < 1e-9);
        assert!((half.content_opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_hero_frame_stops_past_distance() {
        assert!(HeroFrame::at(600.0).is_none());
        assert!(HeroFrame::at(5000.0).is_none());
    }

    #[test]
    fn test_floating_cards_stay_within_amplitude() {
        for index in 0..3 {
            let amplitude = 8.0 + index as f64 * 2.0;
            let mut t = 0.0;
            while t < 20.0 {
                let (y, rotation) = floating_card_pose(t, index);
                assert!(y.abs() <= amplitude + 1e-9);
                assert!(rotation.abs() <= 2.0 + 1e-9);
                t += 0.37;
            }
        }
        assert_eq!(floating_card_transform(0.0, 0), "translateY(0px) rotate(0deg)");
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress_percent(50.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_anchor_targets() {
        assert_eq!(anchor_target("#faq"), Some("#faq"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
        assert_eq!(anchor_scroll_top(250.0, 1000.0), 1150.0);
    }
}
