//! User preference detection via media queries

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the user asked the OS for reduced motion. Read once at startup;
/// always `false` during server rendering.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY)
        {
            return media_query.matches();
        }
    }
    false
}
