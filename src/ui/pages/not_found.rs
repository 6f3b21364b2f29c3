//! Not found page component
//!
//! A 404 page for any path other than the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <div class="not-found">
            <div class="not-found-content">
                // Magnifier icon
                <div class="not-found-icon">
                    <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                        <circle cx="11" cy="11" r="7" stroke-width="2" />
                        <path stroke-linecap="round" stroke-width="2" d="M20 20l-4-4" />
                    </svg>
                </div>

                <h1 class="not-found-code">"404"</h1>
                <h2 class="section-title">"Page Not Found"</h2>
                <p class="section-subtitle">
                    "This page slipped out of memory. Even spaced repetition can't bring it back."
                </p>

                <A href="/" attr:class="btn btn-primary btn-large">
                    "Back to LearnR"
                </A>
            </div>

            <p class="not-found-footer">"© 2025 LearnR"</p>

            <style>
                r#"
                .not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 1rem; text-align: center; font-family: Inter, system-ui, sans-serif; background: #faf9ff; color: #0f0a1f; }
                .not-found-icon { width: 96px; height: 96px; margin: 0 auto 1.5rem; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: #ede9fe; color: #8b5cf6; }
                .not-found-code { font-size: 4rem; margin: 0; }
                .not-found .section-subtitle { color: #6b6880; margin-bottom: 2rem; }
                .not-found .btn { display: inline-flex; padding: 1rem 2rem; border-radius: 12px; color: white; font-weight: 600; background: linear-gradient(135deg, #8b5cf6, #6366f1); text-decoration: none; }
                .not-found-footer { position: absolute; bottom: 2rem; font-size: 0.85rem; color: #6b6880; }
                "#
            </style>
        </div>
    }
}
