//! Landing page component
//!
//! The LearnR marketing page:
//! - SEO meta tags and the promo banner
//! - Navbar with a mobile menu that locks page scroll while open
//! - Hero with typing headline, parallax orbs and floating cards
//! - Comparison, features bento grid, algorithm, steps and stats sections
//! - FAQ accordion
//! - Early-access form posting to the configured endpoint
//! - Footer with newsletter signup
//!
//! Everything scroll- or time-driven is attached after hydration by
//! [`LandingEffects`]; see `crate::ui::behaviors`.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SiteSettings;
use crate::core::form::{OTHER_COURSE_SENTINEL, OtherCourseField, SubmitState};
use crate::core::menu::{Accordion, CloseTrigger, MobileMenu};

#[cfg(feature = "hydrate")]
use crate::core::form::{SubmissionController, SubmitOutcome};

const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#stats", "Results"),
    ("#faq", "FAQ"),
];

const COURSES: [&str; 6] = [
    "AP Biology",
    "AP Chemistry",
    "SAT",
    "MCAT",
    "USMLE Step 1",
    OTHER_COURSE_SENTINEL,
];

const FAQS: [(&str, &str); 5] = [
    (
        "How is LearnR different from flashcard apps?",
        "Flashcard apps repeat what you already wrote down. LearnR maps every concept on your exam, finds the ones you are about to forget and builds each session around them.",
    ),
    (
        "Which exams are supported?",
        "AP sciences, SAT, MCAT and USMLE Step 1 at launch. Pick \"Other\" in the form below and tell us what you are studying for.",
    ),
    (
        "How much time do I need each day?",
        "Twenty minutes is enough. Sessions are short on purpose; spacing beats cramming.",
    ),
    (
        "Is early access free?",
        "Yes. Early access members keep free access until launch and get founding-member pricing afterwards.",
    ),
    (
        "What happens to my data?",
        "Your answers are used only to schedule your reviews. We never sell data and you can export or delete it at any time.",
    ),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <PromoBanner />
        <Header />

        <main>
            <Hero />
            <ComparisonSection />
            <FeaturesSection />
            <AlgorithmSection />
            <StepsSection />
            <StatsSection />
            <FaqSection />
            <EarlyAccessSection />
        </main>

        <Footer />
        <LandingEffects />
    }
}

/// Attaches scroll, reveal and pointer behaviors once the page is live
#[component]
fn LandingEffects() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| crate::ui::behaviors::mount());
        on_cleanup(crate::ui::behaviors::unmount);
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <Title text="LearnR - Study Less. Learn More. Actually Remember It." />

        <Meta name="description" content="LearnR finds your knowledge gaps, maps every exam concept and schedules reviews right before you forget. Join early access." />
        <Meta name="keywords" content="spaced repetition, study app, exam prep, MCAT, USMLE, SAT, AP, adaptive learning" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="LearnR - Study Less. Learn More." />
        <Meta property="og:description" content="Adaptive exam prep that remembers what you are about to forget." />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="LearnR - Study Less. Learn More." />

        {settings.canonical_url.map(|url| view! { <Link rel="canonical" href=url /> })}
    }
}

#[component]
fn PromoBanner() -> impl IntoView {
    view! {
        <div id="promoBanner" class="promo-banner">
            <span class="promo-dot"></span>
            "Early access is open. Founding members study free until launch."
            <a href="#early-access" class="promo-link">"Claim your spot →"</a>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::new());
    let is_open = move || menu.with(MobileMenu::is_open);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::{keydown, resize};

        use crate::core::throttling::{Debouncer, RESIZE_DEBOUNCE_MS};
        use crate::ui::{dom, scheduler};

        // Scroll lock follows the open flag
        Effect::new(move |_| {
            let overflow = menu.with(MobileMenu::body_overflow);
            if let Some(body) = document().body() {
                let _ = body.style().set_property("overflow", overflow);
            }
        });

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if menu.with_untracked(MobileMenu::is_open) {
                menu.update(|m| {
                    m.handle_key(&ev.key());
                });
            }
        });

        let debouncer = Debouncer::new(scheduler::shared(), RESIZE_DEBOUNCE_MS, move || {
            let width = dom::viewport_width(&window());
            if menu.with_untracked(MobileMenu::is_open) {
                menu.update(|m| {
                    m.handle_resize(width);
                });
            }
        });
        let handle_resize = window_event_listener(resize, move |_| debouncer.call());

        on_cleanup(move || {
            drop(handle_keydown);
            drop(handle_resize);
        });
    }

    view! {
        <nav id="navbar" class="navbar">
            <div class="nav-container">
                <a href="#" class="nav-logo">
                    <Logo />
                    <span>"LearnR"</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! {
                            <a href=href class="nav-link">{label}<span></span></a>
                        })
                        .collect_view()}
                </div>

                <a href="#early-access" class="btn btn-primary nav-cta">"Get Early Access"</a>

                <button
                    class="hamburger"
                    class=("active", is_open)
                    on:click=move |_| {
                        menu.update(|m| {
                            m.toggle();
                        })
                    }
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || if is_open() { "true" } else { "false" }
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>

        <div class="mobile-menu" class=("active", is_open)>
            {NAV_LINKS
                .into_iter()
                .map(|(href, label)| view! {
                    <a
                        href=href
                        class="mobile-link"
                        on:click=move |_| {
                            menu.update(|m| {
                                m.close(CloseTrigger::LinkClick);
                            })
                        }
                    >
                        {label}
                    </a>
                })
                .collect_view()}
            <a
                href="#early-access"
                class="btn btn-primary mobile-link"
                on:click=move |_| {
                    menu.update(|m| {
                        m.close(CloseTrigger::LinkClick);
                    })
                }
            >
                "Get Early Access"
            </a>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-orbs" aria-hidden="true">
                <div class="hero-orb orb-1"></div>
                <div class="hero-orb orb-2"></div>
                <div class="hero-orb orb-3"></div>
            </div>

            <div class="hero-content">
                <span class="hero-badge">"Now in early access"</span>
                <h1 class="hero-title">
                    "Study Less. Learn More."
                    <br />
                    <span class="gradient-text">"Actually Remember It."</span>
                </h1>
                <p class="hero-subtitle">
                    "LearnR is "
                    <span class="typing-text"></span>
                    <span class="typing-cursor" aria-hidden="true">"|"</span>
                </p>
                <div class="hero-actions">
                    <a href="#early-access" class="btn btn-primary btn-large">"Get Early Access"</a>
                    <a href="#how-it-works" class="btn btn-secondary btn-large">"See How It Works"</a>
                </div>
            </div>

            <div class="hero-floating" aria-hidden="true">
                <div class="floating-card card-1">
                    <span class="floating-label">"Retention"</span>
                    <strong>"94%"</strong>
                </div>
                <div class="floating-card card-2">
                    <span class="floating-label">"Next review"</span>
                    <strong>"in 2 days"</strong>
                </div>
                <div class="floating-card card-3">
                    <span class="floating-label">"Weak spot"</span>
                    <strong>"Enzyme kinetics"</strong>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeader(eyebrow: &'static str, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <span class="section-eyebrow" data-animate>{eyebrow}</span>
            <h2 class="section-title" data-word-reveal inner_html=title></h2>
            <p class="section-subtitle" data-animate>{subtitle}</p>
        </div>
    }
}

#[component]
fn ComparisonSection() -> impl IntoView {
    view! {
        <section class="section comparison">
            <SectionHeader
                eyebrow="The problem"
                title="You forget <em>70%</em> of what you study within a day"
                subtitle="Rereading feels productive. It is not."
            />
            <div class="comparison-container">
                <div class="comparison-card comparison-old glass-card">
                    <h3>"Traditional studying"</h3>
                    <ul>
                        <li>"Rereading notes until they feel familiar"</li>
                        <li>"Same flashcards every day"</li>
                        <li>"Cramming the week before"</li>
                    </ul>
                </div>
                <div class="comparison-card comparison-new glass-card">
                    <h3>"Studying with LearnR"</h3>
                    <ul>
                        <li>"Questions on what you are about to forget"</li>
                        <li>"Difficulty that adapts to every answer"</li>
                        <li>"Reviews spaced right before memory fades"</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <SectionHeader
                eyebrow="Features"
                title="Built around how <em>memory</em> actually works"
                subtitle="Every feature exists to move knowledge into long-term memory."
            />
            <div class="bento-grid">
                <div class="bento-card bento-wide glass-card" data-animate>
                    <h3>"Forgetting curve tracking"</h3>
                    <p>"LearnR models how fast each concept fades for you and schedules the review before it drops."</p>
                    <svg class="curve-svg" viewBox="0 0 300 120" aria-hidden="true">
                        <path
                            class="curve-path"
                            d="M 0 10 C 60 80, 120 100, 300 110"
                            fill="none"
                            stroke="url(#curveGradient)"
                            stroke-width="3"
                        />
                        <defs>
                            <linearGradient id="curveGradient" x1="0" x2="1" y1="0" y2="0">
                                <stop offset="0%" stop-color="#8b5cf6" />
                                <stop offset="100%" stop-color="#6366f1" />
                            </linearGradient>
                        </defs>
                    </svg>
                </div>
                <div class="bento-card glass-card" data-animate>
                    <h3>"Adaptive difficulty"</h3>
                    <p>"Questions get harder as you improve."</p>
                    <div class="diff-bars">
                        <div class="diff-bar diff-easy">"Easy"</div>
                        <div class="diff-bar diff-medium">"Medium"</div>
                        <div class="diff-bar diff-hard">"Hard"</div>
                    </div>
                </div>
                <div class="bento-card glass-card" data-animate>
                    <h3>"Knowledge gap finder"</h3>
                    <p>"A ten-minute diagnostic shows exactly where to start."</p>
                </div>
                <div class="bento-card glass-card" data-animate>
                    <h3>"Exam concept map"</h3>
                    <p>"Every topic on your exam, linked by what depends on what."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AlgorithmSection() -> impl IntoView {
    let cards = [
        ("01", "Diagnose", "Short adaptive quiz to find what you know and what you only recognize."),
        ("02", "Prioritize", "Concepts ranked by exam weight and how close you are to forgetting them."),
        ("03", "Practice", "Active recall questions, never passive rereading."),
        ("04", "Space", "Each correct answer pushes the next review further out."),
    ];

    view! {
        <section class="section algorithm">
            <SectionHeader
                eyebrow="The algorithm"
                title="Four steps, <em>every</em> session"
                subtitle="The loop that turns cramming into remembering."
            />
            <div class="algorithm-grid">
                {cards
                    .into_iter()
                    .map(|(number, title, body)| view! {
                        <div class="algo-card glass-card" data-animate>
                            <span class="algo-number">{number}</span>
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StepsSection() -> impl IntoView {
    let steps = [
        ("Pick your exam", "Choose the test you are preparing for and your exam date."),
        ("Take the diagnostic", "Ten minutes to map your strengths and gaps."),
        ("Study twenty minutes a day", "LearnR plans every session until exam day."),
    ];

    view! {
        <section id="how-it-works" class="section">
            <SectionHeader
                eyebrow="How it works"
                title="From signup to <em>remembering</em> in three steps"
                subtitle="No setup, no card writing."
            />
            <div class="steps-grid">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, body))| view! {
                        <div class="step-card glass-card" data-animate>
                            <span class="step-index">{i + 1}</span>
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StatsSection() -> impl IntoView {
    let stats = [
        ("12000", "+", "practice questions"),
        ("94", "%", "average retention after 30 days"),
        ("3", "x", "less study time than rereading"),
        ("20", " min", "a day is all it takes"),
    ];

    view! {
        <section id="stats" class="section stats">
            <div class="stats-grid">
                {stats
                    .into_iter()
                    .map(|(target, suffix, label)| view! {
                        <div class="stat-card glass-card" data-animate>
                            <div class="stat-value">
                                <span class="stat-number" data-counter=target>"0"</span>
                                <span class="stat-suffix">{suffix}</span>
                            </div>
                            <p class="stat-label">{label}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let faq = RwSignal::new(Accordion::new(FAQS.len()));

    view! {
        <section id="faq" class="section">
            <SectionHeader
                eyebrow="FAQ"
                title="Questions, <em>answered</em>"
                subtitle="Anything else? Ask us after you sign up."
            />
            <div class="faq-grid">
                {FAQS
                    .into_iter()
                    .enumerate()
                    .map(|(index, (question, answer))| view! {
                        <FaqItem faq=faq index=index question=question answer=answer />
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FaqItem(
    faq: RwSignal<Accordion>,
    index: usize,
    question: &'static str,
    answer: &'static str,
) -> impl IntoView {
    let is_open = move || faq.with(|f| f.is_open(index));

    view! {
        <div class="faq-item" class=("open", is_open)>
            <button
                class="faq-question"
                on:click=move |_| faq.update(|f| f.toggle(index))
                aria-expanded=move || faq.with(|f| f.aria_expanded(index))
            >
                <span>{question}</span>
                <svg class="faq-chevron" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                </svg>
            </button>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}

#[component]
fn EarlyAccessSection() -> impl IntoView {
    view! {
        <section id="early-access" class="section cta">
            <div class="cta-card glass-card" data-animate>
                <h2 class="section-title">"Get early access"</h2>
                <p class="section-subtitle">"Join the waitlist. We will email you when your exam is ready."</p>
                <EarlyAccessForm />
            </div>
        </section>
    }
}

#[component]
fn EarlyAccessForm() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let state = RwSignal::new(SubmitState::Idle);
    let other_course = RwSignal::new(OtherCourseField::for_selection(""));
    let other_value = RwSignal::new(String::new());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(SubmissionController::new(
        crate::ui::scheduler::shared(),
        move |next| state.set(next),
    ));

    let on_course_change = move |ev| {
        let field = OtherCourseField::for_selection(&event_target_value(&ev));
        if field.clear {
            other_value.set(String::new());
        }
        other_course.set(field);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use leptos::logging::{error, log, warn};
            use leptos::task::spawn_local;

            use crate::ui::transport::{GlooFormTransport, form_fields};

            let Some(form) = form_ref.get() else {
                return;
            };
            let endpoint = form.action();
            let fields = form_fields(&form);
            let controller = controller.get_value();

            spawn_local(async move {
                match controller.submit(&GlooFormTransport, &endpoint, &fields).await {
                    Ok(SubmitOutcome::Delivered) => {
                        log!("Early access signup delivered");
                        form.reset();
                        other_course.set(OtherCourseField::for_selection(""));
                        other_value.set(String::new());
                    }
                    Ok(SubmitOutcome::Failed(err)) => error!("Early access signup failed: {err}"),
                    Err(rejected) => warn!("Early access signup ignored: {rejected}"),
                }
            });
        }
    };

    view! {
        <form
            id="ctaForm"
            class="cta-form"
            action=settings.form_endpoint
            method="POST"
            node_ref=form_ref
            on:submit=on_submit
        >
            <div class="form-row">
                <input type="text" name="name" placeholder="Your name" required />
                <input type="email" name="email" placeholder="you@school.edu" required />
            </div>
            <div class="form-row">
                <select id="cta-course" name="course" required on:change=on_course_change>
                    <option value="" selected disabled>"What are you studying for?"</option>
                    {COURSES
                        .into_iter()
                        .map(|course| view! { <option value=course>{course}</option> })
                        .collect_view()}
                </select>
            </div>
            <div
                id="otherCourseGroup"
                class="form-row other-course"
                style:display=move || other_course.with(OtherCourseField::display)
            >
                <input
                    id="cta-other-course"
                    type="text"
                    name="other_course"
                    placeholder="Which exam or course?"
                    required=move || other_course.with(|f| f.required)
                    prop:value=move || other_value.get()
                    on:input=move |ev| other_value.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary btn-large cta-submit"
                disabled=move || state.with(SubmitState::is_disabled)
                style:background=move || state.with(|s| s.background().unwrap_or_default())
            >
                <span class="btn-text">{move || state.with(SubmitState::label)}</span>
                {move || {
                    state
                        .with(SubmitState::hover_label)
                        .map(|label| view! { <span class="btn-hover-text">{label}</span> })
                }}
            </button>
        </form>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <svg class="logo-mark" width="28" height="28" viewBox="0 0 32 32" fill="none" aria-hidden="true">
            <rect width="32" height="32" rx="8" fill="url(#logoGradient)" />
            <path d="M10 9v14h12" stroke="white" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
            <defs>
                <linearGradient id="logoGradient" x1="0" y1="0" x2="32" y2="32">
                    <stop offset="0%" stop-color="#8b5cf6" />
                    <stop offset="100%" stop-color="#6366f1" />
                </linearGradient>
            </defs>
        </svg>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#" class="nav-logo">
                        <Logo />
                        <span>"LearnR"</span>
                    </a>
                    <p>"Study less. Learn more. Actually remember it."</p>
                </div>

                <div class="footer-links">
                    <h4>"Product"</h4>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href>{label}</a> })
                        .collect_view()}
                </div>

                <div class="footer-newsletter">
                    <h4>"Study tips, monthly"</h4>
                    <form class="newsletter-form">
                        <input type="email" placeholder="you@school.edu" required />
                        <button type="submit" class="btn btn-primary">"Subscribe"</button>
                    </form>
                </div>
            </div>

            <div class="footer-bottom">
                <span>"© 2025 LearnR. All rights reserved."</span>
            </div>
        </footer>
    }
}

#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --violet: #8b5cf6;
                --indigo: #6366f1;
                --ink: #0f0a1f;
                --muted: #6b6880;
                --glass: rgba(255, 255, 255, 0.7);
                --ease-out-expo: cubic-bezier(0.16, 1, 0.3, 1);
            }

            * { box-sizing: border-box; }
            body {
                margin: 0;
                font-family: Inter, system-ui, -apple-system, sans-serif;
                color: var(--ink);
                background: #faf9ff;
                overflow-x: hidden;
            }
            a { color: inherit; text-decoration: none; }

            /* Promo banner */
            .promo-banner {
                position: fixed;
                top: 12px;
                left: 50%;
                transform: translateX(-50%) translateY(0);
                z-index: 1001;
                display: flex;
                gap: 0.5rem;
                align-items: center;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: var(--ink);
                color: white;
                font-size: 0.85rem;
                transition: transform 0.4s var(--ease-out-expo), opacity 0.4s;
            }
            .promo-dot { width: 8px; height: 8px; border-radius: 50%; background: #10b981; }
            .promo-link { font-weight: 600; color: #c4b5fd; }

            /* Navbar */
            .navbar {
                position: fixed;
                top: 56px;
                left: 0;
                right: 0;
                z-index: 1000;
                transition: top 0.3s, background 0.3s, box-shadow 0.3s;
            }
            .navbar.scrolled {
                top: 0;
                background: rgba(250, 249, 255, 0.85);
                backdrop-filter: blur(12px);
                box-shadow: 0 1px 0 rgba(15, 10, 31, 0.06);
            }
            .nav-container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 1rem 1.5rem;
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-logo { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; }
            .nav-links { display: flex; gap: 1.5rem; margin-left: auto; }
            .nav-link { position: relative; color: var(--muted); font-weight: 500; }
            .nav-link span {
                position: absolute;
                left: 0;
                bottom: -4px;
                height: 2px;
                width: 100%;
                background: linear-gradient(90deg, var(--violet), var(--indigo)) no-repeat;
                background-size: 0% 2px;
                transition: background-size 0.3s var(--ease-out-expo);
            }
            .nav-link:hover span { background-size: 100% 2px; }

            .hamburger { display: none; background: none; border: 0; cursor: pointer; padding: 0.5rem; }
            .hamburger span { display: block; width: 22px; height: 2px; margin: 5px 0; background: var(--ink); transition: transform 0.3s, opacity 0.3s; }
            .hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
            .hamburger.active span:nth-child(2) { opacity: 0; }
            .hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

            .mobile-menu {
                position: fixed;
                inset: 0;
                z-index: 999;
                display: flex;
                flex-direction: column;
                justify-content: center;
                align-items: center;
                gap: 1.5rem;
                background: rgba(250, 249, 255, 0.98);
                opacity: 0;
                pointer-events: none;
                transition: opacity 0.3s;
            }
            .mobile-menu.active { opacity: 1; pointer-events: auto; }
            .mobile-link { font-size: 1.5rem; font-weight: 600; }

            @media (max-width: 768px) {
                .nav-links, .nav-cta { display: none; }
                .hamburger { display: block; margin-left: auto; }
            }

            /* Buttons */
            .btn {
                position: relative;
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                border: 0;
                border-radius: 12px;
                font-weight: 600;
                cursor: pointer;
                overflow: hidden;
                will-change: transform;
            }
            .btn::before {
                content: "";
                position: absolute;
                left: var(--mouse-x, 50%);
                top: var(--mouse-y, 50%);
                width: 0;
                height: 0;
                border-radius: 50%;
                background: rgba(255, 255, 255, 0.25);
                transform: translate(-50%, -50%);
                transition: width 0.4s, height 0.4s;
            }
            .btn:hover::before { width: 240px; height: 240px; }
            .btn-primary { color: white; background: linear-gradient(135deg, var(--violet), var(--indigo)); }
            .btn-secondary { color: var(--ink); background: white; box-shadow: inset 0 0 0 1px rgba(15, 10, 31, 0.12); }
            .btn-large { padding: 1rem 2rem; font-size: 1.05rem; }
            .btn:disabled { cursor: default; opacity: 0.9; }
            .btn-hover-text { display: none; }
            .btn:hover .btn-hover-text { display: inline; }
            .cta-submit:not(:disabled):hover .btn-text { display: none; }

            /* Hero */
            .hero {
                position: relative;
                min-height: 100vh;
                display: grid;
                grid-template-columns: 1.2fr 1fr;
                align-items: center;
                gap: 2rem;
                max-width: 1200px;
                margin: 0 auto;
                padding: 10rem 1.5rem 4rem;
            }
            .hero-orbs { position: absolute; inset: 0; z-index: -1; overflow: hidden; }
            .hero-orb { position: absolute; border-radius: 50%; filter: blur(80px); opacity: 0.5; will-change: transform; }
            .orb-1 { width: 420px; height: 420px; top: 5%; left: -10%; background: var(--violet); }
            .orb-2 { width: 320px; height: 320px; top: 35%; right: -5%; background: var(--indigo); }
            .orb-3 { width: 260px; height: 260px; bottom: 0; left: 40%; background: #ec4899; }
            .hero-badge { display: inline-block; padding: 0.35rem 0.9rem; border-radius: 999px; background: #ede9fe; color: #6d28d9; font-weight: 600; font-size: 0.85rem; }
            .hero-title { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.05; margin: 1rem 0; }
            .gradient-text { background: linear-gradient(135deg, var(--violet), var(--indigo)); -webkit-background-clip: text; background-clip: text; color: transparent; }
            .hero-subtitle { font-size: 1.25rem; color: var(--muted); min-height: 2em; }
            .typing-text { color: var(--violet); font-weight: 600; }
            .typing-cursor { animation: blink 1s step-end infinite; color: var(--violet); }
            @keyframes blink { 50% { opacity: 0; } }
            .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 2rem; }
            .hero-floating { position: relative; height: 420px; will-change: transform, opacity; }
            .floating-card {
                position: absolute;
                padding: 1rem 1.25rem;
                border-radius: 16px;
                background: var(--glass);
                backdrop-filter: blur(16px);
                box-shadow: 0 20px 40px rgba(99, 102, 241, 0.15);
                display: flex;
                flex-direction: column;
                gap: 0.25rem;
            }
            .floating-label { font-size: 0.8rem; color: var(--muted); }
            .card-1 { top: 10%; left: 10%; }
            .card-2 { top: 45%; right: 5%; }
            .card-3 { bottom: 5%; left: 25%; }

            @media (max-width: 900px) {
                .hero { grid-template-columns: 1fr; padding-top: 8rem; }
                .hero-floating { display: none; }
            }

            /* Sections */
            .section { max-width: 1200px; margin: 0 auto; padding: 6rem 1.5rem; }
            .section-header { text-align: center; max-width: 720px; margin: 0 auto 3.5rem; opacity: 0; transform: translateY(30px); transition: all 0.8s var(--ease-out-expo); }
            .section-header.animate-in { opacity: 1; transform: none; }
            .section-eyebrow { color: var(--violet); font-weight: 600; text-transform: uppercase; letter-spacing: 0.08em; font-size: 0.8rem; }
            .section-title { font-size: clamp(2rem, 4vw, 3rem); margin: 0.75rem 0; line-height: 1.15; }
            .section-title em { font-style: normal; color: var(--violet); }
            .section-subtitle { color: var(--muted); font-size: 1.1rem; }

            [data-animate] { opacity: 0; transform: translateY(30px); transition: opacity 0.6s var(--ease-out-expo), transform 0.6s var(--ease-out-expo); }
            [data-animate].animate-in { opacity: 1; transform: none; }

            .word { display: inline-block; opacity: 0; transform: translateY(12px); transition: opacity 0.5s, transform 0.5s var(--ease-out-expo); transition-delay: calc(var(--word-index) * 60ms); }
            .word.highlight { color: var(--violet); }
            .words-visible .word { opacity: 1; transform: none; }

            .glass-card { background: var(--glass); backdrop-filter: blur(16px); border-radius: 20px; padding: 1.75rem; box-shadow: 0 1px 0 rgba(15, 10, 31, 0.06), 0 20px 40px rgba(15, 10, 31, 0.04); will-change: transform; }

            .comparison-container { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; opacity: 0; transform: translateY(30px); transition: all 0.8s var(--ease-out-expo); }
            .comparison-container.animate-in { opacity: 1; transform: none; }
            .comparison-old li { color: var(--muted); }
            .comparison-new { box-shadow: inset 0 0 0 2px var(--violet); }

            .bento-grid, .algorithm-grid, .steps-grid, .stats-grid, .faq-grid { display: grid; gap: 1.25rem; }
            .bento-grid { grid-template-columns: repeat(3, 1fr); }
            .bento-wide { grid-column: span 2; }
            .algorithm-grid, .stats-grid { grid-template-columns: repeat(4, 1fr); }
            .steps-grid { grid-template-columns: repeat(3, 1fr); }
            .faq-grid { max-width: 800px; margin: 0 auto; }
            @media (max-width: 900px) {
                .bento-grid, .algorithm-grid, .steps-grid, .stats-grid, .comparison-container { grid-template-columns: 1fr; }
                .bento-wide { grid-column: auto; }
            }

            .curve-svg { width: 100%; height: 120px; margin-top: 1rem; }
            .curve-path { stroke-dasharray: 400; stroke-dashoffset: 400; }
            @keyframes drawCurve { to { stroke-dashoffset: 0; } }

            .diff-bars { display: flex; flex-direction: column; gap: 0.5rem; margin-top: 1rem; }
            .diff-bar { padding: 0.4rem 0.75rem; border-radius: 8px; color: white; font-size: 0.85rem; font-weight: 600; }
            .diff-easy { background: #10b981; width: 50%; }
            .diff-medium { background: #f59e0b; width: 70%; }
            .diff-hard { background: #ef4444; width: 90%; }

            .algo-number, .step-index { font-weight: 800; font-size: 1.5rem; color: var(--violet); }

            .stat-value { font-size: 2.5rem; font-weight: 800; }
            .stat-label { color: var(--muted); margin: 0.25rem 0 0; }

            /* FAQ */
            .faq-item { border-radius: 16px; background: white; box-shadow: inset 0 0 0 1px rgba(15, 10, 31, 0.08); overflow: hidden; }
            .faq-question { width: 100%; display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding: 1.25rem 1.5rem; border: 0; background: none; font: inherit; font-weight: 600; text-align: left; cursor: pointer; }
            .faq-chevron { width: 20px; height: 20px; flex-shrink: 0; transition: transform 0.3s; }
            .faq-item.open .faq-chevron { transform: rotate(180deg); }
            .faq-answer { max-height: 0; overflow: hidden; padding: 0 1.5rem; color: var(--muted); transition: max-height 0.4s var(--ease-out-expo); }
            .faq-item.open .faq-answer { max-height: 320px; }

            /* Early access */
            .cta-card { max-width: 720px; margin: 0 auto; text-align: center; }
            .cta-form { display: flex; flex-direction: column; gap: 0.75rem; margin-top: 1.5rem; }
            .form-row { display: flex; gap: 0.75rem; }
            .cta-form input, .cta-form select { flex: 1; padding: 0.9rem 1rem; border-radius: 12px; border: 1px solid rgba(15, 10, 31, 0.12); font: inherit; background: white; }
            .other-course { display: none; }

            /* Footer */
            .footer { border-top: 1px solid rgba(15, 10, 31, 0.08); padding: 4rem 1.5rem 2rem; }
            .footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 2fr; gap: 2rem; }
            .footer-links { display: flex; flex-direction: column; gap: 0.5rem; color: var(--muted); }
            .newsletter-form { display: flex; gap: 0.5rem; }
            .newsletter-form input { flex: 1; padding: 0.75rem 1rem; border-radius: 12px; border: 1px solid rgba(15, 10, 31, 0.12); font: inherit; }
            .footer-bottom { max-width: 1200px; margin: 2rem auto 0; color: var(--muted); font-size: 0.85rem; }
            @media (max-width: 768px) {
                .footer-grid { grid-template-columns: 1fr; }
                .form-row { flex-direction: column; }
            }

            @media (prefers-reduced-motion: reduce) {
                [data-animate], .section-header, .comparison-container, .word { transition: none; }
                .typing-cursor { animation: none; }
            }
            "#
        </style>
    }
}
