use yew::prelude::*;
use yew_router::prelude::*;

use crate::behaviors::PageBehaviors;
use crate::config::BehaviorConfig;
use crate::Route;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🤖",
        "Joins For You",
        "Schedule a meeting and the bot joins your Google Meet call on time, even when you can't.",
    ),
    (
        "📝",
        "Live Transcripts",
        "Every speaker is transcribed, including Bangla and Banglish conversations.",
    ),
    (
        "📄",
        "Summaries & PDFs",
        "Get a concise summary, an audio recap and a PDF export the moment the call ends.",
    ),
    (
        "💬",
        "Ask Your Meetings",
        "Ask questions about any past meeting and get answers grounded in what was said.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    ("Create a Meeting", "Paste your meeting link and pick a time. Give your bot a name."),
    ("Let It Listen", "The bot joins, records the conversation and captures shared screens."),
    ("Read the Recap", "Transcript, summary and slides are waiting on your dashboard."),
];

const TEAM: &[(&str, &str)] = &[
    ("Alvi", "Speech & Transcription"),
    ("Nadia", "Product & Design"),
    ("Tanvir", "Infrastructure"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire the page behaviors once the markup is in the DOM; the teardown
    // detaches them again when the route changes.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }

            let behaviors = match PageBehaviors::install_global(&BehaviorConfig::default()) {
                Ok(behaviors) => Some(behaviors),
                Err(e) => {
                    log::error!("Failed to install page behaviors: {}", e);
                    None
                }
            };

            move || drop(behaviors)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <header class="site-header">
                <nav class="nav-content">
                    <a href="#" class="nav-logo">{"Meeting Agent"}</a>
                    <button class="menu-toggle" aria-label="Toggle navigation">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class="nav-links">
                        <a href="#features">{"Features"}</a>
                        <a href="#how-it-works">{"How It Works"}</a>
                        <a href="#team">{"Team"}</a>
                        <Link<Route> to={Route::Pricing} classes="nav-link">
                            {"Pricing"}
                        </Link<Route>>
                        <a href="/login/" class="nav-login-button">{"Login"}</a>
                    </div>
                </nav>
            </header>

            <section class="hero">
                <div class="hero-content">
                    <h1>{"Never Take Meeting Notes Again"}</h1>
                    <p class="subtitle">
                        {"Your AI assistant joins the call, transcribes every word and hands you the summary."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="/signup/" class="hero-cta">{"Get Started"}</a>
                        <a href="#how-it-works" class="secondary-link">{"See how it works"}</a>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"Everything After the Call, Done"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>{"How It Works"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                        <div class="step-card">
                            <div class="step-number">{(i + 1).to_string()}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="team" class="team">
                <h2>{"The Team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <div class="team-member">
                            <div class="team-avatar">{name.chars().next().unwrap_or('?').to_string()}</div>
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }) }
                </div>
            </section>

            <footer class="footer-cta">
                <div class="footer-content">
                    <h2>{"Ready for Calmer Meetings?"}</h2>
                    <Link<Route> to={Route::Pricing} classes="forward-link">
                        <button class="hero-cta">{"View Pricing"}</button>
                    </Link<Route>>
                    <p class="disclaimer">{"Works with Google Meet. Transcripts stay on your dashboard."}</p>
                </div>
            </footer>
        </div>
    }
}
