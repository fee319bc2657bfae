use yew::prelude::*;
use yew_router::prelude::*;

use crate::behaviors::PageBehaviors;
use crate::config::BehaviorConfig;
use crate::Route;

#[derive(Clone, PartialEq)]
struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        period: "forever",
        features: &["3 meetings per month", "Transcripts", "Text summaries"],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: "$12",
        period: "per month",
        features: &[
            "Unlimited meetings",
            "Bangla & Banglish transcription",
            "Audio recaps and PDF export",
            "Ask questions about past meetings",
        ],
        highlighted: true,
    },
    Plan {
        name: "Team",
        price: "$39",
        period: "per month",
        features: &["Everything in Pro", "Shared meeting library", "Priority support"],
        highlighted: false,
    },
];

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    html! {
        <div class={classes!("pricing-card", plan.highlighted.then(|| "highlighted"))}>
            <h3>{plan.name}</h3>
            <div class="price">
                <span class="amount">{plan.price}</span>
                <span class="period">{plan.period}</span>
            </div>
            <ul class="feature-list">
                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <a href="/signup/" class="hero-cta">{"Choose "}{plan.name}</a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_effect_with_deps(
        move |_| {
            let config = BehaviorConfig::default().with_card_selectors([".pricing-card"]);
            let behaviors = match PageBehaviors::install_card_reveal(&config) {
                Ok(behaviors) => Some(behaviors),
                Err(e) => {
                    log::error!("Failed to install pricing card reveal: {}", e);
                    None
                }
            };
            move || drop(behaviors)
        },
        (),
    );

    html! {
        <div class="pricing-page">
            <header class="pricing-header">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Meeting Agent"}
                </Link<Route>>
                <h1>{"Simple Pricing"}</h1>
                <p>{"Start free. Upgrade when your calendar fills up."}</p>
            </header>
            <section class="pricing-grid">
                { for PLANS.iter().map(|plan| html! { <PlanCard plan={plan.clone()} /> }) }
            </section>
        </div>
    }
}
