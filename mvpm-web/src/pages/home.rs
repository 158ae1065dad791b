use mvpm_game::GameId;
use mvpm_game::config::FLAG_UI_FAQ;
use yew::prelude::*;

use crate::components::ui::email_form::EmailForm;
use crate::components::ui::game_card::GameCard;
use crate::hooks::use_services;

const FAQ_ENTRIES: [(&str, &str); 4] = [
    (
        "What is iterate?",
        "A training ground for product managers: short, brutal decision games that sharpen the instincts AI can't replace.",
    ),
    (
        "How long does a game take?",
        "Between 10 and 60 seconds on the clock. The dread is optional and free.",
    ),
    (
        "Do I need an account?",
        "No. Play instantly; join the waitlist if you want the full arsenal when it ships.",
    ),
    (
        "Is my gameplay data used?",
        "Aggregate interaction data helps tune the scenarios. Inputs are never shown to other players.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let services = use_services();

    let enabled_games: Vec<GameId> = GameId::ALL
        .into_iter()
        .filter(|game| services.app.game_enabled(*game))
        .collect();
    let show_faq = services.app.flags().resolve(FLAG_UI_FAQ, Some(true));

    let hero_cta = {
        let services = services.clone();
        Callback::from(move |_| {
            services
                .app
                .analytics()
                .cta_click("Join the Waitlist", "hero");
        })
    };

    html! {
        <main role="main" class="home">
            <section class="hero" aria-labelledby="hero-title">
                <h1 id="hero-title">{ "Don't let AI atrophy your PM instincts." }</h1>
                <p class="hero-subtitle">
                    { "iterate turns the hardest product-management moments into timed mini-games. Train the judgment calls that still belong to you." }
                </p>
                <a href="#signup" class="btn btn-primary" onclick={hero_cta}>
                    { "Join the Waitlist" }
                </a>
            </section>

            <section id="games" class="games-grid-section" aria-labelledby="games-title">
                <h2 id="games-title">{ "Prove it. Right now." }</h2>
                if enabled_games.is_empty() {
                    <p class="muted">{ "The arena is closed for maintenance. Check back soon." }</p>
                } else {
                    <div class="games-grid">
                        { for enabled_games.iter().map(|game| html! {
                            <GameCard game={*game} />
                        }) }
                    </div>
                }
            </section>

            <section class="how-it-works" aria-labelledby="how-title">
                <h2 id="how-title">{ "How it works" }</h2>
                <ol>
                    <li>{ "Pick a challenge. Each one is a real PM pressure-cooker." }</li>
                    <li>{ "Beat the clock. Seconds, not sprints." }</li>
                    <li>{ "Get scored feedback and share the receipts." }</li>
                </ol>
            </section>

            if show_faq {
                <section class="faq" aria-labelledby="faq-title">
                    <h2 id="faq-title">{ "FAQ" }</h2>
                    { for FAQ_ENTRIES.iter().map(|(question, answer)| html! {
                        <details>
                            <summary>{ *question }</summary>
                            <p>{ *answer }</p>
                        </details>
                    }) }
                </section>
            }

            <section id="coming-soon" class="coming-soon" aria-labelledby="soon-title">
                <h2 id="soon-title">{ "The Enterprise Arsenal is coming" }</h2>
                <p>{ "Team leaderboards, scenario packs tuned to your org, and a coach that never sleeps." }</p>
            </section>

            <section id="signup" class="signup" aria-labelledby="signup-title">
                <h2 id="signup-title">{ "Get in before the AI does" }</h2>
                <EmailForm />
            </section>
        </main>
    }
}
