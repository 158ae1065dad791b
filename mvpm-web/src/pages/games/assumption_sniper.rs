use mvpm_game::scoring::assumptions::{MIN_SLOT_LEN, SLOT_COUNT};
use mvpm_game::{GameId, GamePhase, Scenario, ScoreDetails, SessionInput, SlotClass};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::GameHeader;
use crate::components::ui::feedback_box::FeedbackBox;
use crate::components::ui::loading_indicator::LoadingIndicator;
use crate::components::ui::share_buttons::ShareButtons;
use crate::hooks::{SessionHandle, use_game_session, use_services};
use crate::pages::games::GameUnavailable;
use crate::router::Route;
use crate::services::scoring::analyze_assumptions;

const GAME: GameId = GameId::AssumptionSniper;

#[function_component(AssumptionSniperPage)]
pub fn assumption_sniper_page() -> Html {
    let services = use_services();
    // Gate by feature flag, defaulting open like the rest of the catalog.
    if !services.app.game_enabled(GAME) {
        return html! { <GameUnavailable game={GAME} /> };
    }
    html! { <SniperGame /> }
}

#[function_component(SniperGame)]
fn sniper_game() -> Html {
    let handle = use_game_session(GAME);

    let remaining = handle.read(|session| session.time_remaining()).unwrap_or(0);
    let body = match handle.phase() {
        GamePhase::Loading => html! {
            <LoadingIndicator text="Loading the crime scene..." />
        },
        GamePhase::Ready => html! {},
        GamePhase::Playing => render_playing(&handle),
        GamePhase::Submitting => html! {
            <LoadingIndicator text="AI analyzing your PM instincts..." />
        },
        GamePhase::Results => render_results(&handle),
    };

    html! {
        <>
            <GameHeader />
            <div class="game-container">
                <div class="game-header">
                    <h1 class="game-title">{ GAME.title() }</h1>
                    <p class="game-subtitle">{ GAME.tagline() }</p>
                    <div class="timer-container">
                        <div class={classes!("timer", (remaining <= 10).then_some("warning"))}>
                            { remaining }
                        </div>
                        <div class="game-status">{ "Ready to Hunt Assumptions?" }</div>
                    </div>
                </div>
                { body }
            </div>
        </>
    }
}

fn slot_values(handle: &SessionHandle) -> [String; SLOT_COUNT] {
    handle
        .read(|session| match session.input() {
            SessionInput::Assumptions(slots) => slots.clone(),
            _ => [String::new(), String::new(), String::new()],
        })
        .unwrap_or_else(|| [String::new(), String::new(), String::new()])
}

fn render_playing(handle: &SessionHandle) -> Html {
    let Some(Some(scenario)) = handle.read(|session| {
        let Scenario::Audit(audit) = session.scenario() else {
            return None;
        };
        Some(audit.clone())
    }) else {
        return html! {};
    };
    let slots = slot_values(handle);
    let all_filled = slots.iter().all(|slot| slot.trim().len() >= MIN_SLOT_LEN);

    let on_submit = {
        let handle = handle.clone();
        Callback::from(move |_| {
            let slots = slot_values(&handle);
            if handle.update(|session| session.submit_deferred()) != Some(Ok(())) {
                return;
            }
            // Remote analysis first; the session falls back to the local
            // scorer on any failure.
            let handle = handle.clone();
            spawn_local(async move {
                let verdict = analyze_assumptions(&slots).await;
                handle.update(|session| session.resolve_remote(verdict));
            });
        })
    };

    html! {
        <>
            <div class="scenario-section">
                <h3 class="scenario-title">{ &scenario.title }</h3>
                <div class="scenario-description">{ &scenario.description }</div>
                <div class="challenge-brief">{ &scenario.challenge }</div>
            </div>

            <div class="input-section">
                <div class="assumptions-grid">
                    { for (0..SLOT_COUNT).map(|index| {
                        let oninput = {
                            let handle = handle.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(area) = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
                                {
                                    handle.update(|session| session.set_slot(index, area.value()));
                                }
                            })
                        };
                        html! {
                            <div class="assumption-input">
                                <div class="assumption-number">{ index + 1 }</div>
                                <textarea
                                    class="assumption-text"
                                    placeholder="What deadly assumption lurked beneath the surface?"
                                    value={slots[index].clone()}
                                    oninput={oninput}
                                />
                            </div>
                        }
                    }) }
                </div>
                <div class="submit-section">
                    <button class="submit-btn" onclick={on_submit} disabled={!all_filled}>
                        { if all_filled { "Defuse the Assumptions" } else { "Need All 3 Assumptions" } }
                    </button>
                </div>
            </div>
        </>
    }
}

const fn classification_class(class: SlotClass) -> &'static str {
    match class {
        SlotClass::Correct => "correct",
        SlotClass::Partial => "partial",
        SlotClass::Incorrect => "incorrect",
    }
}

const fn badge_for(score: i32) -> &'static str {
    if score >= 5 {
        "Expert Assumption Hunter"
    } else if score >= 3 {
        "Solid PM Detective"
    } else {
        "Developing Instincts"
    }
}

fn render_results(handle: &SessionHandle) -> Html {
    let Some(Some((outcome, time_spent))) = handle.read(|session| {
        session
            .outcome()
            .cloned()
            .map(|outcome| (outcome, session.time_spent()))
    }) else {
        return html! {};
    };
    let score = outcome.score as i32;
    let analysis = match &outcome.details {
        ScoreDetails::Assumptions { analysis } => analysis.clone(),
        _ => Vec::new(),
    };

    let on_restart = {
        let handle = handle.clone();
        Callback::from(move |_| handle.restart())
    };

    html! {
        <>
            <div class="results-section show">
                <div class="score-display">
                    <h3 class="score-title">{ "Assumption Hunt Complete!" }</h3>
                    <div class="final-score">{ format!("{score}/6") }</div>
                    <div class="performance-badge">{ badge_for(score) }</div>
                </div>

                <div class="ai-feedback">
                    <h3 class="feedback-title">{ "AI Product Manager Analysis" }</h3>
                    <div class="feedback-content">{ &outcome.feedback }</div>
                </div>

                if !analysis.is_empty() {
                    <div class="assumption-analysis">
                        { for analysis.iter().enumerate().map(|(index, slot)| html! {
                            <div class={classes!("assumption-result", classification_class(slot.classification))}>
                                <div class="result-header">
                                    { format!("Your Assumption #{}: {}", index + 1, slot.assumption) }
                                </div>
                                <div class="result-analysis">
                                    <strong>{ "Analysis: " }</strong>{ &slot.analysis }
                                </div>
                            </div>
                        }) }
                    </div>
                }

                <ShareButtons game={GAME} score={outcome.score} time_spent={time_spent} />
            </div>

            <div class="action-section">
                <h3 class="action-title">{ "The AI Revolution Waits for No PM" }</h3>
                <p class="action-text">
                    { "Think this was tough? We're just warming up. The future belongs to PMs who can navigate AI-amplified complexity without cognitive atrophy." }
                </p>
                <div class="action-buttons">
                    <button onclick={on_restart} class="action-btn primary">{ "Play Again" }</button>
                    <a href="/#signup" class="action-btn secondary">{ "Join the Waitlist" }</a>
                    <Link<Route> to={Route::SprintSimulator} classes="action-btn secondary">
                        { "Sprint Simulator" }
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="action-btn secondary">
                        { "More Challenges" }
                    </Link<Route>>
                </div>
                <FeedbackBox game={GAME} />
            </div>
        </>
    }
}
