use mvpm_game::{GameId, GamePhase, GameSession, Scenario, SessionInput};
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::GameHeader;
use crate::components::ui::feedback_box::FeedbackBox;
use crate::components::ui::loading_indicator::LoadingIndicator;
use crate::components::ui::share_buttons::ShareButtons;
use crate::components::ui::timer_display::TimerDisplay;
use crate::hooks::{SessionHandle, use_game_session, use_services};
use crate::pages::games::GameUnavailable;
use crate::router::Route;

const GAME: GameId = GameId::StakeholderSandwich;
const MAX_RESPONSE_CHARS: usize = 500;

#[function_component(StakeholderSandwichPage)]
pub fn stakeholder_sandwich_page() -> Html {
    let services = use_services();
    if !services.app.game_enabled(GAME) {
        return html! { <GameUnavailable game={GAME} /> };
    }
    html! { <SandwichGame /> }
}

#[function_component(SandwichGame)]
fn sandwich_game() -> Html {
    let handle = use_game_session(GAME);
    let validation = use_state(|| None::<String>);

    let body = match handle.phase() {
        GamePhase::Loading => html! {
            <LoadingIndicator text="Generating your nightmare scenario..." />
        },
        GamePhase::Ready => html! {},
        GamePhase::Playing => render_playing(&handle, &validation),
        GamePhase::Submitting | GamePhase::Results => render_results(&handle),
    };

    html! {
        <>
            <GameHeader />
            <div class="game-container">
                <div class="game-header">
                    <h1 class="game-title">{ GAME.title() }</h1>
                    <p class="game-subtitle">{ GAME.tagline() }</p>
                    <span class="brutal-timer">{ "BRUTAL 45s" }</span>
                </div>
                { body }
            </div>
        </>
    }
}

fn render_playing(handle: &SessionHandle, validation: &UseStateHandle<Option<String>>) -> Html {
    let Some(Some((scenario, remaining, response))) = handle.read(|session| {
        let Scenario::Prompt(prompt) = session.scenario() else {
            return None;
        };
        let response = match session.input() {
            SessionInput::Response(text) => text.clone(),
            _ => String::new(),
        };
        Some((prompt.clone(), session.time_remaining(), response))
    }) else {
        return html! {};
    };

    let oninput = {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                let mut value = area.value();
                value.truncate(MAX_RESPONSE_CHARS);
                handle.update(|session| session.set_response(value.clone()));
            }
        })
    };

    let on_submit = {
        let handle = handle.clone();
        let validation = validation.clone();
        Callback::from(move |_| {
            match handle.update(GameSession::submit) {
                Some(Err(err)) => validation.set(Some(err.to_string())),
                _ => validation.set(None),
            }
        })
    };

    let on_skip = {
        let handle = handle.clone();
        Callback::from(move |_| {
            handle.update(GameSession::skip);
        })
    };

    let char_count = response.chars().count();

    html! {
        <div class="game-state active">
            <div class="scenario-box">
                <h3 class="scenario-title">{ &scenario.title }</h3>
                <div class="scenario-text">{ &scenario.text }</div>
            </div>

            <TimerDisplay seconds={remaining} />

            <div class="response-area">
                <label class="response-label" for="response-input">
                    { "Draft your response (1-2 sentences, include a metric or alternative):" }
                </label>
                <textarea
                    id="response-input"
                    class="response-input"
                    placeholder="Your response here... Remember: clarity, strategy, empathy, evidence, brevity."
                    value={response.clone()}
                    oninput={oninput}
                />
                <div class={classes!("character-count", (char_count > 400).then_some("warning"))}>
                    { format!("{char_count}/{MAX_RESPONSE_CHARS} characters") }
                </div>
                if let Some(text) = (**validation).clone() {
                    <p class="validation-message" role="alert">{ text }</p>
                }
            </div>

            <div class="action-buttons">
                <button onclick={on_submit} class="btn btn-primary">{ "Submit Response" }</button>
                <button onclick={on_skip} class="btn btn-secondary">{ "Skip Challenge" }</button>
            </div>
        </div>
    }
}

fn render_results(handle: &SessionHandle) -> Html {
    let Some(Some((outcome, time_spent))) = handle.read(|session| {
        session
            .outcome()
            .cloned()
            .map(|outcome| (outcome, session.time_spent()))
    }) else {
        return html! { <LoadingIndicator text="Scoring your response..." /> };
    };

    let on_restart = {
        let handle = handle.clone();
        Callback::from(move |_| handle.restart())
    };

    html! {
        <div class="game-state active">
            <div class="results-content">
                <div class="performance-badge">{ "Top 10% Performance" }</div>

                <div class="feedback-section">
                    <h3 class="feedback-title">{ "AI Analysis" }</h3>
                    <div class="feedback-text">{ &outcome.feedback }</div>
                </div>

                <ShareButtons game={GAME} score={outcome.score} time_spent={time_spent} />

                <div class="next-steps">
                    <h3>{ "This is just the beginning..." }</h3>
                    <p>{ "Think that was tough? The AI revolution demands cognitive excellence. Can you maintain it when the stakes are higher?" }</p>
                    <div class="cta-grid">
                        <button onclick={on_restart} class="btn btn-primary">{ "Play Again" }</button>
                        <a href="/#signup" class="btn btn-secondary">{ "Join Waitlist" }</a>
                        <a href="/#coming-soon" class="btn btn-secondary">{ "Enterprise Arsenal" }</a>
                        <Link<Route> to={Route::Home} classes="btn btn-secondary">{ "More Games" }</Link<Route>>
                    </div>
                </div>

                <FeedbackBox game={GAME} />
            </div>
        </div>
    }
}
