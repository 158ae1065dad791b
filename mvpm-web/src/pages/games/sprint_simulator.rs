use mvpm_game::scoring::sprint::{SPRINT_DAYS, TEAM_CAPACITY};
use mvpm_game::{GameId, GamePhase, GameSession, Scenario, ScoreDetails, SprintReport};
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

const GAME: GameId = GameId::SprintSimulator;

#[function_component(SprintSimulatorPage)]
pub fn sprint_simulator_page() -> Html {
    let services = use_services();
    if !services.app.game_enabled(GAME) {
        return html! { <GameUnavailable game={GAME} /> };
    }
    html! { <SprintGame /> }
}

#[function_component(SprintGame)]
fn sprint_game() -> Html {
    let handle = use_game_session(GAME);

    let body = match handle.phase() {
        GamePhase::Loading => html! {
            <LoadingIndicator text="Generating your sprint nightmare..." />
        },
        GamePhase::Ready => render_planning(&handle),
        GamePhase::Playing => render_sprint(&handle),
        GamePhase::Submitting | GamePhase::Results => render_results(&handle),
    };

    html! {
        <>
            <GameHeader />
            <div class="game-container">
                <div class="game-header">
                    <h1 class="game-title">{ GAME.title() }</h1>
                    <p class="game-subtitle">{ GAME.tagline() }</p>
                </div>
                { body }
            </div>
        </>
    }
}

fn render_planning(handle: &SessionHandle) -> Html {
    let Some(Some((backlog, committed_ids, committed_points, remaining))) =
        handle.read(|session| {
            let Scenario::Sprint(backlog) = session.scenario() else {
                return None;
            };
            Some((
                backlog.clone(),
                session.committed_story_ids(),
                session.committed_points(),
                session.time_remaining(),
            ))
        })
    else {
        return html! {};
    };

    let on_start = {
        let handle = handle.clone();
        Callback::from(move |_| {
            if let Some(Err(err)) = handle.update(GameSession::start) {
                log::warn!("sprint start refused: {err}");
            }
        })
    };

    html! {
        <div class="game-state active">
            <TimerDisplay seconds={remaining} label="seconds to plan" />
            <div class="planning-section">
                <h3 class="section-title">{ "Sprint Planning" }</h3>
                <p class="capacity-info">
                    { format!("Your team's capacity is {TEAM_CAPACITY} points. Select stories to commit to this sprint.") }
                </p>

                <div class="stories-grid">
                    { for backlog.stories.iter().map(|story| {
                        let selected = committed_ids.contains(&story.id);
                        let onclick = {
                            let handle = handle.clone();
                            let id = story.id;
                            Callback::from(move |_| {
                                handle.update(|session| session.toggle_story(id));
                            })
                        };
                        html! {
                            <div class={classes!("story-card", selected.then_some("selected"))} {onclick}>
                                <div class="story-header">
                                    <input type="checkbox" readonly={true} checked={selected} />
                                    <span class="story-points">{ format!("{} pts", story.points) }</span>
                                </div>
                                <h4 class="story-title">{ story.title.clone() }</h4>
                                <p class="story-risk">{ format!("Risk: {}%", (story.risk * 100.0).round() as i32) }</p>
                            </div>
                        }
                    }) }
                </div>

                <div class="planning-footer">
                    <div class="commitment-display">
                        { format!("Committed: {committed_points} / {TEAM_CAPACITY} points") }
                    </div>
                    <button
                        class="btn btn-primary"
                        onclick={on_start}
                        disabled={committed_ids.is_empty()}>
                        { "Start Sprint" }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn gauge(label: &str, value: f32) -> Html {
    html! {
        <div class="metric">
            <span class="metric-label">{ label.to_string() }</span>
            <span class="metric-value">{ format!("{}%", value.round() as i32) }</span>
        </div>
    }
}

fn render_sprint(handle: &SessionHandle) -> Html {
    let Some(Some((event, day, morale, stakeholders, completed, committed))) =
        handle.read(|session| {
            let sim = session.sprint()?;
            let event = sim.current_event()?.clone();
            Some((
                event,
                sim.day(),
                sim.morale(),
                sim.stakeholders(),
                sim.completed_points(),
                sim.committed_points(),
            ))
        })
    else {
        return html! {};
    };

    html! {
        <div class="game-state active">
            <div class="sprint-header">
                <h3 class="day-counter">{ format!("Day {day} of {SPRINT_DAYS}") }</h3>
                <div class="metrics-display">
                    { gauge("Team Morale", morale) }
                    { gauge("Stakeholder Satisfaction", stakeholders) }
                    <div class="metric">
                        <span class="metric-label">{ "Progress" }</span>
                        <span class="metric-value">
                            { format!("{}/{committed} pts", completed.round() as i32) }
                        </span>
                    </div>
                </div>
            </div>

            <div class="event-section">
                <h4 class="event-title">{ &event.title }</h4>
                <p class="event-description">{ &event.description }</p>

                <div class="event-options">
                    { for event.options.iter().enumerate().map(|(index, option)| {
                        let onclick = {
                            let handle = handle.clone();
                            Callback::from(move |_| {
                                if let Some(Err(err)) =
                                    handle.update(|session| session.choose_event_option(index))
                                {
                                    log::warn!("event choice refused: {err}");
                                }
                            })
                        };
                        html! {
                            <button class="option-btn" {onclick}>{ option.text.clone() }</button>
                        }
                    }) }
                </div>
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
        return html! {};
    };
    let report = match &outcome.details {
        ScoreDetails::Sprint(report) => report.clone(),
        _ => SprintReport {
            committed_points: 0,
            delivered_points: 0.0,
            delivery_ratio: 0.0,
            morale: 0.0,
            stakeholders: 0.0,
        },
    };

    let on_restart = {
        let handle = handle.clone();
        Callback::from(move |_| handle.restart())
    };

    html! {
        <div class="game-state active">
            <div class="results-content">
                <div class="score-display">
                    <h3 class="score-title">{ "Sprint Complete!" }</h3>
                    <div class="final-score">{ format!("{}/100", outcome.score as i32) }</div>
                    <div class="score-breakdown">
                        <div class="breakdown-item">
                            <span>{ "Points Delivered:" }</span>
                            <span>{ format!(
                                "{}/{}",
                                report.delivered_points.round() as i32,
                                report.committed_points
                            ) }</span>
                        </div>
                        <div class="breakdown-item">
                            <span>{ "Final Team Morale:" }</span>
                            <span>{ format!("{}%", report.morale.round() as i32) }</span>
                        </div>
                        <div class="breakdown-item">
                            <span>{ "Stakeholder Satisfaction:" }</span>
                            <span>{ format!("{}%", report.stakeholders.round() as i32) }</span>
                        </div>
                    </div>
                </div>

                <div class="feedback-section">
                    <h3 class="feedback-title">{ "AI Analysis" }</h3>
                    <div class="feedback-text">{ &outcome.feedback }</div>
                </div>

                <ShareButtons game={GAME} score={outcome.score} time_spent={time_spent} />

                <div class="next-steps">
                    <h3>{ "Ready for more PM challenges?" }</h3>
                    <p>{ "Sprint management is just the beginning. The AI revolution demands cognitive excellence across all PM disciplines." }</p>
                    <div class="cta-grid">
                        <button onclick={on_restart} class="btn btn-primary">{ "Play Again" }</button>
                        <a href="/#signup" class="btn btn-secondary">{ "Join Waitlist" }</a>
                        <Link<Route> to={Route::StakeholderSandwich} classes="btn btn-secondary">
                            { "Stakeholder Sandwich" }
                        </Link<Route>>
                        <Link<Route> to={Route::Home} classes="btn btn-secondary">
                            { "More Games" }
                        </Link<Route>>
                    </div>
                </div>

                <FeedbackBox game={GAME} />
            </div>
        </div>
    }
}
