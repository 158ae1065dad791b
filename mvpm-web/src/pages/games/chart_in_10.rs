use mvpm_game::{
    ChartFigures, ChartScenario, GameId, GamePhase, GameSession, Scenario, ScoreDetails,
    SessionInput,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::GameHeader;
use crate::components::ui::loading_indicator::LoadingIndicator;
use crate::components::ui::share_buttons::ShareButtons;
use crate::components::ui::timer_display::TimerDisplay;
use crate::hooks::{SessionHandle, use_game_session, use_services};
use crate::pages::games::GameUnavailable;
use crate::router::Route;

const GAME: GameId = GameId::ChartIn10;

#[function_component(ChartIn10Page)]
pub fn chart_in_10_page() -> Html {
    let services = use_services();
    if !services.app.game_enabled(GAME) {
        return html! { <GameUnavailable game={GAME} /> };
    }
    html! { <ChartGame /> }
}

#[function_component(ChartGame)]
fn chart_game() -> Html {
    let handle = use_game_session(GAME);

    let body = match handle.phase() {
        GamePhase::Loading => html! {
            <LoadingIndicator text="Loading Chart Analysis Engine..." />
        },
        GamePhase::Ready => render_ready(&handle),
        GamePhase::Playing => render_playing(&handle),
        GamePhase::Submitting | GamePhase::Results => render_results(&handle),
    };

    html! {
        <>
            <GameHeader />
            <div class="chart-in-10-game">
                <div class="game-header">
                    <h1>{ GAME.title() }</h1>
                    <p class="game-subtitle">{ GAME.tagline() }</p>
                </div>
                { body }
            </div>
        </>
    }
}

fn render_ready(handle: &SessionHandle) -> Html {
    let on_start = {
        let handle = handle.clone();
        Callback::from(move |_| {
            if let Some(Err(err)) = handle.update(GameSession::start) {
                log::warn!("start refused: {err}");
            }
        })
    };

    html! {
        <div class="game-state ready-state">
            <div class="ready-content">
                <h2>{ "Ready to Analyze?" }</h2>
                <p>{ "You'll see a business chart with context. You have 10 seconds to make the right call." }</p>
                <div class="game-rules">
                    <h3>{ "Scoring:" }</h3>
                    <ul>
                        <li><strong>{ "2 points: " }</strong>{ "Perfect analysis" }</li>
                        <li><strong>{ "1 point: " }</strong>{ "Reasonable but not optimal" }</li>
                        <li><strong>{ "0 points: " }</strong>{ "Wrong call" }</li>
                        <li><strong>{ "+1 bonus: " }</strong>{ "Quick decision (5+ seconds left)" }</li>
                    </ul>
                </div>
                <button class="start-button" onclick={on_start}>{ "Start Analysis" }</button>
            </div>
        </div>
    }
}

fn metric(label: &str, value: String) -> Html {
    html! {
        <div class="metric">
            <span class="metric-label">{ label.to_string() }</span>
            <span class="metric-value">{ value }</span>
        </div>
    }
}

fn render_chart(figures: &ChartFigures) -> Html {
    match figures {
        ChartFigures::Funnel {
            labels,
            spend,
            conversions,
            costs,
        } => html! {
            <div class="chart-container funnel-chart">
                { for labels.iter().enumerate().map(|(i, label)| html! {
                    <div class="funnel-bar">
                        <div class="bar-label">{ label.clone() }</div>
                        <div class="bar-metrics">
                            { metric("Spend:", format!("${}", spend[i])) }
                            { metric("Conversions:", conversions[i].to_string()) }
                            { metric("Cost/Conv:", format!("${}", costs[i])) }
                        </div>
                    </div>
                }) }
            </div>
        },
        ChartFigures::Cohort {
            weeks,
            adoption,
            retention,
        } => html! {
            <div class="chart-container cohort-chart">
                <div class="metric-row">
                    <span class="metric-title">{ "Weekly Adoption:" }</span>
                    { for weeks.iter().enumerate().map(|(i, week)| html! {
                        <span class="cohort-bar">{ format!("{week} {}%", adoption[i]) }</span>
                    }) }
                </div>
                <div class="metric-row">
                    <span class="metric-title">{ "Retention Rate:" }</span>
                    { for retention.iter().map(|value| html! {
                        <span class="cohort-bar">{ format!("{value}%") }</span>
                    }) }
                </div>
            </div>
        },
        ChartFigures::Segment {
            segments,
            arr_growth,
            churn_rate,
            customer_count,
        } => html! {
            <div class="chart-container segment-chart">
                { for segments.iter().enumerate().map(|(i, segment)| html! {
                    <div class="segment-card">
                        <div class="segment-name">{ segment.clone() }</div>
                        { metric("ARR Growth:", format!("{:+}%", arr_growth[i])) }
                        { metric("Churn:", format!("{}%", churn_rate[i])) }
                        { metric("Customers:", customer_count[i].to_string()) }
                    </div>
                }) }
            </div>
        },
        ChartFigures::Performance {
            products,
            revenue,
            growth_rate,
            margin,
        } => html! {
            <div class="chart-container performance-chart">
                { for products.iter().enumerate().map(|(i, product)| html! {
                    <div class="performance-card">
                        <div class="product-name">{ product.clone() }</div>
                        { metric("Revenue:", format!("${}M", revenue[i])) }
                        { metric("Growth:", format!("{:+}%", growth_rate[i])) }
                        { metric("Margin:", format!("{}%", margin[i])) }
                    </div>
                }) }
            </div>
        },
        ChartFigures::Support {
            categories,
            volume,
            avg_resolution,
            satisfaction,
        } => html! {
            <div class="chart-container support-chart">
                { for categories.iter().enumerate().map(|(i, category)| html! {
                    <div class="support-row">
                        <div class="category-name">{ category.clone() }</div>
                        { metric("Volume:", volume[i].to_string()) }
                        { metric("Avg Resolution:", format!("{}d", avg_resolution[i])) }
                        { metric("Satisfaction:", format!("{}/10", satisfaction[i])) }
                    </div>
                }) }
            </div>
        },
    }
}

fn render_playing(handle: &SessionHandle) -> Html {
    let Some(Some((scenario, remaining, selected))) = handle.read(|session| {
        let Scenario::Chart(chart) = session.scenario() else {
            return None;
        };
        let selected = match session.input() {
            SessionInput::Choice(choice) => choice.clone(),
            _ => None,
        };
        Some((chart.clone(), session.time_remaining(), selected))
    }) else {
        return html! {};
    };

    let on_submit = {
        let handle = handle.clone();
        Callback::from(move |_| {
            if let Some(Err(err)) = handle.update(GameSession::submit) {
                log::warn!("submit refused: {err}");
            }
        })
    };

    html! {
        <div class="game-state playing-state">
            <TimerDisplay seconds={remaining} warning_at={3} />

            <div class="scenario-content">
                <div class="scenario-header">
                    <h2>{ &scenario.title }</h2>
                    <p class="scenario-description">{ &scenario.description }</p>
                </div>

                { render_chart(&scenario.figures) }

                <div class="scenario-context">
                    <p><strong>{ "Context: " }</strong>{ &scenario.context }</p>
                </div>

                <div class="answer-options">
                    <h3>{ "Your Decision:" }</h3>
                    <div class="options-grid">
                        { for scenario.options.iter().map(|option| {
                            let is_selected = selected.as_deref() == Some(option.id.as_str());
                            let onclick = {
                                let handle = handle.clone();
                                let id = option.id.clone();
                                Callback::from(move |_| {
                                    handle.update(|session| session.select_option(id.clone()));
                                })
                            };
                            html! {
                                <button
                                    class={classes!("option-button", is_selected.then_some("selected"))}
                                    {onclick}>
                                    { option.text.clone() }
                                </button>
                            }
                        }) }
                    </div>
                    if selected.is_some() {
                        <button class="submit-button" onclick={on_submit}>
                            { "Submit Decision" }
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}

fn recap(scenario: &ChartScenario, selected: Option<&str>, time_used: u32) -> Html {
    let decision = selected
        .and_then(|id| scenario.option(id))
        .map_or_else(|| String::from("No decision made"), |opt| opt.text.clone());
    html! {
        <div class="scenario-recap">
            <h4>{ "Your Analysis:" }</h4>
            <p><strong>{ "Chart: " }</strong>{ scenario.title.clone() }</p>
            <p><strong>{ "Your Decision: " }</strong>{ decision }</p>
            <p><strong>{ "Time Used: " }</strong>{ format!("{time_used} seconds") }</p>
        </div>
    }
}

fn render_results(handle: &SessionHandle) -> Html {
    let Some(Some((outcome, scenario, time_spent))) = handle.read(|session| {
        let Scenario::Chart(chart) = session.scenario() else {
            return None;
        };
        session
            .outcome()
            .cloned()
            .map(|outcome| (outcome, chart.clone(), session.time_spent()))
    }) else {
        return html! {};
    };

    let (selected, option_points, time_bonus) = match &outcome.details {
        ScoreDetails::Chart {
            selected,
            option_points,
            time_bonus,
        } => (selected.clone(), *option_points, *time_bonus),
        _ => (None, 0, 0),
    };

    let on_restart = {
        let handle = handle.clone();
        Callback::from(move |_| handle.restart())
    };

    html! {
        <div class="game-state results-state">
            <div class="results-content">
                <div class="score-display">
                    <h2>{ "Analysis Complete!" }</h2>
                    <div class="final-score">
                        <span class="score-number">{ outcome.score as i32 }</span>
                        <span class="score-total">{ "/3" }</span>
                    </div>
                    <div class="score-breakdown">
                        if selected.is_some() {
                            <div class="score-item">
                                { format!("Decision: {option_points} points") }
                            </div>
                        }
                        if time_bonus > 0 {
                            <div class="score-item bonus">
                                { format!("Speed Bonus: +{time_bonus} point") }
                            </div>
                        }
                        if outcome.time_up && selected.is_none() {
                            <div class="score-item penalty">
                                { "Time's up! No decision made." }
                            </div>
                        }
                    </div>
                </div>

                <div class="explanation-section">
                    <h3>{ "The Right Call:" }</h3>
                    <p>{ scenario.explanation.clone() }</p>
                    { recap(&scenario, selected.as_deref(), time_spent) }
                </div>

                <div class="results-actions">
                    <ShareButtons game={GAME} score={outcome.score} time_spent={time_spent} />
                    <div class="game-actions">
                        <button class="play-again-button" onclick={on_restart}>
                            { "Analyze Another Chart" }
                        </button>
                        <Link<Route> to={Route::SprintSimulator} classes="next-game-link">
                            { "Try Sprint Simulator →" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
