//! Session ownership for game pages
//!
//! One hook instance owns one `GameSession`: it simulates the loading
//! pause, drives the countdown from a 1 Hz interval, reports the terminal
//! analytics exactly once, and tears the interval down on unmount so no
//! tick can land after disposal.
use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use mvpm_game::{GameId, GamePhase, GameSession, ScenarioPools, ScoreDetails, TickOutcome};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{WebServices, content, session_seed};
use crate::hooks::use_services;

const TICK_MS: u32 = 1_000;

/// Artificial "generating your scenario" pause, a UX device only.
const fn loading_delay_ms(game: GameId) -> u32 {
    match game {
        GameId::StakeholderSandwich | GameId::SprintSimulator => 2_000,
        GameId::ChartIn10 => 1_500,
        GameId::AssumptionSniper => 0,
    }
}

/// Shared handle the page renders from and dispatches into.
#[derive(Clone)]
pub struct SessionHandle {
    game: GameId,
    session: Rc<RefCell<Option<GameSession>>>,
    pools: Rc<RefCell<Option<Rc<ScenarioPools>>>>,
    reported: Rc<Cell<bool>>,
    version: UseStateHandle<u32>,
    services: WebServices,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && *self.version == *other.version
    }
}

impl SessionHandle {
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session
            .borrow()
            .as_ref()
            .map_or(GamePhase::Loading, GameSession::phase)
    }

    /// Read from the session; `None` while content is still loading.
    #[must_use]
    pub fn read<R>(&self, f: impl FnOnce(&GameSession) -> R) -> Option<R> {
        self.session.borrow().as_ref().map(f)
    }

    /// Mutate the session and re-render.
    pub fn update<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> Option<R> {
        let result = self.session.borrow_mut().as_mut().map(f);
        self.bump();
        result
    }

    fn bump(&self) {
        self.version.set(self.version.wrapping_add(1));
    }

    #[must_use]
    pub const fn services(&self) -> &WebServices {
        &self.services
    }

    /// Restart into a fresh playthrough of the same game.
    pub fn restart(&self) {
        let Some(pools) = self.pools.borrow().clone() else {
            return;
        };
        let restarted = self.update(|session| session.restart(&pools).is_ok());
        if restarted != Some(true) {
            return;
        }
        self.reported.set(false);
        self.spawn_finish_loading();
    }

    fn spawn_finish_loading(&self) {
        let handle = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(loading_delay_ms(handle.game)).await;
            handle.update(GameSession::finish_loading);
            handle.services.app.analytics().game_started(handle.game);
            let supabase = handle.services.supabase.clone();
            let game = handle.game;
            spawn_local(async move {
                supabase
                    .track_game_interaction(game.as_str(), "game_started", serde_json::Map::new())
                    .await;
            });
        });
    }

    /// One-shot terminal reporting once the session settles in `Results`.
    fn report_results(&self) {
        if self.reported.get() || self.phase() != GamePhase::Results {
            return;
        }
        let Some((outcome, time_spent, scenario_id)) = self.read(|session| {
            session.outcome().cloned().map(|outcome| {
                (outcome, session.time_spent(), session.scenario().id())
            })
        }).flatten() else {
            return;
        };
        self.reported.set(true);

        let analytics = self.services.app.analytics();
        let mut action = "game_completed";
        if outcome.details == ScoreDetails::Skipped {
            analytics.game_skipped(self.game);
            action = "game_skipped";
        } else {
            analytics.game_completed(self.game, outcome.score, time_spent);
            if outcome.time_up {
                analytics.game_timeout(self.game, &scenario_id);
            }
        }

        let supabase = self.services.supabase.clone();
        let game = self.game;
        let score = outcome.score;
        spawn_local(async move {
            let mut metadata = serde_json::Map::new();
            metadata.insert(String::from("score"), json!(score));
            metadata.insert(String::from("time_spent"), json!(time_spent));
            supabase
                .track_game_interaction(game.as_str(), action, metadata)
                .await;
        });
    }
}

/// Create and drive a session for `game`.
#[hook]
pub fn use_game_session(game: GameId) -> SessionHandle {
    let services = use_services();
    let version = use_state(|| 0_u32);
    let session = use_mut_ref(|| None::<GameSession>);
    let pools = use_mut_ref(|| None::<Rc<ScenarioPools>>);
    let reported = (*use_memo((), |_| Rc::new(Cell::new(false)))).clone();

    let handle = SessionHandle {
        game,
        session,
        pools,
        reported,
        version,
        services,
    };

    // Boot: fetch content, simulate generation, enter the machine.
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let boot = handle.clone();
            spawn_local(async move {
                let loaded = Rc::new(content::load_pools().await);
                *boot.pools.borrow_mut() = Some(loaded.clone());
                match GameSession::new(game, session_seed(), &loaded) {
                    Ok(fresh) => {
                        *boot.session.borrow_mut() = Some(fresh);
                        boot.bump();
                        boot.spawn_finish_loading();
                    }
                    Err(err) => log::error!("failed to create session: {err}"),
                }
            });
            || ()
        });
    }

    // Countdown driver: one tick per second for the page's lifetime; the
    // interval is dropped on unmount so a stale callback cannot touch a
    // disposed session.
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(TICK_MS, move || {
                let outcome = handle
                    .session
                    .borrow_mut()
                    .as_mut()
                    .map(GameSession::tick);
                match outcome {
                    Some(TickOutcome::Idle) | None => {}
                    Some(_) => handle.bump(),
                }
            });
            move || drop(interval)
        });
    }

    handle.report_results();
    handle
}
