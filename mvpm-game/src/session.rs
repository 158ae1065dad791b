//! Timed game session state machine
//!
//! One `GameSession` owns one playthrough: phase, countdown, scenario,
//! accumulated input, and the final score. Only user actions and timer
//! expiry drive transitions, and the transitions are forward-only; the sole
//! way back is a full restart. The scoring transition is guarded so the
//! "time-up auto-submit races a manual submit" interleaving can only score
//! once.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::catalog::GameId;
use crate::scenario::{Scenario, ScenarioPools, pick_scenario};
use crate::scoring::assumptions::{MIN_SLOT_LEN, SLOT_COUNT};
use crate::scoring::sprint::{DayDigest, SprintError, SprintSim, TEAM_CAPACITY};
use crate::scoring::{
    RemoteAnalysis, ScoreOutcome, ScoringError, ScoringStrategy, merge_remote_analysis,
    score_assumptions, score_chart, score_response, score_sprint,
};
use crate::timer::{Countdown, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Loading,
    Ready,
    Playing,
    Submitting,
    Results,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Submitting => "submitting",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input accumulated while the session is live.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    Response(String),
    Assumptions([String; SLOT_COUNT]),
    Choice(Option<String>),
    /// Story ids committed during sprint planning.
    Plan(Vec<u32>),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no scenario content available for {0}")]
    NoContent(GameId),
}

/// Validation failures on the manual-submit path. These surface as blocking
/// UI messages and never fire on the timer-expiry path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please provide a response before submitting!")]
    EmptyResponse,
    #[error("Each assumption needs to be more detailed (at least {MIN_SLOT_LEN} characters).")]
    SlotTooShort,
    #[error("Select a decision before submitting.")]
    NoSelection,
    #[error("Commit at least one story before starting the sprint.")]
    NothingCommitted,
    #[error("the session is not accepting this action in phase {0}")]
    WrongPhase(GamePhase),
}

/// What a host-driven tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown is active; nothing happened.
    Idle,
    Running(u32),
    /// The planning countdown expired and the sprint auto-started.
    AutoStarted,
    /// The play countdown expired; the session scored whatever input
    /// existed and is now in `Results`.
    TimeUp,
}

/// One playthrough of one mini-game.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: GameId,
    phase: GamePhase,
    countdown: Option<Countdown>,
    scenario: Scenario,
    input: SessionInput,
    sprint: Option<SprintSim>,
    strategy: ScoringStrategy,
    outcome: Option<ScoreOutcome>,
    scored: bool,
    time_up: bool,
    remaining_at_submit: u32,
    seed: u64,
    rng: ChaCha20Rng,
}

impl GameSession {
    /// Create a fresh session in `Loading` with a scenario sampled from the
    /// pools.
    ///
    /// # Errors
    ///
    /// Returns an error if the pools hold no content for the game.
    pub fn new(game: GameId, seed: u64, pools: &ScenarioPools) -> Result<Self, SessionError> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let scenario =
            pick_scenario(game, pools, &mut rng).ok_or(SessionError::NoContent(game))?;
        Ok(Self {
            game,
            phase: GamePhase::Loading,
            countdown: None,
            scenario,
            input: default_input(game),
            sprint: None,
            strategy: ScoringStrategy::for_game(game),
            outcome: None,
            scored: false,
            time_up: false,
            remaining_at_submit: 0,
            seed,
            rng,
        })
    }

    #[must_use]
    pub const fn game(&self) -> GameId {
        self.game
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    #[must_use]
    pub const fn input(&self) -> &SessionInput {
        &self.input
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&ScoreOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub const fn sprint(&self) -> Option<&SprintSim> {
        self.sprint.as_ref()
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn timed_out(&self) -> bool {
        self.time_up
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown
            .as_ref()
            .map_or(0, Countdown::remaining_secs)
    }

    /// Seconds elapsed against the game's nominal duration, for analytics
    /// and share copy.
    #[must_use]
    pub fn time_spent(&self) -> u32 {
        let remaining = if self.scored {
            self.remaining_at_submit
        } else {
            self.time_remaining()
        };
        self.game.duration_secs().saturating_sub(remaining)
    }

    /// Content/generation finished: leave `Loading`.
    pub fn finish_loading(&mut self) {
        if self.phase != GamePhase::Loading {
            return;
        }
        if self.game.has_ready_state() {
            self.phase = GamePhase::Ready;
            self.countdown = self.game.ready_countdown_secs().map(Countdown::new);
        } else {
            self.enter_playing();
        }
    }

    fn enter_playing(&mut self) {
        self.phase = GamePhase::Playing;
        self.countdown = self.game.play_countdown_secs().map(Countdown::new);
        if self.game == GameId::SprintSimulator {
            self.start_sprint();
        }
    }

    fn start_sprint(&mut self) {
        let Scenario::Sprint(backlog) = &self.scenario else {
            return;
        };
        let committed = match &self.input {
            SessionInput::Plan(ids) => backlog
                .stories
                .iter()
                .filter(|story| ids.contains(&story.id))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };
        let cfg = match &self.strategy {
            ScoringStrategy::MultiStepSimulation(cfg) => *cfg,
            _ => crate::scoring::SprintScoringCfg::default(),
        };
        self.sprint = Some(SprintSim::new(committed, backlog.events.clone(), &cfg));
    }

    /// Leave the pre-start screen on user request.
    ///
    /// # Errors
    ///
    /// Sprint planning refuses to start manually with nothing committed;
    /// any phase but `Ready` refuses outright.
    pub fn start(&mut self) -> Result<(), SubmitError> {
        if self.phase != GamePhase::Ready {
            return Err(SubmitError::WrongPhase(self.phase));
        }
        if self.game == GameId::SprintSimulator && self.committed_story_ids().is_empty() {
            return Err(SubmitError::NothingCommitted);
        }
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
        self.enter_playing();
        Ok(())
    }

    /// Drive the active countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(countdown) = self.countdown.as_mut() else {
            return TickOutcome::Idle;
        };
        match countdown.tick() {
            None => TickOutcome::Idle,
            Some(Tick::Running(remaining)) => TickOutcome::Running(remaining),
            Some(Tick::Expired) => match self.phase {
                // Planning ran out: the sprint starts with whatever is
                // committed, even nothing.
                GamePhase::Ready => {
                    self.enter_playing();
                    TickOutcome::AutoStarted
                }
                GamePhase::Playing => {
                    if self.begin_scoring(true) {
                        self.finalize_local();
                    }
                    TickOutcome::TimeUp
                }
                _ => TickOutcome::Idle,
            },
        }
    }

    /// Replace the free-text response. Accepted only while playing.
    pub fn set_response(&mut self, text: impl Into<String>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let SessionInput::Response(response) = &mut self.input {
            *response = text.into();
        }
    }

    /// Replace one assumption slot. Accepted only while playing.
    pub fn set_slot(&mut self, index: usize, text: impl Into<String>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let SessionInput::Assumptions(slots) = &mut self.input
            && let Some(slot) = slots.get_mut(index)
        {
            *slot = text.into();
        }
    }

    /// Select a chart option. Accepted only while playing.
    pub fn select_option(&mut self, id: impl Into<String>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let SessionInput::Choice(choice) = &mut self.input {
            *choice = Some(id.into());
        }
    }

    /// Toggle a sprint story in or out of the plan during `Ready`. Returns
    /// whether the toggle took effect; commits over capacity are refused.
    pub fn toggle_story(&mut self, id: u32) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        let Scenario::Sprint(backlog) = &self.scenario else {
            return false;
        };
        let SessionInput::Plan(ids) = &mut self.input else {
            return false;
        };
        if let Some(pos) = ids.iter().position(|committed| *committed == id) {
            ids.remove(pos);
            return true;
        }
        let Some(story) = backlog.stories.iter().find(|story| story.id == id) else {
            return false;
        };
        let committed: u32 = backlog
            .stories
            .iter()
            .filter(|story| ids.contains(&story.id))
            .map(|story| story.points)
            .sum();
        if committed + story.points > TEAM_CAPACITY {
            return false;
        }
        ids.push(id);
        true
    }

    #[must_use]
    pub fn committed_story_ids(&self) -> Vec<u32> {
        match &self.input {
            SessionInput::Plan(ids) => ids.clone(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn committed_points(&self) -> u32 {
        let Scenario::Sprint(backlog) = &self.scenario else {
            return 0;
        };
        let SessionInput::Plan(ids) = &self.input else {
            return 0;
        };
        backlog
            .stories
            .iter()
            .filter(|story| ids.contains(&story.id))
            .map(|story| story.points)
            .sum()
    }

    /// Resolve the current sprint day with the chosen event option. When the
    /// last day resolves, the session scores and moves to `Results`.
    ///
    /// # Errors
    ///
    /// Returns an error if no sprint is running or the option is invalid.
    pub fn choose_event_option(&mut self, option_index: usize) -> Result<DayDigest, SprintError> {
        if self.phase != GamePhase::Playing {
            return Err(SprintError::SprintComplete);
        }
        let Some(sim) = self.sprint.as_mut() else {
            return Err(SprintError::SprintComplete);
        };
        let digest = sim.choose(option_index, &mut self.rng)?;
        if self.sprint.as_ref().is_some_and(SprintSim::is_complete)
            && self.begin_scoring(false)
        {
            self.finalize_local();
        }
        Ok(digest)
    }

    fn validate(&self) -> Result<(), SubmitError> {
        match &self.input {
            SessionInput::Response(text) => {
                if text.trim().is_empty() {
                    return Err(SubmitError::EmptyResponse);
                }
            }
            SessionInput::Assumptions(slots) => {
                if slots.iter().any(|slot| slot.trim().len() < MIN_SLOT_LEN) {
                    return Err(SubmitError::SlotTooShort);
                }
            }
            SessionInput::Choice(choice) => {
                if choice.is_none() {
                    return Err(SubmitError::NoSelection);
                }
            }
            // The sprint ends through its day loop, never a manual submit.
            SessionInput::Plan(_) | SessionInput::Skipped => {
                return Err(SubmitError::WrongPhase(self.phase));
            }
        }
        Ok(())
    }

    /// Manual submit: validate, score locally, move to `Results`.
    ///
    /// # Errors
    ///
    /// Returns a user-visible validation error; the phase is unchanged.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.submit_deferred()?;
        self.finalize_local();
        Ok(())
    }

    /// Manual submit that stays in `Submitting` so the host can attempt a
    /// remote scoring call before finalizing via [`Self::resolve_remote`].
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::submit`].
    pub fn submit_deferred(&mut self) -> Result<(), SubmitError> {
        if self.phase != GamePhase::Playing {
            return Err(SubmitError::WrongPhase(self.phase));
        }
        self.validate()?;
        // Validation passed, so the guard can only be taken already if an
        // expiry tick won the race; that first transition stands.
        if !self.begin_scoring(false) {
            return Err(SubmitError::WrongPhase(self.phase));
        }
        Ok(())
    }

    /// Finish a deferred submission with the remote verdict, falling back
    /// to the local strategy on any remote error. A no-op unless the
    /// session is waiting in `Submitting`.
    pub fn resolve_remote(&mut self, remote: Result<RemoteAnalysis, ScoringError>) {
        if self.phase != GamePhase::Submitting || self.outcome.is_some() {
            return;
        }
        let local = self.compute_local();
        self.outcome = Some(merge_remote_analysis(local, remote));
        self.phase = GamePhase::Results;
    }

    /// Skip the challenge (Stakeholder Sandwich): cancel the timer and move
    /// straight to `Results` with canned feedback and no score.
    pub fn skip(&mut self) {
        if self.phase != GamePhase::Playing || self.game != GameId::StakeholderSandwich {
            return;
        }
        if !self.begin_scoring(false) {
            return;
        }
        self.input = SessionInput::Skipped;
        self.outcome = Some(ScoreOutcome::skipped());
        self.phase = GamePhase::Results;
    }

    /// Tear the session down into a fresh `Loading` playthrough with a new
    /// scenario. The session RNG carries forward, so restarts stay
    /// deterministic per seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the pools hold no content for the game.
    pub fn restart(&mut self, pools: &ScenarioPools) -> Result<(), SessionError> {
        self.scenario = pick_scenario(self.game, pools, &mut self.rng)
            .ok_or(SessionError::NoContent(self.game))?;
        self.phase = GamePhase::Loading;
        self.countdown = None;
        self.input = default_input(self.game);
        self.sprint = None;
        self.outcome = None;
        self.scored = false;
        self.time_up = false;
        self.remaining_at_submit = 0;
        Ok(())
    }

    /// Single-use transition guard into `Submitting`. The first caller wins;
    /// every later attempt (manual or expiry) is a no-op.
    fn begin_scoring(&mut self, time_up: bool) -> bool {
        if self.scored {
            return false;
        }
        self.scored = true;
        self.time_up = time_up;
        self.remaining_at_submit = self.time_remaining();
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
        self.phase = GamePhase::Submitting;
        true
    }

    fn compute_local(&self) -> ScoreOutcome {
        match (&self.strategy, &self.input) {
            (ScoringStrategy::FreeTextKeyword(cfg), SessionInput::Response(text)) => {
                score_response(cfg, text, self.time_up)
            }
            (ScoringStrategy::SlotClassification(cfg), SessionInput::Assumptions(slots)) => {
                score_assumptions(cfg, slots, self.time_up)
            }
            (ScoringStrategy::FixedChoice(cfg), SessionInput::Choice(choice)) => {
                let Scenario::Chart(scenario) = &self.scenario else {
                    log::error!("chart strategy without chart scenario");
                    return ScoreOutcome::skipped();
                };
                score_chart(
                    cfg,
                    scenario,
                    choice.as_deref(),
                    self.remaining_at_submit,
                    self.time_up,
                )
            }
            (ScoringStrategy::MultiStepSimulation(cfg), _) => match self.sprint.as_ref() {
                Some(sim) => score_sprint(cfg, sim, self.time_up),
                None => {
                    log::error!("sprint scored before the simulation started");
                    ScoreOutcome::skipped()
                }
            },
            (strategy, input) => {
                log::error!("mismatched strategy/input: {strategy:?} vs {input:?}");
                ScoreOutcome::skipped()
            }
        }
    }

    fn finalize_local(&mut self) {
        if self.phase != GamePhase::Submitting || self.outcome.is_some() {
            return;
        }
        self.outcome = Some(self.compute_local());
        self.phase = GamePhase::Results;
    }
}

const fn default_input(game: GameId) -> SessionInput {
    match game {
        GameId::StakeholderSandwich => SessionInput::Response(String::new()),
        GameId::AssumptionSniper => {
            SessionInput::Assumptions([String::new(), String::new(), String::new()])
        }
        GameId::ChartIn10 => SessionInput::Choice(None),
        GameId::SprintSimulator => SessionInput::Plan(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreDetails;

    fn session(game: GameId) -> GameSession {
        GameSession::new(game, 0xC0FFEE, &ScenarioPools::builtin()).expect("content exists")
    }

    #[test]
    fn sandwich_flows_loading_playing_results() {
        let mut s = session(GameId::StakeholderSandwich);
        assert_eq!(s.phase(), GamePhase::Loading);
        s.finish_loading();
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.time_remaining(), 45);

        s.set_response("Show the data and offer an alternative the team supports.");
        s.submit().expect("valid submission");
        assert_eq!(s.phase(), GamePhase::Results);
        assert!(s.outcome().is_some());
    }

    #[test]
    fn empty_response_blocks_manual_submit_but_not_expiry() {
        let mut s = session(GameId::StakeholderSandwich);
        s.finish_loading();
        assert_eq!(s.submit(), Err(SubmitError::EmptyResponse));
        assert_eq!(s.phase(), GamePhase::Playing);

        let mut last = TickOutcome::Idle;
        for _ in 0..45 {
            last = s.tick();
        }
        assert_eq!(last, TickOutcome::TimeUp);
        assert_eq!(s.phase(), GamePhase::Results);
        assert!(s.timed_out());
        let outcome = s.outcome().expect("scored on expiry");
        assert!(outcome.time_up);
    }

    #[test]
    fn score_is_assigned_exactly_once_across_the_submit_race() {
        let mut s = session(GameId::StakeholderSandwich);
        s.finish_loading();
        s.set_response("Understand the concern, show the metric, propose an option.");
        // Run the clock out, then fire the manual submit "in the same tick".
        for _ in 0..45 {
            s.tick();
        }
        let first = s.outcome().cloned().expect("expiry scored");
        assert_eq!(s.submit(), Err(SubmitError::WrongPhase(GamePhase::Results)));
        assert_eq!(s.outcome(), Some(&first));

        // And the reverse order: submit first, expiry tick after.
        let mut s = session(GameId::StakeholderSandwich);
        s.finish_loading();
        s.set_response("Understand the concern, show the metric, propose an option.");
        s.submit().expect("valid submission");
        let scored = s.outcome().cloned().expect("submitted");
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.outcome(), Some(&scored));
        assert!(!s.timed_out());
    }

    #[test]
    fn skip_moves_to_results_without_scoring() {
        let mut s = session(GameId::StakeholderSandwich);
        s.finish_loading();
        s.skip();
        assert_eq!(s.phase(), GamePhase::Results);
        let outcome = s.outcome().expect("skip outcome");
        assert!((outcome.score - 0.0).abs() < f32::EPSILON);
        assert_eq!(outcome.details, ScoreDetails::Skipped);
        // The cancelled timer is dead.
        assert_eq!(s.tick(), TickOutcome::Idle);
    }

    #[test]
    fn chart_ready_screen_waits_for_start() {
        let mut s = session(GameId::ChartIn10);
        s.finish_loading();
        assert_eq!(s.phase(), GamePhase::Ready);
        assert_eq!(s.tick(), TickOutcome::Idle);
        s.start().expect("start accepted");
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.time_remaining(), 10);
    }

    #[test]
    fn chart_decision_with_six_seconds_left_scores_three() {
        let mut s = session(GameId::ChartIn10);
        s.finish_loading();
        s.start().expect("start accepted");
        for _ in 0..4 {
            s.tick();
        }
        assert_eq!(s.time_remaining(), 6);
        let Scenario::Chart(chart) = s.scenario().clone() else {
            panic!("chart scenario expected");
        };
        s.select_option(chart.correct_answer.clone());
        s.submit().expect("valid submission");
        let outcome = s.outcome().expect("scored");
        assert!((outcome.score - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn chart_expiry_without_selection_scores_zero_with_time_up() {
        let mut s = session(GameId::ChartIn10);
        s.finish_loading();
        s.start().expect("start accepted");
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(s.phase(), GamePhase::Results);
        let outcome = s.outcome().expect("scored");
        assert!((outcome.score - 0.0).abs() < f32::EPSILON);
        assert!(outcome.time_up);
    }

    #[test]
    fn sniper_deferred_submit_falls_back_on_remote_failure() {
        let mut s = session(GameId::AssumptionSniper);
        s.finish_loading();
        s.set_slot(0, "no user training provided");
        s.set_slot(1, "testing env differs from production");
        s.set_slot(2, "irrelevant text padding");
        s.submit_deferred().expect("valid submission");
        assert_eq!(s.phase(), GamePhase::Submitting);
        s.resolve_remote(Err(ScoringError::RemoteUnavailable(String::from("offline"))));
        assert_eq!(s.phase(), GamePhase::Results);
        let outcome = s.outcome().expect("scored");
        assert!((outcome.score - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sniper_short_slots_block_manual_submit() {
        let mut s = session(GameId::AssumptionSniper);
        s.finish_loading();
        s.set_slot(0, "too short");
        s.set_slot(1, "long enough assumption");
        s.set_slot(2, "another long enough assumption");
        assert_eq!(s.submit(), Err(SubmitError::SlotTooShort));
        assert_eq!(s.phase(), GamePhase::Playing);
    }

    #[test]
    fn sprint_planning_enforces_capacity_and_auto_starts() {
        let mut s = session(GameId::SprintSimulator);
        s.finish_loading();
        assert_eq!(s.phase(), GamePhase::Ready);
        assert_eq!(s.time_remaining(), 60);

        // Greedily commit; capacity caps the plan at 30 points.
        let Scenario::Sprint(backlog) = s.scenario().clone() else {
            panic!("sprint scenario expected");
        };
        for story in &backlog.stories {
            s.toggle_story(story.id);
        }
        assert!(s.committed_points() <= TEAM_CAPACITY);
        assert!(!s.committed_story_ids().is_empty());

        // Planning clock runs out: the sprint starts on its own.
        let mut last = TickOutcome::Idle;
        for _ in 0..60 {
            last = s.tick();
        }
        assert_eq!(last, TickOutcome::AutoStarted);
        assert_eq!(s.phase(), GamePhase::Playing);
        assert!(s.sprint().is_some());
    }

    #[test]
    fn sprint_day_loop_ends_in_results() {
        let mut s = session(GameId::SprintSimulator);
        s.finish_loading();
        let Scenario::Sprint(backlog) = s.scenario().clone() else {
            panic!("sprint scenario expected");
        };
        s.toggle_story(backlog.stories[0].id);
        s.start().expect("plan committed");
        assert_eq!(s.phase(), GamePhase::Playing);

        while s.phase() == GamePhase::Playing {
            s.choose_event_option(0).expect("day resolves");
        }
        assert_eq!(s.phase(), GamePhase::Results);
        let outcome = s.outcome().expect("scored");
        assert!(outcome.score >= 0.0 && outcome.score <= 100.0);
    }

    #[test]
    fn sprint_manual_start_requires_a_commitment() {
        let mut s = session(GameId::SprintSimulator);
        s.finish_loading();
        assert_eq!(s.start(), Err(SubmitError::NothingCommitted));
        assert_eq!(s.phase(), GamePhase::Ready);
    }

    #[test]
    fn restart_resets_to_loading_with_fresh_state() {
        let mut s = session(GameId::ChartIn10);
        s.finish_loading();
        s.start().expect("start accepted");
        s.select_option("organic");
        s.submit().expect("valid submission");
        assert_eq!(s.phase(), GamePhase::Results);

        s.restart(&ScenarioPools::builtin()).expect("content exists");
        assert_eq!(s.phase(), GamePhase::Loading);
        assert!(s.outcome().is_none());
        assert_eq!(s.input(), &SessionInput::Choice(None));
        // The guard re-arms: the new run can score again.
        s.finish_loading();
        s.start().expect("start accepted");
        s.select_option("organic");
        s.submit().expect("valid submission");
        assert!(s.outcome().is_some());
    }

    #[test]
    fn input_mutations_are_ignored_outside_playing() {
        let mut s = session(GameId::StakeholderSandwich);
        s.set_response("too early");
        assert_eq!(s.input(), &SessionInput::Response(String::new()));
        s.finish_loading();
        s.set_response("in time");
        for _ in 0..45 {
            s.tick();
        }
        s.set_response("too late");
        assert_eq!(s.input(), &SessionInput::Response(String::from("in time")));
    }
}
