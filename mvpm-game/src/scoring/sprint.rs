//! Multi-day resource-balance simulation for Sprint Simulator
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

use super::{ScoreDetails, ScoreOutcome};
use crate::scenario::{DailyEvent, Story, quiet_day};

/// Story points one team can commit to in a single sprint.
pub const TEAM_CAPACITY: u32 = 30;

/// Discrete days the simulation runs.
pub const SPRINT_DAYS: u32 = 10;

const GAUGE_MAX: f32 = 100.0;

/// Tuning constants for the sprint score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprintScoringCfg {
    pub delivery_weight: f32,
    pub balance_weight: f32,
    /// Fraction of a story's points lost when its risk check fires.
    pub risk_spill: f32,
}

impl Default for SprintScoringCfg {
    fn default() -> Self {
        Self {
            delivery_weight: 50.0,
            balance_weight: 50.0,
            risk_spill: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SprintError {
    #[error("the sprint has already ended")]
    SprintComplete,
    #[error("event option {0} does not exist")]
    InvalidOption(usize),
}

/// What one day did to the board, for UI narration.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDigest {
    pub day: u32,
    pub morale: f32,
    pub stakeholders: f32,
    pub completed_points: f32,
    pub stories_slipped: u32,
}

/// Final gauge and delivery readings.
#[derive(Debug, Clone, PartialEq)]
pub struct SprintReport {
    pub committed_points: u32,
    pub delivered_points: f32,
    pub delivery_ratio: f32,
    pub morale: f32,
    pub stakeholders: f32,
}

/// Running sprint: a fixed number of event-paced days over two bounded
/// gauges and an accumulating progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct SprintSim {
    committed: Vec<Story>,
    committed_points: u32,
    events: VecDeque<DailyEvent>,
    current_event: Option<DailyEvent>,
    day: u32,
    morale: f32,
    stakeholders: f32,
    completed_points: f32,
    risk_spill: f32,
}

impl SprintSim {
    #[must_use]
    pub fn new(committed: Vec<Story>, events: Vec<DailyEvent>, cfg: &SprintScoringCfg) -> Self {
        let committed_points = committed.iter().map(|story| story.points).sum();
        let mut sim = Self {
            committed,
            committed_points,
            events: events.into(),
            current_event: None,
            day: 1,
            morale: GAUGE_MAX,
            stakeholders: GAUGE_MAX,
            completed_points: 0.0,
            risk_spill: cfg.risk_spill,
        };
        sim.deal_event();
        sim
    }

    fn deal_event(&mut self) {
        self.current_event = Some(self.events.pop_front().unwrap_or_else(quiet_day));
    }

    /// Steady progress the committed load implies per day at full morale.
    #[must_use]
    pub fn base_velocity(&self) -> f32 {
        self.committed_points as f32 / SPRINT_DAYS as f32
    }

    /// Resolve the current day with the chosen event option.
    ///
    /// # Errors
    ///
    /// Returns an error if the sprint is over or the option index is out of
    /// range; neither mutates the simulation.
    pub fn choose<R: Rng>(
        &mut self,
        option_index: usize,
        rng: &mut R,
    ) -> Result<DayDigest, SprintError> {
        if self.is_complete() {
            return Err(SprintError::SprintComplete);
        }
        let event = self
            .current_event
            .as_ref()
            .ok_or(SprintError::SprintComplete)?;
        let option = event
            .options
            .get(option_index)
            .ok_or(SprintError::InvalidOption(option_index))?
            .clone();

        self.morale = (self.morale + option.morale as f32).clamp(0.0, GAUGE_MAX);
        self.stakeholders =
            (self.stakeholders + option.stakeholders as f32).clamp(0.0, GAUGE_MAX);

        let morale_modifier = self.morale / GAUGE_MAX;
        let daily_velocity = self.base_velocity() * morale_modifier + option.velocity;
        self.completed_points += daily_velocity;

        // Independent per-story degradation check, risk spread across days.
        let mut slipped = 0_u32;
        for story in &self.committed {
            if rng.r#gen::<f32>() < story.risk / SPRINT_DAYS as f32 {
                self.completed_points -= story.points as f32 * self.risk_spill;
                slipped += 1;
            }
        }
        self.completed_points = self.completed_points.max(0.0);

        let digest = DayDigest {
            day: self.day,
            morale: self.morale,
            stakeholders: self.stakeholders,
            completed_points: self.completed_points,
            stories_slipped: slipped,
        };

        self.day += 1;
        if self.is_complete() {
            self.current_event = None;
        } else {
            self.deal_event();
        }
        Ok(digest)
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.day > SPRINT_DAYS
    }

    #[must_use]
    pub const fn current_event(&self) -> Option<&DailyEvent> {
        self.current_event.as_ref()
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn morale(&self) -> f32 {
        self.morale
    }

    #[must_use]
    pub const fn stakeholders(&self) -> f32 {
        self.stakeholders
    }

    #[must_use]
    pub const fn completed_points(&self) -> f32 {
        self.completed_points
    }

    #[must_use]
    pub const fn committed_points(&self) -> u32 {
        self.committed_points
    }

    #[must_use]
    pub fn report(&self) -> SprintReport {
        let delivery_ratio = if self.committed_points > 0 {
            self.completed_points / self.committed_points as f32
        } else {
            0.0
        };
        SprintReport {
            committed_points: self.committed_points,
            delivered_points: self.completed_points,
            delivery_ratio,
            morale: self.morale,
            stakeholders: self.stakeholders,
        }
    }
}

fn band_feedback(score: i32) -> String {
    if score >= 80 {
        String::from(
            "🏆 Outstanding sprint execution! You delivered on commitments while keeping both team morale and stakeholder satisfaction high. This is the hallmark of exceptional product management.",
        )
    } else if score >= 60 {
        String::from(
            "💪 Solid sprint management! You handled the challenges well, though there's room for optimization in balancing delivery with team and stakeholder needs.",
        )
    } else if score >= 40 {
        String::from(
            "📈 Learning experience! Sprint management is about finding the right balance. Consider how your decisions impact both delivery and relationships.",
        )
    } else {
        String::from(
            "🎯 Keep practicing! Great PMs learn that sustainable delivery requires managing technical debt, team morale, and stakeholder expectations simultaneously.",
        )
    }
}

/// Weighted combination of delivery ratio and the weaker of the two gauges,
/// scaled to 0..=100.
#[must_use]
pub fn score_sprint(cfg: &SprintScoringCfg, sim: &SprintSim, time_up: bool) -> ScoreOutcome {
    let report = sim.report();
    let balance = report.morale.min(report.stakeholders) / GAUGE_MAX;
    let score = (report.delivery_ratio * cfg.delivery_weight + balance * cfg.balance_weight)
        .round();

    ScoreOutcome {
        score,
        max_score: cfg.delivery_weight + cfg.balance_weight,
        feedback: band_feedback(score as i32),
        time_up,
        details: ScoreDetails::Sprint(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioPools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn committed() -> Vec<Story> {
        // 5 + 8 + 10 = 23 points, within capacity
        ScenarioPools::builtin()
            .stories
            .into_iter()
            .filter(|story| [1, 4, 7].contains(&story.id))
            .collect()
    }

    fn sim() -> SprintSim {
        let cfg = SprintScoringCfg::default();
        SprintSim::new(committed(), ScenarioPools::builtin().events, &cfg)
    }

    #[test]
    fn gauges_stay_bounded_for_any_choice_sequence() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        // Always take the harshest option available.
        let mut sim = sim();
        while !sim.is_complete() {
            let worst = sim
                .current_event()
                .map(|event| event.options.len() - 1)
                .unwrap_or_default();
            sim.choose(worst, &mut rng).expect("day resolves");
            assert!((0.0..=100.0).contains(&sim.morale()));
            assert!((0.0..=100.0).contains(&sim.stakeholders()));
            assert!(sim.completed_points() >= 0.0);
        }
        assert_eq!(sim.day(), SPRINT_DAYS + 1);
    }

    #[test]
    fn sprint_runs_exactly_ten_days() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut sim = sim();
        let mut days = 0;
        while !sim.is_complete() {
            sim.choose(0, &mut rng).expect("day resolves");
            days += 1;
        }
        assert_eq!(days, SPRINT_DAYS);
        assert!(sim.current_event().is_none());
        assert_eq!(sim.choose(0, &mut rng), Err(SprintError::SprintComplete));
    }

    #[test]
    fn event_deck_falls_back_to_quiet_days() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut sim = sim();
        for _ in 0..5 {
            sim.choose(0, &mut rng).expect("day resolves");
        }
        // Deck holds four events; day six onward is filler.
        let event = sim.current_event().expect("filler event");
        assert_eq!(event.title, "A Quiet Day");
    }

    #[test]
    fn invalid_option_leaves_state_untouched(){
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut sim = sim();
        let before = sim.clone();
        assert_eq!(sim.choose(9, &mut rng), Err(SprintError::InvalidOption(9)));
        assert_eq!(sim, before);
    }

    #[test]
    fn perfect_delivery_and_full_gauges_score_one_hundred() {
        let cfg = SprintScoringCfg::default();
        let mut sim = SprintSim::new(committed(), Vec::new(), &cfg);
        sim.morale = 100.0;
        sim.stakeholders = 100.0;
        sim.completed_points = sim.committed_points() as f32;
        let outcome = score_sprint(&cfg, &sim, false);
        assert!((outcome.score - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_commitment_scores_balance_component_only() {
        let cfg = SprintScoringCfg::default();
        let sim = SprintSim::new(Vec::new(), Vec::new(), &cfg);
        let outcome = score_sprint(&cfg, &sim, false);
        // Delivery ratio is defined as zero with nothing committed.
        assert!((outcome.score - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn weaker_gauge_drives_the_balance_term() {
        let cfg = SprintScoringCfg::default();
        let mut sim = SprintSim::new(committed(), Vec::new(), &cfg);
        sim.morale = 20.0;
        sim.stakeholders = 90.0;
        sim.completed_points = 0.0;
        let outcome = score_sprint(&cfg, &sim, false);
        assert!((outcome.score - 10.0).abs() < f32::EPSILON);
    }
}
