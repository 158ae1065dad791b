//! Fixed-choice scoring for Chart-in-10
use serde::{Deserialize, Serialize};

use super::{ScoreDetails, ScoreOutcome};
use crate::scenario::ChartScenario;

/// Tuning constants for the decision game. The threshold and bonus size are
/// product-tuned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartScoringCfg {
    /// Seconds that must remain at submit for the speed bonus.
    pub time_bonus_threshold: u32,
    pub time_bonus: u32,
}

impl Default for ChartScoringCfg {
    fn default() -> Self {
        Self {
            time_bonus_threshold: 5,
            time_bonus: 1,
        }
    }
}

/// Score a decision: the chosen option's fixed point value plus the speed
/// bonus iff more than the threshold remains. The expiry path passes
/// whatever selection exists; none at all scores zero.
#[must_use]
pub fn score_chart(
    cfg: &ChartScoringCfg,
    scenario: &ChartScenario,
    selected: Option<&str>,
    time_remaining: u32,
    time_up: bool,
) -> ScoreOutcome {
    let max_score = (scenario.max_option_points() + cfg.time_bonus) as f32;
    let Some(option) = selected.and_then(|id| scenario.option(id)) else {
        return ScoreOutcome {
            score: 0.0,
            max_score,
            feedback: String::from("Time's up! No decision made."),
            time_up,
            details: ScoreDetails::Chart {
                selected: None,
                option_points: 0,
                time_bonus: 0,
            },
        };
    };

    let time_bonus = if time_remaining > cfg.time_bonus_threshold {
        cfg.time_bonus
    } else {
        0
    };
    ScoreOutcome {
        score: (option.points + time_bonus) as f32,
        max_score,
        feedback: scenario.explanation.clone(),
        time_up,
        details: ScoreDetails::Chart {
            selected: Some(option.id.clone()),
            option_points: option.points,
            time_bonus,
        },
    }
}
