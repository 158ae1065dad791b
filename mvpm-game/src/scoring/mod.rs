//! Per-game scoring strategies
//!
//! Each strategy is a pure function of the accumulated input and the
//! scenario; the session invokes it exactly once, at the terminal
//! transition. Tuning constants (keyword lists, bonus magnitudes, the chart
//! time-bonus threshold) are carried in per-strategy config structs rather
//! than hard-coded at the call sites.

pub mod assumptions;
pub mod chart;
pub mod response;
pub mod sprint;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::GameId;

pub use assumptions::{AssumptionScoringCfg, SlotAnalysis, SlotClass, score_assumptions};
pub use chart::{ChartScoringCfg, score_chart};
pub use response::{ResponseScoringCfg, score_response};
pub use sprint::{SprintReport, SprintScoringCfg, score_sprint};

/// Error raised by an optional remote scoring attempt. Never escapes the
/// session; the caller always falls back to the local strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("remote scorer unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("remote scorer returned an unusable response: {0}")]
    BadResponse(String),
}

/// Verdict delivered by the remote assumption analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAnalysis {
    pub analysis: Vec<SlotAnalysis>,
    #[serde(rename = "overallFeedback")]
    pub overall_feedback: String,
}

/// Game-specific breakdown attached to the final outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreDetails {
    Response {
        word_count: usize,
    },
    Assumptions {
        analysis: Vec<SlotAnalysis>,
    },
    Chart {
        selected: Option<String>,
        option_points: u32,
        time_bonus: u32,
    },
    Sprint(SprintReport),
    Skipped,
}

/// Final, immutable result of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub score: f32,
    pub max_score: f32,
    pub feedback: String,
    pub time_up: bool,
    pub details: ScoreDetails,
}

impl ScoreOutcome {
    /// Canned outcome for an explicitly skipped challenge.
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            score: 0.0,
            max_score: 0.0,
            feedback: String::from(
                "No worries! Even the best PMs know when to step back and reassess. Ready to try again with a different scenario?",
            ),
            time_up: false,
            details: ScoreDetails::Skipped,
        }
    }
}

/// Scoring strategy, selected by game identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringStrategy {
    FreeTextKeyword(ResponseScoringCfg),
    SlotClassification(AssumptionScoringCfg),
    FixedChoice(ChartScoringCfg),
    MultiStepSimulation(SprintScoringCfg),
}

impl ScoringStrategy {
    #[must_use]
    pub fn for_game(game: GameId) -> Self {
        match game {
            GameId::StakeholderSandwich => Self::FreeTextKeyword(ResponseScoringCfg::default()),
            GameId::AssumptionSniper => Self::SlotClassification(AssumptionScoringCfg::default()),
            GameId::ChartIn10 => Self::FixedChoice(ChartScoringCfg::default()),
            GameId::SprintSimulator => Self::MultiStepSimulation(SprintScoringCfg::default()),
        }
    }
}

/// Fold a remote scoring attempt into a local outcome: remote errors are
/// swallowed and the locally computed outcome stands.
#[must_use]
pub fn merge_remote_analysis(
    local: ScoreOutcome,
    remote: Result<RemoteAnalysis, ScoringError>,
) -> ScoreOutcome {
    match remote {
        Ok(remote) if remote.analysis.len() == assumptions::SLOT_COUNT => {
            let score = remote
                .analysis
                .iter()
                .map(|slot| slot.classification.points())
                .sum::<u32>();
            ScoreOutcome {
                score: score as f32,
                max_score: local.max_score,
                feedback: remote.overall_feedback.clone(),
                time_up: local.time_up,
                details: ScoreDetails::Assumptions {
                    analysis: remote.analysis,
                },
            }
        }
        Ok(remote) => {
            log::warn!(
                "remote analysis returned {} slots, expected {}; keeping local result",
                remote.analysis.len(),
                assumptions::SLOT_COUNT
            );
            local
        }
        Err(err) => {
            log::warn!("remote scoring failed, using local analysis: {err}");
            local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_outcome() -> ScoreOutcome {
        let cfg = AssumptionScoringCfg::default();
        let slots = std::array::from_fn(|_| String::from("no user training provided"));
        score_assumptions(&cfg, &slots, false)
    }

    #[test]
    fn remote_errors_fall_back_to_local() {
        let local = local_outcome();
        let merged = merge_remote_analysis(
            local.clone(),
            Err(ScoringError::RemoteUnavailable(String::from("offline"))),
        );
        assert_eq!(merged, local);
    }

    #[test]
    fn remote_verdict_replaces_local_score() {
        let local = local_outcome();
        let remote = RemoteAnalysis {
            analysis: vec![
                SlotAnalysis {
                    assumption: String::from("a"),
                    classification: SlotClass::Correct,
                    analysis: String::from("sharp"),
                };
                3
            ],
            overall_feedback: String::from("panel verdict"),
        };
        let merged = merge_remote_analysis(local, Ok(remote));
        assert!((merged.score - 6.0).abs() < f32::EPSILON);
        assert_eq!(merged.feedback, "panel verdict");
    }

    #[test]
    fn short_remote_analysis_is_rejected() {
        let local = local_outcome();
        let remote = RemoteAnalysis {
            analysis: Vec::new(),
            overall_feedback: String::from("empty"),
        };
        assert_eq!(merge_remote_analysis(local.clone(), Ok(remote)), local);
    }
}
