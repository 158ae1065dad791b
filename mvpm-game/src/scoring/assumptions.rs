//! Slot-classification scoring for Assumption Sniper
use serde::{Deserialize, Serialize};

use super::{ScoreDetails, ScoreOutcome};

/// The game always asks for exactly three assumptions.
pub const SLOT_COUNT: usize = 3;

/// Minimum characters a slot needs before manual submission is allowed.
pub const MIN_SLOT_LEN: usize = 10;

const CORRECT_POINTS: u32 = 2;
const PARTIAL_POINTS: u32 = 1;

/// Classification of one submitted assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotClass {
    Correct,
    Partial,
    Incorrect,
}

impl SlotClass {
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Correct => CORRECT_POINTS,
            Self::Partial => PARTIAL_POINTS,
            Self::Incorrect => 0,
        }
    }
}

/// Per-slot verdict with the explanation shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAnalysis {
    pub assumption: String,
    pub classification: SlotClass,
    #[serde(rename = "analysisText")]
    pub analysis: String,
}

/// One keyword category an assumption can touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Keyword dictionary and phrase tests driving slot classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssumptionScoringCfg {
    pub categories: Vec<KeywordCategory>,
}

impl Default for AssumptionScoringCfg {
    fn default() -> Self {
        Self {
            categories: vec![
                category("user behavior", &["user", "behavior", "habit", "workflow", "process", "training"]),
                category("data interpretation", &["data", "metric", "testing", "sample", "bias", "context"]),
                category("stakeholder needs", &["stakeholder", "client", "customer", "requirement", "expectation"]),
                category("technical constraints", &["technical", "system", "infrastructure", "performance", "compatibility"]),
                category("change management", &["change", "adoption", "transition", "communication", "rollout"]),
            ],
        }
    }
}

fn category(name: &str, words: &[&str]) -> KeywordCategory {
    KeywordCategory {
        name: name.to_string(),
        keywords: words.iter().map(|w| (*w).to_string()).collect(),
    }
}

/// Classify a single assumption. The checks run in a fixed order and the
/// last match wins, so a stakeholder mention downgrades an earlier
/// phrase-test hit back to partial.
fn classify(cfg: &AssumptionScoringCfg, assumption: &str) -> (SlotClass, String) {
    let lowered = assumption.to_lowercase();
    let mut class = SlotClass::Incorrect;
    let mut analysis =
        String::from("This assumption needs more specific connection to the dashboard failure.");

    let touched: Vec<&str> = cfg
        .categories
        .iter()
        .filter(|cat| cat.keywords.iter().any(|kw| lowered.contains(kw.as_str())))
        .map(|cat| cat.name.as_str())
        .collect();
    if !touched.is_empty() {
        class = SlotClass::Partial;
        analysis = format!("Good insight! This touches on {} issues. ", touched.join(" and "));
    }

    if lowered.contains("user") && (lowered.contains("training") || lowered.contains("learn")) {
        class = SlotClass::Correct;
        analysis =
            String::from("Excellent! User training assumptions are often overlooked in redesigns. ");
    }
    if lowered.contains("test") && (lowered.contains("production") || lowered.contains("real")) {
        class = SlotClass::Correct;
        analysis =
            String::from("Spot on! Testing environments rarely match real-world usage complexity. ");
    }
    if lowered.contains("stakeholder") || lowered.contains("client") {
        class = SlotClass::Partial;
        analysis = String::from(
            "Good stakeholder awareness. Consider how different user segments were affected. ",
        );
    }

    (class, analysis)
}

fn band_feedback(total: u32) -> String {
    if total >= 5 {
        String::from(
            "🎯 Excellent assumption hunting! You identified critical blind spots that could tank a product launch. Your PM instincts are sharp - you understand that the biggest risks often hide in what teams take for granted.",
        )
    } else if total >= 3 {
        String::from(
            "💡 Good detective work! You caught some important assumptions, though there might be deeper systemic issues to uncover. Remember: the most dangerous assumptions are the ones that seem obviously true.",
        )
    } else {
        String::from(
            "🔍 Keep digging deeper! Assumption hunting is a skill that improves with practice. Think about what the team might have taken for granted about user behavior, data interpretation, or stakeholder needs.",
        )
    }
}

/// Score the three slots independently; the total is always the sum of the
/// per-slot classifications regardless of slot order.
#[must_use]
pub fn score_assumptions(
    cfg: &AssumptionScoringCfg,
    slots: &[String; SLOT_COUNT],
    time_up: bool,
) -> ScoreOutcome {
    let analysis: Vec<SlotAnalysis> = slots
        .iter()
        .map(|slot| {
            let (classification, analysis) = classify(cfg, slot);
            SlotAnalysis {
                assumption: slot.clone(),
                classification,
                analysis,
            }
        })
        .collect();
    let total: u32 = analysis.iter().map(|slot| slot.classification.points()).sum();

    ScoreOutcome {
        score: total as f32,
        max_score: (SLOT_COUNT as u32 * CORRECT_POINTS) as f32,
        feedback: band_feedback(total),
        time_up,
        details: ScoreDetails::Assumptions { analysis },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(a: &str, b: &str, c: &str) -> [String; SLOT_COUNT] {
        [a.to_string(), b.to_string(), c.to_string()]
    }

    fn classes(outcome: &ScoreOutcome) -> Vec<SlotClass> {
        match &outcome.details {
            ScoreDetails::Assumptions { analysis } => {
                analysis.iter().map(|slot| slot.classification).collect()
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn acceptance_scenario_from_product_brief() {
        let cfg = AssumptionScoringCfg::default();
        let outcome = score_assumptions(
            &cfg,
            &slots(
                "no user training provided",
                "testing env differs from production",
                "irrelevant text",
            ),
            false,
        );
        assert_eq!(
            classes(&outcome),
            vec![SlotClass::Correct, SlotClass::Correct, SlotClass::Incorrect]
        );
        assert!((outcome.score - 4.0).abs() < f32::EPSILON);
        assert!((outcome.max_score - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn total_is_sum_of_per_slot_points_in_any_order() {
        let cfg = AssumptionScoringCfg::default();
        let forward = score_assumptions(
            &cfg,
            &slots("users need training", "the data sample was biased", "nothing here"),
            false,
        );
        let reversed = score_assumptions(
            &cfg,
            &slots("nothing here", "the data sample was biased", "users need training"),
            false,
        );
        assert!((forward.score - reversed.score).abs() < f32::EPSILON);
        for outcome in [&forward, &reversed] {
            let sum: u32 = classes(outcome).iter().map(|c| c.points()).sum();
            assert!((outcome.score - sum as f32).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn stakeholder_mention_downgrades_to_partial() {
        let cfg = AssumptionScoringCfg::default();
        let outcome = score_assumptions(
            &cfg,
            &slots(
                "the client assumed user training was unnecessary",
                "empty",
                "empty",
            ),
            false,
        );
        assert_eq!(classes(&outcome)[0], SlotClass::Partial);
    }

    #[test]
    fn empty_slots_score_zero_on_the_expiry_path() {
        let cfg = AssumptionScoringCfg::default();
        let outcome = score_assumptions(&cfg, &slots("", "", ""), true);
        assert!((outcome.score - 0.0).abs() < f32::EPSILON);
        assert!(outcome.time_up);
        assert!(outcome.feedback.contains("Keep digging deeper"));
    }

    #[test]
    fn band_feedback_tracks_total() {
        assert!(band_feedback(6).contains("Excellent assumption hunting"));
        assert!(band_feedback(5).contains("Excellent assumption hunting"));
        assert!(band_feedback(4).contains("Good detective work"));
        assert!(band_feedback(3).contains("Good detective work"));
        assert!(band_feedback(2).contains("Keep digging deeper"));
    }
}
