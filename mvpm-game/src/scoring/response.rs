//! Free-text response scoring for Stakeholder Sandwich
use serde::{Deserialize, Serialize};

use super::{ScoreDetails, ScoreOutcome};

/// Tuning constants for free-text scoring. The keyword lists and bonus
/// magnitudes are product-tuned values, not derived quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseScoringCfg {
    pub base_score: f32,
    pub evidence_bonus: f32,
    pub alternatives_bonus: f32,
    pub empathy_bonus: f32,
    pub brevity_bonus: f32,
    pub brevity_min_words: usize,
    pub brevity_max_words: usize,
    pub evidence_keywords: Vec<String>,
    pub alternatives_keywords: Vec<String>,
    pub empathy_keywords: Vec<String>,
}

impl Default for ResponseScoringCfg {
    fn default() -> Self {
        Self {
            base_score: 7.0,
            evidence_bonus: 1.0,
            alternatives_bonus: 1.0,
            empathy_bonus: 0.5,
            brevity_bonus: 0.5,
            brevity_min_words: 10,
            brevity_max_words: 50,
            evidence_keywords: keywords(&["%", "metric", "kpi", "data"]),
            alternatives_keywords: keywords(&["alternative", "option", "instead", "pivot"]),
            empathy_keywords: keywords(&["understand", "team", "concern"]),
        }
    }
}

impl ResponseScoringCfg {
    /// Highest score the strategy can award.
    #[must_use]
    pub fn max_score(&self) -> f32 {
        self.base_score
            + self.evidence_bonus
            + self.alternatives_bonus
            + self.empathy_bonus
            + self.brevity_bonus
    }
}

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn mentions_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// Score a free-text response. Pure and deterministic: identical input
/// always yields the identical outcome. Each keyword-category bonus is
/// awarded at most once.
#[must_use]
pub fn score_response(cfg: &ResponseScoringCfg, response: &str, time_up: bool) -> ScoreOutcome {
    let lowered = response.to_lowercase();
    let mut score = cfg.base_score;
    let mut feedback = String::from("Strong PM instincts! ");

    if mentions_any(&lowered, &cfg.evidence_keywords) {
        score += cfg.evidence_bonus;
        feedback.push_str("Great use of data-driven reasoning. ");
    }
    if mentions_any(&lowered, &cfg.alternatives_keywords) {
        score += cfg.alternatives_bonus;
        feedback.push_str("Excellent strategic thinking with alternatives. ");
    }
    if mentions_any(&lowered, &cfg.empathy_keywords) {
        score += cfg.empathy_bonus;
        feedback.push_str("Good stakeholder empathy. ");
    }

    let word_count = response.split_whitespace().count();
    if (cfg.brevity_min_words..=cfg.brevity_max_words).contains(&word_count) {
        score += cfg.brevity_bonus;
        feedback.push_str("Perfect brevity. ");
    } else if word_count > cfg.brevity_max_words {
        feedback.push_str("Consider being more concise - PMs must communicate efficiently. ");
    }

    feedback.push_str(
        "You're in the top 10% of PMs, but the real challenges haven't even started. Can you maintain this excellence when the stakes are higher?",
    );

    ScoreOutcome {
        score,
        max_score: cfg.max_score(),
        feedback,
        time_up,
        details: ScoreDetails::Response { word_count },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_is_pure_and_deterministic() {
        let cfg = ResponseScoringCfg::default();
        let text = "I'd show the conversion data and propose an alternative rollout the team can support.";
        let first = score_response(&cfg, text, false);
        let second = score_response(&cfg, text, false);
        assert_eq!(first, second);
    }

    #[test]
    fn each_category_bonus_applies_at_most_once() {
        let cfg = ResponseScoringCfg::default();
        let stacked = "data data data metric kpi data";
        let outcome = score_response(&cfg, stacked, false);
        // base + evidence only; six keyword hits still earn one bonus
        assert!((outcome.score - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn brevity_band_awards_half_point() {
        let cfg = ResponseScoringCfg::default();
        let ten_words = "one two three four five six seven eight nine ten";
        let outcome = score_response(&cfg, ten_words, false);
        assert!((outcome.score - 7.5).abs() < f32::EPSILON);
        match outcome.details {
            ScoreDetails::Response { word_count } => assert_eq!(word_count, 10),
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn rambling_responses_get_concision_advice_not_penalty() {
        let cfg = ResponseScoringCfg::default();
        let long = "word ".repeat(60);
        let outcome = score_response(&cfg, &long, false);
        assert!((outcome.score - cfg.base_score).abs() < f32::EPSILON);
        assert!(outcome.feedback.contains("more concise"));
    }

    #[test]
    fn empty_response_scores_base_only() {
        let cfg = ResponseScoringCfg::default();
        let outcome = score_response(&cfg, "", true);
        assert!((outcome.score - cfg.base_score).abs() < f32::EPSILON);
        assert!(outcome.time_up);
    }

    #[test]
    fn all_bonuses_reach_max_score() {
        let cfg = ResponseScoringCfg::default();
        let text = "I understand the team's concern: the data shows a 23% drop, so instead I propose an alternative plan with a clear metric to track weekly.";
        let outcome = score_response(&cfg, text, false);
        assert!((outcome.score - cfg.max_score()).abs() < f32::EPSILON);
    }
}
