//! Social share copy
//!
//! Pure text builders; the web layer URL-encodes and targets the share
//! endpoints.
use crate::catalog::GameId;
use crate::scoring::sprint::SPRINT_DAYS;

/// Share platforms the results screens offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    LinkedIn,
    Twitter,
    Reddit,
}

impl SharePlatform {
    pub const ALL: [Self; 3] = [Self::LinkedIn, Self::Twitter, Self::Reddit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::Twitter => "twitter",
            Self::Reddit => "reddit",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Reddit => "Reddit",
        }
    }
}

/// Boast line for one finished session.
#[must_use]
pub fn share_message(game: GameId, score: f32, time_spent_secs: u32) -> String {
    match game {
        GameId::StakeholderSandwich => format!(
            "Just crushed a Stakeholder Sandwich in {time_spent_secs}s! Think you can handle impossible PM scenarios better? Try the MVPM challenge"
        ),
        GameId::AssumptionSniper => format!(
            "Just hunted down hidden assumptions and scored {}/6! Think you can spot the deadly assumptions that tank product launches? Try Assumption Sniper",
            score as i32
        ),
        GameId::ChartIn10 => format!(
            "I just analyzed a business chart in {time_spent_secs} seconds and scored {}/3 points on Chart-in-10! Think you can beat my PM instincts?",
            score as i32
        ),
        GameId::SprintSimulator => format!(
            "Just managed a {SPRINT_DAYS}-day sprint and scored {}/100! Think you can balance stakeholders, team morale, and delivery better? Try the Sprint Simulator",
            score as i32
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_score_and_time() {
        let msg = share_message(GameId::ChartIn10, 3.0, 4);
        assert!(msg.contains("4 seconds"));
        assert!(msg.contains("3/3"));

        let msg = share_message(GameId::AssumptionSniper, 5.0, 12);
        assert!(msg.contains("5/6"));

        let msg = share_message(GameId::SprintSimulator, 82.0, 60);
        assert!(msg.contains("10-day sprint"));
        assert!(msg.contains("82/100"));

        let msg = share_message(GameId::StakeholderSandwich, 8.5, 31);
        assert!(msg.contains("31s"));
    }

    #[test]
    fn platform_identifiers_are_stable() {
        for platform in SharePlatform::ALL {
            assert_eq!(platform.as_str().to_lowercase(), platform.as_str());
        }
    }
}
