//! Game catalog: identifiers and per-game metadata
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SANDWICH_PLAY_SECS: u32 = 45;
const SNIPER_PLAY_SECS: u32 = 40;
const CHART_PLAY_SECS: u32 = 10;
const SPRINT_PLANNING_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameId {
    StakeholderSandwich,
    SprintSimulator,
    AssumptionSniper,
    ChartIn10,
}

impl GameId {
    pub const ALL: [Self; 4] = [
        Self::StakeholderSandwich,
        Self::SprintSimulator,
        Self::AssumptionSniper,
        Self::ChartIn10,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StakeholderSandwich => "stakeholder_sandwich",
            Self::SprintSimulator => "sprint_simulator",
            Self::AssumptionSniper => "assumption_sniper",
            Self::ChartIn10 => "chart_in_10",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::StakeholderSandwich => "Stakeholder Sandwich",
            Self::SprintSimulator => "Sprint Simulator",
            Self::AssumptionSniper => "Assumption Sniper",
            Self::ChartIn10 => "Chart-in-10",
        }
    }

    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::StakeholderSandwich => {
                "45 seconds. One impossible request. Your reputation on the line."
            }
            Self::SprintSimulator => {
                "Navigate 10 days of PM chaos. Balance stakeholders, team morale, and delivery commitments."
            }
            Self::AssumptionSniper => {
                "Find exactly 3 hidden assumptions that could tank this feature. Miss one, pay the price."
            }
            Self::ChartIn10 => {
                "10 seconds to read a chart. Keep or kill? Your call could make or break the quarter."
            }
        }
    }

    /// Feature-flag key gating this game's visibility.
    #[must_use]
    pub const fn flag_key(self) -> &'static str {
        match self {
            Self::StakeholderSandwich => "games.stakeholder_sandwich",
            Self::SprintSimulator => "games.sprint_simulator",
            Self::AssumptionSniper => "games.assumption_sniper",
            Self::ChartIn10 => "games.chart_in_10",
        }
    }

    /// Countdown armed while the session is in `Playing`, if any.
    /// The sprint day loop is event-paced rather than clock-paced.
    #[must_use]
    pub const fn play_countdown_secs(self) -> Option<u32> {
        match self {
            Self::StakeholderSandwich => Some(SANDWICH_PLAY_SECS),
            Self::SprintSimulator => None,
            Self::AssumptionSniper => Some(SNIPER_PLAY_SECS),
            Self::ChartIn10 => Some(CHART_PLAY_SECS),
        }
    }

    /// Countdown armed while the session is in `Ready` (planning games only).
    #[must_use]
    pub const fn ready_countdown_secs(self) -> Option<u32> {
        match self {
            Self::SprintSimulator => Some(SPRINT_PLANNING_SECS),
            _ => None,
        }
    }

    /// Whether the machine passes through a pre-start `Ready` state.
    #[must_use]
    pub const fn has_ready_state(self) -> bool {
        matches!(self, Self::SprintSimulator | Self::ChartIn10)
    }

    /// Nominal session duration used for time-spent reporting.
    #[must_use]
    pub const fn duration_secs(self) -> u32 {
        match self {
            Self::StakeholderSandwich => SANDWICH_PLAY_SECS,
            Self::SprintSimulator => SPRINT_PLANNING_SECS,
            Self::AssumptionSniper => SNIPER_PLAY_SECS,
            Self::ChartIn10 => CHART_PLAY_SECS,
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stakeholder_sandwich" => Ok(Self::StakeholderSandwich),
            "sprint_simulator" => Ok(Self::SprintSimulator),
            "assumption_sniper" => Ok(Self::AssumptionSniper),
            "chart_in_10" => Ok(Self::ChartIn10),
            _ => Err(()),
        }
    }
}

impl From<GameId> for String {
    fn from(value: GameId) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_id_round_trips_through_strings() {
        for game in GameId::ALL {
            assert_eq!(GameId::from_str(game.as_str()), Ok(game));
            assert_eq!(game.to_string(), game.as_str());
        }
        assert_eq!(GameId::from_str("minesweeper"), Err(()));
    }

    #[test]
    fn ready_state_matches_countdown_layout() {
        for game in GameId::ALL {
            if game.ready_countdown_secs().is_some() {
                assert!(game.has_ready_state());
            }
        }
        assert!(GameId::ChartIn10.has_ready_state());
        assert!(!GameId::StakeholderSandwich.has_ready_state());
        assert_eq!(GameId::SprintSimulator.play_countdown_secs(), None);
    }
}
