use mvpm_game::GameId;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/games/stakeholder-sandwich")]
    StakeholderSandwich,
    #[at("/games/sprint-simulator")]
    SprintSimulator,
    #[at("/games/assumption-sniper")]
    AssumptionSniper,
    #[at("/games/chart-in-10")]
    ChartIn10,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn for_game(game: GameId) -> Self {
        match game {
            GameId::StakeholderSandwich => Self::StakeholderSandwich,
            GameId::SprintSimulator => Self::SprintSimulator,
            GameId::AssumptionSniper => Self::AssumptionSniper,
            GameId::ChartIn10 => Self::ChartIn10,
        }
    }

    #[must_use]
    pub const fn game(&self) -> Option<GameId> {
        match self {
            Self::StakeholderSandwich => Some(GameId::StakeholderSandwich),
            Self::SprintSimulator => Some(GameId::SprintSimulator),
            Self::AssumptionSniper => Some(GameId::AssumptionSniper),
            Self::ChartIn10 => Some(GameId::ChartIn10),
            Self::Home | Self::NotFound => None,
        }
    }

    /// Document title used for page-view tracking.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "iterate - train your PM instincts",
            Self::StakeholderSandwich => "Stakeholder Sandwich",
            Self::SprintSimulator => "Sprint Simulator",
            Self::AssumptionSniper => "Assumption Sniper",
            Self::ChartIn10 => "Chart-in-10",
            Self::NotFound => "Page not found",
        }
    }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <crate::pages::home::HomePage /> },
        Route::StakeholderSandwich => {
            html! { <crate::pages::games::stakeholder_sandwich::StakeholderSandwichPage /> }
        }
        Route::SprintSimulator => {
            html! { <crate::pages::games::sprint_simulator::SprintSimulatorPage /> }
        }
        Route::AssumptionSniper => {
            html! { <crate::pages::games::assumption_sniper::AssumptionSniperPage /> }
        }
        Route::ChartIn10 => html! { <crate::pages::games::chart_in_10::ChartIn10Page /> },
        Route::NotFound => html! { <crate::pages::not_found::NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_routes_round_trip() {
        for game in GameId::ALL {
            assert_eq!(Route::for_game(game).game(), Some(game));
        }
        assert_eq!(Route::Home.game(), None);
    }
}
