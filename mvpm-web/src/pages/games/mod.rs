pub mod assumption_sniper;
pub mod chart_in_10;
pub mod sprint_simulator;
pub mod stakeholder_sandwich;

use mvpm_game::GameId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::GameHeader;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct UnavailableProps {
    pub game: GameId,
}

/// Shown when a game's feature flag resolves off.
#[function_component(GameUnavailable)]
pub fn game_unavailable(p: &UnavailableProps) -> Html {
    html! {
        <>
            <GameHeader />
            <div class="game-container">
                <h1>{ p.game.title() }</h1>
                <p>{ "This game is currently unavailable." }</p>
                <p><Link<Route> to={Route::Home}>{ "Return to games" }</Link<Route>></p>
            </div>
        </>
    }
}
