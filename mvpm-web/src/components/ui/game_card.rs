use mvpm_game::GameId;
use serde_json::json;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_services;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: GameId,
}

/// Games-grid card linking into one mini-game.
#[function_component(GameCard)]
pub fn game_card(p: &Props) -> Html {
    let services = use_services();
    let game = p.game;

    let onclick = Callback::from(move |_| {
        let mut properties = serde_json::Map::new();
        properties.insert(String::from("game_id"), json!(game.as_str()));
        properties.insert(String::from("game_name"), json!(game.title()));
        properties.insert(String::from("section"), json!("games_grid"));
        services.app.analytics().track("game_click", properties);
    });

    html! {
        <Link<Route> to={Route::for_game(game)} classes="game-card">
            <div class="game-card-body" onclick={onclick}>
                <h3 class="game-card-title">{ game.title() }</h3>
                <p class="game-card-tagline">{ game.tagline() }</p>
                <span class="game-card-cta">{ "Play now" }</span>
            </div>
        </Link<Route>>
    }
}
