use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Game-page navigation strip: logo plus a way back home.
#[function_component(GameHeader)]
pub fn game_header() -> Html {
    html! {
        <header class="game-header-nav" role="banner">
            <nav>
                <Link<Route> to={Route::Home} classes="logo">{ "iterate" }</Link<Route>>
                <Link<Route> to={Route::Home} classes="back-home">{ "← Back to Home" }</Link<Route>>
            </nav>
        </header>
    }
}
