use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main role="main" class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "That page shipped to the wrong sprint." }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Back to Home" }</Link<Route>>
        </main>
    }
}
