use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "iterate - train the instincts the AI era demands" }</footer>
    }
}
