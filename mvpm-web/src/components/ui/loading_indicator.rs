use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(p: &Props) -> Html {
    html! {
        <div class="game-state active">
            <div class="loading-spinner" aria-hidden="true"></div>
            <p class="loading-text" role="status">{ p.text.clone() }</p>
        </div>
    }
}
