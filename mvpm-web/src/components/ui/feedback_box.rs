use mvpm_game::GameId;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::use_services;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: GameId,
}

/// "Help us improve" box on the results screens.
#[function_component(FeedbackBox)]
pub fn feedback_box(p: &Props) -> Html {
    let services = use_services();
    let text = use_state(String::new);
    let sent = use_state(|| false);

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                text.set(area.value());
            }
        })
    };

    let onclick = {
        let services = services.clone();
        let text = text.clone();
        let sent = sent.clone();
        let game = p.game;
        Callback::from(move |_| {
            let feedback = text.trim().to_string();
            if feedback.is_empty() {
                return;
            }
            services
                .app
                .analytics()
                .user_feedback_submitted(game, &feedback);
            let supabase = services.supabase.clone();
            let recorded = feedback.clone();
            spawn_local(async move {
                let mut metadata = serde_json::Map::new();
                metadata.insert(String::from("feedback"), json!(recorded));
                supabase
                    .track_game_interaction(game.as_str(), "feedback_submitted", metadata)
                    .await;
            });
            text.set(String::new());
            sent.set(true);
        })
    };

    html! {
        <div class="feedback-form">
            <h3 class="feedback-title">{ "Help Us Improve" }</h3>
            <textarea
                class="feedback-input"
                placeholder="How was the challenge? Any suggestions for improvement? Your input shapes our AI..."
                value={(*text).clone()}
                oninput={oninput}
            />
            <div class="feedback-submit">
                <button onclick={onclick} class="btn btn-primary">{ "Send Feedback" }</button>
            </div>
            if *sent {
                <p class="form-message" role="status">
                    { "Thanks for helping us improve! Your feedback shapes our AI." }
                </p>
            }
        </div>
    }
}
