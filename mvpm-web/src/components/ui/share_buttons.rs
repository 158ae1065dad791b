use mvpm_game::config::FLAG_UI_SOCIAL_SHARE;
use mvpm_game::{GameId, SharePlatform, share_message};
use yew::prelude::*;

use crate::hooks::use_services;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: GameId,
    pub score: f32,
    pub time_spent: u32,
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

fn share_url(platform: SharePlatform, text: &str, url: &str) -> String {
    let text: String = js_sys::encode_uri_component(text).into();
    let url: String = js_sys::encode_uri_component(url).into();
    match platform {
        SharePlatform::LinkedIn => format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={url}&text={text}"
        ),
        SharePlatform::Twitter => {
            format!("https://twitter.com/intent/tweet?text={text}&url={url}")
        }
        SharePlatform::Reddit => format!("https://reddit.com/submit?url={url}&title={text}"),
    }
}

/// Social share row shown on results screens, gated by the social-share
/// flag.
#[function_component(ShareButtons)]
pub fn share_buttons(p: &Props) -> Html {
    let services = use_services();
    if !services.app.flags().resolve(FLAG_UI_SOCIAL_SHARE, Some(true)) {
        return html! {};
    }

    let text = share_message(p.game, p.score, p.time_spent);
    let url = current_url();

    html! {
        <div class="social-share">
            <h3 class="social-title">{ "Share Your MVPM Moment" }</h3>
            <div class="social-buttons">
                { for SharePlatform::ALL.into_iter().map(|platform| {
                    let href = share_url(platform, &text, &url);
                    let onclick = {
                        let services = services.clone();
                        let game = p.game;
                        let score = p.score;
                        Callback::from(move |_| {
                            services.app.analytics().score_shared(game, platform.as_str(), score);
                        })
                    };
                    html! {
                        <a href={href}
                           class={classes!("social-btn", platform.as_str())}
                           target="_blank"
                           rel="noopener noreferrer"
                           {onclick}>
                            { platform.label() }
                        </a>
                    }
                }) }
            </div>
        </div>
    }
}
