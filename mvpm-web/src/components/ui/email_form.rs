use mvpm_game::waitlist::{SOURCE_LANDING_PAGE, SignupRequest, WaitlistError};
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_services;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::Static(SOURCE_LANDING_PAGE))]
    pub source: AttrValue,
}

/// Client-side shape check before the store-side validation runs.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$")
        .map(|re| re.is_match(value.trim()))
        .unwrap_or(false)
}

/// Waitlist signup form. The insert is best-effort; every path lands on a
/// user-visible message rather than an error state.
#[function_component(EmailForm)]
pub fn email_form(p: &Props) -> Html {
    let services = use_services();
    let email = use_state(String::new);
    let message = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                email.set(input.value());
            }
        })
    };

    let onsubmit = {
        let services = services.clone();
        let email = email.clone();
        let message = message.clone();
        let busy = busy.clone();
        let source = p.source.to_string();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            if !is_plausible_email(&email) {
                message.set(Some(WaitlistError::InvalidEmail.to_string()));
                return;
            }
            let mut metadata = serde_json::Map::new();
            metadata.insert(String::from("source"), json!(source.clone()));
            let request = match SignupRequest::new(&email, &source, metadata) {
                Ok(request) => request,
                Err(err) => {
                    message.set(Some(err.to_string()));
                    return;
                }
            };

            busy.set(true);
            let services = services.clone();
            let message = message.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let result = services.supabase.add_to_waitlist(&request).await;
                let analytics = services.app.analytics();
                match result {
                    Ok(signup) => {
                        analytics.form_submission("waitlist", true, None);
                        message.set(Some(signup.message().to_string()));
                    }
                    Err(WaitlistError::Unavailable) => {
                        analytics.form_submission(
                            "waitlist",
                            false,
                            Some(WaitlistError::Unavailable.to_string().as_str()),
                        );
                        message.set(Some(WaitlistError::Unavailable.to_string()));
                    }
                    Err(err) => {
                        log::error!("Waitlist signup error: {err}");
                        analytics.form_submission("waitlist", false, Some("insert_failed"));
                        message.set(Some(String::from(
                            "Something went wrong. Please try again later.",
                        )));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <form class="email-form" onsubmit={onsubmit}>
            <label class="sr-only" for="waitlist-email">{ "Email address" }</label>
            <input
                id="waitlist-email"
                type="email"
                placeholder="you@company.com"
                value={(*email).clone()}
                oninput={oninput}
                required={true}
            />
            <button type="submit" class="btn btn-primary" disabled={*busy}>
                { if *busy { "Joining..." } else { "Join Waitlist" } }
            </button>
            if let Some(text) = (*message).clone() {
                <p class="form-message" role="status">{ text }</p>
            }
        </form>
    }
}
