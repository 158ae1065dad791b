//! Supabase REST collaborators: the waitlist table and the game
//! interaction log. Both are best-effort; failures degrade to outcomes or
//! silence, never to panics.
use gloo_net::http::Request;
use mvpm_game::config::AppConfig;
use mvpm_game::waitlist::{Signup, SignupRequest, WaitlistError, map_backend_error};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::analytics::now_iso;

#[derive(Debug, Deserialize)]
struct BackendError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Insert-only client for the public waitlist and interaction tables.
#[derive(Clone, PartialEq, Eq)]
pub struct SupabaseClient {
    rest_url: Option<String>,
    anon_key: Option<String>,
}

impl SupabaseClient {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        if config.features.enable_supabase && config.supabase.is_configured() {
            Self {
                rest_url: config.supabase.url.as_ref().map(|url| {
                    format!("{}/rest/v1", url.trim_end_matches('/'))
                }),
                anon_key: config.supabase.anon_key.clone(),
            }
        } else {
            // Missing credentials degrade the collaborator to a no-op.
            Self {
                rest_url: None,
                anon_key: None,
            }
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.rest_url.is_some() && self.anon_key.is_some()
    }

    fn endpoint(&self, table: &str) -> Option<(String, String)> {
        let url = self.rest_url.as_ref()?;
        let key = self.anon_key.as_ref()?;
        Some((format!("{url}/{table}"), key.clone()))
    }

    /// Add an email to the waitlist. A duplicate signup reports success.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` when unconfigured and `Backend` for any other
    /// insert failure.
    pub async fn add_to_waitlist(&self, request: &SignupRequest) -> Result<Signup, WaitlistError> {
        let Some((url, key)) = self.endpoint("waitlist") else {
            return Err(WaitlistError::Unavailable);
        };
        let body = json!([{
            "email": request.email,
            "source": request.source,
            "created_at": now_iso(),
            "metadata": request.metadata,
        }]);

        let response = Request::post(&url)
            .header("apikey", &key)
            .header("Authorization", &format!("Bearer {key}"))
            .header("Prefer", "return=minimal")
            .json(&body)
            .map_err(|err| WaitlistError::Backend(err.to_string()))?
            .send()
            .await
            .map_err(|err| WaitlistError::Backend(err.to_string()))?;

        if response.ok() {
            return Ok(Signup::Added);
        }
        let error: BackendError = response
            .json()
            .await
            .unwrap_or_else(|_| BackendError {
                code: String::new(),
                message: String::from("unreadable error body"),
            });
        map_backend_error(&error.code, &error.message)
    }

    /// Log a game interaction row. Fire-and-forget: errors are logged and
    /// dropped.
    pub async fn track_game_interaction(
        &self,
        game_id: &str,
        action: &str,
        mut metadata: Map<String, Value>,
    ) {
        let Some((url, key)) = self.endpoint("game_interactions") else {
            return;
        };
        metadata.insert(String::from("timestamp"), json!(now_iso()));
        let body = json!([{
            "game_id": game_id,
            "action": action,
            "metadata": metadata,
            "created_at": now_iso(),
        }]);

        let request = Request::post(&url)
            .header("apikey", &key)
            .header("Authorization", &format!("Bearer {key}"))
            .header("Prefer", "return=minimal")
            .json(&body);
        match request {
            Ok(request) => {
                if let Err(err) = request.send().await {
                    log::debug!("Failed to track game interaction: {err}");
                }
            }
            Err(err) => log::debug!("Game tracking error: {err}"),
        }
    }
}
