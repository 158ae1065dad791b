//! Application configuration
//!
//! Resolved once at startup from a snapshot of environment-style overrides
//! (the web host captures its build-time variables into an [`EnvMap`]) and
//! handed to consumers by value. Missing credentials never fail startup;
//! they degrade the corresponding collaborator to a no-op.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::GameId;

/// String-keyed environment snapshot.
pub type EnvMap = BTreeMap<String, String>;

pub const ENV_SUPABASE_URL: &str = "MVPM_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "MVPM_SUPABASE_ANON_KEY";
pub const ENV_GA_MEASUREMENT_ID: &str = "MVPM_GA_MEASUREMENT_ID";
pub const ENV_POSTHOG_KEY: &str = "MVPM_POSTHOG_KEY";
pub const ENV_POSTHOG_HOST: &str = "MVPM_POSTHOG_HOST";
pub const ENV_APP_ENV: &str = "MVPM_APP_ENV";
pub const ENV_APP_NAME: &str = "MVPM_APP_NAME";
pub const ENV_APP_URL: &str = "MVPM_APP_URL";
pub const ENV_ENABLE_ANALYTICS: &str = "MVPM_ENABLE_ANALYTICS";
pub const ENV_ENABLE_SUPABASE: &str = "MVPM_ENABLE_SUPABASE";
pub const ENV_ENABLE_DEBUG: &str = "MVPM_ENABLE_DEBUG";
pub const ENV_ANALYTICS_OPT_OUT: &str = "MVPM_ANALYTICS_OPT_OUT";
pub const ENV_ENABLE_REMOTE_FLAGS: &str = "MVPM_ENABLE_REMOTE_FLAGS";

const DEFAULT_POSTHOG_HOST: &str = "https://app.posthog.com";
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_APP_NAME: &str = "iterate";
const DEFAULT_APP_URL: &str = "http://localhost:3000";

pub const FLAG_UI_SOCIAL_SHARE: &str = "ui.socialShare";
pub const FLAG_UI_FAQ: &str = "ui.faq";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SupabaseCfg {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl SupabaseCfg {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsCfg {
    pub ga_measurement_id: Option<String>,
    pub posthog_api_key: Option<String>,
    pub posthog_host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub env: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCfg {
    pub enable_analytics: bool,
    pub enable_supabase: bool,
    pub enable_debug: bool,
    /// Developer opt-out for their own device.
    pub self_opt_out: bool,
    /// Remote flags default on; only the literal `"false"` disables them.
    pub enable_remote_flags: bool,
    pub flag_defaults: BTreeMap<String, bool>,
}

/// Typed view over the environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase: SupabaseCfg,
    pub analytics: AnalyticsCfg,
    pub app: AppInfo,
    pub features: FeatureCfg,
    overrides: EnvMap,
}

impl AppConfig {
    #[must_use]
    pub fn from_env(env: EnvMap) -> Self {
        let get = |key: &str| env.get(key).map(String::to_owned);
        let truthy = |key: &str| env.get(key).is_some_and(|value| value == "true");
        Self {
            supabase: SupabaseCfg {
                url: get(ENV_SUPABASE_URL),
                anon_key: get(ENV_SUPABASE_ANON_KEY),
            },
            analytics: AnalyticsCfg {
                ga_measurement_id: get(ENV_GA_MEASUREMENT_ID),
                posthog_api_key: get(ENV_POSTHOG_KEY),
                posthog_host: get(ENV_POSTHOG_HOST)
                    .unwrap_or_else(|| DEFAULT_POSTHOG_HOST.to_string()),
            },
            app: AppInfo {
                env: get(ENV_APP_ENV).unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
                name: get(ENV_APP_NAME).unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
                url: get(ENV_APP_URL).unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            },
            features: FeatureCfg {
                enable_analytics: truthy(ENV_ENABLE_ANALYTICS),
                enable_supabase: truthy(ENV_ENABLE_SUPABASE),
                enable_debug: truthy(ENV_ENABLE_DEBUG),
                self_opt_out: truthy(ENV_ANALYTICS_OPT_OUT),
                enable_remote_flags: env
                    .get(ENV_ENABLE_REMOTE_FLAGS)
                    .is_none_or(|value| value != "false"),
                flag_defaults: default_flags(),
            },
            overrides: env,
        }
    }

    /// Raw environment snapshot, consulted by the flag resolver for
    /// `MVPM_FLAG_*` overrides.
    #[must_use]
    pub const fn overrides(&self) -> &EnvMap {
        &self.overrides
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        self.app.env == "development"
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env(EnvMap::new())
    }
}

/// Safe shipping defaults: every game and UI section visible.
#[must_use]
pub fn default_flags() -> BTreeMap<String, bool> {
    let mut flags = BTreeMap::new();
    for game in GameId::ALL {
        flags.insert(game.flag_key().to_string(), true);
    }
    flags.insert(FLAG_UI_SOCIAL_SHARE.to_string(), true);
    flags.insert(FLAG_UI_FAQ.to_string(), true);
    flags
}
