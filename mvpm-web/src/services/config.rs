//! Build-time environment snapshot
//!
//! The deployment pipeline bakes `MVPM_*` variables into the bundle the
//! same way the marketing stack bakes its public env; `option_env!` lifts
//! them into the typed config at compile time.
use mvpm_game::config::{self, AppConfig, EnvMap};

macro_rules! capture {
    ($env:expr, $( $key:literal ),+ $(,)?) => {
        $(
            if let Some(value) = option_env!($key) {
                $env.insert($key.to_string(), value.to_string());
            }
        )+
    };
}

/// Snapshot every baked-in variable the config and flag layers consult.
#[must_use]
pub fn env_snapshot() -> EnvMap {
    let mut env = EnvMap::new();
    capture!(
        env,
        "MVPM_SUPABASE_URL",
        "MVPM_SUPABASE_ANON_KEY",
        "MVPM_GA_MEASUREMENT_ID",
        "MVPM_POSTHOG_KEY",
        "MVPM_POSTHOG_HOST",
        "MVPM_APP_ENV",
        "MVPM_APP_NAME",
        "MVPM_APP_URL",
        "MVPM_ENABLE_ANALYTICS",
        "MVPM_ENABLE_SUPABASE",
        "MVPM_ENABLE_DEBUG",
        "MVPM_ANALYTICS_OPT_OUT",
        "MVPM_ENABLE_REMOTE_FLAGS",
        // Per-flag overrides, one variable per shipped flag key.
        "MVPM_FLAG_GAMES_STAKEHOLDER_SANDWICH",
        "MVPM_FLAG_GAMES_SPRINT_SIMULATOR",
        "MVPM_FLAG_GAMES_ASSUMPTION_SNIPER",
        "MVPM_FLAG_GAMES_CHART_IN_10",
        "MVPM_FLAG_UI_SOCIALSHARE",
        "MVPM_FLAG_UI_FAQ",
    );
    env
}

/// Typed configuration for this build.
#[must_use]
pub fn app_config() -> AppConfig {
    let config = AppConfig::from_env(env_snapshot());
    if !config.supabase.is_configured() {
        log::warn!("Supabase configuration missing. Some features may not work.");
    }
    if config.features.enable_analytics && config.analytics.ga_measurement_id.is_none() {
        log::warn!("Google Analytics ID not configured");
    }
    if config.features.enable_analytics && config.analytics.posthog_api_key.is_none() {
        log::warn!("PostHog API key not configured");
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_builds_a_usable_config() {
        // Without baked-in vars the defaults must hold.
        let config = AppConfig::from_env(env_snapshot());
        assert_eq!(config.analytics.posthog_host, "https://app.posthog.com");
        let _ = config::default_flags();
    }
}
