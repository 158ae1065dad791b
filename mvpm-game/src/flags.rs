//! Feature-flag resolution
//!
//! Boolean toggles gating games and UI sections, resolved per lookup with a
//! fixed precedence: environment override, then the remote provider, then
//! the static default table, then the caller's fallback. Resolution never
//! fails; a provider error just falls through to the next tier.
use rand::Rng;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::analytics::Analytics;
use crate::config::AppConfig;

const ENV_FLAG_PREFIX: &str = "MVPM_FLAG_";
const REMOTE_FLAG_PREFIX: &str = "mvpm_";
const EVALUATION_SAMPLE_RATE: f64 = 0.1;

/// Remote flag provider. `None` means "no opinion" and resolution falls
/// through to the static defaults.
pub trait RemoteFlags {
    fn is_feature_enabled(&self, mangled_key: &str) -> Option<bool>;
}

/// Map a dotted flag key to its environment override name.
/// `games.chart_in_10` becomes `MVPM_FLAG_GAMES_CHART_IN_10`.
#[must_use]
pub fn env_override_key(key: &str) -> String {
    format!("{ENV_FLAG_PREFIX}{}", key.replace('.', "_").to_uppercase())
}

/// Map a dotted flag key to the remote provider's key.
/// `ui.socialShare` becomes `mvpm_ui_socialshare`.
#[must_use]
pub fn remote_key(key: &str) -> String {
    format!("{REMOTE_FLAG_PREFIX}{}", key.replace('.', "_").to_lowercase())
}

/// Precedence-ordered flag resolver. Cheap to clone; the remote handle is
/// shared.
#[derive(Clone)]
pub struct FlagResolver {
    overrides: BTreeMap<String, String>,
    defaults: BTreeMap<String, bool>,
    remote: Option<Rc<dyn RemoteFlags>>,
    remote_enabled: bool,
    opted_out: bool,
}

impl FlagResolver {
    #[must_use]
    pub fn new(config: &AppConfig, remote: Option<Rc<dyn RemoteFlags>>) -> Self {
        Self {
            overrides: config.overrides().clone(),
            defaults: config.features.flag_defaults.clone(),
            remote,
            remote_enabled: config.features.enable_remote_flags,
            opted_out: config.features.self_opt_out,
        }
    }

    /// Resolver with no remote provider and no overrides; everything comes
    /// from the defaults table (useful for tests).
    #[must_use]
    pub fn from_defaults(defaults: BTreeMap<String, bool>) -> Self {
        Self {
            overrides: BTreeMap::new(),
            defaults,
            remote: None,
            remote_enabled: true,
            opted_out: false,
        }
    }

    /// Mark this device as opted out of the remote provider (the original
    /// honored a local-storage kill switch alongside the env opt-out).
    pub fn set_device_opt_out(&mut self, opted_out: bool) {
        self.opted_out = self.opted_out || opted_out;
    }

    /// Resolve `key` with precedence env > remote > defaults > fallback.
    #[must_use]
    pub fn resolve(&self, key: &str, fallback: Option<bool>) -> bool {
        match self.overrides.get(&env_override_key(key)).map(String::as_str) {
            Some("true") => return true,
            Some("false") => return false,
            _ => {}
        }

        if self.remote_enabled && !self.opted_out
            && let Some(remote) = self.remote.as_ref()
            && let Some(value) = remote.is_feature_enabled(&remote_key(key))
        {
            return value;
        }

        if let Some(value) = self.defaults.get(key) {
            return *value;
        }

        fallback.unwrap_or(false)
    }

    /// Resolve and report the evaluation to analytics, sampled to roughly
    /// one in ten lookups.
    #[must_use]
    pub fn resolve_tracked<R: Rng>(
        &self,
        key: &str,
        fallback: Option<bool>,
        analytics: &Analytics,
        rng: &mut R,
    ) -> bool {
        let value = self.resolve(key, fallback);
        if rng.gen_bool(EVALUATION_SAMPLE_RATE) {
            analytics.feature_flag_evaluated(key, value);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvMap;
    use std::cell::Cell;

    struct FixedRemote(Option<bool>);

    impl RemoteFlags for FixedRemote {
        fn is_feature_enabled(&self, _mangled_key: &str) -> Option<bool> {
            self.0
        }
    }

    struct RecordingRemote {
        asked: Cell<bool>,
    }

    impl RemoteFlags for RecordingRemote {
        fn is_feature_enabled(&self, _mangled_key: &str) -> Option<bool> {
            self.asked.set(true);
            Some(true)
        }
    }

    fn config_with(overrides: &[(&str, &str)]) -> AppConfig {
        let mut env = EnvMap::new();
        for (key, value) in overrides {
            env.insert((*key).to_string(), (*value).to_string());
        }
        AppConfig::from_env(env)
    }

    #[test]
    fn key_mangling_matches_both_providers() {
        assert_eq!(
            env_override_key("games.stakeholder_sandwich"),
            "MVPM_FLAG_GAMES_STAKEHOLDER_SANDWICH"
        );
        assert_eq!(remote_key("ui.socialShare"), "mvpm_ui_socialshare");
        assert_eq!(remote_key("games.chart_in_10"), "mvpm_games_chart_in_10");
    }

    #[test]
    fn env_override_beats_remote_provider() {
        let config = config_with(&[("MVPM_FLAG_UI_SOCIALSHARE", "false")]);
        let resolver = FlagResolver::new(&config, Some(Rc::new(FixedRemote(Some(true)))));
        assert!(!resolver.resolve("ui.socialShare", None));
    }

    #[test]
    fn remote_opinion_beats_defaults() {
        let config = config_with(&[]);
        let resolver = FlagResolver::new(&config, Some(Rc::new(FixedRemote(Some(false)))));
        // Defaults say true for every game; the remote kill switch wins.
        assert!(!resolver.resolve("games.chart_in_10", None));
    }

    #[test]
    fn remote_no_opinion_falls_through_to_defaults() {
        let config = config_with(&[]);
        let resolver = FlagResolver::new(&config, Some(Rc::new(FixedRemote(None))));
        assert!(resolver.resolve("games.chart_in_10", None));
    }

    #[test]
    fn unknown_key_uses_fallback_then_false() {
        let resolver = FlagResolver::from_defaults(BTreeMap::new());
        assert!(resolver.resolve("labs.shiny", Some(true)));
        assert!(!resolver.resolve("labs.shiny", None));
    }

    #[test]
    fn opt_out_skips_the_remote_provider() {
        let config = config_with(&[("MVPM_ANALYTICS_OPT_OUT", "true")]);
        let remote = Rc::new(RecordingRemote {
            asked: Cell::new(false),
        });
        let resolver = FlagResolver::new(&config, Some(remote.clone()));
        assert!(resolver.resolve("games.chart_in_10", None));
        assert!(!remote.asked.get());
    }

    #[test]
    fn disabled_remote_flags_skip_the_provider() {
        let config = config_with(&[("MVPM_ENABLE_REMOTE_FLAGS", "false")]);
        let remote = Rc::new(RecordingRemote {
            asked: Cell::new(false),
        });
        let resolver = FlagResolver::new(&config, Some(remote.clone()));
        assert!(resolver.resolve("games.chart_in_10", None));
        assert!(!remote.asked.get());
    }

    #[test]
    fn tracked_resolution_samples_evaluations() {
        use crate::analytics::{AnalyticsEvent, AnalyticsSink};
        use rand::SeedableRng;
        use rand_chacha::ChaCha20Rng;
        use std::cell::RefCell;

        #[derive(Default)]
        struct CountingSink {
            events: RefCell<Vec<AnalyticsEvent>>,
        }

        impl AnalyticsSink for CountingSink {
            fn name(&self) -> &'static str {
                "counting"
            }

            fn track(&self, event: &AnalyticsEvent) {
                self.events.borrow_mut().push(event.clone());
            }
        }

        let sink = Rc::new(CountingSink::default());
        let mut analytics = Analytics::new(true, false);
        analytics.register(sink.clone());

        let resolver = FlagResolver::new(&config_with(&[]), None);
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut trues = 0_u32;
        for _ in 0..1_000 {
            if resolver.resolve_tracked("games.chart_in_10", None, &analytics, &mut rng) {
                trues += 1;
            }
        }
        assert_eq!(trues, 1_000);

        // Roughly one in ten lookups reports; the value rides along.
        let events = sink.events.borrow();
        assert!((50..200).contains(&events.len()), "sampled {}", events.len());
        assert!(events.iter().all(|event| event.name == "feature_flag_evaluated"));
    }

    #[test]
    fn malformed_env_override_is_ignored() {
        let config = config_with(&[("MVPM_FLAG_GAMES_CHART_IN_10", "yes")]);
        let resolver = FlagResolver::new(&config, None);
        // Not a literal true/false: fall through to the default table.
        assert!(resolver.resolve("games.chart_in_10", None));
    }
}
