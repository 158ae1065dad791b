//! Service construction and the application context
pub mod analytics;
pub mod config;
pub mod content;
pub mod flags;
pub mod scoring;
pub mod waitlist;

use mvpm_game::{Analytics, AppServices, FlagResolver};
use std::rc::Rc;

use self::waitlist::SupabaseClient;

/// Everything the pages need, provided once from the application root.
#[derive(Clone, PartialEq)]
pub struct WebServices {
    pub app: AppServices,
    pub supabase: Rc<SupabaseClient>,
}

impl WebServices {
    /// Inert bundle for contexts without a provider (tests, detached
    /// renders).
    #[must_use]
    pub fn inert() -> Self {
        let app = AppServices::inert();
        let supabase = Rc::new(SupabaseClient::from_config(app.config()));
        Self { app, supabase }
    }
}

/// Assemble the service bundle from the baked-in configuration: analytics
/// sinks, the flag resolver with its remote provider, and the waitlist
/// client.
#[must_use]
pub fn build_services() -> WebServices {
    let app_config = config::app_config();

    let mut analytics = Analytics::new(
        app_config.features.enable_analytics,
        app_config.features.enable_debug,
    );
    if app_config.analytics.ga_measurement_id.is_some() {
        analytics.register(Rc::new(analytics::GaSink));
    }
    if app_config.analytics.posthog_api_key.is_some() {
        analytics.register(Rc::new(analytics::PosthogSink));
    }
    if app_config.features.enable_debug {
        analytics.register(Rc::new(analytics::ConsoleSink));
    }
    analytics.set_clock(Rc::new(analytics::now_iso));
    if app_config.features.enable_debug {
        log::info!("Analytics initialized: {:?}", analytics.sink_names());
    }

    let mut resolver = FlagResolver::new(&app_config, Some(Rc::new(flags::PosthogFlags)));
    resolver.set_device_opt_out(flags::device_opt_out());

    let supabase = Rc::new(SupabaseClient::from_config(&app_config));
    let app = AppServices::new(app_config, analytics, resolver);
    WebServices { app, supabase }
}

/// Session seed drawn from the browser clock and RNG.
#[must_use]
pub fn session_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    millis ^ (jitter << 20)
}
