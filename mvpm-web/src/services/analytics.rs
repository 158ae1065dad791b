//! Analytics sinks backed by the page-level provider scripts
//!
//! GA4 and PostHog load from `index.html`; the sinks look the globals up
//! per event and silently drop the event when a provider is absent or
//! throws. Nothing here may fail the caller.
use js_sys::{Function, Reflect};
use mvpm_game::analytics::{AnalyticsEvent, AnalyticsSink};
use wasm_bindgen::{JsCast, JsValue};

fn global_value(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn properties_js(event: &AnalyticsEvent) -> JsValue {
    let mut properties = event.properties.clone();
    if let Some(timestamp) = &event.timestamp {
        properties.insert(
            String::from("timestamp"),
            serde_json::Value::String(timestamp.clone()),
        );
    }
    serde_wasm_bindgen::to_value(&properties).unwrap_or(JsValue::UNDEFINED)
}

/// `window.gtag('event', name, properties)`
pub struct GaSink;

impl AnalyticsSink for GaSink {
    fn name(&self) -> &'static str {
        "ga4"
    }

    fn track(&self, event: &AnalyticsEvent) {
        let Some(gtag) = global_value("gtag") else {
            return;
        };
        let Ok(gtag) = gtag.dyn_into::<Function>() else {
            log::debug!("window.gtag is not callable");
            return;
        };
        if let Err(err) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.name),
            &properties_js(event),
        ) {
            log::debug!("gtag call failed: {err:?}");
        }
    }
}

/// `window.posthog.capture(name, properties)`
pub struct PosthogSink;

impl AnalyticsSink for PosthogSink {
    fn name(&self) -> &'static str {
        "posthog"
    }

    fn track(&self, event: &AnalyticsEvent) {
        let Some(posthog) = global_value("posthog") else {
            return;
        };
        let Ok(capture) = Reflect::get(&posthog, &JsValue::from_str("capture")) else {
            return;
        };
        let Ok(capture) = capture.dyn_into::<Function>() else {
            log::debug!("posthog.capture is not callable");
            return;
        };
        if let Err(err) = capture.call2(
            &posthog,
            &JsValue::from_str(&event.name),
            &properties_js(event),
        ) {
            log::debug!("posthog.capture failed: {err:?}");
        }
    }
}

/// Console echo used when debug mode is on.
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn track(&self, event: &AnalyticsEvent) {
        log::info!("Analytics event: {} {:?}", event.name, event.properties);
    }
}

/// ISO-8601 timestamp from the browser clock.
#[must_use]
pub fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}
