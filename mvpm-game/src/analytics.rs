//! Analytics event model and dispatcher
//!
//! Events are fire-and-forget: no acknowledgement, no retry. The dispatcher
//! is an explicitly constructed service handed to consumers; sinks register
//! at startup and every `track` call fans out to all of them.
use serde_json::{Map, Value, json};
use std::rc::Rc;

use crate::catalog::GameId;

/// One analytics event bound for zero or more sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: Map<String, Value>,
    /// ISO-8601 stamp supplied by the host clock, when one is installed.
    pub timestamp: Option<String>,
}

/// Delivery target (GA4, PostHog, a console echo, ...). Implementations
/// must swallow their own failures; `track` has no error channel.
pub trait AnalyticsSink {
    fn name(&self) -> &'static str;
    fn track(&self, event: &AnalyticsEvent);
}

/// Fan-out dispatcher. Cheap to clone; sinks and the clock are shared.
#[derive(Clone, Default)]
pub struct Analytics {
    enabled: bool,
    debug: bool,
    sinks: Vec<Rc<dyn AnalyticsSink>>,
    clock: Option<Rc<dyn Fn() -> String>>,
}

impl Analytics {
    #[must_use]
    pub fn new(enabled: bool, debug: bool) -> Self {
        Self {
            enabled,
            debug,
            sinks: Vec::new(),
            clock: None,
        }
    }

    /// Dispatcher that drops every event (analytics disabled or
    /// unconfigured).
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Rc<dyn AnalyticsSink>) {
        self.sinks.push(sink);
    }

    /// Install the host clock used to stamp events.
    pub fn set_clock(&mut self, clock: Rc<dyn Fn() -> String>) {
        self.clock = Some(clock);
    }

    #[must_use]
    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Dispatch an event to every registered sink.
    pub fn track(&self, name: &str, properties: Map<String, Value>) {
        if !self.enabled {
            return;
        }
        let event = AnalyticsEvent {
            name: name.to_string(),
            properties,
            timestamp: self.clock.as_ref().map(|clock| clock()),
        };
        if self.debug {
            log::debug!("analytics event: {} {:?}", event.name, event.properties);
        }
        for sink in &self.sinks {
            sink.track(&event);
        }
    }

    pub fn page_view(&self, path: &str, title: &str) {
        self.track(
            "page_view",
            props(&[("page_path", json!(path)), ("page_title", json!(title))]),
        );
    }

    pub fn game_started(&self, game: GameId) {
        self.track("game_started", props(&[("game_name", json!(game.as_str()))]));
    }

    pub fn game_completed(&self, game: GameId, score: f32, time_spent: u32) {
        self.track(
            "game_completed",
            props(&[
                ("game_name", json!(game.as_str())),
                ("score", json!(score)),
                ("time_spent", json!(time_spent)),
            ]),
        );
    }

    pub fn game_skipped(&self, game: GameId) {
        self.track("game_skipped", props(&[("game_name", json!(game.as_str()))]));
    }

    pub fn game_timeout(&self, game: GameId, scenario_id: &str) {
        self.track(
            "game_timeout",
            props(&[
                ("game_name", json!(game.as_str())),
                ("scenario", json!(scenario_id)),
            ]),
        );
    }

    pub fn score_shared(&self, game: GameId, platform: &str, score: f32) {
        self.track(
            "score_shared",
            props(&[
                ("game_name", json!(game.as_str())),
                ("platform", json!(platform)),
                ("score", json!(score)),
            ]),
        );
    }

    pub fn user_feedback_submitted(&self, game: GameId, feedback: &str) {
        self.track(
            "user_feedback_submitted",
            props(&[
                ("game_name", json!(game.as_str())),
                ("feedback", json!(feedback)),
            ]),
        );
    }

    pub fn form_submission(&self, form_type: &str, success: bool, error: Option<&str>) {
        self.track(
            "form_submission",
            props(&[
                ("form_type", json!(form_type)),
                ("success", json!(success)),
                ("error", json!(error)),
            ]),
        );
    }

    pub fn cta_click(&self, text: &str, location: &str) {
        self.track(
            "cta_click",
            props(&[("cta_text", json!(text)), ("cta_location", json!(location))]),
        );
    }

    pub fn feature_flag_evaluated(&self, key: &str, value: bool) {
        self.track(
            "feature_flag_evaluated",
            props(&[("flag_key", json!(key)), ("flag_value", json!(value))]),
        );
    }
}

fn props(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemorySink {
        events: RefCell<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsSink for MemorySink {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn track(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn events_fan_out_to_every_sink() {
        let first = Rc::new(MemorySink::default());
        let second = Rc::new(MemorySink::default());
        let mut analytics = Analytics::new(true, false);
        analytics.register(first.clone());
        analytics.register(second.clone());

        analytics.game_started(GameId::ChartIn10);

        for sink in [&first, &second] {
            let events = sink.events.borrow();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].name, "game_started");
            assert_eq!(events[0].properties["game_name"], json!("chart_in_10"));
        }
    }

    #[test]
    fn disabled_dispatcher_drops_everything() {
        let sink = Rc::new(MemorySink::default());
        let mut analytics = Analytics::disabled();
        analytics.register(sink.clone());
        analytics.track("anything", Map::new());
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn installed_clock_stamps_events() {
        let sink = Rc::new(MemorySink::default());
        let mut analytics = Analytics::new(true, false);
        analytics.register(sink.clone());
        analytics.set_clock(Rc::new(|| String::from("2025-01-01T00:00:00Z")));

        analytics.cta_click("Join Waitlist", "hero");

        let events = sink.events.borrow();
        assert_eq!(
            events[0].timestamp.as_deref(),
            Some("2025-01-01T00:00:00Z")
        );
    }

    #[test]
    fn helper_events_carry_expected_properties() {
        let sink = Rc::new(MemorySink::default());
        let mut analytics = Analytics::new(true, false);
        analytics.register(sink.clone());

        analytics.game_completed(GameId::SprintSimulator, 82.0, 60);
        analytics.form_submission("waitlist", false, Some("Service not available"));

        let events = sink.events.borrow();
        assert_eq!(events[0].properties["score"], json!(82.0));
        assert_eq!(events[1].properties["success"], json!(false));
        assert_eq!(
            events[1].properties["error"],
            json!("Service not available")
        );
    }
}
