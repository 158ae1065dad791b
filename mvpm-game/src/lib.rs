//! MVPM Game Engine
//!
//! Platform-agnostic core for the MVPM ("iterate") skills games. This crate
//! provides the timed session state machine, per-game scoring, feature-flag
//! resolution, configuration, and the analytics/waitlist collaborator
//! interfaces without UI or platform-specific dependencies.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod flags;
pub mod scenario;
pub mod scoring;
pub mod session;
pub mod share;
pub mod timer;
pub mod waitlist;

// Re-export commonly used types
pub use analytics::{Analytics, AnalyticsEvent, AnalyticsSink};
pub use catalog::GameId;
pub use config::{AppConfig, EnvMap};
pub use flags::{FlagResolver, RemoteFlags};
pub use scenario::{
    AuditScenario, ChartFigures, ChartOption, ChartScenario, DailyEvent, EventOption,
    PromptScenario, Scenario, ScenarioPools, SprintBacklog, Story,
};
pub use scoring::{
    RemoteAnalysis, ScoreDetails, ScoreOutcome, ScoringError, ScoringStrategy, SlotAnalysis,
    SlotClass, SprintReport,
};
pub use scoring::sprint::{SPRINT_DAYS, SprintSim, TEAM_CAPACITY};
pub use session::{
    GamePhase, GameSession, SessionError, SessionInput, SubmitError, TickOutcome,
};
pub use share::{SharePlatform, share_message};
pub use timer::{Countdown, Tick};
pub use waitlist::{Signup, SignupRequest, WaitlistError};

use std::rc::Rc;

/// Root service bundle: configuration, analytics, and flags, constructed
/// once at application start and injected into consumers. Replaces the
/// module-level singletons the product grew out of.
#[derive(Clone)]
pub struct AppServices {
    config: Rc<AppConfig>,
    analytics: Rc<Analytics>,
    flags: Rc<FlagResolver>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: AppConfig, analytics: Analytics, flags: FlagResolver) -> Self {
        Self {
            config: Rc::new(config),
            analytics: Rc::new(analytics),
            flags: Rc::new(flags),
        }
    }

    /// Inert bundle: default config, no sinks, defaults-only flags.
    #[must_use]
    pub fn inert() -> Self {
        let config = AppConfig::default();
        let flags = FlagResolver::new(&config, None);
        Self::new(config, Analytics::disabled(), flags)
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    #[must_use]
    pub fn flags(&self) -> &FlagResolver {
        &self.flags
    }

    /// Whether a game is visible, defaulting open when nothing says
    /// otherwise.
    #[must_use]
    pub fn game_enabled(&self, game: GameId) -> bool {
        self.flags.resolve(game.flag_key(), Some(true))
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        // Context identity: the bundle is built once per application root.
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.analytics, &other.analytics)
            && Rc::ptr_eq(&self.flags, &other.flags)
    }
}
