//! Cooperative countdown clock
//!
//! The host environment owns the tick cadence (one call per second from a
//! browser interval or a test loop); this model only tracks the remaining
//! time and guarantees the expiry transition fires exactly once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownStatus {
    Running,
    Cancelled,
    Expired,
}

/// Result of advancing the countdown by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the seconds remaining after the tick.
    Running(u32),
    /// The countdown just reached zero. Emitted at most once per countdown.
    Expired,
}

/// Decrementing one-second clock bound to a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    status: CountdownStatus,
}

impl Countdown {
    #[must_use]
    pub const fn new(duration_secs: u32) -> Self {
        Self {
            remaining: duration_secs,
            status: CountdownStatus::Running,
        }
    }

    /// Advance by one second. Returns `None` once cancelled or expired, so a
    /// stale host interval firing after teardown cannot re-trigger anything.
    pub const fn tick(&mut self) -> Option<Tick> {
        if !matches!(self.status, CountdownStatus::Running) {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status = CountdownStatus::Expired;
            Some(Tick::Expired)
        } else {
            Some(Tick::Running(self.remaining))
        }
    }

    /// Stop the countdown without expiring it. No further ticks are issued.
    pub const fn cancel(&mut self) {
        if matches!(self.status, CountdownStatus::Running) {
            self.status = CountdownStatus::Cancelled;
        }
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.status, CountdownStatus::Running)
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self.status, CountdownStatus::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry_exactly_once() {
        let mut timer = Countdown::new(3);
        assert_eq!(timer.tick(), Some(Tick::Running(2)));
        assert_eq!(timer.tick(), Some(Tick::Running(1)));
        assert_eq!(timer.tick(), Some(Tick::Expired));
        assert_eq!(timer.tick(), None);
        assert!(timer.is_expired());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let mut timer = Countdown::new(0);
        assert_eq!(timer.tick(), Some(Tick::Expired));
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn cancelled_timer_emits_no_further_ticks() {
        let mut timer = Countdown::new(10);
        assert_eq!(timer.tick(), Some(Tick::Running(9)));
        timer.cancel();
        assert_eq!(timer.tick(), None);
        assert!(!timer.is_running());
        assert!(!timer.is_expired());
        assert_eq!(timer.remaining_secs(), 9);
    }

    #[test]
    fn remaining_sequence_is_monotonically_non_increasing() {
        let mut timer = Countdown::new(45);
        let mut last = timer.remaining_secs();
        while timer.tick().is_some() {
            assert!(timer.remaining_secs() <= last);
            last = timer.remaining_secs();
        }
        assert_eq!(last, 0);
    }
}
