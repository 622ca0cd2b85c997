//! Inactivity handling as a state machine.
//!
//! Active --(idle timeout)--> IdleWarned --(goodbye delay)--> Closed. Any activity in Active or
//! IdleWarned re-arms the idle timeout; Closed is terminal. Each poll fires at most one transition,
//! so a long silence produces exactly one warning and then exactly one goodbye.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleState {
    Active,
    IdleWarned,
    Closed,
}

/// Transition fired by [`IdleMonitor::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEvent {
    /// Send the "are you still there" message.
    Warn,
    /// Send the goodbye message; the session is now closed.
    Goodbye,
}

#[derive(Debug, Clone)]
pub struct IdleMonitor {
    idle_timeout: Duration,
    goodbye_delay: Duration,
    state: IdleState,
    armed_at: DateTime<Utc>,
}

impl IdleMonitor {
    pub fn new(idle_timeout: Duration, goodbye_delay: Duration, now: DateTime<Utc>) -> Self {
        Self {
            idle_timeout,
            goodbye_delay,
            state: IdleState::Active,
            armed_at: now,
        }
    }

    pub fn state(&self) -> IdleState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == IdleState::Closed
    }

    /// Re-arms the idle timeout. No effect once closed.
    pub fn record_activity(&mut self, now: DateTime<Utc>) {
        if self.state == IdleState::Closed {
            return;
        }
        self.state = IdleState::Active;
        self.armed_at = now;
    }

    /// When the next transition is due; `None` once closed.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        let window = match self.state {
            IdleState::Active => self.idle_timeout,
            IdleState::IdleWarned => self.goodbye_delay,
            IdleState::Closed => return None,
        };
        chrono::Duration::from_std(window)
            .ok()
            .and_then(|w| self.armed_at.checked_add_signed(w))
    }

    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<IdleEvent> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        match self.state {
            IdleState::Active => {
                self.state = IdleState::IdleWarned;
                self.armed_at = now;
                Some(IdleEvent::Warn)
            }
            IdleState::IdleWarned => {
                self.state = IdleState::Closed;
                Some(IdleEvent::Goodbye)
            }
            IdleState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn monitor(start: DateTime<Utc>) -> IdleMonitor {
        IdleMonitor::new(Duration::from_secs(300), Duration::from_secs(60), start)
    }

    #[test]
    fn test_warn_then_goodbye() {
        let t0 = Utc::now();
        let mut m = monitor(t0);
        assert_eq!(m.deadline(), Some(t0 + ChronoDuration::seconds(300)));
        assert_eq!(m.poll(t0 + ChronoDuration::seconds(299)), None);

        let t_warn = t0 + ChronoDuration::seconds(300);
        assert_eq!(m.poll(t_warn), Some(IdleEvent::Warn));
        assert_eq!(m.state(), IdleState::IdleWarned);
        assert_eq!(m.poll(t_warn), None);
        assert_eq!(m.deadline(), Some(t_warn + ChronoDuration::seconds(60)));

        assert_eq!(m.poll(t_warn + ChronoDuration::seconds(60)), Some(IdleEvent::Goodbye));
        assert!(m.is_closed());
        assert_eq!(m.deadline(), None);
        assert_eq!(m.poll(t_warn + ChronoDuration::hours(5)), None);
    }

    #[test]
    fn test_long_silence_fires_one_transition_per_poll() {
        let t0 = Utc::now();
        let mut m = monitor(t0);
        let late = t0 + ChronoDuration::hours(2);
        assert_eq!(m.poll(late), Some(IdleEvent::Warn));
        assert_eq!(m.poll(late), None);
    }

    #[test]
    fn test_activity_rearms_and_clears_warning() {
        let t0 = Utc::now();
        let mut m = monitor(t0);
        let t1 = t0 + ChronoDuration::seconds(300);
        assert_eq!(m.poll(t1), Some(IdleEvent::Warn));

        let t2 = t1 + ChronoDuration::seconds(30);
        m.record_activity(t2);
        assert_eq!(m.state(), IdleState::Active);
        assert_eq!(m.poll(t2 + ChronoDuration::seconds(60)), None);
        assert_eq!(m.deadline(), Some(t2 + ChronoDuration::seconds(300)));
    }

    #[test]
    fn test_activity_after_close_is_ignored() {
        let t0 = Utc::now();
        let mut m = monitor(t0);
        let t1 = t0 + ChronoDuration::seconds(300);
        m.poll(t1);
        m.poll(t1 + ChronoDuration::seconds(60));
        m.record_activity(t1 + ChronoDuration::seconds(61));
        assert!(m.is_closed());
    }
}
