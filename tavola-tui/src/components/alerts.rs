//! Transient alert slots
//!
//! Each form keeps one alert slot. Showing a new alert replaces whatever
//! was there; an alert disappears on its own five seconds after it was
//! shown. Two alerts of the same kind never stack.

use std::time::{Duration, Instant};

/// How long an alert stays visible
pub const ALERT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    shown_at: Instant,
}

/// Single-slot alert holder
#[derive(Debug, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
}

impl AlertSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an alert, replacing any existing one
    pub fn show(&mut self, message: impl Into<String>, kind: AlertKind, now: Instant) {
        self.current = Some(Alert {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Drop the alert once its lifetime has elapsed
    pub fn expire(&mut self, now: Instant) {
        if let Some(alert) = &self.current
            && now.duration_since(alert.shown_at) >= ALERT_TTL
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_twice_leaves_exactly_one_alert() {
        let t0 = Instant::now();
        let mut slot = AlertSlot::new();
        slot.show("first", AlertKind::Success, t0);
        slot.show("second", AlertKind::Error, t0);

        let alert = slot.current().unwrap();
        assert_eq!(alert.message, "second");
        assert_eq!(alert.kind, AlertKind::Error);
    }

    #[test]
    fn alert_expires_after_five_seconds() {
        let t0 = Instant::now();
        let mut slot = AlertSlot::new();
        slot.show("hello", AlertKind::Success, t0);

        slot.expire(t0 + Duration::from_millis(4_999));
        assert!(slot.current().is_some());

        slot.expire(t0 + Duration::from_secs(5));
        assert!(slot.current().is_none());
    }

    #[test]
    fn replacement_restarts_the_clock() {
        let t0 = Instant::now();
        let mut slot = AlertSlot::new();
        slot.show("first", AlertKind::Success, t0);
        slot.show("second", AlertKind::Success, t0 + Duration::from_secs(3));

        // 5s after the first show, but only 2s after the replacement
        slot.expire(t0 + Duration::from_secs(5));
        assert_eq!(slot.current().unwrap().message, "second");

        slot.expire(t0 + Duration::from_secs(8));
        assert!(slot.current().is_none());
    }
}
