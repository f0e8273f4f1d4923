//! Scroll settle detection for deck selection.
//!
//! Smooth scrolling has no reliable completion event, so the caller samples
//! the scroll position on an interval and feeds it here. The highlight runs
//! once the position has held still for the settle window, or when the
//! safety timeout expires first.

#[cfg(test)]
#[path = "scroll_settle_test.rs"]
mod scroll_settle_test;

/// Movement below this many pixels counts as still.
const POSITION_EPSILON: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleStatus {
    Pending,
    Settled,
    TimedOut,
}

impl SettleStatus {
    #[must_use]
    pub fn is_done(self) -> bool {
        self != Self::Pending
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSettle {
    started_ms: f64,
    settle_ms: f64,
    timeout_ms: f64,
    last_position: Option<f64>,
    last_change_ms: f64,
}

impl ScrollSettle {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(now_ms: f64, settle_ms: u64, timeout_ms: u64) -> Self {
        Self {
            started_ms: now_ms,
            settle_ms: settle_ms as f64,
            timeout_ms: timeout_ms as f64,
            last_position: None,
            last_change_ms: now_ms,
        }
    }

    /// Feed one position sample.
    pub fn observe(&mut self, now_ms: f64, position: f64) -> SettleStatus {
        if now_ms - self.started_ms >= self.timeout_ms {
            return SettleStatus::TimedOut;
        }
        let moved = self
            .last_position
            .is_none_or(|last| (last - position).abs() > POSITION_EPSILON);
        if moved {
            self.last_position = Some(position);
            self.last_change_ms = now_ms;
            return SettleStatus::Pending;
        }
        if now_ms - self.last_change_ms >= self.settle_ms {
            SettleStatus::Settled
        } else {
            SettleStatus::Pending
        }
    }
}
