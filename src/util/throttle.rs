//! Leading-edge time-window throttle. Calls inside the window are dropped,
//! not queued.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

#[derive(Clone, Debug)]
pub struct Throttle {
    window_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let window_ms = window_ms as f64;
        Self { window_ms, last: None }
    }

    /// Record an attempt at `now_ms`; `true` when it may proceed.
    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}
