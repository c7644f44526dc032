//! Periodic drop timer over simulated milliseconds.
//!
//! The engine never reads a clock. Callers feed elapsed time through
//! [`DropTimer::advance`], which reports how many whole periods passed.
//! A cancelled timer ignores elapsed time entirely.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    accumulated_ms: u32,
    armed: bool,
}

impl DropTimer {
    /// Create a disarmed timer. A zero interval is clamped to 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            armed: false,
        }
    }

    /// Arm the timer with a fresh period.
    ///
    /// Starting an armed timer is a no-op, so there is never more than one schedule.
    pub fn start(&mut self) {
        if self.armed {
            return;
        }
        self.armed = true;
        self.accumulated_ms = 0;
    }

    /// Disarm the timer and drop any partial period.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.accumulated_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next period.
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Advance by `elapsed_ms` and return how many periods completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.interval_ms;
        total / self.interval_ms
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new(crate::types::DROP_INTERVAL_MS)
    }
}
