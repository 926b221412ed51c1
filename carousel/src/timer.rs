//! Clock-driven timers. The engine never reads a clock itself: the adapter passes `now_ms` to
//! `Carousel::tick`, and timers armed without a timestamp start counting at the first tick.

/// A recurring timer (autoplay).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Interval {
    period_ms: u64,
    anchor_ms: Option<u64>,
}

impl Interval {
    pub(crate) fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            anchor_ms: None,
        }
    }

    pub(crate) fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Returns `true` once per elapsed period.
    pub(crate) fn poll(&mut self, now_ms: u64) -> bool {
        let Some(anchor) = self.anchor_ms else {
            self.anchor_ms = Some(now_ms);
            return false;
        };
        if now_ms.saturating_sub(anchor) >= self.period_ms {
            self.anchor_ms = Some(now_ms);
            return true;
        }
        false
    }
}

/// A one-shot timer (tilt revert).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Timeout {
    delay_ms: u64,
    started_ms: Option<u64>,
}

impl Timeout {
    pub(crate) fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            started_ms: None,
        }
    }

    /// Returns `true` once the delay has elapsed.
    pub(crate) fn is_expired(&mut self, now_ms: u64) -> bool {
        let started = *self.started_ms.get_or_insert(now_ms);
        now_ms.saturating_sub(started) >= self.delay_ms
    }
}
