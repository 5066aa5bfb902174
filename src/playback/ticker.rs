//! Periodic tick sources
//!
//! The controller never sleeps or reads the clock itself. It arms and
//! disarms a [`TickSource`]; whoever owns the event loop asks the source
//! whether a tick is due and then calls
//! [`PlaybackController::tick`](super::PlaybackController::tick).

use std::time::{Duration, Instant};

/// Something that can deliver ticks at a fixed period
pub trait TickSource {
    /// Start delivering ticks every `period`. Re-arming replaces the
    /// previous period; there is never more than one active schedule.
    fn arm(&mut self, period: Duration);

    /// Stop delivering ticks
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Wall-clock tick source polled from the UI event loop
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Option<Duration>,
    last_fire: Instant,
}

impl IntervalTimer {
    pub fn new() -> Self {
        IntervalTimer {
            period: None,
            last_fire: Instant::now(),
        }
    }

    /// True (at most once per period) when a tick should be delivered
    pub fn due(&mut self) -> bool {
        match self.period {
            Some(period) if self.last_fire.elapsed() >= period => {
                self.last_fire = Instant::now();
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, if armed
    pub fn remaining(&self) -> Option<Duration> {
        self.period
            .map(|period| period.saturating_sub(self.last_fire.elapsed()))
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for IntervalTimer {
    fn arm(&mut self, period: Duration) {
        self.period = Some(period);
        self.last_fire = Instant::now();
    }

    fn disarm(&mut self) {
        self.period = None;
    }

    fn is_armed(&self) -> bool {
        self.period.is_some()
    }
}

/// Tick source driven by hand: used for headless playback and tests
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    period: Option<Duration>,
    arm_count: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `arm` has been called
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl TickSource for ManualTicker {
    fn arm(&mut self, period: Duration) {
        self.period = Some(period);
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.period = None;
    }

    fn is_armed(&self) -> bool {
        self.period.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_timer_idle_until_armed() {
        let mut timer = IntervalTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.due());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_interval_timer_fires_after_period() {
        let mut timer = IntervalTimer::new();
        timer.arm(Duration::ZERO);
        assert!(timer.is_armed());
        assert!(timer.due());

        timer.arm(Duration::from_secs(3600));
        assert!(!timer.due());

        timer.disarm();
        assert!(!timer.due());
    }

    #[test]
    fn test_manual_ticker_counts_arms() {
        let mut ticker = ManualTicker::new();
        ticker.arm(Duration::from_millis(5));
        ticker.disarm();
        ticker.arm(Duration::from_millis(7));
        assert_eq!(ticker.arm_count(), 2);
        assert_eq!(ticker.period(), Some(Duration::from_millis(7)));
    }
}
