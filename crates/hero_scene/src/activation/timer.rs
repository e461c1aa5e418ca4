//! Cancellable periodic countdown timer driven by a virtual clock

use std::time::Duration;

/// Repeating countdown that fires every `period` while running
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    remaining: Duration,
    running: bool,
}

impl PeriodicTimer {
    /// Shortest accepted period; a zero period would fire forever in one update
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Create a stopped timer
    pub fn new(period: Duration) -> Self {
        let period = period.max(Self::MIN_PERIOD);
        Self {
            period,
            remaining: period,
            running: false,
        }
    }

    /// Start counting a full period. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.remaining = self.period;
        true
    }

    /// Cancel the timer. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Whether the timer is counting down
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Configured period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next fire, `None` while stopped
    pub fn until_next_fire(&self) -> Option<Duration> {
        self.running.then_some(self.remaining)
    }

    /// Advance by `dt`, returning how many times the timer expired
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.running {
            return 0;
        }
        if dt < self.remaining {
            self.remaining -= dt;
            return 0;
        }

        let overshoot = (dt - self.remaining).as_nanos();
        let period = self.period.as_nanos();
        let leftover = u64::try_from(overshoot % period).unwrap_or(u64::MAX);
        self.remaining = self.period.saturating_sub(Duration::from_nanos(leftover));

        u64::try_from(overshoot / period).map_or(u64::MAX, |extra| extra.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_new_timer_is_stopped() {
        let mut timer = PeriodicTimer::new(ms(100));
        assert!(!timer.is_running());
        assert_eq!(timer.until_next_fire(), None);
        assert_eq!(timer.advance(ms(1000)), 0);
    }

    #[test]
    fn test_fires_on_period_boundary() {
        let mut timer = PeriodicTimer::new(ms(1500));
        timer.start();

        assert_eq!(timer.advance(ms(1499)), 0);
        assert_eq!(timer.until_next_fire(), Some(ms(1)));
        assert_eq!(timer.advance(ms(1)), 1);
        assert_eq!(timer.until_next_fire(), Some(ms(1500)));
    }

    #[test]
    fn test_long_advance_fires_once_per_period() {
        let mut timer = PeriodicTimer::new(ms(1500));
        timer.start();

        assert_eq!(timer.advance(ms(4600)), 3);
        assert_eq!(timer.until_next_fire(), Some(ms(1400)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = PeriodicTimer::new(ms(100));
        assert!(timer.start());
        timer.advance(ms(60));
        assert!(!timer.start());
        // Second start must not reset the countdown
        assert_eq!(timer.until_next_fire(), Some(ms(40)));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = PeriodicTimer::new(ms(100));
        timer.start();
        assert!(timer.stop());
        assert!(!timer.stop());
        assert_eq!(timer.advance(ms(500)), 0);
    }

    #[test]
    fn test_zero_period_is_raised() {
        let timer = PeriodicTimer::new(Duration::ZERO);
        assert_eq!(timer.period(), PeriodicTimer::MIN_PERIOD);
    }
}
