use std::time::Duration;

/// Fires once per elapsed interval, measured against a monotonic uptime.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    interval: Duration,
    last: Duration,
}

impl IntervalTimer {
    /// Start counting from `now`; the first fire is one interval later.
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last)
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.elapsed(now) >= self.interval
    }

    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }
}

/// Reports each new minute value once.
#[derive(Debug, Default)]
pub struct MinuteWatch {
    last: Option<u32>,
}

impl MinuteWatch {
    pub fn changed(&mut self, minute: u32) -> bool {
        if self.last == Some(minute) {
            return false;
        }
        self.last = Some(minute);
        true
    }
}
