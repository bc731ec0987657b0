use std::thread;
use std::time::{Duration, Instant};

/// Milliseconds since some fixed origin, and a way to wait for one.
pub trait Clock {
    fn now_ms(&self) -> u64;

    /// Returns straight away when `deadline_ms` has already passed.
    fn sleep_until(&mut self, deadline_ms: u64);
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_until(&mut self, deadline_ms: u64) {
        let now = self.now_ms();
        if deadline_ms > now {
            thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_moves_forward() {
        let mut clock = SystemClock::new();
        let start = clock.now_ms();
        clock.sleep_until(start + 5);
        assert!(clock.now_ms() >= start + 5);
        // a deadline in the past is a no-op
        clock.sleep_until(0);
    }
}
