use crate::shared::Level;

pub const DEBOUNCE_MS: u64 = 50;
pub const PRESS_COOLDOWN_MS: u64 = 200;

// Two separate timers: the debounce window decides whether a level is
// electrically real, the cooldown decides whether it's a new human press.
#[derive(Clone, Debug)]
pub struct Debouncer {
    debounce_ms: u64,
    cooldown_ms: u64,
    last_raw: Level,
    stable: Level,
    last_change_ms: u64,
    last_press_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(initial: Level) -> Self {
        Self::with_timing(initial, DEBOUNCE_MS, PRESS_COOLDOWN_MS)
    }

    pub fn with_timing(initial: Level, debounce_ms: u64, cooldown_ms: u64) -> Self {
        Self {
            debounce_ms,
            cooldown_ms,
            last_raw: initial,
            stable: initial,
            last_change_ms: 0,
            last_press_ms: None,
        }
    }

    pub fn stable(&self) -> Level {
        self.stable
    }

    /// Feed one raw sample. Returns true exactly when a press fires: a stable
    /// HIGH -> LOW transition at least `cooldown_ms` after the previous press.
    /// A transition swallowed by the cooldown is consumed, it never fires late.
    pub fn poll(&mut self, raw: Level, now_ms: u64) -> bool {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_ms = now_ms;
        }
        if now_ms.saturating_sub(self.last_change_ms) < self.debounce_ms || raw == self.stable {
            return false;
        }
        self.stable = raw;
        if raw != Level::Low {
            return false;
        }
        let cooled = self
            .last_press_ms
            .is_none_or(|t| now_ms.saturating_sub(t) >= self.cooldown_ms);
        if cooled {
            self.last_press_ms = Some(now_ms);
        }
        cooled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Level::{High, Low};

    // Samples every `step` ms; `level_at` gives the raw pin level at a time.
    fn presses(level_at: impl Fn(u64) -> Level, until: u64, step: u64) -> Vec<u64> {
        let mut button = Debouncer::new(High);
        (0..=until)
            .step_by(step as usize)
            .filter(|&t| button.poll(level_at(t), t))
            .collect()
    }

    #[test]
    fn clean_press_fires_once_after_debounce() {
        let fired = presses(|t| if (100..400).contains(&t) { Low } else { High }, 1000, 10);
        assert_eq!(fired, vec![150]);
    }

    #[test]
    fn fast_bounce_never_fires() {
        // toggles every 20ms, never steady for 50ms, then settles released
        let fired = presses(
            |t| if t >= 100 && t < 500 && (t / 20) % 2 == 0 { Low } else { High },
            1000,
            10,
        );
        assert!(fired.is_empty(), "{fired:?}");
    }

    #[test]
    fn bounce_then_hold_fires_once_settled() {
        let fired = presses(
            |t| match t {
                0..100 => High,
                100..200 => if (t / 20) % 2 == 0 { Low } else { High },
                200..600 => Low,
                _ => High,
            },
            1000,
            10,
        );
        assert_eq!(fired, vec![250]);
    }

    #[test]
    fn second_press_within_cooldown_is_dropped() {
        // press, release, press again with both fires < 200ms apart
        let fired = presses(
            |t| if (0..80).contains(&t) || (150..400).contains(&t) { Low } else { High },
            1000,
            10,
        );
        assert_eq!(fired, vec![50]);
    }

    #[test]
    fn presses_past_cooldown_both_fire() {
        let fired = presses(
            |t| if (0..100).contains(&t) || (300..400).contains(&t) { Low } else { High },
            1000,
            10,
        );
        assert_eq!(fired, vec![50, 350]);
    }

    #[test]
    fn holding_does_not_repeat() {
        let fired = presses(|t| if t >= 100 { Low } else { High }, 5000, 20);
        assert_eq!(fired, vec![160]);
    }

    #[test]
    fn starting_low_is_not_a_press() {
        let mut button = Debouncer::new(Low);
        assert!((0..500).step_by(20).all(|t| !button.poll(Low, t)));
        assert_eq!(button.stable(), Low);
    }
}
