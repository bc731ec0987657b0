pub const HOLD_REPEAT_MS: u64 = 1500;
pub const LOW_THRESHOLD: u16 = 250;
pub const HIGH_THRESHOLD: u16 = 950;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Negative, // left / down
    Positive, // right / up
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Negative => -1,
            Direction::Positive => 1,
        }
    }
}

/// Flick and hold-repeat detection for one joystick axis.
///
/// A new direction reports immediately. Holding it reports again every
/// `hold_repeat_ms`. Returning to the dead zone forgets the direction, so
/// pushing the same way again is a fresh flick rather than a repeat.
#[derive(Clone, Debug)]
pub struct AxisRepeater {
    low: u16,
    high: u16,
    hold_repeat_ms: u64,
    last_direction: Option<Direction>,
    last_report_ms: u64,
}

impl Default for AxisRepeater {
    fn default() -> Self {
        Self::new(LOW_THRESHOLD, HIGH_THRESHOLD, HOLD_REPEAT_MS)
    }
}

impl AxisRepeater {
    pub fn new(low: u16, high: u16, hold_repeat_ms: u64) -> Self {
        Self {
            low,
            high,
            hold_repeat_ms,
            last_direction: None,
            last_report_ms: 0,
        }
    }

    pub fn classify(&self, raw: u16) -> Option<Direction> {
        if raw > self.high {
            Some(Direction::Positive)
        } else if raw < self.low {
            Some(Direction::Negative)
        } else {
            None
        }
    }

    pub fn poll(&mut self, raw: u16, now_ms: u64) -> Option<Direction> {
        let Some(direction) = self.classify(raw) else {
            self.last_direction = None;
            return None;
        };
        let held_long_enough = now_ms.saturating_sub(self.last_report_ms) >= self.hold_repeat_ms;
        if self.last_direction != Some(direction) || held_long_enough {
            self.last_direction = Some(direction);
            self.last_report_ms = now_ms;
            return Some(direction);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{ANALOG_CENTER, ANALOG_MAX};

    fn reports(raw_at: impl Fn(u64) -> u16, until: u64, step: u64) -> Vec<(u64, Direction)> {
        let mut axis = AxisRepeater::default();
        (0..=until)
            .step_by(step as usize)
            .filter_map(|t| axis.poll(raw_at(t), t).map(|d| (t, d)))
            .collect()
    }

    #[test]
    fn thresholds_leave_a_dead_zone() {
        let axis = AxisRepeater::default();
        assert_eq!(axis.classify(0), Some(Direction::Negative));
        assert_eq!(axis.classify(249), Some(Direction::Negative));
        assert_eq!(axis.classify(250), None);
        assert_eq!(axis.classify(ANALOG_CENTER), None);
        assert_eq!(axis.classify(950), None);
        assert_eq!(axis.classify(951), Some(Direction::Positive));
        assert_eq!(axis.classify(ANALOG_MAX), Some(Direction::Positive));
    }

    #[test]
    fn neutral_reports_nothing() {
        assert!(reports(|_| ANALOG_CENTER, 10_000, 20).is_empty());
    }

    #[test]
    fn flick_reports_once() {
        let got = reports(|t| if (100..300).contains(&t) { ANALOG_MAX } else { ANALOG_CENTER }, 5000, 20);
        assert_eq!(got, vec![(100, Direction::Positive)]);
    }

    #[test]
    fn hold_repeats_exactly_at_interval() {
        let got = reports(|t| if t >= 100 { 0 } else { ANALOG_CENTER }, 3599, 1);
        assert_eq!(
            got,
            vec![
                (100, Direction::Negative),
                (1600, Direction::Negative),
                (3100, Direction::Negative),
            ]
        );
    }

    #[test]
    fn reversing_is_an_immediate_flick() {
        let got = reports(
            |t| match t {
                0..100 => ANALOG_CENTER,
                100..200 => ANALOG_MAX,
                _ => 0,
            },
            400,
            20,
        );
        assert_eq!(got, vec![(100, Direction::Positive), (200, Direction::Negative)]);
    }

    #[test]
    fn returning_to_neutral_resets_the_hold() {
        // right, neutral briefly, right again: two flicks, no wait for the repeat
        let got = reports(
            |t| if (100..200).contains(&t) || (240..400).contains(&t) { ANALOG_MAX } else { ANALOG_CENTER },
            1000,
            20,
        );
        assert_eq!(got, vec![(100, Direction::Positive), (240, Direction::Positive)]);
    }

    #[test]
    fn direction_signs() {
        assert_eq!(Direction::Negative.sign(), -1);
        assert_eq!(Direction::Positive.sign(), 1);
    }
}
