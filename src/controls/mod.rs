mod button;
mod joystick;

pub use button::{Debouncer, DEBOUNCE_MS, PRESS_COOLDOWN_MS};
pub use joystick::{AxisRepeater, Direction, HIGH_THRESHOLD, HOLD_REPEAT_MS, LOW_THRESHOLD};

use crate::config::Config;
use crate::shared::{Level, Pin};

/// Raw, polled access to the box's inputs.
pub trait InputPins {
    fn digital_read(&mut self, pin: Pin) -> Level;
    fn analog_read(&mut self, pin: Pin) -> u16;

    // The real box has no off switch. Hosts override this for their quit key.
    fn power_off_requested(&mut self) -> bool {
        false
    }
}

/// The three input state machines, each bound to the pin it reads.
///
/// Every `poll_*` must run once per tick even when the caller is going to
/// ignore the answer, otherwise the debounce and hold timers drift.
#[derive(Clone, Debug)]
pub struct Controls {
    pause: Debouncer,
    skip: AxisRepeater,
    speed: AxisRepeater,
    skip_pin: Pin,
    speed_pin: Pin,
}

impl Controls {
    pub fn new(config: &Config, initial_button: Level) -> Self {
        let axis = || AxisRepeater::new(config.joystick_low, config.joystick_high, config.hold_repeat_ms);
        Self {
            pause: Debouncer::with_timing(initial_button, config.debounce_ms, config.press_cooldown_ms),
            skip: axis(),
            speed: axis(),
            skip_pin: config.skip_axis,
            speed_pin: config.speed_axis,
        }
    }

    pub fn poll_pause(&mut self, pins: &mut dyn InputPins, now_ms: u64) -> bool {
        let raw = pins.digital_read(Pin::PauseButton);
        self.pause.poll(raw, now_ms)
    }

    pub fn poll_skip(&mut self, pins: &mut dyn InputPins, now_ms: u64) -> Option<Direction> {
        let raw = pins.analog_read(self.skip_pin);
        self.skip.poll(raw, now_ms)
    }

    pub fn poll_speed(&mut self, pins: &mut dyn InputPins, now_ms: u64) -> Option<Direction> {
        let raw = pins.analog_read(self.speed_pin);
        self.speed.poll(raw, now_ms)
    }
}
