use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::mode::{BoxKey, HeldKeys};
use crate::controls::InputPins;
use crate::shared::{ANALOG_MAX, Level, Pin};

// The keyboard pretending to be the box's button and joystick.
// Every read drains the terminal's event queue first, without waiting.
pub struct KeyboardPins {
    keys: HeldKeys,
    origin: Instant,
}

impl KeyboardPins {
    pub fn new(latch_ms: u64) -> Self {
        Self {
            keys: HeldKeys::new(latch_ms),
            origin: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn pump(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!(target: "input", "terminal poll failed: {e}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => {
                    let now = self.now_ms();
                    handle_key(&mut self.keys, key, now);
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!(target: "input", "terminal read failed: {e}");
                    break;
                }
            }
        }
    }
}

impl InputPins for KeyboardPins {
    fn digital_read(&mut self, pin: Pin) -> Level {
        self.pump();
        let now = self.now_ms();
        match pin {
            // pull-up wiring: pressed pulls the pin low
            Pin::PauseButton if self.keys.is_held(BoxKey::Button, now) => Level::Low,
            _ => Level::High,
        }
    }

    fn analog_read(&mut self, pin: Pin) -> u16 {
        self.pump();
        let now = self.now_ms();
        match pin {
            Pin::JoystickX => self.keys.axis(BoxKey::Left, BoxKey::Right, now),
            Pin::JoystickY => self.keys.axis(BoxKey::Down, BoxKey::Up, now),
            Pin::PauseButton => ANALOG_MAX,
        }
    }

    fn power_off_requested(&mut self) -> bool {
        self.pump();
        self.keys.power_off
    }
}

// map a terminal key event onto the box's controls
pub fn handle_key(keys: &mut HeldKeys, key: KeyEvent, now_ms: u64) {
    let box_key = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            keys.power_off = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            keys.power_off = true;
            return;
        }
        KeyCode::Char(' ') => BoxKey::Button,
        KeyCode::Left => BoxKey::Left,
        KeyCode::Right => BoxKey::Right,
        KeyCode::Up => BoxKey::Up,
        KeyCode::Down => BoxKey::Down,
        _ => return,
    };
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => keys.press(box_key, now_ms),
        KeyEventKind::Release => keys.release(box_key),
    }
}
