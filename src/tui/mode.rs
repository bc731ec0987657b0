use crate::shared::{ANALOG_CENTER, ANALOG_MAX};

// The keys that stand in for the box's physical controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxKey {
    Button,
    Left,
    Right,
    Up,
    Down,
}

const NUM_KEYS: usize = 5;

impl BoxKey {
    fn slot(self) -> usize {
        self as usize
    }
}

// state local to tui: which keys count as held right now.
// Terminals that report releases clear a key on release. The rest only send
// presses and auto-repeats, so a press holds the key for `latch_ms` and every
// repeat extends it; that's what keeps a held arrow looking like a held stick.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    latch_ms: u64,
    held_until: [Option<u64>; NUM_KEYS],
    pub power_off: bool, // sticky, once asked the box is going down
}

impl HeldKeys {
    pub fn new(latch_ms: u64) -> Self {
        Self {
            latch_ms,
            held_until: [None; NUM_KEYS],
            power_off: false,
        }
    }

    pub fn press(&mut self, key: BoxKey, now_ms: u64) {
        self.held_until[key.slot()] = Some(now_ms + self.latch_ms);
    }

    pub fn release(&mut self, key: BoxKey) {
        self.held_until[key.slot()] = None;
    }

    pub fn is_held(&self, key: BoxKey, now_ms: u64) -> bool {
        self.held_until[key.slot()].is_some_and(|until| now_ms < until)
    }

    /// Fake analog reading for an axis driven by two keys.
    /// Both or neither held reads as the stick at rest.
    pub fn axis(&self, negative: BoxKey, positive: BoxKey, now_ms: u64) -> u16 {
        match (self.is_held(negative, now_ms), self.is_held(positive, now_ms)) {
            (true, false) => 0,
            (false, true) => ANALOG_MAX,
            _ => ANALOG_CENTER,
        }
    }
}
