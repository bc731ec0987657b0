// The control plan for the box:
//
// Pause button (pull-up wiring, LOW while pressed):
//   Space          //  PauseButton
//
// Joystick (10-bit analog, rests around the middle):
//   Left / Right   //  skip axis: previous / next song
//   Up / Down      //  speed axis: faster / slower
//
// Power (host only, the real box just gets unplugged):
//   Esc / q        //  power off
//
// The idea of the rendering process:
//   - The player owns all playback state. Once per tick it snapshots that
//     state into a `DisplayState` and hands it to whatever displays are
//     attached.
//   - Displays never decide anything; they draw the snapshot and return.

use serde::{Deserialize, Serialize};

pub const NUM_BANDS: usize = 16;
pub const REST: u16 = 0;

pub const ANALOG_MAX: u16 = 1023;
pub const ANALOG_CENTER: u16 = 512;

// Digital pin level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pin {
    PauseButton,
    JoystickX,
    JoystickY,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedSetting {
    pub factor: f32,
    pub label: &'static str,
}

pub const SPEED_SETTINGS: [SpeedSetting; 6] = [
    SpeedSetting { factor: 0.25, label: "0.25x" },
    SpeedSetting { factor: 0.5, label: "0.5x" },
    SpeedSetting { factor: 1.0, label: "1.0x" },
    SpeedSetting { factor: 1.5, label: "1.5x" },
    SpeedSetting { factor: 2.0, label: "2.0x" },
    SpeedSetting { factor: 3.0, label: "3.0x" },
];
pub const DEFAULT_SPEED_IDX: usize = 2; // 1.0x

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub song_name: &'static str,
    pub song_index: usize, // 0-based, displays add 1
    pub song_count: usize,
    pub elapsed_ms: f32, // onset of the current note
    pub total_ms: f32,
    pub paused: bool,
    pub speed_label: &'static str,
    pub bands: [u8; NUM_BANDS],
    pub scroll_ms: u64, // time since the song started, drives the LCD name scroll
}

impl DisplayState {
    pub fn progress(&self) -> f32 {
        if self.total_ms <= 0.0 {
            return 0.0;
        }
        (self.elapsed_ms / self.total_ms).clamp(0.0, 1.0)
    }
}

/// Anything that can show the player's state. Called once per tick.
pub trait Display {
    fn render(&mut self, state: &DisplayState);
}
