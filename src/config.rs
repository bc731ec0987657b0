// Read once on startup; everything the box can be tuned with lives here.
// The file is never written back: the box keeps no state between runs.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::{DEBOUNCE_MS, HIGH_THRESHOLD, HOLD_REPEAT_MS, LOW_THRESHOLD, PRESS_COOLDOWN_MS};
use crate::note::DEFAULT_ARTICULATION;
use crate::shared::{ANALOG_MAX, Pin};

const MUSICBOX_DIR: &str = ".musicbox";
const CONFIG_FILE: &str = "config.json";

pub const TICK_MS: u64 = 20;
pub const SONG_GAP_MS: u64 = 200;
pub const KEY_LATCH_MS: u64 = 600;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

// Which of the player's features are switched on. Disabled inputs are
// still polled, their events are just dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub pausable: bool,
    pub speed_adjustable: bool,
    pub skip_both_directions: bool, // off = the joystick only skips forward
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            pausable: true,
            speed_adjustable: true,
            skip_both_directions: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_ms: u64,
    pub debounce_ms: u64,
    pub press_cooldown_ms: u64,
    pub hold_repeat_ms: u64,
    pub joystick_low: u16,
    pub joystick_high: u16,
    pub skip_axis: Pin,
    pub speed_axis: Pin,
    pub articulation: f32, // sounding fraction of each pitched note
    pub song_gap_ms: u64,
    pub start_song: usize,
    pub capabilities: Capabilities,

    // host side
    pub lcd: bool, // pretend the 16x2 LCD answered on the bus
    pub key_latch_ms: u64, // how long a key counts as held without a release event
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            debounce_ms: DEBOUNCE_MS,
            press_cooldown_ms: PRESS_COOLDOWN_MS,
            hold_repeat_ms: HOLD_REPEAT_MS,
            joystick_low: LOW_THRESHOLD,
            joystick_high: HIGH_THRESHOLD,
            skip_axis: Pin::JoystickX,
            speed_axis: Pin::JoystickY,
            articulation: DEFAULT_ARTICULATION,
            song_gap_ms: SONG_GAP_MS,
            start_song: 0,
            capabilities: Capabilities::default(),
            lcd: true,
            key_latch_ms: KEY_LATCH_MS,
            log_file: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if self.tick_ms == 0 {
            return invalid("tick_ms must be at least 1");
        }
        if !(self.articulation > 0.0 && self.articulation <= 1.0) {
            return invalid("articulation must be in (0, 1]");
        }
        if self.joystick_low >= self.joystick_high || self.joystick_high > ANALOG_MAX {
            return invalid("joystick thresholds must satisfy low < high <= 1023");
        }
        if self.skip_axis == Pin::PauseButton || self.speed_axis == Pin::PauseButton {
            return invalid("joystick axes must be analog pins");
        }
        if self.skip_axis == self.speed_axis {
            return invalid("skip_axis and speed_axis must be different pins");
        }
        Ok(())
    }
}

// <project_dir>/.musicbox/config.json
pub fn config_file_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MUSICBOX_DIR).join(CONFIG_FILE)
}

/// A missing file is not an error, the defaults are used.
pub fn load_config(project_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_file_path(project_dir);
    if !path.exists() {
        return Ok(Config::default());
    }
    let data = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_config(&data).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse { path, source },
        other => other,
    })
}

pub fn parse_config(data: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(data).map_err(|source| ConfigError::Parse {
        path: PathBuf::new(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_hardware_constants() {
        let config = Config::default();
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.press_cooldown_ms, 200);
        assert_eq!(config.hold_repeat_ms, 1500);
        assert_eq!((config.joystick_low, config.joystick_high), (250, 950));
        assert_eq!(config.song_gap_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(parse_config("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let config = parse_config(
            r#"{
                "start_song": 3,
                "lcd": false,
                "speed_axis": "joystick_x",
                "skip_axis": "joystick_y",
                "capabilities": { "pausable": false }
            }"#,
        )
        .unwrap();
        assert_eq!(config.start_song, 3);
        assert!(!config.lcd);
        assert_eq!(config.skip_axis, Pin::JoystickY);
        assert!(!config.capabilities.pausable);
        assert!(config.capabilities.speed_adjustable);
        assert_eq!(config.tick_ms, TICK_MS);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_config("{ nope"), Err(ConfigError::Parse { .. })));
        assert!(matches!(parse_config(r#"{"tick_ms": "fast"}"#), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn nonsense_values_are_rejected() {
        for bad in [
            r#"{"tick_ms": 0}"#,
            r#"{"articulation": 0.0}"#,
            r#"{"articulation": 1.5}"#,
            r#"{"joystick_low": 900, "joystick_high": 100}"#,
            r#"{"skip_axis": "pause_button"}"#,
            r#"{"skip_axis": "joystick_y"}"#,
        ] {
            assert!(matches!(parse_config(bad), Err(ConfigError::Invalid(_))), "{bad}");
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join("musicbox-config-test-missing");
        assert_eq!(load_config(&dir).unwrap(), Config::default());
    }

    #[test]
    fn loads_from_project_dir() {
        let dir = std::env::temp_dir().join(format!("musicbox-config-test-{}", std::process::id()));
        let path = config_file_path(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"song_gap_ms": 0}"#).unwrap();
        let config = load_config(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(config.song_gap_ms, 0);
    }
}
