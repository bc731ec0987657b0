mod shared;
mod tui;
mod audio_api;
mod audio;
mod catalog;
mod config;
mod controls;
mod note;
mod player;
mod timeline;
mod visualizer;

use std::path::PathBuf;
use anyhow::Context;
use crossterm::terminal;

use audio_api::{NullTone, ToneOutput};
use catalog::Catalog;
use config::Config;
use controls::InputPins;
use player::{Clock, Peripherals, Player, SystemClock};
use shared::Pin;

const SPLASH_TEXT: &str = "Music Player";
const SPLASH_MS: u64 = 800;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let project_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let loaded = config::load_config(&project_dir);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config)?;
    if let Err(e) = &loaded {
        log::warn!(target: "config", "{e}, using defaults");
    }

    let catalog = Catalog::builtin().context("built-in song catalog is invalid")?;
    log::info!(target: "player", "{} songs in the catalog", catalog.len());

    let mut tone: Box<dyn ToneOutput> = match audio::start_audio() {
        Ok(handle) => Box::new(handle),
        Err(e) => {
            log::warn!(target: "audio", "no audio output ({e:#}), playing silently");
            Box::new(NullTone)
        }
    };

    terminal::enable_raw_mode()?;
    // Enable keyboard enhancement for real press/release detection.
    // Terminals without it fall back to the key latch.
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        )
    );
    let _guard = RawModeGuard; // auto drops when out of scope

    let mut display = tui::TerminalDisplay::new(config.lcd)?;
    let mut clock = SystemClock::new();
    display.splash(SPLASH_TEXT)?;
    clock.sleep_until(clock.now_ms() + SPLASH_MS);

    let mut pins = tui::KeyboardPins::new(config.key_latch_ms);
    let initial_button = pins.digital_read(Pin::PauseButton);
    let mut player = Player::new(&catalog, &config, initial_button);

    let mut io = Peripherals {
        clock: &mut clock,
        tone: tone.as_mut(),
        pins: &mut pins,
        display: &mut display,
    };
    player.run(config.start_song, &mut io);
    tone.stop();
    Ok(())
}

// stderr by default, since the terminal belongs to the panels
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

struct RawModeGuard;
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = terminal::disable_raw_mode();
    }
}
