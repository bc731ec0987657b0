mod input;
mod lcd;
mod mode;
mod view;

pub use input::KeyboardPins;

use std::io::{self, Stdout};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::shared::{Display, DisplayState};

// The OLED panel, plus the LCD when it's attached, drawn into the terminal.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    lcd: bool,
    draw_failed: bool, // warn once, not every tick
}

impl TerminalDisplay {
    pub fn new(lcd: bool) -> anyhow::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            lcd,
            draw_failed: false,
        })
    }

    pub fn splash(&mut self, text: &str) -> anyhow::Result<()> {
        self.terminal.draw(|frame| view::draw_splash(frame, frame.area(), text))?;
        Ok(())
    }
}

impl Display for TerminalDisplay {
    fn render(&mut self, state: &DisplayState) {
        let lcd = self.lcd;
        match self.terminal.draw(|frame| view::render(frame, frame.area(), state, lcd)) {
            Ok(_) => self.draw_failed = false,
            Err(e) => {
                if !self.draw_failed {
                    log::warn!(target: "tui", "draw failed: {e}");
                }
                self.draw_failed = true;
            }
        }
    }
}
