use crate::shared::{DisplayState, NUM_BANDS};
use super::lcd;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Gauge, Paragraph};
use ratatui::Frame;

const LCD_ROWS: u16 = 2;
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, state: &DisplayState, lcd: bool) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return; // nothing readable fits, draw nothing
    }
    let lcd = lcd && area.height >= MIN_HEIGHT + LCD_ROWS + 2;
    let lcd_height = if lcd { LCD_ROWS + 2 } else { 0 };
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),             // oled panel
            Constraint::Length(lcd_height), // character lcd
        ])
        .split(area);

    draw_oled(frame, sections[0], state);
    if lcd {
        draw_lcd(frame, sections[1], state);
    }
}

pub fn draw_splash(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::bordered();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(inner);
    let splash = Paragraph::new(text.to_string()).alignment(Alignment::Center);
    frame.render_widget(splash, rows[1]);
}

fn draw_oled(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let block = Block::bordered().title(" OLED ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // spectrum
            Constraint::Length(1), // status line
            Constraint::Length(1), // progress bar
        ])
        .split(inner);

    draw_bands(frame, rows[0], &state.bands);
    frame.render_widget(Paragraph::new(status_line(state)), rows[1]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::White))
        .ratio(state.progress() as f64)
        .label("");
    frame.render_widget(progress, rows[2]);
}

fn draw_bands(frame: &mut Frame, area: Rect, bands: &[u8; NUM_BANDS]) {
    let bar_width = (area.width / NUM_BANDS as u16).saturating_sub(1).max(1);
    let bars: Vec<Bar> = bands
        .iter()
        .map(|&level| Bar::default().value(level as u64).text_value(String::new()))
        .collect();
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(u8::MAX as u64);
    frame.render_widget(chart, area);
}

fn draw_lcd(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let block = Block::bordered().title(" LCD ");
    let lines = vec![
        Line::from(lcd::header(state.song_index, state.song_count)),
        Line::from(lcd::name_window(state.song_name, state.scroll_ms)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// "▶ 00:42/02:10 (1.0x)"
pub fn status_line(state: &DisplayState) -> String {
    let glyph = if state.paused { "⏸" } else { "▶" };
    format!(
        "{} {}/{} ({})",
        glyph,
        format_clock(state.elapsed_ms),
        format_clock(state.total_ms),
        state.speed_label
    )
}

pub fn format_clock(ms: f32) -> String {
    let secs = (ms.max(0.0) / 1000.0) as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn state() -> DisplayState {
        DisplayState {
            song_name: "The Lick",
            song_index: 3,
            song_count: 7,
            elapsed_ms: 42_500.0,
            total_ms: 130_000.0,
            paused: false,
            speed_label: "1.5x",
            bands: [0; NUM_BANDS],
            scroll_ms: 0,
        }
    }

    #[test]
    fn clock_is_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(999.0), "00:00");
        assert_eq!(format_clock(61_000.0), "01:01");
        assert_eq!(format_clock(130_000.0), "02:10");
    }

    #[test]
    fn status_shows_glyph_times_and_speed() {
        let mut s = state();
        assert_eq!(status_line(&s), "▶ 00:42/02:10 (1.5x)");
        s.paused = true;
        assert_eq!(status_line(&s), "⏸ 00:42/02:10 (1.5x)");
    }

    fn screen(width: u16, height: u16, lcd: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, frame.area(), &state(), lcd)).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_both_panels() {
        let text = screen(60, 20, true);
        assert!(text.contains("OLED"));
        assert!(text.contains("00:42/02:10 (1.5x)"));
        assert!(text.contains("Song (4/7):"));
        assert!(text.contains("The Lick"));
    }

    #[test]
    fn lcd_can_be_left_out() {
        let text = screen(60, 20, false);
        assert!(text.contains("OLED"));
        assert!(!text.contains("Song (4/7):"));
    }

    #[test]
    fn tiny_terminal_stays_blank() {
        assert!(screen(10, 5, true).trim().is_empty());
    }
}
