// Text for the 16x2 character LCD: a header on row 0 and the song name on
// row 1. Names wider than the panel scroll through a fixed cycle.

pub const LCD_COLS: usize = 16;

const SCROLL_HOLD_MS: u64 = 2000;
const SCROLL_CYCLE_MS: u64 = 8000;

pub fn header(song_index: usize, song_count: usize) -> String {
    format!("Song ({}/{}):", song_index + 1, song_count)
}

/// The 16 visible columns of `name`, `scroll_ms` into the song.
///
/// Short names are shown as is. Long ones hold on their start for two
/// seconds, then slide through the whole name plus one blank column over the
/// next six, then start over.
pub fn name_window(name: &str, scroll_ms: u64) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= LCD_COLS {
        return name.to_string();
    }

    let t = scroll_ms % SCROLL_CYCLE_MS;
    let ring = chars.len() + 1; // trailing blank between the end and the wrap
    let offset = if t < SCROLL_HOLD_MS {
        0
    } else {
        (t - SCROLL_HOLD_MS) as usize * ring / (SCROLL_CYCLE_MS - SCROLL_HOLD_MS) as usize
    };

    (0..LCD_COLS)
        .map(|col| chars.get((offset + col) % ring).copied().unwrap_or(' '))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "ABCDEFGHIJKLMNOPQRST"; // 20 columns

    #[test]
    fn header_is_one_based() {
        assert_eq!(header(0, 7), "Song (1/7):");
        assert_eq!(header(6, 7), "Song (7/7):");
    }

    #[test]
    fn short_names_never_scroll() {
        assert_eq!(name_window("The Lick", 0), "The Lick");
        assert_eq!(name_window("The Lick", 5000), "The Lick");
        assert_eq!(name_window("Sixteen columns!", 5000), "Sixteen columns!");
    }

    #[test]
    fn long_names_hold_then_scroll() {
        assert_eq!(name_window(LONG, 0), "ABCDEFGHIJKLMNOP");
        assert_eq!(name_window(LONG, 1999), "ABCDEFGHIJKLMNOP");
        // 3 s into a 6 s slide over 21 columns
        assert_eq!(name_window(LONG, 5000), "KLMNOPQRST ABCDE");
        assert_eq!(name_window(LONG, 7999).chars().count(), LCD_COLS);
    }

    #[test]
    fn scroll_restarts_every_cycle() {
        assert_eq!(name_window(LONG, 8000), name_window(LONG, 0));
        assert_eq!(name_window(LONG, 13_000), name_window(LONG, 5000));
    }
}
