use crate::catalog::Song;
use crate::note;

/// When each note of a song starts, in score milliseconds (speed 1.0x).
///
/// The speed setting is applied by the player at play time, never baked in
/// here, so progress is always `onset / total`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    onsets: Vec<f32>,
    total_ms: f32,
}

impl Timeline {
    /// Reserve room for `notes` onsets so rebuilding for any song up to that
    /// length never reallocates. Size it with `Catalog::longest`.
    pub fn with_capacity(notes: usize) -> Self {
        Self {
            onsets: Vec::with_capacity(notes),
            total_ms: 0.0,
        }
    }

    pub fn build(song: &Song) -> Self {
        let mut timeline = Self::with_capacity(song.len());
        timeline.rebuild(song);
        timeline
    }

    pub fn rebuild(&mut self, song: &Song) {
        self.onsets.clear();
        let mut cum = 0.0f32;
        for &(_, code) in song.notes {
            self.onsets.push(cum);
            // zero codes are filtered out by the catalog
            cum += note::duration_ms(code, song.tempo).unwrap_or(0.0);
        }
        self.total_ms = cum;
    }

    pub fn onsets(&self) -> &[f32] {
        &self.onsets
    }

    pub fn len(&self) -> usize {
        self.onsets.len()
    }

    pub fn total_ms(&self) -> f32 {
        self.total_ms
    }

    pub fn elapsed_at(&self, note_idx: usize) -> f32 {
        self.onsets.get(note_idx).copied().unwrap_or(self.total_ms)
    }

    pub fn progress(&self, note_idx: usize) -> f32 {
        if self.total_ms <= 0.0 {
            return 0.0;
        }
        self.elapsed_at(note_idx) / self.total_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::pitches::*;
    use crate::catalog::Catalog;

    const EXAMPLE: Song = Song::new("example", 120, &[(C4, 4), (REST, 8), (C4, -4)]);

    #[test]
    fn example_song_onsets_and_total() {
        let timeline = Timeline::build(&EXAMPLE);
        assert_eq!(timeline.onsets(), &[0.0, 500.0, 750.0]);
        assert_eq!(timeline.total_ms(), 1500.0);
    }

    #[test]
    fn total_is_last_onset_plus_last_duration() {
        let catalog = Catalog::builtin().unwrap();
        for song in catalog.songs() {
            let timeline = Timeline::build(song);
            let &(_, last_code) = song.notes.last().unwrap();
            let last = note::duration_ms(last_code, song.tempo).unwrap();
            assert_eq!(timeline.len(), song.len());
            assert_eq!(timeline.onsets()[0], 0.0);
            assert!(timeline.onsets().windows(2).all(|w| w[0] <= w[1]), "{}", song.name);
            assert_eq!(timeline.total_ms(), timeline.onsets()[song.len() - 1] + last);
        }
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let mut timeline = Timeline::build(&EXAMPLE);
        let first = timeline.clone();
        timeline.rebuild(&EXAMPLE);
        assert_eq!(timeline, first);
    }

    #[test]
    fn reused_buffer_does_not_grow() {
        let catalog = Catalog::builtin().unwrap();
        let mut timeline = Timeline::with_capacity(catalog.longest());
        let capacity = timeline.onsets.capacity();
        for song in catalog.songs() {
            timeline.rebuild(song);
            assert_eq!(timeline.len(), song.len());
        }
        assert_eq!(timeline.onsets.capacity(), capacity);
    }

    #[test]
    fn progress_is_onset_over_total() {
        let timeline = Timeline::build(&EXAMPLE);
        assert_eq!(timeline.progress(0), 0.0);
        assert_eq!(timeline.progress(2), 0.5);
        assert_eq!(timeline.elapsed_at(99), 1500.0);
    }
}
