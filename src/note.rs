// Turns the catalog's (pitch, duration code) pairs into something the player
// can time: a frequency and a length in milliseconds.

use crate::catalog::Song;
use crate::shared::REST;

/// Fraction of a pitched note that actually sounds. The rest of the note's
/// slot is silence, so repeated pitches are heard as separate notes.
pub const DEFAULT_ARTICULATION: f32 = 0.9;

/// Length of a whole note (a full 4/4 bar) at `tempo` beats per minute.
pub fn wholenote_ms(tempo: u16) -> f32 {
    60_000.0 * 4.0 / tempo as f32
}

/// `None` for a zero duration code or tempo; those never pass catalog validation.
pub fn duration_ms(duration_code: i16, tempo: u16) -> Option<f32> {
    if duration_code == 0 || tempo == 0 {
        return None;
    }
    let wholenote = wholenote_ms(tempo);
    let divider = duration_code.unsigned_abs() as f32;
    if duration_code > 0 {
        Some(wholenote / divider)
    } else {
        Some(wholenote / divider * 1.5) // dotted
    }
}

pub fn frequency(pitch_code: u16) -> u16 {
    pitch_code
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub frequency: u16, // REST (0) for silence
    pub duration_ms: f32,
}

impl Note {
    pub fn decode(song: &Song, idx: usize) -> Option<Self> {
        let pitch = song.pitch(idx)?;
        let code = song.duration_code(idx)?;
        Some(Self {
            frequency: frequency(pitch),
            duration_ms: duration_ms(code, song.tempo)?,
        })
    }

    pub fn is_rest(&self) -> bool {
        self.frequency == REST
    }

    /// How long the tone is on. Rests never sound, pitched notes sound for
    /// `articulation` of their slot.
    pub fn sounding_ms(&self, articulation: f32) -> f32 {
        if self.is_rest() {
            0.0
        } else {
            self.duration_ms * articulation
        }
    }
}
