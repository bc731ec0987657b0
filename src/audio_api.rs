// What the player is allowed to ask of the buzzer.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToneCommand {
    // Sounds until `duration_ms` runs out or the next command arrives,
    // whichever comes first. Replaces any tone already sounding.
    Start { frequency: u16, duration_ms: u32 },

    // Silence right away
    Stop,
}

/// Non-blocking tone output. Callers never pass a frequency of 0; rests are
/// just the absence of a tone.
pub trait ToneOutput {
    fn start(&mut self, frequency: u16, duration_ms: u32);
    fn stop(&mut self);
}

// Used when there's no audio device; playback still runs, just silently.
pub struct NullTone;

impl ToneOutput for NullTone {
    fn start(&mut self, _frequency: u16, _duration_ms: u32) {}
    fn stop(&mut self) {}
}
