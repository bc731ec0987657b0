use crate::audio_api::ToneCommand;

use super::voice::SquareVoice;

// Lives inside the audio callback: no allocation, no blocking.
pub struct ToneEngine {
    sample_rate: f32,
    voice: SquareVoice, // the box is monophonic
}

impl ToneEngine {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate: sample_rate as f32,
            voice: SquareVoice::default(),
        }
    }

    pub fn handle_cmd(&mut self, cmd: ToneCommand) {
        match cmd {
            ToneCommand::Start { frequency, duration_ms } => {
                self.voice.start(frequency, duration_ms, self.sample_rate)
            }
            ToneCommand::Stop => self.voice.stop(),
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.voice.is_active()
    }

    // interleaved output, same sample on every channel
    pub fn render_block(&mut self, data: &mut [f32], channels: usize) {
        for frame in data.chunks_mut(channels.max(1)) {
            let sample = self.voice.next_sample();
            frame.fill(sample);
        }
    }
}
