// Single square-wave voice, the software stand-in for a piezo driven by a
// PWM pin. Like the hardware it counts down its own duration, so a started
// tone ends on time even if nobody tells it to stop.

const AMPLITUDE: f32 = 0.2; // piezos are loud enough

#[derive(Clone, Debug, Default)]
pub struct SquareVoice {
    phase: f32, // fraction of the current period, 0..1
    phase_inc: f32,
    remaining: u64, // samples left before the voice silences itself
}

impl SquareVoice {
    pub fn start(&mut self, frequency: u16, duration_ms: u32, sample_rate: f32) {
        self.phase = 0.0;
        self.phase_inc = frequency as f32 / sample_rate;
        self.remaining = (duration_ms as f64 * sample_rate as f64 / 1000.0).round() as u64;
    }

    pub fn stop(&mut self) {
        self.remaining = 0;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn next_sample(&mut self) -> f32 {
        if self.remaining == 0 {
            return 0.0;
        }
        self.remaining -= 1;
        // 50% duty cycle
        let out = if self.phase < 0.5 { AMPLITUDE } else { -AMPLITUDE };
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        out
    }
}
