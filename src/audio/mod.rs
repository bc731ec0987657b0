use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::audio_api::{ToneCommand, ToneOutput};

mod engine;
mod voice;

use engine::ToneEngine;

const COMMAND_QUEUE: usize = 64;

pub struct AudioHandle {
    tx: Sender<ToneCommand>,
    _output_stream: cpal::Stream,
}

impl AudioHandle {
    pub fn send(&self, cmd: ToneCommand) {
        // never block the control loop on the audio thread
        if self.tx.try_send(cmd).is_err() {
            log::warn!(target: "audio", "tone command queue full, dropping command");
        }
    }
}

impl ToneOutput for AudioHandle {
    fn start(&mut self, frequency: u16, duration_ms: u32) {
        self.send(ToneCommand::Start { frequency, duration_ms });
    }

    fn stop(&mut self) {
        self.send(ToneCommand::Stop);
    }
}

pub fn start_audio() -> anyhow::Result<AudioHandle> {
    let (tx, rx) = crossbeam_channel::bounded::<ToneCommand>(COMMAND_QUEUE);

    let host = cpal::default_host();
    let device = host.default_output_device().context("no default output device")?;
    let config = device.default_output_config().context("no default output config")?;

    let sample_rate = config.sample_rate();
    let channels = config.channels() as usize;
    log::info!(target: "audio", "output: {} Hz, {} channel(s)", sample_rate, channels);

    match config.sample_format() {
        cpal::SampleFormat::F32 => {
            let output_stream =
                build_output_stream_f32(&device, &config.into(), rx, sample_rate, channels)?;
            output_stream.play().context("failed to play output stream")?;

            Ok(AudioHandle {
                tx,
                _output_stream: output_stream,
            })
        }
        other => anyhow::bail!("unsupported sample format {other:?} (only f32 supported for now)"),
    }
}

// ── Output stream ─────────────────────────────────────────────────

fn build_output_stream_f32(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    rx: Receiver<ToneCommand>,
    sample_rate: u32,
    channels: usize,
) -> anyhow::Result<cpal::Stream> {
    let mut engine = ToneEngine::new(sample_rate);

    let err_fn = |err| log::error!(target: "audio", "output stream error: {err}");

    let stream = device.build_output_stream(
        config,
        move |data: &mut [f32], _info| {
            while let Ok(cmd) = rx.try_recv() {
                engine.handle_cmd(cmd);
            }
            engine.render_block(data, channels);
        },
        err_fn,
        None,
    )?;

    Ok(stream)
}
