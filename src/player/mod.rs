// The playback engine: one song at a time, one note at a time, on a fixed
// tick grid.
//
// Everything the engine touches outside itself goes through `Peripherals`,
// so the same loop drives the terminal build and the tests.

mod clock;

pub use clock::{Clock, SystemClock};

use std::ops::ControlFlow;

use thiserror::Error;

use crate::audio_api::ToneOutput;
use crate::catalog::{Catalog, Song};
use crate::config::{Capabilities, Config};
use crate::controls::{Controls, Direction, InputPins};
use crate::note::Note;
use crate::shared::{DEFAULT_SPEED_IDX, Display, DisplayState, Level, REST, SPEED_SETTINGS};
use crate::timeline::Timeline;
use crate::visualizer::Visualizer;

pub struct Peripherals<'a> {
    pub clock: &'a mut dyn Clock,
    pub tone: &'a mut dyn ToneOutput,
    pub pins: &'a mut dyn InputPins,
    pub display: &'a mut dyn Display,
}

/// How a song ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    /// Move this many songs through the catalog: +1 at the end of a song or
    /// on a forward skip, -1 on a backward skip.
    Advance(i32),
    PowerOff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Playing { song: usize, note: usize },
    Paused { song: usize, note: usize },
    Finished(Finish),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("no song {index}, the catalog has {count}")]
    NoSuchSong { index: usize, count: usize },

    #[error("song {index} has no notes")]
    EmptySong { index: usize },
}

/// Where playing song `current` and moving `direction` lands, wrapping at
/// both ends of the catalog.
pub fn next_index(current: usize, direction: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current as i64 + direction as i64).rem_euclid(count as i64) as usize
}

#[derive(Clone, Copy, Debug)]
struct Settings {
    tick_ms: u64,
    articulation: f32,
    song_gap_ms: u64,
    capabilities: Capabilities,
}

#[derive(Clone, Copy, Debug, Default)]
struct PlaybackState {
    song: usize,
    note: usize,
    paused: bool,
    speed_idx: usize,
    started_ms: u64,
}

// One note in flight. Progress is kept in score milliseconds (1.0x), so a
// speed change only rescales what's left.
#[derive(Clone, Copy, Debug)]
struct NoteProgress {
    frequency: u16,
    slot_ms: f32,
    sounding_ms: f32,
    played_ms: f32,
    sounding: bool,
}

impl NoteProgress {
    fn new(note: Note, articulation: f32) -> Self {
        Self {
            frequency: note.frequency,
            slot_ms: note.duration_ms,
            sounding_ms: note.sounding_ms(articulation),
            played_ms: 0.0,
            sounding: false,
        }
    }

    fn advance(&mut self, real_ms: u64, speed: f32) {
        self.played_ms += real_ms as f32 * speed;
    }

    fn finished(&self) -> bool {
        self.played_ms >= self.slot_ms
    }

    fn sounding_done(&self) -> bool {
        self.sounding && self.played_ms >= self.sounding_ms
    }

    /// (Re)start the tone for whatever sounding time is left.
    fn sound(&mut self, tone: &mut dyn ToneOutput, speed: f32) {
        let remaining = self.sounding_ms - self.played_ms;
        if self.frequency == REST || remaining <= 0.0 {
            return;
        }
        tone.start(self.frequency, (remaining / speed).ceil() as u32);
        self.sounding = true;
    }

    // stops at most once per sounding stretch
    fn silence(&mut self, tone: &mut dyn ToneOutput) {
        if self.sounding {
            tone.stop();
            self.sounding = false;
        }
    }

    fn audible(&self) -> u16 {
        if self.sounding { self.frequency } else { REST }
    }

    // score ms to the next thing that has to happen on time
    fn until_next_edge(&self) -> f32 {
        let edge = if self.sounding { self.sounding_ms } else { self.slot_ms };
        edge - self.played_ms
    }
}

pub struct Player<'c> {
    catalog: &'c Catalog,
    settings: Settings,
    controls: Controls,
    visualizer: Visualizer,
    timeline: Timeline,
    playback: PlaybackState,
    state: PlayerState,
}

impl<'c> Player<'c> {
    /// `initial_button` is the pause button's level at power-on, so a button
    /// held through boot doesn't count as a press.
    pub fn new(catalog: &'c Catalog, config: &Config, initial_button: Level) -> Self {
        Self {
            catalog,
            settings: Settings {
                tick_ms: config.tick_ms.max(1),
                articulation: config.articulation,
                song_gap_ms: config.song_gap_ms,
                capabilities: config.capabilities,
            },
            controls: Controls::new(config, initial_button),
            visualizer: Visualizer::new(),
            timeline: Timeline::with_capacity(catalog.longest()),
            playback: PlaybackState {
                speed_idx: DEFAULT_SPEED_IDX,
                ..PlaybackState::default()
            },
            state: PlayerState::Stopped,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn speed(&self) -> f32 {
        SPEED_SETTINGS[self.playback.speed_idx].factor
    }

    /// Play songs back to back from `start` until power-off.
    ///
    /// A song that can't be played is logged and the box falls back to the
    /// first song; if that fails too, it gives up.
    pub fn run(&mut self, start: usize, io: &mut Peripherals<'_>) {
        let count = self.catalog.len();
        let mut current = start;
        loop {
            match self.play(current, io) {
                Ok(Finish::PowerOff) => {
                    log::info!(target: "player", "power off");
                    break;
                }
                Ok(Finish::Advance(direction)) => {
                    current = next_index(current, direction, count);
                }
                Err(e) => {
                    log::warn!(target: "player", "{e}");
                    if current == 0 {
                        break;
                    }
                    current = 0;
                    continue;
                }
            }
            let now = io.clock.now_ms();
            io.clock.sleep_until(now + self.settings.song_gap_ms);
        }
        self.state = PlayerState::Stopped;
    }

    /// Play one song from its first note until it ends, gets skipped, or the
    /// box is switched off.
    pub fn play(&mut self, index: usize, io: &mut Peripherals<'_>) -> Result<Finish, PlayError> {
        let song = *self.catalog.get(index).ok_or(PlayError::NoSuchSong {
            index,
            count: self.catalog.len(),
        })?;
        if song.is_empty() {
            return Err(PlayError::EmptySong { index });
        }

        self.timeline.rebuild(&song);
        self.playback = PlaybackState {
            song: index,
            note: 0,
            paused: false,
            speed_idx: DEFAULT_SPEED_IDX,
            started_ms: io.clock.now_ms(),
        };
        self.state = PlayerState::Playing { song: index, note: 0 };
        log::info!(
            target: "player",
            "playing {} ({}/{}), {} notes, {:.0} ms",
            song.name,
            index + 1,
            self.catalog.len(),
            song.len(),
            self.timeline.total_ms()
        );

        let finish = match self.play_notes(&song, io) {
            ControlFlow::Break(finish) => finish,
            ControlFlow::Continue(()) => Finish::Advance(1),
        };
        self.playback.paused = false;
        self.state = PlayerState::Finished(finish);
        log::debug!(target: "player", "{} finished: {:?}", song.name, finish);
        Ok(finish)
    }

    fn play_notes(&mut self, song: &Song, io: &mut Peripherals<'_>) -> ControlFlow<Finish> {
        for idx in 0..song.len() {
            self.playback.note = idx;
            self.state = PlayerState::Playing {
                song: self.playback.song,
                note: idx,
            };
            if let ControlFlow::Break(finish) = self.check_interrupts(io, None) {
                return ControlFlow::Break(finish);
            }

            let Some(note) = Note::decode(song, idx) else {
                log::warn!(target: "player", "{}: note {} does not decode, skipping it", song.name, idx);
                continue;
            };
            let mut voice = NoteProgress::new(note, self.settings.articulation);
            let flow = self.play_note(&mut voice, io);
            voice.silence(io.tone);
            if let ControlFlow::Break(finish) = flow {
                return ControlFlow::Break(finish);
            }
        }
        ControlFlow::Continue(())
    }

    fn play_note(&mut self, voice: &mut NoteProgress, io: &mut Peripherals<'_>) -> ControlFlow<Finish> {
        let tick = self.settings.tick_ms;
        voice.sound(io.tone, self.speed());
        let mut last = io.clock.now_ms();
        let mut next_tick = last;

        loop {
            let now = io.clock.now_ms();
            voice.advance(now.saturating_sub(last), self.speed());
            last = now;
            if voice.sounding_done() {
                voice.silence(io.tone);
            }
            if voice.finished() {
                return ControlFlow::Continue(());
            }

            if now >= next_tick {
                match self.check_interrupts(io, Some(&mut *voice)) {
                    ControlFlow::Break(finish) => return ControlFlow::Break(finish),
                    ControlFlow::Continue(true) => {
                        // time spent paused never counts toward the note
                        last = io.clock.now_ms();
                        next_tick = last;
                        voice.sound(io.tone, self.speed());
                        continue;
                    }
                    ControlFlow::Continue(false) => {}
                }

                if let Some(direction) = self.controls.poll_speed(io.pins, now) {
                    if self.step_speed(direction) && voice.sounding {
                        voice.sound(io.tone, self.speed());
                    }
                }
                self.visualizer.update(voice.audible());
                self.render(io, now);

                while next_tick <= now {
                    next_tick += tick;
                }
            }

            // wake for the next tick, or sooner if the tone or the note ends first
            let edge = (voice.until_next_edge() / self.speed()).ceil().max(1.0) as u64;
            let wake = io.clock.now_ms() + edge;
            io.clock.sleep_until(next_tick.min(wake));
        }
    }

    /// Skip, power-off and pause, in that order. `Continue(true)` means the
    /// player was paused and has just been resumed.
    fn check_interrupts(
        &mut self,
        io: &mut Peripherals<'_>,
        voice: Option<&mut NoteProgress>,
    ) -> ControlFlow<Finish, bool> {
        let now = io.clock.now_ms();
        if let Some(finish) = self.poll_skip(io, now) {
            return ControlFlow::Break(finish);
        }
        if !self.controls.poll_pause(io.pins, now) {
            return ControlFlow::Continue(false);
        }
        if !self.settings.capabilities.pausable {
            log::debug!(target: "player", "pause pressed, pausing is disabled");
            return ControlFlow::Continue(false);
        }

        if let Some(voice) = voice {
            voice.silence(io.tone);
        }
        match self.pause(io) {
            ControlFlow::Break(finish) => ControlFlow::Break(finish),
            ControlFlow::Continue(()) => ControlFlow::Continue(true),
        }
    }

    fn poll_skip(&mut self, io: &mut Peripherals<'_>, now: u64) -> Option<Finish> {
        if io.pins.power_off_requested() {
            return Some(Finish::PowerOff);
        }
        let direction = self.controls.poll_skip(io.pins, now)?;
        if direction == Direction::Negative && !self.settings.capabilities.skip_both_directions {
            log::debug!(target: "player", "backward skip ignored");
            return None;
        }
        log::info!(target: "player", "skip {:+}", direction.sign());
        Some(Finish::Advance(direction.sign()))
    }

    // Holds the note where it is until the button is pressed again.
    // Skip and power-off still work from here.
    fn pause(&mut self, io: &mut Peripherals<'_>) -> ControlFlow<Finish> {
        let tick = self.settings.tick_ms;
        let (song, note) = (self.playback.song, self.playback.note);
        self.playback.paused = true;
        self.state = PlayerState::Paused { song, note };
        log::info!(target: "player", "paused at note {note}");

        let mut now = io.clock.now_ms();
        self.render(io, now);
        let mut next_tick = now + tick;
        let flow = loop {
            io.clock.sleep_until(next_tick);
            now = io.clock.now_ms();
            while next_tick <= now {
                next_tick += tick;
            }

            if let Some(finish) = self.poll_skip(io, now) {
                break ControlFlow::Break(finish);
            }
            if self.controls.poll_pause(io.pins, now) {
                break ControlFlow::Continue(());
            }
            // read and thrown away, so the axis timers stay current
            let _ = self.controls.poll_speed(io.pins, now);
            self.visualizer.update(REST);
            self.render(io, now);
        };

        self.playback.paused = false;
        if flow.is_continue() {
            self.state = PlayerState::Playing { song, note };
            log::info!(target: "player", "resumed at note {note}");
        }
        flow
    }

    /// Returns whether the speed actually changed.
    fn step_speed(&mut self, direction: Direction) -> bool {
        if !self.settings.capabilities.speed_adjustable {
            return false;
        }
        let old = self.playback.speed_idx;
        self.playback.speed_idx = match direction {
            Direction::Positive => (old + 1).min(SPEED_SETTINGS.len() - 1),
            Direction::Negative => old.saturating_sub(1),
        };
        let changed = self.playback.speed_idx != old;
        if changed {
            log::debug!(target: "player", "speed {}", SPEED_SETTINGS[self.playback.speed_idx].label);
        }
        changed
    }

    pub fn display_state(&self, now_ms: u64) -> DisplayState {
        let name = self.catalog.get(self.playback.song).map_or("", |song| song.name);
        DisplayState {
            song_name: name,
            song_index: self.playback.song,
            song_count: self.catalog.len(),
            elapsed_ms: self.timeline.elapsed_at(self.playback.note),
            total_ms: self.timeline.total_ms(),
            paused: self.playback.paused,
            speed_label: SPEED_SETTINGS[self.playback.speed_idx].label,
            bands: *self.visualizer.bands(),
            scroll_ms: now_ms.saturating_sub(self.playback.started_ms),
        }
    }

    fn render(&self, io: &mut Peripherals<'_>, now_ms: u64) {
        let state = self.display_state(now_ms);
        io.display.render(&state);
    }
}
