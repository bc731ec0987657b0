// Built-in melodies. Each entry is (pitch, duration code); see `note::duration_ms`
// for how duration codes turn into milliseconds.

use super::pitches::*;
use super::song::Song;

pub const HAPPY_BIRTHDAY: Song = Song::new(
    "Happy Birthday",
    140,
    &[
        (C4, 4), (C4, 8),
        (D4, -4), (C4, -4), (F4, -4),
        (E4, -2), (C4, 4), (C4, 8),
        (D4, -4), (C4, -4), (G4, -4),
        (F4, -2), (C4, 4), (C4, 8),

        (C5, -4), (A4, -4), (F4, -4),
        (E4, -4), (D4, -4), (AS4, 4), (AS4, 8),
        (A4, -4), (F4, -4), (G4, -4),
        (F4, -2),
    ],
);

pub const PINK_PANTHER: Song = Song::new(
    "Pink Panther",
    120,
    &[
        (REST, 2), (REST, 4), (REST, 8), (DS4, 8),
        (E4, -4), (REST, 8), (FS4, 8), (G4, -4), (REST, 8), (DS4, 8),
        (E4, -8), (FS4, 8), (G4, -8), (C5, 8), (B4, -8), (E4, 8), (G4, -8), (B4, 8),
        (AS4, 2), (A4, -16), (G4, -16), (E4, -16), (D4, -16),
        (E4, 2), (REST, 4), (REST, 8), (DS4, 4),

        (E4, -4), (REST, 8), (FS4, 8), (G4, -4), (REST, 8), (DS4, 8),
        (E4, -8), (FS4, 8), (G4, -8), (C5, 8), (B4, -8), (G4, 8), (B4, -8), (E5, 8),
        (DS5, 1),
        (D5, 2), (REST, 4), (REST, 8), (DS4, 8),
        (E4, -4), (REST, 8), (FS4, 8), (G4, -4), (REST, 8), (DS4, 8),
        (E4, -8), (FS4, 8), (G4, -8), (C5, 8), (B4, -8), (E4, 8), (G4, -8), (B4, 8),

        (AS4, 2), (A4, -16), (G4, -16), (E4, -16), (D4, -16),
        (E4, -4), (REST, 4),
        (REST, 4), (E5, -8), (D5, 8), (B4, -8), (A4, 8), (G4, -8), (E4, -8),
        (AS4, 16), (A4, -8), (AS4, 16), (A4, -8), (AS4, 16), (A4, -8), (AS4, 16), (A4, -8),
        (G4, -16), (E4, -16), (D4, -16), (E4, 16), (E4, 16), (E4, 2),
    ],
);

pub const SILENT_NIGHT: Song = Song::new(
    "Silent Night",
    140,
    &[
        (G4, -4), (A4, 8), (G4, 4),
        (E4, -2),
        (G4, -4), (A4, 8), (G4, 4),
        (E4, -2),
        (D5, 2), (D5, 4),
        (B4, -2),
        (C5, 2), (C5, 4),
        (G4, -2),

        (A4, 2), (A4, 4),
        (C5, -4), (B4, 8), (A4, 4),
        (G4, -4), (A4, 8), (G4, 4),
        (E4, -2),
        (A4, 2), (A4, 4),
        (C5, -4), (B4, 8), (A4, 4),
        (G4, -4), (A4, 8), (G4, 4),
        (E4, -2),

        (D5, 2), (D5, 4),
        (F5, -4), (D5, 8), (B4, 4),
        (C5, -2),
        (E5, -2),
        (C5, 4), (G4, 4), (E4, 4),
        (G4, -4), (F4, 8), (D4, 4),
        (C4, -2),
        (C4, -1),
    ],
);

pub const THE_LICK: Song = Song::new(
    "The Lick",
    108,
    &[
        (D4, 8), (E4, 8), (F4, 8), (G4, 8), (E4, 4), (C4, 8), (D4, 1),
    ],
);

pub const STAR_TREK_INTRO: Song = Song::new(
    "Star Trek Intro",
    80,
    &[
        (D4, -8), (G4, 16), (C5, -4),
        (B4, 8), (G4, -16), (E4, -16), (A4, -16),
        (D5, 2),
    ],
);

pub const BABY_ELEPHANT_WALK: Song = Song::new(
    "Baby Elephant Walk",
    132,
    &[
        (C4, -8), (E4, 16), (G4, 8), (C5, 8), (E5, 8), (D5, 8), (C5, 8), (A4, 8),
        (FS4, 8), (G4, 8), (REST, 4), (REST, 2),
        (C4, -8), (E4, 16), (G4, 8), (C5, 8), (E5, 8), (D5, 8), (C5, 8), (A4, 8),
        (G4, -2), (A4, 8), (DS4, 1),

        (A4, 8),
        (E4, 8), (C4, 8), (REST, 4), (REST, 2),
        (C4, -8), (E4, 16), (G4, 8), (C5, 8), (E5, 8), (D5, 8), (C5, 8), (A4, 8),
        (FS4, 8), (G4, 8), (REST, 4), (REST, 4), (REST, 8), (G4, 8),
        (D5, 4), (D5, 4), (B4, 8), (G4, 8), (REST, 8), (G4, 8),

        (C5, 4), (C5, 4), (AS4, 16), (C5, 16), (AS4, 16), (G4, 16), (F4, 8), (DS4, 8),
        (FS4, 4), (FS4, 4), (F4, 16), (G4, 16), (F4, 16), (DS4, 16), (C4, 8), (G4, 8),
        (AS4, 8), (C5, 8), (REST, 4), (REST, 2),
    ],
);

pub const PRINCE_IGOR: Song = Song::new(
    "Prince Igor - Polovtsian Dances",
    110,
    &[
        (G4, 4), (G4, 4), (D5, -2),
        (C5, 8), (D5, 8), (AS4, 4), (A4, 8), (G4, 8),
        (A4, 8), (AS4, 8), (C5, 1),

        (D5, 4), (A4, 4), (G4, 8), (F4, 8),
        (D4, 4), (D4, 4), (G4, -2),
        (A4, 4), (G4, 4), (F4, 8), (E4, 8),

        (F4, 4), (E4, 4), (D4, 1),
        (E4, 4), (F4, 4), (A4, 4),
        (G4, 4), (G4, 4), (AS4, -2),

        (C5, 4), (AS4, 4), (A4, 8), (G4, 8),
        (A4, 4), (AS4, 4), (C5, -2),
        (CS5, 4), (C5, 4), (A4, 4),

        (CS5, 4), (CS4, 4), (F5, -2),
        (G5, 4), (F5, 4), (DS4, 8), (CS4, 8),
        (F5, 2), (C5, -2),

        (AS4, 4), (C5, 4), (AS4, 8), (A4, 8),
        (G4, 4), (G4, 4), (AS4, 1),
        (C5, 4), (AS4, 4), (A4, 8), (G4, 8),

        (F4, 4), (G4, 4), (A4, 1),
        (AS4, 4), (A4, 4), (F4, 4),
        (G4, 4), (G4, 4), (D5, -2),

        (C5, 4), (AS4, 4), (A4, 8), (G4, 8),
        (A4, -1), (A4, -1), (REST, 2),
        (G4, 4), (G4, 4), (D5, -2),

        (C5, 8), (D5, 8), (AS4, 4), (A4, 8), (G4, 8),
        (A4, 8), (AS4, 8), (C5, 1),
        (C5, 8), (D5, 8), (C5, 4), (AS4, 8), (A4, 8),

        (D4, 4), (D4, 4), (G4, -2),
        (G4, 8), (A4, 8), (G4, 4), (F4, 8), (E4, 8),
        (F4, 8), (E4, 8), (D4, -2),

        (REST, 4), (C5, 8), (D5, 8), (C5, 4), (AS4, 8), (A4, 8),
        (G4, 4), (G4, 4), (B4, -2),
        (C5, 4), (AS4, 4), (A4, 8), (G4, 8),

        (A4, 4), (G4, 4), (F4, -1), (REST, 4),
        (G4, 4), (G4, 4), (D5, -2),
        (C5, 8), (D5, 8), (AS4, 4), (A4, 8), (G4, 8),

        (A4, 4), (G4, 4), (F4, -2),
        (A4, 4), (G4, 4), (F4, -2),
        (A4, 4), (G4, 4), (F4, -1),
    ],
);

pub const ALL: [Song; 7] = [
    HAPPY_BIRTHDAY,
    PINK_PANTHER,
    SILENT_NIGHT,
    THE_LICK,
    STAR_TREK_INTRO,
    BABY_ELEPHANT_WALK,
    PRINCE_IGOR,
];
