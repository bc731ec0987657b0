/// One compiled-in melody.
///
/// `notes` holds `(pitch_code, duration_code)` pairs. A pitch of 0 is a rest.
/// A positive duration code `n` is a 1/n note, a negative one is the dotted
/// 1/|n| note (1.5x as long). `Catalog::new` rejects songs that break these
/// rules, so a `Song` that made it into a catalog is always playable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Song {
    pub name: &'static str,
    pub tempo: u16, // beats per minute
    pub notes: &'static [(u16, i16)],
}

impl Song {
    pub const fn new(name: &'static str, tempo: u16, notes: &'static [(u16, i16)]) -> Self {
        Self { name, tempo, notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn pitch(&self, idx: usize) -> Option<u16> {
        self.notes.get(idx).map(|&(pitch, _)| pitch)
    }

    pub fn duration_code(&self, idx: usize) -> Option<i16> {
        self.notes.get(idx).map(|&(_, code)| code)
    }
}
