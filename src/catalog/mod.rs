use thiserror::Error;

pub mod pitches;
mod song;
mod songs;

pub use song::Song;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the catalog has no songs")]
    Empty,

    #[error("song {index} ({name:?}) has no notes")]
    EmptySong { index: usize, name: &'static str },

    #[error("song {index} ({name:?}) has a tempo of 0")]
    ZeroTempo { index: usize, name: &'static str },

    #[error("song {index} ({name:?}): note {note} has duration code 0")]
    ZeroDuration {
        index: usize,
        name: &'static str,
        note: usize,
    },
}

/// The ordered, read-only list of songs the box can play.
#[derive(Clone, Debug)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Validates every song up front. After this, the player never has to
    /// worry about empty songs, zero tempos, or zero duration codes.
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogError> {
        if songs.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, song) in songs.iter().enumerate() {
            let name = song.name;
            if song.is_empty() {
                return Err(CatalogError::EmptySong { index, name });
            }
            if song.tempo == 0 {
                return Err(CatalogError::ZeroTempo { index, name });
            }
            if let Some(note) = song.notes.iter().position(|&(_, code)| code == 0) {
                return Err(CatalogError::ZeroDuration { index, name, note });
            }
        }
        Ok(Self { songs })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(songs::ALL.to_vec())
    }

    // skips validation so the player's own guards can be exercised
    #[cfg(test)]
    pub(crate) fn unchecked(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Note count of the longest song, for sizing the timeline buffer once.
    pub fn longest(&self) -> usize {
        self.songs.iter().map(Song::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::pitches::*;
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get(3).unwrap().name, "The Lick");
        assert_eq!(catalog.get(3).unwrap().tempo, 108);
        assert_eq!(catalog.get(3).unwrap().len(), 7);
        assert!(catalog.get(7).is_none());
    }

    #[test]
    fn longest_song_sets_buffer_size() {
        let catalog = Catalog::builtin().unwrap();
        let longest = catalog.songs().iter().map(|s| s.notes.len()).max().unwrap();
        assert_eq!(catalog.longest(), longest);
        assert!(catalog.longest() > 100); // Prince Igor
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn rejects_empty_song() {
        let songs = vec![Song::new("ok", 120, &[(C4, 4)]), Song::new("hollow", 120, &[])];
        assert_eq!(
            Catalog::new(songs).unwrap_err(),
            CatalogError::EmptySong { index: 1, name: "hollow" }
        );
    }

    #[test]
    fn rejects_zero_duration_code() {
        let songs = vec![Song::new("bad", 120, &[(C4, 4), (D4, 0)])];
        let err = Catalog::new(songs).unwrap_err();
        assert_eq!(err, CatalogError::ZeroDuration { index: 0, name: "bad", note: 1 });
        assert_eq!(err.to_string(), "song 0 (\"bad\"): note 1 has duration code 0");
    }

    #[test]
    fn rejects_zero_tempo() {
        let songs = vec![Song::new("still", 0, &[(C4, 4)])];
        assert_eq!(
            Catalog::new(songs).unwrap_err(),
            CatalogError::ZeroTempo { index: 0, name: "still" }
        );
    }
}
