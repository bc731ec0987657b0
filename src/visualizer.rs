// A fake spectrum: one monophonic tone lights its band and splashes a bit
// onto the neighbours, and everything sinks back a little every tick.

use crate::shared::{NUM_BANDS, REST};

pub const BAND_MAX: u8 = 255;
pub const BAND_FLOOR: u8 = 25;
pub const DECAY_STEP: u8 = 50;

const NEIGHBOR_BOOST: u8 = 100;
const NEIGHBOR_CAP: u8 = 200;
const SECOND_NEIGHBOR_BOOST: u8 = 50;
const SECOND_NEIGHBOR_CAP: u8 = 175;

// Band edges in Hz, B0 up to DS8. Band i covers [EDGES[i], EDGES[i + 1]).
const BAND_EDGES: [u16; NUM_BANDS + 1] = [
    31,   // B0
    65,   // C2
    98,   // G2
    131,  // C3
    165,  // E3
    196,  // G3
    247,  // B3
    294,  // D4
    349,  // F4
    415,  // GS4
    494,  // B4
    587,  // D5
    698,  // F5
    831,  // GS5
    988,  // B5
    1319, // E6
    4978, // DS8
];

/// Which bar a frequency lights up. Anything outside the table clamps to
/// the first or last band; rests light nothing.
pub fn band_for(frequency: u16) -> Option<usize> {
    if frequency == REST {
        return None;
    }
    // number of edges <= frequency, minus one, is the band
    let above = BAND_EDGES.partition_point(|&edge| edge <= frequency);
    Some(above.saturating_sub(1).min(NUM_BANDS - 1))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visualizer {
    bands: [u8; NUM_BANDS],
}

impl Visualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bands(&self) -> &[u8; NUM_BANDS] {
        &self.bands
    }

    /// One tick: decay everything, then add energy for `frequency`.
    pub fn update(&mut self, frequency: u16) {
        for band in &mut self.bands {
            *band = band.saturating_sub(DECAY_STEP).max(BAND_FLOOR);
        }

        let Some(center) = band_for(frequency) else {
            return;
        };
        self.bands[center] = BAND_MAX;
        for offset in [1, 2] {
            let (boost, cap) = if offset == 1 {
                (NEIGHBOR_BOOST, NEIGHBOR_CAP)
            } else {
                (SECOND_NEIGHBOR_BOOST, SECOND_NEIGHBOR_CAP)
            };
            let neighbors = [center.checked_sub(offset), Some(center + offset)];
            for idx in neighbors.into_iter().flatten().filter(|&i| i < NUM_BANDS) {
                self.bands[idx] = self.bands[idx].saturating_add(boost).min(cap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::pitches::*;

    #[test]
    fn bands_follow_the_edge_table() {
        assert_eq!(band_for(REST), None);
        assert_eq!(band_for(B0), Some(0));
        assert_eq!(band_for(64), Some(0));
        assert_eq!(band_for(C2), Some(1));
        assert_eq!(band_for(C4), Some(6)); // 262 is in [247, 294)
        assert_eq!(band_for(A4), Some(9));
        assert_eq!(band_for(E6), Some(15));
        assert_eq!(band_for(DS8), Some(15));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(band_for(20), Some(0));
        assert_eq!(band_for(9000), Some(15));
    }

    #[test]
    fn band_mapping_is_monotonic() {
        let mut last = 0;
        for f in 1..6000u16 {
            let band = band_for(f).unwrap();
            assert!(band >= last, "{f} Hz went back to band {band}");
            last = band;
        }
    }

    #[test]
    fn note_lights_its_band_and_neighbors() {
        let mut viz = Visualizer::new();
        viz.update(A4); // band 9
        let b = viz.bands();
        assert_eq!(b[9], BAND_MAX);
        assert_eq!(b[8], BAND_FLOOR + NEIGHBOR_BOOST);
        assert_eq!(b[10], BAND_FLOOR + NEIGHBOR_BOOST);
        assert_eq!(b[7], BAND_FLOOR + SECOND_NEIGHBOR_BOOST);
        assert_eq!(b[11], BAND_FLOOR + SECOND_NEIGHBOR_BOOST);
        assert_eq!(b[0], BAND_FLOOR);
    }

    #[test]
    fn neighbor_boosts_stay_below_the_peak() {
        let mut viz = Visualizer::new();
        for _ in 0..10 {
            viz.update(A4);
        }
        let b = viz.bands();
        assert_eq!(b[9], BAND_MAX);
        assert_eq!(b[8], NEIGHBOR_CAP);
        // the second ring decays as fast as it is boosted
        assert_eq!(b[7], BAND_FLOOR + SECOND_NEIGHBOR_BOOST);
        assert!(b.iter().enumerate().all(|(i, &v)| i == 9 || v < BAND_MAX));
    }

    #[test]
    fn edges_of_the_range_skip_missing_neighbors() {
        let mut viz = Visualizer::new();
        viz.update(B0);
        assert_eq!(viz.bands()[0], BAND_MAX);
        assert_eq!(viz.bands()[1], BAND_FLOOR + NEIGHBOR_BOOST);
        viz.update(DS8);
        assert_eq!(viz.bands()[15], BAND_MAX);
        assert_eq!(viz.bands()[14], BAND_FLOOR + NEIGHBOR_BOOST);
    }

    #[test]
    fn rests_decay_to_the_floor() {
        let mut viz = Visualizer::new();
        viz.update(A4);
        for _ in 0..3 {
            viz.update(REST);
        }
        assert_eq!(viz.bands()[9], BAND_MAX - 3 * DECAY_STEP);
        for _ in 0..10 {
            viz.update(REST);
        }
        assert!(viz.bands().iter().all(|&v| v == BAND_FLOOR));
    }
}
