use crate::core::alphabet::State;
use crate::core::error::SeqError;

/// Fixed plotting color per grid state, external to the engine.
///
/// Index i colors the state at alphabet index i (`A`..`P`), one hue family
/// per grid row, darkening with the column.
pub const STATE_COLORS: [&str; 16] = [
    "#deebf7", "#9ecae1", "#4292c6", "#08519c", // row A-D
    "#e5f5e0", "#a1d99b", "#41ab5d", "#006d2c", // row E-H
    "#fee6ce", "#fdae6b", "#f16913", "#8c2d04", // row I-L
    "#fde0ef", "#f1b6da", "#de77ae", "#8e0152", // row M-P
];

/// Maps a bivariate observation to one of 16 grid-cell states using three
/// ascending cut-points shared by both axes.
///
/// The cut-points are explicit configuration held by the labeler; the same
/// three thresholds partition each axis into 4 bins, and the cell index is
/// `bin(v1) * 4 + bin(v2)` (row-major over the 4x4 grid, matching
/// [`crate::StateAlphabet::grid16`]).
#[derive(Debug, Clone)]
pub struct GridLabeler {
    cuts: [f64; 3],
}

impl GridLabeler {
    /// Create a labeler from three strictly ascending, finite cut-points.
    pub fn new(c1: f64, c2: f64, c3: f64) -> Result<Self, SeqError> {
        let finite = c1.is_finite() && c2.is_finite() && c3.is_finite();
        if !finite || !(c1 < c2 && c2 < c3) {
            return Err(SeqError::InvalidCutPoints(c1, c2, c3));
        }
        Ok(Self { cuts: [c1, c2, c3] })
    }

    /// Bin a single value: 0 below c1, 1 in [c1, c2), 2 in [c2, c3), 3 at or
    /// above c3.
    #[inline]
    fn bin(&self, v: f64) -> u8 {
        let [c1, c2, c3] = self.cuts;
        if v < c1 {
            0
        } else if v < c2 {
            1
        } else if v < c3 {
            2
        } else {
            3
        }
    }

    /// Label one time step. Pure; a non-finite operand yields
    /// [`State::Missing`], distinct from all 16 grid states.
    #[inline]
    pub fn label(&self, v1: f64, v2: f64) -> State {
        if !v1.is_finite() || !v2.is_finite() {
            return State::Missing;
        }
        State::Obs(self.bin(v1) * 4 + self.bin(v2))
    }
}
