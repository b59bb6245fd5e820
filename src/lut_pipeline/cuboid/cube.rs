use tracing::{debug, warn};

use crate::lut_pipeline::common::config::Traversal;
use crate::lut_pipeline::common::error::{LutError, Result};
use crate::lut_pipeline::parse::types::{ColorSequence, ColorTriple};

/// A `side`×`side`×`side` grid of LUT entries addressed by `(i, j, k)`.
///
/// Entries are stored flat with `k` varying fastest, so position `(i, j, k)`
/// holds `sequence[i * side² + j * side + k]` of the sequence it was built from.
#[derive(Debug, Clone)]
pub struct Cuboid {
    side: usize,
    entries: Vec<ColorTriple>,
}

impl Cuboid {
    /// Places the first `side³` entries of `sequence` into a cube.
    ///
    /// # Errors
    ///
    /// * `LutError::InvalidSide` - `side` is zero or `side³` overflows
    /// * `LutError::InsufficientData` - the sequence holds fewer than `side³` entries
    pub fn from_sequence(sequence: ColorSequence, side: usize) -> Result<Self> {
        let expected = match side.checked_pow(3) {
            Some(count) if side > 0 => count,
            _ => return Err(LutError::InvalidSide(side)),
        };

        let actual = sequence.len();
        if actual < expected {
            return Err(LutError::InsufficientData { expected, actual });
        }
        if actual > expected {
            warn!("Ignoring {} entries beyond the {} needed for a {}^3 cube", actual - expected, expected, side);
        }

        let mut entries = sequence.into_entries();
        entries.truncate(expected);

        debug!("Built {}x{}x{} cube", side, side, side);
        Ok(Self { side, entries })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at cube position `(i, j, k)`, or `None` when any index is out of range.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&ColorTriple> {
        if i >= self.side || j >= self.side || k >= self.side {
            return None;
        }
        self.entries.get(self.index(i, j, k))
    }

    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        i * self.side * self.side + j * self.side + k
    }

    /// Visits every position once with `i` outermost and `k` innermost.
    ///
    /// `Rgb` yields `cube[i][j][k]` at each step, `Bgr` yields `cube[k][j][i]`.
    pub fn traverse(&self, order: Traversal) -> impl Iterator<Item = &ColorTriple> + '_ {
        let side = self.side;
        (0..side)
            .flat_map(move |i| (0..side).flat_map(move |j| (0..side).map(move |k| (i, j, k))))
            .map(move |(i, j, k)| match order {
                Traversal::Rgb => &self.entries[self.index(i, j, k)],
                Traversal::Bgr => &self.entries[self.index(k, j, i)],
            })
    }
}
