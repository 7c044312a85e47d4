use crate::hex::{FractionalHex, Hex};
use log::trace;
use std::{iter::FusedIterator, ops::Range};

/// A straight line of cells between two endpoints, produced lazily. Created
/// via [Hex::line_to].
///
/// For two cells `N` steps apart, the line samples `N + 1` evenly spaced points
/// along the segment between the two centers and rounds each one to the cell
/// that contains it. The first cell is always the start and the last is always
/// the end, so a line from a cell to itself is just that one cell.
///
/// The iterator is cheap to copy, so clone it if you need to walk the same line
/// more than once.
#[derive(Clone, Debug)]
pub struct HexLine {
    start: FractionalHex,
    end: FractionalHex,
    /// Interpolation distance between consecutive samples
    step: f64,
    /// Indexes of the samples that haven't been yielded yet
    remaining: Range<u32>,
}

impl HexLine {
    pub(super) fn new(start: Hex, end: Hex) -> Self {
        let distance = start.distance_to(end);
        trace!(
            "Drawing line from {} to {} ({} cells)",
            start,
            end,
            distance + 1
        );
        Self {
            start: start.into(),
            end: end.into(),
            // Don't divide by zero for a single-cell line
            step: 1.0 / distance.max(1) as f64,
            remaining: 0..(distance + 1),
        }
    }

    fn sample(&self, index: u32) -> Hex {
        self.start.lerp(self.end, self.step * index as f64).round()
    }
}

impl Iterator for HexLine {
    type Item = Hex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remaining.next()?;
        Some(self.sample(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl DoubleEndedIterator for HexLine {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.remaining.next_back()?;
        Some(self.sample(index))
    }
}

impl ExactSizeIterator for HexLine {}

impl FusedIterator for HexLine {}
