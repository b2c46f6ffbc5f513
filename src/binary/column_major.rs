//! REXPaint stores cells column by column: the vertical axis varies fastest.
//! Everything that maps between a stored record index and a grid coordinate
//! goes through here.

use itertools::{iproduct, Itertools};

/// Grid coordinate of the record stored at `index` in a layer `height` cells tall.
///
/// `height` must be non-zero; a layer with zero height has no records.
pub fn stored_to_xy(index: usize, height: usize) -> (usize, usize) {
    (index / height, index % height)
}

/// Stored record index of the cell at `(x, y)` in a layer `height` cells tall.
pub fn xy_to_stored(x: usize, y: usize, height: usize) -> usize {
    x * height + y
}

/// All coordinates of a `width` x `height` grid in stored order (x outer, y inner).
pub fn stored_order(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    iproduct!(0..width, 0..height)
}

/// Row-major slot (`x + y * width`) for every stored record index.
pub fn row_major_slots(width: usize, height: usize) -> Vec<usize> {
    stored_order(width, height)
        .map(|(x, y)| x + y * width)
        .collect_vec()
}
