use alloc::vec::Vec;

/// Reads the laid-out height of a rendered row.
///
/// `row` is the position inside the window (0 is the row at `top_offset`), not a dataset
/// index. Implementations must report the layout the host currently shows; the engine only
/// asks for rows that were part of the last committed render.
///
/// Closures, slices and vectors of heights implement this trait, which keeps unit tests free of
/// any UI toolkit.
pub trait RowMeasurer {
    fn row_height(&self, row: usize) -> u32;
}

impl<F: Fn(usize) -> u32> RowMeasurer for F {
    fn row_height(&self, row: usize) -> u32 {
        self(row)
    }
}

impl RowMeasurer for [u32] {
    fn row_height(&self, row: usize) -> u32 {
        self.get(row).copied().unwrap_or(0)
    }
}

impl<const N: usize> RowMeasurer for [u32; N] {
    fn row_height(&self, row: usize) -> u32 {
        self.as_slice().row_height(row)
    }
}

impl RowMeasurer for Vec<u32> {
    fn row_height(&self, row: usize) -> u32 {
        self.as_slice().row_height(row)
    }
}

/// A measurer reporting the same height for every row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformHeight(pub u32);

impl RowMeasurer for UniformHeight {
    fn row_height(&self, _row: usize) -> u32 {
        self.0
    }
}
