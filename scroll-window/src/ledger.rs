use alloc::vec::Vec;

/// LIFO record of the heights of rows trimmed from the top of the window.
///
/// The most recently trimmed row sits on top, so restoring rows at the top pops heights in
/// exact reverse order of their removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeightLedger {
    heights: Vec<u32>,
    total: u64,
}

impl HeightLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Sum of every recorded height.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn peek(&self) -> Option<u32> {
        self.heights.last().copied()
    }

    pub fn push(&mut self, height: u32) {
        self.heights.push(height);
        self.total = self.total.saturating_add(height as u64);
    }

    pub fn pop(&mut self) -> Option<u32> {
        let height = self.heights.pop()?;
        self.total = self.total.saturating_sub(height as u64);
        Some(height)
    }

    /// Pops up to `count` heights and returns their sum.
    ///
    /// Missing entries count as zero height.
    pub fn pop_many(&mut self, count: usize) -> u64 {
        let mut reclaimed = 0u64;
        for _ in 0..count {
            let Some(height) = self.pop() else {
                break;
            };
            reclaimed = reclaimed.saturating_add(height as u64);
        }
        reclaimed
    }

    pub fn clear(&mut self) {
        self.heights.clear();
        self.total = 0;
    }

    /// Recorded heights, oldest first.
    pub fn as_slice(&self) -> &[u32] {
        &self.heights
    }
}
