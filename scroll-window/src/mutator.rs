use crate::RowMeasurer;
use crate::state::{PendingCorrection, WindowState};

// Edge primitives. Each one leaves the state consistent on return and reports how many rows it
// actually added or removed.
impl WindowState {
    /// Restores up to `count` rows above the window.
    ///
    /// The spacer gives back the heights popped from the ledger. If the ledger holds fewer than
    /// `count` entries the missing heights count as zero, which can leave the spacer overstated.
    pub(crate) fn add_top_items(&mut self, count: usize) -> usize {
        let n = count.min(self.window.top_offset);
        if n == 0 {
            return 0;
        }

        let reclaimed = self.ledger.pop_many(count);
        self.top_spacer = self.top_spacer.saturating_sub(reclaimed);
        self.window.top_offset -= n;

        self.queue_correction(n, -shift(reclaimed));
        wtrace!(
            added = n,
            reclaimed,
            top_offset = self.window.top_offset,
            top_spacer = self.top_spacer,
            "add_top_items"
        );
        n
    }

    /// Trims up to `count` rows from the top of the window.
    ///
    /// Rows are measured before they are dropped; their heights move onto the ledger and into
    /// the spacer, so content below keeps its position.
    pub(crate) fn remove_top_items<M: RowMeasurer + ?Sized>(
        &mut self,
        count: usize,
        measurer: &M,
    ) -> usize {
        let n = count.min(self.window.len());
        if n == 0 {
            return 0;
        }

        // Leading rows restored since the last render are not laid out yet.
        let unrendered = self.pending.map_or(0, |p| p.inserted_rows).min(n);
        let mut freed = 0u64;
        let mut unrendered_freed = 0u64;
        for row in 0..n {
            let height = measurer.row_height(row);
            self.ledger.push(height);
            freed = freed.saturating_add(height as u64);
            if row < unrendered {
                unrendered_freed = unrendered_freed.saturating_add(height as u64);
            }
        }
        self.top_spacer = self.top_spacer.saturating_add(freed);
        self.window.top_offset += n;

        // Rendered rows leave the layout as the spacer grows by their height, so they shift
        // nothing. Unrendered rows never entered it; their share of the spacer growth does shift.
        self.queue_removal(unrendered, shift(unrendered_freed));
        wtrace!(
            removed = n,
            freed,
            top_offset = self.window.top_offset,
            top_spacer = self.top_spacer,
            "remove_top_items"
        );
        n
    }

    pub(crate) fn add_bottom_items(&mut self, count: usize) -> usize {
        let bottom = self.window.bottom_offset;
        let next = bottom.saturating_add(count).min(self.count);
        if next <= bottom {
            return 0;
        }
        self.window.bottom_offset = next;
        wtrace!(added = next - bottom, bottom_offset = next, "add_bottom_items");
        next - bottom
    }

    pub(crate) fn remove_bottom_items(&mut self, count: usize) -> usize {
        let n = count.min(self.window.len());
        if n == 0 {
            return 0;
        }
        self.window.bottom_offset -= n;
        wtrace!(
            removed = n,
            bottom_offset = self.window.bottom_offset,
            "remove_bottom_items"
        );
        n
    }

    fn queue_correction(&mut self, inserted_rows: usize, known_shift: i64) {
        let pending = self.pending.get_or_insert_with(PendingCorrection::default);
        pending.inserted_rows = pending.inserted_rows.saturating_add(inserted_rows);
        pending.known_shift = pending.known_shift.saturating_add(known_shift);
    }

    fn queue_removal(&mut self, unrendered_rows: usize, unrendered_shift: i64) {
        let pending = self.pending.get_or_insert_with(PendingCorrection::default);
        if unrendered_rows > 0 {
            wwarn!(
                unrendered_rows,
                inserted_rows = pending.inserted_rows,
                "remove_top_items before the previous insertion was rendered"
            );
        }
        pending.inserted_rows = pending.inserted_rows.saturating_sub(unrendered_rows);
        pending.known_shift = pending.known_shift.saturating_add(unrendered_shift);
    }
}

fn shift(height: u64) -> i64 {
    i64::try_from(height).unwrap_or(i64::MAX)
}
