use crate::state::WindowState;
use crate::{RowMeasurer, ScrollCorrection};

impl WindowState {
    /// Resolves the pending correction against the freshly rendered layout.
    ///
    /// The correction is the exact shift of content at the top edge: the known spacer/removal
    /// shift plus the measured height of rows inserted above the old first row. Applying it
    /// keeps the row the user was looking at in place.
    pub(crate) fn take_correction<M: RowMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        viewport_offset: u64,
    ) -> Option<ScrollCorrection> {
        let pending = self.pending.take()?;

        let inserted = pending.inserted_rows.min(self.window.len());
        let mut inserted_height = 0i64;
        for row in 0..inserted {
            inserted_height = inserted_height.saturating_add(measurer.row_height(row) as i64);
        }
        let delta = pending.known_shift.saturating_add(inserted_height);

        let to = if delta >= 0 {
            viewport_offset.saturating_add(delta as u64)
        } else {
            viewport_offset.saturating_sub(delta.unsigned_abs())
        };
        self.scroll_pointer = to;

        wtrace!(
            from = viewport_offset,
            to,
            delta,
            inserted_rows = inserted,
            "take_correction"
        );
        Some(ScrollCorrection {
            from: viewport_offset,
            to,
            delta,
        })
    }
}
