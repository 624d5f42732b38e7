use crate::{Direction, Observation, RowMeasurer, ScrollNotification};

/// Classifies the rendered rows against the viewport.
///
/// Rows are laid out below a spacer of `top_spacer` height, so the viewport's top edge, in the
/// coordinate space of the first rendered row, is `scroll_offset - top_spacer` (which may be
/// negative while the spacer is still visible).
///
/// - A row is *top-invisible* when its bottom edge lies strictly above the viewport's top edge.
///   Only the contiguous run starting at the window's first row is counted.
/// - A row is *bottom-invisible* when its top edge lies strictly below the viewport's bottom
///   edge.
/// - The direction is `Up` when the offset decreased since `scroll_pointer`, `Down` otherwise.
///   When the rendered rows do not fill the viewport there is nothing to scroll, and the
///   direction is forced to `Up` so the window backfills from the top instead of trimming.
///
/// This is a single pass over `rows` measurements.
pub fn observe<M: RowMeasurer + ?Sized>(
    notification: ScrollNotification,
    top_spacer: u64,
    scroll_pointer: u64,
    rows: usize,
    measurer: &M,
) -> Observation {
    let view_top = to_signed(notification.scroll_offset).saturating_sub(to_signed(top_spacer));
    let view_bottom = view_top.saturating_add(notification.viewport_height as i64);

    let mut running = 0i64;
    let mut top_invisible = 0usize;
    let mut counting_top = true;
    let mut bottom_invisible = 0usize;

    for row in 0..rows {
        let height = measurer.row_height(row) as i64;

        if counting_top {
            if running.saturating_add(height) < view_top {
                top_invisible += 1;
            } else {
                counting_top = false;
            }
        }

        if running > view_bottom {
            bottom_invisible += 1;
        }

        running = running.saturating_add(height);
    }

    let content_height = running.max(0) as u64;
    let underfilled = content_height < notification.viewport_height as u64;
    let direction = if underfilled || notification.scroll_offset < scroll_pointer {
        Direction::Up
    } else {
        Direction::Down
    };

    Observation {
        top_invisible,
        bottom_invisible,
        direction,
        content_height,
    }
}

fn to_signed(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
