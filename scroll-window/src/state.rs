use crate::{HeightLedger, Window};

/// Scroll compensation owed to the viewport once the host renders the latest top-edge change.
///
/// `known_shift` is the part of the shift already known when the mutation ran (spacer change
/// minus the height of removed rows). The height of freshly inserted rows is only known after
/// they are laid out, so they are measured when the correction is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingCorrection {
    /// Leading rows of the window that were inserted and still need measuring.
    pub inserted_rows: usize,
    pub known_shift: i64,
}

/// A lightweight, comparable snapshot of the window state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    pub count: usize,
    pub window: Window,
    pub top_spacer: u64,
    pub scroll_pointer: u64,
    pub ledger_len: usize,
    pub ledger_total: u64,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct WindowState {
    pub(crate) count: usize,
    pub(crate) window: Window,
    pub(crate) ledger: HeightLedger,
    pub(crate) top_spacer: u64,
    pub(crate) scroll_pointer: u64,
    pub(crate) pending: Option<PendingCorrection>,
}

impl WindowState {
    /// Initial state for a freshly attached dataset: the first `max_window_size` rows.
    pub(crate) fn attached(count: usize, max_window_size: usize) -> Self {
        Self {
            count,
            window: Window {
                top_offset: 0,
                bottom_offset: max_window_size.min(count),
            },
            ..Self::default()
        }
    }

    pub(crate) fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            count: self.count,
            window: self.window,
            top_spacer: self.top_spacer,
            scroll_pointer: self.scroll_pointer,
            ledger_len: self.ledger.len(),
            ledger_total: self.ledger.total(),
        }
    }

    pub(crate) fn debug_check_invariants(&self) {
        debug_assert!(
            self.window.top_offset <= self.window.bottom_offset,
            "window inverted (top={}, bottom={})",
            self.window.top_offset,
            self.window.bottom_offset
        );
        debug_assert!(
            self.window.bottom_offset <= self.count,
            "window past dataset end (bottom={}, count={})",
            self.window.bottom_offset,
            self.count
        );
    }
}
