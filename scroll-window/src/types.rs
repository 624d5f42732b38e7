use core::ops::Range;

/// The rendered slice of the dataset as a half-open index range `[top_offset, bottom_offset)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub top_offset: usize,
    pub bottom_offset: usize, // exclusive
}

impl Window {
    pub fn len(&self) -> usize {
        self.bottom_offset.saturating_sub(self.top_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.top_offset >= self.bottom_offset
    }

    pub fn range(&self) -> Range<usize> {
        self.top_offset..self.bottom_offset
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.top_offset && index < self.bottom_offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
}

/// Raw viewport metrics reported by the host on every scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollNotification {
    /// Scroll offset of the viewport, spacer included.
    pub scroll_offset: u64,
    pub viewport_height: u32,
}

impl ScrollNotification {
    pub fn new(scroll_offset: u64, viewport_height: u32) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }
}

/// How the currently rendered rows sit relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Rows from the top edge of the window that are entirely above the viewport.
    pub top_invisible: usize,
    /// Rows whose top edge is below the bottom of the viewport.
    pub bottom_invisible: usize,
    pub direction: Direction,
    /// Sum of the measured heights of all rendered rows.
    pub content_height: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowOp {
    AddTop,
    RemoveTop,
    AddBottom,
    RemoveBottom,
}

impl WindowOp {
    pub fn edge(self) -> Edge {
        match self {
            Self::AddTop | Self::RemoveTop => Edge::Top,
            Self::AddBottom | Self::RemoveBottom => Edge::Bottom,
        }
    }
}

/// A primitive invoked by the window policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    pub op: WindowOp,
    pub requested: usize,
    /// Rows actually added or removed after clamping.
    pub applied: usize,
}

/// A one-shot scroll offset command for the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCorrection {
    pub from: u64,
    pub to: u64,
    pub delta: i64,
}

impl ScrollCorrection {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Lifecycle phase of the engine.
///
/// `Measuring` only lasts while a notification is being observed and no callback runs during
/// it, so hosts never see it. `Mutating` is what an `on_change` callback sees during a scroll
/// decision. Between notifications the engine is `Idle`, or `Correcting` while a correction
/// waits for the next `commit_render`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Measuring,
    Mutating,
    Correcting,
}
