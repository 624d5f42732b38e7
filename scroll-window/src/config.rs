use crate::Edge;

/// Errors reported by [`WindowConfig::validate`].
///
/// The engine itself accepts any configuration; validation is opt-in for callers that want to
/// reject setups known to make the window oscillate near its size cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_window_size must be at least 1")]
    ZeroWindowSize,
    #[error(
        "{edge:?} threshold ({threshold}) exceeds max_window_size ({max_window_size})"
    )]
    ThresholdExceedsWindow {
        edge: Edge,
        threshold: usize,
        max_window_size: usize,
    },
}

/// Configuration for [`crate::WindowEngine`].
///
/// Thresholds form a hysteresis band: rows are added at an edge once fewer than `*_threshold`
/// rendered rows remain hidden past it, and the window is trimmed back once it grows beyond
/// `max_window_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Upper bound on rendered rows after a trim. Also the size of the initial window.
    ///
    /// Pick it so the initial window is taller than the viewport. While the rendered rows are
    /// shorter than the viewport every notification counts as scrolling up, so at the start of
    /// the dataset nothing is appended and the window stays at its initial size.
    pub max_window_size: usize,
    /// Rows restored at the top when the hidden buffer above the viewport runs low.
    pub top_threshold: usize,
    /// Rows appended at the bottom when the hidden buffer below the viewport runs low.
    pub bottom_threshold: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_window_size: 20,
            top_threshold: 3,
            bottom_threshold: 3,
        }
    }
}

impl WindowConfig {
    pub fn new(max_window_size: usize) -> Self {
        Self {
            max_window_size,
            ..Self::default()
        }
    }

    pub fn with_max_window_size(mut self, max_window_size: usize) -> Self {
        self.max_window_size = max_window_size;
        self
    }

    pub fn with_top_threshold(mut self, top_threshold: usize) -> Self {
        self.top_threshold = top_threshold;
        self
    }

    pub fn with_bottom_threshold(mut self, bottom_threshold: usize) -> Self {
        self.bottom_threshold = bottom_threshold;
        self
    }

    pub fn with_thresholds(mut self, top_threshold: usize, bottom_threshold: usize) -> Self {
        self.top_threshold = top_threshold;
        self.bottom_threshold = bottom_threshold;
        self
    }

    /// Largest window a single policy decision can leave behind.
    pub fn peak_window_size(&self) -> usize {
        self.max_window_size
            .saturating_add(self.top_threshold.max(self.bottom_threshold))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }
        for (edge, threshold) in [
            (Edge::Top, self.top_threshold),
            (Edge::Bottom, self.bottom_threshold),
        ] {
            if threshold > self.max_window_size {
                return Err(ConfigError::ThresholdExceedsWindow {
                    edge,
                    threshold,
                    max_window_size: self.max_window_size,
                });
            }
        }
        Ok(())
    }
}
