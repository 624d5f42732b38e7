use scroll_window::{
    RowMeasurer, ScrollCorrection, ScrollNotification, ScrollOutcome, WindowConfig, WindowEngine,
};

/// Default minimum spacing between two window decisions (roughly one 60 Hz frame).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// A framework-neutral controller that wraps a `scroll_window::WindowEngine` and rate-limits
/// it to one decision per frame.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur (cheap; only the latest is kept)
/// - `tick(now_ms, rows)` each frame/timer tick, which runs at most one decision
/// - `after_render(rows, offset)` once the window is laid out, applying the returned
///   correction (if any) to the real scroll container
#[derive(Clone, Debug)]
pub struct Controller {
    engine: WindowEngine,
    frame_interval_ms: u64,
    viewport_height: u32,
    scroll_offset: u64,
    queued: Option<ScrollNotification>,
    last_decision_ms: Option<u64>,
}

impl Controller {
    pub fn new(config: WindowConfig, count: usize) -> Self {
        Self::from_engine(WindowEngine::new(config, count))
    }

    pub fn from_engine(engine: WindowEngine) -> Self {
        Self {
            engine,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            viewport_height: 0,
            scroll_offset: 0,
            queued: None,
            last_decision_ms: None,
        }
    }

    pub fn with_frame_interval_ms(mut self, frame_interval_ms: u64) -> Self {
        self.frame_interval_ms = frame_interval_ms;
        self
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    pub fn engine(&self) -> &WindowEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut WindowEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> WindowEngine {
        self.engine
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// The last scroll offset reported by the host (or set by a correction).
    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Whether a notification is waiting for the next `tick`.
    pub fn has_queued(&self) -> bool {
        self.queued.is_some()
    }

    /// Call this when the viewport is resized.
    ///
    /// A resize changes what is hidden past each edge, so it queues a notification at the
    /// current offset. Growing the viewport past the rendered rows does not grow the window
    /// at the start of the dataset (see `WindowConfig::max_window_size`). Fill it with
    /// `engine_mut().add_bottom_items`, or raise `max_window_size` and `reset`.
    pub fn on_viewport_size(&mut self, viewport_height: u32) {
        if self.viewport_height == viewport_height {
            return;
        }
        adebug!(
            from = self.viewport_height,
            to = viewport_height,
            "on_viewport_size"
        );
        self.viewport_height = viewport_height;
        self.queue(ScrollNotification::new(self.scroll_offset, viewport_height));
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// Nothing is measured until the next `tick`; a newer event replaces an older one.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        self.scroll_offset = scroll_offset;
        self.queue(ScrollNotification::new(scroll_offset, self.viewport_height));
    }

    fn queue(&mut self, notification: ScrollNotification) {
        if self.queued.replace(notification).is_some() {
            atrace!(
                scroll_offset = notification.scroll_offset,
                "coalesced scroll notification"
            );
        }
    }

    /// Advances the controller.
    ///
    /// Hands the latest queued notification to the engine if at least `frame_interval_ms`
    /// passed since the previous decision, and returns the engine's outcome. A notification
    /// the engine defers (its last mutation is not rendered yet) stays queued.
    pub fn tick<M: RowMeasurer + ?Sized>(
        &mut self,
        now_ms: u64,
        rows: &M,
    ) -> Option<ScrollOutcome> {
        let interval = self.frame_interval_ms;
        if self
            .last_decision_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < interval)
        {
            return None;
        }
        let notification = self.queued.take()?;

        let outcome = self.engine.on_scroll(notification, rows);
        match outcome {
            ScrollOutcome::Deferred => {
                self.queued.get_or_insert(notification);
            }
            ScrollOutcome::Decided(_) => self.last_decision_ms = Some(now_ms),
            ScrollOutcome::Echo => {}
        }
        Some(outcome)
    }

    /// Call this once the current window has been laid out.
    ///
    /// `rows` measures the freshly rendered rows and `viewport_offset` is the real scroll
    /// offset right now. Returns the correction to apply to the scroll container, if the top
    /// edge changed. A queued notification taken before the correction is dropped; the host's
    /// echo of the correction replaces it.
    pub fn after_render<M: RowMeasurer + ?Sized>(
        &mut self,
        rows: &M,
        viewport_offset: u64,
    ) -> Option<ScrollCorrection> {
        self.scroll_offset = viewport_offset;
        let correction = self.engine.commit_render(rows, viewport_offset)?;
        if !correction.is_noop() {
            self.scroll_offset = correction.to;
            if self.queued.take().is_some() {
                atrace!(
                    to = correction.to,
                    "dropped notification queued before correction"
                );
            }
        }
        Some(correction)
    }

    /// Replaces the dataset. The window returns to the top and queued events are dropped.
    pub fn reset(&mut self, count: usize) {
        adebug!(count, "Controller::reset");
        self.queued = None;
        self.scroll_offset = 0;
        self.last_decision_ms = None;
        self.engine.reset(count);
    }
}
