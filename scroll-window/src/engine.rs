use alloc::sync::Arc;
use core::cell::Cell;
use core::ops::Range;

use crate::observer;
use crate::state::{PendingCorrection, WindowSnapshot, WindowState};
use crate::{
    Decision, HeightLedger, Observation, Phase, RowMeasurer, ScrollCorrection, ScrollNotification,
    ScrollOutcome, Window, WindowConfig,
};

/// A callback fired after the window state changes.
///
/// Hosts typically use it to schedule a re-render.
pub type OnChangeCallback = Arc<dyn Fn(&WindowEngine) + Send + Sync>;

/// A headless, bidirectional windowing engine for long lists.
///
/// The engine keeps a sliding window `[top_offset, bottom_offset)` over a dataset of `count`
/// items and grows or trims it as the viewport scrolls. Rows trimmed from the top are replaced
/// by a spacer of the same height so content below does not move.
///
/// It holds no UI objects and no item data. A host drives it with:
/// 1. [`Self::on_scroll`] for every scroll event, together with a [`RowMeasurer`] for the rows
///    it currently shows;
/// 2. a render of [`Self::rendered_range`] below a spacer of [`Self::top_spacer`] height;
/// 3. [`Self::commit_render`] once that render is laid out, applying the returned
///    [`ScrollCorrection`] (if any) to the viewport.
///
/// Notifications that arrive between a mutation and its `commit_render` are deferred, so the
/// engine never measures a layout that no longer matches its window.
#[derive(Clone)]
pub struct WindowEngine {
    config: WindowConfig,
    state: WindowState,
    phase: Phase,
    render_pending: bool,
    echo: Option<u64>,
    on_change: Option<OnChangeCallback>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl WindowEngine {
    /// Attaches to a dataset of `count` items. The initial window holds the first
    /// `config.max_window_size` items.
    pub fn new(config: WindowConfig, count: usize) -> Self {
        wdebug!(
            count,
            max_window_size = config.max_window_size,
            top_threshold = config.top_threshold,
            bottom_threshold = config.bottom_threshold,
            "WindowEngine::new"
        );
        let state = WindowState::attached(count, config.max_window_size);
        Self {
            config,
            state,
            phase: Phase::Idle,
            render_pending: false,
            echo: None,
            on_change: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&WindowEngine) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&WindowEngine) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Replaces the configuration. The current window is kept; the new limits apply from the
    /// next scroll decision.
    pub fn set_config(&mut self, config: WindowConfig) {
        if self.config == config {
            return;
        }
        wdebug!(
            max_window_size = config.max_window_size,
            top_threshold = config.top_threshold,
            bottom_threshold = config.bottom_threshold,
            "set_config"
        );
        self.config = config;
    }

    /// Clones the current configuration, applies `f`, then delegates to `set_config`.
    pub fn update_config(&mut self, f: impl FnOnce(&mut WindowConfig)) {
        let mut next = self.config;
        f(&mut next);
        self.set_config(next);
    }

    /// Replaces the dataset wholesale.
    ///
    /// The window returns to the first `max_window_size` items, and the ledger, spacer, scroll
    /// pointer and any pending correction are dropped. The host is expected to render the new
    /// window from the top.
    pub fn reset(&mut self, count: usize) {
        wdebug!(
            count,
            previous_count = self.state.count,
            dropped_ledger = self.state.ledger.len(),
            "reset"
        );
        self.state = WindowState::attached(count, self.config.max_window_size);
        self.phase = Phase::Idle;
        self.render_pending = false;
        self.echo = None;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Useful when a host drives several edge primitives directly, e.g. trimming one edge and
    /// growing the other in response to a jump.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Number of items in the attached dataset.
    pub fn count(&self) -> usize {
        self.state.count
    }

    pub fn window(&self) -> Window {
        self.state.window
    }

    pub fn top_offset(&self) -> usize {
        self.state.window.top_offset
    }

    pub fn bottom_offset(&self) -> usize {
        self.state.window.bottom_offset
    }

    /// Number of rendered rows.
    pub fn len(&self) -> usize {
        self.state.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.window.is_empty()
    }

    /// Dataset indexes of the rows to render, in order.
    pub fn rendered_range(&self) -> Range<usize> {
        self.state.window.range()
    }

    /// Slices the rendered rows out of `data`.
    ///
    /// `data` must be the dataset the engine is attached to (`data.len() == self.count()`).
    pub fn rendered_rows<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        if data.len() != self.state.count {
            wwarn!(
                data_len = data.len(),
                count = self.state.count,
                "rendered_rows: dataset length differs from attached count"
            );
            debug_assert_eq!(
                data.len(),
                self.state.count,
                "rendered_rows: dataset length differs from attached count"
            );
        }
        data.get(self.state.window.range()).unwrap_or(&[])
    }

    /// Height of the spacer that stands in for rows trimmed from the top.
    pub fn top_spacer(&self) -> u64 {
        self.state.top_spacer
    }

    /// The last scroll offset the engine decided on.
    pub fn scroll_pointer(&self) -> u64 {
        self.state.scroll_pointer
    }

    pub fn ledger(&self) -> &HeightLedger {
        &self.state.ledger
    }

    pub fn pending_correction(&self) -> Option<PendingCorrection> {
        self.state.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the window changed since the host last called [`Self::commit_render`].
    pub fn is_render_pending(&self) -> bool {
        self.render_pending
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        self.state.snapshot()
    }

    /// Measures the rendered rows against a viewport without changing any state.
    pub fn observe<M: RowMeasurer + ?Sized>(
        &self,
        notification: ScrollNotification,
        measurer: &M,
    ) -> Observation {
        observer::observe(
            notification,
            self.state.top_spacer,
            self.state.scroll_pointer,
            self.state.window.len(),
            measurer,
        )
    }

    /// Handles a scroll notification from the host.
    ///
    /// `measurer` must report the heights of the rows the host currently shows (the last
    /// committed render). All measuring happens before any mutation.
    pub fn on_scroll<M: RowMeasurer + ?Sized>(
        &mut self,
        notification: ScrollNotification,
        measurer: &M,
    ) -> ScrollOutcome {
        if self.echo.take() == Some(notification.scroll_offset) {
            wtrace!(
                scroll_offset = notification.scroll_offset,
                "on_scroll: correction echo"
            );
            return ScrollOutcome::Echo;
        }

        if self.render_pending {
            wtrace!(
                scroll_offset = notification.scroll_offset,
                phase = ?self.phase,
                "on_scroll: deferred until the last mutation is rendered"
            );
            return ScrollOutcome::Deferred;
        }

        self.phase = Phase::Measuring;
        let observation = self.observe(notification, measurer);
        wtrace!(
            scroll_offset = notification.scroll_offset,
            viewport_height = notification.viewport_height,
            direction = ?observation.direction,
            top_invisible = observation.top_invisible,
            bottom_invisible = observation.bottom_invisible,
            "on_scroll"
        );

        let mut decision = Decision::new(notification.scroll_offset, observation);
        self.state
            .apply_policy(&self.config, &mut decision, measurer);
        self.state.debug_check_invariants();

        if decision.mutations().next().is_some() {
            self.phase = Phase::Mutating;
        }
        if decision.changed() {
            self.render_pending = true;
            self.notify();
        }
        self.settle_phase();

        ScrollOutcome::Decided(decision)
    }

    /// Restores up to `count` rows above the window. Returns the number of rows restored.
    pub fn add_top_items(&mut self, count: usize) -> usize {
        let applied = self.state.add_top_items(count);
        self.after_mutation(applied);
        applied
    }

    /// Trims up to `count` rows from the top, measuring them first. Returns the number of rows
    /// trimmed.
    pub fn remove_top_items<M: RowMeasurer + ?Sized>(
        &mut self,
        count: usize,
        measurer: &M,
    ) -> usize {
        if self.render_pending {
            wwarn!(
                count,
                "remove_top_items: measuring rows before the last mutation was rendered"
            );
        }
        let applied = self.state.remove_top_items(count, measurer);
        self.after_mutation(applied);
        applied
    }

    /// Appends up to `count` rows below the window. Returns the number of rows appended.
    pub fn add_bottom_items(&mut self, count: usize) -> usize {
        let applied = self.state.add_bottom_items(count);
        self.after_mutation(applied);
        applied
    }

    /// Trims up to `count` rows from the bottom. Returns the number of rows trimmed.
    pub fn remove_bottom_items(&mut self, count: usize) -> usize {
        let applied = self.state.remove_bottom_items(count);
        self.after_mutation(applied);
        applied
    }

    fn after_mutation(&mut self, applied: usize) {
        self.state.debug_check_invariants();
        if applied == 0 {
            return;
        }
        self.render_pending = true;
        self.settle_phase();
        self.notify();
    }

    fn settle_phase(&mut self) {
        self.phase = if self.state.pending.is_some() {
            Phase::Correcting
        } else {
            Phase::Idle
        };
    }

    /// Tells the engine the host has laid out the current window.
    ///
    /// `measurer` reports the freshly rendered rows and `viewport_offset` is the viewport's
    /// scroll offset right now. If the last mutation changed the top edge, returns the one-shot
    /// correction the host must apply to the viewport; a notification at exactly the corrected
    /// offset is then treated as an echo of it.
    pub fn commit_render<M: RowMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        viewport_offset: u64,
    ) -> Option<ScrollCorrection> {
        self.render_pending = false;
        let correction = self.state.take_correction(measurer, viewport_offset);
        if let Some(c) = correction {
            self.echo = (!c.is_noop()).then_some(c.to);
        }
        self.phase = Phase::Idle;
        correction
    }

    /// Drops a pending correction without applying it, e.g. when the host scrolls
    /// programmatically to an unrelated position.
    pub fn discard_pending_correction(&mut self) -> Option<PendingCorrection> {
        let pending = self.state.pending.take();
        self.settle_phase();
        pending
    }
}

impl core::fmt::Debug for WindowEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("render_pending", &self.render_pending)
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}
