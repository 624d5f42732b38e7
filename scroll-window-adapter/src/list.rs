use alloc::vec::Vec;

use scroll_window::{RowMeasurer, ScrollCorrection, ScrollOutcome, WindowConfig};

use crate::{Controller, RowRenderer};

/// One rendered row and the dataset index it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRow<O> {
    pub index: usize,
    pub output: O,
}

/// What the host lays out: a spacer of `top_spacer` height, then `rows` in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedFrame<O> {
    pub top_spacer: u64,
    pub rows: Vec<RenderedRow<O>>,
}

impl<O> RenderedFrame<O> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dataset index of the first rendered row.
    pub fn first_index(&self) -> Option<usize> {
        self.rows.first().map(|r| r.index)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &O> + '_ {
        self.rows.iter().map(|r| &r.output)
    }
}

/// A dataset bound to a row renderer and a windowing [`Controller`].
///
/// The list owns the items; the engine only tracks which of them are rendered.
#[derive(Clone, Debug)]
pub struct InfiniteList<T, R> {
    data: Vec<T>,
    renderer: R,
    controller: Controller,
}

impl<T, R: RowRenderer<T>> InfiniteList<T, R> {
    pub fn new(data: Vec<T>, renderer: R, config: WindowConfig) -> Self {
        let controller = Controller::new(config, data.len());
        Self {
            data,
            renderer,
            controller,
        }
    }

    pub fn with_frame_interval_ms(mut self, frame_interval_ms: u64) -> Self {
        self.controller = self.controller.with_frame_interval_ms(frame_interval_ms);
        self
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Replaces the dataset wholesale and returns the window to the top.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.controller.reset(self.data.len());
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Items currently in the window.
    pub fn rows(&self) -> &[T] {
        self.controller.engine().rendered_rows(&self.data)
    }

    /// Renders the current window.
    pub fn render(&self) -> RenderedFrame<R::Output> {
        let engine = self.controller.engine();
        let rows = self
            .rows()
            .iter()
            .zip(engine.rendered_range())
            .map(|(item, index)| RenderedRow {
                index,
                output: self.renderer.render_row(item),
            })
            .collect();
        RenderedFrame {
            top_spacer: engine.top_spacer(),
            rows,
        }
    }

    pub fn on_viewport_size(&mut self, viewport_height: u32) {
        self.controller.on_viewport_size(viewport_height);
    }

    pub fn on_scroll(&mut self, scroll_offset: u64) {
        self.controller.on_scroll(scroll_offset);
    }

    /// See [`Controller::tick`].
    pub fn tick<M: RowMeasurer + ?Sized>(
        &mut self,
        now_ms: u64,
        rows: &M,
    ) -> Option<ScrollOutcome> {
        self.controller.tick(now_ms, rows)
    }

    /// See [`Controller::after_render`].
    pub fn after_render<M: RowMeasurer + ?Sized>(
        &mut self,
        rows: &M,
        viewport_offset: u64,
    ) -> Option<ScrollCorrection> {
        self.controller.after_render(rows, viewport_offset)
    }
}
