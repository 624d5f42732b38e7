use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use scroll_window::{Direction, ScrollOutcome, UniformHeight, WindowConfig, WindowEngine, WindowOp};

fn row_height(id: &u32) -> u32 {
    20 + (id % 3) * 10
}

fn frame_heights(frame: &RenderedFrame<u32>) -> Vec<u32> {
    frame.outputs().copied().collect()
}

fn spacer_for(first_index: usize) -> u64 {
    (0..first_index as u32).map(|id| row_height(&id) as u64).sum()
}

#[test]
fn controller_coalesces_events_to_one_decision_per_frame() {
    let rows = UniformHeight(10);
    let mut c = Controller::new(WindowConfig::new(10), 40);
    assert_eq!(c.frame_interval_ms(), DEFAULT_FRAME_INTERVAL_MS);
    assert_eq!(c.tick(0, &rows), None);

    c.on_viewport_size(50);
    assert!(c.has_queued());
    let first = c.tick(0, &rows).unwrap();
    assert!(first.decision().is_some());

    c.on_scroll(5);
    c.on_scroll(10);
    c.on_scroll(20);
    assert_eq!(c.tick(10, &rows), None);
    assert!(c.has_queued());

    let outcome = c.tick(16, &rows).unwrap();
    let d = outcome.decision().unwrap();
    assert_eq!(d.scroll_offset, 20);
    assert_eq!(d.direction(), Direction::Down);
    assert_eq!(d.applied(WindowOp::AddBottom), 3);
    assert!(!c.has_queued());
    assert_eq!(c.tick(64, &rows), None);
}

#[test]
fn controller_keeps_deferred_notifications_queued() {
    let rows = UniformHeight(10);
    let mut c = Controller::new(WindowConfig::new(10), 40);
    c.on_viewport_size(50);
    c.on_scroll(20);
    assert!(c.tick(0, &rows).unwrap().decision().unwrap().changed());

    c.on_scroll(30);
    assert_eq!(c.tick(20, &rows), Some(ScrollOutcome::Deferred));
    assert!(c.has_queued());

    assert_eq!(c.after_render(&rows, 30), None);
    let outcome = c.tick(40, &rows).unwrap();
    assert_eq!(outcome.decision().map(|d| d.scroll_offset), Some(30));
}

#[test]
fn controller_drops_events_queued_before_a_correction() {
    let rows = UniformHeight(10);
    let mut c = Controller::new(WindowConfig::new(10), 40);
    c.on_viewport_size(50);
    c.tick(0, &rows);
    c.engine_mut().remove_top_items(3, &rows);
    assert!(c.after_render(&rows, 100).unwrap().is_noop());

    c.engine_mut().add_top_items(3);
    c.on_scroll(95);
    let correction = c.after_render(&UniformHeight(12), 95).unwrap();
    assert_eq!(correction.to, 101);
    assert_eq!(c.scroll_offset(), 101);
    assert!(!c.has_queued());

    // The host applies the correction; its echo is recognised.
    c.on_scroll(correction.to);
    assert_eq!(c.tick(100, &rows), Some(ScrollOutcome::Echo));
}

#[test]
fn controller_reset_clears_queue_and_window() {
    let rows = UniformHeight(10);
    let mut c = Controller::new(WindowConfig::new(10), 40).with_frame_interval_ms(0);
    c.on_viewport_size(50);
    c.on_scroll(20);
    c.tick(0, &rows);
    c.on_scroll(25);

    c.reset(8);
    assert!(!c.has_queued());
    assert_eq!(c.scroll_offset(), 0);
    assert_eq!(c.engine().rendered_range(), 0..8);
    assert_eq!(c.viewport_height(), 50);
}

#[test]
fn controller_from_engine_keeps_engine_state() {
    let mut engine = WindowEngine::new(WindowConfig::new(10), 40);
    engine.add_bottom_items(5);
    let c = Controller::from_engine(engine);
    assert_eq!(c.engine().len(), 15);
    assert_eq!(c.into_engine().bottom_offset(), 15);
}

#[test]
fn list_renders_each_windowed_row_once() {
    let calls = Cell::new(0usize);
    let data: Vec<u32> = (0..100).collect();
    let list = InfiniteList::new(
        data,
        |id: &u32| {
            calls.set(calls.get() + 1);
            id * 2
        },
        WindowConfig::new(10),
    );

    let frame = list.render();
    assert_eq!(calls.get(), 10);
    assert_eq!(frame.len(), 10);
    assert_eq!(frame.top_spacer, 0);
    assert_eq!(frame.first_index(), Some(0));
    assert!(frame.rows.iter().all(|r| r.output == r.index as u32 * 2));
    assert_eq!(list.rows(), &list.data()[..10]);
}

#[test]
fn list_set_data_returns_to_the_top() {
    let data: Vec<u32> = (0..100).collect();
    let mut list = InfiniteList::new(data, row_height, WindowConfig::new(10));
    list.controller_mut().engine_mut().remove_top_items(4, &UniformHeight(20));
    list.after_render(&UniformHeight(20), 80);
    assert_eq!(list.render().first_index(), Some(4));

    list.set_data((0..5).collect());
    let frame = list.render();
    assert_eq!(frame.len(), 5);
    assert_eq!(frame.top_spacer, 0);
    assert_eq!(list.controller().scroll_offset(), 0);
}

#[test]
fn empty_list_renders_an_empty_frame() {
    let mut list = InfiniteList::new(Vec::<u32>::new(), row_height, WindowConfig::default());
    list.on_viewport_size(200);
    let outcome = list.tick(0, &UniformHeight(1)).unwrap();
    assert!(!outcome.decision().unwrap().changed());

    let frame = list.render();
    assert!(frame.is_empty());
    assert_eq!(frame.top_spacer, 0);
    assert_eq!(frame.first_index(), None);
}

struct Contact {
    name: String,
    bio_lines: u32,
}

struct ContactCard;

impl RowRenderer<Contact> for ContactCard {
    type Output = (String, u32);

    fn render_row(&self, item: &Contact) -> Self::Output {
        (format!("{} ({} lines)", item.name, item.bio_lines), 18 * (1 + item.bio_lines))
    }
}

#[test]
fn list_accepts_named_renderers() {
    let data = (0..30)
        .map(|i| Contact {
            name: format!("contact-{i}"),
            bio_lines: i % 4,
        })
        .collect();
    let list = InfiniteList::new(data, ContactCard, WindowConfig::new(5));

    let frame = list.render();
    let labels: Vec<&str> = frame.outputs().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels[0], "contact-0 (0 lines)");
    assert_eq!(labels[4], "contact-4 (0 lines)");
    assert_eq!(frame.rows[3].output.1, 72);

    let (_, height) = list.renderer().render_row(&list.data()[1]);
    assert_eq!(height, 36);
}

type HeightList = InfiniteList<u32, fn(&u32) -> u32>;

/// Scrolls to `next` (clamped to the content), runs one frame and checks the spacer.
fn scroll_frame(
    list: &mut HeightList,
    frame: &mut RenderedFrame<u32>,
    now: &mut u64,
    offset: &mut u64,
    next: u64,
) {
    let heights = frame_heights(frame);
    let content = frame.top_spacer + heights.iter().map(|&h| h as u64).sum::<u64>();
    *offset = next.min(content.saturating_sub(list.controller().viewport_height() as u64));
    list.on_scroll(*offset);
    *now += DEFAULT_FRAME_INTERVAL_MS;
    list.tick(*now, heights.as_slice());

    *frame = list.render();
    if let Some(c) = list.after_render(frame_heights(frame).as_slice(), *offset) {
        assert!(c.is_noop());
    }
    let first = frame.first_index().unwrap();
    assert_eq!(frame.top_spacer, spacer_for(first));
    assert!(frame.len() <= list.controller().engine().config().peak_window_size());
}

#[test]
fn list_scroll_round_trip_keeps_spacer_exact() {
    let mut list: HeightList = InfiniteList::new(
        (0..500).collect(),
        row_height as fn(&u32) -> u32,
        WindowConfig::default(),
    );
    list.on_viewport_size(100);

    let mut now = 0u64;
    let mut offset = 0u64;
    let mut frame = list.render();

    let mut guard = 0;
    while frame.first_index() < Some(50) {
        let next = offset + 10;
        scroll_frame(&mut list, &mut frame, &mut now, &mut offset, next);
        guard += 1;
        assert!(guard < 10_000, "window never advanced");
    }
    while offset > 0 {
        let next = offset.saturating_sub(10);
        scroll_frame(&mut list, &mut frame, &mut now, &mut offset, next);
    }

    assert_eq!(frame.first_index(), Some(0));
    assert_eq!(frame.top_spacer, 0);
    assert!(list.controller().engine().ledger().is_empty());
}
