use scroll_window::WindowConfig;
use scroll_window_adapter::{DEFAULT_FRAME_INTERVAL_MS, InfiniteList, RenderedFrame};

struct Contact {
    id: usize,
    full_name: String,
    bio: Vec<String>,
}

/// A rendered card: its text and laid-out height.
struct Card {
    text: String,
    height: u32,
}

fn contact_card(c: &Contact) -> Card {
    Card {
        text: format!("#{} {} [{} lines]", c.id, c.full_name, c.bio.len()),
        // Header line plus one line per bio line, 16px each.
        height: 16 * (1 + c.bio.len() as u32),
    }
}

fn heights(frame: &RenderedFrame<Card>) -> Vec<u32> {
    frame.outputs().map(|card| card.height).collect()
}

fn main() {
    // Example: a contacts list of 1000 cards with varying heights, driven by a frame loop.
    //
    // An adapter would:
    // - forward scroll/resize events to the list (cheap; coalesced)
    // - call tick(now_ms, rows) once per frame with the heights of the rows on screen
    // - render the frame (spacer + cards) and call after_render, applying any correction
    let contacts = (0..1000)
        .map(|i| Contact {
            id: i + 1,
            full_name: format!("Contact {}", i + 1),
            bio: (0..(i % 5)).map(|l| format!("bio line {l}")).collect(),
        })
        .collect();
    let mut list = InfiniteList::new(contacts, contact_card, WindowConfig::default());
    list.on_viewport_size(600);

    let mut frame = list.render();
    let mut now_ms = 0u64;
    let mut offset = 0u64;

    // Fling down, then back up.
    let script = (0..300).map(|_| 25i64).chain((0..300).map(|_| -25i64));
    for delta in script {
        let shown = heights(&frame);
        let content = frame.top_spacer + shown.iter().map(|&h| h as u64).sum::<u64>();
        let max = content.saturating_sub(600);
        offset = offset.saturating_add_signed(delta).min(max);

        list.on_scroll(offset);
        now_ms += DEFAULT_FRAME_INTERVAL_MS;
        let decided = list.tick(now_ms, shown.as_slice());

        frame = list.render();
        if let Some(c) = list.after_render(heights(&frame).as_slice(), offset) {
            offset = c.to;
            list.on_scroll(offset);
        }

        if decided.and_then(|o| o.into_decision()).is_some_and(|d| d.changed()) {
            println!(
                "t={now_ms} off={offset} spacer={} rows={} first={:?}",
                frame.top_spacer,
                frame.len(),
                frame.rows.first().map(|r| r.output.text.as_str())
            );
        }
    }
}
