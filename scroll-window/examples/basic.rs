// Example: minimal host loop over a long list.
use scroll_window::{ScrollNotification, UniformHeight, WindowConfig, WindowEngine};

fn main() {
    let rows = UniformHeight(24);
    let mut engine = WindowEngine::new(WindowConfig::default(), 10_000);
    println!("attached: window={:?}", engine.window());

    // Scroll down one row at a time; a real host would re-render between notifications.
    for step in 0..200u64 {
        let offset = step * 24;
        let outcome = engine.on_scroll(ScrollNotification::new(offset, 480), &rows);
        if let Some(d) = outcome.decision().filter(|d| d.changed()) {
            println!(
                "offset={offset} dir={:?} ops={:?} window={:?} spacer={}",
                d.direction(),
                d.mutations().collect::<Vec<_>>(),
                engine.window(),
                engine.top_spacer()
            );
        }
        if let Some(c) = engine.commit_render(&rows, offset) {
            assert!(c.is_noop());
        }
    }

    println!(
        "final: window={:?} spacer={} ledger_len={}",
        engine.window(),
        engine.top_spacer(),
        engine.ledger().len()
    );
}
