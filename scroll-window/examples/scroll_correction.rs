// Example: restoring top rows whose height changed while they were trimmed.
use scroll_window::{ScrollNotification, UniformHeight, WindowConfig, WindowEngine};

fn main() {
    let mut engine = WindowEngine::new(WindowConfig::new(10), 100);
    let rows = UniformHeight(10);

    // Push the window past the start of the dataset.
    let trimmed = engine.remove_top_items(5, &rows);
    engine.commit_render(&rows, 300);
    println!(
        "trimmed={trimmed} window={:?} spacer={} ledger={:?}",
        engine.window(),
        engine.top_spacer(),
        engine.ledger().as_slice()
    );

    // The user scrolls up; the engine restores rows from the ledger.
    let outcome = engine.on_scroll(ScrollNotification::new(40, 60), &rows);
    println!("decision={:?}", outcome.decision());
    println!("pending={:?}", engine.pending_correction());

    // Restored rows now wrap onto two lines (20px each). The correction moves the viewport
    // by exactly the extra height so the row under the user's eye stays put.
    let wrapped = |row: usize| -> u32 { if row < 3 { 20 } else { 10 } };
    if let Some(c) = engine.commit_render(&wrapped, 40) {
        println!("correction: {} -> {} (delta {})", c.from, c.to, c.delta);
        let echo = engine.on_scroll(ScrollNotification::new(c.to, 60), &wrapped);
        println!("echo={echo:?}");
    }
}
