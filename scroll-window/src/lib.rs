//! A headless, bidirectional windowing engine for infinitely scrolling lists.
//!
//! For adapter-level utilities (dataset binding, row rendering, notification coalescing), see
//! the `scroll-window-adapter` crate.
//!
//! The engine keeps a small contiguous window of a large ordered dataset rendered, grows it as
//! the viewport approaches either edge and trims it once it exceeds a size cap. Rows trimmed from
//! the top are replaced by a spacer and their heights are kept on a LIFO ledger, so restoring
//! them later gives the same height back and the content under the viewport does not jump.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport height and scroll offset on every scroll event
//! - the measured height of each rendered row ([`RowMeasurer`])
//! - a render of the window below a spacer, followed by [`WindowEngine::commit_render`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod corrector;
mod engine;
mod ledger;
mod measure;
mod mutator;
mod observer;
mod policy;
mod state;
mod types;


pub use config::{ConfigError, WindowConfig};
pub use engine::{OnChangeCallback, WindowEngine};
pub use ledger::HeightLedger;
pub use measure::{RowMeasurer, UniformHeight};
pub use observer::observe;
pub use policy::{Decision, ScrollOutcome};
pub use state::{PendingCorrection, WindowSnapshot};
pub use types::{
    Direction, Edge, Mutation, Observation, Phase, ScrollCorrection, ScrollNotification, Window,
    WindowOp,
};
