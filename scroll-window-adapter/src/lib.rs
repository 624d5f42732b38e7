//! Adapter utilities for the `scroll-window` crate.
//!
//! The `scroll-window` engine is UI-agnostic and only tracks which slice of a dataset is
//! rendered. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that coalesces scroll events to one window decision per frame
//! - An [`InfiniteList`] binding a dataset to a [`RowRenderer`], producing a [`RenderedFrame`]
//!   (top spacer + rendered rows) for the host to lay out
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod list;
mod renderer;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_FRAME_INTERVAL_MS};
pub use list::{InfiniteList, RenderedFrame, RenderedRow};
pub use renderer::RowRenderer;
