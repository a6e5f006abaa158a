//! Terminal runtime for the interactive game.
//!
//! The runtime owns the terminal and the clock. It ticks at a fixed rate so
//! the app can advance its timers, and redraws only after something changed.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event_loop;
mod runtime;
