use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

/// Application driven by [`Runtime::run`](super::Runtime::run).
pub trait App {
    /// Returns whether the runtime should stop.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Advances the app clock by `elapsed`.
    ///
    /// Returns `true` if the screen needs to be redrawn.
    fn update(&mut self, elapsed: Duration) -> bool;

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);
}
