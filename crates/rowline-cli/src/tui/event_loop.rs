use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

/// Events produced by [`EventLoop::next`].
#[derive(Debug, Clone)]
pub(super) enum TuiEvent {
    /// Time to advance the app clock; carries the time since the previous tick.
    Tick(Duration),
    /// The screen is out of date.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(Event),
}

/// Fixed-rate ticks, dirty-flag rendering and terminal input.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    last_tick: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the next event.
    ///
    /// Ticks take priority, then pending renders; otherwise waits for terminal
    /// input until the next tick is due.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            let since_tick = now.duration_since(self.last_tick);
            if since_tick >= self.tick_interval {
                self.last_tick = now;
                return Ok(TuiEvent::Tick(since_tick));
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if event::poll(self.tick_interval - since_tick)? {
                self.dirty = true;
                return Ok(TuiEvent::Crossterm(event::read()?));
            }
        }
    }
}
