use std::{io, time::Duration};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use super::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// Runs an [`App`] on the terminal.
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a runtime ticking `rate` times per second.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self {
            events: EventLoop::new(Duration::from_secs_f64(1.0 / rate)),
        }
    }

    /// Runs the application until [`App::should_exit`] returns `true`.
    ///
    /// - `Tick`: calls `app.update()` and schedules a render if it reports a change
    /// - `Render`: calls `app.draw()`
    /// - `Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            execute!(io::stdout(), EnableMouseCapture)?;
            let result = self.event_loop(terminal, app);
            execute!(io::stdout(), DisableMouseCapture)?;
            result
        })
    }

    fn event_loop<A>(&mut self, terminal: &mut DefaultTerminal, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick(elapsed) => {
                    if app.update(elapsed) {
                        self.events.mark_dirty();
                    }
                }
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => {
                    app.handle_event(&event);
                }
            }
        }
        Ok(())
    }
}
