use std::time::Duration;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Owns the event loop and runs an [`App`] on the terminal until it asks to exit.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.events.tick_interval()
    }

    /// Sets how often [`App::update`] is called. `None` stops ticking.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, &event),
                }
            }
            Ok(())
        })
    }
}
