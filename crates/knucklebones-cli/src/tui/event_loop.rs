use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Produces ticks at a fixed interval and a render after every state change.
///
/// Without a tick interval the loop only waits for terminal events.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            // the first frame must be drawn before any input arrives
            dirty: true,
        }
    }

    pub(super) fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    /// Blocks until the next tick is due, a render is needed, or a terminal
    /// event arrives.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let timeout = self
                .tick_interval
                .map(|interval| (self.last_tick + interval).saturating_duration_since(now));
            if let Some(timeout) = timeout
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }
}
