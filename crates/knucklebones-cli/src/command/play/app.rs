use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::screens::Screen,
    tui::{App, Tui},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
}

impl PlayApp {
    pub fn watch(interval: Duration, seed: Option<u64>, turbo: bool) -> Self {
        Self {
            screen: Screen::auto(interval, seed, turbo),
        }
    }

    pub fn play(interval: Duration, seed: Option<u64>) -> Self {
        Self {
            screen: Screen::manual(interval, seed),
        }
    }

    fn sync_tick_interval(&self, tui: &mut Tui) {
        let interval = Some(self.screen.tick_interval());
        if tui.tick_interval() != interval {
            tui.set_tick_interval(interval);
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        self.sync_tick_interval(tui);
    }

    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, tui: &mut Tui, event: &Event) {
        self.screen.handle_event(event);
        self.sync_tick_interval(tui);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, tui: &mut Tui) {
        self.screen.update();
        self.sync_tick_interval(tui);
    }
}
