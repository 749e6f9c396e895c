use std::time::Duration;

use crossterm::event::Event;
use knucklebones_engine::Player;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
};

use crate::{
    command::play::{
        screens::{auto::AutoPlayScreen, manual::ManualPlayScreen},
        table::Tally,
    },
    ui::widgets::style,
};

mod auto;
mod manual;

#[derive(Debug)]
pub enum Screen {
    Manual(ManualPlayScreen),
    Auto(AutoPlayScreen),
}

impl Screen {
    pub fn manual(interval: Duration, seed: Option<u64>) -> Self {
        Screen::Manual(ManualPlayScreen::new(interval, seed))
    }

    pub fn auto(interval: Duration, seed: Option<u64>, turbo: bool) -> Self {
        Screen::Auto(AutoPlayScreen::new(interval, seed, turbo))
    }

    pub fn should_exit(&self) -> bool {
        match self {
            Screen::Manual(screen) => screen.is_exiting(),
            Screen::Auto(screen) => screen.is_exiting(),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        match self {
            Screen::Manual(screen) => screen.tick_interval(),
            Screen::Auto(screen) => screen.tick_interval(),
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        match self {
            Screen::Manual(screen) => screen.draw(frame),
            Screen::Auto(screen) => screen.draw(frame),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match self {
            Screen::Manual(screen) => screen.handle_event(event),
            Screen::Auto(screen) => screen.handle_event(event),
        }
    }

    pub fn update(&mut self) {
        match self {
            Screen::Manual(screen) => screen.update(),
            Screen::Auto(screen) => screen.update(),
        }
    }
}

/// Splits the frame into the table and the footer lines below it.
fn layout(frame: &Frame<'_>, table_height: u16) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(table_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area())
}

fn tally_line(tally: &Tally) -> Line<'static> {
    Line::styled(
        format!(
            "Session: player 0 {} | player 1 {} | draws {}",
            tally.wins(Player::First),
            tally.wins(Player::Second),
            tally.draws()
        ),
        style::HINT,
    )
    .centered()
}

fn help_line(text: String) -> Line<'static> {
    Line::styled(text, style::HINT).centered()
}
