use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use knucklebones_engine::{MoveError, Player};
use ratatui::{Frame, text::Line};

use crate::{
    command::play::table::Table,
    ui::widgets::{GameDisplay, style},
};

const HUMAN: Player = Player::First;

/// A human at the keyboard against the random policy.
#[derive(Debug)]
pub struct ManualPlayScreen {
    table: Table,
    interval: Duration,
    message: Option<String>,
    is_exiting: bool,
}

impl ManualPlayScreen {
    pub fn new(interval: Duration, seed: Option<u64>) -> Self {
        Self {
            table: Table::new(seed),
            interval,
            message: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    fn is_human_turn(&self) -> bool {
        !self.table.game().game_over() && self.table.game().turn() == HUMAN
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let display = GameDisplay::new(self.table.game()).last_move(self.table.last_move());

        let help_text = if self.table.game().game_over() {
            "Controls: r (Next game) | q (Quit)"
        } else if self.is_human_turn() {
            "Controls: 1/2/3 (Place die) | r (Restart) | q (Quit)"
        } else {
            "Opponent is thinking... | r (Restart) | q (Quit)"
        };

        let [table_area, message_area, tally_area, help_area] =
            super::layout(frame, display.height());
        frame.render_widget(display, table_area);
        if let Some(message) = &self.message {
            frame.render_widget(
                Line::styled(message.as_str(), style::ERROR).centered(),
                message_area,
            );
        }
        frame.render_widget(super::tally_line(self.table.tally()), tally_area);
        frame.render_widget(super::help_line(help_text.to_owned()), help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        match event.code {
            KeyCode::Char('1') => self.place(0),
            KeyCode::Char('2') => self.place(1),
            KeyCode::Char('3') => self.place(2),
            KeyCode::Char('r') => {
                self.table.restart();
                self.message = None;
            }
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    fn place(&mut self, column: usize) {
        if !self.table.game().game_over() && !self.is_human_turn() {
            self.message = Some("wait for your turn".to_owned());
            return;
        }
        self.message = match self.table.place(column) {
            Ok(_) => None,
            // columns are numbered from 1 on screen
            Err(MoveError::ColumnFull { .. }) => Some(format!("column {} is full", column + 1)),
            Err(err) => Some(err.to_string()),
        };
    }

    /// The opponent moves on the tick after the human.
    pub fn update(&mut self) {
        if self.table.game().game_over() || self.is_human_turn() {
            return;
        }
        if let Err(err) = self.table.auto_move() {
            log::warn!("opponent move failed: {err}");
            self.message = Some(err.to_string());
        }
    }
}
