use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use ratatui::{Frame, text::Line};

use crate::{
    command::play::table::Table,
    ui::widgets::{GameDisplay, style},
};

const TURBO_INTERVAL: Duration = Duration::from_millis(30);

/// Random policy against random policy, one move per tick.
#[derive(Debug)]
pub struct AutoPlayScreen {
    table: Table,
    interval: Duration,
    paused: bool,
    turbo: bool,
    error: Option<String>,
    is_exiting: bool,
}

impl AutoPlayScreen {
    pub fn new(interval: Duration, seed: Option<u64>, turbo: bool) -> Self {
        Self {
            table: Table::new(seed),
            interval,
            paused: false,
            turbo,
            error: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn tick_interval(&self) -> Duration {
        if self.turbo {
            TURBO_INTERVAL.min(self.interval)
        } else {
            self.interval
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let display = GameDisplay::new(self.table.game())
            .last_move(self.table.last_move())
            .paused(self.paused)
            .turbo(self.turbo);

        let turbo_text = if self.turbo {
            "t (Turbo: ON)"
        } else {
            "t (Turbo: OFF)"
        };
        let help_text = if self.table.game().game_over() {
            "Controls: r (Next game) | q (Quit)".to_owned()
        } else if self.paused {
            "Controls: p (Resume) | r (Restart) | q (Quit)".to_owned()
        } else {
            format!("Controls: {turbo_text} | p (Pause) | r (Restart) | q (Quit)")
        };

        let [table_area, message_area, tally_area, help_area] =
            super::layout(frame, display.height());
        frame.render_widget(display, table_area);
        if let Some(error) = &self.error {
            frame.render_widget(
                Line::styled(error.as_str(), style::ERROR).centered(),
                message_area,
            );
        }
        frame.render_widget(super::tally_line(self.table.tally()), tally_area);
        frame.render_widget(super::help_line(help_text), help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let game_over = self.table.game().game_over();
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('t') => self.turbo = !self.turbo,
                KeyCode::Char('p') if !game_over => self.paused = !self.paused,
                KeyCode::Char('r') => {
                    self.table.restart();
                    self.paused = false;
                    self.error = None;
                }
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    pub fn update(&mut self) {
        if self.paused || self.table.game().game_over() {
            return;
        }
        if let Err(err) = self.table.auto_move() {
            log::warn!("automatic move failed: {err}");
            self.error = Some(err.to_string());
            self.paused = true;
        }
    }
}
