use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// An application driven by [`Tui::run`].
pub trait App {
    /// Called once before the first event; configure the tick interval here.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    /// Handles a key press, resize or other terminal event.
    fn handle_event(&mut self, tui: &mut Tui, event: &Event);

    fn draw(&self, frame: &mut Frame);

    /// Advances the application by one tick.
    fn update(&mut self, tui: &mut Tui);
}
