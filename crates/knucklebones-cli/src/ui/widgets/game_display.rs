use knucklebones_engine::{Game, GameResult, MoveOutcome, Player};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Widget},
};

use crate::ui::widgets::{DieDisplay, GridDisplay, color, style};

/// The whole table: player 0's grid on top (flipped), a status panel with the
/// pending die, and player 1's grid below.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a Game,
    last_move: Option<&'a MoveOutcome>,
    paused: bool,
    turbo: bool,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            game,
            last_move: None,
            paused: false,
            turbo: false,
        }
    }

    pub fn last_move(self, last_move: Option<&'a MoveOutcome>) -> Self {
        Self { last_move, ..self }
    }

    pub fn paused(self, paused: bool) -> Self {
        Self { paused, ..self }
    }

    pub fn turbo(self, turbo: bool) -> Self {
        Self { turbo, ..self }
    }

    pub fn height(&self) -> u16 {
        2 * self.grid_display(Player::First).height() + STATUS_HEIGHT
    }

    fn border_color(&self) -> ratatui::style::Color {
        if self.game.game_over() {
            color::RED
        } else if self.paused {
            color::YELLOW
        } else if self.turbo {
            color::MAGENTA
        } else {
            color::WHITE
        }
    }

    fn grid_display(&self, player: Player) -> GridDisplay<'a> {
        let mut title = Span::raw(format!(" {player}: {} ", self.game.score(player)));
        if !self.game.game_over() && self.game.turn() == player {
            title = title.style(style::LAST_MOVE);
        }
        let highlight = self
            .last_move
            .filter(|outcome| outcome.player == player)
            .map(|outcome| outcome.column);
        GridDisplay::new(self.game.grid(player))
            .flipped(player.is_first())
            .highlight(highlight)
            .block(
                Block::bordered()
                    .title(Line::from(title).centered())
                    .border_style(self.border_color())
                    .style(style::DEFAULT),
            )
    }

    fn status_line(&self) -> Line<'static> {
        match self.game.result() {
            Some(GameResult::Winner(player)) => Line::from(format!("{player} wins")),
            Some(GameResult::Draw) => Line::from("draw"),
            None => Line::from(format!(
                "{} to place, move {}",
                self.game.turn(),
                self.game.move_count() + 1
            )),
        }
    }

    fn last_move_line(&self) -> Line<'static> {
        let Some(outcome) = self.last_move else {
            return Line::styled("no moves yet", style::HINT);
        };
        let mut text = format!(
            "{} put {} in column {}",
            outcome.player,
            outcome.face,
            outcome.column + 1
        );
        if outcome.removed > 0 {
            text.push_str(&format!(", took {}", outcome.removed));
        }
        Line::styled(text, style::HINT)
    }
}

const STATUS_HEIGHT: u16 = DieDisplay::height() + 2;
const STATUS_WIDTH: u16 = 42;

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = self.grid_display(Player::First);
        let bottom = self.grid_display(Player::Second);

        let [column] = Layout::horizontal([Constraint::Length(STATUS_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [top_area, status_area, bottom_area] = Layout::vertical([
            Constraint::Length(top.height()),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(bottom.height()),
        ])
        .areas(column);

        let [top_area] = Layout::horizontal([Constraint::Length(top.width())])
            .flex(Flex::Center)
            .areas(top_area);
        let [bottom_area] = Layout::horizontal([Constraint::Length(bottom.width())])
            .flex(Flex::Center)
            .areas(bottom_area);
        top.render(top_area, buf);
        bottom.render(bottom_area, buf);

        let status_block = Block::bordered()
            .border_style(self.border_color())
            .style(style::DEFAULT);
        let status_inner = status_block.inner(status_area);
        status_block.render(status_area, buf);
        let [die_area, text_area] = Layout::horizontal([
            Constraint::Length(DieDisplay::width()),
            Constraint::Fill(1),
        ])
        .spacing(1)
        .areas(status_inner);
        if !self.game.game_over() {
            DieDisplay::pending(self.game.pending_die()).render(die_area, buf);
        }
        Text::from(vec![self.status_line(), self.last_move_line()])
            .render(text_area.centered_vertically(Constraint::Length(2)), buf);

        let popup = if self.game.game_over() {
            Some((
                self.status_line().to_string().to_uppercase(),
                Style::new().fg(color::WHITE).bg(color::RED),
            ))
        } else if self.paused {
            Some((
                "PAUSED".to_owned(),
                Style::new().fg(color::BLACK).bg(color::YELLOW),
            ))
        } else {
            None
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                status_area.centered(Constraint::Length(STATUS_WIDTH - 8), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use knucklebones_engine::{Column, DiceSeed, Face, GameSetup, Grid};

    use super::*;

    fn render(display: &GameDisplay<'_>) -> String {
        let area = Rect::new(0, 0, 44, display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_shows_turn_and_scores() {
        let game = Game::from_setup(
            GameSetup::new(Player::Second, Face::THREE),
            DiceSeed::from_u64(1),
        );
        let screen = render(&GameDisplay::new(&game));
        assert!(screen.contains("player 0: 0"));
        assert!(screen.contains("player 1: 0"));
        assert!(screen.contains("player 1 to place, move 1"));
        assert!(screen.contains("no moves yet"));
    }

    #[test]
    fn test_describes_last_move() {
        let mut game = Game::from_setup(
            GameSetup::new(Player::First, Face::FIVE),
            DiceSeed::from_u64(2),
        );
        let outcome = game.player_move(1).unwrap();
        let screen = render(&GameDisplay::new(&game).last_move(Some(&outcome)));
        assert!(screen.contains("player 0 put 5 in column 2"));
        assert!(screen.contains("player 0: 5"));
    }

    #[test]
    fn test_reports_removed_dice() {
        let mut opponent = Grid::EMPTY;
        opponent.add_die(0, Face::TWO).unwrap();
        opponent.add_die(0, Face::TWO).unwrap();
        let setup = GameSetup::new(Player::First, Face::TWO).with_grid(Player::Second, opponent);
        let mut game = Game::from_setup(setup, DiceSeed::from_u64(5));
        let outcome = game.player_move(0).unwrap();
        let screen = render(&GameDisplay::new(&game).last_move(Some(&outcome)));
        assert!(screen.contains("player 0 put 2 in column 1, took 2"));
    }

    #[test]
    fn test_game_over_popup() {
        let full = Column::from_dice([Face::SIX; 3]).unwrap();
        let nearly = Grid::from_columns([full, full, Column::from_dice([Face::SIX; 2]).unwrap()]);
        let setup = GameSetup::new(Player::First, Face::SIX).with_grid(Player::First, nearly);
        let mut game = Game::from_setup(setup, DiceSeed::from_u64(3));
        game.player_move(2).unwrap();

        let screen = render(&GameDisplay::new(&game));
        assert!(screen.contains("PLAYER 0 WINS"));
    }

    #[test]
    fn test_paused_popup() {
        let game = Game::with_seed(DiceSeed::from_u64(4));
        let screen = render(&GameDisplay::new(&game).paused(true));
        assert!(screen.contains("PAUSED"));
    }
}
