//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tictactoe_engine::{AdapterEvent, GameEngine, Position, Presenter, RenderInstruction};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};
use super::ui::cell_at;

/// Main application state.
#[derive(Debug)]
pub struct App {
    presenter: Presenter,
    frame: RenderInstruction,
    cursor: Position,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh engine.
    pub fn new(show_cell_numbers: bool) -> Self {
        let presenter = Presenter::new(GameEngine::new());
        let frame = presenter.initial_render();
        Self {
            presenter,
            frame,
            cursor: Position::Center,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// The frame currently on screen.
    pub fn frame(&self) -> &RenderInstruction {
        &self.frame
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.dispatch(AdapterEvent::RestartRequested);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.dispatch(AdapterEvent::CellClicked(self.cursor.index()));
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_cell(c) {
                    self.click(index);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal coordinates, given where each cell was drawn.
    #[instrument(skip(self, cells))]
    pub fn handle_click(&mut self, column: u16, row: u16, cells: &[Rect; 9]) {
        if let Some(index) = cell_at(cells, column, row) {
            self.click(index);
        }
    }

    fn click(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            debug!(cell = %pos, "Cell selected");
            self.cursor = pos;
        }
        self.dispatch(AdapterEvent::CellClicked(index));
    }

    fn dispatch(&mut self, event: AdapterEvent) {
        match self.presenter.handle(event) {
            Some(frame) => {
                debug!(message = %frame.message(), "New frame");
                self.frame = frame;
            }
            None => debug!(?event, "Event ignored"),
        }
    }

    fn quit(&mut self) {
        info!(score = %self.frame.score(), "Quitting");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Player, Square};

    const X_MARK: Option<Square> = Some(Square::Occupied(Player::X));

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.frame().board().get(0), X_MARK);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.frame().message(), "It's O's turn");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.frame().board().get(1), X_MARK);
    }

    #[test]
    fn test_win_then_restart_keeps_score() {
        let mut app = App::new(false);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(*app.frame().status(), GameStatus::Won(Player::X));
        assert_eq!(app.frame().message(), "Player X has won!");

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(*app.frame().status(), GameStatus::InProgress);
        assert_eq!(app.frame().score().wins(Player::X), 1);
    }

    #[test]
    fn test_click_inside_cell() {
        let mut app = App::new(true);
        let mut cells = [Rect::default(); 9];
        cells[8] = Rect::new(10, 10, 5, 3);
        app.handle_click(12, 11, &cells);
        assert_eq!(app.frame().board().get(8), X_MARK);
        app.handle_click(0, 0, &cells);
        assert_eq!(app.frame().board().count(Player::O), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = App::new(true);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
