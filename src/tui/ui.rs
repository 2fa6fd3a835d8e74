//! Stateless UI rendering for the terminal front end.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameStatus, Player, Position, RenderInstruction, Square};

use super::app::App;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen and returns where each board cell landed, for
/// mouse hit-testing.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(20)])
        .split(chunks[1]);

    let cells = draw_board(frame, middle[0], app);
    draw_score(frame, middle[1], app.frame());

    let status = Paragraph::new(app.frame().message().as_str())
        .style(status_style(*app.frame().status()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 / arrows + Enter / click: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    cells
}

/// Index of the cell containing terminal coordinates `(column, row)`.
pub fn cell_at(cells: &[Rect; 9], column: u16, row: u16) -> Option<usize> {
    cells.iter().position(|r| {
        let inside_x = column >= r.x && column < r.x.saturating_add(r.width);
        let inside_y = row >= r.y && row < r.y.saturating_add(r.height);
        inside_x && inside_y
    })
}

fn status_style(status: GameStatus) -> Style {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match status {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => bold.fg(Color::Green),
        GameStatus::Draw => bold.fg(Color::Magenta),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let rect = cols[col * 2];
            draw_cell(frame, rect, app, pos);
            cells[pos.index()] = rect;
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let render = app.frame();
    let square = render.board().get(pos.index()).unwrap_or_default();

    let (symbol, mut style) = match square {
        Square::Empty if app.show_cell_numbers() => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => (player.to_string(), player_style(player)),
    };

    let on_winning_line = render
        .winning_line()
        .is_some_and(|line| line.contains(&pos.index()));
    if on_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() && !render.status().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad to the cell height so the highlight fills it and the mark sits in the middle.
    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(symbol)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_score(frame: &mut Frame, area: Rect, render: &RenderInstruction) {
    let score = render.score();
    let row = |player: Player| {
        Line::from(vec![
            Span::styled(format!("Player {}", player), player_style(player)),
            Span::raw(format!("  {}", score.wins(player))),
        ])
    };

    let paragraph = Paragraph::new(vec![row(Player::X), row(Player::O)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
