//! Stateless UI rendering.

use super::app::App;
use super::input::Cursor;
use gridmark_core::{Board, Cell, Token};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 3;
const LOG_WIDTH: u16 = 32;

struct Screen {
    title: Rect,
    board: Rect,
    log: Rect,
    status: Rect,
    help: Rect,
}

fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and log
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(LOG_WIDTH)])
        .split(chunks[1]);

    Screen {
        title: chunks[0],
        board: body[0],
        log: body[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = screen(frame.area());

    let title = Paragraph::new("Gridmark")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    let board = app.game().board();
    draw_board(
        frame,
        board_rect(frame.area(), board.dimension()),
        board,
        app.cursor(),
    );
    draw_log(frame, screen.log, app);

    let status = match app.notice() {
        Some(notice) => format!("{} | {}", app.status(), notice),
        None => app.status(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, screen.status);

    let help = Paragraph::new(
        "arrows/hjkl move · enter or click place · 1-9 pick (3x3) · r reset · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);
}

/// Bordered area the board occupies on a terminal of size `area`.
pub fn board_rect(area: Rect, dimension: usize) -> Rect {
    // Each cell plus its separator, plus the block border.
    let n = u16::try_from(dimension).unwrap_or(u16::MAX);
    let width = n.saturating_mul(CELL_WIDTH + 1).saturating_add(1);
    let height = n.saturating_mul(2).saturating_add(1);
    center_rect(screen(area).board, width, height)
}

/// Maps a terminal position inside `board` to the cell drawn there.
///
/// Borders and separator lines map to nothing.
pub fn cell_at(board: Rect, dimension: usize, column: u16, row: u16) -> Option<Cursor> {
    let x = column.checked_sub(board.x.saturating_add(1))?;
    let y = row.checked_sub(board.y.saturating_add(1))?;
    if x >= board.width.saturating_sub(2) || y >= board.height.saturating_sub(2) {
        return None;
    }
    if x % (CELL_WIDTH + 1) == CELL_WIDTH || y % 2 == 1 {
        return None;
    }

    let cursor = Cursor::new(usize::from(y / 2), usize::from(x / (CELL_WIDTH + 1)));
    (cursor.row < dimension && cursor.col < dimension).then_some(cursor)
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Cursor) {
    let n = board.dimension();
    let mut lines = Vec::with_capacity(n * 2);

    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            lines.push(separator(n));
        }
        let mut spans = Vec::with_capacity(n * 2);
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(*cell, cursor == Cursor::new(row, col)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    let (symbol, base_style) = match cell.token() {
        None => (" · ", Style::default().fg(Color::DarkGray)),
        Some(Token::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Token::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };
    Span::styled(symbol, style)
}

fn separator(n: usize) -> Line<'static> {
    let text = vec!["───"; n].join("┼");
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let visible = usize::from(area.height.saturating_sub(2));
    let entries: Vec<&str> = app.log().collect();
    let start = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| ListItem::new(entry.to_string()))
        .collect();

    let list = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rect_fits_grid() {
        let board = board_rect(Rect::new(0, 0, 80, 24), 3);
        assert_eq!((board.width, board.height), (13, 7));
    }

    #[test]
    fn test_cell_at_maps_clicks_to_cells() {
        let board = board_rect(Rect::new(0, 0, 80, 24), 3);
        let (left, top) = (board.x + 1, board.y + 1);

        assert_eq!(cell_at(board, 3, left, top), Some(Cursor::new(0, 0)));
        assert_eq!(cell_at(board, 3, left + 2, top), Some(Cursor::new(0, 0)));
        assert_eq!(cell_at(board, 3, left + 4, top + 2), Some(Cursor::new(1, 1)));
        assert_eq!(cell_at(board, 3, left + 10, top + 4), Some(Cursor::new(2, 2)));
    }

    #[test]
    fn test_cell_at_ignores_borders_and_separators() {
        let board = board_rect(Rect::new(0, 0, 80, 24), 3);
        let (left, top) = (board.x + 1, board.y + 1);

        assert_eq!(cell_at(board, 3, board.x, board.y), None);
        assert_eq!(cell_at(board, 3, left + 3, top), None);
        assert_eq!(cell_at(board, 3, left, top + 1), None);
        assert_eq!(cell_at(board, 3, board.x + board.width - 1, top), None);
        assert_eq!(cell_at(board, 3, 0, 0), None);
    }
}
