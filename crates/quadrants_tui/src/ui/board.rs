//! Board rendering.

use quadrants::{Coordinate, GameState, Player, TileView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::center_rect;

const CELL_WIDTH: u16 = 4;
const BOARD_WIDTH: u16 = 4 + CELL_WIDTH * 6 + 1;
const BOARD_HEIGHT: u16 = 2 + 6 * 2;

/// Renders the 6x6 board with the cursor highlighted.
///
/// Claimed tiles show as `a`/`b`; tiles inside a credited quadrant's
/// display block show as bold `A`/`B` regardless of who claimed them.
pub fn render_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: Option<Coordinate>) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let mut lines: Vec<Line> = Vec::with_capacity(BOARD_HEIGHT as usize);
    lines.push(header_line());
    lines.push(border_line("┌", "┬", "┐"));

    for row in Coordinate::MIN..=Coordinate::MAX {
        lines.push(row_line(game, cursor, row));
        if row < Coordinate::MAX {
            lines.push(border_line("├", "┼", "┤"));
        }
    }
    lines.push(border_line("└", "┴", "┘"));

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn header_line() -> Line<'static> {
    let mut text = String::from("    ");
    for column in Coordinate::MIN..=Coordinate::MAX {
        text.push_str(&format!(" {}  ", column));
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn border_line(left: &str, mid: &str, right: &str) -> Line<'static> {
    let mut text = String::from("   ");
    text.push_str(left);
    for column in Coordinate::MIN..=Coordinate::MAX {
        text.push_str("───");
        text.push_str(if column < Coordinate::MAX { mid } else { right });
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn row_line<'a>(game: &GameState, cursor: Option<Coordinate>, row: u8) -> Line<'a> {
    let sep = Span::styled("│", Style::default().fg(Color::DarkGray));
    let mut spans = vec![Span::raw(format!(" {} ", row)), sep.clone()];

    for column in Coordinate::MIN..=Coordinate::MAX {
        let coordinate = Coordinate::new(row, column).expect("row and column are in range");
        spans.push(cell_span(game, cursor, coordinate));
        spans.push(sep.clone());
    }

    Line::from(spans)
}

fn cell_span<'a>(game: &GameState, cursor: Option<Coordinate>, coordinate: Coordinate) -> Span<'a> {
    let (glyph, base_style) = match game.tile_view(coordinate) {
        TileView::Unclaimed => ("·", Style::default().fg(Color::DarkGray)),
        TileView::Claimed(Player::A) => ("a", Style::default().fg(Color::Blue)),
        TileView::Claimed(Player::B) => ("b", Style::default().fg(Color::Red)),
        TileView::Credited(Player::A) => (
            "A",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        TileView::Credited(Player::B) => (
            "B",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cursor == Some(coordinate) {
        Span::styled(
            format!(">{}<", glyph),
            base_style.bg(Color::White).fg(Color::Black),
        )
    } else {
        Span::styled(format!(" {} ", glyph), base_style)
    }
}
