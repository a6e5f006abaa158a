use rowline_engine::{Board, Cell, GameKind, Player, Pos};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::style;

/// Traditional star points of the 15×15 board.
pub const STAR_POINTS: [Pos; 5] = [
    Pos::new(3, 3),
    Pos::new(11, 3),
    Pos::new(7, 7),
    Pos::new(3, 11),
    Pos::new(11, 11),
];

/// Terminal cells used by one board cell, as `(width, height)`.
const fn cell_size(kind: GameKind) -> (u16, u16) {
    match kind {
        GameKind::Gomoku => (3, 1),
        GameKind::TicTacToe => (7, 3),
    }
}

fn piece_symbol(kind: GameKind, player: Player) -> &'static str {
    match (kind, player) {
        (GameKind::Gomoku, Player::Human) => "●",
        (GameKind::Gomoku, Player::Ai) => "○",
        (GameKind::TicTacToe, Player::Human) => "X",
        (GameKind::TicTacToe, Player::Ai) => "O",
    }
}

fn player_style(player: Player) -> Style {
    match player {
        Player::Human => style::HUMAN,
        Player::Ai => style::AI,
    }
}

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    kind: GameKind,
    cursor: Option<Pos>,
    last_move: Option<Pos>,
    removing: Option<Pos>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board, kind: GameKind) -> Self {
        Self {
            board,
            kind,
            cursor: None,
            last_move: None,
            removing: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: Pos) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn last_move(self, last_move: Option<Pos>) -> Self {
        Self { last_move, ..self }
    }

    /// Highlights the piece about to be removed.
    pub fn removing(self, removing: Option<Pos>) -> Self {
        Self { removing, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn grid_width(&self) -> u16 {
        let size = u16::try_from(self.board.size()).unwrap_or(u16::MAX);
        size.saturating_mul(cell_size(self.kind).0)
    }

    fn grid_height(&self) -> u16 {
        let size = u16::try_from(self.board.size()).unwrap_or(u16::MAX);
        size.saturating_mul(cell_size(self.kind).1)
    }

    pub fn width(&self) -> u16 {
        self.grid_width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        self.grid_height() + super::block_vertical_margin(self.block.as_ref())
    }

    /// Area covered by the cells when the widget is rendered into `area`.
    pub fn grid_area(&self, area: Rect) -> Rect {
        let inner = self.block.inner_if_some(area);
        Rect {
            width: inner.width.min(self.grid_width()),
            height: inner.height.min(self.grid_height()),
            ..inner
        }
    }

    /// Board cell under the terminal position `(column, row)`, given the grid area.
    pub fn cell_at(&self, grid: Rect, column: u16, row: u16) -> Option<Pos> {
        if !grid.contains((column, row).into()) {
            return None;
        }
        let (width, height) = cell_size(self.kind);
        let x = usize::from((column - grid.x) / width);
        let y = usize::from((row - grid.y) / height);
        let pos = Pos::new(x, y);
        self.board.contains(pos).then_some(pos)
    }

    fn cell_rect(&self, grid: Rect, pos: Pos) -> Option<Rect> {
        let (width, height) = cell_size(self.kind);
        let x = u16::try_from(pos.x).ok()?.checked_mul(width)?;
        let y = u16::try_from(pos.y).ok()?.checked_mul(height)?;
        let rect = Rect::new(grid.x + x, grid.y + y, width, height);
        Some(rect.intersection(grid))
    }

    fn empty_symbol(&self, pos: Pos) -> &'static str {
        match self.kind {
            GameKind::Gomoku if STAR_POINTS.contains(&pos) => "─╋─",
            GameKind::Gomoku => "─┼─",
            GameKind::TicTacToe => "·",
        }
    }

    fn render_cell(&self, rect: Rect, pos: Pos, cell: Cell, buf: &mut Buffer) {
        if rect.is_empty() {
            return;
        }
        let mut cell_style = style::BOARD;
        if self.cursor == Some(pos) {
            cell_style = cell_style.patch(style::CURSOR);
        }
        buf.set_style(rect, cell_style);

        let (symbol, symbol_style) = match cell.owner() {
            Some(player) => (piece_symbol(self.kind, player), cell_style.patch(player_style(player))),
            None => (self.empty_symbol(pos), cell_style),
        };
        let symbol_style = if self.removing == Some(pos) {
            symbol_style.patch(style::REMOVING)
        } else {
            symbol_style
        };

        let symbol_width = u16::try_from(symbol.chars().count()).unwrap_or(rect.width);
        let x = rect.x + rect.width.saturating_sub(symbol_width) / 2;
        let y = rect.y + rect.height / 2;
        buf.set_string(x, y, symbol, symbol_style);

        if self.last_move == Some(pos) && rect.width >= 3 && x > rect.x {
            buf.set_string(x - 1, y, "[", cell_style.patch(style::MARKER));
            buf.set_string(x + symbol_width, y, "]", cell_style.patch(style::MARKER));
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let grid = self.grid_area(area);

        for (y, row) in self.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let pos = Pos::new(x, y);
                if let Some(rect) = self.cell_rect(grid, pos) {
                    self.render_cell(rect, pos, *cell, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_includes_border() {
        let board = Board::new(15);
        let display = BoardDisplay::new(&board, GameKind::Gomoku).block(BlockWidget::bordered());
        assert_eq!((display.width(), display.height()), (47, 17));

        let board = Board::new(3);
        let display = BoardDisplay::new(&board, GameKind::TicTacToe);
        assert_eq!((display.width(), display.height()), (21, 9));
    }

    #[test]
    fn test_cell_at_maps_mouse_position() {
        let board = Board::new(15);
        let display = BoardDisplay::new(&board, GameKind::Gomoku).block(BlockWidget::bordered());
        let grid = display.grid_area(Rect::new(10, 5, 47, 17));
        assert_eq!(grid, Rect::new(11, 6, 45, 15));

        assert_eq!(display.cell_at(grid, 11, 6), Some(Pos::new(0, 0)));
        assert_eq!(display.cell_at(grid, 13, 6), Some(Pos::new(0, 0)));
        assert_eq!(display.cell_at(grid, 14, 7), Some(Pos::new(1, 1)));
        assert_eq!(display.cell_at(grid, 55, 20), Some(Pos::new(14, 14)));
        assert_eq!(display.cell_at(grid, 10, 6), None);
        assert_eq!(display.cell_at(grid, 56, 6), None);
    }

    #[test]
    fn test_renders_pieces_and_star_points() {
        let mut board = Board::new(15);
        board.place(Pos::new(0, 0), Player::Human).unwrap();
        board.place(Pos::new(1, 0), Player::Ai).unwrap();
        let display = BoardDisplay::new(&board, GameKind::Gomoku);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        assert_eq!(buf[(1, 0)].symbol(), "●");
        assert_eq!(buf[(4, 0)].symbol(), "○");
        assert_eq!(buf[(10, 3)].symbol(), "╋");
        assert_eq!(buf[(22, 7)].symbol(), "╋");
        assert_eq!(buf[(7, 0)].symbol(), "┼");
    }

    #[test]
    fn test_marks_last_move() {
        let mut board = Board::new(3);
        board.place(Pos::new(1, 1), Player::Ai).unwrap();
        let display = BoardDisplay::new(&board, GameKind::TicTacToe).last_move(Some(Pos::new(1, 1)));
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        assert_eq!(buf[(10, 4)].symbol(), "O");
        assert_eq!(buf[(9, 4)].symbol(), "[");
        assert_eq!(buf[(11, 4)].symbol(), "]");
    }
}
