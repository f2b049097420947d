use super::engine::Snapshot;
use super::gameover::GameOver;
use super::grid::{Cell, Grid};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Widget},
};

/// Widget that draws a game as captured by a [`Snapshot`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Scene {
    grid: Grid,
    snapshot: Snapshot,
}

impl Scene {
    pub(super) fn new(grid: Grid, snapshot: Snapshot) -> Scene {
        Scene { grid, snapshot }
    }

    /// Test whether `area` is large enough to show the score bar and the
    /// whole board for `grid`
    pub(super) fn fits(grid: Grid, area: Rect) -> bool {
        let size = required_size(grid);
        area.width >= size.width && area.height >= size.height
    }
}

/// The size of the area needed to draw the score bar and the whole board
fn required_size(grid: Grid) -> Size {
    let columns = u16::try_from(grid.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
    Size {
        width: columns.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
        height: rows.saturating_add(3),
    }
}

impl Widget for Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !Scene::fits(self.grid, area) {
            TooSmall {
                needed: required_size(self.grid),
            }
            .render(area, buf);
            return;
        }
        let display = center_rect(area, required_size(self.grid));
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(" Score: {}", self.snapshot.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        Block::bordered().render(board_area, buf);

        if self.snapshot.running {
            let mut canvas = Canvas {
                area: board_area.inner(Margin::new(1, 1)),
                grid: self.grid,
                buf,
            };
            canvas.draw_cell(self.snapshot.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
            for &cell in self.snapshot.snake.iter().skip(1) {
                canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
            // Draw the head last so it stays visible when it overlaps the tail
            if let Some(&head) = self.snapshot.snake.first() {
                canvas.draw_cell(head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_HEAD_STYLE);
            }
        } else {
            GameOver::new(self.snapshot.score).render(center_rect(display, GameOver::SIZE), buf);
        }
    }
}

/// Notice drawn in place of the board when the terminal cannot hold all of
/// it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct TooSmall {
    needed: Size,
}

impl TooSmall {
    const HEIGHT: u16 = 4;
}

impl Widget for TooSmall {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [text_area] = Layout::vertical([Self::HEIGHT])
            .flex(Flex::Center)
            .areas(area);
        Text::from_iter([
            Line::from("Terminal too small"),
            Line::from(format!(
                "(needs {}×{})",
                self.needed.width, self.needed.height
            )),
            Line::default(),
            Line::from_iter([
                Span::raw("Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ])
        .centered()
        .render(text_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: [char; 2], style: Style) {
        let Some(pos) = self.position(cell) else {
            return;
        };
        for (x, ch) in (pos.x..).zip(symbol) {
            if !self.area.contains(Position::new(x, pos.y)) {
                continue;
            }
            if let Some(c) = self.buf.cell_mut((x, pos.y)) {
                c.set_char(ch);
                c.set_style(style);
            }
        }
    }

    /// Return the terminal position of the left half of `cell`
    fn position(&self, cell: Cell) -> Option<Position> {
        if !self.grid.contains(cell) {
            return None;
        }
        let seg = self.grid.seg_size();
        let column = u16::try_from(cell.x / seg).ok()?;
        let row = u16::try_from(cell.y / seg).ok()?;
        let x = self
            .area
            .x
            .checked_add(column.checked_mul(consts::CELL_WIDTH)?)?;
        let y = self.area.y.checked_add(row)?;
        Some(Position::new(x, y))
    }
}
