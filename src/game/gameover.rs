use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up shown over the board once the game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    score: u32,
}

impl GameOver {
    /// The size that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const SIZE: Size = Size {
        width: 20,
        height: 5,
    };

    pub(super) fn new(score: u32) -> GameOver {
        GameOver { score }
    }
}

impl Widget for GameOver {
    /*
     * ┌─── GAME OVER ────┐
     * │ Score: 3         │
     * │ Restart (r)      │
     * │ Quit (q)         │
     * └──────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from(format!("Score: {}", self.score)),
            Line::from_iter([
                Span::raw("Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
