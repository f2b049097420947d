use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    pub(super) const HEIGHT: u16 = 5;
    pub(super) const WIDTH: u16 = 28;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(Self::TEXT)
            .style(consts::LOGO_STYLE)
            .render(area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys_line("       ", ['←', '↓', '↑', '→']),
            keys_line("   or: ", ['h', 'j', 'k', 'l']),
            keys_line("   or: ", ['a', 's', 'w', 'd']),
            Line::from("Eat the food, but"),
            Line::from("don't hit a wall"),
            Line::from("or yourself!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

/// Build a line listing the given keys, separated by spaces, after `prefix`
fn keys_line(prefix: &'static str, keys: [char; 4]) -> Line<'static> {
    let mut line = Line::raw(prefix);
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            line.push_span(" ");
        }
        line.push_span(Span::styled(key.to_string(), consts::KEY_STYLE));
    }
    line
}
