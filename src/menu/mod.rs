mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::AppState;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::options::{Adjustable, TickInterval};
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// The settings screen shown at startup, where the player picks the tick
/// interval before starting the game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SettingsMenu {
    selection: Selection,
    tick_interval: TickInterval,
}

impl SettingsMenu {
    pub(crate) fn new(tick_interval: TickInterval) -> Self {
        SettingsMenu {
            selection: Selection::default(),
            tick_interval,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<AppState>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<AppState> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit | Command::Q) | (Selection::QuitButton, Command::Enter) => {
                return Some(AppState::Quit);
            }
            (_, Command::P) | (Selection::PlayButton, Command::Enter) => {
                return Some(AppState::Game(self.play()));
            }
            (Selection::TickInterval, Command::Left) => self.tick_interval.decrease(),
            (Selection::TickInterval, Command::Right) => self.tick_interval.increase(),
            (Selection::TickInterval, Command::Home) => self.tick_interval.minimize(),
            (Selection::TickInterval, Command::End) => self.tick_interval.maximize(),
            (_, Command::Home) => self.selection = Selection::min(),
            (_, Command::End) => self.selection = Selection::max(),
            (_, Command::Down) => {
                if let Some(sel) = self.selection.next() {
                    self.selection = sel;
                }
            }
            (_, Command::Up) => {
                if let Some(sel) = self.selection.prev() {
                    self.selection = sel;
                }
            }
            (_, Command::Next) => {
                self.selection = self.selection.next().unwrap_or_else(Selection::min);
            }
            (_, Command::Prev) => {
                self.selection = self.selection.prev().unwrap_or_else(Selection::max);
            }
            _ => (),
        }
        None
    }

    fn play(&self) -> Game {
        let game = Game::new(self.tick_interval);
        log::info!(
            "Starting game with a tick interval of {}",
            game.tick_interval()
        );
        game
    }
}

impl Widget for &SettingsMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, slider_area, quit_area] =
            Layout::vertical([
                Logo::HEIGHT,
                Instructions::HEIGHT,
                1,
                TickSlider::HEIGHT,
                1,
            ])
            .flex(Flex::Start)
            .spacing(1)
            .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        button("Play", "p", self.selection == Selection::PlayButton).render(play_area, buf);

        let [slider_area] = Layout::horizontal([TickSlider::WIDTH])
            .flex(Flex::Center)
            .areas(slider_area);
        TickSlider {
            value: self.tick_interval,
            selected: self.selection == Selection::TickInterval,
        }
        .render(slider_area, buf);

        button("Quit", "q", self.selection == Selection::QuitButton).render(quit_area, buf);
    }
}

fn button(label: &'static str, key: &'static str, selected: bool) -> Line<'static> {
    let style = if selected {
        consts::MENU_SELECTION_STYLE
    } else {
        Style::new()
    };
    Line::from_iter([
        Span::styled(format!("[{label} ("), style),
        Span::styled(key, consts::KEY_STYLE.patch(style)),
        Span::styled(")]", style),
    ])
    .centered()
}

#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    TickInterval,
    QuitButton,
}

/// Box for displaying & adjusting the tick interval
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct TickSlider {
    value: TickInterval,
    selected: bool,
}

impl TickSlider {
    const HEIGHT: u16 = 3;
    const HORIZONTAL_PADDING: u16 = 3; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const VALUE_WIDTH: u16 = 10;
    const WIDTH: u16 = 2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + Self::VALUE_WIDTH;
}

impl Widget for TickSlider {
    /*
     * ┌ Tick interval ───┐
     * │   » ◀ 100 ms ▶   │
     * └──────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Tick interval ")
            .padding(Padding::horizontal(Self::HORIZONTAL_PADDING));
        let inner = block.inner(area);
        block.render(area, buf);
        let style = if self.selected {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        let s = format!(
            "{pointer:pwidth$}{left} {value:>6} {right}",
            pointer = if self.selected { "»" } else { "" },
            pwidth = usize::from(Self::POINTER_WIDTH),
            left = if self.value.can_decrease() { '◀' } else { '◁' },
            value = self.value,
            right = if self.value.can_increase() { '▶' } else { '▷' },
        );
        Span::styled(s, style).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(menu: &mut SettingsMenu, code: KeyCode) -> Option<AppState> {
        menu.handle_event(Event::Key(code.into()))
    }

    fn expected_screen(slider_line: &str) -> Buffer {
        let mut expected = Buffer::with_lines([
            "                           ____              _                                  ",
            "                          / ___| _ __   __ _| | _____                           ",
            r"                          \___ \| '_ \ / _` | |/ / _ \                          ",
            "                           ___) | | | | (_| |   <  __/                          ",
            r"                          |____/|_| |_|\__,_|_|\_\___|                          ",
            "                                                                                ",
            "                              Move the snake with:                              ",
            "                                     ← ↓ ↑ →                                    ",
            "                                 or: h j k l                                    ",
            "                                 or: a s w d                                    ",
            "                              Eat the food, but                                 ",
            "                              don't hit a wall                                  ",
            "                              or yourself!                                      ",
            "                                                                                ",
            "                                   [Play (p)]                                   ",
            "                                                                                ",
            "                              ┌ Tick interval ───┐                              ",
            slider_line,
            "                              └──────────────────┘                              ",
            "                                                                                ",
            "                                   [Quit (q)]                                   ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(26, 0, 28, 5), consts::LOGO_STYLE);
        for y in 7..10 {
            for x in [37, 39, 41, 43] {
                expected.set_style(Rect::new(x, y, 1, 1), consts::KEY_STYLE);
            }
        }
        expected.set_style(Rect::new(42, 14, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(42, 20, 1, 1), consts::KEY_STYLE);
        expected
    }

    #[test]
    fn draw_initial() {
        let menu = SettingsMenu::new(TickInterval::default());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let mut expected = expected_screen(
            "                              │     ◀ 100 ms ▶   │                              ",
        );
        expected.set_style(Rect::new(35, 14, 10, 1), consts::MENU_SELECTION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn adjust_tick_interval() {
        let area = Rect::new(0, 0, 80, 24);
        let mut menu = SettingsMenu::new(TickInterval::default());
        assert!(press(&mut menu, KeyCode::Down).is_none());
        assert!(press(&mut menu, KeyCode::Right).is_none());
        assert!(press(&mut menu, KeyCode::Right).is_none());
        assert_eq!(menu.tick_interval, TickInterval::clamped(120));
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let mut expected = expected_screen(
            "                              │   » ◀ 120 ms ▶   │                              ",
        );
        expected.set_style(Rect::new(34, 17, 12, 1), consts::MENU_SELECTION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);

        assert!(press(&mut menu, KeyCode::End).is_none());
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let mut expected = expected_screen(
            "                              │   » ◀ 500 ms ▷   │                              ",
        );
        expected.set_style(Rect::new(34, 17, 12, 1), consts::MENU_SELECTION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);

        assert!(press(&mut menu, KeyCode::Home).is_none());
        assert_eq!(menu.tick_interval, TickInterval::MINIMUM);
        assert!(press(&mut menu, KeyCode::Left).is_none());
        assert_eq!(menu.tick_interval, TickInterval::MINIMUM);
    }

    #[test]
    fn arrows_only_adjust_slider() {
        let mut menu = SettingsMenu::new(TickInterval::default());
        assert!(press(&mut menu, KeyCode::Right).is_none());
        assert!(press(&mut menu, KeyCode::Left).is_none());
        assert_eq!(menu.tick_interval, TickInterval::default());
        assert_eq!(menu.selection, Selection::PlayButton);
    }

    #[test]
    fn navigate() {
        let mut menu = SettingsMenu::new(TickInterval::default());
        assert!(press(&mut menu, KeyCode::Up).is_none());
        assert_eq!(menu.selection, Selection::PlayButton);
        assert!(press(&mut menu, KeyCode::Tab).is_none());
        assert_eq!(menu.selection, Selection::TickInterval);
        assert!(press(&mut menu, KeyCode::Down).is_none());
        assert_eq!(menu.selection, Selection::QuitButton);
        assert!(press(&mut menu, KeyCode::Down).is_none());
        assert_eq!(menu.selection, Selection::QuitButton);
        assert!(press(&mut menu, KeyCode::Tab).is_none());
        assert_eq!(menu.selection, Selection::PlayButton);
        assert!(press(&mut menu, KeyCode::BackTab).is_none());
        assert_eq!(menu.selection, Selection::QuitButton);
        assert!(press(&mut menu, KeyCode::Home).is_none());
        assert_eq!(menu.selection, Selection::PlayButton);
        assert!(press(&mut menu, KeyCode::End).is_none());
        assert_eq!(menu.selection, Selection::QuitButton);
    }

    #[test]
    fn play_with_chosen_interval() {
        let mut menu = SettingsMenu::new(TickInterval::clamped(300));
        assert!(press(&mut menu, KeyCode::Tab).is_none());
        assert!(press(&mut menu, KeyCode::Left).is_none());
        assert!(press(&mut menu, KeyCode::Home).is_none());
        assert!(press(&mut menu, KeyCode::Right).is_none());
        let Some(AppState::Game(game)) = press(&mut menu, KeyCode::Char('p')) else {
            panic!("Pressing 'p' did not start a game");
        };
        assert_eq!(game.tick_interval(), TickInterval::clamped(60));
    }

    #[test]
    fn enter_on_play() {
        let mut menu = SettingsMenu::new(TickInterval::default());
        let Some(AppState::Game(game)) = press(&mut menu, KeyCode::Enter) else {
            panic!("Pressing Enter on Play did not start a game");
        };
        assert_eq!(game.tick_interval(), TickInterval::default());
    }

    #[test]
    fn quit() {
        let mut menu = SettingsMenu::new(TickInterval::default());
        assert!(matches!(
            press(&mut menu, KeyCode::Char('q')),
            Some(AppState::Quit)
        ));
        assert!(press(&mut menu, KeyCode::End).is_none());
        assert!(matches!(
            press(&mut menu, KeyCode::Enter),
            Some(AppState::Quit)
        ));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            menu.handle_event(Event::Key(ctrl_c)),
            Some(AppState::Quit)
        ));
    }
}
