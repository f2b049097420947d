//! Assorted constants & hard-coded configuration
use crate::game::Cell;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the playing field in grid units
pub(crate) const WIDTH: i32 = 800;

/// Height of the playing field in grid units
pub(crate) const HEIGHT: i32 = 600;

/// Size of one cell of the grid.  Every position on the grid is a multiple of
/// this.
pub(crate) const SEG_SIZE: i32 = 20;

/// The snake at the start of every game, head first
pub(crate) const INITIAL_SNAKE: [Cell; 3] = [
    Cell::new(100, 100),
    Cell::new(80, 100),
    Cell::new(60, 100),
];

/// Number of random draws to try when placing food before falling back to
/// picking from the list of free cells
pub(crate) const MAX_FOOD_DRAWS: usize = 64;

/// Number of terminal columns used to draw a single grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Draw the settings screen inside a rectangle of this size in the center of
/// the terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: [char; 2] = ['█', '█'];

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: [char; 2] = ['█', '█'];

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: [char; 2] = ['(', ')'];

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the title on the settings screen
pub(crate) const LOGO_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
