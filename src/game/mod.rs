mod direction;
mod engine;
mod gameover;
mod grid;
mod scene;
mod snake;
pub(crate) use self::engine::{Engine, Key};
pub(crate) use self::grid::Cell;
use self::scene::Scene;
use crate::app::AppState;
use crate::command::Command;
use crate::options::TickInterval;
use crate::scheduler::Ticker;
use crossterm::event::{poll, read, Event};
use rand::{rngs::ThreadRng, Rng};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, Frame};
use std::time::{Duration, Instant};

/// The game screen: an [`Engine`] driven by a fixed-interval [`Ticker`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = ThreadRng> {
    engine: Engine<R>,
    ticker: Ticker,

    /// Whether the whole board fit in the terminal when last drawn.  Ticks
    /// are held while it doesn't, so the snake never moves out of sight.
    board_visible: bool,
}

impl Game<ThreadRng> {
    pub(crate) fn new(tick_interval: TickInterval) -> Self {
        Game::from_engine(Engine::new(tick_interval))
    }
}

impl<R> Game<R> {
    pub(crate) fn from_engine(engine: Engine<R>) -> Game<R> {
        let ticker = Ticker::new(engine.tick_interval().as_duration());
        Game {
            engine,
            ticker,
            board_visible: true,
        }
    }

    pub(crate) fn tick_interval(&self) -> TickInterval {
        self.engine.tick_interval()
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let visible = Scene::fits(self.engine.grid(), area);
        if visible != self.board_visible {
            if visible {
                log::debug!("Terminal resized to {}x{}; resuming", area.width, area.height);
            } else {
                log::debug!(
                    "Terminal resized to {}x{}; board no longer fits, holding ticks",
                    area.width,
                    area.height
                );
            }
            self.board_visible = visible;
        }
        frame.render_widget(&*self, area);
    }
}

impl<R: Rng> Game<R> {
    /// Wait for either a key press or the next tick, whichever comes first,
    /// and act on it.  The tick continues to fire after the game is over,
    /// leaving the game-over screen up until the player restarts or quits.
    /// While the board does not fit in the terminal, only input is awaited.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<AppState>> {
        match self.time_left(Instant::now()) {
            Some(wait) if wait.is_zero() || !poll(wait)? => {
                self.advance();
                Ok(None)
            }
            _ => Ok(self.handle_event(read()?)),
        }
    }

    /// Return how long to wait for input before the next tick is due, or
    /// `None` if ticks are on hold
    fn time_left(&mut self, now: Instant) -> Option<Duration> {
        if self.board_visible {
            Some(self.ticker.time_left(now))
        } else {
            self.ticker.hold();
            None
        }
    }

    fn advance(&mut self) {
        self.engine.tick();
        self.ticker.fire();
    }

    fn handle_event(&mut self, event: Event) -> Option<AppState> {
        let key = match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(AppState::Quit),
            Command::Up => Key::Up,
            Command::Down => Key::Down,
            Command::Left => Key::Left,
            Command::Right => Key::Right,
            Command::R => Key::Restart,
            _ => return None,
        };
        self.engine.request_direction(key);
        None
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Scene::new(self.engine.grid(), self.engine.snapshot()).render(area, buf);
    }
}
