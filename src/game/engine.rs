use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use crate::options::TickInterval;
use rand::{rngs::ThreadRng, seq::IteratorRandom, Rng};

/// The state of a game of snake and the rules for advancing it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R = ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Cell,
    score: u32,
    running: bool,
    tick_interval: TickInterval,
}

/// A key that the engine responds to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl Key {
    fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Restart => None,
        }
    }
}

/// Everything a front end needs in order to draw the current state of a game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// The cells occupied by the snake, head first
    pub(crate) snake: Vec<Cell>,
    pub(crate) food: Cell,
    pub(crate) score: u32,
    pub(crate) running: bool,
}

impl Engine<ThreadRng> {
    pub(crate) fn new(tick_interval: TickInterval) -> Self {
        Engine::new_with_rng(Grid::default(), tick_interval, rand::rng())
    }
}

impl<R: Rng> Engine<R> {
    pub(crate) fn new_with_rng(grid: Grid, tick_interval: TickInterval, rng: R) -> Engine<R> {
        let mut engine = Engine {
            rng,
            grid,
            snake: initial_snake(),
            food: Cell::default(),
            score: 0,
            running: true,
            tick_interval,
        };
        engine.reset();
        engine
    }

    /// Start a new game
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.snake = initial_snake();
        self.running = true;
        self.spawn_food();
        log::debug!("New game started; food at {:?}", self.food);
    }

    /// Place the food on a random cell not occupied by the snake
    pub(crate) fn spawn_food(&mut self) {
        for _ in 0..consts::MAX_FOOD_DRAWS {
            let cell = self.grid.random_cell(&mut self.rng);
            if !self.snake.contains(cell) {
                self.food = cell;
                return;
            }
        }
        log::debug!("Random food placement kept hitting the snake; choosing from free cells");
        let snake = &self.snake;
        match self
            .grid
            .cells()
            .filter(|&c| !snake.contains(c))
            .choose(&mut self.rng)
        {
            Some(cell) => self.food = cell,
            None => {
                log::info!("Snake fills the board; game over with score {}", self.score);
                self.running = false;
            }
        }
    }

    /// Respond to a key press.  Direction keys turn the snake (as of the next
    /// tick) while the game is running, and the restart key starts a new game
    /// once the current one is over.  Anything else is ignored.
    pub(crate) fn request_direction(&mut self, key: Key) {
        if self.running {
            if let Some(direction) = key.direction() {
                if !self.snake.turn(direction) {
                    log::trace!("Ignoring attempt to reverse into {direction:?}");
                }
            }
        } else if key == Key::Restart {
            self.reset();
        }
    }

    /// Advance the game by one step
    pub(crate) fn tick(&mut self) {
        if !self.running {
            return;
        }
        let head = self
            .snake
            .direction()
            .advance(self.snake.head(), self.grid.seg_size());
        if !self.grid.contains(head) {
            log::info!("Snake hit the wall at {head:?}; final score {}", self.score);
            self.running = false;
            return;
        }
        if self.snake.collides(head) {
            log::info!("Snake ran into itself at {head:?}; final score {}", self.score);
            self.running = false;
            return;
        }
        self.snake.push_head(head);
        if head == self.food {
            self.score += 1;
            self.spawn_food();
        } else {
            self.snake.drop_tail();
        }
    }
}

impl<R> Engine<R> {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            running: self.running,
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn tick_interval(&self) -> TickInterval {
        self.tick_interval
    }
}

fn initial_snake() -> Snake {
    let [head, body @ ..] = consts::INITIAL_SNAKE;
    Snake::new(head, body, Direction::Right)
}
