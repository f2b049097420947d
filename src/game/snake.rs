use super::direction::Direction;
use super::grid::Cell;
use std::collections::VecDeque;

/// The cells occupied by the snake and the direction it is heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the snake, from just behind the head to
    /// the tip of the tail
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake will move on the next tick
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a new snake with its head at `head`, the rest of its segments at
    /// `body` (nearest the head first), and facing in `direction`
    pub(super) fn new<I>(head: Cell, body: I, direction: Direction) -> Snake
    where
        I: IntoIterator<Item = Cell>,
    {
        Snake {
            head,
            body: body.into_iter().collect(),
            direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Return the direction the snake is facing
    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of segments, head included
    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the segments of the snake, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Test whether any segment of the snake occupies `cell`
    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Test whether moving the head to `cell` would run into the snake.  The
    /// last segment is not counted, as the tail moves out of the way on the
    /// same tick.
    pub(super) fn collides(&self, cell: Cell) -> bool {
        self.cells()
            .take(self.len().saturating_sub(1))
            .any(|c| c == cell)
    }

    /// Face the snake in `direction` unless that would turn it back on
    /// itself.  Returns `true` if the direction was changed.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Make `cell` the new head
    pub(super) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(self.head);
        self.head = cell;
    }

    /// Remove the last segment of the tail
    pub(super) fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }
}
