use super::grid::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell `step` units away from `cell` in this direction
    pub(crate) fn advance(self, cell: Cell, step: i32) -> Cell {
        let Cell { x, y } = cell;
        match self {
            Direction::Up => Cell::new(x, y - step),
            Direction::Down => Cell::new(x, y + step),
            Direction::Left => Cell::new(x - step, y),
            Direction::Right => Cell::new(x + step, y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(100, 100), Cell::new(100, 80))]
    #[case(Direction::Down, Cell::new(100, 100), Cell::new(100, 120))]
    #[case(Direction::Left, Cell::new(100, 100), Cell::new(80, 100))]
    #[case(Direction::Right, Cell::new(100, 100), Cell::new(120, 100))]
    #[case(Direction::Left, Cell::new(0, 40), Cell::new(-20, 40))]
    #[case(Direction::Up, Cell::new(40, 0), Cell::new(40, -20))]
    fn test_direction_advance(#[case] d: Direction, #[case] cell: Cell, #[case] r: Cell) {
        assert_eq!(d.advance(cell, 20), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
