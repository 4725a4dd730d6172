use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Maps one line of player input to a direction. W/A/S/D in either case,
    /// anything else means "keep going".
    pub fn from_input(line: &str) -> Option<Direction> {
        match line.trim().to_uppercase().as_str() {
            "W" => Some(Up),
            "A" => Some(Left),
            "S" => Some(Down),
            "D" => Some(Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// The cell one step away from `pos`, or `None` if that leaves a
    /// `height` x `width` board.
    pub fn step_from(self, pos: Coords, height: usize, width: usize) -> Option<Coords> {
        let (row, col) = pos;
        let next = match self {
            Up => (row.checked_sub(1)?, col),
            Down => (row + 1, col),
            Left => (row, col.checked_sub(1)?),
            Right => (row, col + 1),
        };

        if next.0 < height && next.1 < width { Some(next) } else { None }
    }
}

pub struct Snake {
    head: Coords,
    // Nearest-to-head first, tail last
    body: VecDeque<Coords>,
    heading: Direction,
}

impl Snake {
    /// Lays out a straight snake of `size` cells (head included) ending at
    /// `head`, trailing away from `heading`. The caller makes sure it fits.
    pub fn new(head: Coords, size: usize, heading: Direction) -> Self {
        let body = (1..size)
            .map(|i| match heading {
                Up => (head.0 + i, head.1),
                Down => (head.0 - i, head.1),
                Left => (head.0, head.1 + i),
                Right => (head.0, head.1 - i),
            })
            .collect();

        Snake { head, body, heading }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Total length, head included.
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// The direction the next step actually takes: no input keeps the
    /// heading, and so does an attempt to turn straight back.
    pub fn resolve_direction(&self, requested: Option<Direction>) -> Direction {
        match requested {
            Some(dir) if dir != self.heading.opposite() => dir,
            _ => self.heading,
        }
    }

    /// Commits a legal move to `new_head`. The old head becomes the first
    /// body segment; the tail is dropped and returned unless `grow` is set.
    pub fn advance(&mut self, new_head: Coords, heading: Direction, grow: bool) -> Option<Coords> {
        self.heading = heading;
        self.body.push_front(self.head);
        self.head = new_head;

        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_mapping() {
        assert_eq!(Direction::from_input("w"), Some(Up));
        assert_eq!(Direction::from_input("A"), Some(Left));
        assert_eq!(Direction::from_input("s\n"), Some(Down));
        assert_eq!(Direction::from_input(" d "), Some(Right));
        assert_eq!(Direction::from_input(""), None);
        assert_eq!(Direction::from_input("up"), None);
        assert_eq!(Direction::from_input("x"), None);
    }

    #[test]
    fn step_stays_on_board() {
        assert_eq!(Up.step_from((0, 0), 10, 10), None);
        assert_eq!(Left.step_from((0, 0), 10, 10), None);
        assert_eq!(Down.step_from((9, 3), 10, 10), None);
        assert_eq!(Right.step_from((3, 9), 10, 10), None);
        assert_eq!(Down.step_from((5, 5), 10, 10), Some((6, 5)));
        assert_eq!(Up.step_from((5, 5), 10, 10), Some((4, 5)));
        assert_eq!(Left.step_from((5, 5), 10, 10), Some((5, 4)));
        assert_eq!(Right.step_from((5, 5), 10, 10), Some((5, 6)));
    }

    #[test]
    fn new_snake_trails_behind_heading() {
        let snake = Snake::new((5, 5), 3, Right);
        assert_eq!(snake.head(), (5, 5));
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), vec![(5, 4), (5, 3)]);
        assert_eq!(snake.len(), 3);

        let snake = Snake::new((2, 2), 2, Up);
        assert_eq!(snake.body().back(), Some(&(3, 2)));
    }

    #[test]
    fn reversal_is_ignored() {
        let snake = Snake::new((5, 5), 2, Right);
        assert_eq!(snake.resolve_direction(Some(Left)), Right);
        assert_eq!(snake.resolve_direction(None), Right);
        assert_eq!(snake.resolve_direction(Some(Up)), Up);
        assert_eq!(snake.resolve_direction(Some(Right)), Right);
    }

    #[test]
    fn advance_moves_or_grows() {
        let mut snake = Snake::new((5, 5), 2, Right);

        let old_tail = snake.advance((4, 5), Up, false);
        assert_eq!(old_tail, Some((5, 4)));
        assert_eq!(snake.head(), (4, 5));
        assert_eq!(snake.heading(), Up);
        assert_eq!(snake.len(), 2);

        let old_tail = snake.advance((3, 5), Up, true);
        assert_eq!(old_tail, None);
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), vec![(4, 5), (5, 5)]);
        assert_eq!(snake.len(), 3);
    }
}
