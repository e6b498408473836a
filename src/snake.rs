use std::collections::VecDeque;

use crate::board::{Board, Cell, Direction};

/// The player's body plus its steering state.
///
/// Knows how to move and how to answer occupancy questions, but has no notion
/// of dying: deciding what a collision means is left to the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    board: Board,
    /// Head first, tail last. Never empty.
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_tail: Option<Cell>,
}

impl Snake {
    pub fn new(board: Board) -> Self {
        Snake {
            board,
            body: VecDeque::from([board.center()]),
            direction: Direction::Right,
            pending_direction: None,
            last_tail: None,
        }
    }

    /// Queues a turn for the next move. A request to reverse onto the current
    /// direction is dropped; a later request replaces an earlier one.
    pub fn request_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.pending_direction = Some(new_direction);
        }
    }

    pub fn advance(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.head().wrapped_add(self.direction.into(), self.board);
        self.body.push_front(new_head);

        // Always drop the tail here; growing puts it back.
        self.last_tail = self.body.pop_back();
    }

    /// Re-attaches the tail cell dropped by the last `advance`, netting one
    /// extra segment.
    pub fn grow(&mut self) {
        if let Some(tail) = self.last_tail {
            self.body.push_back(tail);
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn occupies(&self, cell: Cell, excluding_head: bool) -> bool {
        let skip = usize::from(excluding_head);
        self.body.iter().skip(skip).any(|segment| *segment == cell)
    }

    pub fn reset(&mut self) {
        *self = Snake::new(self.board);
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    #[cfg(test)]
    pub(crate) fn from_cells(board: Board, cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty());
        Snake {
            board,
            body: cells.iter().copied().collect(),
            direction,
            pending_direction: None,
            last_tail: None,
        }
    }
}
