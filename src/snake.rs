use std::collections::{HashSet, VecDeque};

use crate::grid::{Board, Cell, Direction::{*, self}};

/// Maximum number of direction changes buffered between moves.
pub const MAX_PENDING: usize = 2;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    pending: VecDeque<Direction>,
    grow_next_move: bool,
}

impl Snake {
    pub fn new(start: Cell, heading: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Snake { body, heading, pending: VecDeque::with_capacity(MAX_PENDING), grow_next_move: false }
    }

    /// Head first, tail last.
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Queues a turn for a later `advance`. Requests beyond the queue depth
    /// are dropped; reversals are only rejected when they are applied.
    pub fn enqueue_direction(&mut self, dir: Direction) {
        if self.pending.len() < MAX_PENDING {
            self.pending.push_back(dir);
        }
    }

    /// Moves one cell along the heading and returns the new head.
    pub fn advance(&mut self) -> Cell {
        if let Some(dir) = self.pending.pop_front() {
            if dir != self.heading.opposite() {
                self.heading = dir;
            }
        }

        let new_head = self.head().step(self.heading);
        self.body.push_front(new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
        } else {
            self.body.pop_back();
        }

        new_head
    }

    pub fn mark_growth(&mut self) {
        self.grow_next_move = true;
    }

    pub fn has_collided(&self, board: &Board) -> bool {
        let head = self.head();
        !board.contains(head) || self.body.iter().skip(1).any(|c| *c == head)
    }

    pub fn head_char(&self) -> char {
        match self.heading {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
impl Snake {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn pending(&self) -> &VecDeque<Direction> {
        &self.pending
    }

    pub fn is_growing(&self) -> bool {
        self.grow_next_move
    }
}
