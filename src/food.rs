use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Board, Cell};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(board: &Board, occupied: &HashSet<Cell>, rng: &mut R) -> Self {
        let mut food = Food { position: board.center() };
        food.place(board, occupied, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a random free cell.
    ///
    /// Samples until a free cell comes up, so the caller must not pass a
    /// fully occupied board. A nearly full board means many retries.
    pub fn place<R: Rng + ?Sized>(&mut self, board: &Board, occupied: &HashSet<Cell>, rng: &mut R) {
        debug_assert!(occupied.len() < board.area(), "no free cell left for food");

        loop {
            let cell = board.random_cell(rng);
            if !occupied.contains(&cell) {
                self.position = cell;
                return;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn at(position: Cell) -> Self {
        Food { position }
    }
}
