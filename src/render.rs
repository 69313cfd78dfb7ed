use rand::Rng;

use crate::game::{GameManager, GameState};
use crate::grid::Cell;
use crate::highscore::HighScoreStore;
use crate::{Coords, TermInt};

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

/// Rows above the board's top border.
const STATUS_ROWS: TermInt = 1;

/// An off-screen character grid, drawn in full every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: TermInt,
    height: TermInt,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Canvas { width, height, cells: vec![' '; width as usize * height as usize] }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn get(&self, pos: Coords) -> char {
        self.cells[self.index(pos)]
    }

    /// Writes are clipped to the canvas.
    pub fn put(&mut self, pos: Coords, ch: char) {
        if pos.0 < self.width && pos.1 < self.height {
            let idx = self.index(pos);
            self.cells[idx] = ch;
        }
    }

    pub fn text(&mut self, pos: Coords, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put((pos.0 + i as TermInt, pos.1), ch);
        }
    }

    fn index(&self, pos: Coords) -> usize {
        self.width as usize * pos.1 as usize + pos.0 as usize
    }

    fn draw_borders(&mut self, top_left: Coords, width: TermInt, height: TermInt) {
        let (end_x, end_y) = (top_left.0 + width - 1, top_left.1 + height - 1);

        for x in top_left.0..=end_x {
            let ch = if x == top_left.0 || x == end_x {'+'} else {'-'};
            self.put((x, top_left.1), ch);
            self.put((x, end_y), ch);
        }

        for y in top_left.1 + 1..end_y {
            self.put((top_left.0, y), '|');
            self.put((end_x, y), '|');
        }
    }

    /// Centres a block of lines over the board, padded by one blank row above and below.
    fn message(&mut self, center: Coords, lines: &[&str]) {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        for y_diff in 0..msg_height {
            for x_diff in 0..msg_width {
                self.put((top_left.0 + x_diff, top_left.1 + y_diff), ' ');
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.text((top_left.0, top_left.1 + i as TermInt + 1), &padded_line);
        }
    }
}

/// Size of the canvas needed for a board of the given size.
pub fn canvas_size(board_width: i32, board_height: i32) -> Coords {
    ((board_width + 2) as TermInt, (board_height + 2) as TermInt + STATUS_ROWS)
}

/// Draws everything the player sees for the manager's current state.
pub fn draw<S: HighScoreStore, R: Rng>(game: &GameManager<S, R>) -> Canvas {
    let board = *game.board();
    let (width, height) = canvas_size(board.width, board.height);
    let mut canvas = Canvas::new(width, height);

    canvas.draw_borders((0, STATUS_ROWS), width, height - STATUS_ROWS);
    let center = (width / 2, STATUS_ROWS + (height - STATUS_ROWS) / 2);

    if game.state() == GameState::Start {
        canvas.text((1, 0), &format!("High Score: {}", game.high_score()));
        canvas.message(center, &[
            "S N A K E",
            "",
            "Arrow keys or WASD to move",
            "P or Esc to pause",
            "",
            "Press SPACE to start",
            "Press Q to quit",
        ]);
        return canvas;
    }

    canvas.text((1, 0), &format!("Score: {}   High Score: {}", game.score(), game.high_score()));

    let to_screen = |cell: Cell| -> Option<Coords> {
        if board.contains(cell) {
            Some(((cell.x + 1) as TermInt, (cell.y + 1) as TermInt + STATUS_ROWS))
        } else {
            None
        }
    };

    if let Some(pos) = to_screen(game.food().position()) {
        canvas.put(pos, FOOD_CHAR);
    }

    let snake = game.snake();
    let dead = game.is_game_over();
    // Tail first so the head wins when it overlaps the body.
    for (i, cell) in snake.body().iter().enumerate().rev() {
        let ch = match (dead, i) {
            (true, _) => DEAD_SNAKE_CHAR,
            (false, 0) => snake.head_char(),
            (false, _) => SNAKE_BODY_CHAR,
        };
        if let Some(pos) = to_screen(*cell) {
            canvas.put(pos, ch);
        }
    }

    if game.is_paused() {
        canvas.message(center, &["Paused", "Press P or Esc to resume", "or Ctrl+C to quit"]);
    } else if dead {
        let score_line = format!("Score: {}", game.score());
        canvas.message(center, &[
            "Game over!",
            score_line.as_str(),
            "",
            "Press R to play again,",
            "or Q for the menu.",
        ]);
    }

    canvas
}

#[cfg(test)]
impl Canvas {
    pub fn row(&self, y: TermInt) -> String {
        (0..self.width).map(|x| self.get((x, y))).collect()
    }
}
