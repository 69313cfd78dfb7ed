use log::{debug, error, info};
use rand::{rngs::ThreadRng, Rng};

use crate::food::Food;
use crate::grid::{Board, Direction::{self, *}};
use crate::highscore::HighScoreStore;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Discrete player requests, already decoupled from any key layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Start,
    Restart,
    QuitToMenu,
    Quit,
}

impl Command {
    fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Up),
            Command::MoveDown => Some(Down),
            Command::MoveLeft => Some(Left),
            Command::MoveRight => Some(Right),
            _ => None,
        }
    }
}

/// Whether the frame loop should keep going after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct GameManager<S, R = ThreadRng> {
    board: Board,
    state: GameState,
    snake: Snake,
    food: Food,
    score: u32,
    high_score: u32,
    store: S,
    rng: R,
}

impl<S: HighScoreStore> GameManager<S> {
    pub fn new(board: Board, store: S) -> Self {
        GameManager::with_rng(board, store, rand::thread_rng())
    }
}

impl<S: HighScoreStore, R: Rng> GameManager<S, R> {
    pub fn with_rng(board: Board, store: S, mut rng: R) -> Self {
        let high_score = store.load();
        info!("Loaded high score {}", high_score);

        let snake = Snake::new(board.center(), Right);
        let food = Food::new(&board, &snake.occupied(), &mut rng);

        GameManager { board, state: GameState::Start, snake, food, score: 0, high_score, store, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_paused(&self) -> bool {
        self.state == GameState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Applies one command. Commands that mean nothing in the current state
    /// are ignored.
    pub fn handle_input(&mut self, command: Command) -> Flow {
        if command == Command::Quit {
            info!("Quit requested");
            return Flow::Exit;
        }

        match (self.state, command) {
            (GameState::Start, Command::Start) | (GameState::GameOver, Command::Restart) => self.reset(),
            (GameState::GameOver, Command::QuitToMenu) => {
                debug!("Back to the start menu");
                self.state = GameState::Start;
            }
            (GameState::Playing, Command::Pause) => {
                debug!("Paused");
                self.state = GameState::Paused;
            }
            (GameState::Paused, Command::Pause) => {
                debug!("Resumed");
                self.state = GameState::Playing;
            }
            (GameState::Playing, cmd) => {
                if let Some(dir) = cmd.direction() {
                    self.snake.enqueue_direction(dir);
                }
            }
            _ => {}
        }

        Flow::Continue
    }

    /// Advances the round by one move. Does nothing outside of play.
    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        let new_head = self.snake.advance();

        if new_head == self.food.position() {
            self.food.place(&self.board, &self.snake.occupied(), &mut self.rng);
            self.snake.mark_growth();
            self.score += 1;
            debug!("Food eaten, score {}", self.score);
        }

        if self.snake.has_collided(&self.board) {
            self.end_round();
        }
    }

    fn reset(&mut self) {
        self.snake = Snake::new(self.board.center(), Right);
        self.food = Food::new(&self.board, &self.snake.occupied(), &mut self.rng);
        self.score = 0;
        self.state = GameState::Playing;
        info!("New round started");
    }

    fn end_round(&mut self) {
        self.state = GameState::GameOver;
        info!("Game over with score {}", self.score);

        if self.score > self.high_score {
            self.high_score = self.score;
            info!("New high score {}", self.high_score);
            if let Err(e) = self.store.save(self.high_score) {
                error!("Error saving high score: {}", e);
            }
        }
    }

}

#[cfg(test)]
impl<S: HighScoreStore, R: Rng> GameManager<S, R> {
    fn store(&self) -> &S {
        &self.store
    }

    fn into_store(self) -> S {
        self.store
    }

    fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
