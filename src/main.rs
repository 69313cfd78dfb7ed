mod config;
mod food;
mod game;
mod grid;
mod highscore;
mod input;
mod render;
mod snake;
mod term;

use std::{fs::File, thread::sleep, time::{Duration, Instant}};

use anyhow::{bail, Context};
use log::info;
use simplelog::WriteLogger;

use crate::config::Config;
use crate::game::{Flow, GameManager};
use crate::highscore::{FileHighScore, HighScoreStore};
use crate::term::TermManager;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Stdout belongs to the game screen, so logs go to a file.
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    WriteLogger::init(config.log_level, simplelog::Config::default(), log_file)
        .context("initializing logger")?;

    info!("Starting snake with {:?}", config);

    let mut term = TermManager::new().context("reading terminal size")?;
    let (need_w, need_h) = render::canvas_size(config.board.width, config.board.height);
    let (w, h) = term.get_terminal_size();
    if w < need_w || h < need_h {
        bail!("terminal is {}x{}, the game needs at least {}x{}", w, h, need_w, need_h);
    }

    let store = FileHighScore::new(&config.high_score_file);
    info!("High score file: {}", store.path().display());
    let mut game = GameManager::new(config.board, store);

    term.setup().context("preparing terminal")?;
    let res = run(&mut term, &mut game, config.frame_interval());
    // The terminal has to be usable again before any error is printed.
    term.restore().context("restoring terminal")?;

    info!("Exiting");
    res
}

/// One frame per interval: input, a single simulation step, then drawing.
fn run<S: HighScoreStore>(term: &mut TermManager, game: &mut GameManager<S>, frame: Duration) -> anyhow::Result<()> {
    loop {
        let frame_start = Instant::now();

        for key_ev in term.read_key_events_queue().context("reading input")? {
            if let Some(cmd) = input::command_for(&key_ev, game.state()) {
                if game.handle_input(cmd) == Flow::Exit {
                    return Ok(());
                }
            }
        }

        game.update();
        term.present(&render::draw(game)).context("drawing frame")?;

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            sleep(rest);
        }
    }
}
