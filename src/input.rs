use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, GameState};

/// Translates a key press into a command for the current screen.
pub fn command_for(key: &KeyEvent, state: GameState) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match state {
        GameState::Start => match code {
            KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
        GameState::Playing => match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Char('p') | KeyCode::Esc => Some(Command::Pause),
            _ => None,
        },
        GameState::Paused => match code {
            KeyCode::Char('p') | KeyCode::Esc => Some(Command::Pause),
            _ => None,
        },
        GameState::GameOver => match code {
            KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Char('q') => Some(Command::QuitToMenu),
            _ => None,
        },
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        for state in [GameState::Start, GameState::Playing, GameState::Paused, GameState::GameOver].iter() {
            assert_eq!(command_for(&ev, *state), Some(Command::Quit));
        }
    }

    #[test]
    fn start_menu() {
        assert_eq!(command_for(&key(KeyCode::Char(' ')), GameState::Start), Some(Command::Start));
        assert_eq!(command_for(&key(KeyCode::Char('q')), GameState::Start), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Up), GameState::Start), None);
    }

    #[test]
    fn movement_keys() {
        let cases = [
            (KeyCode::Up, Command::MoveUp),
            (KeyCode::Char('w'), Command::MoveUp),
            (KeyCode::Char('W'), Command::MoveUp),
            (KeyCode::Down, Command::MoveDown),
            (KeyCode::Char('s'), Command::MoveDown),
            (KeyCode::Left, Command::MoveLeft),
            (KeyCode::Char('a'), Command::MoveLeft),
            (KeyCode::Right, Command::MoveRight),
            (KeyCode::Char('d'), Command::MoveRight),
        ];
        for (code, cmd) in cases.iter() {
            assert_eq!(command_for(&key(*code), GameState::Playing), Some(*cmd));
            assert_eq!(command_for(&key(*code), GameState::Paused), None);
        }
    }

    #[test]
    fn pause_toggles() {
        for code in [KeyCode::Char('p'), KeyCode::Esc].iter() {
            assert_eq!(command_for(&key(*code), GameState::Playing), Some(Command::Pause));
            assert_eq!(command_for(&key(*code), GameState::Paused), Some(Command::Pause));
        }
    }

    #[test]
    fn game_over_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('r')), GameState::GameOver), Some(Command::Restart));
        assert_eq!(command_for(&key(KeyCode::Char('q')), GameState::GameOver), Some(Command::QuitToMenu));
        assert_eq!(command_for(&key(KeyCode::Char('q')), GameState::Playing), None);
        assert_eq!(command_for(&key(KeyCode::Char(' ')), GameState::GameOver), None);
    }
}
