use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use domain::PlayerAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(PlayerAction),
    Reset,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::Play(PlayerAction::PriceUp)),
        KeyCode::Down | KeyCode::Char('-') => Some(Command::Play(PlayerAction::PriceDown)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Play(PlayerAction::MoveLeft)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Play(PlayerAction::MoveRight)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
