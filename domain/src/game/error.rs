use thiserror::Error;

/// Raised only at text boundaries; the engine itself has no failure paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("unknown action {0:?}, expected one of price_up, price_down, move_left, move_right")]
    UnknownAction(String),
}
