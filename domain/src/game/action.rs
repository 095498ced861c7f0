use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseActionError;

/// One player move per round. Each variant touches exactly one of price or position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    PriceUp,
    PriceDown,
    MoveLeft,
    MoveRight,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 4] = [
        PlayerAction::PriceUp,
        PlayerAction::PriceDown,
        PlayerAction::MoveLeft,
        PlayerAction::MoveRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::PriceUp => "price_up",
            PlayerAction::PriceDown => "price_down",
            PlayerAction::MoveLeft => "move_left",
            PlayerAction::MoveRight => "move_right",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        PlayerAction::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseActionError::UnknownAction(token.to_string()))
    }
}
