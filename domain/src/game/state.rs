use serde::{Deserialize, Serialize};

use super::config::{
    COMPETITOR_START_KM, CUSTOMER_COUNT, MAX_ROUNDS, PLAYER_START_KM, POSITION_STEP_KM, PRICE_STEP, STARTING_PRICE,
};
use super::round::{RoundResult, resolve_round};
use super::vendor::{Customer, Vendor, VendorId};
use super::PlayerAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    InProgress,
    Complete,
}

/// Snapshot of a game. Transitions build a new snapshot and leave the old one untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    round_index: u32,
    max_rounds: u32,
    customers: Vec<Customer>,
    competitor: Vendor,
    player: Vendor,
    history: Vec<RoundResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// Player at 0 km and competitor at 10 km, both at $5, with one customer on each of 1..=9 km.
    #[must_use]
    pub fn initial() -> Self {
        let customers = (1..=CUSTOMER_COUNT as i32).map(Customer::new).collect();

        Self {
            round_index: 0,
            max_rounds: MAX_ROUNDS,
            customers,
            competitor: Vendor::new(VendorId::Competitor, COMPETITOR_START_KM, STARTING_PRICE),
            player: Vendor::new(VendorId::Player, PLAYER_START_KM, STARTING_PRICE),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    #[must_use]
    pub fn player(&self) -> &Vendor {
        &self.player
    }

    #[must_use]
    pub fn competitor(&self) -> &Vendor {
        &self.competitor
    }

    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    #[must_use]
    pub fn latest_round(&self) -> Option<&RoundResult> {
        self.history.last()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.round_index >= self.max_rounds {
            GamePhase::Complete
        } else {
            GamePhase::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == GamePhase::Complete
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.max_rounds.saturating_sub(self.round_index)
    }

    /// Applies `action` to the player and resolves the next round against the moved player.
    ///
    /// Once every round has been played this returns an identical copy: a finished game
    /// simply stops advancing.
    #[must_use]
    pub fn apply_action(
        &self,
        action: PlayerAction,
    ) -> GameState {
        if self.is_complete() {
            return self.clone();
        }

        let next = GameState {
            player: next_player(self.player, action),
            ..self.clone()
        };
        let result = resolve_round(&next);

        let mut history = next.history;
        history.push(result);

        GameState {
            round_index: result.round_index,
            history,
            ..next
        }
    }
}

fn next_player(
    player: Vendor,
    action: PlayerAction,
) -> Vendor {
    match action {
        PlayerAction::PriceUp => player.price_raised(PRICE_STEP),
        PlayerAction::PriceDown => player.price_lowered(PRICE_STEP),
        PlayerAction::MoveLeft => player.moved_by(-POSITION_STEP_KM),
        PlayerAction::MoveRight => player.moved_by(POSITION_STEP_KM),
    }
}

#[cfg(test)]
impl GameState {
    pub(super) fn with_vendors(
        mut self,
        player: Vendor,
        competitor: Vendor,
    ) -> Self {
        self.player = player;
        self.competitor = competitor;
        self
    }

    pub(super) fn with_customers(
        mut self,
        positions: &[i32],
    ) -> Self {
        self.customers = positions.iter().copied().map(Customer::new).collect();
        self
    }
}
