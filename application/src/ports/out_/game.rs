use serde::Serialize;

use domain::{PlayerAction, RoundResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameNotification {
    RoundResolved(RoundResult),
    GameCompleted {
        player_revenue: u32,
        competitor_revenue: u32,
    },
    /// The game was already complete, so the action changed nothing.
    ActionIgnored(PlayerAction),
    Reset,
}

pub trait GameNotifier: Send + Sync {
    fn notify(
        &self,
        notification: GameNotification,
    );
}
