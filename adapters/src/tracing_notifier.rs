use tracing::{debug, info};

use application::ports::out_::{GameNotification, GameNotifier};

/// Logs every notification through `tracing`.
#[derive(Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GameNotifier for TracingNotifier {
    fn notify(
        &self,
        notification: GameNotification,
    ) {
        match notification {
            GameNotification::RoundResolved(round) => debug!(
                round = round.round_index,
                player_customers = round.player_customers,
                competitor_customers = round.competitor_customers,
                no_purchase = round.no_purchase_customers,
                player_revenue = round.player_revenue,
                competitor_revenue = round.competitor_revenue,
                "Round resolved"
            ),
            GameNotification::GameCompleted {
                player_revenue,
                competitor_revenue,
            } => info!(player_revenue, competitor_revenue, "Game complete"),
            GameNotification::ActionIgnored(action) => {
                debug!(action = %action, "Action ignored, game already complete");
            }
            GameNotification::Reset => info!("Game reset"),
        }
    }
}
