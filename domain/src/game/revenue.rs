use serde::{Deserialize, Serialize};

use super::round::RoundResult;

/// Running revenue totals, one entry per played round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeRevenue {
    pub player: Vec<u32>,
    pub competitor: Vec<u32>,
}

impl CumulativeRevenue {
    /// Final `(player, competitor)` totals, or zeros before the first round.
    #[must_use]
    pub fn totals(&self) -> (u32, u32) {
        (
            self.player.last().copied().unwrap_or(0),
            self.competitor.last().copied().unwrap_or(0),
        )
    }
}

#[must_use]
pub fn cumulative_revenues(history: &[RoundResult]) -> CumulativeRevenue {
    let mut cumulative = CumulativeRevenue {
        player: Vec::with_capacity(history.len()),
        competitor: Vec::with_capacity(history.len()),
    };
    let mut running_player = 0u32;
    let mut running_competitor = 0u32;

    for round in history {
        running_player = running_player.saturating_add(round.player_revenue);
        running_competitor = running_competitor.saturating_add(round.competitor_revenue);
        cumulative.player.push(running_player);
        cumulative.competitor.push(running_competitor);
    }

    cumulative
}
