use std::sync::Arc;

use crate::ports::out_::{GameNotification, GameNotifier};
use domain::{CumulativeRevenue, GameState, PlayerAction, RoundResult, cumulative_revenues, describe_last_round};

pub enum GameUseCase {
    Play(PlayerAction),
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    RoundPlayed(RoundResult),
    Ignored,
    Reset,
}

/// Read model for presentation, rebuilt from the current snapshot on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub is_game_over: bool,
    pub cumulative: CumulativeRevenue,
    pub total_player_revenue: u32,
    pub total_competitor_revenue: u32,
    pub latest_round: Option<RoundResult>,
    pub summary: String,
}

/// Holds the one live `GameState` and swaps it out on every transition.
pub struct GameService {
    state: GameState,
    notifier: Arc<dyn GameNotifier>,
}

impl GameService {
    pub fn new(notifier: Arc<dyn GameNotifier>) -> Self {
        Self {
            state: GameState::initial(),
            notifier,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn execute(
        &mut self,
        use_case: GameUseCase,
    ) -> ActionOutcome {
        match use_case {
            GameUseCase::Play(action) => self.play(action),
            GameUseCase::Reset => {
                self.state = GameState::initial();
                self.notifier.notify(GameNotification::Reset);
                ActionOutcome::Reset
            }
        }
    }

    pub fn handle_action(
        &mut self,
        action: PlayerAction,
    ) -> ActionOutcome {
        self.execute(GameUseCase::Play(action))
    }

    pub fn reset(&mut self) {
        self.execute(GameUseCase::Reset);
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        let cumulative = cumulative_revenues(self.state.history());
        let (total_player_revenue, total_competitor_revenue) = cumulative.totals();
        let latest_round = self.state.latest_round().copied();

        GameView {
            is_game_over: self.state.is_complete(),
            cumulative,
            total_player_revenue,
            total_competitor_revenue,
            latest_round,
            summary: describe_last_round(latest_round.as_ref()),
        }
    }

    fn play(
        &mut self,
        action: PlayerAction,
    ) -> ActionOutcome {
        if self.state.is_complete() {
            self.notifier.notify(GameNotification::ActionIgnored(action));
            return ActionOutcome::Ignored;
        }

        self.state = self.state.apply_action(action);
        let Some(result) = self.state.latest_round().copied() else {
            return ActionOutcome::Ignored;
        };
        self.notifier.notify(GameNotification::RoundResolved(result));

        if self.state.is_complete() {
            let (player_revenue, competitor_revenue) = cumulative_revenues(self.state.history()).totals();
            self.notifier.notify(GameNotification::GameCompleted {
                player_revenue,
                competitor_revenue,
            });
        }

        ActionOutcome::RoundPlayed(result)
    }
}
