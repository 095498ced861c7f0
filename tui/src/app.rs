use std::sync::Arc;

use adapters::InMemory;
use application::ports::in_::GameService;
use application::ports::out_::GameNotification;

use crate::events::Command;

const EVENT_LOG_LIMIT: usize = 50;

pub struct App {
    pub service: GameService,
    notifications: Arc<InMemory>,
    pub event_log: Vec<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let notifications = Arc::new(InMemory::new());
        Self {
            service: GameService::new(notifications.clone()),
            notifications,
            event_log: Vec::new(),
            should_quit: false,
        }
    }

    pub fn handle_command(
        &mut self,
        command: Command,
    ) {
        match command {
            Command::Play(action) => {
                self.service.handle_action(action);
            }
            Command::Reset => {
                self.service.reset();
                self.event_log.clear();
            }
            Command::Quit => self.should_quit = true,
        }

        for notification in self.notifications.get_notifications() {
            self.log_event(describe_notification(&notification));
        }
        self.notifications.clear();
    }

    fn log_event(
        &mut self,
        event: String,
    ) {
        self.event_log.push(event);
        // Keep only the most recent events
        if self.event_log.len() > EVENT_LOG_LIMIT {
            self.event_log.remove(0);
        }
    }
}

fn describe_notification(notification: &GameNotification) -> String {
    match notification {
        GameNotification::RoundResolved(round) => format!(
            "R{}: you {} (${}), rival {} (${}), none {}",
            round.round_index,
            round.player_customers,
            round.player_revenue,
            round.competitor_customers,
            round.competitor_revenue,
            round.no_purchase_customers,
        ),
        GameNotification::GameCompleted {
            player_revenue,
            competitor_revenue,
        } => format!("Game over: you ${player_revenue}, rival ${competitor_revenue}"),
        GameNotification::ActionIgnored(action) => format!("Game over, {action} ignored"),
        GameNotification::Reset => "New game".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use domain::{GameState, PlayerAction};

    use super::*;

    #[test]
    fn test_play_logs_round() {
        let mut app = App::new();
        app.handle_command(Command::Play(PlayerAction::MoveRight));

        assert_eq!(app.service.state().round_index(), 1);
        assert_eq!(app.event_log, vec!["R1: you 5 ($25), rival 4 ($20), none 0".to_string()]);
    }

    #[test]
    fn test_finished_game_logs_completion_then_ignores() {
        let mut app = App::new();
        for _ in 0..11 {
            app.handle_command(Command::Play(PlayerAction::PriceDown));
        }

        let tail: Vec<&str> = app.event_log.iter().rev().take(2).map(String::as_str).collect();
        assert_eq!(tail[0], "Game over, price_down ignored");
        assert!(tail[1].starts_with("Game over: you $"));
        assert_eq!(app.event_log.len(), 12);
    }

    #[test]
    fn test_reset_clears_log_and_state() {
        let mut app = App::new();
        app.handle_command(Command::Play(PlayerAction::PriceUp));
        app.handle_command(Command::Reset);

        assert_eq!(*app.service.state(), GameState::initial());
        assert_eq!(app.event_log, vec!["New game".to_string()]);
        assert!(!app.should_quit);

        app.handle_command(Command::Quit);
        assert!(app.should_quit);
    }
}
