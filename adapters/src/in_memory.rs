use std::sync::{PoisonError, RwLock};

use application::ports::out_::{GameNotification, GameNotifier};

/// Records every notification it receives.
pub struct InMemory {
    notifications: RwLock<Vec<GameNotification>>,
}

impl InMemory {
    pub fn new() -> Self {
        Self {
            notifications: RwLock::new(Vec::new()),
        }
    }

    pub fn get_notifications(&self) -> Vec<GameNotification> {
        self.notifications.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear(&self) {
        self.notifications.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameNotifier for InMemory {
    fn notify(
        &self,
        notification: GameNotification,
    ) {
        self.notifications
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
