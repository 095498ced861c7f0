mod game;

pub use game::{GameNotification, GameNotifier};
