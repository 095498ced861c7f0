mod game_service;

pub use game_service::{ActionOutcome, GameService, GameUseCase, GameView};
