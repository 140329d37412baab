use crate::data_fetcher::models::Game;

/// True while the match is being played (status `LIVE - <minute>'`).
pub fn is_game_live(game: &Game) -> bool {
    game.game_status.is_live()
}

/// True for fixtures that have not kicked off yet.
pub fn is_game_upcoming(game: &Game) -> bool {
    game.game_status.is_upcoming()
}

pub fn is_game_final(game: &Game) -> bool {
    game.game_status.is_final()
}

/// Final and live games show their status instead of the kickoff time.
pub fn shows_status_text(game: &Game) -> bool {
    is_game_final(game) || is_game_live(game)
}
