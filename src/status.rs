//! Turn and result banners shared by the front ends.

use gridmark_core::{GameController, GameState, Outcome};

/// One-line description of whose turn it is, or how the game ended.
pub fn status_line(game: &GameController) -> String {
    let player = game.active_player();
    match game.game_state() {
        GameState::Ongoing => format!("{player}'s turn"),
        GameState::Over(Outcome::Winner(_)) => format!("{player} wins!"),
        GameState::Over(Outcome::Draw) => "Draw!".to_string(),
    }
}
