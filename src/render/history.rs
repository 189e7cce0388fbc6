use hanabi_protocol::{GameSnapshot, Move, PlayerIndex, PlayerTurn};

use crate::score;

fn name(game: &GameSnapshot, player: PlayerIndex) -> &str {
    game.player_name(player).unwrap_or("?")
}

/// One line describing a past move, e.g. `alice hinted bob 3`
pub fn describe(game: &GameSnapshot, record: &PlayerTurn) -> String {
    let actor = name(game, record.player);
    match &record.turn {
        Move::Hint(hint) => format!("{} hinted {} {}", actor, name(game, hint.player), hint.data),
        Move::Play(card) => format!("{} played {} {}", actor, card.color, card.number),
        Move::Discard(card) => format!("{} discarded {} {}", actor, card.color, card.number),
    }
}

/// The whole log, rebuilt from scratch, with the game over line at the end
pub fn move_log(game: &GameSnapshot) -> Vec<String> {
    game.moves
        .iter()
        .map(|record| describe(game, record))
        .chain(score::banner(game))
        .collect()
}
