//! Which affordances the local player gets

use hanabi_protocol::{GameSnapshot, PlayerIndex};

/// Drop targets only accept a card while this holds. Evaluate it on every
/// drop attempt, the turn may have moved on since the last render.
pub fn is_my_turn(game: &GameSnapshot, seat: Option<PlayerIndex>) -> bool {
    seat == Some(game.turn)
}

/// Cards in a rack can be picked up only by their owner, and only while the game is running
pub fn rack_is_interactive(game: &GameSnapshot, seat: Option<PlayerIndex>, rack: PlayerIndex) -> bool {
    seat == Some(rack) && !game.is_over()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::game;

    #[test]
    fn turn_follows_snapshot() {
        let mut game = game(&["a", "b", "c"]);
        game.turn = 2;
        assert!(is_my_turn(&game, Some(2)));
        game.turn = 0;
        assert!(!is_my_turn(&game, Some(2)));
    }

    #[test]
    fn spectators_never_act() {
        let game = game(&["a", "b"]);
        assert!(!is_my_turn(&game, None));
        assert!(!rack_is_interactive(&game, None, 0));
    }

    #[test]
    fn rack_locks_when_game_ends() {
        let mut game = game(&["a", "b"]);
        assert!(rack_is_interactive(&game, Some(1), 1));
        assert!(!rack_is_interactive(&game, Some(1), 0));

        game.fuses = 0;
        assert!(!rack_is_interactive(&game, Some(1), 1));
    }
}
