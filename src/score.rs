//! Final score and how the crowd takes it

use std::fmt;

use hanabi_protocol::{GameSnapshot, Number};

/// Sum of the played piles. Colors without a pile count as zero.
pub fn total<I>(piles: I) -> u32
where
    I: IntoIterator<Item = Option<Number>>,
{
    piles.into_iter().flatten().map(u32::from).sum()
}

pub fn score(game: &GameSnapshot) -> u32 {
    total(game.played.values().copied())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Narrative {
    Horrible,
    Mediocre,
    Honorable,
    Excellent,
    Amazing,
    Legendary,
}

impl Narrative {
    /// Scores above the maximum of 25 cannot come out of a real game,
    /// they are treated as legendary.
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=5 => Self::Horrible,
            6..=10 => Self::Mediocre,
            11..=15 => Self::Honorable,
            16..=20 => Self::Excellent,
            21..=24 => Self::Amazing,
            _ => Self::Legendary,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Horrible => "horrible, booed by the crowd...",
            Self::Mediocre => "mediocre, just a hint of scattered applause...",
            Self::Honorable => "honorable attempt, but quickly forgotten...",
            Self::Excellent => "excellent, crowd pleasing.",
            Self::Amazing => "amazing, they will be talking about it for weeks!",
            Self::Legendary => "legendary, everyone left speechless, stars in their eyes!",
        }
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Closing line of the move log, present only once the game is over
pub fn banner(game: &GameSnapshot) -> Option<String> {
    if !game.is_over() {
        return None;
    }

    let score = score(game);
    Some(format!(
        "game over: {} ({})",
        Narrative::for_score(score),
        score
    ))
}

#[cfg(test)]
mod tests {
    use hanabi_protocol::Color;

    use super::*;
    use crate::testing::game;

    #[test]
    fn score_ignores_pile_order() {
        let piles = [Some(3), None, Some(5), Some(1), Some(2)];
        let mut reversed = piles;
        reversed.reverse();
        let mut rotated = piles;
        rotated.rotate_left(2);

        assert_eq!(total(piles), 11);
        assert_eq!(total(reversed), 11);
        assert_eq!(total(rotated), 11);
    }

    #[test]
    fn band_boundaries() {
        let expected = [
            (0, Narrative::Horrible),
            (5, Narrative::Horrible),
            (6, Narrative::Mediocre),
            (10, Narrative::Mediocre),
            (11, Narrative::Honorable),
            (15, Narrative::Honorable),
            (16, Narrative::Excellent),
            (20, Narrative::Excellent),
            (21, Narrative::Amazing),
            (24, Narrative::Amazing),
            (25, Narrative::Legendary),
            (30, Narrative::Legendary),
        ];
        for (score, band) in expected {
            assert_eq!(Narrative::for_score(score), band, "score {}", score);
        }
    }

    #[test]
    fn perfect_game_banner() {
        let mut game = game(&["a", "b"]);
        for color in Color::ALL {
            game.played.insert(color, Some(5));
        }
        game.fuses = 0;

        assert_eq!(score(&game), 25);
        assert_eq!(
            banner(&game).unwrap(),
            "game over: legendary, everyone left speechless, stars in their eyes! (25)"
        );
    }

    #[test]
    fn banner_only_when_over() {
        let mut game = game(&["a", "b"]);
        game.played.insert(Color::Red, Some(2));
        assert_eq!(banner(&game), None);

        game.endgame_turns = 0;
        assert_eq!(
            banner(&game).unwrap(),
            "game over: horrible, booed by the crowd... (2)"
        );
    }
}
