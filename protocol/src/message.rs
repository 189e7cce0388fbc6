use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{card::Card, card::Color, card::Number, game::PlayerIndex};

/// What a hint was about. Serialized as `{"Color": "Red"}` or `{"Number": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintData {
    Color(Color),
    Number(Number),
}

impl fmt::Display for HintData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => color.fmt(f),
            Self::Number(number) => number.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    /// Player receiving the hint
    pub player: PlayerIndex,
    pub data: HintData,
}

/// A single turn. Exactly one variant is active on the wire,
/// e.g. `{"Play": {..card..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Play(Card),
    Hint(Hint),
    Discard(Card),
}

/// A move together with the player making it.
/// This is both the submission body and an entry of the move log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTurn {
    pub player: PlayerIndex,
    pub turn: Move,
}

pub type PlayRequest = PlayerTurn;
