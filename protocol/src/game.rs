use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::card::{Card, CardId, Color, Number};
use crate::message::{HintData, PlayerTurn};

pub type PlayerIndex = usize;

/// Game lobby name, as it appears in the page path and API urls
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GameId(String);
impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

/// Full game state as returned by the server on every poll
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Ordered by seat, grows as players join
    pub player_names: Vec<String>,
    pub players: Vec<Hand>,
    /// Remaining cards. The server sends the cards themselves, only the count is kept.
    #[serde(deserialize_with = "deck_count")]
    pub deck: usize,
    pub discard: Vec<Card>,
    pub played: BTreeMap<Color, Option<Number>>,
    pub given_hints: HashMap<CardId, Vec<HintData>>,
    /// Remaining hint tokens
    pub hints: u8,
    pub fuses: u8,
    pub turn: PlayerIndex,
    pub endgame_turns: usize,
    pub moves: Vec<PlayerTurn>,
    /// Monotonic state version, if the server provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}
impl GameSnapshot {
    /// Either the fuses have burnt out or the final round after the deck ran out is over
    pub fn is_over(&self) -> bool {
        self.fuses == 0 || self.endgame_turns == 0
    }

    pub fn seat_of(&self, name: &str) -> Option<PlayerIndex> {
        self.player_names.iter().position(|n| n == name)
    }

    pub fn player_name(&self, player: PlayerIndex) -> Option<&str> {
        self.player_names.get(player).map(String::as_str)
    }

    /// Highest played number of a color, zero if nothing has been played
    pub fn played_of(&self, color: Color) -> Number {
        self.played.get(&color).copied().flatten().unwrap_or(0)
    }
}

fn deck_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Deck {
        Count(usize),
        Cards(Vec<Card>),
    }

    Ok(match Deck::deserialize(deserializer)? {
        Deck::Count(n) => n,
        Deck::Cards(cards) => cards.len(),
    })
}
