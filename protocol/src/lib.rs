//! Wire types shared with the game server's JSON API

mod card;
mod game;
mod message;

pub use self::card::{Card, CardId, Color, Number};
pub use self::game::{GameId, GameSnapshot, Hand, PlayerIndex};
pub use self::message::{Hint, HintData, Move, PlayRequest, PlayerTurn};
