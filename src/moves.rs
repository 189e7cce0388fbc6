//! Encoding player intents as play requests.
//!
//! Nothing here checks whether a move is legal, the server decides that.

use hanabi_protocol::{Card, GameSnapshot, Hint, HintData, Move, PlayRequest, PlayerIndex};

use crate::render::PLACEHOLDER;
use crate::ClientError;

pub fn discard(player: PlayerIndex, card: Card) -> PlayRequest {
    PlayRequest {
        player,
        turn: Move::Discard(card),
    }
}

pub fn play(player: PlayerIndex, card: Card) -> PlayRequest {
    PlayRequest {
        player,
        turn: Move::Play(card),
    }
}

/// Hint `data` to the player called `target`
pub fn hint(
    game: &GameSnapshot,
    player: PlayerIndex,
    data: HintData,
    target: &str,
) -> Result<PlayRequest, ClientError> {
    let target = target.trim();
    if target.is_empty() || target == PLACEHOLDER {
        return Err(ClientError::NoHintTarget);
    }
    let target_player = game
        .seat_of(target)
        .ok_or_else(|| ClientError::UnknownPlayer(target.to_owned()))?;

    Ok(PlayRequest {
        player,
        turn: Move::Hint(Hint {
            player: target_player,
            data,
        }),
    })
}

/// Numbers hint a number, anything else must name a color
pub fn parse_hint(raw: &str) -> Result<HintData, ClientError> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse() {
        return Ok(HintData::Number(number));
    }
    raw.parse()
        .map(HintData::Color)
        .map_err(|_| ClientError::InvalidHint(raw.to_owned()))
}
