//! Last-known game state

use std::cmp::Ordering;

use hanabi_protocol::{GameSnapshot, Move};

use crate::ClientError;

/// How a freshly fetched snapshot relates to the stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Nothing was stored yet
    First,
    Changed,
    Unchanged,
    /// Carries an older version than the stored one
    Outdated,
}

#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Option<GameSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&GameSnapshot> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Uses the server's version counter when both sides carry one,
    /// full structural comparison otherwise.
    pub fn freshness(&self, fresh: &GameSnapshot) -> Freshness {
        let Some(current) = &self.current else {
            return Freshness::First;
        };

        if let (Some(have), Some(got)) = (current.version, fresh.version) {
            return match got.cmp(&have) {
                Ordering::Less => Freshness::Outdated,
                Ordering::Equal => Freshness::Unchanged,
                Ordering::Greater => Freshness::Changed,
            };
        }

        if current == fresh {
            Freshness::Unchanged
        } else {
            Freshness::Changed
        }
    }

    pub fn replace(&mut self, snapshot: GameSnapshot) {
        self.current = Some(snapshot);
    }
}

/// Rejects snapshots the renderer could not index safely
pub fn check_shape(game: &GameSnapshot) -> Result<(), ClientError> {
    let seats = game.players.len();

    if game.turn >= seats {
        return Err(ClientError::Malformed("turn is not a valid seat"));
    }
    if game.player_names.len() > seats {
        return Err(ClientError::Malformed("more player names than seats"));
    }

    for record in &game.moves {
        if record.player >= seats {
            return Err(ClientError::Malformed("move by an unknown seat"));
        }
        if let Move::Hint(hint) = &record.turn {
            if hint.player >= seats {
                return Err(ClientError::Malformed("hint to an unknown seat"));
            }
        }
    }

    Ok(())
}
