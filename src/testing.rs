//! Fixtures and an in-memory server for unit tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::future::{FutureExt, LocalBoxFuture};
use hanabi_protocol::{Card, CardId, Color, GameId, GameSnapshot, Hand, Number, PlayRequest};
use uuid::Uuid;

use crate::{ClientError, Transport};

pub(crate) fn card_id(id: u128) -> CardId {
    Uuid::from_u128(id).into()
}

pub(crate) fn card(id: u128, color: Color, number: Number) -> Card {
    Card {
        uuid: card_id(id),
        number,
        color,
    }
}

/// A fresh game for the given seats. Player `i` holds cards `10 * i + 1` (Red 1)
/// and `10 * i + 2` (Blue 2), in that order.
pub(crate) fn game(names: &[&str]) -> GameSnapshot {
    let players = (0..names.len() as u128)
        .map(|i| Hand {
            cards: vec![
                card(10 * i + 1, Color::Red, 1),
                card(10 * i + 2, Color::Blue, 2),
            ],
        })
        .collect();

    GameSnapshot {
        player_names: names.iter().map(|n| n.to_string()).collect(),
        players,
        deck: 40,
        hints: 8,
        fuses: 3,
        endgame_turns: names.len() + 1,
        ..Default::default()
    }
}

/// Serves queued snapshots and records submissions
#[derive(Default)]
pub(crate) struct FakeServer {
    pub(crate) snapshots: RefCell<VecDeque<Result<GameSnapshot, ClientError>>>,
    pub(crate) submitted: RefCell<Vec<PlayRequest>>,
    pub(crate) fetches: Cell<usize>,
    pub(crate) reject_moves: bool,
    pub(crate) joined: RefCell<Vec<String>>,
}

impl FakeServer {
    pub(crate) fn serving(snapshots: impl IntoIterator<Item = GameSnapshot>) -> Self {
        Self {
            snapshots: RefCell::new(snapshots.into_iter().map(Ok).collect()),
            ..Default::default()
        }
    }
}

impl Transport for FakeServer {
    fn fetch_snapshot<'a>(
        &'a self,
        _game: &'a GameId,
    ) -> LocalBoxFuture<'a, Result<GameSnapshot, ClientError>> {
        self.fetches.set(self.fetches.get() + 1);
        let next = self
            .snapshots
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("nothing queued".into())));
        async move { next }.boxed_local()
    }

    fn submit<'a>(
        &'a self,
        _game: &'a GameId,
        request: &'a PlayRequest,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        self.submitted.borrow_mut().push(request.clone());
        let result = if self.reject_moves {
            Err(ClientError::Status(404))
        } else {
            Ok(())
        };
        async move { result }.boxed_local()
    }

    fn join<'a>(
        &'a self,
        _game: &'a GameId,
        name: &'a str,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        self.joined.borrow_mut().push(name.to_owned());
        async { Ok(()) }.boxed_local()
    }
}
