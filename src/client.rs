use std::cell::RefCell;

use hanabi_protocol::{Card, GameSnapshot, HintData, PlayRequest, PlayerIndex};

use crate::render::{self, Board};
use crate::sync::{PollTrigger, SyncOutcome, Synchronizer};
use crate::{guard, moves, ClientConfig, ClientError, Session, Transport};

/// Ties the session, the synchronizer and a transport together.
///
/// All methods take `&self` so a front end can share the client between
/// event handlers. Borrows of the inner state never live across an `.await`.
pub struct Client<T> {
    config: ClientConfig,
    session: Session,
    transport: T,
    sync: RefCell<Synchronizer>,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, session: Session, transport: T) -> Self {
        Self {
            config,
            session,
            transport,
            sync: RefCell::new(Synchronizer::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Claim a seat under our name. Joining twice or into a full game is a no-op on the server.
    pub async fn join(&self) -> Result<(), ClientError> {
        log::info!("Joining {} as {:?}", self.session.game_id(), self.session.name());
        self.transport
            .join(self.session.game_id(), self.session.name())
            .await
    }

    /// Timer tick. Returns the new board if anything changed.
    pub async fn poll(&self) -> Option<Board> {
        self.resync(PollTrigger::Interval).await
    }

    /// Fetch immediately, even during a drag
    pub async fn refresh(&self) -> Option<Board> {
        self.resync(PollTrigger::Forced).await
    }

    async fn resync(&self, trigger: PollTrigger) -> Option<Board> {
        let ticket = self.sync.borrow_mut().begin(trigger)?;
        let response = self.transport.fetch_snapshot(self.session.game_id()).await;
        let outcome = self.sync.borrow_mut().complete(ticket, response);
        match outcome {
            SyncOutcome::Changed => self.board(),
            _ => None,
        }
    }

    pub fn with_snapshot<R>(&self, f: impl FnOnce(&GameSnapshot) -> R) -> Option<R> {
        self.sync.borrow().snapshot().map(f)
    }

    /// Current projection of the stored snapshot
    pub fn board(&self) -> Option<Board> {
        self.with_snapshot(|game| render::render(game, self.session.seat(game)))
    }

    pub fn seat(&self) -> Option<PlayerIndex> {
        self.with_snapshot(|game| self.session.seat(game)).flatten()
    }

    pub fn is_my_turn(&self) -> bool {
        self.with_snapshot(|game| guard::is_my_turn(game, self.session.seat(game)))
            .unwrap_or(false)
    }

    pub fn is_dragging(&self) -> bool {
        self.sync.borrow().is_dragging()
    }

    /// Ending a drag hands back the board held back while it lasted
    pub fn set_dragging(&self, dragging: bool) -> Option<Board> {
        let released = self.sync.borrow_mut().set_dragging(dragging);
        if released {
            self.board()
        } else {
            None
        }
    }

    pub async fn discard(&self, card: Card) -> Result<Option<Board>, ClientError> {
        let request = moves::discard(self.seat().ok_or(ClientError::NotSeated)?, card);
        Ok(self.submit(request).await)
    }

    pub async fn play(&self, card: Card) -> Result<Option<Board>, ClientError> {
        let request = moves::play(self.seat().ok_or(ClientError::NotSeated)?, card);
        Ok(self.submit(request).await)
    }

    pub async fn give_hint(&self, data: HintData, target: &str) -> Result<Option<Board>, ClientError> {
        let request = self
            .with_snapshot(|game| {
                let seat = self.session.seat(game).ok_or(ClientError::NotSeated)?;
                moves::hint(game, seat, data, target)
            })
            .ok_or(ClientError::NoSnapshot)??;
        Ok(self.submit(request).await)
    }

    /// Sends the move and re-syncs whatever the outcome. The board is
    /// re-rendered even if nothing changed, so views that removed a card
    /// optimistically get it back when the server refused the move.
    async fn submit(&self, request: PlayRequest) -> Option<Board> {
        log::debug!("Submitting {:?}", request);
        if let Err(err) = self.transport.submit(self.session.game_id(), &request).await {
            log::warn!("Submitting move failed: {}", err);
        }
        match self.refresh().await {
            Some(board) => Some(board),
            None => self.redraw(),
        }
    }

    /// The current board, unless a drag is in progress
    pub fn redraw(&self) -> Option<Board> {
        if self.is_dragging() {
            None
        } else {
            self.board()
        }
    }
}
