//! Deciding when a fetched snapshot needs rendering

use hanabi_protocol::GameSnapshot;

use crate::store::{self, Freshness, SnapshotStore};
use crate::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTrigger {
    /// Regular timer tick, skipped while dragging
    Interval,
    /// Right after a submission, or on explicit request
    Forced,
}

/// Handed out when a poll starts, returned with its response
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub struct PollTicket {
    seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Store replaced, render the new snapshot
    Changed,
    /// Store replaced during a drag, render once the drag ends
    Deferred,
    Unchanged,
    /// A newer response was already processed, or the version went backwards
    Superseded,
    /// Fetched, but not safe to render
    Rejected,
    /// Request failed, try again next tick
    Failed,
}

#[derive(Debug, Default)]
pub struct Synchronizer {
    store: SnapshotStore,
    dragging: bool,
    /// A change arrived during the drag and has not been rendered yet
    deferred: bool,
    next_seq: u64,
    /// Sequence number of the newest response taken into account
    newest: Option<u64>,
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.store.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A card is being dragged. Re-rendering now would throw away the dragged element.
    ///
    /// Returns true when the drag ends with a change still waiting to be rendered.
    pub fn set_dragging(&mut self, dragging: bool) -> bool {
        self.dragging = dragging;
        if dragging {
            return false;
        }
        std::mem::take(&mut self.deferred)
    }

    /// Start a poll, unless this is a timer tick during a drag
    pub fn begin(&mut self, trigger: PollTrigger) -> Option<PollTicket> {
        if trigger == PollTrigger::Interval && self.dragging && !self.store.is_empty() {
            log::trace!("Drag in progress, skipping poll");
            return None;
        }

        let ticket = PollTicket { seq: self.next_seq };
        self.next_seq += 1;
        Some(ticket)
    }

    pub fn complete(
        &mut self,
        ticket: PollTicket,
        response: Result<GameSnapshot, ClientError>,
    ) -> SyncOutcome {
        if self.newest.is_some_and(|newest| ticket.seq < newest) {
            log::debug!("Dropping response to poll {}, already saw a newer one", ticket.seq);
            return SyncOutcome::Superseded;
        }

        let game = match response {
            Ok(game) => game,
            Err(err @ ClientError::Decode(_)) => {
                log::warn!("Ignoring game state: {}", err);
                return SyncOutcome::Rejected;
            }
            Err(err) => {
                log::debug!("Poll {} failed: {}", ticket.seq, err);
                return SyncOutcome::Failed;
            }
        };

        if let Err(err) = store::check_shape(&game) {
            log::warn!("Ignoring game state: {}", err);
            return SyncOutcome::Rejected;
        }

        let outcome = match self.store.freshness(&game) {
            // Nothing can be dragged before the first render
            Freshness::First => {
                self.store.replace(game);
                SyncOutcome::Changed
            }
            Freshness::Changed if self.dragging => {
                log::debug!("Drag in progress, holding back poll {}", ticket.seq);
                self.store.replace(game);
                self.deferred = true;
                SyncOutcome::Deferred
            }
            Freshness::Changed => {
                self.store.replace(game);
                SyncOutcome::Changed
            }
            Freshness::Unchanged => SyncOutcome::Unchanged,
            Freshness::Outdated => {
                log::debug!("Dropping response to poll {}, version went backwards", ticket.seq);
                return SyncOutcome::Superseded;
            }
        };
        self.newest = Some(ticket.seq);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::game;

    fn poll(sync: &mut Synchronizer, game: GameSnapshot) -> SyncOutcome {
        let ticket = sync.begin(PollTrigger::Interval).unwrap();
        sync.complete(ticket, Ok(game))
    }

    #[test]
    fn equal_snapshot_does_not_rerender() {
        let mut sync = Synchronizer::new();
        assert_eq!(poll(&mut sync, game(&["a", "b"])), SyncOutcome::Changed);
        assert_eq!(poll(&mut sync, game(&["a", "b"])), SyncOutcome::Unchanged);
        assert_eq!(poll(&mut sync, game(&["a", "b"])), SyncOutcome::Unchanged);
    }

    #[test]
    fn any_difference_rerenders_once() {
        let mut sync = Synchronizer::new();
        let _ = poll(&mut sync, game(&["a", "b"]));

        let mut next = game(&["a", "b"]);
        next.turn = 1;
        assert_eq!(poll(&mut sync, next.clone()), SyncOutcome::Changed);
        assert_eq!(sync.snapshot(), Some(&next));
        assert_eq!(poll(&mut sync, next), SyncOutcome::Unchanged);
    }

    #[test]
    fn interval_polls_pause_while_dragging() {
        let mut sync = Synchronizer::new();

        // Nothing to lose before the first snapshot arrives
        sync.set_dragging(true);
        let ticket = sync.begin(PollTrigger::Interval).unwrap();
        let _ = sync.complete(ticket, Ok(game(&["a", "b"])));

        assert!(sync.begin(PollTrigger::Interval).is_none());
        assert!(sync.begin(PollTrigger::Forced).is_some());

        sync.set_dragging(false);
        assert!(sync.begin(PollTrigger::Interval).is_some());
    }

    #[test]
    fn late_response_cannot_overwrite_newer_one() {
        let mut sync = Synchronizer::new();
        let older = sync.begin(PollTrigger::Interval).unwrap();
        let newer = sync.begin(PollTrigger::Forced).unwrap();

        let mut current = game(&["a", "b"]);
        current.hints = 3;
        assert_eq!(sync.complete(newer, Ok(current.clone())), SyncOutcome::Changed);
        assert_eq!(
            sync.complete(older, Ok(game(&["a", "b"]))),
            SyncOutcome::Superseded
        );
        assert_eq!(sync.snapshot(), Some(&current));
    }

    #[test]
    fn failures_keep_the_stale_view() {
        let mut sync = Synchronizer::new();
        let _ = poll(&mut sync, game(&["a", "b"]));

        let ticket = sync.begin(PollTrigger::Interval).unwrap();
        assert_eq!(
            sync.complete(ticket, Err(ClientError::Status(502))),
            SyncOutcome::Failed
        );

        let mut broken = game(&["a", "b"]);
        broken.turn = 7;
        assert_eq!(poll(&mut sync, broken), SyncOutcome::Rejected);

        let ticket = sync.begin(PollTrigger::Interval).unwrap();
        let decode = serde_json::from_str::<GameSnapshot>("{").unwrap_err();
        assert_eq!(
            sync.complete(ticket, Err(ClientError::Decode(decode))),
            SyncOutcome::Rejected
        );

        assert_eq!(sync.snapshot(), Some(&game(&["a", "b"])));
    }

    #[test]
    fn failed_poll_does_not_block_older_pending_ones() {
        let mut sync = Synchronizer::new();
        let older = sync.begin(PollTrigger::Interval).unwrap();
        let newer = sync.begin(PollTrigger::Interval).unwrap();

        let _ = sync.complete(newer, Err(ClientError::Transport("offline".into())));
        assert_eq!(sync.complete(older, Ok(game(&["a", "b"]))), SyncOutcome::Changed);
    }

    #[test]
    fn change_during_drag_waits_for_drag_end() {
        let mut sync = Synchronizer::new();
        let _ = poll(&mut sync, game(&["a", "b"]));

        // Poll started before the drag, answered during it
        let ticket = sync.begin(PollTrigger::Interval).unwrap();
        sync.set_dragging(true);
        let mut next = game(&["a", "b"]);
        next.turn = 1;
        assert_eq!(sync.complete(ticket, Ok(next.clone())), SyncOutcome::Deferred);
        assert_eq!(sync.snapshot(), Some(&next));

        let ticket = sync.begin(PollTrigger::Forced).unwrap();
        assert_eq!(sync.complete(ticket, Ok(next)), SyncOutcome::Unchanged);

        assert!(sync.set_dragging(false));
        assert!(!sync.set_dragging(false));
    }

    #[test]
    fn drag_without_changes_releases_nothing() {
        let mut sync = Synchronizer::new();
        let _ = poll(&mut sync, game(&["a", "b"]));

        assert!(!sync.set_dragging(true));
        let ticket = sync.begin(PollTrigger::Forced).unwrap();
        assert_eq!(sync.complete(ticket, Ok(game(&["a", "b"]))), SyncOutcome::Unchanged);
        assert!(!sync.set_dragging(false));
    }
}
