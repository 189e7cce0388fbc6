//! Identity of the local client

use hanabi_protocol::{GameId, GameSnapshot, PlayerIndex};

/// Which game we are looking at and under which name we joined it.
/// Established once at startup and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    game_id: GameId,
    name: String,
}

impl Session {
    pub fn new(game_id: GameId, name: impl Into<String>) -> Self {
        Self {
            game_id,
            name: name.into(),
        }
    }

    /// Game pages live at `/game/<id>`, the id is the final path segment.
    ///
    /// Page paths arrive percent-encoded. `decode` undoes that so the
    /// transport encodes the id exactly once.
    pub fn from_page_path(
        path: &str,
        name: impl Into<String>,
        decode: impl Fn(&str) -> Option<String>,
    ) -> Option<Self> {
        let segment = path.rsplit('/').next().filter(|id| !id.is_empty())?;
        let id = decode(segment)?;
        Some(Self::new(GameId::new(id), name))
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seats are assigned by join order, so our index is where our name is.
    /// `None` while we are only spectating.
    pub fn seat(&self, game: &GameSnapshot) -> Option<PlayerIndex> {
        game.seat_of(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Endpoint;

    fn decode(segment: &str) -> Option<String> {
        Some(segment.replace("%20", " "))
    }

    #[test]
    fn game_id_is_last_path_segment() {
        let session = Session::from_page_path("/game/friday-night", "alice", decode).unwrap();
        assert_eq!(session.game_id().as_str(), "friday-night");
        assert_eq!(session.name(), "alice");

        assert!(Session::from_page_path("/game/", "alice", decode).is_none());
        assert!(Session::from_page_path("", "alice", decode).is_none());
        assert!(Session::from_page_path("/game/%E0%A4%A", "alice", |_| None).is_none());
    }

    #[test]
    fn encoded_game_id_is_fetched_encoded_once() {
        let session = Session::from_page_path("/game/friday%20night", "alice", decode).unwrap();
        assert_eq!(session.game_id().as_str(), "friday night");

        let path = Endpoint::GameData.path("/api", session.game_id(), |s| s.replace(' ', "%20"));
        assert_eq!(path, "/api/friday%20night/gamedata");
    }

    #[test]
    fn seat_follows_player_names() {
        let game = GameSnapshot {
            player_names: vec!["bob".into(), "alice".into()],
            ..Default::default()
        };
        assert_eq!(Session::new(GameId::new("g"), "alice").seat(&game), Some(1));
        assert_eq!(Session::new(GameId::new("g"), "carol").seat(&game), None);
    }
}
