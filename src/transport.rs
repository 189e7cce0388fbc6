//! The three calls the client makes to the game server

use futures::future::LocalBoxFuture;

use hanabi_protocol::{GameId, GameSnapshot, PlayRequest};

use crate::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET {root}/{game}/gamedata`
    GameData,
    /// `POST {root}/{game}/play`
    Play,
    /// `POST {root}/{game}/join/{name}`
    Join(&'a str),
}

impl<'a> Endpoint<'a> {
    /// Unencoded path segments below the API root
    pub fn segments(self, game: &'a GameId) -> Vec<&'a str> {
        match self {
            Self::GameData => vec![game.as_str(), "gamedata"],
            Self::Play => vec![game.as_str(), "play"],
            Self::Join(name) => vec![game.as_str(), "join", name],
        }
    }

    pub fn path(self, api_root: &str, game: &'a GameId, encode: impl Fn(&str) -> String) -> String {
        let mut path = api_root.trim_end_matches('/').to_owned();
        for segment in self.segments(game) {
            path.push('/');
            path.push_str(&encode(segment));
        }
        path
    }
}

/// Futures are not `Send`, the client runs on a single-threaded event loop.
pub trait Transport {
    fn fetch_snapshot<'a>(
        &'a self,
        game: &'a GameId,
    ) -> LocalBoxFuture<'a, Result<GameSnapshot, ClientError>>;

    /// The response body carries nothing, only success matters
    fn submit<'a>(
        &'a self,
        game: &'a GameId,
        request: &'a PlayRequest,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>>;

    fn join<'a>(&'a self, game: &'a GameId, name: &'a str) -> LocalBoxFuture<'a, Result<(), ClientError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        let game = GameId::new("tuesday");
        let plain = |s: &str| s.to_owned();

        assert_eq!(Endpoint::GameData.path("/api", &game, plain), "/api/tuesday/gamedata");
        assert_eq!(Endpoint::Play.path("/api/", &game, plain), "/api/tuesday/play");
        assert_eq!(
            Endpoint::Join("ann marie").path("/api", &game, |s| s.replace(' ', "%20")),
            "/api/tuesday/join/ann%20marie"
        );
    }
}
