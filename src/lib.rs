#![deny(unused_must_use)]

pub mod client;
pub mod config;
mod error;
pub mod guard;
pub mod moves;
pub mod render;
pub mod score;
pub mod session;
pub mod store;
pub mod sync;
pub mod transport;

#[cfg(feature = "native")]
pub mod native;

#[cfg(test)]
mod testing;

pub use hanabi_protocol as protocol;
pub use hanabi_protocol::{Card, Color, GameId, GameSnapshot, HintData, PlayRequest, PlayerIndex};

pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::error::ClientError;
pub use self::render::Board;
pub use self::session::Session;
pub use self::transport::Transport;
