use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("undecodable snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(&'static str),

    #[error("no game state received yet")]
    NoSnapshot,

    #[error("not seated in this game")]
    NotSeated,

    #[error("no player named {0:?}")]
    UnknownPlayer(String),

    #[error("no card at position {0}")]
    NoSuchCard(usize),

    #[error("no hint target selected")]
    NoHintTarget,

    #[error("invalid hint {0:?}")]
    InvalidHint(String),
}
