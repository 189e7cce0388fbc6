use std::env;

use crate::ClientConfig;

/// Environment variables:
/// - `HANABI_SERVER` - Server base url (default: `http://127.0.0.1:8000`)
/// - `HANABI_API_ROOT` - API prefix on the server (default: `/api`)
/// - `HANABI_POLL_MS` - Poll interval in milliseconds (default: 1000)
/// - `HANABI_GAME` - Game to open (required)
/// - `HANABI_NAME` - Name to join under; spectate if unset
#[derive(Clone, Debug)]
pub struct TerminalConfig {
    pub server: String,
    pub game: Option<String>,
    pub name: Option<String>,
    pub client: ClientConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            server: "http://127.0.0.1:8000".to_owned(),
            game: None,
            name: None,
            client: ClientConfig::default(),
        }
    }
}

impl TerminalConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(server) = read_env::<String>("HANABI_SERVER") {
            config.server = server;
        }
        if let Some(root) = read_env::<String>("HANABI_API_ROOT") {
            config.client.api_root = root;
        }
        if let Some(ms) = read_env::<u64>("HANABI_POLL_MS") {
            config.client.poll_interval_ms = ms.max(1);
        }
        config.game = read_env::<String>("HANABI_GAME").filter(|g| !g.is_empty());
        config.name = read_env::<String>("HANABI_NAME").filter(|n| !n.is_empty());

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
