//! Terminal front end: HTTP over reqwest, driven by a tokio event loop

pub mod config;
pub mod driver;
pub mod http;
pub mod term;

pub use self::config::TerminalConfig;
pub use self::driver::Command;
pub use self::http::HttpTransport;
