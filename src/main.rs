#![deny(unused_must_use)]

use anyhow::{anyhow, Context};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use hanabi_client::native::{driver, term, Command, HttpTransport, TerminalConfig};
use hanabi_client::{Client, GameId, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let config = TerminalConfig::from_env();
    let game = config
        .game
        .clone()
        .ok_or_else(|| anyhow!("HANABI_GAME is not set"))?;

    let transport = HttpTransport::new(&config.server, &config.client)
        .with_context(|| format!("connecting to {}", config.server))?;
    let session = Session::new(GameId::new(game), config.name.clone().unwrap_or_default());
    let client = Client::new(config.client.clone(), session, transport);

    if config.name.is_some() {
        if let Err(err) = client.join().await {
            log::warn!("Joining failed: {}", err);
        }
    } else {
        log::info!("No HANABI_NAME given, watching only");
    }

    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(read_commands(tx));

    driver::run(&client, rx, |board| {
        let mut out = std::io::stdout().lock();
        if let Err(err) = term::draw(board, client.seat(), &mut out) {
            log::error!("Drawing failed: {}", err);
        }
    })
    .await;

    Ok(())
}

async fn read_commands(tx: mpsc::Sender<Command>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Reading stdin failed: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if tx.send(command).await.is_err() {
                    break;
                }
            }
            Err(err) => log::warn!("{}", err),
        }
    }
}
