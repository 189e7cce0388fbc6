use std::str::FromStr;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use hanabi_protocol::{Card, HintData};

use crate::render::Board;
use crate::{moves, Client, ClientError, Transport};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the card at this position of the own rack, counting from 1
    Play(usize),
    /// Discard the card at this position of the own rack, counting from 1
    Discard(usize),
    Hint { target: String, data: HintData },
    Refresh,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let position = |word: Option<&str>| {
            word.and_then(|w| w.parse::<usize>().ok())
                .filter(|&p| p > 0)
                .ok_or_else(|| "expected a card position, counting from 1".to_owned())
        };

        match words.next() {
            Some("play" | "p") => Ok(Self::Play(position(words.next())?)),
            Some("discard" | "d") => Ok(Self::Discard(position(words.next())?)),
            Some("hint" | "h") => {
                let (Some(target), Some(value), None) = (words.next(), words.next(), words.next())
                else {
                    return Err("usage: hint <player> <color|number>".to_owned());
                };
                let data = moves::parse_hint(value).map_err(|err| err.to_string())?;
                Ok(Self::Hint {
                    target: target.to_owned(),
                    data,
                })
            }
            Some("refresh" | "r") => Ok(Self::Refresh),
            Some("quit" | "q") => Ok(Self::Quit),
            Some(other) => Err(format!("unknown command {:?}", other)),
            None => Err("empty command".to_owned()),
        }
    }
}

/// Runs until `Quit` or until the command channel closes.
/// Timer ticks and commands are handled one at a time.
pub async fn run<T: Transport>(
    client: &Client<T>,
    mut commands: mpsc::Receiver<Command>,
    mut draw: impl FnMut(&Board),
) {
    let mut ticker = time::interval(client.config().poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(board) = client.poll().await {
                    draw(&board);
                }
            }
            command = commands.recv() => {
                let command = match command {
                    None | Some(Command::Quit) => break,
                    Some(command) => command,
                };
                match execute(client, command).await {
                    Ok(Some(board)) => draw(&board),
                    Ok(None) => {}
                    Err(err) => log::warn!("{}", err),
                }
            }
        }
    }
}

async fn execute<T: Transport>(client: &Client<T>, command: Command) -> Result<Option<Board>, ClientError> {
    match command {
        Command::Play(position) => match own_card(client, position)? {
            Some(card) => client.play(card).await,
            None => Ok(None),
        },
        Command::Discard(position) => match own_card(client, position)? {
            Some(card) => client.discard(card).await,
            None => Ok(None),
        },
        Command::Hint { target, data } => client.give_hint(data, &target).await,
        Command::Refresh => Ok(client.refresh().await.or_else(|| client.board())),
        Command::Quit => Ok(None),
    }
}

/// Card at a rack position as displayed. `None` when it is not our turn,
/// the same way a drop is refused in the browser.
fn own_card<T: Transport>(client: &Client<T>, position: usize) -> Result<Option<Card>, ClientError> {
    let board = client.board().ok_or(ClientError::NoSnapshot)?;
    let seat = client.seat().ok_or(ClientError::NotSeated)?;

    if !client.is_my_turn() {
        log::warn!("Not your turn");
        return Ok(None);
    }

    let rack = board.rack_of(seat).ok_or(ClientError::NotSeated)?;
    if !rack.interactive {
        log::warn!("The game is over");
        return Ok(None);
    }

    position
        .checked_sub(1)
        .and_then(|i| rack.cards.get(i))
        .map(|view| Some(view.card.clone()))
        .ok_or(ClientError::NoSuchCard(position))
}
