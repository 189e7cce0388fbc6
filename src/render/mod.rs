//! Projection of a game snapshot onto the table the player sees.
//!
//! Everything here is a pure function of the snapshot and the local seat.
//! Front ends rebuild their whole view from a [`Board`] instead of patching it.

mod card;
mod history;

use serde::Serialize;

use hanabi_protocol::{Color, GameSnapshot, Number, PlayerIndex};

use crate::guard;

pub use self::card::{render_card, CardView};
pub use self::history::{describe, move_log};

/// Label of the "nobody selected" hint target
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Remaining hint tokens, one glyph each
    pub tokens: u8,
    pub fuse: FuseIndicator,
    pub discard: Vec<CardView>,
    pub deck: usize,
    pub racks: Vec<Rack>,
    pub played: Vec<PlayedPile>,
    pub names: Vec<NameTag>,
    pub hint_targets: Vec<HintTarget>,
    pub log: Vec<String>,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuseIndicator {
    /// Picture for the number of fuses left
    pub image: String,
    /// Hidden once the fuses are gone, the game over line says enough
    pub label: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rack {
    pub player: PlayerIndex,
    /// Newest card first
    pub cards: Vec<CardView>,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedPile {
    pub color: Color,
    pub number: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTag {
    pub name: String,
    /// Whose turn it is
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HintTarget {
    Placeholder,
    Player(String),
}

impl HintTarget {
    pub fn label(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Player(name) => name,
        }
    }
}

impl Board {
    pub fn rack_of(&self, player: PlayerIndex) -> Option<&Rack> {
        self.racks.iter().find(|rack| rack.player == player)
    }
}

pub fn render(game: &GameSnapshot, seat: Option<PlayerIndex>) -> Board {
    Board {
        tokens: game.hints,
        fuse: FuseIndicator {
            image: format!("/fuse{}.png", game.fuses),
            label: (game.fuses > 0).then_some(game.fuses),
        },
        discard: game.discard.iter().map(|c| render_card(c, game)).collect(),
        deck: game.deck,
        racks: racks(game, seat),
        played: game
            .played
            .iter()
            .filter_map(|(&color, &number)| Some(PlayedPile { color, number: number? }))
            .collect(),
        names: game
            .player_names
            .iter()
            .enumerate()
            .map(|(i, name)| NameTag {
                name: name.clone(),
                active: i == game.turn,
            })
            .collect(),
        hint_targets: hint_targets(game, seat),
        log: move_log(game),
        game_over: game.is_over(),
    }
}

fn racks(game: &GameSnapshot, seat: Option<PlayerIndex>) -> Vec<Rack> {
    game.players
        .iter()
        .enumerate()
        .map(|(player, hand)| {
            let interactive = guard::rack_is_interactive(game, seat, player);
            let cards = hand
                .cards
                .iter()
                .rev()
                .map(|card| CardView {
                    draggable: interactive,
                    ..render_card(card, game)
                })
                .collect();
            Rack {
                player,
                cards,
                interactive,
            }
        })
        .collect()
}

fn hint_targets(game: &GameSnapshot, seat: Option<PlayerIndex>) -> Vec<HintTarget> {
    let placeholder = (game.players.len() > 2).then_some(HintTarget::Placeholder);
    let others = game
        .player_names
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != seat)
        .map(|(_, name)| HintTarget::Player(name.clone()));
    placeholder.into_iter().chain(others).collect()
}
