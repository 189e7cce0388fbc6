use serde::Serialize;

use hanabi_protocol::{Card, GameSnapshot, HintData};

/// A single card as drawn on the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub card: Card,
    /// Style key, e.g. `color-red`
    pub color_class: String,
    /// Someone has told the owner this card's color
    pub hinted_color: bool,
    /// Someone has told the owner this card's number
    pub hinted_number: bool,
    pub draggable: bool,
}

impl CardView {
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        ["card", self.color_class.as_str()]
            .into_iter()
            .chain(self.hinted_color.then_some("hinted-color"))
            .chain(self.hinted_number.then_some("hinted-number"))
    }

    /// Attached to the element so a drop can recover the card without a lookup
    pub fn payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.card)
    }
}

pub fn render_card(card: &Card, game: &GameSnapshot) -> CardView {
    let hints = game.given_hints.get(&card.uuid).map_or(&[][..], Vec::as_slice);

    CardView {
        card: card.clone(),
        color_class: format!("color-{}", card.color.class_key()),
        hinted_color: hints.iter().any(|h| matches!(h, HintData::Color(_))),
        hinted_number: hints.iter().any(|h| matches!(h, HintData::Number(_))),
        draggable: false,
    }
}
