//! Plain text rendering of a [`Board`] for the terminal front end

use std::io::{self, Write};

use hanabi_protocol::PlayerIndex;

use crate::render::{Board, CardView};

/// Lines of the move log kept on screen, newest last
pub const LOG_TAIL: usize = 8;

/// Shown for seats nobody has joined yet
const EMPTY_SEAT: &str = "(open seat)";

pub fn draw(board: &Board, seat: Option<PlayerIndex>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(
        out,
        "hints {:<2} fuses {:<2} deck {}",
        board.tokens,
        board.fuse.label.map_or_else(|| "-".to_owned(), |n| n.to_string()),
        board.deck
    )?;

    let played: Vec<String> = board
        .played
        .iter()
        .map(|pile| format!("{} {}", pile.color, pile.number))
        .collect();
    writeln!(out, "played: {}", joined_or_dash(&played))?;

    let discard: Vec<String> = board.discard.iter().map(face).collect();
    writeln!(out, "discard: {}", joined_or_dash(&discard))?;
    writeln!(out)?;

    for rack in &board.racks {
        let tag = board.names.get(rack.player);
        let marker = if tag.is_some_and(|t| t.active) { '>' } else { ' ' };
        let name = tag.map_or(EMPTY_SEAT, |t| t.name.as_str());
        let you = if Some(rack.player) == seat { " (you)" } else { "" };
        let cards: Vec<String> = if rack.interactive {
            rack.cards
                .iter()
                .enumerate()
                .map(|(i, view)| format!("{}:{}", i + 1, concealed(view)))
                .collect()
        } else {
            rack.cards.iter().map(face).collect()
        };
        writeln!(out, "{} {}{}: {}", marker, name, you, joined_or_dash(&cards))?;
    }

    let targets: Vec<&str> = board.hint_targets.iter().map(|t| t.label()).collect();
    if !targets.is_empty() {
        writeln!(out, "hint to: {}", targets.join(", "))?;
    }
    writeln!(out)?;

    let skip = board.log.len().saturating_sub(LOG_TAIL);
    for line in &board.log[skip..] {
        writeln!(out, "  {}", line)?;
    }
    out.flush()
}

fn face(view: &CardView) -> String {
    format!("{} {}", view.card.color, view.card.number)
}

/// Own cards show only what has been hinted
fn concealed(view: &CardView) -> String {
    let color = if view.hinted_color {
        view.card.color.to_string()
    } else {
        "?".to_owned()
    };
    let number = if view.hinted_number {
        view.card.number.to_string()
    } else {
        "?".to_owned()
    };
    format!("{} {}", color, number)
}

fn joined_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_owned()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use hanabi_protocol::{Color, HintData, Move, PlayerTurn};

    use super::*;
    use crate::render::render;
    use crate::testing::{card, card_id, game};

    fn text(board: &Board, seat: Option<PlayerIndex>) -> String {
        let mut out = Vec::new();
        draw(board, seat, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn own_cards_are_hidden_until_hinted() {
        let mut game = game(&["a", "b"]);
        game.given_hints.insert(card_id(1), vec![HintData::Number(1)]);

        let screen = text(&render(&game, Some(0)), Some(0));
        assert!(screen.contains("> a (you): 1:? ?, 2:? 1"));
        assert!(screen.contains("  b: Blue 2, Red 1"));
        assert!(screen.contains("hint to: b"));
    }

    #[test]
    fn open_seats_are_listed() {
        let mut game = game(&["a", "b", "c"]);
        game.player_names.truncate(1);

        let screen = text(&render(&game, Some(0)), Some(0));
        assert!(screen.contains("> a (you): 1:? ?, 2:? ?"));
        assert_eq!(screen.matches("  (open seat): Blue 2, Red 1").count(), 2);
    }

    #[test]
    fn counters_and_piles() {
        let mut game = game(&["a", "b"]);
        game.fuses = 0;
        game.played.insert(Color::Green, Some(3));
        game.discard.push(card(99, Color::White, 4));

        let screen = text(&render(&game, None), None);
        assert!(screen.contains("hints 8  fuses -  deck 40"));
        assert!(screen.contains("played: Green 3"));
        assert!(screen.contains("discard: White 4"));
    }

    #[test]
    fn log_shows_only_the_tail() {
        let mut game = game(&["a", "b"]);
        game.moves = (0..12)
            .map(|i| PlayerTurn {
                player: i % 2,
                turn: Move::Discard(card(100 + i as u128, Color::Yellow, 1)),
            })
            .collect();

        let board = render(&game, None);
        let screen = text(&board, None);
        let shown = screen.lines().filter(|l| l.contains("discarded")).count();
        assert_eq!(shown, LOG_TAIL);
        assert!(screen.ends_with(&format!("  {}\n", board.log.last().unwrap())));
    }
}
