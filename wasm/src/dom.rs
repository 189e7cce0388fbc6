//! Writes a rendered board into the page

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

use hanabi_client::render::{CardView, HintTarget};
use hanabi_client::Board;

use crate::events;

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub(crate) fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no #{}", id)))
}

/// Redraw everything the board describes. Elements are rebuilt, not patched.
pub fn apply(board: &Board) -> Result<(), JsValue> {
    let document = document()?;

    let hints = by_id(&document, "hints")?;
    hints.set_inner_html("");
    for _ in 0..board.tokens {
        let token = document.create_element("img")?;
        token.set_class_name("token");
        token.set_attribute("src", "/time_token.png")?;
        hints.append_child(&token)?;
    }

    let fuses: HtmlElement = by_id(&document, "fuses")?.dyn_into()?;
    let style = fuses.style();
    style.set_property("background-image", &format!("url('{}')", board.fuse.image))?;
    style.set_property("background-size", "80px 80px")?;
    fuses.set_inner_text(&board.fuse.label.map(|n| n.to_string()).unwrap_or_default());

    let discard = by_id(&document, "discard")?;
    discard.set_inner_html("");
    for view in &board.discard {
        let element = card(&document, view)?;
        discard.append_child(&element)?;
    }

    by_id(&document, "deck")?.set_text_content(Some(&board.deck.to_string()));

    let seats = by_id(&document, "players")?.children();
    for rack in &board.racks {
        let Some(tray) = seat_part(&seats, rack.player, ".cardrack")? else {
            log::debug!("No seat element for player {}", rack.player);
            continue;
        };
        tray.class_list()
            .toggle_with_force("player-other", !rack.interactive)?;
        tray.set_inner_html("");
        for view in &rack.cards {
            let element = card(&document, view)?;
            tray.append_child(&element)?;
        }
    }

    for (player, tag) in board.names.iter().enumerate() {
        if let Some(name) = seat_part(&seats, player, ".playername")? {
            name.set_text_content(Some(&tag.name));
            name.class_list().toggle_with_force("activeplayer", tag.active)?;
        }
    }

    for pile in &board.played {
        let selector = format!("#played > .cardrack .color-{}", pile.color.class_key());
        if let Some(top) = document.query_selector(&selector)? {
            top.set_text_content(Some(&pile.number.to_string()));
            if let Some(top) = top.dyn_ref::<HtmlElement>() {
                top.style().remove_property("display")?;
            }
        }
    }

    let targets = by_id(&document, "hintplayer")?;
    targets.set_inner_html("");
    for target in &board.hint_targets {
        let option = document.create_element("option")?;
        option.set_text_content(Some(target.label()));
        if let HintTarget::Player(name) = target {
            option.set_attribute("value", name)?;
        }
        targets.append_child(&option)?;
    }

    let log = by_id(&document, "gamelog")?;
    log.set_inner_html("");
    for line in &board.log {
        let item = document.create_element("li")?;
        item.set_text_content(Some(line));
        log.append_child(&item)?;
    }
    log.set_scroll_top(log.scroll_height());

    Ok(())
}

fn seat_part(
    seats: &web_sys::HtmlCollection,
    player: usize,
    selector: &str,
) -> Result<Option<Element>, JsValue> {
    match seats.item(player as u32) {
        Some(seat) => seat.query_selector(selector),
        None => Ok(None),
    }
}

fn card(document: &Document, view: &CardView) -> Result<Element, JsValue> {
    let element: HtmlElement = document.create_element("div")?.dyn_into()?;
    for class in view.classes() {
        element.class_list().add_1(class)?;
    }
    element.set_inner_text(&view.card.number.to_string());
    let payload = view
        .payload()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    element.set_attribute("data-card", &payload)?;
    element.set_draggable(view.draggable);
    if view.draggable {
        events::watch_drag_end(&element);
    }
    Ok(element.into())
}

/// Name in the hint target selector, empty if nothing is selected
pub fn selected_hint_target() -> Result<String, JsValue> {
    let select: HtmlSelectElement = by_id(&document()?, "hintplayer")?.dyn_into()?;
    Ok(select.value())
}
