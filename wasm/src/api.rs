//! Functions the page calls directly, e.g. from the hint buttons

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use hanabi_client::moves;

use crate::{dom, events};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Hint a color name or a number to the player picked in `#hintplayer`
#[wasm_bindgen]
pub async fn give_hint(value: JsValue) -> Result<(), JsValue> {
    let client = crate::client().ok_or("client not set up")?;

    let raw = match value.as_f64() {
        Some(n) if n.fract() == 0.0 => (n as i64).to_string(),
        _ => value.as_string().ok_or("hint must be a color or a number")?,
    };
    let data = moves::parse_hint(&raw).map_err(js_error)?;
    let target = dom::selected_hint_target()?;

    let result = client.give_hint(data, &target).await;
    let failure = result.as_ref().err().map(js_error);
    events::settle(&client, result);
    failure.map_or(Ok(()), Err)
}

/// Fetch now, even while a card is being dragged
#[wasm_bindgen]
pub async fn refresh() -> Result<(), JsValue> {
    let client = crate::client().ok_or("client not set up")?;
    if let Some(board) = client.refresh().await.or_else(|| client.redraw()) {
        events::redraw(&board);
    }
    Ok(())
}

/// The current board as a plain JS object, `null` before the first snapshot
#[wasm_bindgen]
pub fn board() -> Result<JsValue, JsValue> {
    let client = crate::client().ok_or("client not set up")?;
    match client.board() {
        Some(board) => JsValue::from_serde(&board).map_err(js_error),
        None => Ok(JsValue::null()),
    }
}
