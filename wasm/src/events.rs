//! Page event wiring: the poll timer and drag and drop of own cards

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, EventTarget, HtmlElement, Window};

use hanabi_client::protocol::Card;
use hanabi_client::{Board, ClientError};

use crate::dom;
use crate::PageClient;

const CARD_DATA: &str = "data-card";

thread_local! {
    /// Card element being dragged, removed on a drop before the server answers
    static DRAGGED: RefCell<Option<Element>> = RefCell::new(None);

    /// `dragend` handler shared by all draggable cards
    static DRAG_END: RefCell<Option<js_sys::Function>> = RefCell::new(None);
}

#[derive(Debug, Clone, Copy)]
enum DropTarget {
    Discard,
    Played,
}

impl DropTarget {
    fn id(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Played => "played",
        }
    }
}

pub fn install(window: &Window, client: Rc<PageClient>) -> Result<(), JsValue> {
    let document = dom::document()?;

    let players = dom::by_id(&document, "players")?;
    {
        let client = client.clone();
        listen(&players, "dragstart", move |e: DragEvent| {
            let Some(card) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(payload) = card.get_attribute(CARD_DATA) else {
                return;
            };
            if let Some(data) = e.data_transfer() {
                if let Err(err) = data.set_data("text/plain", &payload) {
                    crate::console_log!("setting drag data failed: {:?}", err);
                }
            }
            let _ = client.set_dragging(true);
            DRAGGED.with(|d| *d.borrow_mut() = Some(card));
        })?;
    }
    {
        // Set on the cards themselves, `dragend` of a card removed by the drop
        // handler does not bubble up to the rack
        let client = client.clone();
        let drag_end = Closure::<dyn FnMut(DragEvent)>::new(move |_: DragEvent| {
            DRAGGED.with(|d| d.borrow_mut().take());
            if let Some(board) = client.set_dragging(false) {
                redraw(&board);
            }
        });
        let handler: js_sys::Function = drag_end.as_ref().unchecked_ref::<js_sys::Function>().clone();
        DRAG_END.with(|d| *d.borrow_mut() = Some(handler));
        drag_end.forget();
    }

    for target in [DropTarget::Discard, DropTarget::Played] {
        let area = dom::by_id(&document, target.id())?;
        {
            let client = client.clone();
            listen(&area, "dragover", move |e: DragEvent| {
                // Default handling refuses the drop
                if client.is_my_turn() {
                    e.prevent_default();
                }
            })?;
        }
        {
            let client = client.clone();
            listen(&area, "drop", move |e: DragEvent| {
                e.prevent_default();
                dropped(&client, target, &e);
            })?;
        }
    }

    let interval = i32::try_from(client.config().poll_interval().as_millis()).unwrap_or(i32::MAX);
    let tick = Closure::<dyn FnMut()>::new(move || {
        let client = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(board) = client.poll().await {
                redraw(&board);
            }
        });
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval,
    )?;
    tick.forget();

    Ok(())
}

pub(crate) fn watch_drag_end(card: &HtmlElement) {
    DRAG_END.with(|d| card.set_ondragend(d.borrow().as_ref()));
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(DragEvent) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(DragEvent)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn dropped(client: &Rc<PageClient>, target: DropTarget, e: &DragEvent) {
    let held = client.set_dragging(false);
    let dragged = DRAGGED.with(|d| d.borrow_mut().take());

    let payload = e
        .data_transfer()
        .and_then(|data| data.get_data("text/plain").ok())
        .filter(|p| !p.is_empty())
        .or_else(|| dragged.as_ref().and_then(|el| el.get_attribute(CARD_DATA)));
    let Some(payload) = payload else {
        log::warn!("Drop without a card");
        if let Some(board) = held {
            redraw(&board);
        }
        return;
    };
    let card: Card = match serde_json::from_str(&payload) {
        Ok(card) => card,
        Err(err) => {
            log::warn!("Dropped card is unreadable: {}", err);
            if let Some(board) = held {
                redraw(&board);
            }
            return;
        }
    };

    if let Some(element) = dragged {
        element.remove();
    }

    let client = client.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = match target {
            DropTarget::Discard => client.discard(card).await,
            DropTarget::Played => client.play(card).await,
        };
        settle(&client, result);
    });
}

/// Draw the outcome of a move. Local errors redraw the last board so a card
/// removed on drop comes back.
pub(crate) fn settle(client: &PageClient, result: Result<Option<Board>, ClientError>) {
    match result {
        Ok(Some(board)) => redraw(&board),
        Ok(None) => {}
        Err(err) => {
            log::warn!("{}", err);
            if let Some(board) = client.redraw() {
                redraw(&board);
            }
        }
    }
}

pub(crate) fn redraw(board: &Board) {
    if let Err(err) = dom::apply(board) {
        crate::console_log!("drawing the board failed: {:?}", err);
    }
}
