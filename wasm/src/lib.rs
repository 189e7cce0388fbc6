//! Browser front end. Polls the game server with `fetch` and redraws the
//! page from the rendered board. Cards are moved by drag and drop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use hanabi_client::{Client, ClientConfig, Session};

mod api;
mod dom;
mod events;
mod http;

use self::http::FetchTransport;

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(msg: String);

    type Error;

    #[wasm_bindgen(constructor)]
    fn new() -> Error;

    #[wasm_bindgen(structural, method, getter)]
    fn stack(error: &Error) -> String;
}

pub fn panic_hook(info: &std::panic::PanicHookInfo) {
    let mut msg = info.to_string();

    msg.push_str("\n\nStack:\n\n");
    let e = Error::new();
    let stack = e.stack();
    msg.push_str(&stack);
    msg.push_str("\n\n");
    error(msg);
}

/// Forwards the `log` facade to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            log::Level::Error => error(line),
            log::Level::Warn => warn(&line),
            _ => log(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

pub(crate) type PageClient = Client<FetchTransport>;

thread_local! {
    static CLIENT: RefCell<Option<Rc<PageClient>>> = RefCell::new(None);
}

/// The client of this page, once `main` has set it up
pub(crate) fn client() -> Option<Rc<PageClient>> {
    CLIENT.with(|c| c.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(panic_hook));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    let window = web_sys::window().ok_or("no window")?;
    let path = window.location().pathname()?;

    // Cancelling the prompt leaves us watching without a seat
    let name = window.prompt_with_message("what's your name?")?;
    let session = Session::from_page_path(&path, name.clone().unwrap_or_default(), |segment| {
        js_sys::decode_uri_component(segment).ok().map(String::from)
    })
        .ok_or_else(|| JsValue::from_str(&format!("no game id in {:?}", path)))?;

    let config = ClientConfig::default();
    let transport = FetchTransport::new(&config);
    let client = Rc::new(Client::new(config, session, transport));
    CLIENT.with(|c| *c.borrow_mut() = Some(client.clone()));

    {
        let client = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if name.is_some() {
                if let Err(err) = client.join().await {
                    log::warn!("Joining failed: {}", err);
                }
            }
            if let Some(board) = client.refresh().await {
                events::redraw(&board);
            }
        });
    }

    events::install(&window, client)?;
    console_log!("hanabi client started");
    Ok(())
}
