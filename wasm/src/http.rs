use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use hanabi_client::transport::{Endpoint, Transport};
use hanabi_client::{ClientConfig, ClientError, GameId, GameSnapshot, PlayRequest};

/// Game server API through the browser's `fetch`, relative to the page origin
pub struct FetchTransport {
    api_root: String,
}

impl FetchTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api_root: config.api_root.clone(),
        }
    }

    fn path(&self, endpoint: Endpoint<'_>, game: &GameId) -> String {
        endpoint.path(&self.api_root, game, |segment| {
            js_sys::encode_uri_component(segment).into()
        })
    }
}

fn js_error(err: JsValue) -> ClientError {
    ClientError::Transport(format!("{:?}", err))
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, ClientError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    if method != "GET" {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ClientError::Transport("no window".to_owned()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if response.ok() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status()))
    }
}

impl Transport for FetchTransport {
    fn fetch_snapshot<'a>(
        &'a self,
        game: &'a GameId,
    ) -> LocalBoxFuture<'a, Result<GameSnapshot, ClientError>> {
        async move {
            let response = send("GET", &self.path(Endpoint::GameData, game), None).await?;
            let text = JsFuture::from(response.text().map_err(js_error)?)
                .await
                .map_err(js_error)?
                .as_string()
                .ok_or(ClientError::Malformed("response body is not text"))?;
            Ok(serde_json::from_str(&text)?)
        }
        .boxed_local()
    }

    fn submit<'a>(
        &'a self,
        game: &'a GameId,
        request: &'a PlayRequest,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        async move {
            let body = serde_json::to_string(request)?;
            send("POST", &self.path(Endpoint::Play, game), Some(body))
                .await
                .map(drop)
        }
        .boxed_local()
    }

    fn join<'a>(&'a self, game: &'a GameId, name: &'a str) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        async move {
            send("POST", &self.path(Endpoint::Join(name), game), None)
                .await
                .map(drop)
        }
        .boxed_local()
    }
}
