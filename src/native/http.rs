use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::{Response, Url};

use hanabi_protocol::{GameId, GameSnapshot, PlayRequest};

use crate::transport::{Endpoint, Transport};
use crate::{ClientConfig, ClientError};

/// Game server API over plain HTTP
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
    api_root: String,
}

impl HttpTransport {
    pub fn new(server: &str, config: &ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(server)
            .map_err(|err| ClientError::Transport(format!("invalid server url {:?}: {}", server, err)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::Transport(format!("{} cannot be a base url", base)));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
            api_root: config.api_root.clone(),
        })
    }

    fn url<'a>(&self, endpoint: Endpoint<'a>, game: &'a GameId) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(self.api_root.split('/').filter(|s| !s.is_empty()))
                .extend(endpoint.segments(game));
        }
        url
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

fn successful(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status.as_u16()))
    }
}

impl Transport for HttpTransport {
    fn fetch_snapshot<'a>(
        &'a self,
        game: &'a GameId,
    ) -> LocalBoxFuture<'a, Result<GameSnapshot, ClientError>> {
        async move {
            let url = self.url(Endpoint::GameData, game);
            let response = self.http.get(url).send().await.map_err(transport_error)?;
            let body = successful(response)?
                .bytes()
                .await
                .map_err(transport_error)?;
            Ok(serde_json::from_slice(&body)?)
        }
        .boxed_local()
    }

    fn submit<'a>(
        &'a self,
        game: &'a GameId,
        request: &'a PlayRequest,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        async move {
            let url = self.url(Endpoint::Play, game);
            let response = self
                .http
                .post(url)
                .json(request)
                .send()
                .await
                .map_err(transport_error)?;
            successful(response).map(drop)
        }
        .boxed_local()
    }

    fn join<'a>(&'a self, game: &'a GameId, name: &'a str) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        async move {
            let url = self.url(Endpoint::Join(name), game);
            let response = self.http.post(url).send().await.map_err(transport_error)?;
            successful(response).map(drop)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_below_api_root() {
        let http = HttpTransport::new("http://localhost:8000", &ClientConfig::default()).unwrap();
        let game = GameId::new("g1");

        assert_eq!(
            http.url(Endpoint::GameData, &game).as_str(),
            "http://localhost:8000/api/g1/gamedata"
        );
        assert_eq!(
            http.url(Endpoint::Join("ann marie"), &game).as_str(),
            "http://localhost:8000/api/g1/join/ann%20marie"
        );
    }

    #[test]
    fn server_may_live_below_a_path() {
        let config = ClientConfig {
            api_root: "/v2/api/".to_owned(),
            ..Default::default()
        };
        let http = HttpTransport::new("https://example.org/hanabi/", &config).unwrap();
        assert_eq!(
            http.url(Endpoint::Play, &GameId::new("x")).as_str(),
            "https://example.org/hanabi/v2/api/x/play"
        );
    }

    #[test]
    fn rejects_unusable_server_url() {
        assert!(HttpTransport::new("not a url", &ClientConfig::default()).is_err());
        assert!(HttpTransport::new("mailto:someone@example.org", &ClientConfig::default()).is_err());
    }
}
